//! Tests for the media library

use portico_cms::error::CmsError;
use portico_cms::media::MediaLibrary;
use rstest::rstest;
use uuid::Uuid;

#[rstest]
#[tokio::test]
async fn test_image_add_get_remove_cycle() {
	// Arrange
	let mut library = MediaLibrary::new();

	// Act
	let image = library
		.add_image("Banner".to_string(), "banner.png".to_string(), Some((1920, 600)))
		.await;

	// Assert
	assert_eq!(library.image_count(), 1);
	let fetched = library.get_image(image.id).await.unwrap();
	assert_eq!(fetched.title, "Banner");
	assert_eq!(fetched.width, Some(1920));

	// Act - removal hands the record back
	let removed = library.remove_image(image.id).await.unwrap();

	// Assert
	assert_eq!(removed.id, image.id);
	assert_eq!(library.image_count(), 0);
	assert!(matches!(
		library.get_image(image.id).await,
		Err(CmsError::MediaNotFound(_))
	));
}

#[rstest]
#[tokio::test]
async fn test_document_add_get_remove_cycle() {
	// Arrange
	let mut library = MediaLibrary::new();

	// Act
	let document = library
		.add_document("Study PDF".to_string(), "study.pdf".to_string())
		.await;

	// Assert
	assert_eq!(library.document_count(), 1);
	assert_eq!(library.get_document(document.id).await.unwrap().file, "study.pdf");

	library.remove_document(document.id).await.unwrap();
	assert_eq!(library.document_count(), 0);
}

#[rstest]
#[tokio::test]
async fn test_unknown_media_lookups_error() {
	// Arrange
	let library = MediaLibrary::new();

	// Act & Assert
	assert!(matches!(
		library.get_image(Uuid::new_v4()).await,
		Err(CmsError::MediaNotFound(_))
	));
	assert!(matches!(
		library.get_document(Uuid::new_v4()).await,
		Err(CmsError::MediaNotFound(_))
	));
}
