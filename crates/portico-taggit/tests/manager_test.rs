//! Integration tests for TagManager assignment and querying

use portico_taggit::{TagManager, Taggable, TaggitError};
use rstest::rstest;
use uuid::Uuid;

// Test helper: a taggable record
struct ArticleStub {
	id: Uuid,
}

impl ArticleStub {
	fn new() -> Self {
		Self { id: Uuid::new_v4() }
	}
}

impl Taggable for ArticleStub {
	fn content_type_name() -> &'static str {
		"ArticlePage"
	}

	fn object_id(&self) -> String {
		self.id.to_string()
	}
}

#[rstest]
#[tokio::test]
async fn test_add_tag_creates_tag_on_first_use() {
	// Arrange
	let mut manager = TagManager::new();
	let article = ArticleStub::new();

	// Act
	let tag = manager.add_tag(&article, "medicine").await.unwrap();

	// Assert
	assert_eq!(tag.name, "medicine");
	assert_eq!(tag.slug, "medicine");
	assert!(tag.id.is_some());
	assert_eq!(manager.tag_count(), 1);
	assert_eq!(manager.item_count(), 1);
}

#[rstest]
#[tokio::test]
async fn test_add_tag_reuses_existing_tag() {
	// Arrange
	let mut manager = TagManager::new();
	let first = ArticleStub::new();
	let second = ArticleStub::new();

	// Act
	let tag_a = manager.add_tag(&first, "medicine").await.unwrap();
	let tag_b = manager.add_tag(&second, "medicine").await.unwrap();

	// Assert - one tag row, two junction rows
	assert_eq!(tag_a.id, tag_b.id);
	assert_eq!(manager.tag_count(), 1);
	assert_eq!(manager.item_count(), 2);
}

#[rstest]
#[tokio::test]
async fn test_duplicate_assignment_errors() {
	// Arrange
	let mut manager = TagManager::new();
	let article = ArticleStub::new();
	manager.add_tag(&article, "medicine").await.unwrap();

	// Act
	let result = manager.add_tag(&article, "medicine").await;

	// Assert
	assert!(matches!(result, Err(TaggitError::DuplicateTag { .. })));
	assert_eq!(manager.item_count(), 1);
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_blank_tag_name_rejected(#[case] name: &str) {
	// Arrange
	let mut manager = TagManager::new();
	let article = ArticleStub::new();

	// Act
	let result = tokio_test::block_on(manager.add_tag(&article, name));

	// Assert
	assert!(matches!(result, Err(TaggitError::InvalidTagName(_))));
}

#[test]
fn test_overlong_tag_name_rejected() {
	// Arrange
	let mut manager = TagManager::new();
	let article = ArticleStub::new();
	let name = "x".repeat(200);

	// Act
	let result = tokio_test::block_on(manager.add_tag(&article, &name));

	// Assert
	assert!(matches!(result, Err(TaggitError::TagNameTooLong { max: 100, len: 200 })));
}

#[rstest]
#[tokio::test]
async fn test_tags_for_lists_assignment_order() {
	// Arrange
	let mut manager = TagManager::new();
	let article = ArticleStub::new();
	manager.add_tag(&article, "medicine").await.unwrap();
	manager.add_tag(&article, "reviews").await.unwrap();

	// Act
	let tags = manager.tags_for(&article).await;

	// Assert
	let names: Vec<&str> = tags.iter().map(|tag| tag.name.as_str()).collect();
	assert_eq!(names, vec!["medicine", "reviews"]);
}

#[rstest]
#[tokio::test]
async fn test_objects_tagged_filters_by_name_and_content_type() {
	// Arrange
	let mut manager = TagManager::new();
	let tagged = ArticleStub::new();
	let other = ArticleStub::new();
	manager.add_tag(&tagged, "medicine").await.unwrap();
	manager.add_tag(&other, "reviews").await.unwrap();

	// Act
	let by_tag = manager.objects_tagged("ArticlePage", "medicine").await;
	let unknown = manager.objects_tagged("ArticlePage", "nonexistent").await;
	let wrong_type = manager.objects_tagged("HomePage", "medicine").await;

	// Assert
	assert_eq!(by_tag, vec![tagged.id.to_string()]);
	assert!(unknown.is_empty());
	assert!(wrong_type.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_remove_tag_detaches_single_record() {
	// Arrange
	let mut manager = TagManager::new();
	let article = ArticleStub::new();
	manager.add_tag(&article, "medicine").await.unwrap();

	// Act
	manager.remove_tag(&article, "medicine").await.unwrap();

	// Assert - the junction row is gone, the tag itself survives
	assert_eq!(manager.item_count(), 0);
	assert_eq!(manager.tag_count(), 1);
}

#[rstest]
#[tokio::test]
async fn test_remove_tag_not_assigned_errors() {
	// Arrange
	let mut manager = TagManager::new();
	let tagged = ArticleStub::new();
	let untagged = ArticleStub::new();
	manager.add_tag(&tagged, "medicine").await.unwrap();

	// Act
	let result = manager.remove_tag(&untagged, "medicine").await;

	// Assert
	assert!(matches!(result, Err(TaggitError::TaggedItemNotFound { .. })));
}
