//! Integration tests for cascade-delete behavior
//!
//! Junction rows are owned by both ends: deleting the tagged record or
//! the tag itself deletes the rows, and only the rows.

use portico_taggit::{TagManager, Taggable, TaggitError};
use rstest::rstest;
use uuid::Uuid;

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

/// Test cascade delete when the owning record is removed
#[rstest]
#[tokio::test]
async fn test_remove_object_cascade_deletes_junction_rows() {
	// Arrange
	let mut manager = TagManager::new();
	let article = ArticleStub::new();
	manager.add_tag(&article, "medicine").await.unwrap();
	manager.add_tag(&article, "reviews").await.unwrap();

	// Act - the owning article goes away
	let removed = manager
		.remove_object(ArticleStub::content_type_name(), &article.object_id())
		.await;

	// Assert - both junction rows are gone, the tags survive
	assert_eq!(removed, 2);
	assert_eq!(manager.item_count(), 0);
	assert_eq!(manager.tag_count(), 2);
}

/// Test cascade delete leaves other records' rows alone
#[rstest]
#[tokio::test]
async fn test_remove_object_keeps_other_records_rows() {
	// Arrange
	let mut manager = TagManager::new();
	let removed_article = ArticleStub::new();
	let kept_article = ArticleStub::new();
	manager.add_tag(&removed_article, "medicine").await.unwrap();
	manager.add_tag(&kept_article, "medicine").await.unwrap();

	// Act
	manager
		.remove_object(ArticleStub::content_type_name(), &removed_article.object_id())
		.await;

	// Assert
	assert_eq!(manager.item_count(), 1);
	let remaining = manager.objects_tagged("ArticlePage", "medicine").await;
	assert_eq!(remaining, vec![kept_article.id.to_string()]);
}

/// Test removing rows for an untagged record is a no-op
#[rstest]
#[tokio::test]
async fn test_remove_object_without_rows_is_noop() {
	// Arrange
	let mut manager = TagManager::new();
	let article = ArticleStub::new();

	// Act
	let removed = manager
		.remove_object(ArticleStub::content_type_name(), &article.object_id())
		.await;

	// Assert
	assert_eq!(removed, 0);
}

/// Test cascade delete when the tag itself is removed
#[rstest]
#[tokio::test]
async fn test_remove_tag_entirely_cascade_deletes_junction_rows() {
	// Arrange
	let mut manager = TagManager::new();
	let first = ArticleStub::new();
	let second = ArticleStub::new();
	manager.add_tag(&first, "medicine").await.unwrap();
	manager.add_tag(&second, "medicine").await.unwrap();
	manager.add_tag(&second, "reviews").await.unwrap();

	// Act
	let tag = manager.remove_tag_entirely("medicine").await.unwrap();

	// Assert - only the "reviews" row survives
	assert_eq!(tag.name, "medicine");
	assert_eq!(manager.tag_count(), 1);
	assert_eq!(manager.item_count(), 1);
	assert!(manager.objects_tagged("ArticlePage", "medicine").await.is_empty());
}

/// Test deleting an unknown tag errors
#[rstest]
#[tokio::test]
async fn test_remove_unknown_tag_errors() {
	// Arrange
	let mut manager = TagManager::new();

	// Act
	let result = manager.remove_tag_entirely("nonexistent").await;

	// Assert
	assert!(matches!(result, Err(TaggitError::TagNotFound(_))));
}
