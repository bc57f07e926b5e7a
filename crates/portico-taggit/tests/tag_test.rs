//! Unit tests for Tag model
//!
//! Tests the Tag constructors and slug derivation.

use portico_taggit::Tag;
use rstest::rstest;

/// Test Tag::new() constructor with explicit slugs
#[rstest]
#[case("rust", "rust")]
#[case("web-development", "web-dev")]
#[case("Chronic Pain", "chronic-pain")]
fn test_tag_new_constructor(#[case] name: &str, #[case] slug: &str) {
	// Arrange & Act
	let tag = Tag::new(name, slug);

	// Assert
	assert_eq!(tag.name, name);
	assert_eq!(tag.slug, slug);
	assert!(tag.id.is_none());
}

/// Test Tag::from_name() slug derivation
#[rstest]
#[case("rust", "rust")]
#[case("Chronic Pain", "chronic-pain")]
#[case("Web 2.0", "web-2-0")]
#[case("C'est la vie", "c-est-la-vie")]
fn test_tag_from_name_derives_slug(#[case] name: &str, #[case] expected_slug: &str) {
	// Arrange & Act
	let tag = Tag::from_name(name);

	// Assert
	assert_eq!(tag.name, name);
	assert_eq!(tag.slug, expected_slug);
}

/// Test Tag created_at field is initialized
#[test]
fn test_tag_created_at_initialized() {
	// Arrange & Act
	let tag = Tag::new("test", "test");

	// Assert
	// created_at should be set to a timestamp (not checked for exact value)
	assert!(tag.created_at.timestamp() > 0);
}

/// Test Tag clone produces identical copy
#[test]
fn test_tag_clone() {
	// Arrange
	let tag = Tag::from_name("rust");

	// Act
	let cloned = tag.clone();

	// Assert
	assert_eq!(tag, cloned);
}
