//! Taggable trait definition
//!
//! Trait for records that can be tagged.

/// Trait for records that can be tagged
///
/// Records implementing this trait can be associated with tags via
/// `TaggedItem`. The trait provides the content-type discriminator and
/// object identifier needed for the polymorphic many-to-many relationship.
///
/// # Examples
///
/// ```rust,ignore
/// use portico_taggit::Taggable;
///
/// struct ArticlePage {
///     id: uuid::Uuid,
/// }
///
/// impl Taggable for ArticlePage {
///     fn content_type_name() -> &'static str {
///         "ArticlePage"
///     }
///
///     fn object_id(&self) -> String {
///         self.id.to_string()
///     }
/// }
/// ```
pub trait Taggable {
	/// Returns the content type name used as discriminator in `TaggedItem`
	///
	/// This should be a stable, unique identifier for the record type.
	/// Typically the struct name (e.g., "ArticlePage").
	fn content_type_name() -> &'static str;

	/// Returns the identifier of this instance within its content type
	///
	/// Used as `object_id` in `TaggedItem` to identify the specific
	/// instance being tagged.
	fn object_id(&self) -> String;
}
