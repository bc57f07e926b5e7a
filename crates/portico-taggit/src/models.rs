//! Model definitions for the taggit system
//!
//! This module contains the core data models:
//! - `Tag`: Core tag entity with name and slug
//! - `TaggedItem`: Junction rows for polymorphic many-to-many relationships
//! - `Taggable`: Trait for records that can be tagged

pub mod tag;
pub mod taggable;
pub mod tagged_item;

pub use tag::Tag;
pub use taggable::Taggable;
pub use tagged_item::TaggedItem;
