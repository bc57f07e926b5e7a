//! # Portico CMS
//!
//! Content-management primitives for the Portico portal sites,
//! inspired by Wagtail.
//!
//! ## Features
//!
//! - **Hierarchical Page Tree**: Parent-child page relationships with slug paths
//!   and draft/live publication state
//! - **StreamField Content Blocks**: Polymorphic, ordered content blocks
//!   (Wagtail StreamField equivalent) with a typed built-in block set
//! - **Media Library**: Image and document records referenced by pages
//! - **Editor Panels**: Declarative field groupings consumed by the admin UI
//! - **Search Hints**: Declarative searchable/filterable field sets consumed
//!   by the index builder
//! - **Snippets**: Reusable, non-hierarchical records exposed to the admin
//!
//! ## Architecture
//!
//! ```text
//! portico-cms
//! ├── pages     - Hierarchical page tree, publication state, Page trait
//! ├── blocks    - StreamField-style content blocks
//! ├── media     - Image/document records
//! ├── panels    - Declarative editor-panel metadata
//! ├── search    - Search-index field declarations
//! ├── snippets  - Reusable non-page records
//! ├── admin     - Admin registries and panel-driven form rendering
//! └── request   - Query parameters and template-context helpers
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portico_cms::prelude::*;
//!
//! let mut tree = PageTree::new();
//! let home = tree
//!     .add_page(None, "Home".to_string(), "home".to_string())
//!     .await?;
//! tree.publish(home.id, chrono::Utc::now())?;
//!
//! let mut body = StreamField::new();
//! body.add_block(StreamBlock::new("heading", serde_json::json!({"text": "Welcome"})));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

// Re-export for downstream crates
pub use serde;
pub use serde_json;

// Module declarations
pub mod admin;
pub mod blocks;
pub mod fields;
pub mod media;
pub mod pages;
pub mod panels;
pub mod request;
pub mod search;
pub mod snippets;

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items

	// Pages
	pub use crate::pages::{Page, PageId, PageNode, PageTree};

	// Blocks
	pub use crate::blocks::{Block, BlockLibrary, StreamBlock, StreamField};

	// Fields
	pub use crate::fields::RichText;

	// Media
	pub use crate::media::{Document, DocumentId, Image, ImageId, MediaLibrary};

	// Panels
	pub use crate::panels::Panel;

	// Search
	pub use crate::search::IndexedField;

	// Snippets
	pub use crate::snippets::{Snippet, SnippetDescriptor, SnippetRegistry};

	// Admin
	pub use crate::admin::{AdminPageRegistry, PageEditor, PageTypeDescriptor};

	// Request handling
	pub use crate::request::{Context, PageRequest, base_context};

	// Errors
	pub use crate::error::{CmsError, CmsResult};
}

/// CMS error types
pub mod error {
	use thiserror::Error;

	/// CMS-related errors
	#[derive(Error, Debug)]
	pub enum CmsError {
		/// Page not found
		#[error("Page not found: {0}")]
		PageNotFound(String),

		/// Slug is empty or contains path separators
		#[error("Invalid slug: {0:?}")]
		InvalidSlug(String),

		/// Block type not registered
		#[error("Block type not registered: {0}")]
		UnknownBlockType(String),

		/// Block data did not match the block type's shape
		#[error("Invalid block data for '{block_type}': {message}")]
		InvalidBlockData {
			/// Block type the data was parsed for
			block_type: String,
			/// Underlying parse error
			message: String,
		},

		/// Media record not found
		#[error("Media not found: {0}")]
		MediaNotFound(String),

		/// Generic error
		#[error("{0}")]
		Generic(String),
	}

	/// Result type for CMS operations
	pub type CmsResult<T> = Result<T, CmsError>;
}
