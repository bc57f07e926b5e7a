//! # Portico home app
//!
//! Content models for the Portico portal sites: the main portal home page
//! and themed sub-site home pages, article pages with block-structured
//! bodies, the tag-index listing, Wikidata-backed class pages and the two
//! category flavors. The crate also owns the [`site::Site`] aggregate that
//! wires the page tree, media library and tag store together and enforces
//! the referential rules between them, plus the relational schema the host
//! persists these records with.

pub mod admin;
pub mod blocks;
pub mod error;
pub mod models;
pub mod schema;
pub mod settings;
pub mod site;

pub use error::{SiteError, SiteResult};
pub use models::{
	ArticleCategory, ArticlePage, ArticleTagIndexPage, BlogCategory, HomePage, WikidataClass,
};
pub use site::{ArticleSummary, ArticleUpdate, Site};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::admin::{register_page_types, register_snippets};
	pub use crate::blocks::{WikidataQueryBlock, block_library};
	pub use crate::error::{SiteError, SiteResult};
	pub use crate::models::{
		ArticleCategory, ArticleCategoryFields, ArticlePage, ArticleTagIndexPage, BlogCategory,
		HomePage, HomePageFields, WikidataClass,
	};
	pub use crate::settings::SiteSettings;
	pub use crate::site::{ArticleSummary, ArticleUpdate, Site};
}
