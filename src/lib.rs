//! # Portico
//!
//! Content models and editor metadata for the Portico portal sites: a
//! main portal plus themed sub-sites, each built from a small set of
//! page types (home, article, tag index, Wikidata class pages and
//! categories) with declarative editor panels and search-index hints.
//!
//! The heavy lifting (HTTP serving, template rendering, persistence,
//! index execution) belongs to the embedding host; this workspace
//! supplies the schema, the admin metadata and the request-time context
//! queries.
//!
//! ## Crates
//!
//! - [`cms`] - page tree, stream blocks, media, panels, search hints,
//!   snippets and admin registries
//! - [`taggit`] - tags and tag assignments with cascade deletion
//! - [`home`] - the concrete content models and the [`home::Site`]
//!   aggregate tying everything together
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portico::prelude::*;
//!
//! let mut site = Site::new();
//! let home = site
//!     .create_home_page("Explore", "explore", HomePageFields::default())
//!     .await?;
//! let article = site
//!     .create_article(home.id, "First post", "first-post", date, StreamField::new())
//!     .await?;
//! site.tag_article(article.id, "rust").await?;
//! site.publish(article.id, chrono::Utc::now())?;
//! ```

pub use portico_cms as cms;
pub use portico_home as home;
pub use portico_taggit as taggit;

/// Convenient re-exports of commonly used items from every crate
pub mod prelude {
	pub use portico_cms::prelude::*;
	pub use portico_home::prelude::*;
	pub use portico_taggit::prelude::*;
}
