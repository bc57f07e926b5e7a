//! Concrete content types
//!
//! One module per page family: the home pages, articles and their tag
//! index, Wikidata class pages, and the category records. Each page type
//! implements [`portico_cms::pages::Page`] and declares its editor panels
//! and search-index fields next to its stored fields.

pub mod article;
pub mod categories;
pub mod home_page;
pub mod tag_index;
pub mod wikidata;

pub use article::ArticlePage;
pub use categories::{ArticleCategory, ArticleCategoryFields, BlogCategory};
pub use home_page::{HomePage, HomePageFields};
pub use tag_index::ArticleTagIndexPage;
pub use wikidata::WikidataClass;
