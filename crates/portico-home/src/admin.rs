//! Admin registration
//!
//! Descriptors for every page type plus the registration helpers an
//! embedding admin application calls at startup.

use crate::models::BlogCategory;
use portico_cms::admin::{AdminPageRegistry, PageTypeDescriptor};
use portico_cms::pages::Page;
use portico_cms::snippets::SnippetRegistry;

/// Home pages sit at the site root only
pub struct HomePageType;

impl PageTypeDescriptor for HomePageType {
	fn type_name(&self) -> &str {
		"HomePage"
	}

	fn label(&self) -> &str {
		"Home page"
	}

	fn icon(&self) -> &str {
		"home"
	}

	fn can_create_at(&self, parent: Option<&dyn Page>) -> bool {
		parent.is_none()
	}
}

/// Articles always live under another page
pub struct ArticlePageType;

impl PageTypeDescriptor for ArticlePageType {
	fn type_name(&self) -> &str {
		"ArticlePage"
	}

	fn label(&self) -> &str {
		"Article"
	}

	fn icon(&self) -> &str {
		"doc-full"
	}

	fn can_create_at(&self, parent: Option<&dyn Page>) -> bool {
		parent.is_some()
	}
}

/// Tag-index pages
pub struct ArticleTagIndexPageType;

impl PageTypeDescriptor for ArticleTagIndexPageType {
	fn type_name(&self) -> &str {
		"ArticleTagIndexPage"
	}

	fn label(&self) -> &str {
		"Article tag index"
	}

	fn icon(&self) -> &str {
		"tag"
	}

	fn can_create_at(&self, _parent: Option<&dyn Page>) -> bool {
		true
	}
}

/// Wikidata class pages
pub struct WikidataClassType;

impl PageTypeDescriptor for WikidataClassType {
	fn type_name(&self) -> &str {
		"WikidataClass"
	}

	fn label(&self) -> &str {
		"Wikidata class"
	}

	fn icon(&self) -> &str {
		"table"
	}

	fn can_create_at(&self, _parent: Option<&dyn Page>) -> bool {
		true
	}
}

/// Sitewide category pages
pub struct ArticleCategoryType;

impl PageTypeDescriptor for ArticleCategoryType {
	fn type_name(&self) -> &str {
		"ArticleCategory"
	}

	fn label(&self) -> &str {
		"Article category"
	}

	fn icon(&self) -> &str {
		"folder-open-inverse"
	}

	fn can_create_at(&self, _parent: Option<&dyn Page>) -> bool {
		true
	}
}

/// Register every page type of the app
pub fn register_page_types(registry: &mut AdminPageRegistry) {
	registry.register(HomePageType);
	registry.register(ArticlePageType);
	registry.register(ArticleTagIndexPageType);
	registry.register(WikidataClassType);
	registry.register(ArticleCategoryType);
}

/// Register every snippet type of the app
pub fn register_snippets(registry: &mut SnippetRegistry) {
	registry.register::<BlogCategory>();
}
