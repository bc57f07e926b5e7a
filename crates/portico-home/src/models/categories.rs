//! Category records
//!
//! Two flavors: `ArticleCategory` is a sitewide category page with its own
//! intro content; `BlogCategory` is a reusable snippet carrying just a
//! name and an icon.

use portico_cms::fields::RichText;
use portico_cms::media::ImageId;
use portico_cms::pages::{Page, PageId};
use portico_cms::panels::{Panel, base_content_panels, base_promote_panels};
use portico_cms::search::{IndexedField, base_search_fields};
use portico_cms::snippets::{Snippet, SnippetDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sitewide article category page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleCategory {
	/// Tree node this record belongs to
	pub page_id: PageId,

	/// Category name
	pub name: String,

	/// Small icon shown next to the name, nulled when the image is deleted
	pub icon: Option<ImageId>,

	/// Intro message printed over the image
	pub intro: RichText,

	/// Full-width intro image, nulled when the image is deleted
	pub intro_image: Option<ImageId>,
}

/// Editable fields of an article category, for creation
#[derive(Debug, Clone, Default)]
pub struct ArticleCategoryFields {
	/// Category name
	pub name: String,
	/// Icon image
	pub icon: Option<ImageId>,
	/// Intro message
	pub intro: RichText,
	/// Full-width intro image
	pub intro_image: Option<ImageId>,
}

impl Page for ArticleCategory {
	fn page_id(&self) -> PageId {
		self.page_id
	}

	fn type_name(&self) -> &'static str {
		"ArticleCategory"
	}

	fn content_panels(&self) -> Vec<Panel> {
		let mut panels = base_content_panels();
		panels.extend([
			Panel::field("name"),
			Panel::image_chooser("icon"),
			Panel::field_full("intro"),
		]);
		panels
	}

	fn promote_panels(&self) -> Vec<Panel> {
		vec![
			Panel::multi("Common page configuration", base_promote_panels()),
			Panel::image_chooser("intro_image"),
		]
	}

	fn search_fields(&self) -> Vec<IndexedField> {
		let mut fields = base_search_fields();
		fields.extend([IndexedField::search("name"), IndexedField::filter("intro")]);
		fields
	}
}

/// Reusable blog category snippet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCategory {
	/// Unique id
	pub id: Uuid,

	/// Category name
	pub name: String,

	/// Small icon, nulled when the image is deleted
	pub icon: Option<ImageId>,
}

impl BlogCategory {
	/// Create a category with a fresh id
	pub fn new(name: &str, icon: Option<ImageId>) -> Self {
		Self {
			id: Uuid::new_v4(),
			name: name.to_string(),
			icon,
		}
	}
}

impl Snippet for BlogCategory {
	fn descriptor() -> SnippetDescriptor {
		SnippetDescriptor {
			type_name: "BlogCategory".to_string(),
			verbose_name: "blog category".to_string(),
			verbose_name_plural: "blog categories".to_string(),
			panels: vec![Panel::field("name"), Panel::image_chooser("icon")],
		}
	}
}

impl fmt::Display for BlogCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}
