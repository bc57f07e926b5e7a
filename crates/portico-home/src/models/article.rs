//! Article pages
//!
//! Articles carry both hand-written content and Wikidata query results,
//! composed as an ordered stream of blocks for flexibility. The post date
//! is editor-entered; the last-edit date tracks every mutation made
//! through the site store.

use portico_cms::blocks::StreamField;
use portico_cms::media::ImageId;
use portico_cms::pages::{Page, PageId};
use portico_cms::panels::{Panel, base_content_panels, base_promote_panels};
use portico_cms::search::{IndexedField, base_search_fields};
use portico_taggit::Taggable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An article page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlePage {
	/// Tree node this record belongs to
	pub page_id: PageId,

	/// Block-structured body
	pub body: StreamField,

	/// Post date, editor-entered
	pub date: NaiveDate,

	/// Refreshed on every edit through the site store
	pub last_edit_date: NaiveDate,

	/// Image used in feeds and listings, nulled when the image is deleted
	pub feed_image: Option<ImageId>,
}

impl Page for ArticlePage {
	fn page_id(&self) -> PageId {
		self.page_id
	}

	fn type_name(&self) -> &'static str {
		"ArticlePage"
	}

	fn content_panels(&self) -> Vec<Panel> {
		let mut panels = base_content_panels();
		panels.extend([
			Panel::multi(
				"Article information",
				vec![Panel::field("date"), Panel::tag_chooser("tags")],
			),
			Panel::stream_field("body"),
		]);
		panels
	}

	fn promote_panels(&self) -> Vec<Panel> {
		vec![
			Panel::multi("Common page configuration", base_promote_panels()),
			Panel::image_chooser("feed_image"),
		]
	}

	fn search_fields(&self) -> Vec<IndexedField> {
		let mut fields = base_search_fields();
		fields.extend([
			IndexedField::search("body"),
			IndexedField::filter("date"),
			IndexedField::filter("last_edit_date"),
		]);
		fields
	}
}

impl Taggable for ArticlePage {
	fn content_type_name() -> &'static str {
		"ArticlePage"
	}

	fn object_id(&self) -> String {
		self.page_id.to_string()
	}
}
