//! Wikidata class pages
//!
//! A class page renders a table of Wikidata items: one row per item of
//! the class, one column per featured property. The featured-property
//! list is also the per-class column source for item pages.

use crate::blocks::WikidataQueryBlock;
use portico_cms::pages::{Page, PageId};
use portico_cms::panels::{Panel, base_content_panels, base_promote_panels};
use portico_cms::search::{IndexedField, base_search_fields};
use serde::{Deserialize, Serialize};

/// Page displaying a table of items of one Wikidata class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikidataClass {
	/// Tree node this record belongs to
	pub page_id: PageId,

	/// Wikidata class identifier, e.g. `Q12136`
	pub class_qid: String,

	/// Property identifiers shown as columns, in display order
	pub featured_pids: Vec<String>,
}

impl WikidataClass {
	/// Column keys for the generated table: the item-label column first,
	/// then one column per featured Pid in declared order.
	pub fn table_columns(&self) -> Vec<String> {
		let mut columns = Vec::with_capacity(self.featured_pids.len() + 1);
		columns.push("item".to_string());
		columns.extend(self.featured_pids.iter().cloned());
		columns
	}

	/// The query block rendering this class's table inside a stream body
	pub fn as_query_block(&self) -> WikidataQueryBlock {
		WikidataQueryBlock {
			class_qid: self.class_qid.clone(),
			featured_pids: self.featured_pids.clone(),
			limit: None,
		}
	}
}

impl Page for WikidataClass {
	fn page_id(&self) -> PageId {
		self.page_id
	}

	fn type_name(&self) -> &'static str {
		"WikidataClass"
	}

	fn content_panels(&self) -> Vec<Panel> {
		let mut panels = base_content_panels();
		panels.extend([Panel::field("class_qid"), Panel::field("featured_pids")]);
		panels
	}

	fn promote_panels(&self) -> Vec<Panel> {
		vec![Panel::multi("Common page configuration", base_promote_panels())]
	}

	fn search_fields(&self) -> Vec<IndexedField> {
		let mut fields = base_search_fields();
		fields.extend([
			IndexedField::search("class_qid"),
			IndexedField::search("featured_pids"),
		]);
		fields
	}
}
