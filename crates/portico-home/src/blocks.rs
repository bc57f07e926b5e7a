//! App-specific content blocks
//!
//! One custom block on top of the built-ins: an inline Wikidata query
//! whose result table is embedded in an article body. The block renders
//! the table skeleton; the front-end hydrates rows from the query
//! service.

use portico_cms::blocks::builtin::escape_html;
use portico_cms::blocks::{Block, BlockLibrary, BlockType};
use portico_cms::error::{CmsError, CmsResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Inline Wikidata query result, rendered as a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikidataQueryBlock {
	/// Wikidata class identifier, e.g. `Q12136`
	pub class_qid: String,

	/// Property identifiers shown as columns, in display order
	pub featured_pids: Vec<String>,

	/// Cap on the number of rows, unlimited when absent
	#[serde(default)]
	pub limit: Option<u32>,
}

impl Block for WikidataQueryBlock {
	fn block_type(&self) -> BlockType {
		"wikidata_query".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		let mut html = format!(
			"<table class=\"wikidata-query\" data-class-qid=\"{}\"",
			escape_html(&self.class_qid)
		);
		if let Some(limit) = self.limit {
			html.push_str(&format!(" data-limit=\"{limit}\""));
		}
		html.push_str("><thead><tr><th>item</th>");
		for pid in &self.featured_pids {
			html.push_str(&format!("<th data-pid=\"{0}\">{0}</th>", escape_html(pid)));
		}
		html.push_str("</tr></thead><tbody></tbody></table>");
		Ok(html)
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(serde_json::json!({
			"class_qid": self.class_qid,
			"featured_pids": self.featured_pids,
			"limit": self.limit,
		}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		serde_json::from_value(value).map_err(|err| CmsError::InvalidBlockData {
			block_type: "wikidata_query".to_string(),
			message: err.to_string(),
		})
	}
}

/// The block library article bodies are rendered with: every built-in
/// block plus the Wikidata query block.
pub fn block_library() -> BlockLibrary {
	let mut library = BlockLibrary::with_defaults();
	library.register("wikidata_query".to_string(), |data| {
		Ok(Box::new(WikidataQueryBlock::from_json(data)?))
	});
	library
}
