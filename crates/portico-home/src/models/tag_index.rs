//! Tag-index page
//!
//! A page type that lists the articles carrying a tag. It stores no
//! fields of its own; the tag comes from the request at render time.

use crate::error::SiteResult;
use crate::site::Site;
use portico_cms::pages::{Page, PageId};
use portico_cms::request::{Context, PageRequest, base_context};
use serde::{Deserialize, Serialize};

/// Page listing articles by tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleTagIndexPage {
	/// Tree node this record belongs to
	pub page_id: PageId,
}

impl ArticleTagIndexPage {
	/// Context for rendering: exactly the articles carrying the `tag`
	/// query parameter. A missing parameter or a tag matching nothing
	/// yields an empty list.
	pub async fn get_context(&self, site: &Site, request: &PageRequest) -> SiteResult<Context> {
		let node = site.tree().get_page(self.page_id).await?;
		let mut context = base_context(&node);

		let articlepages = match request.query("tag") {
			Some(tag) => site.articles_tagged(tag).await,
			None => Vec::new(),
		};
		tracing::debug!(
			page_id = %self.page_id,
			tag = request.query("tag").unwrap_or(""),
			count = articlepages.len(),
			"tag index context built"
		);
		context.insert("articlepages", &articlepages);
		Ok(context)
	}
}

impl Page for ArticleTagIndexPage {
	fn page_id(&self) -> PageId {
		self.page_id
	}

	fn type_name(&self) -> &'static str {
		"ArticleTagIndexPage"
	}
}
