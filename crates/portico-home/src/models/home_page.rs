//! Portal home pages
//!
//! Home pages sit at the site root: one for the main portal and one per
//! themed sub-site. Besides the intro content they carry the site URL
//! used for the logo link.

use crate::error::SiteResult;
use crate::site::Site;
use portico_cms::fields::RichText;
use portico_cms::media::ImageId;
use portico_cms::pages::{Page, PageId};
use portico_cms::panels::{Panel, base_content_panels, base_promote_panels};
use portico_cms::request::{Context, PageRequest, base_context};
use portico_cms::search::{IndexedField, base_search_fields};
use serde::{Deserialize, Serialize};

/// A portal or sub-site home page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePage {
	/// Tree node this record belongs to
	pub page_id: PageId,

	/// Site URL, used for the logo; blank allowed
	pub site_url: String,

	/// Intro message printed over the image
	pub intro: RichText,

	/// Full-width intro image, nulled when the image is deleted
	pub intro_image: Option<ImageId>,

	/// Intro message printed at the start of articles
	pub intro_articles: RichText,
}

/// Editable fields of a home page, for creation
#[derive(Debug, Clone, Default)]
pub struct HomePageFields {
	/// Site URL used for the logo
	pub site_url: String,
	/// Intro message
	pub intro: RichText,
	/// Full-width intro image
	pub intro_image: Option<ImageId>,
	/// Intro shown at the start of articles
	pub intro_articles: RichText,
}

impl HomePage {
	/// Context for rendering: the home's direct children that are live,
	/// most recently published first.
	pub async fn get_context(&self, site: &Site, _request: &PageRequest) -> SiteResult<Context> {
		let node = site.tree().get_page(self.page_id).await?;
		let mut context = base_context(&node);
		let articlepages = site.tree().live_children(self.page_id).await?;
		tracing::debug!(page_id = %self.page_id, count = articlepages.len(), "home context built");
		context.insert("articlepages", &articlepages);
		Ok(context)
	}
}

impl Page for HomePage {
	fn page_id(&self) -> PageId {
		self.page_id
	}

	fn type_name(&self) -> &'static str {
		"HomePage"
	}

	fn content_panels(&self) -> Vec<Panel> {
		let mut panels = base_content_panels();
		panels.extend([
			Panel::field("site_url"),
			Panel::field_full("intro"),
			Panel::field_full("intro_articles"),
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
		fields.extend([
			IndexedField::filter("site_url"),
			IndexedField::filter("intro"),
			IndexedField::filter("intro_articles"),
		]);
		fields
	}
}
