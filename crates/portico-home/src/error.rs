use portico_cms::error::CmsError;
use portico_cms::pages::PageId;
use portico_taggit::TaggitError;
use thiserror::Error;

/// Errors from the content app
#[derive(Debug, Error)]
pub enum SiteError {
	/// Error from the CMS layer
	#[error(transparent)]
	Cms(#[from] CmsError),

	/// Error from the tagging layer
	#[error(transparent)]
	Taggit(#[from] TaggitError),

	/// A tree node exists but its typed record is missing or of another type
	#[error("{type_name} record not found for page {page_id}")]
	RecordNotFound {
		/// Expected content type
		type_name: &'static str,
		/// Page id looked up
		page_id: PageId,
	},

	/// Settings file could not be parsed
	#[error("Invalid settings: {0}")]
	Settings(#[from] toml::de::Error),
}

/// Result type for content-app operations
pub type SiteResult<T> = Result<T, SiteError>;
