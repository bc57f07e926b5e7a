//! Site settings
//!
//! A small TOML-loadable settings record with environment overrides.
//! Every field has a usable default so a site can boot with no file at
//! all; the host templates read these values, the models do not.

use crate::error::SiteResult;
use serde::Deserialize;

/// Environment variable overriding the site name
pub const ENV_SITE_NAME: &str = "PORTICO_SITE_NAME";

/// Environment variable overriding the default site URL
pub const ENV_DEFAULT_SITE_URL: &str = "PORTICO_DEFAULT_SITE_URL";

/// Deploy-time configuration for one portal site
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	/// Display name of the portal
	pub site_name: String,

	/// URL used when a home page leaves its own blank
	pub default_site_url: String,

	/// Cap the host applies to article feeds
	pub articles_per_feed: usize,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			site_name: "Portico".to_string(),
			default_site_url: "https://example.org".to_string(),
			articles_per_feed: 20,
		}
	}
}

impl SiteSettings {
	/// Parse settings from a TOML document
	pub fn from_toml_str(source: &str) -> SiteResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Apply environment overrides on top of the loaded values
	pub fn with_env_overrides(mut self) -> Self {
		if let Ok(value) = std::env::var(ENV_SITE_NAME) {
			self.site_name = value;
		}
		if let Ok(value) = std::env::var(ENV_DEFAULT_SITE_URL) {
			self.default_site_url = value;
		}
		self
	}
}
