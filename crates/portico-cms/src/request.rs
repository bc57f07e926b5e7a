//! Page-render requests and template context
//!
//! The host web layer hands each page render a bag of query parameters;
//! pages answer with a [`Context`] the template engine consumes.

use crate::pages::PageNode;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Template context handed to the rendering layer
pub type Context = tera::Context;

/// Query parameters captured for a single page render
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
	query: HashMap<String, String>,
}

impl PageRequest {
	/// A request with no query parameters
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a raw query string such as `tag=rust&page=2`.
	///
	/// Pairs split on the first `=` only, so values may contain `=`;
	/// keys and values are percent-decoded.
	pub fn from_query_string(query: &str) -> Self {
		let query = query
			.split('&')
			.filter(|pair| !pair.is_empty())
			.filter_map(|pair| {
				let mut parts = pair.splitn(2, '=');
				Some((
					percent_decode_str(parts.next()?).decode_utf8_lossy().to_string(),
					percent_decode_str(parts.next().unwrap_or(""))
						.decode_utf8_lossy()
						.to_string(),
				))
			})
			.collect();
		Self { query }
	}

	/// Builder-style parameter insertion, for tests and handlers
	pub fn with_param(mut self, name: &str, value: &str) -> Self {
		self.query.insert(name.to_string(), value.to_string());
		self
	}

	/// Look up a query parameter
	pub fn query(&self, name: &str) -> Option<&str> {
		self.query.get(name).map(String::as_str)
	}
}

/// Seed the context every page render starts from: the page node under
/// both the `page` and `self` keys, matching the template contract.
pub fn base_context(node: &PageNode) -> Context {
	let mut context = Context::new();
	context.insert("page", node);
	context.insert("self", node);
	context
}
