//! Built-in content blocks
//!
//! One block per body entry a portal article can carry: heading, rich-text
//! paragraph, image, quote, page link, document link and external embed.
//! Content apps register further blocks on top of these.

use super::{Block, BlockLibrary, BlockType, parse_block_data};
use crate::error::CmsResult;
use crate::fields::RichText;
use crate::media::{DocumentId, ImageId};
use crate::pages::PageId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Escape text for interpolation into HTML bodies and attributes
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// Section heading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingBlock {
	/// Heading text
	pub text: String,
}

impl Block for HeadingBlock {
	fn block_type(&self) -> BlockType {
		"heading".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		Ok(format!("<h2 class=\"title\">{}</h2>", escape_html(&self.text)))
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(serde_json::json!({"text": self.text}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		parse_block_data("heading", value)
	}
}

/// Rich-text paragraph. The payload is editor-produced HTML and is
/// rendered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextBlock {
	/// Editor HTML
	pub html: RichText,
}

impl Block for RichTextBlock {
	fn block_type(&self) -> BlockType {
		"paragraph".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		Ok(format!("<div class=\"rich-text\">{}</div>", self.html.as_str()))
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(serde_json::json!({"html": self.html}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		parse_block_data("paragraph", value)
	}
}

/// Image reference. Resolution to a file URL happens in the host
/// rendering layer, keyed by the image id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageBlock {
	/// Referenced image
	pub image_id: ImageId,

	/// Alt text for accessibility
	#[serde(default)]
	pub alt: Option<String>,
}

impl Block for ImageBlock {
	fn block_type(&self) -> BlockType {
		"image".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		let alt = self.alt.as_deref().unwrap_or("");
		Ok(format!(
			"<figure><img data-image-id=\"{}\" alt=\"{}\"></figure>",
			self.image_id,
			escape_html(alt)
		))
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(serde_json::json!({"image_id": self.image_id, "alt": self.alt}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		parse_block_data("image", value)
	}
}

/// Block quote with optional attribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteBlock {
	/// Quoted text
	pub quote: String,

	/// Who said it
	#[serde(default)]
	pub attribution: Option<String>,
}

impl Block for QuoteBlock {
	fn block_type(&self) -> BlockType {
		"quote".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		let mut html = format!("<blockquote><p>{}</p>", escape_html(&self.quote));
		if let Some(attribution) = &self.attribution {
			html.push_str(&format!("<cite>{}</cite>", escape_html(attribution)));
		}
		html.push_str("</blockquote>");
		Ok(html)
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(serde_json::json!({"quote": self.quote, "attribution": self.attribution}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		parse_block_data("quote", value)
	}
}

/// Internal link to another page in the tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLinkBlock {
	/// Target page
	pub page_id: PageId,

	/// Link text; the host falls back to the page title when absent
	#[serde(default)]
	pub label: Option<String>,
}

impl Block for PageLinkBlock {
	fn block_type(&self) -> BlockType {
		"page".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		let label = self.label.as_deref().unwrap_or("");
		Ok(format!(
			"<a data-page-id=\"{}\">{}</a>",
			self.page_id,
			escape_html(label)
		))
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(serde_json::json!({"page_id": self.page_id, "label": self.label}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		parse_block_data("page", value)
	}
}

/// Link to a document in the media library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentBlock {
	/// Referenced document
	pub document_id: DocumentId,

	/// Link text; the host falls back to the document title when absent
	#[serde(default)]
	pub title: Option<String>,
}

impl Block for DocumentBlock {
	fn block_type(&self) -> BlockType {
		"document".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		let title = self.title.as_deref().unwrap_or("");
		Ok(format!(
			"<a class=\"document\" data-document-id=\"{}\">{}</a>",
			self.document_id,
			escape_html(title)
		))
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(serde_json::json!({"document_id": self.document_id, "title": self.title}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		parse_block_data("document", value)
	}
}

static YOUTUBE_URL: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^https?://(?:www\.)?(?:youtube\.com|youtu\.be)/").unwrap());
static VIMEO_URL: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^https?://(?:www\.)?vimeo\.com/").unwrap());

/// External media embed, e.g. a video URL pasted by the editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedBlock {
	/// Media URL
	pub url: String,
}

impl EmbedBlock {
	/// Provider name recognized from the URL, if any
	pub fn provider(&self) -> Option<&'static str> {
		if YOUTUBE_URL.is_match(&self.url) {
			Some("youtube")
		} else if VIMEO_URL.is_match(&self.url) {
			Some("vimeo")
		} else {
			None
		}
	}
}

impl Block for EmbedBlock {
	fn block_type(&self) -> BlockType {
		"embed".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		let provider = self.provider().unwrap_or("generic");
		Ok(format!(
			"<div class=\"embed\" data-provider=\"{}\" data-url=\"{}\"></div>",
			provider,
			escape_html(&self.url)
		))
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(serde_json::json!({"url": self.url}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		parse_block_data("embed", value)
	}
}

/// Register every built-in block into `library`
pub fn register_builtins(library: &mut BlockLibrary) {
	library.register("heading".to_string(), |data| {
		Ok(Box::new(HeadingBlock::from_json(data)?))
	});
	library.register("paragraph".to_string(), |data| {
		Ok(Box::new(RichTextBlock::from_json(data)?))
	});
	library.register("image".to_string(), |data| {
		Ok(Box::new(ImageBlock::from_json(data)?))
	});
	library.register("quote".to_string(), |data| {
		Ok(Box::new(QuoteBlock::from_json(data)?))
	});
	library.register("page".to_string(), |data| {
		Ok(Box::new(PageLinkBlock::from_json(data)?))
	});
	library.register("document".to_string(), |data| {
		Ok(Box::new(DocumentBlock::from_json(data)?))
	});
	library.register("embed".to_string(), |data| {
		Ok(Box::new(EmbedBlock::from_json(data)?))
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn heading_escapes_markup() {
		let block = HeadingBlock { text: "A <b>bold</b> claim".to_string() };
		let html = block.render().unwrap();
		assert_eq!(html, "<h2 class=\"title\">A &lt;b&gt;bold&lt;/b&gt; claim</h2>");
	}

	#[test]
	fn embed_detects_providers() {
		let youtube = EmbedBlock { url: "https://youtu.be/abc123".to_string() };
		let vimeo = EmbedBlock { url: "https://vimeo.com/987".to_string() };
		let other = EmbedBlock { url: "https://example.org/clip".to_string() };

		assert_eq!(youtube.provider(), Some("youtube"));
		assert_eq!(vimeo.provider(), Some("vimeo"));
		assert_eq!(other.provider(), None);
	}
}
