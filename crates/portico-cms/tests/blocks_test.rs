//! Tests for stream-field blocks and the block library

use portico_cms::blocks::builtin::{HeadingBlock, QuoteBlock, RichTextBlock};
use portico_cms::blocks::{Block, BlockLibrary, BlockType, StreamBlock, StreamField};
use portico_cms::error::{CmsError, CmsResult};
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

// Test helper: a content-app specific block
#[derive(serde::Serialize, serde::Deserialize)]
struct CalloutBlock {
	text: String,
}

impl Block for CalloutBlock {
	fn block_type(&self) -> BlockType {
		"callout".to_string()
	}

	fn render(&self) -> CmsResult<String> {
		Ok(format!("<aside>{}</aside>", self.text))
	}

	fn to_json(&self) -> CmsResult<JsonValue> {
		Ok(json!({"text": self.text}))
	}

	fn from_json(value: JsonValue) -> CmsResult<Self> {
		serde_json::from_value(value).map_err(|err| CmsError::InvalidBlockData {
			block_type: "callout".to_string(),
			message: err.to_string(),
		})
	}
}

#[rstest]
fn test_default_library_registers_all_builtin_types() {
	// Arrange & Act
	let library = BlockLibrary::with_defaults();

	// Assert
	assert_eq!(
		library.block_types(),
		vec!["document", "embed", "heading", "image", "page", "paragraph", "quote"]
	);
}

#[rstest]
fn test_stream_field_renders_blocks_in_order() {
	// Arrange
	let library = BlockLibrary::with_defaults();
	let mut body = StreamField::new();
	body.add_block(StreamBlock::new("heading", json!({"text": "Findings"})));
	body.add_block(StreamBlock::new("paragraph", json!({"html": "<p>Summary.</p>"})));

	// Act
	let html = body.render(&library).unwrap();

	// Assert
	assert_eq!(
		html,
		"<h2 class=\"title\">Findings</h2><div class=\"rich-text\"><p>Summary.</p></div>"
	);
}

#[rstest]
fn test_unregistered_block_type_errors() {
	// Arrange
	let library = BlockLibrary::with_defaults();
	let mut body = StreamField::new();
	body.add_block(StreamBlock::new("carousel", json!({})));

	// Act
	let result = body.render(&library);

	// Assert
	assert!(matches!(result, Err(CmsError::UnknownBlockType(name)) if name == "carousel"));
}

#[rstest]
fn test_malformed_block_data_errors() {
	// Arrange - heading data with the wrong shape
	let library = BlockLibrary::with_defaults();

	// Act
	let result = library.create_block("heading", json!({"title": 42}));

	// Assert
	assert!(matches!(
		result,
		Err(CmsError::InvalidBlockData { block_type, .. }) if block_type == "heading"
	));
}

#[rstest]
fn test_app_registered_block_renders_alongside_builtins() {
	// Arrange
	let mut library = BlockLibrary::with_defaults();
	library.register("callout".to_string(), |data| {
		Ok(Box::new(CalloutBlock::from_json(data)?))
	});

	let mut body = StreamField::new();
	body.add_block(StreamBlock::new("callout", json!({"text": "Read this first"})));

	// Act
	let html = body.render(&library).unwrap();

	// Assert
	assert_eq!(html, "<aside>Read this first</aside>");
}

#[rstest]
fn test_stream_field_json_round_trip() {
	// Arrange
	let mut body = StreamField::new();
	body.add_block(StreamBlock::new("quote", json!({"quote": "data beats anecdote"})));

	// Act
	let serialized = serde_json::to_string(&body).unwrap();
	let restored: StreamField = serde_json::from_str(&serialized).unwrap();

	// Assert
	assert_eq!(restored.len(), 1);
	assert_eq!(restored.blocks()[0].block_type, "quote");
}

#[rstest]
fn test_block_to_json_matches_from_json() {
	// Arrange
	let quote = QuoteBlock {
		quote: "evidence first".to_string(),
		attribution: Some("editorial policy".to_string()),
	};

	// Act
	let round_tripped = QuoteBlock::from_json(quote.to_json().unwrap()).unwrap();

	// Assert
	assert_eq!(round_tripped.quote, quote.quote);
	assert_eq!(round_tripped.attribution, quote.attribution);
}

#[rstest]
fn test_rich_text_block_renders_html_verbatim() {
	// Arrange
	let block = RichTextBlock {
		html: "<p>Raw <em>markup</em></p>".into(),
	};

	// Act
	let html = block.render().unwrap();

	// Assert
	assert_eq!(html, "<div class=\"rich-text\"><p>Raw <em>markup</em></p></div>");
}

#[rstest]
fn test_heading_block_type_name() {
	let block = HeadingBlock { text: "Intro".to_string() };
	assert_eq!(block.block_type(), "heading");
}
