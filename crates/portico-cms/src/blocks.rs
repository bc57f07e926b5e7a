//! StreamField-style content blocks
//!
//! Polymorphic content blocks inspired by Wagtail's StreamField.
//! A page body is an ordered sequence of typed blocks; the set of
//! available types is a per-site registry so content apps can add
//! their own blocks next to the built-ins.

use crate::error::{CmsError, CmsResult};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

pub mod builtin;

/// Block type identifier
pub type BlockType = String;

/// Factory function that creates a block from JSON data
type BlockFactory = Box<dyn Fn(JsonValue) -> CmsResult<Box<dyn Block>> + Send + Sync>;

/// Block trait for all content blocks
pub trait Block: Send + Sync {
	/// Get the block type identifier
	fn block_type(&self) -> BlockType;

	/// Render this block to HTML
	fn render(&self) -> CmsResult<String>;

	/// Serialize block data to JSON
	fn to_json(&self) -> CmsResult<JsonValue>;

	/// Deserialize block data from JSON
	fn from_json(value: JsonValue) -> CmsResult<Self>
	where
		Self: Sized;
}

/// Parse block data with serde, mapping failures to [`CmsError::InvalidBlockData`]
pub(crate) fn parse_block_data<T: DeserializeOwned>(
	block_type: &str,
	value: JsonValue,
) -> CmsResult<T> {
	serde_json::from_value(value).map_err(|err| CmsError::InvalidBlockData {
		block_type: block_type.to_string(),
		message: err.to_string(),
	})
}

/// StreamField containing a sequence of blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamField {
	/// Ordered list of blocks
	blocks: Vec<StreamBlock>,
}

/// A block instance in a StreamField
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamBlock {
	/// Block type
	pub block_type: BlockType,

	/// Block data (JSON)
	pub data: JsonValue,

	/// Optional block ID for editing
	pub id: Option<String>,
}

impl StreamBlock {
	/// Create a block instance of the given type
	pub fn new(block_type: &str, data: JsonValue) -> Self {
		Self {
			block_type: block_type.to_string(),
			data,
			id: None,
		}
	}
}

impl StreamField {
	/// Create a new empty StreamField
	pub fn new() -> Self {
		Self { blocks: Vec::new() }
	}

	/// Add a block to the field
	pub fn add_block(&mut self, block: StreamBlock) -> &mut Self {
		self.blocks.push(block);
		self
	}

	/// Get all blocks
	pub fn blocks(&self) -> &[StreamBlock] {
		&self.blocks
	}

	/// Number of blocks in the field
	pub fn len(&self) -> usize {
		self.blocks.len()
	}

	/// Whether the field has no blocks
	pub fn is_empty(&self) -> bool {
		self.blocks.is_empty()
	}

	/// Render all blocks to HTML
	pub fn render(&self, registry: &BlockLibrary) -> CmsResult<String> {
		let mut html = String::new();
		for block in &self.blocks {
			let block_instance = registry.create_block(&block.block_type, block.data.clone())?;
			html.push_str(&block_instance.render()?);
		}
		Ok(html)
	}
}

/// Registry of available block types
#[derive(Default)]
pub struct BlockLibrary {
	blocks: HashMap<BlockType, BlockFactory>,
}

impl BlockLibrary {
	/// Create a new empty block library
	pub fn new() -> Self {
		Self {
			blocks: HashMap::new(),
		}
	}

	/// A library with every built-in block registered
	pub fn with_defaults() -> Self {
		let mut library = Self::new();
		builtin::register_builtins(&mut library);
		library
	}

	/// Register a block type
	pub fn register<F>(&mut self, block_type: BlockType, factory: F)
	where
		F: Fn(JsonValue) -> CmsResult<Box<dyn Block>> + Send + Sync + 'static,
	{
		self.blocks.insert(block_type, Box::new(factory));
	}

	/// Whether a block type is registered
	pub fn contains(&self, block_type: &str) -> bool {
		self.blocks.contains_key(block_type)
	}

	/// Registered block-type names, sorted
	pub fn block_types(&self) -> Vec<&str> {
		let mut types: Vec<&str> = self.blocks.keys().map(String::as_str).collect();
		types.sort_unstable();
		types
	}

	/// Create a block instance from JSON
	pub fn create_block(&self, block_type: &str, data: JsonValue) -> CmsResult<Box<dyn Block>> {
		let factory = self
			.blocks
			.get(block_type)
			.ok_or_else(|| CmsError::UnknownBlockType(block_type.to_string()))?;

		factory(data)
	}
}
