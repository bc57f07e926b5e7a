//! Hierarchical page tree
//!
//! Pages live in a single tree per site. Each node carries its slug path,
//! depth and publication state; typed page records (defined by the content
//! app) reference nodes by id. Publication uses a live flag plus a
//! first-published timestamp that is set once and then kept stable across
//! republishes.

use crate::error::{CmsError, CmsResult};
use crate::panels::{Panel, base_content_panels, base_promote_panels};
use crate::search::{IndexedField, base_search_fields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Page identifier
pub type PageId = Uuid;

/// A node in the page tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageNode {
	/// Unique page id
	pub id: PageId,

	/// Parent page, `None` for site roots
	pub parent: Option<PageId>,

	/// Human-readable title
	pub title: String,

	/// URL-safe slug, unique among siblings is not enforced here
	pub slug: String,

	/// Slash-joined slug path from the root, e.g. `/home/articles/rust`
	pub path: String,

	/// Distance from the root, root nodes have depth 0
	pub depth: u32,

	/// Whether the page is published
	pub live: bool,

	/// When the page was first published, `None` while draft
	pub first_published_at: Option<DateTime<Utc>>,
}

/// Metadata contract implemented by every concrete page type.
///
/// The declarative parts (panels and search fields) mirror how the admin
/// and the search-index builder consume page types: each type starts from
/// the base sets and extends them.
pub trait Page: Send + Sync {
	/// Id of the tree node this record belongs to
	fn page_id(&self) -> PageId;

	/// Stable type name, used as registry key and content-type discriminator
	fn type_name(&self) -> &'static str;

	/// Editor panels for the content tab
	fn content_panels(&self) -> Vec<Panel> {
		base_content_panels()
	}

	/// Editor panels for the promote tab
	fn promote_panels(&self) -> Vec<Panel> {
		vec![Panel::multi("Common page configuration", base_promote_panels())]
	}

	/// Fields exposed to the search-index builder
	fn search_fields(&self) -> Vec<IndexedField> {
		base_search_fields()
	}
}

/// In-memory page hierarchy store
#[derive(Debug, Default)]
pub struct PageTree {
	nodes: HashMap<PageId, PageNode>,
	children: HashMap<PageId, Vec<PageId>>,
	roots: Vec<PageId>,
}

impl PageTree {
	/// Create an empty tree
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a draft page under `parent` (`None` for a site root).
	///
	/// The node's path is its parent's path plus its own slug; depth is
	/// parent depth + 1, with roots at depth 0.
	pub async fn add_page(
		&mut self,
		parent: Option<PageId>,
		title: String,
		slug: String,
	) -> CmsResult<PageNode> {
		if slug.is_empty() || slug.contains('/') {
			return Err(CmsError::InvalidSlug(slug));
		}

		let (path, depth) = match parent {
			Some(parent_id) => {
				let parent_node = self
					.nodes
					.get(&parent_id)
					.ok_or_else(|| CmsError::PageNotFound(parent_id.to_string()))?;
				(format!("{}/{}", parent_node.path, slug), parent_node.depth + 1)
			}
			None => (format!("/{slug}"), 0),
		};

		let node = PageNode {
			id: Uuid::new_v4(),
			parent,
			title,
			slug,
			path,
			depth,
			live: false,
			first_published_at: None,
		};

		tracing::debug!(page_id = %node.id, path = %node.path, "page added");

		match parent {
			Some(parent_id) => self.children.entry(parent_id).or_default().push(node.id),
			None => self.roots.push(node.id),
		}
		self.nodes.insert(node.id, node.clone());

		Ok(node)
	}

	/// Look up a single node
	pub async fn get_page(&self, id: PageId) -> CmsResult<PageNode> {
		self.nodes
			.get(&id)
			.cloned()
			.ok_or_else(|| CmsError::PageNotFound(id.to_string()))
	}

	/// Direct children of `id`, in insertion order
	pub async fn get_children(&self, id: PageId) -> CmsResult<Vec<PageNode>> {
		if !self.nodes.contains_key(&id) {
			return Err(CmsError::PageNotFound(id.to_string()));
		}
		Ok(self.collect(self.children.get(&id)))
	}

	/// Direct children of `id` that are live, most recently published first.
	///
	/// Nodes that are live but have never recorded a publish timestamp sort
	/// after all dated ones.
	pub async fn live_children(&self, id: PageId) -> CmsResult<Vec<PageNode>> {
		let mut children = self.get_children(id).await?;
		children.retain(|node| node.live);
		children.sort_by(|a, b| match (&a.first_published_at, &b.first_published_at) {
			(Some(a_at), Some(b_at)) => b_at.cmp(a_at),
			(Some(_), None) => std::cmp::Ordering::Less,
			(None, Some(_)) => std::cmp::Ordering::Greater,
			(None, None) => std::cmp::Ordering::Equal,
		});
		Ok(children)
	}

	/// All site-root pages, in insertion order
	pub async fn root_pages(&self) -> Vec<PageNode> {
		self.collect(Some(&self.roots))
	}

	/// Mark a page live. The first publish records `at`; republishing keeps
	/// the original timestamp.
	pub fn publish(&mut self, id: PageId, at: DateTime<Utc>) -> CmsResult<()> {
		let node = self
			.nodes
			.get_mut(&id)
			.ok_or_else(|| CmsError::PageNotFound(id.to_string()))?;
		node.live = true;
		if node.first_published_at.is_none() {
			node.first_published_at = Some(at);
		}
		tracing::debug!(page_id = %id, "page published");
		Ok(())
	}

	/// Take a page offline. The first-published timestamp survives so a
	/// republish does not reorder chronological listings.
	pub fn unpublish(&mut self, id: PageId) -> CmsResult<()> {
		let node = self
			.nodes
			.get_mut(&id)
			.ok_or_else(|| CmsError::PageNotFound(id.to_string()))?;
		node.live = false;
		tracing::debug!(page_id = %id, "page unpublished");
		Ok(())
	}

	/// Remove a page and all of its descendants.
	///
	/// Returns every removed id (the page itself first) so callers can
	/// cascade their own per-page records.
	pub async fn remove(&mut self, id: PageId) -> CmsResult<Vec<PageId>> {
		let node = self
			.nodes
			.get(&id)
			.ok_or_else(|| CmsError::PageNotFound(id.to_string()))?;

		match node.parent {
			Some(parent_id) => {
				if let Some(siblings) = self.children.get_mut(&parent_id) {
					siblings.retain(|child| *child != id);
				}
			}
			None => self.roots.retain(|root| *root != id),
		}

		let mut removed = Vec::new();
		let mut stack = vec![id];
		while let Some(current) = stack.pop() {
			if let Some(children) = self.children.remove(&current) {
				stack.extend(children);
			}
			self.nodes.remove(&current);
			removed.push(current);
		}

		tracing::debug!(page_id = %id, count = removed.len(), "page subtree removed");
		Ok(removed)
	}

	/// Number of nodes in the tree
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the tree has no nodes
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	fn collect(&self, ids: Option<&Vec<PageId>>) -> Vec<PageNode> {
		ids.map(|ids| {
			ids.iter()
				.filter_map(|id| self.nodes.get(id))
				.cloned()
				.collect()
		})
		.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn add_page_rejects_empty_slug() {
		let mut tree = PageTree::new();
		let result = tree.add_page(None, "Home".to_string(), String::new()).await;
		assert!(matches!(result, Err(CmsError::InvalidSlug(_))));
	}

	#[tokio::test]
	async fn add_page_rejects_unknown_parent() {
		let mut tree = PageTree::new();
		let result = tree
			.add_page(Some(Uuid::new_v4()), "Orphan".to_string(), "orphan".to_string())
			.await;
		assert!(matches!(result, Err(CmsError::PageNotFound(_))));
	}

	#[tokio::test]
	async fn republish_keeps_first_published_at() {
		let mut tree = PageTree::new();
		let page = tree
			.add_page(None, "Home".to_string(), "home".to_string())
			.await
			.unwrap();

		let first = Utc::now();
		tree.publish(page.id, first).unwrap();
		tree.unpublish(page.id).unwrap();
		tree.publish(page.id, first + chrono::Duration::days(1)).unwrap();

		let node = tree.get_page(page.id).await.unwrap();
		assert_eq!(node.first_published_at, Some(first));
	}
}
