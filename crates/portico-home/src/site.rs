//! The site aggregate
//!
//! `Site` owns the page tree, the media library, the tag store and the
//! typed records for every content type, and enforces the referential
//! rules between them: optional image references are nulled when the
//! image goes away, tag join rows are cascade-deleted with their owning
//! article, and article edits refresh the last-edit date.

use crate::error::{SiteError, SiteResult};
use crate::models::article::ArticlePage;
use crate::models::categories::{ArticleCategory, ArticleCategoryFields, BlogCategory};
use crate::models::home_page::{HomePage, HomePageFields};
use crate::models::tag_index::ArticleTagIndexPage;
use crate::models::wikidata::WikidataClass;
use crate::settings::SiteSettings;
use chrono::{DateTime, NaiveDate, Utc};
use portico_cms::blocks::StreamField;
use portico_cms::media::{Document, Image, ImageId, MediaLibrary};
use portico_cms::pages::{PageId, PageNode, PageTree};
use portico_taggit::{Tag, TagManager, Taggable};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Listing view of an article, as handed to templates
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
	/// Page id
	pub id: PageId,
	/// Page title
	pub title: String,
	/// URL slug
	pub slug: String,
	/// Slug path from the site root
	pub path: String,
	/// Whether the article is published
	pub live: bool,
	/// First publish timestamp, `None` while draft
	pub first_published_at: Option<DateTime<Utc>>,
	/// Editor-entered post date
	pub date: NaiveDate,
	/// Feed image reference
	pub feed_image: Option<ImageId>,
	/// Tag names in assignment order
	pub tags: Vec<String>,
}

/// Pending changes to an article; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ArticleUpdate {
	/// Replacement body
	pub body: Option<StreamField>,
	/// Replacement post date
	pub date: Option<NaiveDate>,
	/// Replacement feed image; `Some(None)` clears it
	pub feed_image: Option<Option<ImageId>>,
}

/// Content store for one portal site and its sub-sites
#[derive(Debug, Default)]
pub struct Site {
	settings: SiteSettings,
	tree: PageTree,
	media: MediaLibrary,
	tags: TagManager,
	home_pages: HashMap<PageId, HomePage>,
	articles: HashMap<PageId, ArticlePage>,
	tag_indexes: HashMap<PageId, ArticleTagIndexPage>,
	wikidata_classes: HashMap<PageId, WikidataClass>,
	article_categories: HashMap<PageId, ArticleCategory>,
	blog_categories: HashMap<Uuid, BlogCategory>,
}

impl Site {
	/// A site with default settings
	pub fn new() -> Self {
		Self::default()
	}

	/// A site with explicit settings
	pub fn with_settings(settings: SiteSettings) -> Self {
		Self {
			settings,
			..Self::default()
		}
	}

	/// Site settings
	pub fn settings(&self) -> &SiteSettings {
		&self.settings
	}

	/// The page hierarchy
	pub fn tree(&self) -> &PageTree {
		&self.tree
	}

	/// The media library
	pub fn media(&self) -> &MediaLibrary {
		&self.media
	}

	/// The tag store
	pub fn tags(&self) -> &TagManager {
		&self.tags
	}

	// ---- page creation ----

	/// Create a home page at the site root
	pub async fn create_home_page(
		&mut self,
		title: &str,
		slug: &str,
		fields: HomePageFields,
	) -> SiteResult<PageNode> {
		if let Some(image_id) = fields.intro_image {
			self.media.get_image(image_id).await?;
		}
		let node = self
			.tree
			.add_page(None, title.to_string(), slug.to_string())
			.await?;
		self.home_pages.insert(
			node.id,
			HomePage {
				page_id: node.id,
				site_url: fields.site_url,
				intro: fields.intro,
				intro_image: fields.intro_image,
				intro_articles: fields.intro_articles,
			},
		);
		Ok(node)
	}

	/// Create an article under a parent page. The last-edit date starts
	/// at today, like any other edit.
	pub async fn create_article(
		&mut self,
		parent: PageId,
		title: &str,
		slug: &str,
		date: NaiveDate,
		body: StreamField,
	) -> SiteResult<PageNode> {
		let node = self
			.tree
			.add_page(Some(parent), title.to_string(), slug.to_string())
			.await?;
		self.articles.insert(
			node.id,
			ArticlePage {
				page_id: node.id,
				body,
				date,
				last_edit_date: Utc::now().date_naive(),
				feed_image: None,
			},
		);
		Ok(node)
	}

	/// Create a tag-index page
	pub async fn create_tag_index(
		&mut self,
		parent: Option<PageId>,
		title: &str,
		slug: &str,
	) -> SiteResult<PageNode> {
		let node = self
			.tree
			.add_page(parent, title.to_string(), slug.to_string())
			.await?;
		self.tag_indexes
			.insert(node.id, ArticleTagIndexPage { page_id: node.id });
		Ok(node)
	}

	/// Create a Wikidata class page
	pub async fn create_wikidata_class(
		&mut self,
		parent: Option<PageId>,
		title: &str,
		slug: &str,
		class_qid: &str,
		featured_pids: Vec<String>,
	) -> SiteResult<PageNode> {
		let node = self
			.tree
			.add_page(parent, title.to_string(), slug.to_string())
			.await?;
		self.wikidata_classes.insert(
			node.id,
			WikidataClass {
				page_id: node.id,
				class_qid: class_qid.to_string(),
				featured_pids,
			},
		);
		Ok(node)
	}

	/// Create an article category page
	pub async fn create_article_category(
		&mut self,
		parent: Option<PageId>,
		title: &str,
		slug: &str,
		fields: ArticleCategoryFields,
	) -> SiteResult<PageNode> {
		if let Some(image_id) = fields.icon {
			self.media.get_image(image_id).await?;
		}
		if let Some(image_id) = fields.intro_image {
			self.media.get_image(image_id).await?;
		}
		let node = self
			.tree
			.add_page(parent, title.to_string(), slug.to_string())
			.await?;
		self.article_categories.insert(
			node.id,
			ArticleCategory {
				page_id: node.id,
				name: fields.name,
				icon: fields.icon,
				intro: fields.intro,
				intro_image: fields.intro_image,
			},
		);
		Ok(node)
	}

	/// Add a blog-category snippet
	pub async fn add_blog_category(
		&mut self,
		name: &str,
		icon: Option<ImageId>,
	) -> SiteResult<BlogCategory> {
		if let Some(image_id) = icon {
			self.media.get_image(image_id).await?;
		}
		let category = BlogCategory::new(name, icon);
		self.blog_categories.insert(category.id, category.clone());
		Ok(category)
	}

	// ---- publication ----

	/// Publish a page
	pub fn publish(&mut self, id: PageId, at: DateTime<Utc>) -> SiteResult<()> {
		Ok(self.tree.publish(id, at)?)
	}

	/// Take a page offline
	pub fn unpublish(&mut self, id: PageId) -> SiteResult<()> {
		Ok(self.tree.unpublish(id)?)
	}

	// ---- record access ----

	/// Look up a home page record
	pub fn home_page(&self, id: PageId) -> SiteResult<&HomePage> {
		self.home_pages.get(&id).ok_or(SiteError::RecordNotFound {
			type_name: "HomePage",
			page_id: id,
		})
	}

	/// Look up an article record
	pub fn article(&self, id: PageId) -> SiteResult<&ArticlePage> {
		self.articles.get(&id).ok_or(SiteError::RecordNotFound {
			type_name: "ArticlePage",
			page_id: id,
		})
	}

	/// Look up a tag-index record
	pub fn tag_index(&self, id: PageId) -> SiteResult<&ArticleTagIndexPage> {
		self.tag_indexes.get(&id).ok_or(SiteError::RecordNotFound {
			type_name: "ArticleTagIndexPage",
			page_id: id,
		})
	}

	/// Look up a Wikidata class record
	pub fn wikidata_class(&self, id: PageId) -> SiteResult<&WikidataClass> {
		self.wikidata_classes
			.get(&id)
			.ok_or(SiteError::RecordNotFound {
				type_name: "WikidataClass",
				page_id: id,
			})
	}

	/// Look up an article category record
	pub fn article_category(&self, id: PageId) -> SiteResult<&ArticleCategory> {
		self.article_categories
			.get(&id)
			.ok_or(SiteError::RecordNotFound {
				type_name: "ArticleCategory",
				page_id: id,
			})
	}

	/// Look up a blog-category snippet
	pub fn blog_category(&self, id: Uuid) -> SiteResult<&BlogCategory> {
		self.blog_categories
			.get(&id)
			.ok_or(SiteError::RecordNotFound {
				type_name: "BlogCategory",
				page_id: id,
			})
	}

	/// All blog-category snippets, ordered by name
	pub fn blog_categories(&self) -> Vec<&BlogCategory> {
		let mut categories: Vec<&BlogCategory> = self.blog_categories.values().collect();
		categories.sort_by(|a, b| a.name.cmp(&b.name));
		categories
	}

	// ---- article mutation ----

	/// Apply pending changes to an article and refresh its last-edit date
	pub async fn update_article(&mut self, id: PageId, update: ArticleUpdate) -> SiteResult<()> {
		if let Some(Some(image_id)) = update.feed_image {
			self.media.get_image(image_id).await?;
		}
		let article = self
			.articles
			.get_mut(&id)
			.ok_or(SiteError::RecordNotFound {
				type_name: "ArticlePage",
				page_id: id,
			})?;
		if let Some(body) = update.body {
			article.body = body;
		}
		if let Some(date) = update.date {
			article.date = date;
		}
		if let Some(feed_image) = update.feed_image {
			article.feed_image = feed_image;
		}
		article.last_edit_date = Utc::now().date_naive();
		tracing::debug!(page_id = %id, "article updated");
		Ok(())
	}

	/// Assign a tag to an article
	pub async fn tag_article(&mut self, id: PageId, name: &str) -> SiteResult<Tag> {
		let article = self.articles.get(&id).ok_or(SiteError::RecordNotFound {
			type_name: "ArticlePage",
			page_id: id,
		})?;
		Ok(self.tags.add_tag(article, name).await?)
	}

	/// Remove a tag from an article
	pub async fn untag_article(&mut self, id: PageId, name: &str) -> SiteResult<()> {
		let article = self.articles.get(&id).ok_or(SiteError::RecordNotFound {
			type_name: "ArticlePage",
			page_id: id,
		})?;
		Ok(self.tags.remove_tag(article, name).await?)
	}

	/// Tags carried by an article, in assignment order
	pub async fn article_tags(&self, id: PageId) -> SiteResult<Vec<Tag>> {
		let article = self.article(id)?;
		Ok(self.tags.tags_for(article).await)
	}

	/// Articles carrying the named tag, in tag-assignment order. An
	/// unknown tag yields an empty list.
	pub async fn articles_tagged(&self, name: &str) -> Vec<ArticleSummary> {
		let object_ids = self
			.tags
			.objects_tagged(ArticlePage::content_type_name(), name)
			.await;
		let mut summaries = Vec::with_capacity(object_ids.len());
		for object_id in object_ids {
			let Ok(page_id) = Uuid::parse_str(&object_id) else {
				continue;
			};
			if let Some(summary) = self.article_summary(page_id).await {
				summaries.push(summary);
			}
		}
		summaries
	}

	/// Listing view of one article, when both its node and record exist
	pub async fn article_summary(&self, id: PageId) -> Option<ArticleSummary> {
		let article = self.articles.get(&id)?;
		let node = self.tree.get_page(id).await.ok()?;
		let tags = self
			.tags
			.tags_for(article)
			.await
			.into_iter()
			.map(|tag| tag.name)
			.collect();
		Some(ArticleSummary {
			id,
			title: node.title,
			slug: node.slug,
			path: node.path,
			live: node.live,
			first_published_at: node.first_published_at,
			date: article.date,
			feed_image: article.feed_image,
			tags,
		})
	}

	// ---- deletion and referential rules ----

	/// Delete an article, cascade-deleting its tag join rows
	pub async fn delete_article(&mut self, id: PageId) -> SiteResult<Vec<PageId>> {
		if !self.articles.contains_key(&id) {
			return Err(SiteError::RecordNotFound {
				type_name: "ArticlePage",
				page_id: id,
			});
		}
		self.delete_page(id).await
	}

	/// Delete any page and its descendants, dropping each removed page's
	/// typed record and cascading article tag rows.
	pub async fn delete_page(&mut self, id: PageId) -> SiteResult<Vec<PageId>> {
		let removed = self.tree.remove(id).await?;
		for page_id in &removed {
			if self.articles.remove(page_id).is_some() {
				self.tags
					.remove_object(ArticlePage::content_type_name(), &page_id.to_string())
					.await;
			}
			self.home_pages.remove(page_id);
			self.tag_indexes.remove(page_id);
			self.wikidata_classes.remove(page_id);
			self.article_categories.remove(page_id);
		}
		Ok(removed)
	}

	// ---- media ----

	/// Add an image to the library
	pub async fn add_image(
		&mut self,
		title: &str,
		file: &str,
		dimensions: Option<(u32, u32)>,
	) -> Image {
		self.media
			.add_image(title.to_string(), file.to_string(), dimensions)
			.await
	}

	/// Add a document to the library
	pub async fn add_document(&mut self, title: &str, file: &str) -> Document {
		self.media.add_document(title.to_string(), file.to_string()).await
	}

	/// Delete an image and null every optional reference pointing at it.
	/// Owning records are never deleted.
	pub async fn delete_image(&mut self, id: ImageId) -> SiteResult<Image> {
		let image = self.media.remove_image(id).await?;
		let mut cleared = 0usize;

		for home in self.home_pages.values_mut() {
			if home.intro_image == Some(id) {
				home.intro_image = None;
				cleared += 1;
			}
		}
		for article in self.articles.values_mut() {
			if article.feed_image == Some(id) {
				article.feed_image = None;
				cleared += 1;
			}
		}
		for category in self.article_categories.values_mut() {
			if category.icon == Some(id) {
				category.icon = None;
				cleared += 1;
			}
			if category.intro_image == Some(id) {
				category.intro_image = None;
				cleared += 1;
			}
		}
		for category in self.blog_categories.values_mut() {
			if category.icon == Some(id) {
				category.icon = None;
				cleared += 1;
			}
		}

		tracing::debug!(image_id = %id, cleared, "image deleted, references nulled");
		Ok(image)
	}
}
