//! Tests for the two request-time context queries

use chrono::{Duration, NaiveDate, Utc};
use portico_cms::blocks::StreamField;
use portico_cms::pages::PageId;
use portico_cms::request::PageRequest;
use portico_home::models::HomePageFields;
use portico_home::Site;
use rstest::rstest;

fn post_date() -> NaiveDate {
	NaiveDate::from_ymd_opt(2021, 3, 14).unwrap()
}

async fn site_with_home() -> (Site, PageId) {
	let mut site = Site::new();
	let home = site
		.create_home_page("Explore", "explore", HomePageFields::default())
		.await
		.unwrap();
	(site, home.id)
}

fn article_ids(context: &portico_cms::request::Context) -> Vec<String> {
	context
		.get("articlepages")
		.expect("articlepages key present")
		.as_array()
		.expect("articlepages is a list")
		.iter()
		.map(|entry| entry["id"].as_str().unwrap().to_string())
		.collect()
}

#[rstest]
#[tokio::test]
async fn test_home_context_lists_live_children_reverse_chronologically() {
	// Arrange - one draft child and two published children
	let (mut site, home_id) = site_with_home().await;

	let _draft = site
		.create_article(home_id, "A", "a", post_date(), StreamField::new())
		.await
		.unwrap();
	let earlier = site
		.create_article(home_id, "B", "b", post_date(), StreamField::new())
		.await
		.unwrap();
	let later = site
		.create_article(home_id, "C", "c", post_date(), StreamField::new())
		.await
		.unwrap();

	let base = Utc::now();
	site.publish(earlier.id, base).unwrap();
	site.publish(later.id, base + Duration::hours(1)).unwrap();

	// Act
	let home = site.home_page(home_id).unwrap().clone();
	let context = home.get_context(&site, &PageRequest::new()).await.unwrap();

	// Assert - [C, B]: published only, descending by publish time
	assert_eq!(
		article_ids(&context),
		vec![later.id.to_string(), earlier.id.to_string()]
	);
}

#[rstest]
#[tokio::test]
async fn test_home_context_seeds_page_entry() {
	// Arrange
	let (site, home_id) = site_with_home().await;

	// Act
	let home = site.home_page(home_id).unwrap().clone();
	let context = home.get_context(&site, &PageRequest::new()).await.unwrap();

	// Assert - the node is available under both template keys
	let page = context.get("page").unwrap();
	assert_eq!(page["slug"].as_str(), Some("explore"));
	assert!(context.get("self").is_some());
}

#[rstest]
#[tokio::test]
async fn test_tag_index_returns_exactly_the_tagged_articles() {
	// Arrange - two rust articles, one python article
	let (mut site, home_id) = site_with_home().await;
	let index = site.create_tag_index(Some(home_id), "Tags", "tags").await.unwrap();

	let rust_a = site
		.create_article(home_id, "Rust A", "rust-a", post_date(), StreamField::new())
		.await
		.unwrap();
	let rust_b = site
		.create_article(home_id, "Rust B", "rust-b", post_date(), StreamField::new())
		.await
		.unwrap();
	let python = site
		.create_article(home_id, "Python", "python", post_date(), StreamField::new())
		.await
		.unwrap();

	site.tag_article(rust_a.id, "rust").await.unwrap();
	site.tag_article(rust_b.id, "rust").await.unwrap();
	site.tag_article(python.id, "python").await.unwrap();

	// Act
	let page = site.tag_index(index.id).unwrap().clone();
	let request = PageRequest::from_query_string("tag=rust");
	let context = page.get_context(&site, &request).await.unwrap();

	// Assert
	let ids = article_ids(&context);
	assert_eq!(ids, vec![rust_a.id.to_string(), rust_b.id.to_string()]);
	assert!(!ids.contains(&python.id.to_string()));
}

#[rstest]
#[tokio::test]
async fn test_tag_index_with_unmatched_tag_is_empty() {
	// Arrange
	let (mut site, home_id) = site_with_home().await;
	let index = site.create_tag_index(Some(home_id), "Tags", "tags").await.unwrap();
	let article = site
		.create_article(home_id, "Rust", "rust", post_date(), StreamField::new())
		.await
		.unwrap();
	site.tag_article(article.id, "rust").await.unwrap();

	// Act
	let page = site.tag_index(index.id).unwrap().clone();
	let request = PageRequest::from_query_string("tag=go");
	let context = page.get_context(&site, &request).await.unwrap();

	// Assert
	assert!(article_ids(&context).is_empty());
}

#[rstest]
#[tokio::test]
async fn test_tag_index_without_tag_parameter_is_empty() {
	// Arrange
	let (mut site, home_id) = site_with_home().await;
	let index = site.create_tag_index(Some(home_id), "Tags", "tags").await.unwrap();
	let article = site
		.create_article(home_id, "Rust", "rust", post_date(), StreamField::new())
		.await
		.unwrap();
	site.tag_article(article.id, "rust").await.unwrap();

	// Act - no query parameters at all
	let page = site.tag_index(index.id).unwrap().clone();
	let context = page.get_context(&site, &PageRequest::new()).await.unwrap();

	// Assert - filtering on nothing yields no results
	assert!(article_ids(&context).is_empty());
}

#[rstest]
#[tokio::test]
async fn test_tag_index_summaries_carry_tag_names() {
	// Arrange
	let (mut site, home_id) = site_with_home().await;
	let index = site.create_tag_index(Some(home_id), "Tags", "tags").await.unwrap();
	let article = site
		.create_article(home_id, "Rust", "rust", post_date(), StreamField::new())
		.await
		.unwrap();
	site.tag_article(article.id, "rust").await.unwrap();
	site.tag_article(article.id, "systems").await.unwrap();

	// Act
	let page = site.tag_index(index.id).unwrap().clone();
	let request = PageRequest::new().with_param("tag", "rust");
	let context = page.get_context(&site, &request).await.unwrap();

	// Assert
	let entries = context.get("articlepages").unwrap().as_array().unwrap().clone();
	assert_eq!(entries.len(), 1);
	let tags: Vec<&str> = entries[0]["tags"]
		.as_array()
		.unwrap()
		.iter()
		.map(|value| value.as_str().unwrap())
		.collect();
	assert_eq!(tags, vec!["rust", "systems"]);
}
