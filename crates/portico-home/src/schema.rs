//! Relational schema declarations
//!
//! How the host maps the content records to columns when it persists
//! them. The referential rules live here as foreign-key actions: every
//! optional image reference is `ON DELETE SET NULL`, tag join rows are
//! `ON DELETE CASCADE` from both the article and the tag side. The
//! in-process [`crate::site::Site`] enforces the same semantics.

use sea_query::{
	Alias, ColumnDef, ColumnType, ForeignKey, ForeignKeyAction, PostgresQueryBuilder, Table,
	TableCreateStatement,
};

/// `images` table
pub fn images_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("images"))
		.if_not_exists()
		.col(ColumnDef::new(Alias::new("id")).uuid().not_null().primary_key())
		.col(ColumnDef::new(Alias::new("title")).string().not_null())
		.col(ColumnDef::new(Alias::new("file")).string().not_null())
		.col(ColumnDef::new(Alias::new("width")).integer().null())
		.col(ColumnDef::new(Alias::new("height")).integer().null())
		.to_owned()
}

/// `documents` table
pub fn documents_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("documents"))
		.if_not_exists()
		.col(ColumnDef::new(Alias::new("id")).uuid().not_null().primary_key())
		.col(ColumnDef::new(Alias::new("title")).string().not_null())
		.col(ColumnDef::new(Alias::new("file")).string().not_null())
		.to_owned()
}

/// `tags` table
pub fn tags_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("tags"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.big_integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(
			ColumnDef::new(Alias::new("name"))
				.string_len(100)
				.not_null()
				.unique_key(),
		)
		.col(ColumnDef::new(Alias::new("slug")).string_len(100).not_null())
		.col(
			ColumnDef::new(Alias::new("created_at"))
				.timestamp_with_time_zone()
				.not_null(),
		)
		.to_owned()
}

/// `home_page` table
pub fn home_page_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("home_page"))
		.if_not_exists()
		.col(ColumnDef::new(Alias::new("page_id")).uuid().not_null().primary_key())
		.col(ColumnDef::new(Alias::new("site_url")).string().not_null())
		.col(ColumnDef::new(Alias::new("intro")).text().not_null())
		.col(ColumnDef::new(Alias::new("intro_image_id")).uuid().null())
		.col(ColumnDef::new(Alias::new("intro_articles")).text().not_null())
		.foreign_key(
			ForeignKey::create()
				.name("fk_home_page_intro_image")
				.from(Alias::new("home_page"), Alias::new("intro_image_id"))
				.to(Alias::new("images"), Alias::new("id"))
				.on_delete(ForeignKeyAction::SetNull),
		)
		.to_owned()
}

/// `article_page` table
pub fn article_page_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("article_page"))
		.if_not_exists()
		.col(ColumnDef::new(Alias::new("page_id")).uuid().not_null().primary_key())
		.col(ColumnDef::new(Alias::new("body")).json_binary().not_null())
		.col(ColumnDef::new(Alias::new("date")).date().not_null())
		.col(ColumnDef::new(Alias::new("last_edit_date")).date().not_null())
		.col(ColumnDef::new(Alias::new("feed_image_id")).uuid().null())
		.foreign_key(
			ForeignKey::create()
				.name("fk_article_page_feed_image")
				.from(Alias::new("article_page"), Alias::new("feed_image_id"))
				.to(Alias::new("images"), Alias::new("id"))
				.on_delete(ForeignKeyAction::SetNull),
		)
		.to_owned()
}

/// `article_tags` join table, owned by both ends
pub fn article_tags_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("article_tags"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.big_integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(ColumnDef::new(Alias::new("tag_id")).big_integer().not_null())
		.col(ColumnDef::new(Alias::new("article_id")).uuid().not_null())
		.foreign_key(
			ForeignKey::create()
				.name("fk_article_tags_tag")
				.from(Alias::new("article_tags"), Alias::new("tag_id"))
				.to(Alias::new("tags"), Alias::new("id"))
				.on_delete(ForeignKeyAction::Cascade),
		)
		.foreign_key(
			ForeignKey::create()
				.name("fk_article_tags_article")
				.from(Alias::new("article_tags"), Alias::new("article_id"))
				.to(Alias::new("article_page"), Alias::new("page_id"))
				.on_delete(ForeignKeyAction::Cascade),
		)
		.to_owned()
}

/// `wikidata_class` table
pub fn wikidata_class_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("wikidata_class"))
		.if_not_exists()
		.col(ColumnDef::new(Alias::new("page_id")).uuid().not_null().primary_key())
		.col(ColumnDef::new(Alias::new("class_qid")).string().not_null())
		.col(
			ColumnDef::new(Alias::new("featured_pids"))
				.array(ColumnType::Text)
				.not_null(),
		)
		.to_owned()
}

/// `blog_category` table
pub fn blog_category_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("blog_category"))
		.if_not_exists()
		.col(ColumnDef::new(Alias::new("id")).uuid().not_null().primary_key())
		.col(ColumnDef::new(Alias::new("name")).string().not_null())
		.col(ColumnDef::new(Alias::new("icon_id")).uuid().null())
		.foreign_key(
			ForeignKey::create()
				.name("fk_blog_category_icon")
				.from(Alias::new("blog_category"), Alias::new("icon_id"))
				.to(Alias::new("images"), Alias::new("id"))
				.on_delete(ForeignKeyAction::SetNull),
		)
		.to_owned()
}

/// `article_category` table
pub fn article_category_table() -> TableCreateStatement {
	Table::create()
		.table(Alias::new("article_category"))
		.if_not_exists()
		.col(ColumnDef::new(Alias::new("page_id")).uuid().not_null().primary_key())
		.col(ColumnDef::new(Alias::new("name")).string().not_null())
		.col(ColumnDef::new(Alias::new("icon_id")).uuid().null())
		.col(ColumnDef::new(Alias::new("intro")).text().not_null())
		.col(ColumnDef::new(Alias::new("intro_image_id")).uuid().null())
		.foreign_key(
			ForeignKey::create()
				.name("fk_article_category_icon")
				.from(Alias::new("article_category"), Alias::new("icon_id"))
				.to(Alias::new("images"), Alias::new("id"))
				.on_delete(ForeignKeyAction::SetNull),
		)
		.foreign_key(
			ForeignKey::create()
				.name("fk_article_category_intro_image")
				.from(Alias::new("article_category"), Alias::new("intro_image_id"))
				.to(Alias::new("images"), Alias::new("id"))
				.on_delete(ForeignKeyAction::SetNull),
		)
		.to_owned()
}

/// Every table, in foreign-key dependency order
pub fn all_tables() -> Vec<TableCreateStatement> {
	vec![
		images_table(),
		documents_table(),
		tags_table(),
		home_page_table(),
		article_page_table(),
		article_tags_table(),
		wikidata_class_table(),
		blog_category_table(),
		article_category_table(),
	]
}

/// Render the full schema as Postgres DDL, in dependency order
pub fn create_all_sql() -> Vec<String> {
	all_tables()
		.iter()
		.map(|statement| statement.to_string(PostgresQueryBuilder))
		.collect()
}
