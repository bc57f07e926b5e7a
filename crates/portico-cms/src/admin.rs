//! Admin UI integration
//!
//! Registries the admin application reads to know which page types exist,
//! plus a plain-HTML form renderer driven by a page type's declared panels.

use crate::pages::{Page, PageNode};
use crate::panels::Panel;
use std::collections::HashMap;

/// Admin page registry
#[derive(Default)]
pub struct AdminPageRegistry {
	pages: HashMap<String, Box<dyn PageTypeDescriptor>>,
}

impl AdminPageRegistry {
	/// Create a new admin page registry
	pub fn new() -> Self {
		Self {
			pages: HashMap::new(),
		}
	}

	/// Register a page type
	pub fn register<T: PageTypeDescriptor + 'static>(&mut self, page_type: T) {
		tracing::debug!(page_type = page_type.type_name(), "page type registered");
		self.pages
			.insert(page_type.type_name().to_string(), Box::new(page_type));
	}

	/// Get a page type descriptor
	pub fn get(&self, type_name: &str) -> Option<&dyn PageTypeDescriptor> {
		self.pages.get(type_name).map(|b| b.as_ref())
	}

	/// Registered type names, sorted
	pub fn type_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Page types that may be created under the given parent
	pub fn creatable_under(&self, parent: Option<&dyn Page>) -> Vec<&str> {
		let mut names: Vec<&str> = self
			.pages
			.values()
			.filter(|descriptor| descriptor.can_create_at(parent))
			.map(|descriptor| descriptor.type_name())
			.collect();
		names.sort_unstable();
		names
	}
}

/// Descriptor for a page type in the admin
pub trait PageTypeDescriptor: Send + Sync {
	/// Get the type name
	fn type_name(&self) -> &str;

	/// Get the human-readable label
	fn label(&self) -> &str;

	/// Get the icon class/name
	fn icon(&self) -> &str;

	/// Can this page type be created as a child of the given parent?
	fn can_create_at(&self, parent: Option<&dyn Page>) -> bool;
}

/// Panel-driven edit-form renderer.
///
/// Walks a page's declared content panels and emits one form control per
/// field. Choosers render as placeholders the admin front-end replaces
/// with its widgets; no values are filled in here.
#[derive(Debug, Default)]
pub struct PageEditor;

impl PageEditor {
	/// Create a new page editor
	pub fn new() -> Self {
		Self
	}

	/// Render the edit form for a page
	pub fn render_edit_form(&self, node: &PageNode, page: &dyn Page) -> String {
		let mut html = format!(
			"<form id=\"page-edit-form\" data-page-id=\"{}\" data-page-type=\"{}\">\n",
			node.id,
			page.type_name()
		);
		for panel in page.content_panels() {
			html.push_str(&self.render_panel(&panel));
		}
		html.push_str(
			"<div class=\"form-actions\">\n\
			\t<button type=\"submit\" class=\"btn btn-primary\">Save</button>\n\
			</div>\n</form>",
		);
		html
	}

	fn render_panel(&self, panel: &Panel) -> String {
		match panel {
			Panel::Field { name, classname } => {
				let class = classname.as_deref().unwrap_or("");
				format!(
					"<div class=\"form-group {class}\">\n\
					\t<label for=\"{name}\">{name}</label>\n\
					\t<input type=\"text\" id=\"{name}\" name=\"{name}\" class=\"form-control\" />\n\
					</div>\n"
				)
			}
			Panel::MultiField { heading, children } => {
				let mut html = format!("<fieldset>\n<legend>{heading}</legend>\n");
				for child in children {
					html.push_str(&self.render_panel(child));
				}
				html.push_str("</fieldset>\n");
				html
			}
			Panel::Inline { relation, heading } => format!(
				"<div class=\"inline-panel\" data-relation=\"{relation}\">{heading}</div>\n"
			),
			Panel::StreamFieldPanel { name, classname } => {
				let class = classname.as_deref().unwrap_or("");
				format!("<div class=\"stream-field {class}\" data-field=\"{name}\"></div>\n")
			}
			Panel::ImageChooser { name } => format!(
				"<div class=\"chooser image-chooser\" data-field=\"{name}\"></div>\n"
			),
			Panel::DocumentChooser { name } => format!(
				"<div class=\"chooser document-chooser\" data-field=\"{name}\"></div>\n"
			),
			Panel::TagChooser { name } => format!(
				"<input class=\"tag-widget\" name=\"{name}\" data-widget=\"tags\" />\n"
			),
		}
	}
}
