//! Declarative editor-panel metadata
//!
//! Panels describe how a page type's fields are grouped in the editing UI.
//! They carry no behavior here; the admin application walks them to build
//! forms, and [`crate::admin::PageEditor`] renders a plain-HTML rendition.

use serde::Serialize;

/// A single entry in a page type's editor layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
	/// A plain field input
	Field {
		/// Model field name
		name: String,
		/// Optional CSS class hint, e.g. `full`
		classname: Option<String>,
	},

	/// A heading-labelled group of child panels
	MultiField {
		/// Group heading shown in the editor
		heading: String,
		/// Panels inside the group
		children: Vec<Panel>,
	},

	/// An inline child-object editor, e.g. a join-row relation
	Inline {
		/// Relation name on the model
		relation: String,
		/// Label shown in the editor
		heading: String,
	},

	/// A stream-field block editor
	StreamFieldPanel {
		/// Model field name
		name: String,
		/// Optional CSS class hint
		classname: Option<String>,
	},

	/// An image chooser widget
	ImageChooser {
		/// Model field name
		name: String,
	},

	/// A document chooser widget
	DocumentChooser {
		/// Model field name
		name: String,
	},

	/// A free-text tag widget
	TagChooser {
		/// Relation name on the model
		name: String,
	},
}

impl Panel {
	/// A plain field panel
	pub fn field(name: &str) -> Self {
		Panel::Field { name: name.to_string(), classname: None }
	}

	/// A plain field panel rendered full-width
	pub fn field_full(name: &str) -> Self {
		Panel::Field {
			name: name.to_string(),
			classname: Some("full".to_string()),
		}
	}

	/// A heading-labelled group of panels
	pub fn multi(heading: &str, children: Vec<Panel>) -> Self {
		Panel::MultiField { heading: heading.to_string(), children }
	}

	/// An inline relation editor
	pub fn inline(relation: &str, heading: &str) -> Self {
		Panel::Inline {
			relation: relation.to_string(),
			heading: heading.to_string(),
		}
	}

	/// A full-width stream-field editor
	pub fn stream_field(name: &str) -> Self {
		Panel::StreamFieldPanel {
			name: name.to_string(),
			classname: Some("full".to_string()),
		}
	}

	/// An image chooser
	pub fn image_chooser(name: &str) -> Self {
		Panel::ImageChooser { name: name.to_string() }
	}

	/// A document chooser
	pub fn document_chooser(name: &str) -> Self {
		Panel::DocumentChooser { name: name.to_string() }
	}

	/// A tag widget
	pub fn tag_chooser(name: &str) -> Self {
		Panel::TagChooser { name: name.to_string() }
	}

	/// The field or relation names this panel edits, depth-first
	pub fn field_names(&self) -> Vec<&str> {
		match self {
			Panel::Field { name, .. }
			| Panel::StreamFieldPanel { name, .. }
			| Panel::ImageChooser { name }
			| Panel::DocumentChooser { name }
			| Panel::TagChooser { name } => vec![name.as_str()],
			Panel::Inline { relation, .. } => vec![relation.as_str()],
			Panel::MultiField { children, .. } => {
				children.iter().flat_map(Panel::field_names).collect()
			}
		}
	}
}

/// Flatten a panel list into the field names it edits, depth-first
pub fn field_names(panels: &[Panel]) -> Vec<&str> {
	panels.iter().flat_map(Panel::field_names).collect()
}

/// Content panels every page type starts from
pub fn base_content_panels() -> Vec<Panel> {
	vec![Panel::field("title"), Panel::field("slug")]
}

/// Promote-tab fields shared by all page types, before type-specific
/// choosers are appended
pub fn base_promote_panels() -> Vec<Panel> {
	vec![
		Panel::field("slug"),
		Panel::field("seo_title"),
		Panel::field("search_description"),
	]
}
