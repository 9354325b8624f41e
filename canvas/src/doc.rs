//! Document model: form widgets, their attributes, and the saved-form record.
//!
//! This module defines what sits on the form canvas (`Widget`, `WidgetKind`),
//! the per-kind content fields (`Attributes`), shared presentation fields
//! (`Style`), a sparse-update type for inspector edits (`WidgetPatch`), and
//! the persisted record exchanged with the form store (`SavedForm`).
//!
//! Attributes are a tagged union keyed by kind family. A widget's attributes
//! always belong to its kind: `Attributes::for_kind` builds the defaults and
//! `Widget::apply_patch` refuses a variant from another family.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::geom::Bounds;

/// Unique identifier for a widget within one form. Assigned in creation
/// order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// The kind of a form widget. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    // Text entry.
    Text,
    Number,
    Email,
    Mobile,
    Date,
    Time,
    Time24,
    Textarea,
    File,
    // Static text.
    Label,
    Heading,
    Paragraph,
    Link,
    // Choices.
    Select,
    Checkbox,
    CheckboxList,
    Radio,
    RadioList,
    // Media.
    Image,
    Video,
    Signature,
    // Containers.
    Div,
    Groupbox,
    Button,
}

impl WidgetKind {
    /// Every kind, in palette order.
    pub const ALL: [WidgetKind; 24] = [
        Self::Text,
        Self::Number,
        Self::Email,
        Self::Mobile,
        Self::Date,
        Self::Time,
        Self::Time24,
        Self::Textarea,
        Self::File,
        Self::Label,
        Self::Heading,
        Self::Paragraph,
        Self::Link,
        Self::Select,
        Self::Checkbox,
        Self::CheckboxList,
        Self::Radio,
        Self::RadioList,
        Self::Image,
        Self::Video,
        Self::Signature,
        Self::Div,
        Self::Groupbox,
        Self::Button,
    ];

    /// Whether the widget is an interactive form control. Controls only
    /// resize horizontally; their height follows the text flow.
    #[must_use]
    pub fn is_input(self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Number
                | Self::Email
                | Self::Mobile
                | Self::Date
                | Self::Time
                | Self::Time24
                | Self::Textarea
                | Self::File
                | Self::Select
                | Self::Checkbox
                | Self::CheckboxList
                | Self::Radio
                | Self::RadioList
        )
    }

    #[must_use]
    pub fn resizes_vertically(self) -> bool {
        !self.is_input()
    }

    /// Width and height given to a freshly added widget.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Text
            | Self::Number
            | Self::Email
            | Self::Mobile
            | Self::Date
            | Self::Time
            | Self::Time24
            | Self::File
            | Self::Select => (200.0, 50.0),
            Self::Textarea | Self::Signature => (200.0, 80.0),
            Self::Label | Self::Heading | Self::Paragraph | Self::Link | Self::Checkbox | Self::Radio => (150.0, 50.0),
            Self::CheckboxList | Self::RadioList => (150.0, 90.0),
            Self::Image => (200.0, 150.0),
            Self::Video => (240.0, 160.0),
            Self::Div | Self::Groupbox => (300.0, 200.0),
            Self::Button => (120.0, 50.0),
        }
    }
}

/// Content fields of a text-entry control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputAttrs {
    pub name: String,
    pub placeholder: String,
    pub value: String,
    pub label_text: String,
    pub required: bool,
    /// Only meaningful for `time`: show a 12-hour clock.
    pub format_12h: bool,
}

/// Content of a static text element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextAttrs {
    pub label_text: String,
    /// Link target; only meaningful for `link`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A select box or a checkbox/radio list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChoiceAttrs {
    pub name: String,
    pub label_text: String,
    pub options: Vec<String>,
    /// Currently chosen option, empty when nothing is chosen.
    pub value: String,
}

/// A single checkbox or radio button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleAttrs {
    pub name: String,
    pub label_text: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelAttrs {
    pub label_text: String,
}

/// Kind-specific content of a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Attributes {
    Input(InputAttrs),
    Text(TextAttrs),
    Choice(ChoiceAttrs),
    Toggle(ToggleAttrs),
    Media(MediaAttrs),
    Container(LabelAttrs),
    Button(LabelAttrs),
}

impl Attributes {
    /// Default attributes for a newly created widget of `kind`.
    #[must_use]
    pub fn for_kind(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Text
            | WidgetKind::Number
            | WidgetKind::Email
            | WidgetKind::Mobile
            | WidgetKind::Date
            | WidgetKind::Time
            | WidgetKind::Time24
            | WidgetKind::Textarea
            | WidgetKind::File => Self::Input(InputAttrs::default()),
            WidgetKind::Label | WidgetKind::Heading | WidgetKind::Paragraph | WidgetKind::Link => {
                Self::Text(TextAttrs::default())
            }
            WidgetKind::Select | WidgetKind::CheckboxList | WidgetKind::RadioList => Self::Choice(ChoiceAttrs {
                options: vec!["Option 1".to_owned(), "Option 2".to_owned()],
                ..ChoiceAttrs::default()
            }),
            WidgetKind::Checkbox | WidgetKind::Radio => Self::Toggle(ToggleAttrs::default()),
            WidgetKind::Image | WidgetKind::Video | WidgetKind::Signature => Self::Media(MediaAttrs::default()),
            WidgetKind::Div | WidgetKind::Groupbox => Self::Container(LabelAttrs::default()),
            WidgetKind::Button => Self::Button(LabelAttrs { label_text: "Button".to_owned() }),
        }
    }

    /// Whether these attributes are the family used by `kind`.
    #[must_use]
    pub fn matches(&self, kind: WidgetKind) -> bool {
        mem::discriminant(self) == mem::discriminant(&Self::for_kind(kind))
    }

    /// Caption shown on the widget, if the family has one.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        match self {
            Self::Input(a) => Some(&a.label_text),
            Self::Text(a) => Some(&a.label_text),
            Self::Choice(a) => Some(&a.label_text),
            Self::Toggle(a) => Some(&a.label_text),
            Self::Container(a) | Self::Button(a) => Some(&a.label_text),
            Self::Media(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Presentation fields shared by every kind. Absent fields use the
/// renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl Style {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge: every field present in `other` replaces ours.
    pub fn merge(&mut self, other: &Style) {
        fn take<T: Clone>(dst: &mut Option<T>, src: Option<&T>) {
            if let Some(v) = src {
                *dst = Some(v.clone());
            }
        }
        take(&mut self.font_size, other.font_size.as_ref());
        take(&mut self.font_family, other.font_family.as_ref());
        take(&mut self.font_weight, other.font_weight.as_ref());
        take(&mut self.text_align, other.text_align.as_ref());
        take(&mut self.color, other.color.as_ref());
        take(&mut self.background, other.background.as_ref());
        take(&mut self.border, other.border.as_ref());
        take(&mut self.border_radius, other.border_radius.as_ref());
        take(&mut self.padding, other.padding.as_ref());
        take(&mut self.margin, other.margin.as_ref());
        take(&mut self.box_shadow, other.box_shadow.as_ref());
    }
}

/// A widget placed on the form canvas, as stored in the editor and on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub kind: WidgetKind,
    #[serde(flatten)]
    pub bounds: Bounds,
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
}

impl Widget {
    /// A widget of `kind` with default attributes and no style overrides.
    #[must_use]
    pub fn new(id: WidgetId, kind: WidgetKind, bounds: Bounds) -> Self {
        Self { id, kind, bounds, attributes: Attributes::for_kind(kind), style: Style::default() }
    }

    /// Apply a sparse update. Returns false without touching the widget if
    /// the patch carries attributes from another kind family.
    pub fn apply_patch(&mut self, patch: &WidgetPatch) -> bool {
        if let Some(ref attributes) = patch.attributes {
            if !attributes.matches(self.kind) {
                return false;
            }
        }
        if let Some(x) = patch.x {
            self.bounds.x = x;
        }
        if let Some(y) = patch.y {
            self.bounds.y = y;
        }
        if let Some(w) = patch.width {
            self.bounds.width = w;
        }
        if let Some(h) = patch.height {
            self.bounds.height = h;
        }
        if let Some(ref attributes) = patch.attributes {
            self.attributes = attributes.clone();
        }
        if let Some(ref style) = patch.style {
            self.style.merge(style);
        }
        true
    }
}

/// Sparse update for a widget. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Replaces the attributes wholesale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    /// Merged field by field into the current style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

/// A named, persisted snapshot of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedForm {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub data: Vec<Widget>,
}
