#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn make_widget(id: u64, kind: WidgetKind) -> Widget {
    Widget::new(WidgetId(id), kind, Bounds::new(10.0, 10.0, 200.0, 50.0))
}

// =============================================================
// WidgetKind
// =============================================================

#[test]
fn kind_serializes_camel_case() {
    let cases = [
        (WidgetKind::Text, "\"text\""),
        (WidgetKind::Time24, "\"time24\""),
        (WidgetKind::CheckboxList, "\"checkboxList\""),
        (WidgetKind::RadioList, "\"radioList\""),
        (WidgetKind::Groupbox, "\"groupbox\""),
        (WidgetKind::Button, "\"button\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
    }
}

#[test]
fn kind_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<WidgetKind>("\"slider\"").is_err());
}

#[test]
fn input_kinds_resize_only_horizontally() {
    assert!(WidgetKind::Text.is_input());
    assert!(WidgetKind::RadioList.is_input());
    assert!(!WidgetKind::Text.resizes_vertically());
    assert!(!WidgetKind::Label.is_input());
    assert!(WidgetKind::Image.resizes_vertically());
    assert!(WidgetKind::Div.resizes_vertically());
}

#[test]
fn default_sizes_are_positive() {
    for kind in WidgetKind::ALL {
        let (w, h) = kind.default_size();
        assert!(w > 0.0 && h > 0.0, "{kind:?} has empty default size");
    }
}

#[test]
fn text_and_label_default_widths() {
    assert_eq!(WidgetKind::Text.default_size(), (200.0, 50.0));
    assert_eq!(WidgetKind::Label.default_size(), (150.0, 50.0));
}

// =============================================================
// Attributes
// =============================================================

#[test]
fn default_attributes_match_their_kind() {
    for kind in WidgetKind::ALL {
        assert!(Attributes::for_kind(kind).matches(kind), "{kind:?}");
    }
}

#[test]
fn attributes_reject_other_family() {
    let attrs = Attributes::Media(MediaAttrs::default());
    assert!(attrs.matches(WidgetKind::Image));
    assert!(!attrs.matches(WidgetKind::Text));
    assert!(!attrs.matches(WidgetKind::Button));
}

#[test]
fn container_and_button_are_distinct_families() {
    let container = Attributes::Container(LabelAttrs::default());
    assert!(container.matches(WidgetKind::Div));
    assert!(!container.matches(WidgetKind::Button));
}

#[test]
fn choice_defaults_have_options() {
    let Attributes::Choice(choice) = Attributes::for_kind(WidgetKind::Select) else {
        panic!("select should use choice attributes");
    };
    assert_eq!(choice.options.len(), 2);
    assert!(choice.value.is_empty());
}

#[test]
fn button_default_label() {
    let attrs = Attributes::for_kind(WidgetKind::Button);
    assert_eq!(attrs.label_text(), Some("Button"));
}

#[test]
fn media_has_no_label() {
    assert_eq!(Attributes::for_kind(WidgetKind::Video).label_text(), None);
}

#[test]
fn attributes_serialize_with_family_tag() {
    let attrs = Attributes::Toggle(ToggleAttrs { name: "agree".into(), label_text: "I agree".into(), checked: true });
    let value = serde_json::to_value(&attrs).unwrap();
    assert_eq!(
        value,
        json!({"family": "toggle", "name": "agree", "labelText": "I agree", "checked": true})
    );
}

#[test]
fn attribute_fields_use_camel_case_on_the_wire() {
    let attrs = Attributes::Input(InputAttrs { label_text: "Start".into(), format_12h: true, ..InputAttrs::default() });
    let value = serde_json::to_value(&attrs).unwrap();
    assert_eq!(value["labelText"], json!("Start"));
    assert_eq!(value["format12h"], json!(true));
    assert!(value.get("label_text").is_none());

    let parsed: Attributes = serde_json::from_value(json!({"family": "choice", "labelText": "Size"})).unwrap();
    assert_eq!(parsed.label_text(), Some("Size"));
}

#[test]
fn attributes_missing_fields_default() {
    let attrs: Attributes = serde_json::from_value(json!({"family": "input", "placeholder": "Email"})).unwrap();
    let Attributes::Input(input) = attrs else {
        panic!("expected input attributes");
    };
    assert_eq!(input.placeholder, "Email");
    assert!(input.label_text.is_empty());
    assert!(!input.required);
}

// =============================================================
// Style
// =============================================================

#[test]
fn style_default_is_empty() {
    assert!(Style::default().is_empty());
}

#[test]
fn style_merge_overrides_present_fields_only() {
    let mut style = Style { color: Some("#000".into()), padding: Some("4px".into()), ..Style::default() };
    let incoming = Style { color: Some("#fff".into()), font_size: Some(18.0), ..Style::default() };
    style.merge(&incoming);
    assert_eq!(style.color.as_deref(), Some("#fff"));
    assert_eq!(style.padding.as_deref(), Some("4px"));
    assert_eq!(style.font_size, Some(18.0));
}

#[test]
fn style_text_align_lowercase() {
    let style = Style { text_align: Some(TextAlign::Center), ..Style::default() };
    assert_eq!(serde_json::to_value(&style).unwrap(), json!({"textAlign": "center"}));
}

// =============================================================
// Widget
// =============================================================

#[test]
fn widget_serializes_flat_bounds() {
    let widget = make_widget(7, WidgetKind::Label);
    let value = serde_json::to_value(&widget).unwrap();
    assert_eq!(value["id"], json!(7));
    assert_eq!(value["kind"], json!("label"));
    assert_eq!(value["x"], json!(10.0));
    assert_eq!(value["width"], json!(200.0));
    assert_eq!(value["attributes"]["family"], json!("text"));
    assert!(value.get("style").is_none());
}

#[test]
fn widget_serde_roundtrip_with_style() {
    let mut widget = make_widget(3, WidgetKind::Email);
    widget.style.border = Some("1px solid #ccc".into());
    widget.attributes = Attributes::Input(InputAttrs {
        name: "email".into(),
        placeholder: "you@example.com".into(),
        required: true,
        ..InputAttrs::default()
    });
    let json = serde_json::to_string(&widget).unwrap();
    let back: Widget = serde_json::from_str(&json).unwrap();
    assert_eq!(back, widget);
}

#[test]
fn widget_id_display() {
    assert_eq!(WidgetId(12).to_string(), "w12");
}

#[test]
fn apply_patch_moves_and_resizes() {
    let mut widget = make_widget(1, WidgetKind::Text);
    let ok = widget.apply_patch(&WidgetPatch { x: Some(40.0), width: Some(250.0), ..WidgetPatch::default() });
    assert!(ok);
    assert_eq!(widget.bounds, Bounds::new(40.0, 10.0, 250.0, 50.0));
}

#[test]
fn apply_patch_replaces_attributes_of_same_family() {
    let mut widget = make_widget(1, WidgetKind::Heading);
    let attrs = Attributes::Text(TextAttrs { label_text: "Contact".into(), href: None });
    assert!(widget.apply_patch(&WidgetPatch { attributes: Some(attrs.clone()), ..WidgetPatch::default() }));
    assert_eq!(widget.attributes, attrs);
}

#[test]
fn apply_patch_rejects_mismatched_attributes_without_side_effects() {
    let mut widget = make_widget(1, WidgetKind::Heading);
    let before = widget.clone();
    let patch = WidgetPatch {
        x: Some(99.0),
        attributes: Some(Attributes::Toggle(ToggleAttrs::default())),
        ..WidgetPatch::default()
    };
    assert!(!widget.apply_patch(&patch));
    assert_eq!(widget, before);
}

#[test]
fn apply_patch_merges_style() {
    let mut widget = make_widget(1, WidgetKind::Label);
    widget.style.color = Some("red".into());
    let patch = WidgetPatch {
        style: Some(Style { background: Some("blue".into()), ..Style::default() }),
        ..WidgetPatch::default()
    };
    assert!(widget.apply_patch(&patch));
    assert_eq!(widget.style.color.as_deref(), Some("red"));
    assert_eq!(widget.style.background.as_deref(), Some("blue"));
}

#[test]
fn patch_skips_absent_fields_on_wire() {
    let patch = WidgetPatch { y: Some(5.0), ..WidgetPatch::default() };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"y": 5.0}));
}

// =============================================================
// SavedForm
// =============================================================

#[test]
fn saved_form_defaults_missing_fields() {
    let form: SavedForm = serde_json::from_value(json!({"name": "intake"})).unwrap();
    assert_eq!(form.name, "intake");
    assert!(form.category.is_empty());
    assert!(form.data.is_empty());
}

#[test]
fn saved_form_roundtrip_preserves_widgets() {
    let form = SavedForm {
        name: "signup".into(),
        category: "business".into(),
        data: vec![make_widget(1, WidgetKind::Text), make_widget(2, WidgetKind::Button)],
    };
    let json = serde_json::to_string_pretty(&form).unwrap();
    let back: SavedForm = serde_json::from_str(&json).unwrap();
    assert_eq!(back, form);
}
