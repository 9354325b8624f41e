use std::collections::HashSet;

use crate::doc::{Attributes, SavedForm, Widget, WidgetId, WidgetKind, WidgetPatch};
use crate::geom::{Bounds, Point};
use crate::layout::{self, SnapGuides};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from controller operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    WidgetCreated(Widget),
    WidgetUpdated { id: WidgetId, fields: WidgetPatch },
    WidgetDeleted { id: WidgetId },
    SelectionChanged(Option<WidgetId>),
    GuidesChanged(SnapGuides),
}

/// Canvas controller state: all logic that doesn't depend on the DOM.
///
/// Owns the widgets of the form being edited in creation order, the
/// selection, and the id counter. The host measures the canvas and feeds
/// its width in through [`EngineCore::set_canvas_width`].
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    widgets: Vec<Widget>,
    selected_id: Option<WidgetId>,
    next_id: u64,
    /// Width of the canvas element, when the host has measured it.
    pub canvas_width: Option<f64>,
    guides: SnapGuides,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace every widget with a loaded form. Clears selection and guides.
    ///
    /// The id counter never moves backwards, so ids handed out earlier in
    /// the session are not reissued. A form whose ids repeat, or that uses
    /// the last id in the space, is renumbered in load order first.
    pub fn load_snapshot(&mut self, mut widgets: Vec<Widget>) {
        let mut seen = HashSet::with_capacity(widgets.len());
        let renumber = widgets.iter().any(|w| w.id.0 == u64::MAX || !seen.insert(w.id));
        if renumber {
            for (n, widget) in (0u64..).zip(widgets.iter_mut()) {
                widget.id = WidgetId(n);
            }
        }

        let max_loaded = widgets.iter().filter_map(|w| w.id.0.checked_add(1)).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_loaded);
        self.widgets = widgets;
        self.selected_id = None;
        self.guides = SnapGuides::default();
    }

    /// Copy the current widgets into a record ready to save.
    #[must_use]
    pub fn snapshot(&self, name: &str, category: &str) -> SavedForm {
        SavedForm { name: name.to_owned(), category: category.to_owned(), data: self.widgets.clone() }
    }

    pub fn set_canvas_width(&mut self, width: f64) {
        self.canvas_width = Some(width);
    }

    // --- Selection ---

    /// Select a widget. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: WidgetId) -> Action {
        if self.widget(id).is_none() {
            return Action::None;
        }
        self.selected_id = Some(id);
        Action::SelectionChanged(Some(id))
    }

    pub fn deselect(&mut self) -> Action {
        if self.selected_id.take().is_none() {
            return Action::None;
        }
        Action::SelectionChanged(None)
    }

    // --- Mutations ---

    /// Append a new widget of `kind` with default attributes, placed after
    /// the last-created widget. Returns `Action::None` once the id space is
    /// exhausted.
    pub fn add(&mut self, kind: WidgetKind) -> Action {
        let Some(following) = self.next_id.checked_add(1) else {
            return Action::None;
        };
        let id = WidgetId(self.next_id);
        self.next_id = following;

        let (width, height) = kind.default_size();
        let origin = layout::place_initial_position(&self.widgets, width, height);

        let widget = Widget::new(id, kind, Bounds::new(origin.x, origin.y, width, height));
        self.widgets.push(widget.clone());
        Action::WidgetCreated(widget)
    }

    /// Remove a widget, clearing the selection if it was selected.
    pub fn delete(&mut self, id: WidgetId) -> Action {
        let Some(idx) = self.index_of(id) else {
            return Action::None;
        };
        self.widgets.remove(idx);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        Action::WidgetDeleted { id }
    }

    /// Shallow-merge a sparse update into a widget. Returns `Action::None`
    /// for unknown ids and for attributes that don't belong to the widget's kind.
    ///
    /// Geometry in the patch obeys the same limits as dragging and resizing:
    /// sizes are clamped, height is dropped for kinds that only resize
    /// horizontally, and the position is kept on the canvas. No collision
    /// pass runs.
    pub fn update_attributes(&mut self, id: WidgetId, patch: WidgetPatch) -> Action {
        let canvas_width = self.canvas_width;
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id == id) else {
            return Action::None;
        };

        let vertical = widget.kind.resizes_vertically();
        let width = patch.width.map(layout::resize_width);
        let height = patch.height.filter(|_| vertical).map(layout::resize_height);
        let (x, y) = if patch.x.is_some() || patch.y.is_some() {
            let proposed = Point::new(patch.x.unwrap_or(widget.bounds.x), patch.y.unwrap_or(widget.bounds.y));
            let clamped = layout::clamp_to_canvas(proposed, width.unwrap_or(widget.bounds.width), canvas_width);
            (patch.x.map(|_| clamped.x), patch.y.map(|_| clamped.y))
        } else {
            (None, None)
        };
        let patch = WidgetPatch { x, y, width, height, ..patch };

        if !widget.apply_patch(&patch) {
            return Action::None;
        }
        Action::WidgetUpdated { id, fields: patch }
    }

    /// Move a widget toward `(x, y)`, applying neighbor snapping, overlap
    /// escape, and canvas clamping.
    pub fn update_position(&mut self, id: WidgetId, x: f64, y: f64) -> Vec<Action> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };
        let resolved = layout::resolve_move(&self.widgets[idx], Point::new(x, y), &self.widgets, self.canvas_width);

        let fields = WidgetPatch { x: Some(resolved.position.x), y: Some(resolved.position.y), ..WidgetPatch::default() };
        self.widgets[idx].apply_patch(&fields);
        self.guides = resolved.guides;

        vec![Action::WidgetUpdated { id, fields }, Action::GuidesChanged(resolved.guides)]
    }

    /// Resize a widget within the allowed range. Height only changes for
    /// kinds that resize vertically. Never re-runs collision.
    pub fn resize(&mut self, id: WidgetId, width: f64, height: Option<f64>) -> Action {
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id == id) else {
            return Action::None;
        };
        let vertical = widget.kind.resizes_vertically();
        let fields = WidgetPatch {
            width: Some(layout::resize_width(width)),
            height: height.filter(|_| vertical).map(layout::resize_height),
            ..WidgetPatch::default()
        };
        widget.apply_patch(&fields);
        Action::WidgetUpdated { id, fields }
    }

    /// Replace a widget's attributes. Convenience over `update_attributes`.
    pub fn set_attributes(&mut self, id: WidgetId, attributes: Attributes) -> Action {
        self.update_attributes(id, WidgetPatch { attributes: Some(attributes), ..WidgetPatch::default() })
    }

    /// Drag finished: hide the alignment guides.
    pub fn end_drag(&mut self) -> Action {
        if self.guides.is_empty() {
            return Action::None;
        }
        self.guides = SnapGuides::default();
        Action::GuidesChanged(self.guides)
    }

    // --- Queries ---

    /// Widgets in creation order.
    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    #[must_use]
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn selection(&self) -> Option<WidgetId> {
        self.selected_id
    }

    #[must_use]
    pub fn selected_widget(&self) -> Option<&Widget> {
        self.selected_id.and_then(|id| self.widget(id))
    }

    #[must_use]
    pub fn is_selected(&self, id: WidgetId) -> bool {
        self.selected_id == Some(id)
    }

    /// Alignment guides from the most recent move.
    #[must_use]
    pub fn guides(&self) -> SnapGuides {
        self.guides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn index_of(&self, id: WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| w.id == id)
    }
}
