//! Shared numeric constants for the canvas crate.

// ── Placement ───────────────────────────────────────────────────

/// Distance from the canvas top-left corner to the first widget.
pub const ORIGIN_OFFSET: f64 = 10.0;

/// Nominal row pitch. Half of it is the tolerance for "same row" when
/// placing a new widget.
pub const ROW_SPACING: f64 = 60.0;

/// Horizontal gap between neighboring widgets.
pub const H_MARGIN: f64 = 10.0;

/// Vertical gap between stacked widgets.
pub const V_MARGIN: f64 = 10.0;

// ── Dragging ────────────────────────────────────────────────────

/// Distance in pixels within which a dragged widget snaps to a neighbor's edge.
pub const ALIGN_THRESHOLD: f64 = 5.0;

// ── Resizing ────────────────────────────────────────────────────

pub const MIN_WIDTH: f64 = 50.0;
pub const MAX_WIDTH: f64 = 500.0;

pub const MIN_HEIGHT: f64 = 20.0;
pub const MAX_HEIGHT: f64 = 500.0;
