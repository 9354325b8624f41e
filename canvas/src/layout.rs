//! Free-form layout: initial placement, drag snapping, and resize limits.
//!
//! Everything here is a pure function of the widgets passed in. The canvas
//! controller in [`crate::engine`] owns the widgets and applies the results.
//!
//! Overlap resolution in [`resolve_move`] is a single greedy pass over the
//! neighbors in ascending id order. Escaping one neighbor can land the
//! widget on another that was already visited; the result is an aid for
//! interactive dragging, not an overlap-free guarantee.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{
    ALIGN_THRESHOLD, H_MARGIN, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH, ORIGIN_OFFSET, ROW_SPACING, V_MARGIN,
};
use crate::doc::Widget;
use crate::geom::{Bounds, Point};

/// Alignment guides shown while dragging.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapGuides {
    /// X coordinate of a vertical guide through a neighbor's center.
    pub vertical: Option<f64>,
    /// Y coordinate of a horizontal guide through a neighbor's center.
    pub horizontal: Option<f64>,
}

impl SnapGuides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}

/// Result of [`resolve_move`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResolution {
    pub position: Point,
    pub guides: SnapGuides,
}

/// Starting position for a widget about to be appended to `existing`.
///
/// Only the last-created widget is consulted. If it sits on the first row
/// the new widget is packed to its right, otherwise a new row starts below
/// it. The new widget may still overlap earlier widgets.
#[must_use]
pub fn place_initial_position(existing: &[Widget], _new_width: f64, _new_height: f64) -> Point {
    let Some(last) = existing.last() else {
        return Point::new(ORIGIN_OFFSET, ORIGIN_OFFSET);
    };
    let last = last.bounds;

    // Same-row detection compares against the first row, not the last row.
    let row_y = ORIGIN_OFFSET;
    if (last.y - row_y).abs() < ROW_SPACING / 2.0 {
        Point::new(last.right() + H_MARGIN, last.y)
    } else {
        Point::new(ORIGIN_OFFSET, last.bottom() + V_MARGIN)
    }
}

/// Adjust a proposed drag position for `current`.
///
/// For each neighbor: snap `y` and then `x` to the neighbor's edge when
/// within [`ALIGN_THRESHOLD`], then push out of any overlap. Widgets roughly
/// on the same row escape sideways to whichever side is nearer; others are
/// pushed below the neighbor. The result is clamped to `x >= 0`, `y >= 0`,
/// and to the canvas width when it is known.
#[must_use]
pub fn resolve_move(current: &Widget, proposed: Point, others: &[Widget], canvas_width: Option<f64>) -> MoveResolution {
    let mut x = proposed.x;
    let mut y = proposed.y;
    let mut guides = SnapGuides::default();

    let mut neighbors: Vec<&Widget> = others.iter().filter(|o| o.id != current.id).collect();
    neighbors.sort_by_key(|o| o.id);

    for other in neighbors {
        let o = other.bounds;

        if (y - o.y).abs() <= ALIGN_THRESHOLD {
            y = o.y;
            guides.horizontal = Some(o.center_y());
        }
        if (x - o.x).abs() <= ALIGN_THRESHOLD {
            x = o.x;
            guides.vertical = Some(o.center_x());
        }

        let moving = current.bounds.at(Point::new(x, y));
        if moving.overlaps(&o) {
            if (y - o.y).abs() < V_MARGIN * 2.0 {
                x = nearest_side_escape(x, &moving, &o);
            } else {
                y = o.bottom() + V_MARGIN;
            }
        }
    }

    let position = clamp_to_canvas(Point::new(x, y), current.bounds.width, canvas_width);
    MoveResolution { position, guides }
}

/// Keep a widget of `width` inside the canvas: `x >= 0`, `y >= 0`, and its
/// right edge within `canvas_width` when known. A canvas narrower than the
/// widget pins it to the left edge.
#[must_use]
pub fn clamp_to_canvas(position: Point, width: f64, canvas_width: Option<f64>) -> Point {
    let mut x = position.x;
    if let Some(canvas_width) = canvas_width {
        x = x.min((canvas_width - width).max(0.0));
    }
    Point::new(x.max(0.0), position.y.max(0.0))
}

/// X that places `moving` just right or just left of `other`, whichever is nearer to `x`.
fn nearest_side_escape(x: f64, moving: &Bounds, other: &Bounds) -> f64 {
    let right = other.right() + H_MARGIN;
    let left = other.x - moving.width - H_MARGIN;
    if (right - x).abs() <= (left - x).abs() { right } else { left }
}

/// Clamp a proposed width to the allowed range.
#[must_use]
pub fn resize_width(proposed: f64) -> f64 {
    proposed.clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Clamp a proposed height to the allowed range.
#[must_use]
pub fn resize_height(proposed: f64) -> f64 {
    proposed.clamp(MIN_HEIGHT, MAX_HEIGHT)
}
