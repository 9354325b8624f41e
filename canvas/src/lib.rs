//! Form canvas: widget model, free-form layout, and the canvas controller.
//!
//! This crate owns the editing session of one form without touching any UI
//! toolkit: placing widgets picked from the palette, resolving drags into
//! snapped, non-overlapping positions, and applying inspector edits. The
//! server and `form-cli` share its [`doc::SavedForm`] record as the wire
//! format of the form API.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas controller ([`engine::EngineCore`]) and its [`engine::Action`]s |
//! | [`doc`] | Widgets, per-kind attributes, and the saved-form record |
//! | [`layout`] | Initial placement, drag snapping/collision, resize limits |
//! | [`geom`] | Points and bounding boxes |
//! | [`consts`] | Shared numeric constants (margins, thresholds, size limits) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod layout;
