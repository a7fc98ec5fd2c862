//! CharCount - a single-window character counter.
//!
//! The `app` module holds the data model and controllers; `ui` holds the
//! FLTK widget construction and dialogs. The binary wires the two together
//! with one FLTK channel and a dispatch loop.

pub mod app;
pub mod ui;
