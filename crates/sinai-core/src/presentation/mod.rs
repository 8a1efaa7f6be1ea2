//! Search overlay presentation.
//!
//! This module provides:
//! - HTML rendering of result lists and the "no results" state
//! - Overlay open/close lifecycle state
//! - Input debouncing
//! - `SearchController`, which wires engine, overlay and navigator together

mod controller;
mod debounce;
mod overlay;
mod render;

pub use controller::SearchController;
pub use debounce::Debouncer;
pub use overlay::SearchOverlay;
pub use render::{render_empty, render_result, render_results, RenderedResults, SUGGESTED_LINKS};
