//! Rangectl TUI: a terminal host environment for range controls.
//!
//! Mounts the controls of a control set, routes crossterm mouse events to
//! them the way a browser routes pointer events to an element and its
//! document-level listeners, and paints each control from its
//! `ShadowTree`:
//! - Press on a control → hit test → `pointer_down`
//! - Drag / release anywhere → the control holding document listeners
//! - Change notifications → timestamped event log

pub mod app;
pub mod cells;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::{handle_key, handle_mouse};

#[cfg(test)]
mod test_helpers;
