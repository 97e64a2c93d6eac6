//! State Management Layer
//!
//! The greeting view itself is stateless; the only state in the app is the
//! window shell state (bounds and theme mode) persisted between runs.

mod app;

pub use app::*;
