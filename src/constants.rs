//! UI Constants
//!
//! Centralized window dimensions.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 640.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Preview harness window dimensions
pub const PREVIEW_WINDOW_WIDTH: f32 = 400.0;
pub const PREVIEW_WINDOW_HEIGHT: f32 = 300.0;
