//! Hello GUI Library
//!
//! This crate provides the application logic for Hello GUI, a minimal
//! native greeting app built with GPUI. It renders a single static view:
//! a globe glyph above a fixed greeting.

pub mod app;
pub mod assets;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod views;
