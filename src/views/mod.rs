//! View Components
//!
//! The application has exactly one view:
//!
//! ```text
//! ┌─────────────────────────┐
//! │                         │
//! │          (globe)        │
//! │      Hello, world!      │
//! │                         │
//! └─────────────────────────┘
//! ```

mod greeting;

pub use greeting::*;
