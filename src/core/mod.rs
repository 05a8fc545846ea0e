//! Core functionality modules
//!
//! Pure calculations with no terminal or configuration dependencies:
//! - `color`: hex color parsing and relative luminance
//! - `contrast`: worst-case background ranking and WCAG tiers
//! - `aspect`: aspect-ratio calculator
//! - `typography`: golden-ratio type scale
//! - `debounce`: keyed cancellable scheduled tasks
//! - `clipboard`: OSC 52 copy affordance

pub mod aspect;
pub mod clipboard;
pub mod color;
pub mod contrast;
pub mod debounce;
pub mod typography;

// Re-export commonly used types for convenience
pub use color::Color;
