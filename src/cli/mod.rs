//! Command Line Interface module
//!
//! - `tools`: one-shot calculators (contrast, aspect, type-scale)
//! - `shell`: the interactive tab-switching terminal shell
//! - `management`: configuration

pub mod management;
pub mod shell;
pub mod tools;

pub use management::*;
pub use tools::*;
