//! Display models for CLI output
//!
//! This module converts normalization results into CLI-friendly display
//! formats.

pub mod display;

pub use display::{AliasDisplay, FieldDisplay, ParamDisplay};
