//! Utility functions shared by the extractors.
//!
//! - `brace`: `{a|b}` alternation expansion

pub mod brace;

pub use brace::*;
