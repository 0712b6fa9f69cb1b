//! Syllabus Core: shared errors and identifier utilities.
//!
//! This crate provides the foundational types used across all Syllabus crates.
//! It has no internal Syllabus dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Slug and identifier utilities

#![forbid(unsafe_code)]

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::{slug_from_path, slugify};
