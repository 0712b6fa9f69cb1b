//! Utility modules.
//!
//! # Modules
//!
//! - [`ids`]: Slug normalization and derivation from paths

pub mod ids;
