//! # Curriculum
//!
//! The knowledge base crate - concept and activity records for each grade,
//! the domain palette, and viewer configuration.
//! This crate is the single source of truth for curriculum data and does not contain any graph logic.

pub mod config;
pub mod dataset;
pub mod error;
pub mod palette;
pub mod records;

pub use config::*;
pub use dataset::*;
pub use error::*;
pub use palette::*;
pub use records::*;
