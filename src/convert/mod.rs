//! Conda-to-pip requirements conversion.
//!
//! Takes a parsed environment file and produces the `requirements.txt`
//! the install scripts consume: torch pinned to the cu117 wheel index,
//! toolchain packages dropped, everything else pinned and sorted.
//!
//! # Modules
//!
//! - [`rules`] - Fixed skip, rename and grouping tables
//! - [`pipeline`] - Per-spec classification and conversion driver
//! - [`document`] - Grouped output document and rendering

pub mod document;
pub mod pipeline;
pub mod rules;

pub use document::RequirementsDoc;
pub use pipeline::{classify_spec, convert_environment, Disposition, SkipReason};
