//! Conda environment file model and loading.
//!
//! This module provides the serde schema for `environment.yml` files and
//! the loading functions that distinguish a missing file from unparseable
//! YAML.
//!
//! # Modules
//!
//! - [`schema`] - Typed model of the environment file
//! - [`loader`] - File loading and parse error reporting

pub mod loader;
pub mod schema;

pub use loader::{load_env_file, parse_env};
pub use schema::{CondaDependency, CondaEnvironment, SpecFields};
