//! Packlist - setup helpers for ML Python environments.
//!
//! Packlist turns a conda `environment.yml` into a pip-installable
//! `requirements.txt` pinned to the CUDA wheel index, and verifies an
//! installed environment by probing imports, GPU access, and the
//! vision stack through a real Python subprocess.
//!
//! # Modules
//!
//! - [`check`] - Installation probes and report assembly
//! - [`cli`] - Command-line interface and argument parsing
//! - [`conda`] - Conda environment file parsing
//! - [`convert`] - Conda-to-pip requirement conversion
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output abstractions
//!
//! # Example
//!
//! ```
//! use packlist::convert::{classify_spec, Disposition};
//!
//! // A pinned conda spec becomes a pip requirement
//! match classify_spec("numpy=1.24.3=py310h5f9d8c6_0") {
//!     Disposition::Requirement(line) => assert_eq!(line, "numpy==1.24.3"),
//!     Disposition::Skip(_) => unreachable!(),
//! }
//! ```
//!
//! For file-based conversion, see the integration tests.

pub mod check;
pub mod cli;
pub mod conda;
pub mod convert;
pub mod error;
pub mod ui;

pub use error::{PacklistError, Result};
