//! Installation checking.
//!
//! Verifies that the Python environment the converter helped build
//! actually works: imports resolve, the GPU does math, and the vision
//! stack talks to its native libraries. Probes run one interpreter
//! process each and failures never abort the run; the final report
//! decides the exit code.
//!
//! # Modules
//!
//! - [`interpreter`] - Interpreter resolution and snippet execution
//! - [`probes`] - Import probe table and classification
//! - [`gpu`] - CUDA functionality section
//! - [`vision`] - OpenCV/Open3D functionality section
//! - [`report`] - Records, tallies, and the JSON report

pub mod gpu;
pub mod interpreter;
pub mod probes;
pub mod report;
pub mod vision;

pub use gpu::run_gpu_section;
pub use interpreter::{run_snippet, InterpreterSource, PythonInterpreter, SnippetOutput, SnippetRun};
pub use probes::{classify_snippet, run_import_section, ImportProbeDef, IMPORT_PROBES};
pub use report::{CheckReport, ProbeOutcome, ProbeRecord, SectionReport, Summary};
pub use vision::run_vision_section;
