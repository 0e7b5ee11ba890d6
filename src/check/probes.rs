//! Import probes for the packages the project depends on.
//!
//! Each probe imports one module in a fresh interpreter process, so a
//! crashed or misbehaving package can never take the rest of the run
//! down with it.

use tracing::debug;

use crate::check::interpreter::{run_snippet, PythonInterpreter, SnippetRun};
use crate::check::report::{ProbeRecord, SectionReport};
use crate::ui::UserInterface;

/// One import to verify.
pub struct ImportProbeDef {
    /// Human-readable package name.
    pub label: &'static str,
    /// Module path handed to `import`.
    pub module: &'static str,
}

/// Packages verified by `packlist check`, in report order.
pub const IMPORT_PROBES: &[ImportProbeDef] = &[
    ImportProbeDef {
        label: "PyTorch",
        module: "torch",
    },
    ImportProbeDef {
        label: "NumPy",
        module: "numpy",
    },
    ImportProbeDef {
        label: "OpenCV",
        module: "cv2",
    },
    ImportProbeDef {
        label: "Open3D",
        module: "open3d",
    },
    ImportProbeDef {
        label: "Trimesh",
        module: "trimesh",
    },
    ImportProbeDef {
        label: "Matplotlib",
        module: "matplotlib.pyplot",
    },
    ImportProbeDef {
        label: "Scikit-learn",
        module: "sklearn",
    },
    ImportProbeDef {
        label: "H5PY",
        module: "h5py",
    },
    ImportProbeDef {
        label: "PyRender",
        module: "pyrender",
    },
    ImportProbeDef {
        label: "TensorBoard",
        module: "tensorboard",
    },
    ImportProbeDef {
        label: "Pandas",
        module: "pandas",
    },
    ImportProbeDef {
        label: "SciPy",
        module: "scipy",
    },
];

/// Stderr markers that mean "module absent" rather than "module broken".
const MISSING_MARKERS: &[&str] = &["ModuleNotFoundError", "ImportError"];

/// Turns a snippet run into a probe record.
///
/// Non-zero exits are split on the stderr text: a missing module is a
/// hard failure, anything else (a package that crashes on import, a
/// launch problem) is recorded as an error. Both count as failed.
pub fn classify_snippet(name: &str, run: SnippetRun) -> ProbeRecord {
    match run {
        SnippetRun::Unavailable(message) => ProbeRecord::error(name, message),
        SnippetRun::Completed(out) if out.success => ProbeRecord::passed(name),
        SnippetRun::Completed(out) => {
            let detail = out
                .last_stderr_line()
                .unwrap_or("exited with a failure status")
                .to_string();
            if MISSING_MARKERS.iter().any(|m| out.stderr.contains(m)) {
                ProbeRecord::missing(name, detail)
            } else {
                ProbeRecord::error(name, detail)
            }
        }
    }
}

/// Prints the snippet about to run when in verbose mode.
pub(crate) fn trace_snippet(ui: &mut dyn UserInterface, code: &str) {
    if ui.output_mode().shows_probe_code() {
        ui.message(&format!("  py> {code}"));
    }
}

/// Runs every import probe and prints the section tally.
pub fn run_import_section(
    py: Option<&PythonInterpreter>,
    ui: &mut dyn UserInterface,
) -> SectionReport {
    ui.show_header("Package imports");
    let mut section = SectionReport::new("imports");

    for def in IMPORT_PROBES {
        let snippet = format!("import {}", def.module);
        trace_snippet(ui, &snippet);
        let record = classify_snippet(def.label, run_snippet(py, &snippet));
        record.emit(ui);
        section.push(record);
    }

    debug!(
        passed = section.passed_count(),
        failed = section.failed_count(),
        "import probes finished"
    );
    ui.message(&format!(
        "Import results: {} passed, {} failed",
        section.passed_count(),
        section.failed_count()
    ));
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::interpreter::SnippetOutput;
    use crate::check::report::ProbeOutcome;
    use crate::ui::MockUI;

    fn completed(success: bool, stdout: &str, stderr: &str) -> SnippetRun {
        SnippetRun::Completed(SnippetOutput {
            success,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    #[test]
    fn probe_table_lists_twelve_packages() {
        assert_eq!(IMPORT_PROBES.len(), 12);
        assert_eq!(IMPORT_PROBES[0].label, "PyTorch");
        assert_eq!(IMPORT_PROBES[0].module, "torch");
        assert_eq!(IMPORT_PROBES[5].module, "matplotlib.pyplot");
    }

    #[test]
    fn successful_run_classifies_as_passed() {
        let record = classify_snippet("NumPy", completed(true, "", ""));
        assert_eq!(record.outcome, ProbeOutcome::Passed);
        assert!(record.detail.is_none());
    }

    #[test]
    fn module_not_found_classifies_as_missing() {
        let stderr = "Traceback (most recent call last):\n  File \"<string>\", line 1, in <module>\nModuleNotFoundError: No module named 'pyrender'\n";
        let record = classify_snippet("PyRender", completed(false, "", stderr));
        assert_eq!(record.outcome, ProbeOutcome::Missing);
        assert_eq!(
            record.detail.as_deref(),
            Some("ModuleNotFoundError: No module named 'pyrender'")
        );
    }

    #[test]
    fn import_error_also_classifies_as_missing() {
        let stderr = "ImportError: libGL.so.1: cannot open shared object file\n";
        let record = classify_snippet("OpenCV", completed(false, "", stderr));
        assert_eq!(record.outcome, ProbeOutcome::Missing);
    }

    #[test]
    fn other_failures_classify_as_error() {
        let record = classify_snippet("SciPy", completed(false, "", "Segmentation fault\n"));
        assert_eq!(record.outcome, ProbeOutcome::Error);
        assert_eq!(record.detail.as_deref(), Some("Segmentation fault"));
    }

    #[test]
    fn unavailable_interpreter_classifies_as_error() {
        let record = classify_snippet("NumPy", SnippetRun::Unavailable("no python".into()));
        assert_eq!(record.outcome, ProbeOutcome::Error);
        assert_eq!(record.detail.as_deref(), Some("no python"));
    }

    #[test]
    fn section_without_interpreter_fails_every_probe() {
        let mut ui = MockUI::new();
        let section = run_import_section(None, &mut ui);

        assert_eq!(section.probes.len(), IMPORT_PROBES.len());
        assert_eq!(section.failed_count(), IMPORT_PROBES.len());
        assert!(!section.is_pass());
        assert!(ui.has_message("Import results: 0 passed, 12 failed"));
        assert_eq!(ui.headers(), ["Package imports"]);
    }
}
