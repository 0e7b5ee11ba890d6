//! GPU functionality probes.
//!
//! The section walks from "torch imports at all" to "tensors multiply
//! on the device". Each step runs in its own interpreter process; the
//! first failed step ends the section, since nothing after it could
//! succeed. A machine without CUDA fails the section: the models this
//! environment serves need the device.

use regex::Regex;
use tracing::debug;

use crate::check::interpreter::{run_snippet, PythonInterpreter, SnippetRun};
use crate::check::probes::{classify_snippet, trace_snippet};
use crate::check::report::{ProbeRecord, SectionReport};
use crate::ui::UserInterface;

const TORCH_VERSION: &str = "import torch; print(torch.__version__)";
const CUDA_AVAILABLE: &str = "import torch; print(int(torch.cuda.is_available()))";
const CUDA_VERSION: &str = "import torch; print(torch.version.cuda)";
const DEVICE_COUNT: &str = "import torch; print(torch.cuda.device_count())";
const GPU_MATMUL: &str =
    "import torch; x = torch.randn(3, 3).cuda(); y = torch.randn(3, 3).cuda(); torch.mm(x, y)";

/// Message shown (and recorded) when torch reports no usable device.
pub const CUDA_UNAVAILABLE: &str = "CUDA not available - CPU only";

/// Pull a version-looking token out of probe stdout.
///
/// Keeps local wheel suffixes (`2.0.1+cu117`) intact; falls back to the
/// raw line when nothing matches, so unexpected output still shows up
/// in the report.
fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(\d+\.\d+(?:\.\d+)?(?:\+\S+)?)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Probe whose passing detail is a version pulled from stdout.
fn version_probe(py: Option<&PythonInterpreter>, name: &str, code: &str) -> ProbeRecord {
    match run_snippet(py, code) {
        SnippetRun::Completed(out) if out.success => {
            let raw = out.last_stdout_line().unwrap_or("unknown");
            let version = extract_version(raw).unwrap_or_else(|| raw.to_string());
            ProbeRecord::passed_with(name, version)
        }
        other => classify_snippet(name, other),
    }
}

/// Probe whose passing detail is the last stdout line, verbatim.
fn value_probe(py: Option<&PythonInterpreter>, name: &str, code: &str) -> ProbeRecord {
    match run_snippet(py, code) {
        SnippetRun::Completed(out) if out.success => {
            let value = out.last_stdout_line().unwrap_or("unknown").to_string();
            ProbeRecord::passed_with(name, value)
        }
        other => classify_snippet(name, other),
    }
}

/// Runs the GPU section.
pub fn run_gpu_section(py: Option<&PythonInterpreter>, ui: &mut dyn UserInterface) -> SectionReport {
    ui.show_header("GPU (CUDA)");
    let mut section = SectionReport::new("gpu");

    trace_snippet(ui, TORCH_VERSION);
    let version = version_probe(py, "PyTorch version", TORCH_VERSION);
    let torch_broken = !version.is_pass();
    version.emit(ui);
    section.push(version);
    if torch_broken {
        return section;
    }

    trace_snippet(ui, CUDA_AVAILABLE);
    match run_snippet(py, CUDA_AVAILABLE) {
        SnippetRun::Completed(out) if out.success => {
            if out.last_stdout_line() == Some("1") {
                let record = ProbeRecord::passed_with("CUDA available", "yes");
                record.emit(ui);
                section.push(record);
            } else {
                let record = ProbeRecord::error("CUDA available", CUDA_UNAVAILABLE);
                record.emit(ui);
                section.push(record);
                return section;
            }
        }
        other => {
            let record = classify_snippet("CUDA available", other);
            record.emit(ui);
            section.push(record);
            return section;
        }
    }

    trace_snippet(ui, CUDA_VERSION);
    let cuda_version = version_probe(py, "CUDA version", CUDA_VERSION);
    let cuda_version_failed = !cuda_version.is_pass();
    cuda_version.emit(ui);
    section.push(cuda_version);
    if cuda_version_failed {
        return section;
    }

    trace_snippet(ui, DEVICE_COUNT);
    let devices = value_probe(py, "GPU devices", DEVICE_COUNT);
    let devices_failed = !devices.is_pass();
    devices.emit(ui);
    section.push(devices);
    if devices_failed {
        return section;
    }

    trace_snippet(ui, GPU_MATMUL);
    let matmul = match run_snippet(py, GPU_MATMUL) {
        SnippetRun::Completed(out) if out.success => ProbeRecord::passed("GPU tensor operations"),
        other => classify_snippet("GPU tensor operations", other),
    };
    matmul.emit(ui);
    section.push(matmul);

    debug!(
        passed = section.passed_count(),
        failed = section.failed_count(),
        "gpu probes finished"
    );
    section
}
