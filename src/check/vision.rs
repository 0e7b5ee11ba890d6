//! Computer-vision functional probes.
//!
//! Importing cv2 and open3d proves the wheels unpacked; these probes
//! prove they actually work against the system's native libraries,
//! which is where headless machines usually break.

use tracing::debug;

use crate::check::interpreter::{run_snippet, PythonInterpreter};
use crate::check::probes::{classify_snippet, trace_snippet};
use crate::check::report::SectionReport;
use crate::ui::UserInterface;

const COLOR_CONVERSION: &str = "import numpy, cv2; img = numpy.zeros((100, 100, 3), dtype=numpy.uint8); cv2.cvtColor(img, cv2.COLOR_BGR2GRAY)";
const MESH_SPHERE: &str = "import open3d; open3d.geometry.TriangleMesh.create_sphere()";

/// Vision probes in report order.
const VISION_PROBES: &[(&str, &str)] = &[
    ("OpenCV color conversion", COLOR_CONVERSION),
    ("Open3D mesh construction", MESH_SPHERE),
];

/// Runs both vision probes; neither depends on the other.
pub fn run_vision_section(
    py: Option<&PythonInterpreter>,
    ui: &mut dyn UserInterface,
) -> SectionReport {
    ui.show_header("Computer vision");
    let mut section = SectionReport::new("vision");

    for (name, code) in VISION_PROBES {
        trace_snippet(ui, code);
        let record = classify_snippet(name, run_snippet(py, code));
        record.emit(ui);
        section.push(record);
    }

    debug!(
        passed = section.passed_count(),
        failed = section.failed_count(),
        "vision probes finished"
    );
    section
}
