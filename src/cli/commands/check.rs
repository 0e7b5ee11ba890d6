//! Check command implementation.
//!
//! The `packlist check` command probes the installed Python environment
//! and reports which packages import, whether CUDA works, and whether
//! the vision stack can do real work.

use tracing::debug;

use crate::check::{
    run_gpu_section, run_import_section, run_vision_section, CheckReport, PythonInterpreter,
};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

/// Runs all probe sections and assembles the report.
fn build_report(py: Option<&PythonInterpreter>, ui: &mut dyn UserInterface) -> CheckReport {
    let sections = vec![
        run_import_section(py, ui),
        run_gpu_section(py, ui),
        run_vision_section(py, ui),
    ];
    let interpreter = py.map(|p| p.path().display().to_string());
    CheckReport::new(interpreter, sections)
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Installation check");

        let py = PythonInterpreter::resolve(self.args.python.as_deref());
        match &py {
            Some(py) => {
                debug!(path = %py.path().display(), source = %py.source(), "resolved interpreter");
                ui.message(&format!(
                    "Using interpreter {} (from {})",
                    py.path().display(),
                    py.source()
                ));
            }
            None => ui.warning("No Python interpreter found; probes cannot run"),
        }

        let report = build_report(py.as_ref(), ui);

        if self.args.json {
            println!("{}", report.to_json()?);
        } else if report.success() {
            ui.success(&format!(
                "All {} checks passed. Installation looks good.",
                report.summary.total
            ));
        } else {
            ui.error(&format!(
                "{} of {} checks failed. See the output above.",
                report.summary.failed, report.summary.total
            ));
        }

        if report.success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
