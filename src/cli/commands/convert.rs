//! Convert command implementation.
//!
//! The `packlist convert` command reads a conda environment file and
//! writes the equivalent pip requirements file.

use tracing::debug;

use crate::cli::args::ConvertArgs;
use crate::conda::load_env_file;
use crate::convert::convert_environment;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The convert command implementation.
pub struct ConvertCommand {
    args: ConvertArgs,
}

impl ConvertCommand {
    /// Create a new convert command.
    pub fn new(args: ConvertArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConvertArgs {
        &self.args
    }
}

impl Command for ConvertCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = load_env_file(&self.args.input)?;
        debug!(
            conda_specs = env.conda_specs().count(),
            pip_specs = env.pip_specs().count(),
            "loaded environment file"
        );

        let doc = convert_environment(&env);
        doc.write_to(&self.args.output)?;

        ui.success(&format!(
            "Generated requirements from {}",
            self.args.input.display()
        ));
        ui.message(&format!(
            "Output written to {} ({} packages)",
            self.args.output.display(),
            doc.len()
        ));

        Ok(CommandResult::success())
    }
}
