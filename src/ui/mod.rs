//! User interface abstractions.
//!
//! All user-facing output flows through the [`UserInterface`] trait so
//! commands stay testable and the binary can swap between a styled
//! terminal UI and plain CI-friendly output.

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::{is_ci, NonInteractiveUI};
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PacklistTheme};

/// Trait for user interface implementations.
pub trait UserInterface {
    /// The verbosity the UI was created with.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message.
    fn message(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, text: &str);

    /// Display a warning message.
    fn warning(&mut self, text: &str);

    /// Display an error message. Always shown, even in silent mode.
    fn error(&mut self, text: &str);

    /// Display a section header.
    fn show_header(&mut self, title: &str);

    /// Whether the UI is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;
}
