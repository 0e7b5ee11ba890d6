//! Terminal UI implementation using the console crate.

use std::io::Write;

use console::Term;

use super::output::OutputMode;
use super::theme::{should_use_colors, PacklistTheme};
use super::{NonInteractiveUI, UserInterface};

/// Interactive terminal UI with styled output.
pub struct TerminalUI {
    term: Term,
    theme: PacklistTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PacklistTheme::new()
        } else {
            PacklistTheme::plain()
        };
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    fn write_line(&mut self, text: &str) {
        // Terminal writes are best-effort; a closed pipe should not
        // abort the run.
        let _ = writeln!(self.term, "{}", text);
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, text: &str) {
        if self.mode.shows_info() {
            self.write_line(text);
        }
    }

    fn success(&mut self, text: &str) {
        if self.mode.shows_status() {
            let line = self.theme.format_success(text);
            self.write_line(&line);
        }
    }

    fn warning(&mut self, text: &str) {
        if self.mode.shows_status() {
            let line = self.theme.format_warning(text);
            self.write_line(&line);
        }
    }

    fn error(&mut self, text: &str) {
        // Errors always go to stderr, even in silent mode.
        let line = self.theme.format_error(text);
        eprintln!("{}", line);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            let line = self.theme.format_header(title);
            self.write_line("");
            self.write_line(&line);
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI for the current environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
