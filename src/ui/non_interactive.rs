//! Non-interactive UI for CI environments and piped output.

use super::output::OutputMode;
use super::UserInterface;

/// UI implementation for non-interactive environments.
///
/// Writes plain text without styling or cursor control, suitable for
/// CI logs and redirected output. Status markers are kept as plain
/// ASCII-adjacent icons so logs still scan well.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, text: &str) {
        if self.mode.shows_info() {
            println!("{}", text);
        }
    }

    fn success(&mut self, text: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", text);
        }
    }

    fn warning(&mut self, text: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", text);
        }
    }

    fn error(&mut self, text: &str) {
        eprintln!("✗ {}", text);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            println!();
            println!("=== {} ===", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Detect whether we are running in a CI environment.
pub fn is_ci() -> bool {
    const CI_VARS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
    ];
    CI_VARS.iter().any(|var| std::env::var(var).is_ok())
}
