//! Mock UI for testing.

use super::output::OutputMode;
use super::UserInterface;

/// Test double that records every UI call for later inspection.
///
/// Unlike the real implementations, the mock records messages
/// regardless of output mode so tests can assert on what was
/// requested, not what a particular mode would print.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_message(&self, fragment: &str) -> bool {
        self.messages.iter().any(|m| m.contains(fragment))
    }

    pub fn has_success(&self, fragment: &str) -> bool {
        self.successes.iter().any(|m| m.contains(fragment))
    }

    pub fn has_warning(&self, fragment: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(fragment))
    }

    pub fn has_error(&self, fragment: &str) -> bool {
        self.errors.iter().any(|m| m.contains(fragment))
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn success(&mut self, text: &str) {
        self.successes.push(text.to_string());
    }

    fn warning(&mut self, text: &str) {
        self.warnings.push(text.to_string());
    }

    fn error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_records_all_channels() {
        let mut ui = MockUI::new();
        ui.message("info line");
        ui.success("it worked");
        ui.warning("be careful");
        ui.error("it broke");
        ui.show_header("Section");

        assert!(ui.has_message("info"));
        assert!(ui.has_success("worked"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broke"));
        assert_eq!(ui.headers(), ["Section"]);
    }

    #[test]
    fn mock_clear_resets_everything() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.error("two");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn with_mode_sets_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
        assert!(ui.output_mode().shows_probe_code());
    }

    #[test]
    fn mock_is_non_interactive_by_default() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
