//! CLI presenter for output formatting
//!
//! Human-facing status goes to stderr; stdout carries data only (config
//! values, or the surface bridge while the service runs).

use colored::*;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output a value to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print service status to stderr
    pub fn status(&self, message: &str) {
        eprintln!("{} {}", "●".cyan(), message);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Summary line printed once the engine is up
    pub fn format_ready(&self, surfaces: usize, toggle: Option<&str>) -> String {
        match toggle {
            Some(hint) => format!(
                "Watching clipboard on {} display(s), toggle with {}",
                surfaces, hint
            ),
            None => format!(
                "Watching clipboard on {} display(s), no toggle hotkey available",
                surfaces
            ),
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_line_with_toggle() {
        let line = Presenter::new().format_ready(2, Some("Ctrl+Alt+F12"));
        assert!(line.contains("2 display(s)"));
        assert!(line.contains("Ctrl+Alt+F12"));
    }

    #[test]
    fn ready_line_without_toggle() {
        let line = Presenter::new().format_ready(1, None);
        assert!(line.contains("no toggle hotkey"));
    }
}
