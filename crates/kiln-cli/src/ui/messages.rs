//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success message to stderr.
///
/// ```no_run
/// use kiln_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    eprintln!("{}", render("✓", message, Tone::Success));
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{}", render("ℹ", message, Tone::Info));
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{}", render("⚠", message, Tone::Warning));
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{}", render("✗", message, Tone::Error));
}

#[derive(Clone, Copy)]
enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

fn render(symbol: &str, message: &str, tone: Tone) -> String {
    if !colors_enabled() {
        return format!("{symbol} {message}");
    }
    match tone {
        Tone::Success => format!("{} {}", symbol.green().bold(), message),
        Tone::Info => format!("{} {}", symbol.blue().bold(), message),
        Tone::Warning => format!("{} {}", symbol.yellow().bold(), message.yellow()),
        Tone::Error => format!("{} {}", symbol.red().bold(), message.red()),
    }
}
