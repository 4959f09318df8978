//! Terminal status messages.
//!
//! Everything here writes to stderr; stdout is reserved for command output.
//!
//! ```no_run
//! use kiln_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Checking configuration...");
//! ui::success("Configuration is valid");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to the color
/// support of the terminal behind stderr. Shared by status messages and log
/// lines.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

/// Decide once whether status messages are colored.
///
/// Call early in `main`; `no_color` is the `--no-color` flag.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_wins() {
        init_colors(true);
        assert!(!colors_enabled());
    }
}
