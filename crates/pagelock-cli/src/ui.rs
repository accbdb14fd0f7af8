//! Terminal output helpers for batch run reporting.
//!
//! Color is resolved once from the environment: enabled only on a TTY,
//! and disabled by `NO_COLOR` or `TERM=dumb`.

use std::io::IsTerminal;

/// Color definitions using ANSI escape codes.
mod colors {
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Per-document status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Skip,
    Fail,
}

impl Badge {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Skip => "[SKIP]",
            Self::Fail => "[FAIL]",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Ok => colors::GREEN,
            Self::Skip => colors::YELLOW,
            Self::Fail => colors::RED,
        }
    }
}

/// Terminal context for UI decisions.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
}

impl UiContext {
    /// Create context from the environment.
    pub fn from_env() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var("NO_COLOR").is_ok();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);

        Self {
            color: is_tty && !no_color && !term_is_dumb,
        }
    }

    fn paint(&self, color: &'static str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, colors::RESET)
        } else {
            text.to_string()
        }
    }

    /// Print the run header.
    pub fn header(&self, title: &str) {
        println!("{}", self.paint(colors::CYAN, title));
        println!("{}", self.paint(colors::CYAN, &"=".repeat(50)));
    }

    /// Print an informational line.
    pub fn info(&self, message: &str) {
        println!("{}", self.paint(colors::CYAN, message));
    }

    /// Print a warning line.
    pub fn warn(&self, message: &str) {
        println!("{}", self.paint(colors::YELLOW, message));
    }

    /// Print one per-document status line.
    pub fn status(&self, badge: Badge, path: &str, detail: Option<&str>) {
        let label = self.paint(badge.color(), badge.text());
        match detail {
            Some(detail) => println!("  {} {} ({})", label, path, detail),
            None => println!("  {} {}", label, path),
        }
    }

    /// Print the final tally, distinguishing skips from failures.
    pub fn summary(&self, converted: usize, skipped: usize, failed: usize, skip_reason: &str) {
        println!("{}", self.paint(colors::DIM, &"=".repeat(50)));
        println!(
            "  {} {}",
            self.paint(colors::GREEN, "converted:"),
            converted
        );
        println!(
            "  {} {} ({})",
            self.paint(colors::YELLOW, "skipped:"),
            skipped,
            skip_reason
        );
        println!("  {} {}", self.paint(colors::RED, "failed:"), failed);
    }

    /// Print an error to stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.paint(colors::RED, "Error:"), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Ok.text(), "[OK]");
        assert_eq!(Badge::Skip.text(), "[SKIP]");
        assert_eq!(Badge::Fail.text(), "[FAIL]");
    }

    #[test]
    fn test_paint_disabled_passes_through() {
        let ctx = UiContext { color: false };
        assert_eq!(ctx.paint(colors::GREEN, "plain"), "plain");
    }

    #[test]
    fn test_paint_enabled_wraps_with_reset() {
        let ctx = UiContext { color: true };
        let painted = ctx.paint(colors::GREEN, "text");
        assert!(painted.starts_with(colors::GREEN));
        assert!(painted.ends_with(colors::RESET));
    }
}
