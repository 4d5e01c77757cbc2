//! Shared CLI output: styling, symbols, output modes.

use atomic_toolbox::util::format::is_true;
use std::io::{IsTerminal, Write};

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if env_flag("ATOMIC_TOOLBOX_NO_COLOR") {
        return false;
    }
    std::io::stderr().is_terminal()
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self::with_color(color_enabled())
    }

    /// Styling for command output on stdout, which may be redirected on its own.
    pub fn for_stdout() -> Self {
        Self::with_color(color_enabled() && std::io::stdout().is_terminal())
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    /// Red X symbol.
    pub fn fail_sym(&self) -> &str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m"
        } else {
            "!!"
        }
    }

    /// Yellow warning symbol.
    pub fn warn_sym(&self) -> &str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn red(&self, s: &str) -> String {
        self.paint(RED, s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|v| is_true(&v))
        .unwrap_or(false)
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    env_flag("ATOMIC_TOOLBOX_QUIET")
}

/// Check if --verbose mode is active.
pub fn is_verbose() -> bool {
    env_flag("ATOMIC_TOOLBOX_VERBOSE")
}

/// Check if --json mode is active.
pub fn is_json() -> bool {
    env_flag("ATOMIC_TOOLBOX_JSON")
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}

/// Write an indented label/value line of command output.
pub fn write_field<W: Write>(out: &mut W, label: &str, value: &str) -> std::io::Result<()> {
    writeln!(out, "    {label:<12} {value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styling() {
        let s = Styled::with_color(false);
        assert_eq!(s.ok_sym(), "OK");
        assert_eq!(s.fail_sym(), "!!");
        assert_eq!(s.bold("x"), "x");
        assert_eq!(s.yellow("y"), "y");
    }

    #[test]
    fn test_colored_styling() {
        let s = Styled::with_color(true);
        assert_eq!(s.yellow("y"), "\x1b[33my\x1b[0m");
        assert_eq!(s.bold("x"), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_write_field() {
        let mut out = Vec::new();
        write_field(&mut out, "alt", "cat and dog").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "    alt          cat and dog\n");
    }
}
