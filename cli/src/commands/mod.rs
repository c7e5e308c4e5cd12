pub mod node;

use crate::config::ColorMode;
use crate::error::render_chain;
use colored::*;
use std::error::Error as StdError;
use std::fmt::Display;
use std::io::{self, Write};

/// Terminal color setup. Call at startup, before anything is printed.
pub fn init_color(mode: ColorMode) {
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    match mode {
        ColorMode::Auto => colored::control::unset_override(),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}

/// Print error message
pub fn print_error<E: Display + ?Sized>(out: &mut dyn Write, error: &E) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".red().bold(), error.to_string().red())
}

/// Print an error and its causes as a single error line
pub fn report_error(out: &mut dyn Write, error: &dyn StdError) -> io::Result<()> {
    print_error(out, &render_chain(error))
}

/// Print section header
pub fn print_header(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title.green())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_plain_when_color_disabled() {
        init_color(ColorMode::Never);
        let dir = tempfile::tempdir().unwrap();
        let err = crate::config::Config::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();

        let mut out = Vec::new();
        report_error(&mut out, &*err).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(!line.contains('\u{1b}'), "escape codes in {line:?}");
        assert!(line.starts_with("Error: Config file"));
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_error_is_a_single_line() {
        init_color(ColorMode::Never);
        let mut out = Vec::new();
        print_error(&mut out, "connection refused").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Error: connection refused\n");
    }
}
