//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for report output.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold, used for section headings.
    pub const BOLD: &str = "\x1b[1m";
    /// Bold reverse green for PASS badges.
    pub const TAG_PASS: &str = "\x1b[1;7;32m";
    /// Bold reverse red for FAIL badges.
    pub const TAG_FAIL: &str = "\x1b[1;7;31m";
    /// Gray for table rules and secondary notes.
    pub const GRAY: &str = "\x1b[90m";
    /// Yellow for omitted-angle warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red for negative righting arms.
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color is
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub tag_pass: &'static str,
    pub tag_fail: &'static str,
    pub gray: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            bold: colors::BOLD,
            tag_pass: colors::TAG_PASS,
            tag_fail: colors::TAG_FAIL,
            gray: colors::GRAY,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            tag_pass: "",
            tag_fail: "",
            gray: "",
            yellow: "",
            red: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Palette for an explicit `--no-color` choice, falling back to detection.
    #[must_use]
    pub fn for_flag(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }

    /// `PASS`/`FAIL` badge for a criterion outcome.
    pub fn verdict(&self, pass: bool) -> String {
        if pass {
            format!("{} PASS {}", self.tag_pass, self.reset)
        } else {
            format!("{} FAIL {}", self.tag_fail, self.reset)
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a number with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use loadicator_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(50000), "50,000");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_separators() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(1000), "1,000");
        assert_eq!(format_with_separators(66_600), "66,600");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
    }

    #[test]
    fn test_plain_palette_has_no_escapes() {
        let p = ColorPalette::plain();
        assert_eq!(p.verdict(true), " PASS ");
        assert_eq!(p.verdict(false), " FAIL ");
        assert!(ColorPalette::for_flag(true).reset.is_empty());
    }

    #[test]
    fn test_colored_palette_wraps_badges() {
        let p = ColorPalette::colored();
        assert!(p.verdict(true).starts_with(colors::TAG_PASS));
        assert!(p.verdict(false).ends_with(colors::RESET));
    }
}
