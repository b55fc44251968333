//! Shared CSV plumbing for the hydrostatic and cross-curve readers.

use std::num::ParseFloatError;

use csv::{ReaderBuilder, Trim};

/// Reader settings shared by every vessel data file: trimmed fields and
/// ragged rows (cross-curve columns end at different depths).
pub(crate) fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.trim(Trim::All).flexible(true);
    builder
}

/// Normalize a header cell for robust matching: lower-case, alphanumerics only.
///
/// `"Draft (m)"` becomes `"draftm"` and `"Δ(tonne)"` becomes `"δtonne"`.
pub(crate) fn normalize_header(header: &str) -> String {
    header
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Parse a numeric cell; blank cells are `None`.
pub(crate) fn parse_number(cell: &str) -> Result<Option<f64>, ParseFloatError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_decorated_headers() {
        assert_eq!(normalize_header("Draft (m)"), "draftm");
        assert_eq!(normalize_header("Δ(tonne)"), "δtonne");
        assert_eq!(normalize_header("MTC (t ‐ m)"), "mtctm");
        assert_eq!(normalize_header(" TKM (m) "), "tkmm");
    }

    #[test]
    fn blank_cells_parse_to_none() {
        assert_eq!(parse_number("  "), Ok(None));
        assert_eq!(parse_number("4.25"), Ok(Some(4.25)));
        assert!(parse_number("n/a").is_err());
    }
}
