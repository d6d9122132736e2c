//! Table definition parser.
//!
//! A table definition is UTF-8 text with one mapping per line:
//!
//! ```text
//! # comment
//! 0xc1	0x0041	LATIN CAPITAL LETTER A
//! ```
//!
//! The first token is the byte as `0x` plus two lowercase hex digits, the
//! second the codepoint as `0x` plus four lowercase hex digits. Both tokens
//! may be indented, and the codepoint must be followed by whitespace; anything
//! after that is a free-text description. Lines starting with `#` are
//! comments. Lines that do not match are skipped and reported as
//! [`TableWarningCode::MalformedLine`] warnings; they never fail the parse.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseResult, TableWarning, TableWarningCode};
use crate::table::MappingEntry;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*0x([0-9a-f]{2})\s+0x([0-9a-f]{4})\s+.*$")
        .expect("table line pattern is a valid regex")
});

/// Classification of one table source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line defines a mapping.
    Entry(MappingEntry),
    /// Comment or blank line.
    Skipped,
    /// The line does not match the table line pattern.
    Malformed,
    /// The line matches, but its codepoint is not a Unicode scalar value.
    InvalidCodepoint(u32),
}

/// Classify a single line of a table definition.
pub fn parse_line(line: &str) -> LineOutcome {
    if line.starts_with('#') || line.trim().is_empty() {
        return LineOutcome::Skipped;
    }

    let Some(caps) = LINE_PATTERN.captures(line) else {
        return LineOutcome::Malformed;
    };

    let (Ok(byte), Ok(value)) = (
        u8::from_str_radix(&caps[1], 16),
        u32::from_str_radix(&caps[2], 16),
    ) else {
        return LineOutcome::Malformed;
    };

    match char::from_u32(value) {
        Some(codepoint) => LineOutcome::Entry(MappingEntry::new(byte, codepoint)),
        None => LineOutcome::InvalidCodepoint(value),
    }
}

/// Parse a full table definition into its mapping entries, in source order.
///
/// Entries are not deduplicated; repeated bytes or codepoints are passed
/// through for the builder to resolve.
pub fn parse_table(text: &str) -> ParseResult<Vec<MappingEntry>> {
    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(line) {
            LineOutcome::Entry(entry) => entries.push(entry),
            LineOutcome::Skipped => {}
            LineOutcome::Malformed => {
                #[cfg(feature = "tracing")]
                tracing::warn!(line_number, line, "malformed table line skipped");
                warnings.push(TableWarning::on_line(
                    TableWarningCode::MalformedLine,
                    "line does not match the table entry pattern",
                    line_number,
                    line,
                ));
            }
            LineOutcome::InvalidCodepoint(value) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(line_number, value, "table line maps to a non-scalar codepoint");
                warnings.push(TableWarning::on_line(
                    TableWarningCode::InvalidCodepoint,
                    format!("U+{value:04X} is not a Unicode scalar value"),
                    line_number,
                    line,
                ));
            }
        }
    }

    ParseResult::with_warnings(entries, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // parse_line
    // =========================================================================

    #[test]
    fn line_with_tab_separators() {
        assert_eq!(
            parse_line("0xc1\t0x0041\tLATIN CAPITAL LETTER A"),
            LineOutcome::Entry(MappingEntry::new(0xC1, 'A'))
        );
    }

    #[test]
    fn line_with_space_separators() {
        assert_eq!(
            parse_line("0x9f 0x20ac  EURO SIGN"),
            LineOutcome::Entry(MappingEntry::new(0x9F, '€'))
        );
    }

    #[test]
    fn line_without_description_is_malformed() {
        assert_eq!(parse_line("0x41 0x0041"), LineOutcome::Malformed);
    }

    #[test]
    fn empty_description_after_whitespace() {
        assert_eq!(
            parse_line("0x40 0x0020\t"),
            LineOutcome::Entry(MappingEntry::new(0x40, ' '))
        );
    }

    #[test]
    fn indented_line_is_an_entry() {
        assert_eq!(
            parse_line("  0x41 0x0041 A"),
            LineOutcome::Entry(MappingEntry::new(0x41, 'A'))
        );
        assert_eq!(
            parse_line("\t0xc1\t0x0041\tA"),
            LineOutcome::Entry(MappingEntry::new(0xC1, 'A'))
        );
    }

    #[test]
    fn comment_and_blank_lines_skipped() {
        assert_eq!(parse_line("# IBM EBCDIC"), LineOutcome::Skipped);
        assert_eq!(parse_line("#0x41 0x0041 A"), LineOutcome::Skipped);
        assert_eq!(parse_line(""), LineOutcome::Skipped);
        assert_eq!(parse_line("   \t"), LineOutcome::Skipped);
    }

    #[test]
    fn uppercase_hex_is_malformed() {
        assert_eq!(parse_line("0xC1 0x0041 A"), LineOutcome::Malformed);
        assert_eq!(parse_line("0xc1 0x00C1 A"), LineOutcome::Malformed);
    }

    #[test]
    fn wrong_token_widths_are_malformed() {
        assert_eq!(parse_line("0x1 0x0041 A"), LineOutcome::Malformed);
        assert_eq!(parse_line("0x100 0x0041 A"), LineOutcome::Malformed);
        assert_eq!(parse_line("0x41 0x41 A"), LineOutcome::Malformed);
        assert_eq!(parse_line("0x41 0x000041 A"), LineOutcome::Malformed);
    }

    #[test]
    fn missing_separator_is_malformed() {
        assert_eq!(parse_line("0x410x0041"), LineOutcome::Malformed);
        assert_eq!(parse_line("0x41 0x0041A"), LineOutcome::Malformed);
    }

    #[test]
    fn garbage_and_leading_text_are_malformed() {
        assert_eq!(parse_line("garbage"), LineOutcome::Malformed);
        assert_eq!(parse_line("xx0x41 0x0041 A"), LineOutcome::Malformed);
        assert_eq!(parse_line("  # indented comment"), LineOutcome::Malformed);
    }

    #[test]
    fn surrogate_codepoint_is_invalid() {
        assert_eq!(
            parse_line("0x41 0xd800 HIGH SURROGATE"),
            LineOutcome::InvalidCodepoint(0xD800)
        );
    }

    #[test]
    fn byte_and_codepoint_extremes() {
        assert_eq!(
            parse_line("0xff 0xffff NONCHARACTER"),
            LineOutcome::Entry(MappingEntry::new(0xFF, '\u{FFFF}'))
        );
        assert_eq!(
            parse_line("0x00 0x0000 NULL"),
            LineOutcome::Entry(MappingEntry::new(0x00, '\u{0000}'))
        );
    }

    // =========================================================================
    // parse_table
    // =========================================================================

    #[test]
    fn table_keeps_source_order_and_duplicates() {
        let text = "# header\n0x41 0x0041 A\n0x42 0x0042 B\n0x41 0x00c1 A ACUTE\n";
        let result = parse_table(text);
        assert!(result.is_clean());
        assert_eq!(
            result.value,
            vec![
                MappingEntry::new(0x41, 'A'),
                MappingEntry::new(0x42, 'B'),
                MappingEntry::new(0x41, 'Á'),
            ]
        );
    }

    #[test]
    fn table_reports_malformed_lines_and_continues() {
        let text = "0x40 0x0020 SPACE\ngarbage\n0xf0 0x0030 ZERO\n";
        let result = parse_table(text);
        assert_eq!(
            result.value,
            vec![MappingEntry::new(0x40, ' '), MappingEntry::new(0xF0, '0')]
        );
        assert_eq!(result.warnings.len(), 1);
        let w = &result.warnings[0];
        assert_eq!(w.code, TableWarningCode::MalformedLine);
        assert_eq!(w.line_number, Some(2));
        assert_eq!(w.line.as_deref(), Some("garbage"));
    }

    #[test]
    fn table_reports_invalid_codepoints() {
        let result = parse_table("0x41 0xdfff X\n0x42 0x0042 B\n");
        assert_eq!(result.value, vec![MappingEntry::new(0x42, 'B')]);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, TableWarningCode::InvalidCodepoint);
        assert_eq!(result.warnings[0].line_number, Some(1));
    }

    #[test]
    fn table_handles_crlf_line_endings() {
        let result = parse_table("# c\r\n0x41 0x0041 A\r\n0x42 0x0042 B\r\n");
        assert!(result.is_clean());
        assert_eq!(result.value.len(), 2);
    }

    #[test]
    fn empty_table_is_clean_and_empty() {
        let result = parse_table("");
        assert!(result.is_clean());
        assert!(result.value.is_empty());
    }
}
