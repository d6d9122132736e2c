//! Error and warning types for codepage-rs.
//!
//! Provides [`CodePageError`] for fatal errors that stop an operation,
//! [`TableWarning`] for non-fatal issues that allow best-effort continuation,
//! and [`ParseResult`] for pairing a value with collected warnings.

use std::fmt;

/// Fatal error types for code page operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CodePageError {
    /// The named table has no source definition or could not be read.
    TableNotFound {
        /// Requested code page name.
        name: String,
        /// Why the table source could not supply it.
        reason: String,
    },
    /// A single character has no byte in the table (strict encoding only).
    NoMappingForRune {
        /// The unmapped character.
        codepoint: char,
        /// Code page that was searched.
        name: String,
    },
    /// A table line could not be parsed and strict mode is enabled.
    MalformedLine {
        /// Code page being built.
        name: String,
        /// 1-based line number in the table source.
        line_number: usize,
        /// Raw line text.
        line: String,
    },
    /// Any other error not covered by specific variants.
    Other(String),
}

impl CodePageError {
    /// Shorthand for a [`TableNotFound`](CodePageError::TableNotFound) error.
    pub fn table_not_found(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CodePageError::TableNotFound {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CodePageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodePageError::TableNotFound { name, reason } => {
                write!(f, "code page table not found: {name} ({reason})")
            }
            CodePageError::NoMappingForRune { codepoint, name } => write!(
                f,
                "no mapping for U+{:04X} {codepoint:?} in code page {name}",
                *codepoint as u32
            ),
            CodePageError::MalformedLine {
                name,
                line_number,
                line,
            } => write!(f, "malformed line {line_number} in {name}: {line:?}"),
            CodePageError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CodePageError {}

/// Machine-readable warning code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableWarningCode {
    /// A table line did not match the `0xBB 0xCCCC ...` pattern.
    MalformedLine,
    /// A table line named a codepoint that is not a Unicode scalar value.
    InvalidCodepoint,
    /// Bulk encoding replaced a character the table cannot represent.
    UnmappedCharacter,
}

impl TableWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableWarningCode::MalformedLine => "MALFORMED_LINE",
            TableWarningCode::InvalidCodepoint => "INVALID_CODEPOINT",
            TableWarningCode::UnmappedCharacter => "UNMAPPED_CHARACTER",
        }
    }
}

impl fmt::Display for TableWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal warning raised while parsing a table or encoding text.
///
/// Carries a structured [`code`](TableWarning::code), a human-readable
/// description, and whatever source context applies: the table name, the
/// offending line, or the character that could not be encoded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableWarning {
    /// Machine-readable warning code.
    pub code: TableWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Code page name, if known where the warning was raised.
    pub table: Option<String>,
    /// 1-based line number in the table source.
    pub line_number: Option<usize>,
    /// Raw line text.
    pub line: Option<String>,
    /// Character involved in the warning.
    pub codepoint: Option<char>,
}

impl TableWarning {
    /// Create a warning with a code and description.
    pub fn new(code: TableWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            table: None,
            line_number: None,
            line: None,
            codepoint: None,
        }
    }

    /// Create a warning about a table source line.
    pub fn on_line(
        code: TableWarningCode,
        description: impl Into<String>,
        line_number: usize,
        line: impl Into<String>,
    ) -> Self {
        Self {
            line_number: Some(line_number),
            line: Some(line.into()),
            ..Self::new(code, description)
        }
    }

    /// Create a warning about a character bulk encoding had to replace.
    pub fn unmapped(codepoint: char, table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            table: Some(table.clone()),
            codepoint: Some(codepoint),
            ..Self::new(
                TableWarningCode::UnmappedCharacter,
                format!(
                    "no mapping for U+{:04X} in {table}, substituted the space byte",
                    codepoint as u32
                ),
            )
        }
    }

    /// Set the table name, returning the modified warning (builder pattern).
    pub fn set_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Convert this warning into a [`CodePageError`].
    ///
    /// Used by strict mode to escalate warnings to errors.
    pub fn to_error(&self) -> CodePageError {
        match (self.code, self.line_number, &self.line, self.codepoint) {
            (
                TableWarningCode::MalformedLine | TableWarningCode::InvalidCodepoint,
                Some(line_number),
                Some(line),
                _,
            ) => CodePageError::MalformedLine {
                name: self.table.clone().unwrap_or_default(),
                line_number,
                line: line.clone(),
            },
            (TableWarningCode::UnmappedCharacter, _, _, Some(codepoint)) => {
                CodePageError::NoMappingForRune {
                    codepoint,
                    name: self.table.clone().unwrap_or_default(),
                }
            }
            _ => CodePageError::Other(self.to_string()),
        }
    }
}

impl fmt::Display for TableWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(ref table) = self.table {
            write!(f, " [table {table}]")?;
        }
        if let Some(line_number) = self.line_number {
            write!(f, " (line {line_number})")?;
        }
        Ok(())
    }
}

/// Result wrapper that pairs a value with collected warnings.
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// The produced value.
    pub value: T,
    /// Warnings collected while producing it.
    pub warnings: Vec<TableWarning>,
}

impl<T> ParseResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<TableWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        ParseResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
