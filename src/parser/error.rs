use std::collections::TryReserveError;
use thiserror::Error;

/// Invalid parser configuration, reported by [`ParserBuilder::build`](crate::ParserBuilder::build).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Failure while parsing, or while interpreting a parsed flag.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Memory for the parsed tokens could not be reserved.
    /// The parser keeps whatever it stored before the failure.
    #[error("Parse error: unable to allocate token storage ({0}).")]
    Allocation(#[from] TryReserveError),

    /// `parse` was called on a parser that has already been used.
    #[error("Parse error: tokens have already been parsed by this parser.")]
    AlreadyParsed,

    /// An OS argument was not valid unicode.
    #[error("Parse error: argument at offset {offset} is not valid unicode.")]
    NonUnicode {
        /// Position of the argument, not counting the program name.
        offset: usize,
    },

    /// A typed lookup matched a flag written without `=`.
    #[error("Parse error: flag '{key}' has no value.")]
    MissingValue {
        /// The matched flag key.
        key: String,
    },

    /// A typed lookup could not convert the flag's value.
    #[error("Parse error: '{value}' cannot convert for flag '{key}' ({message}).")]
    Conversion {
        /// The matched flag key.
        key: String,
        /// The flag's value, as written.
        value: String,
        /// The conversion error, rendered via `Display`.
        message: String,
    },
}
