use crate::constant::*;
use crate::parser::{ArgParser, ConfigError};

/// Configure an [`ArgParser`] before it is used.
///
/// ### Example
/// ```
/// use argscan::ArgParser;
///
/// let mut parser = ArgParser::builder()
///     .max_token_length(4)
///     .build()
///     .unwrap();
/// parser.parse(["abcdefgh"]).unwrap();
///
/// assert_eq!(parser.argument(0), Some("abcd"));
/// ```
#[derive(Debug, Clone)]
pub struct ParserBuilder {
    max_token_length: usize,
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }
}

impl ParserBuilder {
    /// Start from the defaults (see [`DEFAULT_MAX_TOKEN_LENGTH`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum length, in characters, of a stored positional argument.
    /// Longer arguments are truncated.
    /// If repeated, only the final length will apply.
    pub fn max_token_length(mut self, max_token_length: usize) -> Self {
        self.max_token_length = max_token_length;
        self
    }

    /// Build the parser.
    ///
    /// Fails if the maximum token length is `0`.
    pub fn build(self) -> Result<ArgParser, ConfigError> {
        if self.max_token_length == 0 {
            return Err(ConfigError(
                "The maximum token length must be at least 1.".to_string(),
            ));
        }

        Ok(ArgParser::with_max_token_length(self.max_token_length))
    }
}

impl ArgParser {
    /// Configure a parser via [`ParserBuilder`].
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }
}
