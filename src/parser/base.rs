use std::env;
use std::ffi::OsString;

use crate::constant::*;
use crate::model::Flag;
use crate::parser::ParseError;
use crate::tokens::{truncate, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line argument parser.
///
/// Holds the flags and positional arguments of a single invocation, each in the order they were given.
/// A parser is single use: [`ArgParser::parse`] succeeds at most once, after which the parser is read via its accessors.
/// All stored strings are owned copies; dropping the parser releases them.
///
/// ### Example
/// ```
/// use argscan::ArgParser;
///
/// let mut parser = ArgParser::new();
/// parser.parse(["a", "-v", "b", "--out=file.txt", "c"]).unwrap();
///
/// assert_eq!(parser.num_arguments(), 3);
/// assert_eq!(parser.num_flags(), 2);
/// assert_eq!(parser.argument(1), Some("b"));
/// assert_eq!(parser.flag(Some("--out"), Some("-o"), None), Some("file.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct ArgParser {
    pub(super) flags: Vec<Flag>,
    pub(super) arguments: Vec<String>,
    pub(super) max_token_length: usize,
    parsed: bool,
}

impl Default for ArgParser {
    fn default() -> Self {
        Self::with_max_token_length(DEFAULT_MAX_TOKEN_LENGTH)
    }
}

impl ArgParser {
    /// Create an empty parser with the default configuration.
    ///
    /// ### Example
    /// ```
    /// use argscan::ArgParser;
    ///
    /// let parser = ArgParser::new();
    /// assert_eq!(parser.num_arguments(), 0);
    /// assert_eq!(parser.num_flags(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn with_max_token_length(max_token_length: usize) -> Self {
        Self {
            flags: Vec::default(),
            arguments: Vec::default(),
            max_token_length,
            parsed: false,
        }
    }

    /// Classify `tokens` into flags and positional arguments.
    ///
    /// The tokens are the invocation arguments *excluding* the program name.
    /// Each token is processed left to right:
    /// * A token starting with `-` is a flag, split into key and value on its first `=`.
    /// * Any other token is a positional argument, truncated to [`ArgParser::max_token_length`] characters.
    ///
    /// Returns [`ParseError::AlreadyParsed`] if this parser has been used before, leaving its contents untouched.
    /// On [`ParseError::Allocation`] the parser keeps the tokens stored up to the failure.
    ///
    /// ### Example
    /// ```
    /// use argscan::{ArgParser, ParseError};
    ///
    /// let mut parser = ArgParser::new();
    /// parser.parse(vec!["--x=1".to_string(), "--x=2".to_string()]).unwrap();
    /// assert_eq!(parser.flag(Some("--x"), None, None), Some("2"));
    ///
    /// assert!(matches!(parser.parse(["again"]), Err(ParseError::AlreadyParsed)));
    /// ```
    pub fn parse<I, S>(&mut self, tokens: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.begin()?;

        for token in tokens {
            self.feed(token.as_ref())?;
        }

        Ok(())
    }

    /// Classify OS-native `tokens`, as produced by [`env::args_os`].
    ///
    /// Behaves as [`ArgParser::parse`], except that a token which is not valid unicode stops the parse with [`ParseError::NonUnicode`].
    pub fn parse_os<I>(&mut self, tokens: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = OsString>,
    {
        self.begin()?;

        for (offset, token) in tokens.into_iter().enumerate() {
            match token.into_string() {
                Ok(token) => self.feed(&token)?,
                Err(_) => return Err(ParseError::NonUnicode { offset }),
            }
        }

        Ok(())
    }

    /// Classify the arguments of the running process, skipping the program name.
    pub fn parse_env(&mut self) -> Result<(), ParseError> {
        self.parse_os(env::args_os().skip(1))
    }

    /// Whether a parse has been attempted on this parser.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// The maximum length, in characters, of a stored positional argument.
    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// Consume the parser, handing back its flags and positional arguments.
    pub fn into_parts(self) -> (Vec<Flag>, Vec<String>) {
        (self.flags, self.arguments)
    }

    fn begin(&mut self) -> Result<(), ParseError> {
        if self.parsed {
            return Err(ParseError::AlreadyParsed);
        }

        self.parsed = true;
        Ok(())
    }

    fn feed(&mut self, token: &str) -> Result<(), ParseError> {
        match Token::classify(token) {
            Token::Flag { key, value } => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Classified '{token}' as flag '{key}' with value {value:?}.");
                }

                let key = owned_copy(key)?;
                let value = value.map(owned_copy).transpose()?;
                self.flags.try_reserve(1)?;
                self.flags.push(Flag::new(key, value));
            }
            Token::Positional(text) => {
                let text = truncate(text, self.max_token_length);

                #[cfg(feature = "tracing_debug")]
                {
                    if text.len() < token.len() {
                        debug!(
                            "Truncated positional argument to {} characters.",
                            self.max_token_length
                        );
                    }
                    debug!("Classified '{text}' as positional argument {}.", self.arguments.len());
                }

                let argument = owned_copy(text)?;
                self.arguments.try_reserve(1)?;
                self.arguments.push(argument);
            }
        }

        Ok(())
    }
}

fn owned_copy(text: &str) -> Result<String, ParseError> {
    let mut copy = String::default();
    copy.try_reserve_exact(text.len())?;
    copy.push_str(text);
    Ok(copy)
}
