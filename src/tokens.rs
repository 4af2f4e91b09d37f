use crate::constant::*;

/// A single raw command line token, classified.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Flag { key: &'a str, value: Option<&'a str> },
    Positional(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a token by its first character.
    ///
    /// Tokens starting with `-` are flags, split on the first `=` (if any).
    /// Everything else, including the empty token, is positional.
    pub(crate) fn classify(token: &'a str) -> Self {
        if !token.starts_with(FLAG_PREFIX) {
            return Token::Positional(token);
        }

        // Find the key-value separator, such as:
        //  --out=file.txt
        //  -o=file.txt
        //  --expr=a=b  (only the first '=' splits)
        match token.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) => Token::Flag {
                key,
                value: Some(value),
            },
            None => Token::Flag {
                key: token,
                value: None,
            },
        }
    }
}

/// Cut `token` down to at most `max_chars` characters.
///
/// Returns the token unchanged when it already fits.
/// The cut always lands on a character boundary.
pub(crate) fn truncate(token: &str, max_chars: usize) -> &str {
    match token.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &token[..byte_offset],
        None => token,
    }
}
