//! `argscan` is a minimal command line argument scanner for Rust.
//!
//! It does not take a schema.
//! Instead, it sorts the invocation tokens into two ordered sequences and lets the program ask questions about them:
//! * *Flags*: tokens beginning with `-`, such as `-v`, `--verbose` or `--out=file.txt`.
//! The text before the first `=` is the key; the text after it (if any) is the value.
//! * *Positional arguments*: every other token, such as `file.txt`.
//!
//! # Usage
//! ```
//! use argscan::ArgParser;
//!
//! let mut parser = ArgParser::new();
//! parser.parse(["a", "-v", "b", "--out=file.txt", "c"]).unwrap();
//!
//! assert_eq!(parser.arguments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
//! assert_eq!(parser.flag_entry(0), (Some("-v"), None));
//! assert_eq!(parser.flag_entry(1), (Some("--out"), Some("file.txt")));
//! assert_eq!(parser.flag(Some("--out"), Some("-o"), Some("a.out")), Some("file.txt"));
//! ```
//!
//! A program usually parses its own invocation with [`ArgParser::parse_env`], which skips the program name.
//!
//! # Cli Semantics
//! * Classification looks at the first character only.
//! A lone `-` and `--` are flags too; there is no end-of-options marker.
//! * Only the first `=` separates key from value.
//! For example, `--expr=a=b` has the key `--expr` and the value `a=b`.
//! * A flag written without `=` has *no value*, which is distinct from an empty value (`--out` vs. `--out=`).
//! * Flags never consume the following token; `--out file.txt` is a flag followed by a positional argument.
//! * Looking up a repeated flag yields its last occurrence.
//! * Positional arguments longer than [`DEFAULT_MAX_TOKEN_LENGTH`] characters (configurable via [`ParserBuilder`]) are truncated.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` events while parsing and looking up flags.
#![deny(missing_docs)]
mod constant;
mod model;
mod parser;
mod tokens;

pub use constant::DEFAULT_MAX_TOKEN_LENGTH;
pub use model::Flag;
pub use parser::{ArgParser, ConfigError, ParseError, ParserBuilder};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
