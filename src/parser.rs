mod base;
mod builder;
mod error;
mod query;

pub use base::ArgParser;
pub use builder::ParserBuilder;
pub use error::{ConfigError, ParseError};
