/// Every flag token starts with this character.
pub(crate) const FLAG_PREFIX: char = '-';

/// Splits a flag token into its key and value (first occurrence only).
pub(crate) const KEY_VALUE_SEPARATOR: char = '=';

/// Default cap, in characters, on the length of a stored positional argument.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 1024;
