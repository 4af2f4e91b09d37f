/// A flag token, as it appeared on the command line.
///
/// The key is the literal text of the token up to (but excluding) the first `=`.
/// The value is whatever follows that `=`.
/// A flag written without `=` has no value, which is distinct from an empty value:
/// `--out` has `value() == None` while `--out=` has `value() == Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flag {
    key: String,
    value: Option<String>,
}

impl Flag {
    pub(crate) fn new(key: String, value: Option<String>) -> Self {
        Self { key, value }
    }

    /// The flag name, including its leading dash(es).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The text after the first `=`, or `None` when the flag was written without one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the flag was written in `key=value` form.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the flag as a `(key, value)` pair.
    pub fn as_pair(&self) -> (&str, Option<&str>) {
        (self.key(), self.value())
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => write!(f, "{}", self.key),
        }
    }
}
