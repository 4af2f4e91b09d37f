use std::fmt::Display;
use std::str::FromStr;

use crate::model::Flag;
use crate::parser::{ArgParser, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::trace;

impl ArgParser {
    /// Count the positional arguments.
    /// Returns `0` if [`ArgParser::parse`] hasn't been called yet.
    pub fn num_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Count the flags.
    /// Returns `0` if [`ArgParser::parse`] hasn't been called yet.
    pub fn num_flags(&self) -> usize {
        self.flags.len()
    }

    /// Get a positional argument by its index amongst the positional arguments.
    /// Returns `None` if the index is out of bounds.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    /// Iterate the positional arguments in the order they were given.
    pub fn arguments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.arguments.iter().map(String::as_str)
    }

    /// Get a flag by its index amongst the flags.
    /// Returns `None` if the index is out of bounds.
    pub fn flag_at(&self, index: usize) -> Option<&Flag> {
        self.flags.get(index)
    }

    /// Get the key and value of a flag by its index amongst the flags.
    ///
    /// Both are `None` if the index is out of bounds.
    /// An in-bounds flag written without `=` yields `(Some(key), None)`.
    pub fn flag_entry(&self, index: usize) -> (Option<&str>, Option<&str>) {
        match self.flag_at(index) {
            Some(flag) => (Some(flag.key()), flag.value()),
            None => (None, None),
        }
    }

    /// The flags in the order they were given.
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Find the last flag whose key is either `long` (ex: `--verbose`) or `short` (ex: `-v`).
    ///
    /// A `None` name never matches.
    /// Keys are compared exactly, so `--verbose` does not match the short name `-v`.
    pub fn find_flag(&self, long: Option<&str>, short: Option<&str>) -> Option<&Flag> {
        let found = self
            .flags
            .iter()
            .rev()
            .find(|flag| long == Some(flag.key()) || short == Some(flag.key()));

        #[cfg(feature = "tracing_debug")]
        {
            trace!("Lookup of {long:?}/{short:?} found {found:?}.");
        }

        found
    }

    /// Look up the value of a flag by its `long` and/or `short` name.
    ///
    /// If the flag is given multiple times, the last occurrence wins.
    /// Returns `default` if no flag matches either name.
    /// A matching flag written without `=` has no value, so yields `None` regardless of `default`.
    ///
    /// ### Example
    /// ```
    /// use argscan::ArgParser;
    ///
    /// let mut parser = ArgParser::new();
    /// parser.parse(["-o=a.txt", "--verbose", "--out=b.txt"]).unwrap();
    ///
    /// assert_eq!(parser.flag(Some("--out"), Some("-o"), None), Some("b.txt"));
    /// assert_eq!(parser.flag(Some("--level"), Some("-l"), Some("info")), Some("info"));
    /// assert_eq!(parser.flag(Some("--verbose"), None, Some("unused")), None);
    /// ```
    pub fn flag<'a>(
        &'a self,
        long: Option<&str>,
        short: Option<&str>,
        default: Option<&'a str>,
    ) -> Option<&'a str> {
        match self.find_flag(long, short) {
            Some(flag) => flag.value(),
            None => default,
        }
    }

    /// Whether any flag matches either name.
    pub fn has_flag(&self, long: Option<&str>, short: Option<&str>) -> bool {
        self.find_flag(long, short).is_some()
    }

    /// Look up the value of a flag (as [`ArgParser::flag`]) and convert it via [`FromStr`].
    ///
    /// Returns `Ok(None)` if no flag matches either name.
    ///
    /// ### Example
    /// ```
    /// use argscan::{ArgParser, ParseError};
    ///
    /// let mut parser = ArgParser::new();
    /// parser.parse(["--jobs=4", "--name=x", "--force"]).unwrap();
    ///
    /// assert_eq!(parser.flag_as::<u32>(Some("--jobs"), Some("-j")).unwrap(), Some(4));
    /// assert_eq!(parser.flag_as::<u32>(Some("--depth"), None).unwrap(), None);
    /// assert!(matches!(parser.flag_as::<u32>(Some("--name"), None), Err(ParseError::Conversion { .. })));
    /// assert!(matches!(parser.flag_as::<u32>(Some("--force"), None), Err(ParseError::MissingValue { .. })));
    /// ```
    pub fn flag_as<T>(&self, long: Option<&str>, short: Option<&str>) -> Result<Option<T>, ParseError>
    where
        T: FromStr,
        <T as FromStr>::Err: Display,
    {
        let flag = match self.find_flag(long, short) {
            Some(flag) => flag,
            None => return Ok(None),
        };
        let value = flag.value().ok_or_else(|| ParseError::MissingValue {
            key: flag.key().to_string(),
        })?;

        T::from_str(value)
            .map(Some)
            .map_err(|error| ParseError::Conversion {
                key: flag.key().to_string(),
                value: value.to_string(),
                message: error.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parsed(tokens: &[&str]) -> ArgParser {
        let mut parser = ArgParser::new();
        parser.parse(tokens).unwrap();
        parser
    }

    #[test]
    fn unparsed_queries() {
        let parser = ArgParser::new();
        assert_eq!(parser.num_arguments(), 0);
        assert_eq!(parser.num_flags(), 0);
        assert_eq!(parser.argument(0), None);
        assert_eq!(parser.flag_at(0), None);
        assert_eq!(parser.flag_entry(0), (None, None));
        assert_eq!(parser.arguments().len(), 0);
        assert!(parser.flags().is_empty());
        assert_eq!(parser.flag(Some("--a"), Some("-a"), Some("d")), Some("d"));
        assert!(!parser.has_flag(Some("--a"), Some("-a")));
    }

    #[rstest]
    #[case(0, Some("a"))]
    #[case(1, Some("b"))]
    #[case(2, Some("c"))]
    #[case(3, None)]
    #[case(usize::MAX, None)]
    fn argument_by_index(#[case] index: usize, #[case] expected: Option<&str>) {
        let parser = parsed(&["a", "-v", "b", "--out=file.txt", "c"]);
        assert_eq!(parser.argument(index), expected);
    }

    #[rstest]
    #[case(0, (Some("-v"), None))]
    #[case(1, (Some("--out"), Some("file.txt")))]
    #[case(2, (None, None))]
    #[case(usize::MAX, (None, None))]
    fn flag_by_index(#[case] index: usize, #[case] expected: (Option<&str>, Option<&str>)) {
        let parser = parsed(&["a", "-v", "b", "--out=file.txt", "c"]);
        assert_eq!(parser.flag_entry(index), expected);
        assert_eq!(parser.flag_at(index).map(Flag::as_pair), expected.0.map(|k| (k, expected.1)));
    }

    #[test]
    fn arguments_in_order() {
        let parser = parsed(&["c", "-x", "a", "b"]);
        assert_eq!(parser.arguments().collect::<Vec<&str>>(), vec!["c", "a", "b"]);
    }

    #[rstest]
    #[case(vec!["--x=1", "--x=2"], Some("--x"), None, Some("2"))]
    #[case(vec!["--x=1", "-x=2"], Some("--x"), Some("-x"), Some("2"))]
    #[case(vec!["-x=1", "--x=2"], Some("--x"), Some("-x"), Some("2"))]
    #[case(vec!["-x=1", "--x=2"], None, Some("-x"), Some("1"))]
    #[case(vec!["--x=1", "--x"], Some("--x"), None, None)]
    #[case(vec!["--x", "--x="], Some("--x"), None, Some(""))]
    #[case(vec!["--x=first", "a", "-y"], Some("--x"), None, Some("first"))]
    #[case(vec!["--x=1"], None, None, Some("default"))]
    #[case(vec!["--x=1"], Some(""), Some(""), Some("default"))]
    #[case(vec!["--verbose=1"], None, Some("-v"), Some("default"))]
    #[case(vec!["--xy=1"], Some("--x"), None, Some("default"))]
    #[case(vec![], Some("--x"), Some("-x"), Some("default"))]
    fn flag_by_name(
        #[case] tokens: Vec<&str>,
        #[case] long: Option<&str>,
        #[case] short: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let parser = parsed(tokens.as_slice());
        assert_eq!(parser.flag(long, short, Some("default")), expected);
    }

    #[test]
    fn flag_by_name_reaches_first_entry() {
        let parser = parsed(&["--first=0", "-a", "-b", "-c"]);
        assert_eq!(parser.flag(Some("--first"), None, None), Some("0"));
        assert_eq!(parser.find_flag(Some("--first"), None), parser.flag_at(0));
    }

    #[test]
    fn flag_by_name_without_default() {
        let parser = parsed(&["-a"]);
        assert_eq!(parser.flag(Some("--missing"), Some("-m"), None), None);
    }

    #[test]
    fn has_flag() {
        let parser = parsed(&["-v", "--out=x"]);
        assert!(parser.has_flag(Some("--verbose"), Some("-v")));
        assert!(parser.has_flag(Some("--out"), None));
        assert!(!parser.has_flag(Some("--quiet"), Some("-q")));
        assert!(!parser.has_flag(None, None));
    }

    #[test]
    fn flag_as_converts() {
        let parser = parsed(&["--jobs=2", "-j=8", "--ratio=0.5", "--name=abc"]);
        assert_eq!(parser.flag_as::<u8>(Some("--jobs"), Some("-j")).unwrap(), Some(8));
        assert_eq!(parser.flag_as::<f64>(Some("--ratio"), None).unwrap(), Some(0.5));
        assert_eq!(
            parser.flag_as::<String>(Some("--name"), None).unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(parser.flag_as::<u8>(Some("--missing"), None).unwrap(), None);
    }

    #[test]
    fn flag_as_missing_value() {
        let parser = parsed(&["--jobs"]);
        let error = parser.flag_as::<u8>(Some("--jobs"), None).unwrap_err();
        assert_matches!(error, ParseError::MissingValue { key } if key == "--jobs");
    }

    #[test]
    fn flag_as_conversion() {
        let parser = parsed(&["--jobs=many"]);
        let error = parser.flag_as::<u8>(Some("--jobs"), None).unwrap_err();
        assert_matches!(
            error,
            ParseError::Conversion { key, value, .. } if key == "--jobs" && value == "many"
        );
    }

    #[test]
    fn queries_are_idempotent() {
        let parser = parsed(&["a", "--x=1", "-y", "b", "--x=2"]);

        for _ in 0..3 {
            assert_eq!(parser.num_arguments(), 2);
            assert_eq!(parser.num_flags(), 3);
            assert_eq!(parser.argument(1), Some("b"));
            assert_eq!(parser.flag_entry(1), (Some("-y"), None));
            assert_eq!(parser.flag(Some("--x"), Some("-x"), None), Some("2"));
        }
    }
}
