use std::fmt::{self, Display, Formatter};

/// The outcome of parsing one argument: either a value or nothing.
///
/// An empty result carries no error. It only appears for optional arguments whose parse
/// failed and was rolled back; mandatory failures abort resolution before a result is
/// ever recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedArgument<T> {
    result: Option<T>,
}

impl<T> ParsedArgument<T> {
    /// Wraps a successfully parsed value.
    pub fn parse(result: T) -> Self {
        ParsedArgument {
            result: Some(result),
        }
    }

    /// Wraps a value which may be absent.
    pub fn from_option(result: Option<T>) -> Self {
        ParsedArgument { result }
    }

    /// A result holding nothing.
    pub fn empty() -> Self {
        ParsedArgument { result: None }
    }

    /// The parsed value, if any.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Consumes this container, returning the parsed value if any.
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Returns the parsed value or `other` if nothing was parsed.
    pub fn get_or(self, other: T) -> T {
        self.result.unwrap_or(other)
    }

    /// Whether a value was parsed.
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Runs the given function on the parsed value if there is one.
    pub fn if_has_result<F: FnOnce(&T)>(&self, f: F) {
        if let Some(result) = &self.result {
            f(result);
        }
    }

    /// Maps the parsed value, keeping an empty result empty.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParsedArgument<U> {
        ParsedArgument {
            result: self.result.map(f),
        }
    }
}

impl<T> Default for ParsedArgument<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for ParsedArgument<T> {
    fn from(result: Option<T>) -> Self {
        Self::from_option(result)
    }
}

impl<T: Display> Display for ParsedArgument<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.result {
            Some(result) => write!(f, "ParsedArgument[{}]", result),
            None => f.write_str("ParsedArgument.empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_and_empty() {
        let parsed = ParsedArgument::parse(42);
        assert!(parsed.has_result());
        assert_eq!(parsed.result(), Some(&42));
        assert_eq!(parsed.to_string(), "ParsedArgument[42]");

        let empty = ParsedArgument::<i32>::empty();
        assert!(!empty.has_result());
        assert_eq!(empty.to_string(), "ParsedArgument.empty");
        assert_eq!(empty.get_or(7), 7);
    }

    #[test]
    fn callbacks_only_run_with_a_result() {
        let mut seen = Vec::new();
        ParsedArgument::parse("a").if_has_result(|value| seen.push(*value));
        ParsedArgument::<&str>::empty().if_has_result(|value| seen.push(*value));
        assert_eq!(seen, vec!["a"]);
        assert_eq!(ParsedArgument::parse(2).map(|n| n * 2).into_result(), Some(4));
    }
}
