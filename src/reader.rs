use crate::{
    arg::Argument,
    feedback::{exceptions, CommandSyntaxError},
    parsed::ParsedArgument,
};
use std::str::FromStr;

/// Splits raw command text into tokens on single spaces. Consecutive spaces produce empty
/// tokens; trailing empty tokens are dropped, but the first token is always kept.
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = input.split(' ').collect();
    while tokens.len() > 1 && tokens.last().map_or(false, |token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Reads arguments from a tokenized command.
///
/// The first token is the command name and is never returned by the reader. The cursor
/// holds the index of the last consumed token, so a fresh reader sits on the command name.
/// The cursor only moves forward, except when [`try_parse`](ArgumentReader::try_parse)
/// rolls back a failed speculative parse.
pub struct ArgumentReader<'a, C: ?Sized> {
    source: &'a C,
    tokens: Vec<&'a str>,
    cursor: usize,
}

impl<'a, C: ?Sized> ArgumentReader<'a, C> {
    /// Tokenizes the given input for a command issued by `source`.
    pub fn new(input: &'a str, source: &'a C) -> Self {
        Self::from_tokens(tokenize(input), source)
    }

    /// Creates a reader over already split tokens.
    pub fn from_tokens(tokens: Vec<&'a str>, source: &'a C) -> Self {
        ArgumentReader {
            source,
            tokens,
            cursor: 0,
        }
    }

    /// The caller-supplied source of the command, through which arguments reach any
    /// lookups they need.
    pub fn source(&self) -> &'a C {
        self.source
    }

    /// Every token, including the command name.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// The number of tokens following the command name.
    pub fn argument_count(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    /// The index of the last consumed token.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The last consumed token, or the command name if nothing was consumed yet.
    pub fn current_token(&self) -> Option<&'a str> {
        self.tokens.get(self.cursor).copied()
    }

    /// The tokens which have not been consumed yet.
    pub fn remaining(&self) -> &[&'a str] {
        let start = (self.cursor + 1).min(self.tokens.len());
        &self.tokens[start ..]
    }

    /// Returns whether or not another token can be read.
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.tokens.len()
    }

    /// Consumes and returns the next token. Arguments should call this at most once per
    /// parse. Reading past the last token fails with an
    /// [`OutOfRange`](crate::ErrorKind::OutOfRange) error and leaves the cursor untouched.
    pub fn next_token(&mut self) -> Result<&'a str, CommandSyntaxError> {
        let next = self.cursor + 1;
        match self.tokens.get(next) {
            Some(&token) => {
                self.cursor = next;
                Ok(token)
            }
            None => Err(exceptions::OUT_OF_RANGE.create(&next)),
        }
    }

    /// Consumes the next token and converts it with the given parser.
    pub fn parse_next<T, F>(&mut self, parser: F) -> Result<T, CommandSyntaxError>
    where F: FnOnce(&'a str) -> Result<T, CommandSyntaxError> {
        let token = self.next_token()?;
        parser(token)
    }

    #[allow(missing_docs)]
    pub fn next_int(&mut self) -> Result<i32, CommandSyntaxError> {
        self.next_from_str(|token| exceptions::INVALID_INTEGER.create(token))
    }

    #[allow(missing_docs)]
    pub fn next_long(&mut self) -> Result<i64, CommandSyntaxError> {
        self.next_from_str(|token| exceptions::INVALID_LONG.create(token))
    }

    #[allow(missing_docs)]
    pub fn next_short(&mut self) -> Result<i16, CommandSyntaxError> {
        self.next_from_str(|token| exceptions::INVALID_SHORT.create(token))
    }

    #[allow(missing_docs)]
    pub fn next_byte(&mut self) -> Result<i8, CommandSyntaxError> {
        self.next_from_str(|token| exceptions::INVALID_BYTE.create(token))
    }

    #[allow(missing_docs)]
    pub fn next_float(&mut self) -> Result<f32, CommandSyntaxError> {
        self.next_from_str(|token| exceptions::INVALID_FLOAT.create(token))
    }

    #[allow(missing_docs)]
    pub fn next_double(&mut self) -> Result<f64, CommandSyntaxError> {
        self.next_from_str(|token| exceptions::INVALID_DOUBLE.create(token))
    }

    /// Consumes the next token, which must be exactly one character long.
    pub fn next_char(&mut self) -> Result<char, CommandSyntaxError> {
        let token = self.next_token()?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(exceptions::INVALID_CHAR.create(token)),
        }
    }

    /// Consumes the next token, which must be `true` or `false` in any case.
    pub fn next_bool(&mut self) -> Result<bool, CommandSyntaxError> {
        let token = self.next_token()?;
        if token.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if token.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(exceptions::INVALID_BOOLEAN.create(token))
        }
    }

    // Conversion failures are not rolled back: the token stays consumed.
    fn next_from_str<T, E>(&mut self, error: E) -> Result<T, CommandSyntaxError>
    where
        T: FromStr,
        E: FnOnce(&'a str) -> CommandSyntaxError,
    {
        let token = self.next_token()?;
        token.parse::<T>().map_err(|_| error(token))
    }

    /// Attempts to parse the given argument. If parsing fails, the cursor is restored to where
    /// it was before the call and an empty result is returned; the failure never propagates.
    pub fn try_parse<A>(&mut self, argument: &A) -> ParsedArgument<A::Output>
    where A: Argument<C> + ?Sized {
        self.speculate(|reader| argument.parse(reader))
    }

    pub(crate) fn speculate<T, F>(&mut self, parse: F) -> ParsedArgument<T>
    where F: FnOnce(&mut Self) -> Result<T, CommandSyntaxError> {
        let snapshot = self.cursor;
        match parse(self) {
            Ok(value) => ParsedArgument::parse(value),
            Err(error) => {
                log::trace!(
                    "Speculative parse failed ({}), rolling cursor back from {} to {}",
                    error,
                    self.cursor,
                    snapshot
                );
                self.cursor = snapshot;
                ParsedArgument::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arguments::IntegerArgument, feedback::ErrorKind};

    struct Pair;

    impl<C: ?Sized> Argument<C> for Pair {
        type Output = (i32, i32);

        fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<(i32, i32), CommandSyntaxError> {
            Ok((reader.next_int()?, reader.next_int()?))
        }
    }

    #[test]
    fn tokenize_on_single_spaces() {
        assert_eq!(tokenize("!cmd a b"), vec!["!cmd", "a", "b"]);
        assert_eq!(tokenize("!cmd a  b"), vec!["!cmd", "a", "", "b"]);
        assert_eq!(tokenize("!cmd a  "), vec!["!cmd", "a"]);
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn reads_tokens_after_the_command_name() {
        let mut reader = ArgumentReader::new("!add 1 2", &());
        assert_eq!(reader.argument_count(), 2);
        assert_eq!(reader.current_token(), Some("!add"));
        assert!(reader.has_next());
        assert_eq!(reader.next_int(), Ok(1));
        assert_eq!(reader.next_token(), Ok("2"));
        assert!(!reader.has_next());
        assert_eq!(reader.remaining(), &[] as &[&str]);
    }

    #[test]
    fn reading_past_the_end_is_out_of_range() {
        let mut reader = ArgumentReader::new("!cmd", &());
        let error = reader.next_token().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::OutOfRange);
        assert_eq!(error.to_string(), "1st component doesn't exist!");
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn conversion_failures_keep_the_token_consumed() {
        let mut reader = ArgumentReader::new("!cmd abc", &());
        let error = reader.next_int().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidFormat);
        assert_eq!(error.to_string(), "`abc` is not a valid integer!");
        assert_eq!(reader.cursor(), 1);
    }

    #[test]
    fn typed_extractors() {
        let mut reader = ArgumentReader::new("!cmd x TRUE 1.5 -3 300", &());
        assert_eq!(reader.next_char(), Ok('x'));
        assert_eq!(reader.next_bool(), Ok(true));
        assert_eq!(reader.next_double(), Ok(1.5));
        assert_eq!(reader.next_byte(), Ok(-3));
        assert_eq!(reader.next_byte().unwrap_err().kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn failed_try_parse_restores_the_cursor() {
        let mut reader = ArgumentReader::new("!cmd 5 word", &());
        assert_eq!(reader.try_parse(&IntegerArgument::new()).into_result(), Some(5));
        assert_eq!(reader.cursor(), 1);

        let parsed = reader.try_parse(&IntegerArgument::new());
        assert!(!parsed.has_result());
        assert_eq!(reader.cursor(), 1);

        let parsed = reader.try_parse(&Pair);
        assert!(!parsed.has_result());
        assert_eq!(reader.cursor(), 1);
        assert_eq!(reader.next_token(), Ok("word"));
    }
}
