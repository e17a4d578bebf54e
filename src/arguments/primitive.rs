use crate::{
    arg::Argument,
    feedback::{exceptions, CommandSyntaxError, DynamicErrorCreator},
    reader::ArgumentReader,
};
use std::fmt::Display;

// A value unordered against itself (NaN) fits no bound, so it is reported as malformed.
fn check_bounds<T>(
    value: T,
    token: &str,
    invalid: &DynamicErrorCreator<str>,
    minimum: T,
    maximum: T,
) -> Result<T, CommandSyntaxError>
where
    T: PartialOrd + Display + 'static,
{
    if value.partial_cmp(&value).is_none() {
        Err(invalid.create(token))
    } else if value > maximum {
        Err(exceptions::VALUE_TOO_HIGH.create(&value, &maximum))
    } else if value < minimum {
        Err(exceptions::VALUE_TOO_LOW.create(&value, &minimum))
    } else {
        Ok(value)
    }
}

macro_rules! bounded_argument {
    ($(#[$meta:meta])* $name:ident, $num:ty, $next:ident, $invalid:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            minimum: $num,
            maximum: $num,
        }

        impl $name {
            /// Accepts any value of the underlying type.
            pub fn new() -> Self {
                Self::clamped(<$num>::MIN, <$num>::MAX)
            }

            /// Accepts values between `minimum` and `maximum`, both inclusive.
            pub fn clamped(minimum: $num, maximum: $num) -> Self {
                $name { minimum, maximum }
            }

            /// Accepts values no lower than `minimum`.
            pub fn min(minimum: $num) -> Self {
                Self::clamped(minimum, <$num>::MAX)
            }

            /// Accepts values no higher than `maximum`.
            pub fn max(maximum: $num) -> Self {
                Self::clamped(<$num>::MIN, maximum)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<C: ?Sized> Argument<C> for $name {
            type Output = $num;

            fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<$num, CommandSyntaxError> {
                let value = reader.$next()?;
                let token = reader.current_token().unwrap_or_default();
                check_bounds(value, token, &exceptions::$invalid, self.minimum, self.maximum)
            }
        }
    };
}

bounded_argument!(
    /// An 8-bit signed integer.
    ByteArgument, i8, next_byte, INVALID_BYTE
);
bounded_argument!(
    /// A 16-bit signed integer.
    ShortArgument, i16, next_short, INVALID_SHORT
);
bounded_argument!(
    /// A 32-bit signed integer.
    IntegerArgument, i32, next_int, INVALID_INTEGER
);
bounded_argument!(
    /// A 64-bit signed integer.
    LongArgument, i64, next_long, INVALID_LONG
);
bounded_argument!(
    /// A single precision float.
    FloatArgument, f32, next_float, INVALID_FLOAT
);
bounded_argument!(
    /// A double precision float.
    DoubleArgument, f64, next_double, INVALID_DOUBLE
);

/// Any number, read as a double. Unlike [`DoubleArgument`], a malformed token is reported as
/// not being a number at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberArgument {
    minimum: f64,
    maximum: f64,
}

impl NumberArgument {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::clamped(f64::MIN, f64::MAX)
    }

    #[allow(missing_docs)]
    pub fn clamped(minimum: f64, maximum: f64) -> Self {
        NumberArgument { minimum, maximum }
    }

    #[allow(missing_docs)]
    pub fn min(minimum: f64) -> Self {
        Self::clamped(minimum, f64::MAX)
    }

    #[allow(missing_docs)]
    pub fn max(maximum: f64) -> Self {
        Self::clamped(f64::MIN, maximum)
    }
}

impl Default for NumberArgument {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Argument<C> for NumberArgument {
    type Output = f64;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<f64, CommandSyntaxError> {
        reader.parse_next(|token| {
            let value = token
                .parse::<f64>()
                .map_err(|_| exceptions::INVALID_NUMBER.create(token))?;
            check_bounds(value, token, &exceptions::INVALID_NUMBER, self.minimum, self.maximum)
        })
    }
}

/// `true` or `false`, in any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanArgument;

impl<C: ?Sized> Argument<C> for BooleanArgument {
    type Output = bool;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<bool, CommandSyntaxError> {
        reader.next_bool()
    }
}

/// A single character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharArgument;

impl<C: ?Sized> Argument<C> for CharArgument {
    type Output = char;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<char, CommandSyntaxError> {
        reader.next_char()
    }
}

/// One token of text, optionally limited to a number of characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringArgument {
    max_chars: Option<usize>,
}

impl StringArgument {
    /// Accepts a token of any length.
    pub fn new() -> Self {
        StringArgument { max_chars: None }
    }

    /// Accepts a token of at most `max_chars` characters.
    pub fn with_max_length(max_chars: usize) -> Self {
        StringArgument {
            max_chars: Some(max_chars),
        }
    }
}

impl<C: ?Sized> Argument<C> for StringArgument {
    type Output = String;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<String, CommandSyntaxError> {
        let token = reader.next_token()?;
        match self.max_chars {
            Some(max_chars) if token.chars().count() > max_chars =>
                Err(exceptions::LENGTH_EXCEEDED.create(token, &max_chars)),
            _ => Ok(token.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::ErrorKind;

    fn parse_one<A: Argument<()>>(argument: A, token: &str) -> Result<A::Output, CommandSyntaxError> {
        let input = format!("!cmd {}", token);
        let mut reader = ArgumentReader::new(&input, &());
        argument.parse(&mut reader)
    }

    #[test]
    fn clamped_bytes() {
        let error = parse_one(ByteArgument::clamped(0, 10), "15").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueTooHigh);
        assert_eq!(error.to_string(), "Value (`15`) cannot be greater than 10");

        let error = parse_one(ByteArgument::clamped(0, 10), "-1").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueTooLow);
        assert_eq!(error.to_string(), "Value (`-1`) cannot be lower than 0");

        assert_eq!(parse_one(ByteArgument::clamped(0, 10), "10"), Ok(10));
        assert_eq!(parse_one(ByteArgument::clamped(0, 10), "0"), Ok(0));
    }

    #[test]
    fn bounds_are_distinct_from_format_errors() {
        assert_eq!(
            parse_one(ByteArgument::new(), "200").unwrap_err().to_string(),
            "`200` is not a valid byte!"
        );
        assert_eq!(
            parse_one(LongArgument::min(5), "4").unwrap_err().kind(),
            ErrorKind::ValueTooLow
        );
        assert_eq!(parse_one(ShortArgument::max(5), "-300"), Ok(-300));
        assert_eq!(parse_one(FloatArgument::new(), "2.5"), Ok(2.5));
    }

    #[test]
    fn not_a_number_fits_no_bound() {
        let error = parse_one(DoubleArgument::clamped(0.0, 10.0), "NaN").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidFormat);
        assert_eq!(error.to_string(), "`NaN` is not a valid double!");

        let error = parse_one(FloatArgument::new(), "nan").unwrap_err();
        assert_eq!(error.to_string(), "`nan` is not a valid float!");

        let error = parse_one(NumberArgument::new(), "NaN").unwrap_err();
        assert_eq!(error.to_string(), "`NaN` is not a valid number!");

        let error = parse_one(DoubleArgument::clamped(0.0, 10.0), "inf").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueTooHigh);
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_one(NumberArgument::new(), "-4.25"), Ok(-4.25));
        assert_eq!(
            parse_one(NumberArgument::new(), "four").unwrap_err().to_string(),
            "`four` is not a valid number!"
        );
        assert_eq!(
            parse_one(NumberArgument::clamped(0.0, 1.0), "2").unwrap_err().kind(),
            ErrorKind::ValueTooHigh
        );
    }

    #[test]
    fn text_length() {
        assert_eq!(parse_one(StringArgument::with_max_length(3), "abc"), Ok("abc".to_owned()));
        let error = parse_one(StringArgument::with_max_length(3), "abcd").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::LengthExceeded);
        assert_eq!(error.to_string(), "`abcd` exceeds the length of 3");
    }

    #[test]
    fn booleans_and_chars() {
        assert_eq!(parse_one(BooleanArgument, "False"), Ok(false));
        assert_eq!(parse_one(BooleanArgument, "yes").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(parse_one(CharArgument, "é"), Ok('é'));
        assert_eq!(
            parse_one(CharArgument, "ab").unwrap_err().to_string(),
            "`ab` is not a valid char!"
        );
    }
}
