use crate::{feedback::CommandSyntaxError, reader::ArgumentReader};
use std::any::Any;

/// The unit of parsing in a command schema. An argument consumes tokens from an
/// [`ArgumentReader`] and converts them into a typed value.
///
/// The type parameter `C` is the source of the command as supplied by the caller. Arguments
/// which need to look something up (a user, a channel) require `C` to provide that lookup;
/// all others are implemented for every `C`.
pub trait Argument<C: ?Sized> {
    /// The type this argument parses into.
    type Output;

    /// Parses this argument from the reader. Implementations should call
    /// [`next_token`](ArgumentReader::next_token) or one of the typed extractors at most once,
    /// and should only fail when no valid value can be built from the input.
    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<Self::Output, CommandSyntaxError>;

    /// Whether a failure to parse this argument should be swallowed instead of aborting the
    /// command.
    fn is_optional(&self) -> bool {
        false
    }
}

impl<C: ?Sized, A: Argument<C> + ?Sized> Argument<C> for &A {
    type Output = A::Output;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<Self::Output, CommandSyntaxError> {
        (**self).parse(reader)
    }

    fn is_optional(&self) -> bool {
        (**self).is_optional()
    }
}

/// Wraps an argument so that it is treated as optional. Parsing is delegated unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional<A> {
    inner: A,
}

impl<A> Optional<A> {
    /// Makes the given argument optional.
    pub fn new(inner: A) -> Self {
        Optional { inner }
    }

    /// The wrapped argument.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<C: ?Sized, A: Argument<C>> Argument<C> for Optional<A> {
    type Output = A::Output;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<Self::Output, CommandSyntaxError> {
        self.inner.parse(reader)
    }

    fn is_optional(&self) -> bool {
        true
    }
}

/// Shorthand for [`Optional::new`].
pub fn optional<A>(argument: A) -> Optional<A> {
    Optional::new(argument)
}

/// Exactly one of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<F, S> {
    #[allow(missing_docs)]
    First(F),
    #[allow(missing_docs)]
    Second(S),
}

impl<F, S> Either<F, S> {
    /// The first value, if that is what this holds.
    pub fn first(&self) -> Option<&F> {
        match self {
            Either::First(first) => Some(first),
            Either::Second(_) => None,
        }
    }

    /// The second value, if that is what this holds.
    pub fn second(&self) -> Option<&S> {
        match self {
            Either::First(_) => None,
            Either::Second(second) => Some(second),
        }
    }

    #[allow(missing_docs)]
    pub fn is_first(&self) -> bool {
        matches!(self, Either::First(_))
    }

    #[allow(missing_docs)]
    pub fn is_second(&self) -> bool {
        matches!(self, Either::Second(_))
    }

    /// Converts this into another type with the given function.
    pub fn convert<T, G>(self, function: G) -> T
    where G: FnOnce(Self) -> T {
        function(self)
    }

    /// Collapses both sides into one type.
    pub fn either<T>(self, first: impl FnOnce(F) -> T, second: impl FnOnce(S) -> T) -> T {
        match self {
            Either::First(value) => first(value),
            Either::Second(value) => second(value),
        }
    }
}

/// Tries the first argument speculatively and falls back to the second.
///
/// If the first argument fails, the reader is rolled back and the second argument is parsed
/// normally. When both fail, the error surfaced is always the second argument's; the first
/// argument's failure is discarded. Order the alternatives so that the second one produces the
/// more useful message.
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherArgument<F, S> {
    first: F,
    second: S,
}

impl<F, S> EitherArgument<F, S> {
    /// Creates an argument accepting either of the given arguments.
    pub fn new(first: F, second: S) -> Self {
        EitherArgument { first, second }
    }
}

impl<C, F, S> Argument<C> for EitherArgument<F, S>
where
    C: ?Sized,
    F: Argument<C>,
    S: Argument<C>,
{
    type Output = Either<F::Output, S::Output>;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<Self::Output, CommandSyntaxError> {
        match reader.try_parse(&self.first).into_result() {
            Some(first) => Ok(Either::First(first)),
            None => self.second.parse(reader).map(Either::Second),
        }
    }
}

/// Shorthand for [`EitherArgument::new`].
pub fn either<F, S>(first: F, second: S) -> EitherArgument<F, S> {
    EitherArgument::new(first, second)
}

/// An argument with its output type erased, so that arguments of different types can share a
/// command schema.
pub trait ErasedArgument<C: ?Sized>: Send + Sync {
    /// Parses the argument and boxes the result.
    fn parse_erased(&self, reader: &mut ArgumentReader<'_, C>) -> Result<Box<dyn Any>, CommandSyntaxError>;

    /// See [`Argument::is_optional`].
    fn is_optional(&self) -> bool;
}

impl<C, A> ErasedArgument<C> for A
where
    C: ?Sized,
    A: Argument<C> + Send + Sync,
    A::Output: 'static,
{
    fn parse_erased(&self, reader: &mut ArgumentReader<'_, C>) -> Result<Box<dyn Any>, CommandSyntaxError> {
        self.parse(reader).map(|value| Box::new(value) as Box<dyn Any>)
    }

    fn is_optional(&self) -> bool {
        Argument::<C>::is_optional(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arguments::{IntegerArgument, StringArgument},
        feedback::ErrorKind,
    };

    #[test]
    fn optional_only_changes_optionality() {
        let argument = optional(IntegerArgument::new());
        assert!(Argument::<()>::is_optional(&argument));
        assert!(!Argument::<()>::is_optional(argument.inner()));

        let mut reader = ArgumentReader::new("!cmd 9", &());
        assert_eq!(argument.parse(&mut reader), Ok(9));
    }

    #[test]
    fn either_prefers_the_first_alternative() {
        let argument = either(IntegerArgument::new(), StringArgument::new());
        let mut reader = ArgumentReader::new("!cmd 12 abc", &());
        assert_eq!(argument.parse(&mut reader), Ok(Either::First(12)));
        assert_eq!(argument.parse(&mut reader), Ok(Either::Second("abc".to_owned())));
        assert_eq!(reader.cursor(), 2);
    }

    #[test]
    fn either_reports_the_second_failure() {
        let argument = either(StringArgument::with_max_length(1), IntegerArgument::clamped(0, 5));
        let mut reader = ArgumentReader::new("!cmd 99", &());
        let error = argument.parse(&mut reader).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueTooHigh);
        assert_eq!(error.to_string(), "Value (`99`) cannot be greater than 5");

        let argument = either(IntegerArgument::clamped(0, 5), IntegerArgument::new());
        let mut reader = ArgumentReader::new("!cmd abc", &());
        let error = argument.parse(&mut reader).unwrap_err();
        assert_eq!(error.to_string(), "`abc` is not a valid integer!");
    }

    #[test]
    fn erased_arguments_box_their_output() {
        let argument: Box<dyn ErasedArgument<()>> = Box::new(optional(IntegerArgument::new()));
        assert!(argument.is_optional());

        let mut reader = ArgumentReader::new("!cmd 3", &());
        let value = argument.parse_erased(&mut reader).unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&3));
    }
}
