use crate::{
    arg::Argument,
    feedback::{exceptions, CommandSyntaxError},
    reader::ArgumentReader,
};
use std::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};

/// A closed set of named values. Usually implemented with `#[derive(EnumArgument)]`, which
/// names every variant after its snake_case identifier.
pub trait NamedEnum: Sized + 'static {
    /// Every member of the set.
    const VARIANTS: &'static [Self];

    /// The name this member is matched by.
    fn name(&self) -> &'static str;

    /// Finds the member whose name matches `name`, ignoring case. A `-` in either name
    /// matches a `_` in the other, so `light-gray` finds `light_gray`.
    fn from_name(name: &str) -> Option<&'static Self> {
        Self::VARIANTS
            .iter()
            .find(|variant| names_match(variant.name(), name))
    }
}

fn names_match(expected: &str, given: &str) -> bool {
    fn fold(ch: char) -> char {
        if ch == '-' {
            '_'
        } else {
            ch.to_ascii_lowercase()
        }
    }

    expected.len() == given.len() && expected.chars().map(fold).eq(given.chars().map(fold))
}

/// A member of a [`NamedEnum`], matched by name without regard to case.
pub struct EnumArgument<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> EnumArgument<E> {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        EnumArgument {
            _marker: PhantomData,
        }
    }
}

impl<E> Default for EnumArgument<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumArgument<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> Copy for EnumArgument<E> {}

impl<E> Debug for EnumArgument<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "EnumArgument<{}>", std::any::type_name::<E>())
    }
}

impl<C, E> Argument<C> for EnumArgument<E>
where
    C: ?Sized,
    E: NamedEnum + Clone,
{
    type Output = E;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<E, CommandSyntaxError> {
        reader.parse_next(|token| {
            E::from_name(token)
                .cloned()
                .ok_or_else(|| exceptions::INVALID_ENUM.create(token))
        })
    }
}
