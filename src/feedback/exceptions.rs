//! Built-in error creators used by the reader, the bundled arguments and the resolver.

use crate::{
    feedback::{
        BiDynamicErrorCreator,
        DynamicErrorCreator,
        ErrorKind,
        SimpleErrorCreator,
        TriDynamicErrorCreator,
    },
    util::{ordinal, sentence_of},
};
use std::fmt::Display;

#[allow(missing_docs)]
pub static INVALID_INTEGER: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid integer!", value)
    });
#[allow(missing_docs)]
pub static INVALID_LONG: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid long!", value)
    });
#[allow(missing_docs)]
pub static INVALID_SHORT: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid short!", value)
    });
#[allow(missing_docs)]
pub static INVALID_BYTE: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid byte!", value)
    });
#[allow(missing_docs)]
pub static INVALID_FLOAT: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid float!", value)
    });
#[allow(missing_docs)]
pub static INVALID_DOUBLE: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid double!", value)
    });
#[allow(missing_docs)]
pub static INVALID_CHAR: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid char!", value)
    });
#[allow(missing_docs)]
pub static INVALID_BOOLEAN: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid boolean, must be `true` or `false`!", value)
    });
#[allow(missing_docs)]
pub static INVALID_NUMBER: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid number!", value)
    });
#[allow(missing_docs)]
pub static INVALID_COLOR: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidFormat, |value| {
        format!("`{}` is not a valid color value!", value)
    });
#[allow(missing_docs)]
pub static INVALID_ENUM: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::InvalidEnumValue, |value| {
        format!("`{}` is not a valid type!", value)
    });

/// Rendered from the offending text and the maximum number of characters.
pub static LENGTH_EXCEEDED: BiDynamicErrorCreator<str, usize> =
    BiDynamicErrorCreator::new(ErrorKind::LengthExceeded, |value, length| {
        format!("`{}` exceeds the length of {}", value, length)
    });
/// Rendered from the parsed value and the inclusive maximum.
pub static VALUE_TOO_HIGH: BiDynamicErrorCreator<dyn Display, dyn Display> =
    BiDynamicErrorCreator::new(ErrorKind::ValueTooHigh, |value, max| {
        format!("Value (`{}`) cannot be greater than {}", value, max)
    });
/// Rendered from the parsed value and the inclusive minimum.
pub static VALUE_TOO_LOW: BiDynamicErrorCreator<dyn Display, dyn Display> =
    BiDynamicErrorCreator::new(ErrorKind::ValueTooLow, |value, min| {
        format!("Value (`{}`) cannot be lower than {}", value, min)
    });

/// Rendered from the token index an argument tried to read.
pub static OUT_OF_RANGE: DynamicErrorCreator<usize> =
    DynamicErrorCreator::new(ErrorKind::OutOfRange, |index| {
        format!("{} component doesn't exist!", ordinal(*index))
    });

/// Rendered from the entity label and the identifier that was looked up.
pub static ENTITY_NOT_FOUND: BiDynamicErrorCreator<str, u64> =
    BiDynamicErrorCreator::new(ErrorKind::NotFound, |label, id| {
        format!("No {} with id `{}` could be found", label, id)
    });
/// Rendered from the entity label alone, for mentions that point nowhere.
pub static MENTION_NOT_FOUND: DynamicErrorCreator<str> =
    DynamicErrorCreator::new(ErrorKind::NotFound, |label| {
        format!("The {} in the mention could not be found", label)
    });
/// Rendered from the offending token, the entity label and whether mentions are accepted.
pub static INVALID_ENTITY: TriDynamicErrorCreator<str, str, bool> =
    TriDynamicErrorCreator::new(ErrorKind::InvalidFormat, |value, label, mentionable| {
        if *mentionable {
            format!("`{}` is not a valid {} id or {} mention", value, label, label)
        } else {
            format!("`{}` is not a valid {} id", value, label)
        }
    });

#[allow(missing_docs)]
pub static PERMISSION: SimpleErrorCreator = SimpleErrorCreator::new(
    ErrorKind::PermissionDenied,
    "You do not have permission to run this command!",
);
#[allow(missing_docs)]
pub static NO_ARGUMENTS: SimpleErrorCreator =
    SimpleErrorCreator::new(ErrorKind::NoArguments, "No arguments are present!");
#[allow(missing_docs)]
pub static MISSING_ARGUMENT: SimpleErrorCreator =
    SimpleErrorCreator::new(ErrorKind::MissingArgument, "An argument is missing");
#[allow(missing_docs)]
pub static MISSING_ARGUMENTS: SimpleErrorCreator = SimpleErrorCreator::new(
    ErrorKind::MissingArguments,
    "Multiple arguments are missing, view this command's arguments!",
);
/// Used with a position, for one mandatory argument that has no token left.
pub static SPECIFIC_MISSING_ARGUMENT: SimpleErrorCreator =
    SimpleErrorCreator::new(ErrorKind::MissingArgument, "Argument is missing");
/// Rendered from the ordinals of every missing argument.
pub static SPECIFIC_MISSING_ARGUMENTS: DynamicErrorCreator<[String]> =
    DynamicErrorCreator::new(ErrorKind::MissingArguments, |missing| {
        format!("{} arguments are missing", sentence_of(missing))
    });
