use crate::util::ordinal_suffix;
use std::fmt::{self, Display, Formatter};

/// The category of a [`CommandSyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller failed the command's permission predicate.
    PermissionDenied,
    /// No tokens followed the command name although at least one was required.
    NoArguments,
    /// A single argument is missing.
    MissingArgument,
    /// More than one argument is missing.
    MissingArguments,
    /// A token could not be converted into the requested type.
    InvalidFormat,
    /// A converted value was above the argument's inclusive maximum.
    ValueTooHigh,
    /// A converted value was below the argument's inclusive minimum.
    ValueTooLow,
    /// A token did not name any member of a closed set.
    InvalidEnumValue,
    /// A text token was longer than the argument allows.
    LengthExceeded,
    /// An injected lookup found nothing for a well-formed identifier.
    NotFound,
    /// An argument tried to read past the last token. This is a bug in the argument, not
    /// something the user typed.
    OutOfRange,
    /// A command's executor failed after its arguments resolved.
    Execution,
}

impl ErrorKind {
    /// Whether this kind signals a broken argument implementation rather than bad input.
    pub fn is_contract_violation(self) -> bool {
        self == ErrorKind::OutOfRange
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::NoArguments => "no arguments",
            ErrorKind::MissingArgument => "missing argument",
            ErrorKind::MissingArguments => "missing arguments",
            ErrorKind::InvalidFormat => "invalid format",
            ErrorKind::ValueTooHigh => "value too high",
            ErrorKind::ValueTooLow => "value too low",
            ErrorKind::InvalidEnumValue => "invalid enum value",
            ErrorKind::LengthExceeded => "length exceeded",
            ErrorKind::NotFound => "not found",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::Execution => "execution failed",
        };
        f.write_str(name)
    }
}

/// A rendered, user-facing failure produced while resolving or running a command.
///
/// The final text is computed once when the error is built. If the error was created for a
/// specific argument, the text is prefixed with that argument's ordinal position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{rendered}")]
pub struct CommandSyntaxError {
    kind: ErrorKind,
    message: String,
    argument: Option<usize>,
    rendered: String,
}

impl CommandSyntaxError {
    /// Creates an error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        CommandSyntaxError {
            kind,
            rendered: message.clone(),
            message,
            argument: None,
        }
    }

    /// Creates an error attributed to the argument at the given 1-based position.
    pub fn for_argument(kind: ErrorKind, message: impl Into<String>, argument: usize) -> Self {
        let message = message.into();
        CommandSyntaxError {
            kind,
            rendered: format!(
                "Error at **{}{}** argument: {}",
                argument,
                ordinal_suffix(argument),
                message
            ),
            message,
            argument: Some(argument),
        }
    }

    /// Wraps a failure raised by a command's executor.
    pub fn execution(cause: impl Display) -> Self {
        Self::new(ErrorKind::Execution, cause.to_string())
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message without any positional decoration.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The 1-based position of the argument this error was created for, if any.
    pub fn argument(&self) -> Option<usize> {
        self.argument
    }

    /// The final text shown to the user.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_renders_message() {
        let error = CommandSyntaxError::new(ErrorKind::NoArguments, "No arguments are present!");
        assert_eq!(error.to_string(), "No arguments are present!");
        assert_eq!(error.argument(), None);
    }

    #[test]
    fn positional_error_is_decorated() {
        let error = CommandSyntaxError::for_argument(ErrorKind::MissingArgument, "Argument is missing", 3);
        assert_eq!(error.rendered(), "Error at **3rd** argument: Argument is missing");
        assert_eq!(error.message(), "Argument is missing");
        assert_eq!(error.argument(), Some(3));
        assert_eq!(error.kind(), ErrorKind::MissingArgument);
    }
}
