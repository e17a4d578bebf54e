use crate::{
    command::Command,
    feedback::{exceptions, CommandSyntaxError, ErrorCreator, FeedbackHandler},
    parsed::ParsedArgument,
    reader::ArgumentReader,
    util::ordinal,
};
use std::any::Any;

/// The resolved state of one command invocation: the reader over its tokens, the parsed
/// results in schema order, and the sink for feedback.
///
/// A context is built fresh for every invocation and is never reused.
pub struct CommandContext<'a, C: ?Sized> {
    reader: ArgumentReader<'a, C>,
    parsed_arguments: Vec<ParsedArgument<Box<dyn Any>>>,
    feedback: &'a dyn FeedbackHandler,
}

impl<'a, C: ?Sized> CommandContext<'a, C> {
    /// Resolves the given input against the command's schema, reporting any failure to
    /// `feedback` exactly once. Returns `None` if resolution was aborted.
    pub fn create(
        command: &Command<C>,
        input: &'a str,
        source: &'a C,
        feedback: &'a dyn FeedbackHandler,
    ) -> Option<Self>
    {
        match Self::resolve(command, input, source, feedback) {
            Ok(context) => Some(context),
            Err(error) => {
                if error.kind().is_contract_violation() {
                    log::warn!(
                        "Command \"{}\" has an argument which read past the end of its input: {}",
                        command.name(),
                        error
                    );
                }
                feedback.send_error(&error);
                None
            }
        }
    }

    /// Resolves the given input against the command's schema without reporting anything.
    ///
    /// The permission predicate is checked first. The number of tokens after the command name
    /// is then validated against the schema, and finally every entry is parsed in order.
    /// Optional entries are parsed speculatively and yield an empty result on failure; a
    /// failure in any other entry aborts resolution with that entry's error.
    pub fn resolve(
        command: &Command<C>,
        input: &'a str,
        source: &'a C,
        feedback: &'a dyn FeedbackHandler,
    ) -> Result<Self, CommandSyntaxError>
    {
        log::debug!("Resolving command \"{}\" from input {:?}", command.name(), input);

        if !command.has_permission(source) {
            return Err(exceptions::PERMISSION.create());
        }

        let mut context = CommandContext {
            reader: ArgumentReader::new(input, source),
            parsed_arguments: Vec::with_capacity(command.arguments().len()),
            feedback,
        };

        if command.arguments().is_empty() {
            return Ok(context);
        }

        let has_optional_arguments = command.has_optional_arguments();
        validate_arity(
            context.reader.argument_count(),
            command.arguments().len(),
            command.mandatory_count(),
            has_optional_arguments,
        )?;

        let reader = &mut context.reader;
        for (index, argument) in command.arguments().iter().enumerate() {
            let parsed = if has_optional_arguments && argument.is_optional() {
                reader.speculate(|reader| argument.parse_erased(reader))
            } else {
                if has_optional_arguments && !reader.has_next() {
                    return Err(exceptions::SPECIFIC_MISSING_ARGUMENT.create_for_argument(index + 1));
                }
                ParsedArgument::parse(argument.parse_erased(reader)?)
            };
            context.parsed_arguments.push(parsed);
        }

        log::debug!(
            "Resolved {} argument(s) for command \"{}\"",
            context.parsed_arguments.len(),
            command.name()
        );
        Ok(context)
    }

    /// The source which issued the command.
    pub fn source(&self) -> &'a C {
        self.reader.source()
    }

    /// The reader the arguments were parsed from. Its cursor sits after the last consumed
    /// token.
    pub fn reader(&self) -> &ArgumentReader<'a, C> {
        &self.reader
    }

    /// Mutable access to the reader, for commands which consume tokens beyond their schema.
    pub fn reader_mut(&mut self) -> &mut ArgumentReader<'a, C> {
        &mut self.reader
    }

    /// The sink for feedback about this invocation.
    pub fn feedback(&self) -> &'a dyn FeedbackHandler {
        self.feedback
    }

    /// The number of parsed results, which always equals the schema length.
    pub fn len(&self) -> usize {
        self.parsed_arguments.len()
    }

    /// Whether the command has no arguments.
    pub fn is_empty(&self) -> bool {
        self.parsed_arguments.is_empty()
    }

    /// The parsed result at the given schema position.
    pub fn parsed_argument(&self, index: usize) -> Option<&ParsedArgument<Box<dyn Any>>> {
        self.parsed_arguments.get(index)
    }

    /// Whether the schema entry at the given position produced a value.
    pub fn has_result(&self, index: usize) -> bool {
        self.parsed_argument(index)
            .map_or(false, ParsedArgument::has_result)
    }

    /// The value parsed at the given schema position. Returns `None` if the position is out
    /// of bounds, if an optional argument produced nothing, or if `T` is not the argument's
    /// output type.
    pub fn parsed_result<T: 'static>(&self, index: usize) -> Option<&T> {
        self.parsed_argument(index)
            .and_then(ParsedArgument::result)
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Like [`parsed_result`](CommandContext::parsed_result), but falls back to `other`.
    pub fn parsed_result_or<T: Clone + 'static>(&self, index: usize, other: T) -> T {
        self.parsed_result(index).cloned().unwrap_or(other)
    }

    /// Runs `f` with the value parsed at the given position, if there is one.
    pub fn if_parsed_result_present<T: 'static, F: FnOnce(&T)>(&self, index: usize, f: F) {
        if let Some(value) = self.parsed_result(index) {
            f(value);
        }
    }
}

/// Checks the number of tokens following the command name against the schema.
///
/// A schema without optional entries needs a token for every entry, and names the missing
/// positions when it is short. A schema with optional entries only needs a token for every
/// mandatory entry, and reports a shortfall without positions.
pub fn validate_arity(
    available: usize,
    schema_len: usize,
    mandatory_count: usize,
    has_optional_arguments: bool,
) -> Result<(), CommandSyntaxError>
{
    let required = if has_optional_arguments {
        mandatory_count
    } else {
        schema_len
    };

    if available >= required {
        return Ok(());
    }

    if available == 0 {
        return Err(exceptions::NO_ARGUMENTS.create());
    }

    let missing = required - available;
    if has_optional_arguments {
        if missing >= 2 {
            Err(exceptions::MISSING_ARGUMENTS.create())
        } else {
            Err(exceptions::MISSING_ARGUMENT.create())
        }
    } else if missing >= 2 {
        let positions = (available + 1 ..= schema_len).map(ordinal).collect::<Vec<_>>();
        Err(exceptions::SPECIFIC_MISSING_ARGUMENTS.create(&positions))
    } else {
        Err(exceptions::SPECIFIC_MISSING_ARGUMENT.create_for_argument(schema_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::ErrorKind;

    #[test]
    fn arity_without_optional_arguments() {
        assert_eq!(validate_arity(2, 2, 2, false), Ok(()));
        assert_eq!(validate_arity(5, 2, 2, false), Ok(()));
        assert_eq!(validate_arity(0, 2, 2, false).unwrap_err().kind(), ErrorKind::NoArguments);

        let error = validate_arity(1, 2, 2, false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingArgument);
        assert_eq!(error.argument(), Some(2));
        assert_eq!(error.to_string(), "Error at **2nd** argument: Argument is missing");

        let error = validate_arity(1, 4, 4, false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingArguments);
        assert_eq!(error.to_string(), "2nd, 3rd, and 4th arguments are missing");
    }

    #[test]
    fn arity_with_optional_arguments() {
        assert_eq!(validate_arity(0, 2, 0, true), Ok(()));
        assert_eq!(validate_arity(1, 3, 1, true), Ok(()));
        assert_eq!(validate_arity(0, 3, 2, true).unwrap_err().kind(), ErrorKind::NoArguments);

        let error = validate_arity(1, 3, 2, true).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingArgument);
        assert_eq!(error.argument(), None);
        assert_eq!(error.to_string(), "An argument is missing");

        let error = validate_arity(1, 4, 3, true).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingArguments);
        assert_eq!(error.argument(), None);
    }
}
