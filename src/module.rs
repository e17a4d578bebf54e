use crate::feedback::FeedbackHandler;

/// The outcome of dispatching one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// The input did not start with the prefix, or named no registered command.
    Ignored,
    /// The command was found but its arguments did not resolve. The error was reported.
    Aborted,
    /// The command resolved and its executor succeeded.
    Executed,
    /// The command resolved but its executor failed. The error was reported.
    Failed,
}

/// Defines a command module, or a set of command definitions with an associated dispatcher and
/// suggestion generator.
pub trait CommandModule<C: ?Sized> {
    /// Dispatches the given input for execution, reporting failures to `feedback`.
    fn dispatch(&self, input: &str, source: &C, feedback: &dyn FeedbackHandler) -> Dispatch;

    /// Generates a list of suggestions to complete the command name in the given partial input.
    fn get_suggestions(&self, input: &str, source: &C) -> Vec<String>;
}
