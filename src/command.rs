use crate::{
    arg::{Argument, ErasedArgument},
    context::CommandContext,
    feedback::CommandSyntaxError,
};
use std::fmt::{self, Debug, Formatter};

type Requirement<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;
type Executor<C> =
    Box<dyn Fn(&mut CommandContext<'_, C>) -> Result<(), CommandSyntaxError> + Send + Sync>;

/// A command definition: the names it answers to, the ordered schema of its arguments, the
/// permission predicate callers must pass, and the code run once the arguments resolve.
///
/// Commands are built once and never change afterwards, so a single definition can be shared
/// between any number of concurrent invocations.
pub struct Command<C: ?Sized> {
    aliases: Vec<String>,
    arguments: Vec<Box<dyn ErasedArgument<C>>>,
    requirement: Requirement<C>,
    executor: Executor<C>,
}

impl<C: ?Sized> Command<C> {
    /// Starts a command with the given name, no arguments, no permission requirement, and an
    /// executor which does nothing.
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            aliases: vec![name.into()],
            arguments: Vec::new(),
            requirement: Box::new(|_| true),
            executor: Box::new(|_| Ok(())),
        }
    }

    /// Adds another name for this command.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
        self
    }

    /// Appends an argument to the schema. Results appear in the context in the same order.
    pub fn argument<A>(mut self, argument: A) -> Self
    where
        A: Argument<C> + Send + Sync + 'static,
        A::Output: 'static,
    {
        self.arguments.push(Box::new(argument));
        self
    }

    /// Sets the predicate a source must pass to run this command.
    pub fn requires<F>(mut self, requirement: F) -> Self
    where F: Fn(&C) -> bool + Send + Sync + 'static {
        self.requirement = Box::new(requirement);
        self
    }

    /// Sets the code run with the resolved context.
    pub fn executes<F>(mut self, executor: F) -> Self
    where F: Fn(&mut CommandContext<'_, C>) -> Result<(), CommandSyntaxError> + Send + Sync + 'static {
        self.executor = Box::new(executor);
        self
    }

    /// The primary name of this command.
    pub fn name(&self) -> &str {
        &self.aliases[0]
    }

    /// Every name this command answers to, the primary name first.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The argument schema.
    pub fn arguments(&self) -> &[Box<dyn ErasedArgument<C>>] {
        &self.arguments
    }

    /// The number of schema entries which are not optional.
    pub fn mandatory_count(&self) -> usize {
        self.arguments
            .iter()
            .filter(|argument| !argument.is_optional())
            .count()
    }

    /// Whether any schema entry is optional.
    pub fn has_optional_arguments(&self) -> bool {
        self.arguments.iter().any(|argument| argument.is_optional())
    }

    /// Evaluates the permission predicate against the source.
    pub fn has_permission(&self, source: &C) -> bool {
        (self.requirement)(source)
    }

    /// Runs the executor.
    pub fn process(&self, context: &mut CommandContext<'_, C>) -> Result<(), CommandSyntaxError> {
        (self.executor)(context)
    }
}

impl<C: ?Sized> Debug for Command<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("aliases", &self.aliases)
            .field("arguments", &self.arguments.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arg::optional,
        arguments::{BooleanArgument, IntegerArgument},
    };

    #[test]
    fn schema_counts() {
        let command = Command::<()>::new("roll")
            .alias("r")
            .alias("roll")
            .argument(IntegerArgument::new())
            .argument(optional(BooleanArgument));

        assert_eq!(command.name(), "roll");
        assert_eq!(command.aliases(), &["roll".to_owned(), "r".to_owned()]);
        assert_eq!(command.arguments().len(), 2);
        assert_eq!(command.mandatory_count(), 1);
        assert!(command.has_optional_arguments());
    }

    #[test]
    fn permission_predicate() {
        let command = Command::<u32>::new("ban").requires(|level| *level >= 3);
        assert!(command.has_permission(&3));
        assert!(!command.has_permission(&1));
        assert!(Command::<u32>::new("ping").has_permission(&0));
    }
}
