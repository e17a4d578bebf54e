use crate::{
    command::Command,
    context::CommandContext,
    feedback::FeedbackHandler,
    module::{CommandModule, Dispatch},
};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Formatter},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

type Prefix<C> = Box<dyn Fn(&C) -> String + Send + Sync>;

/// The prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "!";

/// A registry mapping command aliases to command definitions, plus the prefix which marks
/// input as a command.
///
/// The registry may be shared between threads. Resolving and running a command only takes a
/// read lock long enough to look the command up.
pub struct CommandHandler<C: ?Sized> {
    commands: RwLock<HashMap<String, Arc<Command<C>>>>,
    prefix: Prefix<C>,
}

impl<C: ?Sized> CommandHandler<C> {
    /// Creates an empty handler using [`DEFAULT_PREFIX`].
    pub fn new() -> Self {
        CommandHandler {
            commands: RwLock::new(HashMap::new()),
            prefix: Box::new(|_| DEFAULT_PREFIX.to_owned()),
        }
    }

    /// Starts building a handler.
    pub fn builder() -> CommandHandlerBuilder<C> {
        CommandHandlerBuilder::new()
    }

    // A poisoned lock only means a registration panicked; the map itself is still usable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Command<C>>>> {
        self.commands.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Command<C>>>> {
        self.commands.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a command under all of its aliases, replacing whatever was registered under
    /// them before.
    pub fn register(&self, command: Command<C>) -> Arc<Command<C>> {
        let command = Arc::new(command);
        let mut commands = self.write();
        for alias in command.aliases() {
            if commands.insert(alias.clone(), Arc::clone(&command)).is_some() {
                log::debug!("Alias \"{}\" now refers to a different command", alias);
            }
        }
        command
    }

    /// Registers an already shared command under an extra alias.
    pub fn register_alias(&self, alias: impl Into<String>, command: Arc<Command<C>>) {
        self.write().insert(alias.into(), command);
    }

    /// Removes every alias which refers to the command registered under `alias`. Returns that
    /// command, if there was one.
    pub fn unregister(&self, alias: &str) -> Option<Arc<Command<C>>> {
        let mut commands = self.write();
        let command = commands.get(alias).cloned()?;
        commands.retain(|_, registered| !Arc::ptr_eq(registered, &command));
        Some(command)
    }

    /// The command registered under the given alias.
    pub fn command(&self, alias: &str) -> Option<Arc<Command<C>>> {
        self.read().get(alias).cloned()
    }

    /// Every registered alias, sorted.
    pub fn aliases(&self) -> Vec<String> {
        let mut aliases = self.read().keys().cloned().collect::<Vec<_>>();
        aliases.sort();
        aliases
    }

    /// The prefix that marks input from `source` as a command.
    pub fn prefix(&self, source: &C) -> String {
        (self.prefix)(source)
    }

    /// Looks up the command named by the first token of the input, if that token carries the
    /// prefix.
    pub fn find(&self, input: &str, source: &C) -> Option<Arc<Command<C>>> {
        let first = input.split(' ').next().unwrap_or_default();
        let prefix = self.prefix(source);
        let alias = first.strip_prefix(prefix.as_str())?;
        self.command(alias)
    }

    /// Finds the command named by the input, resolves its arguments and runs it. Resolution
    /// errors and executor errors are reported to `feedback`.
    pub fn disparse(&self, input: &str, source: &C, feedback: &dyn FeedbackHandler) -> Dispatch {
        let command = match self.find(input, source) {
            Some(command) => command,
            None => return Dispatch::Ignored,
        };

        let mut context = match CommandContext::create(&command, input, source, feedback) {
            Some(context) => context,
            None => return Dispatch::Aborted,
        };

        match command.process(&mut context) {
            Ok(()) => {
                log::debug!("Command \"{}\" executed", command.name());
                Dispatch::Executed
            }
            Err(error) => {
                log::error!("Command \"{}\" failed: {}", command.name(), error);
                feedback.send_error(&error);
                Dispatch::Failed
            }
        }
    }
}

impl<C: ?Sized> Default for CommandHandler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Debug for CommandHandler<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHandler")
            .field("aliases", &self.aliases())
            .finish()
    }
}

impl<C: ?Sized> CommandModule<C> for CommandHandler<C> {
    fn dispatch(&self, input: &str, source: &C, feedback: &dyn FeedbackHandler) -> Dispatch {
        self.disparse(input, source, feedback)
    }

    fn get_suggestions(&self, input: &str, source: &C) -> Vec<String> {
        let prefix = self.prefix(source);
        let partial = match input.strip_prefix(prefix.as_str()) {
            Some(partial) if !partial.contains(' ') => partial,
            _ => return Vec::new(),
        };

        self.aliases()
            .into_iter()
            .filter(|alias| alias.starts_with(partial))
            .filter(|alias| {
                self.command(alias)
                    .map_or(false, |command| command.has_permission(source))
            })
            .map(|alias| format!("{}{}", prefix, alias))
            .collect()
    }
}

/// Configures and fills a [`CommandHandler`].
pub struct CommandHandlerBuilder<C: ?Sized> {
    handler: CommandHandler<C>,
}

impl<C: ?Sized> CommandHandlerBuilder<C> {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        CommandHandlerBuilder {
            handler: CommandHandler::new(),
        }
    }

    /// Uses the same prefix for every source.
    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix_with(move |_| prefix.clone())
    }

    /// Computes the prefix from the source, e.g. from per-server settings.
    pub fn prefix_with<F>(mut self, prefix: F) -> Self
    where F: Fn(&C) -> String + Send + Sync + 'static {
        self.handler.prefix = Box::new(prefix);
        self
    }

    /// Registers a command under all of its aliases.
    pub fn command(self, command: Command<C>) -> Self {
        self.handler.register(command);
        self
    }

    /// Registers a command under all of its aliases and an extra one.
    pub fn command_with_alias(self, alias: impl Into<String>, command: Command<C>) -> Self {
        let command = self.handler.register(command);
        self.handler.register_alias(alias, command);
        self
    }

    #[allow(missing_docs)]
    pub fn build(self) -> CommandHandler<C> {
        self.handler
    }
}

impl<C: ?Sized> Default for CommandHandlerBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_one_command() {
        let handler = CommandHandler::<()>::builder()
            .command(Command::new("help").alias("h"))
            .command_with_alias("?", Command::new("info"))
            .build();

        assert_eq!(handler.aliases(), vec!["?", "h", "help", "info"]);
        let help = handler.command("h").unwrap();
        assert!(Arc::ptr_eq(&help, &handler.command("help").unwrap()));

        assert!(handler.unregister("help").is_some());
        assert_eq!(handler.aliases(), vec!["?", "info"]);
        assert!(handler.unregister("help").is_none());
    }

    #[test]
    fn finds_commands_by_prefix() {
        let handler = CommandHandler::<str>::builder()
            .prefix_with(|server| if server == "a" { "$".to_owned() } else { "!".to_owned() })
            .command(Command::new("ping"))
            .build();

        assert!(handler.find("$ping", "a").is_some());
        assert!(handler.find("!ping", "a").is_none());
        assert!(handler.find("!ping now", "b").is_some());
        assert!(handler.find("ping", "b").is_none());
        assert!(handler.find("!pong", "b").is_none());
    }

    #[test]
    fn suggests_permitted_aliases() {
        let handler = CommandHandler::<bool>::builder()
            .prefix("?")
            .command(Command::new("ban").requires(|admin| *admin))
            .command(Command::new("balance"))
            .command(Command::new("ping"))
            .build();

        assert_eq!(handler.get_suggestions("?ba", &true), vec!["?balance", "?ban"]);
        assert_eq!(handler.get_suggestions("?ba", &false), vec!["?balance"]);
        assert!(handler.get_suggestions("?ban now", &true).is_empty());
        assert!(handler.get_suggestions("ba", &true).is_empty());
    }
}
