use crate::{arg::optional, arguments::StringArgument, command::Command};
use std::{collections::HashMap, sync::Arc};

/// The texts an `info` command replies with: a main text, plus one text per command name
/// which is sent instead when that name follows the command, as in `!info ping`.
#[derive(Debug, Clone, Default)]
pub struct InfoMessages {
    main: String,
    commands: HashMap<String, String>,
}

impl InfoMessages {
    /// Creates info texts with no per-command entries.
    pub fn new(main: impl Into<String>) -> Self {
        InfoMessages {
            main: main.into(),
            commands: HashMap::new(),
        }
    }

    /// Sets the text sent for the given command name.
    pub fn command_info(mut self, name: impl Into<String>, info: impl Into<String>) -> Self {
        self.commands.insert(name.into(), info.into());
        self
    }

    /// The text sent for the given command name, or the main text if there is none.
    pub fn lookup(&self, name: Option<&str>) -> &str {
        name.and_then(|name| self.commands.get(name))
            .map(String::as_str)
            .unwrap_or(&self.main)
    }

    /// Builds the `info` command.
    pub fn into_command<C: ?Sized>(self) -> Command<C> {
        let messages = Arc::new(self);
        Command::new("info")
            .argument(optional(StringArgument::new()))
            .executes(move |context| {
                let name = context.parsed_result::<String>(0).map(String::as_str);
                context.feedback().send_feedback(messages.lookup(name));
                Ok(())
            })
    }
}

/// Builds an `info` command from a main text and per-command texts.
pub fn info_command<C, I, K, V>(main: impl Into<String>, per_command: I) -> Command<C>
where
    C: ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    per_command
        .into_iter()
        .fold(InfoMessages::new(main), |messages, (name, info)| {
            messages.command_info(name, info)
        })
        .into_command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_the_main_text() {
        let messages = InfoMessages::new("main").command_info("ping", "pong");
        assert_eq!(messages.lookup(Some("ping")), "pong");
        assert_eq!(messages.lookup(Some("kick")), "main");
        assert_eq!(messages.lookup(None), "main");
    }
}
