//! Error values, reusable error creators and the sinks which deliver feedback to the user.

mod creator;
mod error;
pub mod exceptions;

pub use creator::*;
pub use error::*;

/// Delivers command feedback to whoever issued the command. The transport (a chat channel, a
/// terminal, a log) is up to the implementor.
pub trait FeedbackHandler {
    /// Sends a plain message.
    fn send_feedback(&self, message: &str);

    /// Sends a message marking a successful command.
    fn send_success(&self, message: &str) {
        self.send_feedback(message);
    }

    /// Sends an error. The resolver calls this exactly once for every failed resolution.
    fn send_error(&self, error: &CommandSyntaxError);
}

impl<F: FeedbackHandler + ?Sized> FeedbackHandler for &F {
    fn send_feedback(&self, message: &str) {
        (**self).send_feedback(message)
    }

    fn send_success(&self, message: &str) {
        (**self).send_success(message)
    }

    fn send_error(&self, error: &CommandSyntaxError) {
        (**self).send_error(error)
    }
}

/// Formats the body of an error message.
pub fn error_message(reason: &str) -> String {
    format!(":x: Command Failed\n**Reason: **{}", reason)
}

/// Formats the body of a success message.
pub fn success_message(message: &str) -> String {
    format!(":white_check_mark: Command Successful\n{}", message)
}

/// A feedback handler which formats errors and successes with [`error_message`] and
/// [`success_message`], then hands the text to a transport function.
pub struct SimpleFeedbackHandler<F> {
    transport: F,
}

impl<F> SimpleFeedbackHandler<F>
where F: Fn(String)
{
    /// Creates a handler that sends every message through the given function.
    pub fn new(transport: F) -> Self {
        SimpleFeedbackHandler { transport }
    }
}

impl<F> FeedbackHandler for SimpleFeedbackHandler<F>
where F: Fn(String)
{
    fn send_feedback(&self, message: &str) {
        (self.transport)(message.to_owned());
    }

    fn send_success(&self, message: &str) {
        (self.transport)(success_message(message));
    }

    fn send_error(&self, error: &CommandSyntaxError) {
        let reason = if error.rendered().is_empty() {
            "Unknown"
        } else {
            error.rendered()
        };
        (self.transport)(error_message(reason));
    }
}

/// A feedback handler which writes everything to the `log` facade under the given target.
#[derive(Debug, Clone, Copy)]
pub struct LogFeedbackHandler {
    target: &'static str,
}

impl LogFeedbackHandler {
    /// Creates a handler logging under the given target.
    pub const fn new(target: &'static str) -> Self {
        LogFeedbackHandler { target }
    }
}

impl Default for LogFeedbackHandler {
    fn default() -> Self {
        LogFeedbackHandler::new("disparser::feedback")
    }
}

impl FeedbackHandler for LogFeedbackHandler {
    fn send_feedback(&self, message: &str) {
        log::info!(target: self.target, "{}", message);
    }

    fn send_error(&self, error: &CommandSyntaxError) {
        if error.kind().is_contract_violation() {
            log::error!(target: self.target, "{} ({})", error, error.kind());
        } else {
            log::warn!(target: self.target, "{} ({})", error, error.kind());
        }
    }
}
