#![warn(missing_docs)]

//! Typed, schema-driven parsing of space-delimited chat commands.
//!
//! A [`Command`] declares an ordered schema of [`Argument`]s. When input arrives, a
//! [`CommandContext`] checks the caller's permission, validates the number of tokens against
//! the schema and parses every entry, producing one [`ParsedArgument`] per entry or a single
//! [`CommandSyntaxError`] which is reported through a [`FeedbackHandler`]. A
//! [`CommandHandler`] maps prefixed aliases to commands and runs them.

extern crate self as disparser;

mod arg;
pub mod arguments;
mod command;
mod context;
pub mod feedback;
mod handler;
mod info;
mod module;
mod parsed;
mod reader;
mod util;

pub use arg::*;
pub use arguments::*;
pub use command::*;
pub use context::*;
pub use disparser_macros::EnumArgument;
pub use feedback::{
    exceptions,
    CommandSyntaxError,
    ErrorCreator,
    ErrorKind,
    FeedbackHandler,
    LogFeedbackHandler,
    SimpleFeedbackHandler,
};
pub use handler::*;
pub use info::*;
pub use module::*;
pub use parsed::*;
pub use reader::*;
pub use util::{ordinal, ordinal_suffix, sentence_of};
