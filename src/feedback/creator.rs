use crate::feedback::{CommandSyntaxError, ErrorKind};
use std::fmt::{self, Debug, Formatter};

/// Something that can build a [`CommandSyntaxError`] without further input.
pub trait ErrorCreator {
    /// Builds the error.
    fn create(&self) -> CommandSyntaxError;

    /// Builds the error attributed to the argument at the given 1-based position.
    fn create_for_argument(&self, argument: usize) -> CommandSyntaxError;
}

/// Creates errors with a fixed message.
#[derive(Debug, Clone, Copy)]
pub struct SimpleErrorCreator {
    kind: ErrorKind,
    message: &'static str,
}

impl SimpleErrorCreator {
    /// Creates a new creator for the given kind and message.
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        SimpleErrorCreator { kind, message }
    }
}

impl ErrorCreator for SimpleErrorCreator {
    fn create(&self) -> CommandSyntaxError {
        CommandSyntaxError::new(self.kind, self.message)
    }

    fn create_for_argument(&self, argument: usize) -> CommandSyntaxError {
        CommandSyntaxError::for_argument(self.kind, self.message, argument)
    }
}

/// Creates errors whose message is rendered from a single value.
pub struct DynamicErrorCreator<T: ?Sized> {
    kind: ErrorKind,
    template: fn(&T) -> String,
}

impl<T: ?Sized> DynamicErrorCreator<T> {
    /// Creates a new creator for the given kind and message template.
    pub const fn new(kind: ErrorKind, template: fn(&T) -> String) -> Self {
        DynamicErrorCreator { kind, template }
    }

    /// Builds an error from the given value.
    pub fn create(&self, value: &T) -> CommandSyntaxError {
        CommandSyntaxError::new(self.kind, (self.template)(value))
    }

    /// Builds an error from the given value, attributed to the given argument.
    pub fn create_for_argument(&self, value: &T, argument: usize) -> CommandSyntaxError {
        CommandSyntaxError::for_argument(self.kind, (self.template)(value), argument)
    }

    /// Captures a value so that errors can later be built without supplying it again.
    pub fn bind(&self, value: T) -> CapturedErrorCreator
    where
        T: Sized + Send + Sync + 'static,
    {
        let template = self.template;
        CapturedErrorCreator::new(self.kind, move || template(&value))
    }
}

/// Creates errors whose message is rendered from two values.
pub struct BiDynamicErrorCreator<T: ?Sized, U: ?Sized> {
    kind: ErrorKind,
    template: fn(&T, &U) -> String,
}

impl<T: ?Sized, U: ?Sized> BiDynamicErrorCreator<T, U> {
    /// Creates a new creator for the given kind and message template.
    pub const fn new(kind: ErrorKind, template: fn(&T, &U) -> String) -> Self {
        BiDynamicErrorCreator { kind, template }
    }

    /// Builds an error from the given values.
    pub fn create(&self, first: &T, second: &U) -> CommandSyntaxError {
        CommandSyntaxError::new(self.kind, (self.template)(first, second))
    }

    /// Builds an error from the given values, attributed to the given argument.
    pub fn create_for_argument(&self, first: &T, second: &U, argument: usize) -> CommandSyntaxError {
        CommandSyntaxError::for_argument(self.kind, (self.template)(first, second), argument)
    }

    /// Captures both values so that errors can later be built without supplying them again.
    pub fn bind(&self, first: T, second: U) -> CapturedErrorCreator
    where
        T: Sized + Send + Sync + 'static,
        U: Sized + Send + Sync + 'static,
    {
        let template = self.template;
        CapturedErrorCreator::new(self.kind, move || template(&first, &second))
    }
}

/// Creates errors whose message is rendered from three values.
pub struct TriDynamicErrorCreator<T: ?Sized, U: ?Sized, V: ?Sized> {
    kind: ErrorKind,
    template: fn(&T, &U, &V) -> String,
}

impl<T: ?Sized, U: ?Sized, V: ?Sized> TriDynamicErrorCreator<T, U, V> {
    /// Creates a new creator for the given kind and message template.
    pub const fn new(kind: ErrorKind, template: fn(&T, &U, &V) -> String) -> Self {
        TriDynamicErrorCreator { kind, template }
    }

    /// Builds an error from the given values.
    pub fn create(&self, first: &T, second: &U, third: &V) -> CommandSyntaxError {
        CommandSyntaxError::new(self.kind, (self.template)(first, second, third))
    }

    /// Builds an error from the given values, attributed to the given argument.
    pub fn create_for_argument(
        &self,
        first: &T,
        second: &U,
        third: &V,
        argument: usize,
    ) -> CommandSyntaxError
    {
        CommandSyntaxError::for_argument(self.kind, (self.template)(first, second, third), argument)
    }

    /// Captures all three values so that errors can later be built without supplying them
    /// again.
    pub fn bind(&self, first: T, second: U, third: V) -> CapturedErrorCreator
    where
        T: Sized + Send + Sync + 'static,
        U: Sized + Send + Sync + 'static,
        V: Sized + Send + Sync + 'static,
    {
        let template = self.template;
        CapturedErrorCreator::new(self.kind, move || template(&first, &second, &third))
    }
}

impl<T: ?Sized> Debug for DynamicErrorCreator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicErrorCreator").field("kind", &self.kind).finish()
    }
}

impl<T: ?Sized, U: ?Sized> Debug for BiDynamicErrorCreator<T, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiDynamicErrorCreator").field("kind", &self.kind).finish()
    }
}

impl<T: ?Sized, U: ?Sized, V: ?Sized> Debug for TriDynamicErrorCreator<T, U, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriDynamicErrorCreator").field("kind", &self.kind).finish()
    }
}

/// A creator holding previously captured values. The message is rendered each time an error
/// is created, never when the values are captured.
pub struct CapturedErrorCreator {
    kind: ErrorKind,
    render: Box<dyn Fn() -> String + Send + Sync>,
}

impl CapturedErrorCreator {
    fn new<F>(kind: ErrorKind, render: F) -> Self
    where F: Fn() -> String + Send + Sync + 'static {
        CapturedErrorCreator {
            kind,
            render: Box::new(render),
        }
    }
}

impl ErrorCreator for CapturedErrorCreator {
    fn create(&self) -> CommandSyntaxError {
        CommandSyntaxError::new(self.kind, (self.render)())
    }

    fn create_for_argument(&self, argument: usize) -> CommandSyntaxError {
        CommandSyntaxError::for_argument(self.kind, (self.render)(), argument)
    }
}

impl Debug for CapturedErrorCreator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedErrorCreator").field("kind", &self.kind).finish()
    }
}
