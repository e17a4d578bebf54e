//! The bundled argument types.

mod color;
mod entity;
mod enumeration;
mod primitive;

pub use color::*;
pub use entity::*;
pub use enumeration::*;
pub use primitive::*;
