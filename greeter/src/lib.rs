//! mymodule greeter core
//!
//! Owns the greeting literal and the write logic shared by the language
//! bindings. Bindings only translate their host's calling convention into
//! [`hello_world`].

pub mod errors;
pub mod greeting;

pub use errors::{GreeterError, GreeterResult};
pub use greeting::{GREETING, hello_world, write_greeting};
