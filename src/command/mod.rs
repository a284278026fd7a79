//! Command classification
//!
//! Input text -> Command kind. Pure: all side effects live in `session`.

pub mod interpreter;

pub use interpreter::{classify, Command};
