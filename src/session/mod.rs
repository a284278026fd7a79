//! Session state - the append-only console log and the deploy busy flag
//!
//! All mutation goes through `Session::submit` and `Session::advance`;
//! nothing else touches the log or the flag.

pub mod log;
pub mod state;

pub use log::{ConsoleLog, LogEntry};
pub use state::Session;
