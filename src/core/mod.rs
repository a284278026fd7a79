pub mod config;
pub mod error;
pub mod types;

pub use config::ConsoleConfig;
pub use types::{EntryId, LogKind};
