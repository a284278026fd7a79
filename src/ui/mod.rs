//! Terminal UI - ratatui dashboard chrome and the cooperative event loop

pub mod draw;
pub mod run;
pub mod state;

pub use run::run;
pub use state::UiState;
