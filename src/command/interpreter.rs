//! Command interpreter - classifies a submitted line into a command kind
//!
//! Matching is intentionally loose for "deploy" (substring, any case,
//! any surrounding text) and exact for "clear"/"help" (case-insensitive).

/// Classified command kind for a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the simulated deploy timeline
    Deploy,
    /// Empty the log
    Clear,
    /// List recognized command names
    Help,
    /// Anything else; carries the trimmed input for the error entry
    Unknown(String),
    /// Empty or whitespace-only input; silent no-op
    Empty,
}

/// Classify raw input text into a command kind
///
/// The caller does not need to trim: leading/trailing whitespace is
/// ignored here, and the trimmed form is what `Unknown` carries.
pub fn classify(raw: &str) -> Command {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let lower = trimmed.to_lowercase();
    if lower.contains("deploy") {
        Command::Deploy
    } else if lower == "clear" {
        Command::Clear
    } else if lower == "help" {
        Command::Help
    } else {
        Command::Unknown(trimmed.to_string())
    }
}
