//! UI state: input line, scroll position, spinner

/// Spinner frames shown while a deploy is in flight
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Mutable state of the terminal view
///
/// Everything session-meaningful (log, busy flag) lives in `Session`;
/// this is only what the renderer and key handler need.
#[derive(Debug, Default)]
pub struct UiState {
    /// Command input buffer
    pub input: String,
    /// Scroll position as lines above the bottom of the log; 0 = pinned
    /// to the newest entry
    pub scroll: usize,
    /// Set when the user asks to quit
    pub quit: bool,
    /// Log viewport height from the last draw, for page scrolling
    pub log_viewport: usize,
    spinner_frame: usize,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snap back to the newest entry; called whenever the log changes
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = 0;
    }

    /// Scroll one page towards older entries, clamped to the log length
    pub fn page_up(&mut self, log_len: usize) {
        let page = self.log_viewport.max(1);
        self.scroll = (self.scroll + page).min(log_len.saturating_sub(1));
    }

    /// Scroll one page towards the newest entry
    pub fn page_down(&mut self) {
        let page = self.log_viewport.max(1);
        self.scroll = self.scroll.saturating_sub(page);
    }

    /// Current spinner glyph, advancing one frame per call
    pub fn spinner_tick(&mut self) -> char {
        let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        glyph
    }
}
