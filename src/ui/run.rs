//! Terminal setup and the cooperative event loop
//!
//! Single-threaded: every iteration fires due timeline steps, redraws,
//! and then blocks up to one poll interval waiting for input. Quitting
//! mid-deploy simply abandons the pending steps.

use crate::core::config::ConsoleConfig;
use crate::core::error::Result;
use crate::session::Session;
use crate::ui::draw;
use crate::ui::state::UiState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};

/// Run the dashboard until the user quits
pub fn run(config: &ConsoleConfig) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut session = Session::new();
    let mut ui = UiState::new();
    let res = run_loop(&mut terminal, &mut session, &mut ui, config);

    // Teardown must happen even when the loop errored.
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
    ui: &mut UiState,
    config: &ConsoleConfig,
) -> Result<()> {
    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    let mut last_len = session.log().len();

    loop {
        session.advance(Instant::now());
        if session.log().len() != last_len {
            last_len = session.log().len();
            ui.scroll_to_bottom();
        }

        terminal.draw(|frame| draw::draw(frame, session, ui, config))?;
        if ui.quit {
            tracing::info!("quit requested");
            return Ok(());
        }

        if event::poll(poll_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(session, ui, key);
                }
                _ => {}
            }
        }
    }
}

fn handle_key(session: &mut Session, ui: &mut UiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            ui.quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            ui.quit = true;
        }
        // The dashboard's Deploy button: synthesizes the literal command.
        KeyCode::F(5) => {
            session.submit("deploy", Instant::now());
        }
        KeyCode::Enter => {
            if session.submit(&ui.input, Instant::now()) {
                ui.input.clear();
            }
        }
        KeyCode::PageUp => {
            ui.page_up(session.log().len());
        }
        KeyCode::PageDown => {
            ui.page_down();
        }
        // The input line is disabled while a deploy is in flight.
        KeyCode::Backspace if !session.deploying() => {
            ui.input.pop();
        }
        KeyCode::Char(c) if !session.deploying() => {
            ui.input.push(c);
        }
        _ => {}
    }
}
