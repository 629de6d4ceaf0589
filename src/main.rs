//! Terminal wrapper and entry point.
//!
//! This module provides the thin integration layer between the Reelscout
//! library and the terminal. It owns the raw-mode lifecycle, the crossterm
//! event loop, and the worker channel endpoints; all state transitions
//! happen in the library layer.
//!
//! # Startup Flow
//!
//! 1. Load configuration and require an API token
//! 2. Initialize tracing (log file under the data directory)
//! 3. Resolve the theme and create `AppState`
//! 4. Spawn the search worker thread
//! 5. Enter raw mode and the alternate screen
//! 6. Run the event loop until a `Quit` action
//!
//! # Event Mapping
//!
//! Terminal events are translated to library events:
//!
//! - `Enter` → `SubmitSearch` (search focus) or `OpenDetails` (results)
//! - `Esc` → `CloseModal` when the modal is open, otherwise leaves the
//!   current focus
//! - `/` → `FocusSearch` (from the results grid)
//! - `j`/`k`/arrows → `KeyDown`/`KeyUp` (results focus)
//! - `q` → `Quit` (results focus, modal closed) or `CloseModal`
//! - printable characters and `Backspace` edit the query in search focus

use std::io::Write;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

use reelscout::worker::{WorkerMessage, WorkerResponse};
use reelscout::{
    handle_event, initialize, observability, tmdb::TmdbClient, worker, Action, AppState, Config,
    Event, InputMode, ReelscoutError, Result,
};

/// How long to wait for terminal input before emitting a tick.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() {
    if let Err(e) = run() {
        // Raw mode is restored before this point by the terminal guard.
        eprintln!("reelscout: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;

    let Some(api_token) = config.api_token.clone() else {
        return Err(ReelscoutError::Config(
            "no TMDB API token configured; set TMDB_API_TOKEN or add api_token to \
             ~/.config/reelscout/config.toml"
                .to_string(),
        ));
    };

    observability::init_tracing(&config);

    let client = TmdbClient::new(
        config.base_url.clone(),
        api_token,
        config.language.clone(),
        config.include_adult,
    );
    let (worker_tx, worker_rx) = worker::spawn(client)?;

    let mut state = initialize(&config);

    let _guard = TerminalGuard::enter()?;
    let result = event_loop(&mut state, &worker_tx, &worker_rx);
    drop(_guard);

    result
}

/// Restores the terminal on drop, including on panic unwind.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(std::io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(std::io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = std::io::stdout().flush();
    }
}

/// Runs the main event loop until a `Quit` action is emitted.
///
/// Each iteration drains pending worker responses, polls the terminal for
/// input, processes the resulting events, and redraws when any handler
/// reported a state change.
fn event_loop(
    state: &mut AppState,
    worker_tx: &Sender<WorkerMessage>,
    worker_rx: &Receiver<WorkerResponse>,
) -> Result<()> {
    let (mut cols, mut rows) = crossterm::terminal::size()?;
    reelscout::ui::render(state, rows as usize, cols as usize);

    loop {
        let mut events: Vec<Event> = Vec::new();

        loop {
            match worker_rx.try_recv() {
                Ok(response) => events.push(Event::WorkerResponse(response)),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Err(ReelscoutError::Worker(
                        "search worker exited unexpectedly".to_string(),
                    ));
                }
            }
        }

        let mut resized = false;
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                event::Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(mapped) = map_key_event(state, &key) {
                        events.push(mapped);
                    }
                }
                event::Event::Resize(new_cols, new_rows) => {
                    cols = new_cols;
                    rows = new_rows;
                    resized = true;
                }
                _ => {}
            }
        } else {
            events.push(Event::Tick);
        }

        let mut should_render = resized;
        for ev in &events {
            let (rendered, actions) = handle_event(state, ev)?;
            should_render = should_render || rendered;

            for action in actions {
                match action {
                    Action::Quit => return Ok(()),
                    Action::PostToWorker(message) => {
                        worker_tx.send(message).map_err(|_| {
                            ReelscoutError::Worker("search worker channel closed".to_string())
                        })?;
                    }
                }
            }
        }

        if should_render {
            reelscout::ui::render(state, rows as usize, cols as usize);
        }
    }
}

/// Translates a terminal key event into a library event for the current
/// focus.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    // Ctrl+C always quits, whatever has focus.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    if state.selected_movie.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Event::CloseModal),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Search => match key.code {
            KeyCode::Enter => Some(Event::SubmitSearch),
            KeyCode::Esc => Some(Event::Escape),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Down => Some(Event::FocusResults),
            KeyCode::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Results => match key.code {
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Char('/') => Some(Event::FocusSearch),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::KeyDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::KeyUp),
            KeyCode::Enter => Some(Event::OpenDetails),
            KeyCode::Esc => Some(Event::Escape),
            _ => None,
        },
    }
}
