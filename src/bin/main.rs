//! Terminal host for the glance pacing engine.
//!
//! Wires the core session to a crossterm surface: the clipboard (or the
//! command line) supplies the text, a deadline scheduler drives the timers,
//! and keys map onto session operations.

use std::io::stdout;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use glance_core::{InputSource, ReaderSession, orp, tokenize};
use glance_shell::{
    ClipboardSource, DeadlineScheduler, JsonSettingsStore, Result, TerminalPresenter,
};
use log::debug;

#[path = "main/hotkeys.rs"]
mod hotkeys;

use hotkeys::HotkeyAction;

const WPM_STEP: f64 = 25.0;
const MIN_WPM: f64 = 100.0;
const MAX_WPM: f64 = 1000.0;
const IDLE_POLL: Duration = Duration::from_millis(100);

type Session = ReaderSession<DeadlineScheduler, TerminalPresenter, JsonSettingsStore>;

#[derive(Debug, Parser)]
#[command(author, version, about = "Paced speed reader for the terminal", long_about = None)]
struct Cli {
    /// Text to read; the clipboard is used when omitted.
    text: Vec<String>,

    /// Words-per-minute override, persisted for later sessions.
    #[arg(long)]
    wpm: Option<f64>,

    /// Skip the countdown and start reading immediately.
    #[arg(long)]
    auto_start: bool,

    /// Strip leading/trailing punctuation from every word.
    #[arg(long)]
    clean_words: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = JsonSettingsStore::load_or_default();
    if let Some(wpm) = cli.wpm {
        store.set_wpm(wpm);
    }
    if cli.clean_words {
        store.set_clean_words(true);
    }

    let text = if cli.text.is_empty() {
        ClipboardSource::new(cli.auto_start).session_text()?
    } else {
        cli.text.join(" ")
    };

    run(&text, cli.auto_start, store)
}

fn run(text: &str, auto_start: bool, store: JsonSettingsStore) -> Result<()> {
    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;

    let outcome = event_loop(text, auto_start, store);

    execute!(stdout(), cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    outcome
}

fn event_loop(text: &str, auto_start: bool, store: JsonSettingsStore) -> Result<()> {
    let (width, _) = terminal::size()?;
    let tokens = tokenize(text, store.get().clean_words);
    let width_hint = orp::widest_token_width(&tokens, TerminalPresenter::monospace_measure);
    let presenter = TerminalPresenter::new(width, width_hint);

    let mut session = ReaderSession::new(
        text,
        auto_start,
        store.clone(),
        DeadlineScheduler::new(),
        presenter,
    );
    let mut overlay_open = false;
    session.start()?;

    while !session.is_ended() {
        let timeout = session
            .scheduler()
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    apply_action(hotkeys::action_for(key), &mut session, &store, &mut overlay_open)?;
                }
            }
        }

        for timer in session.scheduler_mut().drain_due(Instant::now()) {
            session.timer_fired(timer)?;
        }
    }

    Ok(())
}

fn apply_action(
    action: Option<HotkeyAction>,
    session: &mut Session,
    store: &JsonSettingsStore,
    overlay_open: &mut bool,
) -> Result<()> {
    let Some(action) = action else {
        return Ok(());
    };
    debug!("main: action={action:?} mode={:?}", session.mode());

    match action {
        HotkeyAction::TogglePlay => {
            if session.toggle_play_pause()? {
                let paused = !session.is_playing();
                session.observer_mut().show_paused(paused);
            }
        }
        HotkeyAction::StepBack => {
            session.step_back()?;
        }
        HotkeyAction::StepForward => {
            session.step_forward()?;
        }
        HotkeyAction::Restart => {
            session.restart()?;
        }
        HotkeyAction::ToggleOverlay => {
            *overlay_open = !*overlay_open;
            session.set_overlay_visible(*overlay_open)?;
            session.observer_mut().show_paused(*overlay_open);
        }
        HotkeyAction::RaiseWpm => store.set_wpm((store.get().wpm + WPM_STEP).min(MAX_WPM)),
        HotkeyAction::LowerWpm => store.set_wpm((store.get().wpm - WPM_STEP).max(MIN_WPM)),
        HotkeyAction::Close => session.close(),
    }

    Ok(())
}
