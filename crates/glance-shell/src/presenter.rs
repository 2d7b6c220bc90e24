//! Terminal word presenter.
//!
//! Keeps the focal character of every word at the same column so the eye
//! never travels while reading. The anchor sits left of the horizontal
//! center, where the recognition point of most words falls.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use glance_core::{Mode, SessionObserver, WordLayout};
use log::warn;

const ORP_ANCHOR_PERCENT: u16 = 42;
const COUNTDOWN_BAR_COLS: u16 = 30;

const WORD_ROW: u16 = 1;
const MARKER_ROW: u16 = 2;
const STATUS_ROW: u16 = 4;

/// Column the focal character is pinned to for a given surface width.
pub fn anchor_column(width: u16) -> u16 {
    width * ORP_ANCHOR_PERCENT / 100
}

/// Crossterm presenter drawing into an alternate-screen raw terminal.
pub struct TerminalPresenter {
    anchor_col: u16,
    paused: bool,
    position: Option<(usize, usize)>,
}

impl TerminalPresenter {
    /// `width_hint` is the widest token of the session under
    /// [`TerminalPresenter::monospace_measure`]; words wider than the
    /// surface will clip on the right.
    pub fn new(width: u16, width_hint: f64) -> Self {
        if width_hint > f64::from(width) {
            warn!("presenter: widest word ({width_hint} cols) exceeds terminal width {width}");
        }

        Self {
            anchor_col: anchor_column(width),
            paused: false,
            position: None,
        }
    }

    /// Width measure for a monospaced surface: one column per char.
    pub fn monospace_measure(token: &str) -> f64 {
        token.chars().count() as f64
    }

    /// Host-driven paused indicator; pause has no observer event of its own.
    pub fn show_paused(&mut self, paused: bool) {
        self.paused = paused;
        let mut out = io::stdout();
        if let Err(err) = self.draw_status(&mut out).and_then(|()| out.flush()) {
            warn!("presenter: status draw failed err={err}");
        }
    }

    fn draw_word(&mut self, layout: WordLayout<'_>) -> io::Result<()> {
        let mut out = io::stdout();
        let before_cols = layout.before.chars().count() as u16;
        let start = self.anchor_col.saturating_sub(before_cols);

        queue!(
            out,
            MoveTo(0, WORD_ROW),
            Clear(ClearType::CurrentLine),
            MoveTo(start, WORD_ROW),
            Print(layout.before),
            SetForegroundColor(Color::Red),
            Print(layout.focus),
            ResetColor,
            Print(layout.after),
            MoveTo(0, MARKER_ROW),
            Clear(ClearType::CurrentLine),
            MoveTo(self.anchor_col, MARKER_ROW),
            SetAttribute(Attribute::Dim),
            Print("\u{25b4}"),
            SetAttribute(Attribute::Reset),
        )?;
        self.draw_status(&mut out)?;
        out.flush()
    }

    fn draw_countdown(&self, fraction: f64) -> io::Result<()> {
        let mut out = io::stdout();
        let filled = (fraction * f64::from(COUNTDOWN_BAR_COLS)).round() as u16;
        let start = self.anchor_col.saturating_sub(COUNTDOWN_BAR_COLS / 2);

        let mut bar = String::new();
        for col in 0..COUNTDOWN_BAR_COLS {
            bar.push(if col < filled { '\u{2588}' } else { '\u{2591}' });
        }

        queue!(
            out,
            MoveTo(0, WORD_ROW),
            Clear(ClearType::CurrentLine),
            MoveTo(start, WORD_ROW),
            Print(bar),
        )?;
        out.flush()
    }

    fn draw_finished(&self) -> io::Result<()> {
        let mut out = io::stdout();
        queue!(
            out,
            MoveTo(0, WORD_ROW),
            Clear(ClearType::CurrentLine),
            MoveTo(0, MARKER_ROW),
            Clear(ClearType::CurrentLine),
            MoveTo(self.anchor_col.saturating_sub(2), WORD_ROW),
            SetForegroundColor(Color::Green),
            Print("done"),
            ResetColor,
            MoveTo(0, STATUS_ROW),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Dim),
            Print("r restart \u{b7} q close"),
            SetAttribute(Attribute::Reset),
        )?;
        out.flush()
    }

    fn draw_status(&self, out: &mut impl Write) -> io::Result<()> {
        let mut status = match self.position {
            Some((cursor, total)) => format!("{}/{}", cursor + 1, total),
            None => String::new(),
        };
        if self.paused {
            status.push_str(" \u{b7} paused");
        }
        status.push_str(" \u{b7} space pause \u{b7} \u{2190}/\u{2192} step \u{b7} r restart \u{b7} s settings \u{b7} q quit");

        queue!(
            out,
            MoveTo(0, STATUS_ROW),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Dim),
            Print(status.trim_start_matches(" \u{b7} ")),
            SetAttribute(Attribute::Reset),
        )
    }
}

impl SessionObserver for TerminalPresenter {
    fn mode_changed(&mut self, mode: Mode) {
        if mode == Mode::Finished {
            if let Err(err) = self.draw_finished() {
                warn!("presenter: finished draw failed err={err}");
            }
        }
    }

    fn word_changed(&mut self, layout: WordLayout<'_>, cursor: usize, total: usize) {
        self.position = Some((cursor, total));
        self.paused = false;
        if let Err(err) = self.draw_word(layout) {
            warn!("presenter: word draw failed err={err}");
        }
    }

    fn countdown_progress(&mut self, fraction: f64) {
        if let Err(err) = self.draw_countdown(fraction) {
            warn!("presenter: countdown draw failed err={err}");
        }
    }
}
