//! Key-to-intent mapping for the reading surface.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HotkeyAction {
    TogglePlay,
    StepBack,
    StepForward,
    Restart,
    ToggleOverlay,
    RaiseWpm,
    LowerWpm,
    Close,
}

pub fn action_for(key: KeyEvent) -> Option<HotkeyAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(HotkeyAction::Close);
    }

    match key.code {
        KeyCode::Char(' ') => Some(HotkeyAction::TogglePlay),
        KeyCode::Char('h') | KeyCode::Left => Some(HotkeyAction::StepBack),
        KeyCode::Char('l') | KeyCode::Right => Some(HotkeyAction::StepForward),
        KeyCode::Char('r') => Some(HotkeyAction::Restart),
        KeyCode::Char('s') => Some(HotkeyAction::ToggleOverlay),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(HotkeyAction::RaiseWpm),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(HotkeyAction::LowerWpm),
        KeyCode::Char('q') | KeyCode::Esc => Some(HotkeyAction::Close),
        _ => None,
    }
}
