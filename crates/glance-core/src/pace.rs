//! Per-word display delay.

use core::time::Duration;

use crate::error::{PaceError, Result};

/// Char count at which a word earns extra display time.
const LONG_WORD_CHARS: usize = 7;
/// Multiplier floor for long words and clause-ending punctuation.
const LONG_WORD_MULTIPLIER: f64 = 1.5;
/// Multiplier floor for sentence-ending punctuation.
const SENTENCE_END_MULTIPLIER: f64 = 2.0;

/// Total countdown duration before reading starts.
pub const COUNTDOWN_DURATION: Duration = Duration::from_secs(3);
/// Fixed countdown tick; drives a smooth progress fraction, decoupled from
/// the configured reading pace.
pub const COUNTDOWN_TICK: Duration = Duration::from_millis(20);
/// Idle time in the finished state before the session dismisses itself.
pub const AUTO_DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Number of countdown ticks from full progress to zero.
pub const COUNTDOWN_TICKS: u32 =
    (COUNTDOWN_DURATION.as_millis() / COUNTDOWN_TICK.as_millis()) as u32;

/// Display delay for `token` at `wpm` words per minute.
///
/// The base delay is `60 / wpm` seconds. Long words and trailing punctuation
/// raise a multiplier; the rules combine via max, never addition, so a long
/// word ending a sentence holds for 2.0x the base, not 3.5x.
///
/// A non-positive or non-finite `wpm` is a configuration error raised here,
/// at the point of computation; it is never clamped to a default.
pub fn delay_for_token(token: &str, wpm: f64) -> Result<Duration> {
    if !wpm.is_finite() || wpm <= 0.0 {
        return Err(PaceError::InvalidWordsPerMinute(wpm));
    }

    let base = 60.0 / wpm;

    let mut multiplier = 1.0_f64;
    if token.chars().count() >= LONG_WORD_CHARS {
        multiplier = multiplier.max(LONG_WORD_MULTIPLIER);
    }
    match token.chars().next_back() {
        Some('.' | '!' | '?') => multiplier = multiplier.max(SENTENCE_END_MULTIPLIER),
        Some(',' | ';' | ':') => multiplier = multiplier.max(LONG_WORD_MULTIPLIER),
        _ => {}
    }

    Ok(Duration::from_secs_f64(base * multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_delay_follows_wpm() {
        assert_eq!(delay_for_token("cat", 300.0).unwrap(), Duration::from_millis(200));
        assert_eq!(delay_for_token("cat", 600.0).unwrap(), Duration::from_millis(100));
    }

    #[test]
    fn long_words_hold_longer() {
        assert_eq!(delay_for_token("lantern", 300.0).unwrap(), Duration::from_millis(300));
    }

    #[test]
    fn sentence_end_wins_over_length() {
        // length >= 7 raises to 1.5, the trailing period to 2.0; max wins.
        assert_eq!(
            delay_for_token("beautiful.", 300.0).unwrap(),
            Duration::from_millis(400)
        );
    }

    #[test]
    fn clause_punctuation_matches_the_long_word_floor() {
        assert_eq!(delay_for_token("so,", 300.0).unwrap(), Duration::from_millis(300));
        assert_eq!(delay_for_token("first;", 300.0).unwrap(), Duration::from_millis(300));
        assert_eq!(delay_for_token("note:", 300.0).unwrap(), Duration::from_millis(300));
    }

    #[test]
    fn sentence_punctuation_doubles_the_base() {
        for token in ["end.", "stop!", "why?"] {
            assert_eq!(delay_for_token(token, 300.0).unwrap(), Duration::from_millis(400));
        }
    }

    #[test]
    fn invalid_wpm_is_a_configuration_error() {
        for wpm in [0.0, -120.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                delay_for_token("cat", wpm),
                Err(PaceError::InvalidWordsPerMinute(_))
            ));
        }
    }

    #[test]
    fn countdown_schedule_is_fixed() {
        assert_eq!(COUNTDOWN_TICKS, 150);
        assert_eq!(COUNTDOWN_TICK * COUNTDOWN_TICKS, COUNTDOWN_DURATION);
    }
}
