//! Live-tunable reading settings abstraction.

/// Snapshot of the settings the pacing core reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderSettings {
    pub words_per_minute: f64,
    pub clean_words: bool,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            words_per_minute: 300.0,
            clean_words: false,
        }
    }
}

/// Read access to the host's settings store.
///
/// The session reads through this trait at the start of each relevant
/// operation — tokenization and every delay computation — and never caches
/// the values, so a live change takes effect on the next scheduled delay
/// without rescheduling the pending one.
pub trait SettingsSource {
    fn words_per_minute(&self) -> f64;
    fn clean_words(&self) -> bool;
}

/// Fixed settings used in tests and one-shot hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticSettings(pub ReaderSettings);

impl StaticSettings {
    pub fn with_wpm(wpm: f64) -> Self {
        Self(ReaderSettings {
            words_per_minute: wpm,
            ..ReaderSettings::default()
        })
    }
}

impl SettingsSource for StaticSettings {
    fn words_per_minute(&self) -> f64 {
        self.0.words_per_minute
    }

    fn clean_words(&self) -> bool {
        self.0.clean_words
    }
}
