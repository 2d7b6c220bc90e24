//! JSON-backed user settings with change notification.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use glance_core::SettingsSource;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const SETTINGS_DIR: &str = "glance";
const SETTINGS_FILE: &str = "settings.json";

/// User-tunable settings that survive restarts.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PersistedSettings {
    pub wpm: f64,
    pub font_size: f64,
    pub clean_words: bool,
    pub shortcut: String,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            wpm: 300.0,
            font_size: 20.0,
            clean_words: false,
            shortcut: "control+shift+r".to_owned(),
        }
    }
}

type Subscriber = Box<dyn FnMut(&PersistedSettings)>;

struct StoreInner {
    settings: PersistedSettings,
    path: Option<PathBuf>,
    subscribers: Vec<Subscriber>,
}

/// Shared settings store handle.
///
/// Clones share one underlying store, so the session's live reads through
/// [`SettingsSource`] observe writes made through any other handle. Every
/// write persists (when a path is configured) and notifies subscribers.
#[derive(Clone)]
pub struct JsonSettingsStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl JsonSettingsStore {
    /// Loads from the user config dir, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default() -> Self {
        let path = dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE));
        Self::load_from(path)
    }

    /// Store bound to an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self::load_from(Some(path))
    }

    /// Store with no backing file; settings live for the process only.
    pub fn in_memory() -> Self {
        Self::load_from(None)
    }

    fn load_from(path: Option<PathBuf>) -> Self {
        let settings = path
            .as_deref()
            .and_then(|p| fs::read_to_string(p).ok())
            .map(|contents| serde_json::from_str(&contents).unwrap_or_default())
            .unwrap_or_default();

        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                settings,
                path,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> PersistedSettings {
        self.inner.borrow().settings.clone()
    }

    pub fn set_wpm(&self, wpm: f64) {
        self.update(|settings| settings.wpm = wpm);
    }

    pub fn set_font_size(&self, font_size: f64) {
        self.update(|settings| settings.font_size = font_size);
    }

    pub fn set_clean_words(&self, clean_words: bool) {
        self.update(|settings| settings.clean_words = clean_words);
    }

    pub fn set_shortcut(&self, shortcut: impl Into<String>) {
        self.update(|settings| settings.shortcut = shortcut.into());
    }

    /// Registers a change callback, invoked after every write with the new
    /// snapshot.
    pub fn subscribe(&self, subscriber: impl FnMut(&PersistedSettings) + 'static) {
        self.inner.borrow_mut().subscribers.push(Box::new(subscriber));
    }

    fn update(&self, mutate: impl FnOnce(&mut PersistedSettings)) {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            mutate(&mut inner.settings);
            inner.settings.clone()
        };

        self.persist(&snapshot);

        // Callbacks run without the borrow held so they may read the store.
        let mut subscribers = std::mem::take(&mut self.inner.borrow_mut().subscribers);
        for subscriber in &mut subscribers {
            subscriber(&snapshot);
        }
        let mut inner = self.inner.borrow_mut();
        subscribers.append(&mut inner.subscribers);
        inner.subscribers = subscribers;
    }

    fn persist(&self, snapshot: &PersistedSettings) {
        let Some(path) = self.inner.borrow().path.clone() else {
            return;
        };

        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(snapshot) {
            Ok(contents) => {
                if let Err(err) = fs::write(&path, contents) {
                    warn!("settings: save failed path={} err={err}", path.display());
                } else {
                    debug!("settings: saved path={}", path.display());
                }
            }
            Err(err) => warn!("settings: serialize failed err={err}"),
        }
    }
}

impl SettingsSource for JsonSettingsStore {
    fn words_per_minute(&self) -> f64 {
        self.inner.borrow().settings.wpm
    }

    fn clean_words(&self) -> bool {
        self.inner.borrow().settings.clean_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("glance-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn defaults_match_the_reader_defaults() {
        let store = JsonSettingsStore::in_memory();
        let settings = store.get();

        assert_eq!(settings.wpm, 300.0);
        assert_eq!(settings.font_size, 20.0);
        assert!(!settings.clean_words);
        assert_eq!(store.words_per_minute(), 300.0);
    }

    #[test]
    fn writes_are_visible_through_shared_handles() {
        let store = JsonSettingsStore::in_memory();
        let session_view = store.clone();

        store.set_wpm(450.0);
        store.set_clean_words(true);

        assert_eq!(session_view.words_per_minute(), 450.0);
        assert!(session_view.clean_words());
    }

    #[test]
    fn subscribers_see_every_write() {
        let store = JsonSettingsStore::in_memory();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |settings| sink.borrow_mut().push(settings.wpm));

        store.set_wpm(325.0);
        store.set_wpm(350.0);

        assert_eq!(*seen.borrow(), [325.0, 350.0]);
    }

    #[test]
    fn settings_round_trip_through_the_file() {
        let path = temp_settings_path("roundtrip");
        let _ = fs::remove_file(&path);

        let store = JsonSettingsStore::at_path(path.clone());
        store.set_wpm(525.0);
        store.set_shortcut("control+shift+g");

        let reloaded = JsonSettingsStore::at_path(path.clone());
        assert_eq!(reloaded.get(), store.get());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_or_corrupt_files_fall_back_to_defaults() {
        let missing_path = temp_settings_path("missing");
        let _ = fs::remove_file(&missing_path);
        let missing = JsonSettingsStore::at_path(missing_path);
        assert_eq!(missing.get(), PersistedSettings::default());

        let path = temp_settings_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let corrupt = JsonSettingsStore::at_path(path.clone());
        assert_eq!(corrupt.get(), PersistedSettings::default());
        let _ = fs::remove_file(&path);
    }
}
