//! Display preferences (language + theme) shared by the whole view tree.
//!
//! [`Preferences`] is the plain value with the toggle rules. The app root
//! wraps it in a [`PreferencesStore`] (a `Signal` handle) and provides it via
//! context; components that read it re-render when it changes.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::storage::{self, StoredPreferences};
use crate::error::StorageError;
use crate::i18n::Locale;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value for the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub locale: Locale,
    pub theme: ThemeMode,
}

impl Preferences {
    pub fn new(locale: Locale, theme: ThemeMode) -> Self {
        Self { locale, theme }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }
}

/// Writes a changed value to storage. [`storage::save`] in the app.
pub type PersistFn = fn(Preferences) -> Result<StoredPreferences, StorageError>;

/// Copyable handle to the app-wide preferences signal.
///
/// Mutations are persisted best-effort; a storage failure is logged and the
/// in-memory value stays authoritative.
#[derive(Clone, Copy)]
pub struct PreferencesStore {
    state: Signal<Preferences>,
    persist: PersistFn,
}

impl PartialEq for PreferencesStore {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl PreferencesStore {
    pub fn new(state: Signal<Preferences>, persist: PersistFn) -> Self {
        Self { state, persist }
    }

    pub fn locale(&self) -> Locale {
        self.state.read().locale
    }

    pub fn theme(&self) -> ThemeMode {
        self.state.read().theme
    }

    pub fn snapshot(&self) -> Preferences {
        *self.state.read()
    }

    pub fn toggle_locale(&mut self) {
        self.update(Preferences::toggle_locale);
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.update(|prefs| prefs.set_locale(locale));
    }

    pub fn toggle_theme(&mut self) {
        self.update(Preferences::toggle_theme);
    }

    fn update(&mut self, change: impl FnOnce(&mut Preferences)) {
        let next = {
            let mut prefs = self.state.write();
            change(&mut *prefs);
            *prefs
        };
        tracing::info!(
            locale = next.locale.code(),
            theme = next.theme.as_str(),
            "preferences changed"
        );
        if let Err(err) = (self.persist)(next) {
            tracing::warn!("could not persist preferences ({err}); keeping them in memory");
        }
    }
}

/// Create the store at the app root and provide it to descendants.
///
/// The first render always uses the defaults so server-rendered HTML and the
/// hydrating client agree. Saved preferences are applied by an effect, which
/// only runs on the client once the tree is mounted.
pub fn use_preferences_provider() -> PreferencesStore {
    let mut state = use_signal(Preferences::default);
    let store = use_context_provider(|| PreferencesStore::new(state, storage::save));

    use_effect(move || {
        let restored = restored_preferences(storage::load());
        if restored != *state.peek() {
            tracing::debug!(
                locale = restored.locale.code(),
                theme = restored.theme.as_str(),
                "restoring saved preferences"
            );
            state.set(restored);
        }
    });

    store
}

/// The store provided by [`use_preferences_provider`].
pub fn use_preferences() -> PreferencesStore {
    use_context::<PreferencesStore>()
}

/// Preferences to start from given what storage returned. Failures fall back
/// to the defaults.
fn restored_preferences(loaded: Result<Option<StoredPreferences>, StorageError>) -> Preferences {
    match loaded {
        Ok(Some(stored)) => stored.preferences(),
        Ok(None) => Preferences::default(),
        Err(err) => {
            tracing::warn!("could not read stored preferences ({err}); using defaults");
            Preferences::default()
        }
    }
}
