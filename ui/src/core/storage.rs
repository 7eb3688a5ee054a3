//! Local persistence for display preferences.
//!
//! Layout: one JSON record `{ client_id, locale, theme }`.
//! - Web: `localStorage["liahub.preferences"]`
//! - Native: `<config dir>/preferences.json`
//! - Server-side rendering: nothing is stored.

use serde::{Deserialize, Serialize};

use crate::core::preferences::{Preferences, ThemeMode};
use crate::error::StorageError;
use crate::i18n::Locale;

pub const STORAGE_KEY: &str = "liahub.preferences";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreferences {
    /// Stable per-client identifier, generated on first save.
    pub client_id: String,
    pub locale: Locale,
    pub theme: ThemeMode,
}

impl StoredPreferences {
    pub fn fresh(prefs: Preferences) -> Self {
        Self {
            client_id: uuid::Uuid::new_v4().to_string(),
            locale: prefs.locale,
            theme: prefs.theme,
        }
    }

    /// Record for `prefs`, keeping the client id of `previous` if there is one.
    pub fn updated(previous: Option<Self>, prefs: Preferences) -> Self {
        match previous {
            Some(prev) => Self {
                locale: prefs.locale,
                theme: prefs.theme,
                ..prev
            },
            None => Self::fresh(prefs),
        }
    }

    pub fn preferences(&self) -> Preferences {
        Preferences::new(self.locale, self.theme)
    }
}

/// Raw access to wherever the preferences record lives.
pub trait PreferenceBackend {
    /// The stored JSON, or `None` when nothing has been saved yet.
    fn read_raw(&self) -> Result<Option<String>, StorageError>;
    fn write_raw(&self, raw: &str) -> Result<(), StorageError>;
}

/// Read the stored record, if any.
pub fn load() -> Result<Option<StoredPreferences>, StorageError> {
    load_from(&backend::Platform)
}

/// Persist `prefs` in the platform store.
pub fn save(prefs: Preferences) -> Result<StoredPreferences, StorageError> {
    save_to(&backend::Platform, prefs)
}

pub fn load_from(backend: &impl PreferenceBackend) -> Result<Option<StoredPreferences>, StorageError> {
    match backend.read_raw()? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Persist `prefs` in `backend`. An unreadable previous record is replaced.
pub fn save_to(
    backend: &impl PreferenceBackend,
    prefs: Preferences,
) -> Result<StoredPreferences, StorageError> {
    let previous = load_from(backend).unwrap_or_else(|err| {
        tracing::debug!("discarding unreadable preferences record ({err})");
        None
    });
    let record = StoredPreferences::updated(previous, prefs);
    backend.write_raw(&serde_json::to_string(&record)?)?;
    Ok(record)
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::PreferencesFile;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::PreferenceBackend;
    use crate::error::StorageError;

    /// Preferences record stored as a JSON file.
    #[derive(Debug, Clone)]
    pub struct PreferencesFile {
        path: PathBuf,
    }

    impl PreferencesFile {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<config dir>/preferences.json` for the current user.
        pub fn default_location() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("com", "LIA Hub", "LIA Hub")
                .ok_or_else(|| StorageError::Unavailable("no home directory".into()))?;
            Ok(Self::new(dirs.config_dir().join("preferences.json")))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl PreferenceBackend for PreferencesFile {
        fn read_raw(&self) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn write_raw(&self, raw: &str) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, raw)?;
            Ok(())
        }
    }
}

#[cfg(feature = "server")]
mod backend {
    use super::PreferenceBackend;
    use crate::error::StorageError;

    pub struct Platform;

    impl PreferenceBackend for Platform {
        fn read_raw(&self) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write_raw(&self, _raw: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }
}

#[cfg(all(target_arch = "wasm32", not(feature = "server")))]
mod backend {
    use super::{PreferenceBackend, STORAGE_KEY};
    use crate::error::StorageError;

    pub struct Platform;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
    }

    impl PreferenceBackend for Platform {
        fn read_raw(&self) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(STORAGE_KEY)
                .map_err(|_| StorageError::Unavailable("localStorage read failed".into()))
        }

        fn write_raw(&self, raw: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(STORAGE_KEY, raw)
                .map_err(|_| StorageError::Unavailable("localStorage write failed".into()))
        }
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
mod backend {
    use super::{PreferenceBackend, PreferencesFile};
    use crate::error::StorageError;

    /// The per-user file, resolved on every access.
    pub struct Platform;

    impl PreferenceBackend for Platform {
        fn read_raw(&self) -> Result<Option<String>, StorageError> {
            PreferencesFile::default_location()?.read_raw()
        }

        fn write_raw(&self, raw: &str) -> Result<(), StorageError> {
            PreferencesFile::default_location()?.write_raw(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_english() -> Preferences {
        Preferences::new(Locale::En, ThemeMode::Dark)
    }

    #[test]
    fn updated_keeps_client_id() {
        let first = StoredPreferences::fresh(Preferences::default());
        let second = StoredPreferences::updated(Some(first.clone()), dark_english());
        assert_eq!(second.client_id, first.client_id);
        assert_eq!(second.preferences(), dark_english());
    }

    #[test]
    fn fresh_records_get_distinct_ids() {
        let a = StoredPreferences::fresh(Preferences::default());
        let b = StoredPreferences::fresh(Preferences::default());
        assert_ne!(a.client_id, b.client_id);
    }

    #[test]
    fn record_json_layout() {
        let record = StoredPreferences {
            client_id: "abc".into(),
            locale: Locale::Sv,
            theme: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"client_id":"abc","locale":"sv","theme":"dark"}"#);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = PreferencesFile::new(dir.path().join("nested").join("preferences.json"));
        assert_eq!(file.read_raw().unwrap(), None);

        let record = StoredPreferences::fresh(dark_english());
        file.write_raw(&serde_json::to_string(&record).unwrap()).unwrap();

        let raw = file.read_raw().unwrap().unwrap();
        let back: StoredPreferences = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn corrupt_file_fails_to_load_as_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = PreferencesFile::new(dir.path().join("preferences.json"));
        file.write_raw("{ not json").unwrap();
        assert!(matches!(load_from(&file), Err(StorageError::Json(_))));
    }

    #[test]
    fn missing_file_loads_as_nothing_saved() {
        let dir = tempfile::tempdir().unwrap();
        let file = PreferencesFile::new(dir.path().join("preferences.json"));
        assert_eq!(load_from(&file).unwrap(), None);
    }

    #[test]
    fn save_replaces_an_unreadable_record() {
        let dir = tempfile::tempdir().unwrap();
        let file = PreferencesFile::new(dir.path().join("preferences.json"));
        file.write_raw("{ not json").unwrap();

        let saved = save_to(&file, dark_english()).unwrap();
        let loaded = load_from(&file).unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.preferences(), dark_english());
    }

    #[test]
    fn save_keeps_the_client_id_across_writes() {
        let dir = tempfile::tempdir().unwrap();
        let file = PreferencesFile::new(dir.path().join("preferences.json"));

        let first = save_to(&file, Preferences::default()).unwrap();
        let second = save_to(&file, dark_english()).unwrap();
        assert_eq!(second.client_id, first.client_id);
        assert_eq!(load_from(&file).unwrap(), Some(second));
    }
}
