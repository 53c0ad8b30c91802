//! Persisted language preference.
//!
//! # Store layout
//!
//! ```text
//! <config dir>/promptscore/preferences.json
//!   { "promptscore.lang": "ja" }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ScoreError, ScoreResult};
use crate::lang::Language;

/// Storage key holding the last selected language code.
pub const LANGUAGE_KEY: &str = "promptscore.lang";

const PREFERENCES_FILE: &str = "preferences.json";

/// Small string key-value store.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> ScoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ScoreResult<()>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> ScoreResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| ScoreError::Store {
            message: "memory store poisoned".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ScoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| ScoreError::Store {
            message: "memory store poisoned".to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `preferences.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(PREFERENCES_FILE),
        }
    }

    /// Store in the platform config directory.
    pub fn default_location() -> ScoreResult<Self> {
        Ok(Self::in_dir(default_config_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ScoreResult<Map<String, Value>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(ScoreError::Store {
                    message: format!("failed to read {}: {}", self.path.display(), e),
                })
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => {
                warn!(path = %self.path.display(), "ignoring preference file that is not an object");
                Ok(Map::new())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt preference file");
                Ok(Map::new())
            }
        }
    }

    fn write_all(&self, entries: &Map<String, Value>) -> ScoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScoreError::Store {
                message: format!("failed to create {}: {}", parent.display(), e),
            })?;
        }

        let content = serde_json::to_string_pretty(entries).map_err(|e| ScoreError::Store {
            message: format!("failed to serialize preferences: {}", e),
        })?;
        write_atomic(&self.path, &content)
    }
}

// Entries this store did not write (or that hold non-string values) are kept
// as they are; only the key being set is replaced.
impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> ScoreResult<Option<String>> {
        match self.read_all()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                warn!(key, value = %other, "ignoring non-string preference value");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> ScoreResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&entries)
    }
}

/// Platform config directory for the client.
pub fn default_config_dir() -> ScoreResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| ScoreError::Store {
            message: "could not determine config directory".to_string(),
        })?;

    Ok(base.join("promptscore"))
}

fn write_atomic(path: &Path, content: &str) -> ScoreResult<()> {
    let temp_path = path.with_extension("tmp");

    std::fs::write(&temp_path, content).map_err(|e| ScoreError::Store {
        message: format!("failed to write temp file: {}", e),
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| ScoreError::Store {
        message: format!("failed to rename temp file: {}", e),
    })?;

    Ok(())
}

/// The selected display language, backed by a [`PreferenceStore`].
///
/// Read once at startup; every change is written straight back.
pub struct LanguagePreference<S> {
    store: S,
    current: Language,
}

impl<S: PreferenceStore> LanguagePreference<S> {
    /// Load the stored language, falling back to [`Language::default`] when
    /// the value is absent or unsupported.
    pub fn load(store: S) -> ScoreResult<Self> {
        let current = match store.get(LANGUAGE_KEY)? {
            Some(code) => match Language::parse(&code) {
                Some(lang) => lang,
                None => {
                    warn!(value = %code, "unsupported stored language; using default");
                    Language::default()
                }
            },
            None => Language::default(),
        };
        debug!(lang = %current, "language preference loaded");
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Select `lang` and persist it.
    pub fn set(&mut self, lang: Language) -> ScoreResult<Language> {
        self.store.set(LANGUAGE_KEY, lang.code())?;
        self.current = lang;
        Ok(lang)
    }

    /// Advance to the next language (cycling toggle) and persist it.
    pub fn toggle(&mut self) -> ScoreResult<Language> {
        self.set(self.current.next())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
