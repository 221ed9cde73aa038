//! Process-wide persisted settings store.
//!
//! There is exactly one logical store per installation, scoped by a fixed
//! (organization, application) pair and persisted as a flat JSON object in
//! the platform config directory. The store is only ever touched from the UI
//! thread; reads and writes are synchronous.
//!
//! Reads are type-directed: callers supply the default and get it back when
//! the key is missing or the stored value cannot be coerced. Writes update
//! the in-memory map and flush the whole map to disk immediately, so "live"
//! commits made while a dialog is still open survive a later cancel. Flush
//! failures are logged and swallowed; nothing here is fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::error::Result;
use crate::value::Value;

/// The persisted key-value settings store.
pub struct Settings {
    values: BTreeMap<String, Value>,
    /// Backing file. `None` means in-memory only (tests, or no config dir).
    path: Option<PathBuf>,
}

impl Settings {
    /// Open the store for the given installation identity, loading any
    /// previously persisted values.
    pub fn open(organization: &str, application: &str) -> Self {
        match dirs::config_dir() {
            Some(dir) => {
                let path = dir.join(organization).join(format!("{application}.json"));
                Self::with_path(path)
            }
            None => {
                tracing::warn!("no config directory available; settings will not persist");
                Self::in_memory()
            }
        }
    }

    /// Open a store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        let values = match load_values(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("failed to load settings from {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self {
            values,
            path: Some(path),
        }
    }

    /// A store with no backing file, for use as a test substitute.
    pub fn in_memory() -> Self {
        Self {
            values: BTreeMap::new(),
            path: None,
        }
    }

    /// Read a boolean, falling back to `default` if the key is absent.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Read an integer, falling back to `default` if the key is absent.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values
            .get(key)
            .and_then(Value::as_int)
            .unwrap_or(default)
    }

    /// Read a string, falling back to `default` if the key is absent.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// Read a color, falling back to `default` if the key is absent.
    pub fn get_color(&self, key: &str, default: Color) -> Color {
        self.values
            .get(key)
            .and_then(Value::as_color)
            .unwrap_or(default)
    }

    /// Write a boolean and flush to disk.
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, Value::Bool(value));
    }

    /// Write an integer and flush to disk.
    pub fn set_int(&mut self, key: &str, value: i64) {
        self.set(key, Value::Int(value));
    }

    /// Write a string and flush to disk.
    pub fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, Value::from(value));
    }

    /// Write a color and flush to disk.
    pub fn set_color(&mut self, key: &str, value: Color) {
        self.set(key, Value::Color(value));
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
        self.flush();
    }

    fn flush(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = persist_values(path, &self.values) {
            tracing::warn!("failed to persist settings to {}: {}", path.display(), e);
        }
    }
}

/// Load the settings map from disk. A missing file is a normal first run.
fn load_values(path: &Path) -> Result<BTreeMap<String, Value>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Persist the settings map to disk, creating parent directories as needed.
fn persist_values(path: &Path, values: &BTreeMap<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(values)?;
    fs::write(path, text)?;
    Ok(())
}
