//! tikzit-core - Settings model and persistence for TikZiT.
//!
//! This library provides the application's persisted settings store: a flat,
//! typed key-value namespace scoped to the ("tikzit", "tikzit") installation
//! identity. Reads are type-directed with caller-supplied defaults, so a
//! missing key is never an error.
//!
//! # Example
//!
//! ```no_run
//! use tikzit_core::{keys, Settings};
//!
//! let mut settings = Settings::open("tikzit", "tikzit");
//! let spacing = settings.get_int(keys::STYLE_ICON_SPACING, keys::DEFAULT_STYLE_ICON_SPACING);
//! settings.set_int(keys::STYLE_ICON_SPACING, spacing * 2);
//! ```

pub mod color;
pub mod error;
pub mod keys;
pub mod settings;
pub mod value;

// Re-exports for convenience
pub use color::Color;
pub use error::{Result, SettingsError};
pub use settings::Settings;
pub use value::Value;
