//! Reelscout: a terminal UI for searching movies on TMDB.
//!
//! Reelscout is a keyboard-driven movie search tool that provides:
//! - Title search against The Movie Database (TMDB) API
//! - A results grid with title, release year, and rating columns
//! - A details view with overview, release date, rating, and artwork URL
//! - Asynchronous searching via a background worker thread
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ TMDB Layer    │   │ Worker Layer  │
//! │ (ui/)         │   │ (tmdb/)       │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP client │   │ - Async search│
//! │ - Theming     │   │ - Decoding    │   │ - Channel IPC │
//! │ - Components  │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Movie model (domain/movie)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - Tracing subscriber setup                         │
//! │  - Rotating log file writer                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Movie, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`tmdb`]: HTTP client for the TMDB search API
//! - [`worker`]: Background worker for asynchronous searching
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing setup and rotating file logging
//!
//! # Configuration
//!
//! Configuration is read from `~/.config/reelscout/config.toml`:
//!
//! ```toml
//! api_token = "eyJhbGciOi..."
//! language = "en-US"
//! include_adult = false
//! theme = "catppuccin-mocha"
//! trace_level = "info"
//! ```
//!
//! The `TMDB_API_TOKEN` and `REELSCOUT_THEME` environment variables
//! override the corresponding file values.
//!
//! # Examples
//!
//! ```
//! use reelscout::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     theme_name: Some("catppuccin-mocha".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! let events = vec![Event::Char('h'), Event::Char('i')];
//! for event in events {
//!     let (_should_render, actions) = handle_event(&mut state, &event)?;
//!     assert!(actions.is_empty());
//! }
//! # Ok::<(), reelscout::ReelscoutError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod tmdb;
pub mod worker;

pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Movie, ReelscoutError, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
///
/// Loaded from `~/.config/reelscout/config.toml` with environment variable
/// overrides. Every field has a default, so a missing file yields a usable
/// configuration; only the API token has to come from somewhere.
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB API read access token (bearer token).
    ///
    /// Required to search. Taken from the `TMDB_API_TOKEN` environment
    /// variable or the `api_token` file key.
    pub api_token: Option<String>,

    /// Base URL of the TMDB API.
    ///
    /// Default: the public v3 endpoint. Overridable for testing against a
    /// local stub.
    pub base_url: String,

    /// Language code for search results (e.g., "en-US").
    pub language: String,

    /// Whether to include adult titles in results. Default: `false`.
    pub include_adult: bool,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: tmdb::client::DEFAULT_BASE_URL.to_string(),
            language: "en-US".to_string(),
            include_adult: false,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// On-disk representation of the configuration file.
///
/// Every key is optional; absent keys fall back to [`Config::default`].
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_token: Option<String>,
    base_url: Option<String>,
    language: Option<String>,
    include_adult: Option<bool>,
    theme: Option<String>,
    theme_file: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from the default location with environment
    /// overrides applied.
    ///
    /// # Errors
    ///
    /// Fails if the configuration file exists but cannot be read or parsed.
    /// A missing file is not an error.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_path(infrastructure::config_dir().join("config.toml"))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed. A missing
    /// file yields the defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|e| {
            ReelscoutError::Config(format!("{}: {e}", path.display()))
        })?;

        let defaults = Self::default();
        Ok(Self {
            api_token: file.api_token,
            base_url: file.base_url.unwrap_or(defaults.base_url),
            language: file.language.unwrap_or(defaults.language),
            include_adult: file.include_adult.unwrap_or(defaults.include_adult),
            theme_name: file.theme,
            theme_file: file.theme_file,
            trace_level: file.trace_level,
        })
    }

    /// Applies `TMDB_API_TOKEN` and `REELSCOUT_THEME` environment overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("TMDB_API_TOKEN") {
            if !token.is_empty() {
                self.api_token = Some(token);
            }
        }
        if let Ok(theme) = std::env::var("REELSCOUT_THEME") {
            if !theme.is_empty() {
                self.theme_name = Some(theme);
            }
        }
    }
}

/// Initializes application state from configuration.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// creates a fresh `AppState`. Theme problems fall back to the default
/// theme rather than aborting startup.
///
/// # Example
///
/// ```
/// use reelscout::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.movies.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing reelscout");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_path(dir.path().join("config.toml")).unwrap();

        assert!(config.api_token.is_none());
        assert_eq!(config.base_url, tmdb::client::DEFAULT_BASE_URL);
        assert_eq!(config.language, "en-US");
        assert!(!config.include_adult);
    }

    #[test]
    fn config_file_keys_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_token = \"secret\"\nlanguage = \"de-DE\"\ninclude_adult = true\ntheme = \"catppuccin-latte\""
        )
        .unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.language, "de-DE");
        assert!(config.include_adult);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        // Absent keys keep their defaults.
        assert_eq!(config.base_url, tmdb::client::DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_config_files_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_token = [not toml").unwrap();

        let err = Config::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ReelscoutError::Config(_)));
    }

    #[test]
    fn initialize_resolves_named_themes() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_prefers_theme_files_over_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "custom");
    }
}
