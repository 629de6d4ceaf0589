//! Filesystem path resolution.
//!
//! Reelscout follows the XDG base directory convention: configuration under
//! `$XDG_CONFIG_HOME` (default `~/.config`) and mutable data such as log
//! files under `$XDG_DATA_HOME` (default `~/.local/share`), each with a
//! `reelscout` subdirectory.

use std::path::PathBuf;

/// Application subdirectory name inside the XDG base directories.
const APP_DIR: &str = "reelscout";

/// Resolves an XDG base directory from its environment variable, falling
/// back to `$HOME/<fallback>`.
///
/// An unset `HOME` degrades to a relative path, which keeps the functions
/// below infallible; the callers treat directory creation as best-effort.
fn xdg_dir(var: &str, fallback: &str) -> PathBuf {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map_or_else(
            || {
                let home = std::env::var_os("HOME").unwrap_or_default();
                PathBuf::from(home).join(fallback)
            },
            PathBuf::from,
        )
}

/// Returns the configuration directory for Reelscout.
///
/// The config file `config.toml` and any custom theme files live here.
///
/// # Examples
///
/// ```no_run
/// use reelscout::infrastructure::config_dir;
///
/// let path = config_dir().join("config.toml");
/// ```
#[must_use]
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config").join(APP_DIR)
}

/// Returns the data directory for Reelscout.
///
/// The rotating log file is written here.
#[must_use]
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share").join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, OnceLock};

    /// Serializes tests that mutate process environment variables.
    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[test]
    fn explicit_xdg_vars_take_precedence() {
        let _guard = env_lock();
        let orig_config = std::env::var_os("XDG_CONFIG_HOME");
        let orig_data = std::env::var_os("XDG_DATA_HOME");

        std::env::set_var("XDG_CONFIG_HOME", "/tmp/reelscout-test-config");
        std::env::set_var("XDG_DATA_HOME", "/tmp/reelscout-test-data");

        assert_eq!(
            super::config_dir(),
            std::path::PathBuf::from("/tmp/reelscout-test-config/reelscout")
        );
        assert_eq!(
            super::data_dir(),
            std::path::PathBuf::from("/tmp/reelscout-test-data/reelscout")
        );

        restore("XDG_CONFIG_HOME", orig_config);
        restore("XDG_DATA_HOME", orig_data);
    }

    #[test]
    fn falls_back_to_home_when_xdg_is_unset() {
        let _guard = env_lock();
        let orig_config = std::env::var_os("XDG_CONFIG_HOME");
        let orig_home = std::env::var_os("HOME");

        std::env::remove_var("XDG_CONFIG_HOME");
        std::env::set_var("HOME", "/tmp/reelscout-test-home");

        assert_eq!(
            super::config_dir(),
            std::path::PathBuf::from("/tmp/reelscout-test-home/.config/reelscout")
        );

        restore("XDG_CONFIG_HOME", orig_config);
        restore("HOME", orig_home);
    }

    fn restore(var: &str, value: Option<std::ffi::OsString>) {
        match value {
            Some(v) => std::env::set_var(var, v),
            None => std::env::remove_var(var),
        }
    }
}
