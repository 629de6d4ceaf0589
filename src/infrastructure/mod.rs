//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for resolving the on-disk locations used
//! by Reelscout: the config directory (config file, custom themes) and the
//! data directory (log files).

pub mod paths;

pub use paths::{config_dir, data_dir};
