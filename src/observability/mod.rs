//! Tracing setup with file-based log output.
//!
//! While the terminal is in raw mode the application owns stdout, so log
//! output goes to a rotating file under the data directory instead. The
//! `tracing` facade is used throughout the crate; this module wires it to a
//! `tracing-subscriber` registry with an environment filter and an fmt
//! layer writing to [`FileWriter`].
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber initialization
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
