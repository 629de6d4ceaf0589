//! Background worker thread for asynchronous search requests.
//!
//! This module implements the worker that performs all network I/O off the
//! UI thread. The UI thread posts typed requests over an mpsc channel and
//! drains typed responses between input polls, so a slow lookup never
//! freezes rendering.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and thread spawning

pub mod handler;
pub mod messages;

pub use handler::{spawn, SearchWorker};
pub use messages::{WorkerMessage, WorkerResponse};
