//! Domain layer: the movie record and the crate error type.
//!
//! These types are independent of the HTTP client, the terminal, and the
//! worker thread; everything above them depends on this module, never the
//! other way around.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`movie`]: The movie record returned by the search client

pub mod error;
pub mod movie;

pub use error::{ReelscoutError, Result};
pub use movie::Movie;
