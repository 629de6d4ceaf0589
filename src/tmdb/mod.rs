//! TMDB search client.
//!
//! This module is the only place that talks to the network. It exposes a
//! single lookup operation (search movies by title) and surfaces every
//! failure as one undifferentiated error kind; the application layer never
//! branches on what exactly went wrong.

pub mod client;

pub use client::TmdbClient;
