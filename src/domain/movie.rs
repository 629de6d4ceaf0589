//! Movie record returned by the search client.
//!
//! This module defines the core `Movie` type: an immutable value describing
//! one searchable item, deserialized directly from the TMDB wire shape. The
//! record has no lifecycle beyond being returned from a search and optionally
//! held as the currently selected movie.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Base URL of the TMDB image CDN.
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// One movie as returned by the search endpoint.
///
/// Field names match the TMDB JSON response so the record deserializes
/// without renames. Text fields are not validated; `release_date` in
/// particular is an ISO-like date string that may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    /// Returns the release year for display, or `"----"` when the release
    /// date is absent or unparseable.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelscout::domain::Movie;
    ///
    /// let mut movie = Movie {
    ///     id: 603,
    ///     title: "The Matrix".to_string(),
    ///     overview: String::new(),
    ///     release_date: "1999-03-30".to_string(),
    ///     vote_average: 8.2,
    ///     backdrop_path: None,
    ///     poster_path: None,
    /// };
    /// assert_eq!(movie.release_year(), "1999");
    ///
    /// movie.release_date.clear();
    /// assert_eq!(movie.release_year(), "----");
    /// ```
    #[must_use]
    pub fn release_year(&self) -> String {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d")
            .map_or_else(|_| "----".to_string(), |d| d.format("%Y").to_string())
    }

    /// Formats the vote average as a rating label, e.g. `"8.2/10"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}/10", self.vote_average)
    }

    /// Full CDN URL for the backdrop image, if the movie has one.
    #[must_use]
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{IMAGE_BASE}/original{p}"))
    }

    /// Full CDN URL for the poster image, if the movie has one.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{IMAGE_BASE}/w500{p}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Movie;

    fn movie() -> Movie {
        Movie {
            id: 603,
            title: "The Matrix".to_string(),
            overview: "A computer hacker learns the truth.".to_string(),
            release_date: "1999-03-30".to_string(),
            vote_average: 8.21,
            backdrop_path: Some("/backdrop.jpg".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
        }
    }

    #[test]
    fn release_year_parses_iso_dates_and_tolerates_garbage() {
        let mut m = movie();
        assert_eq!(m.release_year(), "1999");

        m.release_date = "not-a-date".to_string();
        assert_eq!(m.release_year(), "----");

        m.release_date = String::new();
        assert_eq!(m.release_year(), "----");
    }

    #[test]
    fn rating_label_rounds_to_one_decimal() {
        assert_eq!(movie().rating_label(), "8.2/10");
    }

    #[test]
    fn image_urls_join_against_the_cdn() {
        let m = movie();
        assert_eq!(
            m.backdrop_url().as_deref(),
            Some("https://image.tmdb.org/t/p/original/backdrop.jpg")
        );
        assert_eq!(
            m.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
    }

    #[test]
    fn absent_or_empty_image_paths_yield_no_url() {
        let mut m = movie();
        m.backdrop_path = None;
        m.poster_path = Some(String::new());
        assert!(m.backdrop_url().is_none());
        assert!(m.poster_url().is_none());
    }
}
