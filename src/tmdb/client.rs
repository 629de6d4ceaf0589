//! HTTP client for the TMDB search endpoint.

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{Movie, Result};

/// Default base URL of the TMDB v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Wire shape of the `/search/movie` response.
///
/// Only `results` is consumed; paging fields are ignored since the core
/// never paginates.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Movie>,
}

/// Client for movie lookups against the TMDB API.
///
/// Holds a connection-pooling `reqwest::Client` and the request parameters
/// that are constant per run (token, language, adult filter). The base URL
/// is configurable so tests can point the client at a local listener.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    token: String,
    language: String,
    include_adult: bool,
}

impl TmdbClient {
    /// Creates a client with the given base URL and credentials.
    #[must_use]
    pub fn new(base_url: String, token: String, language: String, include_adult: bool) -> Self {
        Self {
            http: Client::new(),
            base_url,
            token,
            language,
            include_adult,
        }
    }

    /// Searches the movie database by title.
    ///
    /// Returns zero or more movies in the relevance order of the remote
    /// source; the order is preserved, never re-sorted. The query is
    /// expected to be non-blank; emptiness handling belongs to the search
    /// bar, not here.
    ///
    /// # Errors
    ///
    /// Any network, authorization, or malformed-response condition surfaces
    /// as [`crate::domain::ReelscoutError::Search`].
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        tracing::debug!(query = %query, "searching movies");

        let response = self
            .http
            .get(format!("{}/search/movie", self.base_url))
            .query(&[
                ("query", query),
                ("language", &self.language),
                ("include_adult", if self.include_adult { "true" } else { "false" }),
                ("page", "1"),
            ])
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;

        tracing::debug!(result_count = body.results.len(), "search completed");

        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchResponse, TmdbClient};
    use crate::domain::ReelscoutError;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serves one canned HTTP response on an ephemeral port. Returns the
    /// base URL to reach it plus a receiver that yields the request head
    /// the server saw.
    fn one_shot_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, std::sync::mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (head_tx, head_rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                // Read until the request head is complete.
                let mut seen = Vec::new();
                while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => seen.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = head_tx.send(String::from_utf8_lossy(&seen).into_owned());
                let response = format!(
                    "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{addr}"), head_rx)
    }

    fn client(base_url: String) -> TmdbClient {
        TmdbClient::new(base_url, "test-token".to_string(), "en-US".to_string(), false)
    }

    #[test]
    fn response_decoding_preserves_order_and_tolerates_missing_fields() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 2, "title": "The Matrix Reloaded", "overview": "Neo again.",
                 "release_date": "2003-05-15", "vote_average": 7.0,
                 "backdrop_path": null, "poster_path": "/r.jpg"},
                {"id": 1, "title": "The Matrix",
                 "vote_average": 8.2, "poster_path": "/m.jpg"}
            ],
            "total_pages": 1,
            "total_results": 2
        }"#;

        let decoded: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.results.len(), 2);
        // Remote relevance order is preserved as-is.
        assert_eq!(decoded.results[0].id, 2);
        assert_eq!(decoded.results[1].id, 1);
        assert!(decoded.results[0].backdrop_path.is_none());
        assert!(decoded.results[1].overview.is_empty());
        assert_eq!(decoded.results[1].release_year(), "----");
    }

    #[tokio::test]
    async fn search_returns_decoded_movies_on_success() {
        let (base, head_rx) = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"page":1,"results":[{"id":603,"title":"The Matrix","overview":"","release_date":"1999-03-30","vote_average":8.2,"backdrop_path":"/b.jpg","poster_path":"/p.jpg"}],"total_pages":1,"total_results":1}"#,
        );

        let movies = client(base).search_movies("matrix").await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "The Matrix");

        let head = head_rx.recv().unwrap();
        let request_line = head.lines().next().unwrap();
        assert!(request_line.starts_with("GET /search/movie?"));
        assert!(request_line.contains("query=matrix"));
        assert!(request_line.contains("language=en-US"));
        assert!(request_line.contains("include_adult=false"));
        assert!(request_line.contains("page=1"));
        assert!(head.to_lowercase().contains("authorization: bearer test-token"));
    }

    #[tokio::test]
    async fn search_surfaces_server_failures_as_search_errors() {
        let (base, _head_rx) = one_shot_server("HTTP/1.1 500 Internal Server Error", "{}");

        let err = client(base).search_movies("matrix").await.unwrap_err();
        assert!(matches!(err, ReelscoutError::Search(_)));
    }

    #[tokio::test]
    async fn search_surfaces_malformed_bodies_as_search_errors() {
        let (base, _head_rx) = one_shot_server("HTTP/1.1 200 OK", "not json at all");

        let err = client(base).search_movies("matrix").await.unwrap_err();
        assert!(matches!(err, ReelscoutError::Search(_)));
    }
}
