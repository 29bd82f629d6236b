#![warn(clippy::pedantic)]

//! Shared fixture helpers for the cinefeed integration tests and benches.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Absolute path to a fixture feed under `tests/fixtures/`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Build a well-formed movie feed with `n` generated elements.
///
/// Titles are unique, so the decoded index has exactly `n` entries.
#[must_use]
pub fn synthetic_movies(n: usize) -> String {
    let mut feed = String::from("[");
    for i in 0..n {
        if i > 0 {
            feed.push(',');
        }
        let year = 1900 + (i % 120);
        let _ = write!(feed, r#"{{"title":"Movie {i}","year":{year}}}"#);
    }
    feed.push(']');
    feed
}

/// Build a well-formed review feed with `n` generated elements.
#[must_use]
pub fn synthetic_reviews(n: usize) -> String {
    let mut feed = String::from("[");
    for i in 0..n {
        if i > 0 {
            feed.push(',');
        }
        let score = i % 100;
        let _ = write!(
            feed,
            r#"{{"title":"Movie {i}","review":"review body {i}","score":{score}}}"#
        );
    }
    feed.push(']');
    feed
}
