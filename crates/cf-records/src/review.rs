use serde::{Deserialize, Serialize};

/// REVIEW record — one element of a review feed.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────┐
/// │ Key    │ Type    │ Description                  │
/// ├────────┼─────────┼──────────────────────────────┤
/// │ title  │ string  │ Title of the reviewed movie  │
/// │ review │ string  │ Free-text review body        │
/// │ score  │ integer │ Reviewer score               │
/// └────────┴─────────┴──────────────────────────────┘
/// ```
///
/// Same decoding rules as [`Movie`](crate::Movie): unknown keys ignored,
/// missing keys zero-valued. Reviews are never deduplicated — the feed may
/// legitimately contain many reviews for one title.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub title: String,
    pub review: String,
    pub score: i32,
}
