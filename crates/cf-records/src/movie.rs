use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// MOVIE record — one element of a catalog feed.
///
/// Feed elements are flat JSON objects:
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────┐
/// │ Key    │ Type    │ Description                  │
/// ├────────┼─────────┼──────────────────────────────┤
/// │ title  │ string  │ Display title                │
/// │ year   │ integer │ Release year                 │
/// └────────┴─────────┴──────────────────────────────┘
/// ```
///
/// Unknown keys are ignored; missing keys decode as zero-valued fields
/// (empty title, year 0). Structural JSON errors are the only rejection —
/// there is no semantic validation of either field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub title: String,
    pub year: i32,
}

/// The materialized batch result: title → release year.
///
/// Titles are assumed unique within one feed. When they are not, later
/// entries silently overwrite earlier ones (last write wins).
pub type MovieIndex = HashMap<String, i32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_object() {
        let movie: Movie = serde_json::from_str(r#"{"title":"Star Wars","year":1977}"#).unwrap();
        assert_eq!(
            movie,
            Movie {
                title: "Star Wars".to_string(),
                year: 1977,
            }
        );
    }

    #[test]
    fn missing_keys_decode_as_zero_values() {
        let movie: Movie = serde_json::from_str(r#"{"title":"Alien"}"#).unwrap();
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.year, 0);

        let movie: Movie = serde_json::from_str("{}").unwrap();
        assert_eq!(movie, Movie::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let movie: Movie =
            serde_json::from_str(r#"{"title":"Alien","year":1979,"director":"Ridley Scott"}"#)
                .unwrap();
        assert_eq!(movie.year, 1979);
    }
}
