use std::fmt;

/// Which record shape a decode call was producing when it failed.
///
/// Carried inside [`DecodeError`] so the message names the feed that broke
/// rather than the internal parser state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Movies,
    Reviews,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Movies => f.write_str("movies"),
            RecordKind::Reviews => f.write_str("reviews"),
        }
    }
}

/// The single error kind of the decoding engine: the token stream could not
/// be parsed into the expected record shape.
///
/// Covers every structural failure — missing or malformed array tokens,
/// truncated input, a bad token inside an element, a value of the wrong
/// type. There is exactly one of these per failed decode call: the batch
/// path returns it, the streaming path publishes it once on the error
/// channel and halts. Partial results never accompany it.
///
/// `message` carries the underlying parser's description verbatim
/// (including the offending token and its position); Display prefixes it
/// with a stable context phrase, e.g.
///
/// ```text
/// could not decode reviews invalid character '}' after object key
/// ```
///
/// The parser error is flattened to a `String` rather than kept as a
/// source chain so the error is `Send + 'static` and can cross the
/// streaming error channel.
#[derive(Debug, thiserror::Error)]
#[error("could not decode {kind} {message}")]
pub struct DecodeError {
    pub kind: RecordKind,
    pub message: String,
}

impl DecodeError {
    pub(crate) fn new(kind: RecordKind, parser_error: impl fmt::Display) -> Self {
        Self {
            kind,
            message: parser_error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_kind_without_colon() {
        let err = DecodeError::new(RecordKind::Reviews, "invalid character '}' after object key");
        assert_eq!(
            err.to_string(),
            "could not decode reviews invalid character '}' after object key"
        );

        let err = DecodeError::new(RecordKind::Movies, "unexpected end of input");
        assert_eq!(err.to_string(), "could not decode movies unexpected end of input");
    }
}
