use std::io::Read;

use serde::de::DeserializeOwned;
use struson::reader::{JsonReader, JsonStreamReader};

use crate::error::{DecodeError, RecordKind};

/// Internal state machine for array traversal.
///
/// ```text
///   Start → Elements → Done
/// ```
///
/// `Start` is the initial state; the opening array token has not been
/// consumed yet. After it is, the decoder stays in `Elements` until the
/// closing token is reached, at which point it transitions to `Done` and
/// yields `None` forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Elements,
    Done,
}

/// Cursor over the elements of a top-level JSON array.
///
/// Wraps a token-stream decoder and yields one typed record per call to
/// [`next`](Self::next), in file order, without materializing the rest of
/// the input. The cursor advances irreversibly: elements cannot be re-read,
/// and after an error the decoder must be discarded.
///
/// The first `next` call consumes the opening array token; input that does
/// not begin with an array (or ends before one) fails there. A malformed
/// element fails on the call that reaches it — the engine neither skips the
/// bad element nor recovers. On success the array is consumed exactly
/// through its closing token; bytes after it are left unread.
///
/// This is an implementation detail of the reader — it is not part of the
/// public API.
pub(crate) struct ElementDecoder<R: Read> {
    json: JsonStreamReader<R>,
    kind: RecordKind,
    state: State,
}

impl<R: Read> ElementDecoder<R> {
    pub(crate) fn new(json: JsonStreamReader<R>, kind: RecordKind) -> Self {
        Self {
            json,
            kind,
            state: State::Start,
        }
    }

    /// Decode the next array element into `T`.
    ///
    /// Returns `Ok(Some(record))` per element, `Ok(None)` once the closing
    /// array token has been consumed, and `Err` on the first structural
    /// failure. After `Err` or exhaustion, further calls are not supported.
    pub(crate) fn next<T: DeserializeOwned>(&mut self) -> Result<Option<T>, DecodeError> {
        match self.state {
            State::Start => {
                self.json
                    .begin_array()
                    .map_err(|e| DecodeError::new(self.kind, e))?;
                self.state = State::Elements;
            }
            State::Elements => {}
            State::Done => return Ok(None),
        }

        if self
            .json
            .has_next()
            .map_err(|e| DecodeError::new(self.kind, e))?
        {
            let record = self
                .json
                .deserialize_next()
                .map_err(|e| DecodeError::new(self.kind, e))?;
            Ok(Some(record))
        } else {
            self.json
                .end_array()
                .map_err(|e| DecodeError::new(self.kind, e))?;
            self.state = State::Done;
            Ok(None)
        }
    }
}
