use std::io::Read;

use cf_records::{Movie, MovieIndex};
use struson::reader::JsonStreamReader;
use tracing::debug;

use crate::element_decoder::ElementDecoder;
use crate::error::{DecodeError, RecordKind};

/// Reader over one JSON feed: a top-level array of flat record objects.
///
/// A `FeedReader` binds a token-stream decoder to an already-open byte
/// source. It does not open, locate, or explicitly close anything — the
/// source moves into the reader and is dropped (released) when the decode
/// call ends, success or failure. Callers that need a file simply open it
/// and hand it over:
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
/// use cf_reader::FeedReader;
///
/// let file = File::open("movies.json")?;
/// let index = FeedReader::new(BufReader::new(file)).movies()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Each reader serves exactly one decode call. Both operations take `self`
/// by value: the decoder's cursor advances monotonically and cannot be
/// reset, so re-running a reader after exhaustion or failure is impossible
/// by construction rather than merely documented as undefined. This also
/// makes concurrent use of one reader's cursor unrepresentable — whichever
/// call owns the reader owns the cursor for its whole duration.
///
/// The two operations share one decoding engine:
///
/// ```text
///   FeedReader
///   ├── movies()   batch: whole array → MovieIndex, synchronous
///   └── reviews()  streaming: producer task → record/error channels
/// ```
pub struct FeedReader<R: Read> {
    pub(crate) json: JsonStreamReader<R>,
}

impl<R: Read> FeedReader<R> {
    /// Create a reader over the given byte source.
    ///
    /// The source must be positioned at the start of a JSON document whose
    /// top-level value is an array. Nothing is read until a decode call is
    /// made.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self {
            json: JsonStreamReader::new(source),
        }
    }

    /// Consume the entire feed eagerly and return a title → year index.
    ///
    /// Blocks the calling thread until the array is fully consumed or a
    /// structural error terminates the call. Failure is atomic: on `Err`
    /// there is no usable result, and entries decoded before the bad
    /// element are discarded, never exposed.
    ///
    /// Duplicate titles are resolved last-write-wins — a later element
    /// silently overwrites an earlier one with the same title.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the input is not a JSON array or any
    /// element fails to parse.
    pub fn movies(self) -> Result<MovieIndex, DecodeError> {
        let mut elements = ElementDecoder::new(self.json, RecordKind::Movies);
        let mut index = MovieIndex::new();
        while let Some(movie) = elements.next::<Movie>()? {
            index.insert(movie.title, movie.year);
        }
        debug!(movies = index.len(), "movie feed decoded");
        Ok(index)
    }
}
