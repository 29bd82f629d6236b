#![warn(clippy::pedantic)]

pub mod error;
pub mod reader;

mod element_decoder;
mod streaming;

pub use error::{DecodeError, RecordKind};
pub use reader::FeedReader;
