#![warn(clippy::pedantic)]

pub mod movie;
pub mod review;

pub use movie::{Movie, MovieIndex};
pub use review::Review;
