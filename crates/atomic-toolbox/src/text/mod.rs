//! Word lists, oxford-comma sentences and text scrubbing.

pub mod scrub;
pub mod sentence;
pub mod tokenize;

pub use sentence::ListFormatter;
pub use tokenize::{tokenize, WordInput};
