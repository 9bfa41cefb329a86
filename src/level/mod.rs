//! Level setup.
//!
//! Boards start with every tile paired: the generator deals `N` pairs of
//! equal values onto distinct interior cells and leaves the border and any
//! leftover interior cells empty.

mod generator;

pub use generator::LevelGenerator;
