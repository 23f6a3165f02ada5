//! Word lists for Wordle solving
//!
//! The dictionary is an external asset: a text file with one word per line,
//! loaded once and shared by reference.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
pub use loader::{WordListError, load_dictionary};
