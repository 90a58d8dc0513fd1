//! Permuterm index: exact and wildcard (`X*`, `*X`, `X*Y`, `*X*`) word lookup
//! over a static dictionary, backed by a single 27-way trie holding every
//! rotation of every word.

pub mod alphabet;
pub mod errors;
pub mod log;
pub mod permuterm;
pub mod wordlist;

pub use crate::errors::IndexError;
pub use crate::wordlist::trie::searchconfig::SearchConfig;
pub use crate::wordlist::wordlist::{FileFormat, QueryResult, Wordlist};
