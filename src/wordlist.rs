pub mod trie;
pub mod index;
pub mod dictionary;
pub mod query;
pub mod wordlist;
