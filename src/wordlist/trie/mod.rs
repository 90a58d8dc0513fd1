pub mod trie;
pub mod trie_builder;
pub mod searchconfig;

mod node;
mod iterators;

pub use iterators::Matches;
pub use node::{BuilderNode, NodeId};
