use typed_arena::Arena;

use crate::alphabet::{get_idx, symbols};
use crate::errors::IndexError;
use crate::wordlist::trie::node::{BuilderNode, TrieNode};
use crate::wordlist::trie::trie::Trie;

/// Load-phase permuterm trie.
///
/// Nodes are allocated in a caller-owned arena and linked as they are first
/// needed. Once every permuterm is in, [`TrieBuilder::build`] freezes the
/// graph into a [`Trie`] and the arena can be dropped.
pub struct TrieBuilder<'a> {
    root: &'a BuilderNode<'a>,
    arena: &'a Arena<BuilderNode<'a>>,
    entries: usize,
}

impl<'a> TrieBuilder<'a> {
    pub fn new(arena: &'a Arena<BuilderNode<'a>>) -> TrieBuilder<'a> {
        TrieBuilder {
            root: arena.alloc(BuilderNode::default()),
            arena,
            entries: 0,
        }
    }

    /// Inserts one permuterm tagged with `dic_index`.
    ///
    /// Every symbol is checked before the trie is touched, so a rejected
    /// permuterm leaves no nodes behind. A permuterm that already carries an
    /// index is reported as a duplicate and keeps its first index.
    pub fn insert(&mut self, permuterm: &str, dic_index: usize) -> Result<(), IndexError> {
        let path = symbols(permuterm)?;

        let mut current = self.root;
        for idx in path {
            current = current.get_or_create_child(idx, self.arena);
        }

        if current.match_index.get().is_some() {
            return Err(IndexError::DuplicateEntry { entry: permuterm.to_string() });
        }
        current.match_index.set(Some(dic_index));
        self.entries += 1;
        Ok(())
    }

    pub fn add_all<'f, I>(&mut self, items: I, dic_index: usize) -> Result<(), IndexError>
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().try_for_each(|x| self.insert(x, dic_index))
    }

    /// Exact permuterm lookup during the load phase (no `END` appended).
    pub fn get(&self, permuterm: &str) -> Option<usize> {
        let mut current = self.root;
        for c in permuterm.chars() {
            current = current.get_child(get_idx(c)?)?;
        }
        current.match_index.get()
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn build(self) -> Trie {
        let mut nodes = Vec::with_capacity(self.arena.len());
        TrieNode::from_builder(self.root, &mut nodes);
        Trie::from_nodes(nodes, self.entries)
    }
}


#[cfg(test)]
mod tests {
    use typed_arena::Arena;
    use crate::errors::IndexError;
    use crate::wordlist::trie::trie_builder::TrieBuilder;

    #[test]
    fn inserts_and_finds_permuterms() {
        let arena = Arena::new();
        let mut builder = TrieBuilder::new(&arena);
        builder.add_all(vec!["abc$", "bc$a", "c$ab", "$abc"], 0).unwrap();
        assert_eq!(builder.len(), 4);
        assert_eq!(builder.get("bc$a"), Some(0));
        assert_eq!(builder.get("bc"), None);
        assert_eq!(builder.get("xyz$"), None);
    }

    #[test]
    fn rejects_duplicates_and_keeps_first_index() {
        let arena = Arena::new();
        let mut builder = TrieBuilder::new(&arena);
        builder.insert("dog$", 0).unwrap();
        match builder.insert("dog$", 1) {
            Err(IndexError::DuplicateEntry { entry }) => assert_eq!(entry, "dog$"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(builder.get("dog$"), Some(0));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn rejects_invalid_symbols_without_growing() {
        let arena = Arena::new();
        let mut builder = TrieBuilder::new(&arena);
        let before = builder.node_count();
        assert!(matches!(builder.insert("a1b$", 0), Err(IndexError::InvalidSymbol { symbol: '1', .. })));
        assert!(matches!(builder.insert("Ab$", 0), Err(IndexError::InvalidSymbol { symbol: 'A', .. })));
        assert_eq!(builder.node_count(), before);
        assert!(builder.is_empty());
    }

    #[test]
    fn build_preserves_entries() {
        let arena = Arena::new();
        let mut builder = TrieBuilder::new(&arena);
        builder.add_all(vec!["ab$", "b$a", "$ab"], 3).unwrap();
        let nodes = builder.node_count();
        let trie = builder.build();
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.get("b$a"), Some(3));
    }
}
