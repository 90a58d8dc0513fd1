use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, get_symbol, END};
use crate::errors::IndexError;
use crate::wordlist::trie::iterators::Matches;
use crate::wordlist::trie::node::{NodeId, TrieNode};

/// Frozen permuterm trie.
///
/// Produced by [`TrieBuilder::build`](crate::wordlist::trie::trie_builder::TrieBuilder::build).
/// Nodes are stored in preorder, so node 0 is the root. The structure is never
/// mutated afterwards and can be shared freely between readers.
pub struct Trie {
    nodes: Vec<TrieNode>,
    entries: usize,
}

impl Trie {
    pub(crate) fn from_nodes(nodes: Vec<TrieNode>, entries: usize) -> Trie {
        Trie { nodes, entries }
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Number of complete permuterms stored.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn get_node(&self, key: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for c in key.chars() {
            current = self.node(current).get_child(get_idx(c)?)?;
        }
        Some(current)
    }

    /// Exact permuterm lookup; `permuterm` already contains its `END`.
    pub fn get(&self, permuterm: &str) -> Option<usize> {
        self.get_node(permuterm)
            .and_then(|id| self.node(id).match_index)
    }

    /// Looks up a whole word by walking `word + END`.
    ///
    /// A path that exists but ends on a node without an index means `word` is
    /// only a prefix of something indexed, which is reported as not found too.
    pub fn search(&self, word: &str) -> Result<usize, IndexError> {
        let mut key = String::with_capacity(word.len() + 1);
        key.push_str(word);
        key.push(END);
        self.get(&key)
            .ok_or_else(|| IndexError::NotFound { query: word.to_string() })
    }

    /// Finds the node spelled by `prefix`. The empty prefix is the root.
    pub fn locate_subtree(&self, prefix: &str) -> Result<NodeId, IndexError> {
        self.get_node(prefix)
            .ok_or_else(|| IndexError::NotFound { query: prefix.to_string() })
    }

    /// Dictionary indices of every complete permuterm under `node`, in preorder.
    pub fn collect(&self, node: NodeId) -> Matches<'_> {
        if node.0 < self.nodes.len() {
            Matches::new(self, node)
        } else {
            Matches::empty(self)
        }
    }

    /// Every entry of the trie, in preorder.
    pub fn list(&self) -> Matches<'_> {
        self.collect(NodeId::ROOT)
    }

    pub fn prefix_matches(&self, prefix: &str) -> Matches<'_> {
        match self.locate_subtree(prefix) {
            Ok(node) => self.collect(node),
            Err(_) => Matches::empty(self),
        }
    }

    /// Every stored permuterm with its index, in preorder.
    pub fn entries(&self) -> Vec<(String, usize)> {
        let mut result = vec![];
        let mut stack = vec![(NodeId::ROOT, String::new())];
        while let Some((id, path)) = stack.pop() {
            let node = self.node(id);
            let first = stack.len();
            for (idx, child) in node {
                let mut child_path = path.clone();
                child_path.push(get_symbol(idx));
                stack.push((child, child_path));
            }
            stack[first..].reverse();
            if let Some(index) = node.match_index {
                result.push((path, index));
            }
        }
        result
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_map();
        self.entries().iter().for_each(|(path, index)| { l.entry(path, index); });
        l.finish()
    }
}


#[cfg(test)]
mod tests {
    use typed_arena::Arena;
    use crate::errors::IndexError;
    use crate::permuterm::rotations;
    use crate::wordlist::trie::node::NodeId;
    use crate::wordlist::trie::trie::Trie;
    use crate::wordlist::trie::trie_builder::TrieBuilder;

    fn trie_of(words: &[&str]) -> Trie {
        let arena = Arena::new();
        let mut builder = TrieBuilder::new(&arena);
        words.iter().enumerate().for_each(|(i, word)| {
            rotations(word).for_each(|p| builder.insert(&p, i).unwrap());
        });
        builder.build()
    }

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let trie = trie_of(&words);
        words.iter().enumerate().for_each(|(i, word)| assert_eq!(trie.search(word).unwrap(), i));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let trie = trie_of(&["hello", "help", "goodbye", "good"]);
        for bad in ["he", "h", "lol", "banana", "", "HELLO"] {
            assert!(matches!(trie.search(bad), Err(IndexError::NotFound { .. })), "{}", bad);
        }
    }

    #[test]
    fn every_rotation_ends_at_the_word_index() {
        let words = ["abbas", "abbasid", "abbey"];
        let trie = trie_of(&words);
        for (i, word) in words.iter().enumerate() {
            for p in rotations(word) {
                assert_eq!(trie.get(&p), Some(i), "{}", p);
            }
        }
        assert_eq!(trie.len(), 6 + 8 + 6);
    }

    #[test]
    fn locates_subtrees() {
        let trie = trie_of(&["cat", "cats"]);
        assert_eq!(trie.locate_subtree("").unwrap(), NodeId::ROOT);
        assert!(trie.locate_subtree("cat").is_ok());
        assert!(matches!(trie.locate_subtree("dog"), Err(IndexError::NotFound { .. })));
        assert!(trie.locate_subtree("c1").is_err());
    }

    #[test]
    fn collects_in_preorder() {
        let trie = trie_of(&["cat", "cats"]);
        let node = trie.locate_subtree("cat").unwrap();
        // "cat$" sorts after "cats$" because END is the last symbol
        assert_eq!(trie.collect(node).collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(trie.prefix_matches("s").collect::<Vec<_>>(), vec![1]);
        assert!(trie.prefix_matches("x").next().is_none());
    }

    #[test]
    fn lists_every_permuterm() {
        let trie = trie_of(&["ab", "b"]);
        let entries = trie.entries();
        let paths: Vec<&str> = entries.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["ab$", "b$", "b$a", "$ab", "$b"]);
        assert_eq!(trie.list().collect::<Vec<_>>(), vec![0, 1, 0, 0, 1]);
    }

    #[test]
    fn empty_trie_has_only_a_root() {
        let trie = trie_of(&[]);
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.list().next().is_none());
        assert_eq!(format!("{:?}", trie), "{}");
    }
}
