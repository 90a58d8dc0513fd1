use crate::wordlist::trie::node::{NodeId, TrieNode};
use crate::wordlist::trie::trie::Trie;

/// Walks the populated children of a frozen node in ascending symbol order.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: Option<usize>,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let mut rv = None;
        if let Some(idx) = self.idx {
            rv = self.node.children[idx].map(|child| (idx, child));
            self.idx = self.node.next_child[idx];
        }
        rv
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (usize, NodeId);
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        if self.children[0].is_some() {
            TrieCursor { idx: Some(0), node: self }
        } else {
            TrieCursor { idx: self.next_child[0], node: self }
        }
    }
}

/// Lazy preorder walk over a subtree, yielding the dictionary index stored at
/// every node that ends a complete permuterm.
///
/// A node is reported before its children, and children are visited `a` to `z`
/// with `END` last. The same index shows up once per matching rotation, so
/// callers that want distinct words have to de-duplicate.
#[derive(Debug, Clone)]
pub struct Matches<'t> {
    trie: &'t Trie,
    stack: Vec<NodeId>,
}

impl<'t> Matches<'t> {
    pub(crate) fn new(trie: &'t Trie, start: NodeId) -> Matches<'t> {
        Matches { trie, stack: vec![start] }
    }

    pub(crate) fn empty(trie: &'t Trie) -> Matches<'t> {
        Matches { trie, stack: vec![] }
    }
}

impl<'t> Iterator for Matches<'t> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.trie.node(id);
            if !node.is_leaf() {
                let first = self.stack.len();
                self.stack.extend(node.into_iter().map(|(_, child)| child));
                self.stack[first..].reverse();
            }
            if node.match_index.is_some() {
                return node.match_index;
            }
        }
        None
    }
}
