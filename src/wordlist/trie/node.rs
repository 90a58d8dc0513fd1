use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet::{get_symbol, ALPHABET_LEN};

/// Load-phase node. Children live in the builder's arena and are linked through
/// `Cell`s, so a shared reference is enough to grow the trie.
#[derive(Default)]
pub struct BuilderNode<'a> {
    pub(crate) children: [Cell<Option<&'a BuilderNode<'a>>>; ALPHABET_LEN],
    pub(crate) match_index: Cell<Option<usize>>,
}

impl<'a> BuilderNode<'a> {
    pub(crate) fn get_child(&self, idx: usize) -> Option<&'a BuilderNode<'a>> {
        self.children[idx].get()
    }

    pub(crate) fn get_or_create_child(&self, idx: usize,
                                      arena: &'a Arena<BuilderNode<'a>>) -> &'a BuilderNode<'a> {
        match self.get_child(idx) {
            Some(child) => child,
            None => {
                let child: &'a BuilderNode<'a> = arena.alloc(BuilderNode::default());
                self.children[idx].set(Some(child));
                child
            }
        }
    }
}

impl Debug for BuilderNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderNode")
            .field("match_index", &self.match_index.get())
            .field("children", &self.children.iter()
                .enumerate()
                .filter(|(_, x)| x.get().is_some())
                .map(|(idx, _)| get_symbol(idx))
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Position of a node inside a frozen [`Trie`](crate::wordlist::trie::trie::Trie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// Query-phase node. Immutable once the trie is frozen.
#[derive(PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) match_index: Option<usize>,
    pub(crate) children: [Option<NodeId>; ALPHABET_LEN],
    pub(crate) next_child: [Option<usize>; ALPHABET_LEN],
}

impl TrieNode {
    pub(crate) fn new(match_index: Option<usize>) -> TrieNode {
        TrieNode {
            match_index,
            children: [None; ALPHABET_LEN],
            next_child: [None; ALPHABET_LEN],
        }
    }

    pub(crate) fn get_child(&self, idx: usize) -> Option<NodeId> {
        self.children[idx]
    }

    pub(crate) fn set_children(&mut self, children: [Option<NodeId>; ALPHABET_LEN]) {
        self.next_child = Self::build_next_child(&children);
        self.children = children;
    }

    /// For every slot, the next populated slot to its right.
    fn build_next_child(children: &[Option<NodeId>]) -> [Option<usize>; ALPHABET_LEN] {
        let mut next_child = [None; ALPHABET_LEN];
        let mut next_idx = None;
        for idx in (0..children.len()).rev() {
            next_child[idx] = next_idx;
            if children[idx].is_some() {
                next_idx = Some(idx)
            }
        }
        next_child
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children[0].is_none() && self.next_child[0].is_none()
    }

    /// Recursively copies a builder subtree into `nodes`, numbering nodes in preorder.
    pub(crate) fn from_builder(node: &BuilderNode<'_>, nodes: &mut Vec<TrieNode>) -> NodeId {
        let id = NodeId(nodes.len());
        nodes.push(TrieNode::new(node.match_index.get()));

        let mut children = [None; ALPHABET_LEN];
        (&node.children).iter().zip(children.iter_mut())
            .for_each(|(old, new)|
                *new = old.get().map(|x| Self::from_builder(x, nodes))
            );

        nodes[id.0].set_children(children);
        id
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("match_index", &self.match_index)
            .field("children", &self.into_iter()
                .map(|(idx, _)| get_symbol(idx))
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use typed_arena::Arena;
    use crate::alphabet::END_IDX;
    use crate::wordlist::trie::node::{BuilderNode, NodeId, TrieNode};

    #[test]
    fn creates_children_lazily() {
        let arena = Arena::new();
        let root: &BuilderNode = arena.alloc(BuilderNode::default());
        assert!(root.get_child(2).is_none());

        let c = root.get_or_create_child(2, &arena);
        let again = root.get_or_create_child(2, &arena);
        assert!(std::ptr::eq(c, again));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn freezes_in_preorder() {
        let arena = Arena::new();
        let root: &BuilderNode = arena.alloc(BuilderNode::default());
        root.get_or_create_child(END_IDX, &arena).match_index.set(Some(7));
        root.get_or_create_child(1, &arena)
            .get_or_create_child(0, &arena);

        let mut nodes = vec![];
        let id = TrieNode::from_builder(root, &mut nodes);
        assert_eq!(id, NodeId::ROOT);
        assert_eq!(nodes.len(), 4);
        // 'b' subtree comes before the END child
        assert_eq!(nodes[0].get_child(1), Some(NodeId(1)));
        assert_eq!(nodes[1].get_child(0), Some(NodeId(2)));
        assert_eq!(nodes[0].get_child(END_IDX), Some(NodeId(3)));
        assert_eq!(nodes[3].match_index, Some(7));
        assert!(nodes[2].is_leaf());
        assert!(!nodes[0].is_leaf());
    }
}
