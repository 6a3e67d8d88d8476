use slotmap::new_key_type;

new_key_type! {
    /// Handle of a node in a graph's arena.
    pub(crate) struct NodeKey;
}

/// A vertex of the word graph.
///
/// After minimization a node may be reachable through several parents, so
/// edges store arena handles rather than owning their children.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// A word ends here.
    pub terminal: bool,
    /// How many times the word ending here was inserted.
    pub count: u32,
    /// Outgoing edges, sorted by symbol with unique keys.
    pub children: Vec<(T, NodeKey)>,
}

impl<T: Ord + Copy> Node<T> {
    pub(crate) fn new() -> Self {
        Self {
            terminal: false,
            count: 0,
            children: Vec::new(),
        }
    }

    /// Looks up the child reached through `symbol`.
    #[inline]
    pub(crate) fn child(&self, symbol: T) -> Option<NodeKey> {
        self.children
            .binary_search_by(|(s, _)| s.cmp(&symbol))
            .ok()
            .map(|i| self.children[i].1)
    }

    /// Inserts an edge, keeping the edge list sorted.
    ///
    /// An existing edge with the same symbol is replaced.
    pub(crate) fn insert_child(&mut self, symbol: T, key: NodeKey) {
        match self.children.binary_search_by(|(s, _)| s.cmp(&symbol)) {
            Ok(i) => self.children[i].1 = key,
            Err(i) => self.children.insert(i, (symbol, key)),
        }
    }

    /// True when no word passes through or ends at this node.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }
}

/// Structural fingerprint of a node whose children are already canonical.
///
/// Two nodes with equal signatures accept the same suffixes with the same
/// counts, so one can stand in for the other.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub(crate) struct Signature<T> {
    terminal: bool,
    count: u32,
    edges: Vec<(T, NodeKey)>,
}

impl<T: Copy> Signature<T> {
    pub(crate) fn of(node: &Node<T>) -> Self {
        Self {
            terminal: node.terminal,
            count: node.count,
            edges: node.children.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_children_stay_sorted() {
        let mut arena: SlotMap<NodeKey, Node<char>> = SlotMap::with_key();
        let a = arena.insert(Node::new());
        let b = arena.insert(Node::new());
        let c = arena.insert(Node::new());

        let mut node = Node::new();
        node.insert_child('c', c);
        node.insert_child('a', a);
        node.insert_child('b', b);

        let symbols: Vec<char> = node.children.iter().map(|(s, _)| *s).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
        assert_eq!(node.child('b'), Some(b));
        assert_eq!(node.child('z'), None);
    }

    #[test]
    fn test_insert_child_replaces_edge() {
        let mut arena: SlotMap<NodeKey, Node<char>> = SlotMap::with_key();
        let first = arena.insert(Node::new());
        let second = arena.insert(Node::new());

        let mut node = Node::new();
        node.insert_child('x', first);
        node.insert_child('x', second);

        assert_eq!(node.children.len(), 1);
        assert_eq!(node.child('x'), Some(second));
    }

    #[test]
    fn test_signature_equality() {
        let mut arena: SlotMap<NodeKey, Node<char>> = SlotMap::with_key();
        let leaf = arena.insert(Node::new());

        let mut left = Node::new();
        left.insert_child('s', leaf);
        let mut right = Node::new();
        right.insert_child('s', leaf);
        assert_eq!(Signature::of(&left), Signature::of(&right));

        right.terminal = true;
        right.count = 1;
        assert_ne!(Signature::of(&left), Signature::of(&right));
    }

    #[test]
    fn test_signature_includes_count() {
        let mut once = Node::<char>::new();
        once.terminal = true;
        once.count = 1;
        let mut twice = once.clone();
        twice.count = 2;

        assert_ne!(Signature::of(&once), Signature::of(&twice));
    }
}
