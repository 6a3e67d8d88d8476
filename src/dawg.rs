use crate::node::{Node, NodeKey};
use crate::symbol::Symbol;
use ahash::AHashSet as HashSet;
use slotmap::SlotMap;

/// A directed acyclic word graph.
///
/// Words are inserted into a plain trie first. [`reduce`](Dawg::reduce) then
/// merges every pair of structurally identical subtrees, after which the
/// graph is read-only. All queries work in either state.
///
/// # Example
///
/// ```
/// use lexdawg::Dawg;
///
/// let mut dawg = Dawg::new();
/// dawg.add_all(["tap", "taps", "top", "tops"].iter().map(|w| w.chars()));
/// dawg.reduce();
///
/// assert!(dawg.contains("tops".chars()));
/// assert_eq!(dawg.word_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Dawg<T> {
    /// Arena owning every live node
    pub(crate) nodes: SlotMap<NodeKey, Node<T>>,

    /// Entry node; spells the empty word
    pub(crate) root: NodeKey,

    /// Every symbol seen during insertion
    pub(crate) alphabet: HashSet<T>,

    /// Number of distinct words inserted
    word_count: usize,

    /// Nodes created by insertion, root excluded
    trie_nodes: usize,

    /// Set once `reduce` has run
    pub(crate) reduced: bool,
}

impl<T: Symbol> Dawg<T> {
    /// Creates an empty graph holding only the root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new());

        Self {
            nodes,
            root,
            alphabet: HashSet::default(),
            word_count: 0,
            trie_nodes: 0,
            reduced: false,
        }
    }

    /// Inserts a word.
    ///
    /// Inserting the same word again does not change [`word_count`](Dawg::word_count)
    /// but bumps the count reported by [`search_with_count`](Dawg::search_with_count).
    ///
    /// # Panics
    ///
    /// Panics if the graph has already been reduced.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, word: I) {
        self.add_with_count(word, 1);
    }

    /// Inserts a word as if it had been added `count` times.
    ///
    /// # Panics
    ///
    /// Panics if the graph has already been reduced.
    pub fn add_with_count<I: IntoIterator<Item = T>>(&mut self, word: I, count: u32) {
        assert!(
            !self.reduced,
            "Cannot add words after the graph has been reduced"
        );

        let mut current = self.root;
        for symbol in word {
            self.alphabet.insert(symbol);
            current = match self.nodes[current].child(symbol) {
                Some(next) => next,
                None => {
                    let next = self.nodes.insert(Node::new());
                    self.nodes[current].insert_child(symbol, next);
                    self.trie_nodes += 1;
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
        node.count = node.count.saturating_add(count);
    }

    /// Inserts every word of `words`, in order.
    ///
    /// # Panics
    ///
    /// Panics if the graph has already been reduced.
    pub fn add_all<W, I>(&mut self, words: W)
    where
        W: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        for word in words {
            self.add(word);
        }
    }

    /// Returns the number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the number of nodes below the root.
    ///
    /// Before [`reduce`](Dawg::reduce) this is the size of the trie; after it,
    /// the number of distinct nodes that survived merging.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns true if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns true once [`reduce`](Dawg::reduce) has run.
    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Returns size statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            word_count: self.word_count,
            node_count: self.len(),
            trie_node_count: self.trie_nodes,
        }
    }

    /// Walks from the root along `prefix`.
    pub(crate) fn find<I: IntoIterator<Item = T>>(&self, prefix: I) -> Option<NodeKey> {
        prefix
            .into_iter()
            .try_fold(self.root, |key, symbol| self.nodes[key].child(symbol))
    }
}

/// Size statistics of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Distinct words inserted
    pub word_count: usize,
    /// Live nodes below the root
    pub node_count: usize,
    /// Nodes the unminimized trie had below the root
    pub trie_node_count: usize,
}

impl GraphStats {
    /// Returns the node count as a percentage of the trie's node count.
    pub fn reduction_ratio(&self) -> f64 {
        if self.trie_node_count == 0 {
            0.0
        } else {
            (self.node_count as f64 / self.trie_node_count as f64) * 100.0
        }
    }
}

impl<T: Symbol> Default for Dawg<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol, I: IntoIterator<Item = T>> Extend<I> for Dawg<T> {
    fn extend<W: IntoIterator<Item = I>>(&mut self, words: W) {
        self.add_all(words);
    }
}

/// Collecting words yields a reduced graph.
impl<T: Symbol, I: IntoIterator<Item = T>> FromIterator<I> for Dawg<T> {
    fn from_iter<W: IntoIterator<Item = I>>(words: W) -> Self {
        let mut dawg = Dawg::new();
        dawg.add_all(words);
        dawg.reduce();
        dawg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let dawg = Dawg::<char>::new();
        assert_eq!(dawg.len(), 0);
        assert_eq!(dawg.word_count(), 0);
        assert!(dawg.is_empty());
        assert!(!dawg.is_reduced());
    }

    #[test]
    fn test_add_single() {
        let mut dawg = Dawg::new();
        dawg.add("axe".chars());
        assert_eq!(dawg.word_count(), 1);
        assert_eq!(dawg.len(), 3);
        assert!(!dawg.is_empty());
    }

    #[test]
    fn test_add_shares_prefixes() {
        let mut dawg = Dawg::new();
        dawg.add("ash".chars());
        dawg.add("ashley".chars());
        assert_eq!(dawg.len(), 6);
        assert_eq!(dawg.word_count(), 2);
    }

    #[test]
    fn test_duplicate_bumps_count_only() {
        let mut dawg = Dawg::new();
        dawg.add("ashes".chars());
        dawg.add("ashes".chars());
        assert_eq!(dawg.word_count(), 1);

        let key = dawg.find("ashes".chars()).expect("word should exist");
        assert_eq!(dawg.nodes[key].count, 2);
    }

    #[test]
    fn test_add_with_count() {
        let mut dawg = Dawg::new();
        dawg.add_with_count("cap".chars(), 5);
        dawg.add("cap".chars());

        let key = dawg.find("cap".chars()).expect("word should exist");
        assert_eq!(dawg.nodes[key].count, 6);
        assert_eq!(dawg.word_count(), 1);
    }

    #[test]
    fn test_add_empty_word_marks_root() {
        let mut dawg = Dawg::<char>::new();
        dawg.add("".chars());
        assert!(dawg.nodes[dawg.root].terminal);
        assert_eq!(dawg.word_count(), 1);
        assert_eq!(dawg.len(), 0);
    }

    #[test]
    fn test_add_all_accepts_lazy_input() {
        let words = ["ash", "ashley", "simpson"];
        let mut dawg = Dawg::new();
        dawg.add_all(words.iter().map(|w| w.chars()));
        assert_eq!(dawg.word_count(), 3);

        let mut empty = Dawg::<char>::new();
        empty.add_all(std::iter::empty::<Vec<char>>());
        assert_eq!(empty.word_count(), 0);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_extend() {
        let mut dawg = Dawg::new();
        dawg.extend(vec![vec![1u8, 2, 3], vec![1, 2, 4]]);
        assert_eq!(dawg.word_count(), 2);
        assert_eq!(dawg.len(), 4);
    }

    #[test]
    fn test_from_iter_reduces() {
        let dawg: Dawg<char> = ["tap", "top"].iter().map(|w| w.chars()).collect();
        assert!(dawg.is_reduced());
        assert_eq!(dawg.word_count(), 2);
    }

    #[test]
    #[should_panic(expected = "Cannot add words after the graph has been reduced")]
    fn test_add_after_reduce_panics() {
        let mut dawg = Dawg::new();
        dawg.add("ash".chars());
        dawg.reduce();
        dawg.add("ashley".chars());
    }

    #[test]
    fn test_stats() {
        let mut dawg = Dawg::new();
        dawg.add_all(["tap", "taps", "top", "tops"].iter().map(|w| w.chars()));
        let before = dawg.stats();
        assert_eq!(before.trie_node_count, 7);
        assert_eq!(before.node_count, 7);
        assert_eq!(before.reduction_ratio(), 100.0);

        dawg.reduce();
        let after = dawg.stats();
        assert_eq!(after.word_count, 4);
        assert_eq!(after.trie_node_count, 7);
        assert!(after.node_count < after.trie_node_count);
    }

    #[test]
    fn test_empty_stats_ratio() {
        let dawg = Dawg::<u8>::new();
        assert_eq!(dawg.stats().reduction_ratio(), 0.0);
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dawg<char>>();
    }
}
