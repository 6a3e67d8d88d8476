//! Trie minimization.
//!
//! A single post-order pass replaces every node by the first node seen with
//! the same [`Signature`]. Children are always canonical before their parent
//! is fingerprinted, so equal signatures imply equal subgraphs and merging is
//! transitive.

use crate::dawg::Dawg;
use crate::node::{NodeKey, Signature};
use crate::symbol::Symbol;
use ahash::AHashMap as HashMap;

impl<T: Symbol> Dawg<T> {
    /// Minimizes the graph and freezes it.
    ///
    /// Afterwards no two nodes are interchangeable, [`len`](Dawg::len) reports
    /// the number of surviving nodes, and further insertion panics. Calling
    /// this again has no effect.
    pub fn reduce(&mut self) {
        if self.reduced {
            return;
        }

        let before = self.len();
        let mut registry: HashMap<Signature<T>, NodeKey> = HashMap::default();
        let mut canonical: HashMap<NodeKey, NodeKey> = HashMap::default();

        // (node, children already pushed)
        let mut stack = vec![(self.root, false)];

        while let Some((key, expanded)) = stack.pop() {
            if !expanded {
                stack.push((key, true));
                for &(_, child) in self.nodes[key].children.iter().rev() {
                    stack.push((child, false));
                }
                continue;
            }

            // Point every edge at its child's representative
            let node = &mut self.nodes[key];
            for (_, child) in node.children.iter_mut() {
                if let Some(&target) = canonical.get(&*child) {
                    *child = target;
                }
            }

            let signature = Signature::of(node);
            match registry.get(&signature) {
                Some(&existing) => {
                    canonical.insert(key, existing);
                    self.nodes.remove(key);
                }
                None => {
                    registry.insert(signature, key);
                }
            }
        }

        // No proper descendant accepts the same finite language as the root
        debug_assert!(self.nodes.contains_key(self.root));

        self.reduced = true;

        tracing::debug!(
            words = self.word_count(),
            nodes_before = before,
            nodes_after = self.len(),
            "reduced word graph"
        );
    }
}
