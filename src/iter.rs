use crate::dawg::Dawg;
use crate::node::NodeKey;
use crate::symbol::Symbol;

/// Iterator over the words below a node, in ascending lexicographic order.
///
/// Walks the graph depth-first with an explicit stack of child cursors, so a
/// shared node is revisited once for every path that reaches it.
pub struct Words<'a, T> {
    dawg: &'a Dawg<T>,
    /// (node, index of the next child to visit)
    stack: Vec<(NodeKey, usize)>,
    /// Symbols spelled by the path to the top of the stack
    word: Vec<T>,
    /// The start node is terminal and has not been yielded yet
    pending: bool,
}

impl<'a, T: Symbol> Words<'a, T> {
    pub(crate) fn new(dawg: &'a Dawg<T>, start: Option<NodeKey>, prefix: Vec<T>) -> Self {
        match start {
            Some(key) => Self {
                dawg,
                stack: vec![(key, 0)],
                word: prefix,
                pending: dawg.nodes[key].terminal,
            },
            None => Self {
                dawg,
                stack: Vec::new(),
                word: prefix,
                pending: false,
            },
        }
    }

    /// Advances to the next terminal node, returning the word and its count.
    pub(crate) fn next_entry(&mut self) -> Option<(Vec<T>, u32)> {
        if self.pending {
            self.pending = false;
            let &(key, _) = self.stack.last()?;
            return Some((self.word.clone(), self.dawg.nodes[key].count));
        }

        loop {
            let (key, cursor) = self.stack.last_mut()?;
            let node = &self.dawg.nodes[*key];

            if let Some(&(symbol, child)) = node.children.get(*cursor) {
                *cursor += 1;
                self.word.push(symbol);
                self.stack.push((child, 0));

                let child_node = &self.dawg.nodes[child];
                if child_node.terminal {
                    return Some((self.word.clone(), child_node.count));
                }
            } else {
                self.stack.pop();
                // The start frame owns the prefix, which is never popped
                if !self.stack.is_empty() {
                    self.word.pop();
                }
            }
        }
    }
}

impl<T: Symbol> Iterator for Words<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().map(|(word, _)| word)
    }
}

impl<T: Symbol> Dawg<T> {
    /// Returns an iterator over every word, in lexicographic order.
    pub fn iter(&self) -> Words<'_, T> {
        Words::new(self, Some(self.root), Vec::new())
    }
}

impl<'a, T: Symbol> IntoIterator for &'a Dawg<T> {
    type Item = Vec<T>;
    type IntoIter = Words<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
