use crate::dawg::Dawg;
use crate::iter::Words;
use crate::symbol::Symbol;

impl<T: Symbol> Dawg<T> {
    /// Returns true if `word` was inserted.
    pub fn contains<I: IntoIterator<Item = T>>(&self, word: I) -> bool {
        self.find(word)
            .is_some_and(|key| self.nodes[key].terminal)
    }

    /// Returns true if some inserted word starts with `prefix`.
    pub fn contains_prefix<I: IntoIterator<Item = T>>(&self, prefix: I) -> bool {
        // Every node below the root leads to a word; only the root can be bare
        self.find(prefix)
            .is_some_and(|key| !self.nodes[key].is_empty())
    }

    /// Returns every word starting with `prefix`, in lexicographic order.
    ///
    /// The prefix itself is included when it is a word.
    pub fn search_with_prefix<I: IntoIterator<Item = T>>(&self, prefix: I) -> Vec<Vec<T>> {
        self.words_with_prefix(prefix).collect()
    }

    /// Like [`search_with_prefix`](Dawg::search_with_prefix), pairing each
    /// word with the number of times it was inserted.
    pub fn search_with_prefix_count<I: IntoIterator<Item = T>>(
        &self,
        prefix: I,
    ) -> Vec<(Vec<T>, u32)> {
        let mut words = self.words_with_prefix(prefix);
        std::iter::from_fn(|| words.next_entry()).collect()
    }

    /// Returns a lazy iterator over the words starting with `prefix`.
    pub fn words_with_prefix<I: IntoIterator<Item = T>>(&self, prefix: I) -> Words<'_, T> {
        let prefix: Vec<T> = prefix.into_iter().collect();
        let start = self.find(prefix.iter().copied());
        tracing::trace!(prefix_len = prefix.len(), found = start.is_some(), "prefix lookup");
        Words::new(self, start, prefix)
    }
}
