//! Bounded Levenshtein search.
//!
//! Each step down the graph extends one row of the classic edit-distance
//! matrix against the query. Paths sharing a prefix share the rows for it,
//! and a branch is abandoned as soon as every entry of its row exceeds the
//! bound, since appending symbols can never lower the minimum.

use crate::dawg::Dawg;
use crate::node::NodeKey;
use crate::symbol::Symbol;
use std::cmp::min;

struct DistanceSearch<'a, T> {
    dawg: &'a Dawg<T>,
    query: Vec<T>,
    max_distance: usize,
    word: Vec<T>,
    results: Vec<(Vec<T>, u32)>,
}

impl<T: Symbol> DistanceSearch<'_, T> {
    fn visit(&mut self, key: NodeKey, row: &[usize]) {
        let dawg = self.dawg;
        let node = &dawg.nodes[key];

        if node.terminal && row[row.len() - 1] <= self.max_distance {
            self.results.push((self.word.clone(), node.count));
        }

        if row.iter().copied().min().unwrap_or(0) > self.max_distance {
            return;
        }

        for &(symbol, child) in &node.children {
            let next = self.next_row(row, symbol);
            self.word.push(symbol);
            self.visit(child, &next);
            self.word.pop();
        }
    }

    /// Extends `row` by one graph symbol.
    fn next_row(&self, row: &[usize], symbol: T) -> Vec<usize> {
        let mut next = Vec::with_capacity(row.len());
        next.push(row[0] + 1);

        for column in 1..row.len() {
            let cost = if self.query[column - 1] == symbol { 0 } else { 1 };
            let value = min(
                min(
                    next[column - 1] + 1, // insertion
                    row[column] + 1,      // deletion
                ),
                row[column - 1] + cost, // substitution
            );
            next.push(value);
        }

        next
    }
}

impl<T: Symbol> Dawg<T> {
    /// Returns the words within `max_distance` edits of `query`, in
    /// lexicographic order.
    ///
    /// An edit is a single-symbol insertion, deletion or substitution.
    pub fn search_within_distance<I: IntoIterator<Item = T>>(
        &self,
        query: I,
        max_distance: usize,
    ) -> Vec<Vec<T>> {
        self.search_within_distance_count(query, max_distance)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    /// Like [`search_within_distance`](Dawg::search_within_distance), pairing
    /// each word with the number of times it was inserted.
    pub fn search_within_distance_count<I: IntoIterator<Item = T>>(
        &self,
        query: I,
        max_distance: usize,
    ) -> Vec<(Vec<T>, u32)> {
        let query: Vec<T> = query.into_iter().collect();
        let first_row: Vec<usize> = (0..=query.len()).collect();

        let mut search = DistanceSearch {
            dawg: self,
            query,
            max_distance,
            word: Vec::new(),
            results: Vec::new(),
        };
        search.visit(self.root, &first_row);

        tracing::trace!(
            query_len = search.query.len(),
            max_distance,
            matches = search.results.len(),
            "distance search"
        );
        search.results
    }
}

#[cfg(test)]
mod tests {
    use crate::Dawg;

    const SAMPLE: [&str; 40] = [
        "abhor", "abuzz", "accept", "acorn", "agony", "albay", "albin", "algin", "alisa",
        "almug", "altai", "amato", "ampyx", "aneto", "arbil", "arrow", "artha", "aruba",
        "athie", "auric", "aurum", "cap", "common", "dime", "eyes", "foot",
        "likeablelanguage", "lonely", "look", "nasty", "pet", "psychotic", "quilt", "shock",
        "smalldusty", "sore", "steel", "suit", "tank", "thrill",
    ];

    fn build(words: &[&str]) -> Dawg<char> {
        let mut dawg = Dawg::new();
        dawg.add_all(words.iter().map(|w| w.chars()));
        dawg.reduce();
        dawg
    }

    fn within(dawg: &Dawg<char>, query: &str, distance: usize) -> Vec<String> {
        dawg.search_within_distance(query.chars(), distance)
            .into_iter()
            .map(|w| w.into_iter().collect())
            .collect()
    }

    #[test]
    fn test_sample_set() {
        let dawg = build(&SAMPLE);
        assert_eq!(within(&dawg, "arie", 2), vec!["arbil", "athie", "auric"]);
    }

    #[test]
    fn test_zero_distance_is_exact_match() {
        let dawg = build(&SAMPLE);
        assert_eq!(within(&dawg, "look", 0), vec!["look"]);
        assert!(within(&dawg, "lookk", 0).is_empty());
    }

    #[test]
    fn test_single_edits() {
        let dawg = build(&["cap", "cape", "cop", "cup", "map", "tap"]);
        // substitution, insertion and deletion each cost one
        assert_eq!(
            within(&dawg, "cap", 1),
            vec!["cap", "cape", "cop", "cup", "map", "tap"]
        );
        assert_eq!(within(&dawg, "ca", 1), vec!["cap"]);
    }

    #[test]
    fn test_empty_query() {
        let dawg = build(&["a", "ab", "abc"]);
        assert_eq!(within(&dawg, "", 2), vec!["a", "ab"]);
    }

    #[test]
    fn test_with_count() {
        let mut dawg = Dawg::new();
        dawg.add_all(["pet", "pet", "pit", "pot"].iter().map(|w| w.chars()));
        dawg.reduce();

        let found: Vec<(String, u32)> = dawg
            .search_within_distance_count("pat".chars(), 1)
            .into_iter()
            .map(|(w, c)| (w.into_iter().collect(), c))
            .collect();
        assert_eq!(
            found,
            vec![
                ("pet".to_string(), 2),
                ("pit".to_string(), 1),
                ("pot".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_shared_suffixes_reported_per_word() {
        let dawg = build(&["bake", "cake", "fake"]);
        assert_eq!(within(&dawg, "lake", 1), vec!["bake", "cake", "fake"]);
    }
}
