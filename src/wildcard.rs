//! Shell-style wildcard search.
//!
//! A pattern is compiled into literal, single-symbol (`?`) and run (`*`)
//! tokens. Matching walks the graph in symbol order while carrying the set of
//! pattern positions still alive, so each word is produced once and results
//! come out sorted. Positions are pruned through a memo table recording
//! whether a `(position, node)` pair can still reach a match.

use crate::dawg::Dawg;
use crate::error::{DawgError, Result};
use crate::node::NodeKey;
use crate::symbol::Symbol;
use ahash::{AHashMap as HashMap, AHashSet as HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<T> {
    Literal(T),
    /// Exactly one symbol
    Any,
    /// Zero or more symbols
    AnyRun,
}

/// A validated wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern<T> {
    tokens: Vec<Token<T>>,
}

impl<T: Symbol> Pattern<T> {
    /// Compiles `pattern`, rejecting symbols outside `alphabet`.
    ///
    /// Consecutive runs collapse into one.
    pub(crate) fn compile<I>(pattern: I, alphabet: &HashSet<T>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tokens = Vec::new();

        for (position, symbol) in pattern.into_iter().enumerate() {
            let token = if symbol == T::ANY_RUN {
                if tokens.last() == Some(&Token::AnyRun) {
                    continue;
                }
                Token::AnyRun
            } else if symbol == T::ANY {
                Token::Any
            } else if alphabet.contains(&symbol) {
                Token::Literal(symbol)
            } else {
                return Err(DawgError::invalid_pattern(position, &symbol));
            };
            tokens.push(token);
        }

        Ok(Self { tokens })
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }
}

struct Matcher<'a, T> {
    dawg: &'a Dawg<T>,
    pattern: &'a Pattern<T>,
    /// Whether pattern[position..] can match some path from node
    memo: HashMap<(usize, NodeKey), bool>,
    word: Vec<T>,
    results: Vec<(Vec<T>, u32)>,
}

impl<'a, T: Symbol> Matcher<'a, T> {
    fn new(dawg: &'a Dawg<T>, pattern: &'a Pattern<T>) -> Self {
        Self {
            dawg,
            pattern,
            memo: HashMap::default(),
            word: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Walks the graph depth-first in symbol order with an explicit stack of
    /// (node, index of the next child, live pattern positions).
    fn run(mut self) -> Vec<(Vec<T>, u32)> {
        let dawg = self.dawg;
        let pattern = self.pattern;
        let root = dawg.root;

        let mut states = Vec::new();
        self.add_state(&mut states, 0, root);
        if states.is_empty() {
            return self.results;
        }
        if dawg.nodes[root].terminal && states.contains(&pattern.len()) {
            self.results.push((Vec::new(), dawg.nodes[root].count));
        }

        let mut stack = vec![(root, 0, states)];
        while let Some((key, cursor, states)) = stack.last_mut() {
            let node = &dawg.nodes[*key];

            let Some(&(symbol, child)) = node.children.get(*cursor) else {
                stack.pop();
                // The root frame consumed no symbol
                if !stack.is_empty() {
                    self.word.pop();
                }
                continue;
            };
            *cursor += 1;

            let next = self.advance(states, symbol, child);
            if next.is_empty() {
                continue;
            }

            self.word.push(symbol);
            let child_node = &dawg.nodes[child];
            if child_node.terminal && next.contains(&pattern.len()) {
                self.results.push((self.word.clone(), child_node.count));
            }
            stack.push((child, 0, next));
        }

        self.results
    }

    /// Returns the positions alive at `child` after consuming `symbol`.
    fn advance(&mut self, states: &[usize], symbol: T, child: NodeKey) -> Vec<usize> {
        let pattern = self.pattern;
        let mut next = Vec::new();
        for &position in states {
            let target = match pattern.tokens.get(position) {
                Some(Token::Literal(expected)) if *expected == symbol => position + 1,
                Some(Token::Any) => position + 1,
                Some(Token::AnyRun) => position,
                _ => continue,
            };
            self.add_state(&mut next, target, child);
        }
        next
    }

    /// Adds `position` and everything reachable from it without consuming a
    /// symbol, keeping only positions that can still match from `key`.
    fn add_state(&mut self, states: &mut Vec<usize>, position: usize, key: NodeKey) {
        let mut position = position;
        loop {
            if !states.contains(&position) && self.viable(position, key) {
                states.push(position);
            }
            match self.pattern.tokens.get(position) {
                Some(Token::AnyRun) => position += 1,
                _ => break,
            }
        }
    }

    /// Fills the memo for `(position, key)` in post-order, using an explicit
    /// stack of (position, node, dependencies pushed).
    fn viable(&mut self, position: usize, key: NodeKey) -> bool {
        if let Some(&known) = self.memo.get(&(position, key)) {
            return known;
        }

        let mut stack = vec![(position, key, false)];
        let mut dependencies = Vec::new();

        while let Some((at, node, expanded)) = stack.pop() {
            if self.memo.contains_key(&(at, node)) {
                continue;
            }

            if expanded {
                let result = self.evaluate(at, node);
                self.memo.insert((at, node), result);
            } else {
                stack.push((at, node, true));
                self.dependencies(at, node, &mut dependencies);
                for (next_at, next_node) in dependencies.drain(..) {
                    if !self.memo.contains_key(&(next_at, next_node)) {
                        stack.push((next_at, next_node, false));
                    }
                }
            }
        }

        self.memo.get(&(position, key)).copied().unwrap_or(false)
    }

    /// Pairs whose viability decides `(position, key)`.
    fn dependencies(&self, position: usize, key: NodeKey, out: &mut Vec<(usize, NodeKey)>) {
        let node = &self.dawg.nodes[key];
        match self.pattern.tokens.get(position) {
            None => {}
            Some(Token::Literal(symbol)) => {
                out.extend(node.child(*symbol).map(|child| (position + 1, child)));
            }
            Some(Token::Any) => {
                out.extend(node.children.iter().map(|&(_, child)| (position + 1, child)));
            }
            Some(Token::AnyRun) => {
                out.push((position + 1, key));
                out.extend(node.children.iter().map(|&(_, child)| (position, child)));
            }
        }
    }

    /// Decides `(position, key)` once every dependency is in the memo.
    fn evaluate(&self, position: usize, key: NodeKey) -> bool {
        let node = &self.dawg.nodes[key];
        let known = |at: usize, child: NodeKey| {
            self.memo.get(&(at, child)).copied().unwrap_or(false)
        };

        match self.pattern.tokens.get(position) {
            None => node.terminal,
            Some(Token::Literal(symbol)) => node
                .child(*symbol)
                .is_some_and(|child| known(position + 1, child)),
            Some(Token::Any) => node
                .children
                .iter()
                .any(|&(_, child)| known(position + 1, child)),
            Some(Token::AnyRun) => {
                known(position + 1, key)
                    || node
                        .children
                        .iter()
                        .any(|&(_, child)| known(position, child))
            }
        }
    }
}

impl<T: Symbol> Dawg<T> {
    /// Returns the words matching a wildcard pattern, in lexicographic order.
    ///
    /// [`Symbol::ANY`] (`?`) matches exactly one symbol and [`Symbol::ANY_RUN`]
    /// (`*`) matches any run of symbols, the empty run included.
    ///
    /// # Errors
    ///
    /// Returns [`DawgError::InvalidPattern`] if the pattern holds a symbol that
    /// is neither a wildcard nor part of any inserted word. Validation happens
    /// before the graph is touched.
    ///
    /// # Example
    ///
    /// ```
    /// use lexdawg::Dawg;
    ///
    /// let mut dawg = Dawg::new();
    /// dawg.add_all(["ab", "as", "ash", "ashley"].iter().map(|w| w.chars()));
    /// dawg.reduce();
    ///
    /// let found: Vec<String> = dawg
    ///     .search("a?".chars())
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|w| w.into_iter().collect())
    ///     .collect();
    /// assert_eq!(found, ["ab", "as"]);
    /// ```
    pub fn search<I: IntoIterator<Item = T>>(&self, pattern: I) -> Result<Vec<Vec<T>>> {
        Ok(self
            .search_with_count(pattern)?
            .into_iter()
            .map(|(word, _)| word)
            .collect())
    }

    /// Like [`search`](Dawg::search), pairing each word with the number of
    /// times it was inserted.
    pub fn search_with_count<I: IntoIterator<Item = T>>(
        &self,
        pattern: I,
    ) -> Result<Vec<(Vec<T>, u32)>> {
        let pattern = Pattern::compile(pattern, &self.alphabet)?;
        let results = Matcher::new(self, &pattern).run();
        tracing::trace!(
            tokens = pattern.len(),
            matches = results.len(),
            "wildcard search"
        );
        Ok(results)
    }
}
