//! # lexdawg - Directed Acyclic Word Graphs
//!
//! A dictionary engine that stores a word set as a minimized acyclic word
//! graph and answers lookups against it.
//!
//! Words are first inserted into a trie. [`Dawg::reduce`] then merges every
//! group of structurally identical subtrees bottom-up, so common suffixes are
//! stored once just like common prefixes. The reduced graph supports:
//!
//! 1. **Membership**: [`Dawg::contains`], [`Dawg::contains_prefix`]
//! 2. **Prefix enumeration**: [`Dawg::search_with_prefix`]
//! 3. **Wildcards**: [`Dawg::search`] with `?` and `*`
//! 4. **Fuzzy matching**: [`Dawg::search_within_distance`]
//!
//! Every multi-word result comes back in lexicographic order.
//!
//! ## Example
//!
//! ```
//! use lexdawg::Dawg;
//!
//! let mut dawg = Dawg::new();
//! dawg.add_all(["ash", "ashes", "ashes", "ashley"].iter().map(|w| w.chars()));
//! dawg.reduce();
//!
//! assert_eq!(dawg.word_count(), 3);
//! assert!(dawg.contains_prefix("ashl".chars()));
//!
//! let counted = dawg.search_with_count("a*".chars()).unwrap();
//! assert_eq!(counted[1], ("ashes".chars().collect(), 2));
//! ```
//!
//! ## Symbols
//!
//! The graph is generic over its edge label through the [`Symbol`] trait,
//! implemented for `char` and `u8`. Case folding or any other normalization
//! is left to the caller.

mod dawg;
mod distance;
mod error;
mod iter;
mod node;
mod query;
mod reduce;
mod symbol;
mod wildcard;


pub use dawg::{Dawg, GraphStats};
pub use error::{DawgError, Result};
pub use iter::Words;
pub use symbol::Symbol;
