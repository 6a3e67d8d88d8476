use std::fmt::Debug;
use std::hash::Hash;

/// Edge label type of a [`Dawg`](crate::Dawg).
///
/// - `Copy`: edges store labels by value
/// - `Ord`: children are kept in ascending symbol order
/// - `Hash`: node signatures and the alphabet are hashed
/// - `Debug`: symbols are rendered in error messages
///
/// The two associated constants are the wildcards understood by
/// [`Dawg::search`](crate::Dawg::search).
pub trait Symbol: Copy + Eq + Ord + Hash + Debug {
    /// Matches exactly one symbol.
    const ANY: Self;

    /// Matches zero or more symbols.
    const ANY_RUN: Self;

    /// Returns true for either wildcard.
    #[inline]
    fn is_wildcard(&self) -> bool {
        *self == Self::ANY || *self == Self::ANY_RUN
    }
}

impl Symbol for char {
    const ANY: Self = '?';
    const ANY_RUN: Self = '*';
}

impl Symbol for u8 {
    const ANY: Self = b'?';
    const ANY_RUN: Self = b'*';
}
