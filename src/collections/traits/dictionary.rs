use super::{IteratorExhausted, KeyNotFound};

/// A key-value store. Implementations differ in how they place entries, but
/// every operation here behaves identically across them, so callers can hold
/// any `impl Dictionary` and stay indifferent to the backing structure.
///
/// Borrowed iterators hold `&self`, so the dictionary cannot be mutated while
/// one exists; there is no invalidation tracking beyond that. Any number of
/// iterators may be live at once, each advancing independently.
pub trait Dictionary<K, V> {
    /// The borrowed iterator over entries. It speaks both the [`Cursor`]
    /// protocol and [`Iterator`], driven by the same state.
    type Iter<'a>: Cursor<'a, K, V> + Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Stores `value` under `key`. If the key already has an entry its value
    /// is replaced and returned; the stored key is left untouched.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Returns true if there is a live entry for `key`.
    fn contains(&self, key: &K) -> bool;

    /// Returns the value stored under `key`.
    fn get(&self, key: &K) -> Result<&V, KeyNotFound>;

    /// Removes the entry for `key`, returning its value.
    fn remove(&mut self, key: &K) -> Result<V, KeyNotFound>;

    /// The number of live entries.
    fn len(&self) -> usize;

    /// Returns true if the dictionary contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every entry, passing each to `visit` until it returns false or
    /// the entries run out. The visiting order is the implementation's own.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&K, &V) -> bool;

    /// Returns an iterator over all entries.
    fn iter(&self) -> Self::Iter<'_>;
}

/// A [`Dictionary`] whose entries are held in comparator order, adding
/// iteration over an inclusive key range. Either bound may be left open.
pub trait OrderedDictionary<K, V>: Dictionary<K, V> {
    /// Visits the entries with keys in `[from, to]` in ascending order,
    /// passing each to `visit` until it returns false or the range runs out.
    fn for_each_range<F>(&self, from: Option<&K>, to: Option<&K>, visit: F)
    where
        F: FnMut(&K, &V) -> bool;

    /// Returns an iterator over the entries with keys in `[from, to]`, in
    /// ascending order.
    fn range<'a>(&'a self, from: Option<&'a K>, to: Option<&'a K>) -> Self::Iter<'a>;
}

/// The explicit iteration protocol: inspect the current entry, then advance.
/// Reading or advancing an exhausted cursor is an expected, recoverable
/// failure rather than a panic.
///
/// The lifetime is the borrow of the dictionary, so entries handed out by
/// [`current`](Cursor::current) outlive the cursor itself.
pub trait Cursor<'a, K, V> {
    /// Returns true if there is an entry left to read.
    fn has_next(&self) -> bool;

    /// Returns the entry the cursor is sitting on.
    fn current(&self) -> Result<(&'a K, &'a V), IteratorExhausted>;

    /// Steps the cursor past the current entry.
    fn advance(&mut self) -> Result<(), IteratorExhausted>;
}
