use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Comparator, Iter, NaturalOrder};
use crate::collections::traits::{Dictionary, KeyNotFound, OrderedDictionary};

/// A dictionary over a plain binary search tree, ordered by an injected
/// [`Comparator`]. On top of the point operations it can iterate any
/// inclusive key range in ascending order, pruning the subtrees that cannot
/// intersect it.
///
/// The tree never rebalances. Random insertion orders keep it around
/// logarithmic depth; sorted insertion degrades it to a list, and every
/// operation with it to linear time. That trade is inherent to the structure
/// and accepted here.
pub struct TreeDictionary<K, V, C: Comparator<K> = NaturalOrder> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
    pub(crate) cmp: C,
}

impl<K: Ord, V> TreeDictionary<K, V> {
    /// Creates an empty dictionary ordered by the keys' own [`Ord`].
    pub const fn new() -> TreeDictionary<K, V> {
        TreeDictionary::with_comparator(NaturalOrder)
    }
}

impl<K, V, C: Comparator<K>> TreeDictionary<K, V, C> {
    /// Creates an empty dictionary ordered by `cmp`. The comparator must
    /// stay consistent for as long as the dictionary holds entries.
    pub const fn with_comparator(cmp: C) -> TreeDictionary<K, V, C> {
        TreeDictionary {
            root: Branch::empty(),
            len: 0,
            cmp,
        }
    }

    /// Returns the number of entries.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the dictionary contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` under `key`. If the comparator reports an existing key
    /// as equal, that entry's value is replaced and returned; no duplicate
    /// node is ever created.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = self.root.insert(&self.cmp, key, value);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Returns the entry for the provided `key` as a key-value pair, or None
    /// if there is no entry.
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.root.get_entry(&self.cmp, key)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.get_entry(key).map(|(_, value)| value).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value stored under `key`, or None
    /// if there is no entry.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.root.get_mut(&self.cmp, key)
    }

    /// Returns true if there is an entry for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.get_entry(key).is_some()
    }

    /// Removes the entry for `key`, returning it if it exists.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let removed = self.root.remove_entry(&self.cmp, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Result<V, KeyNotFound> {
        self.remove_entry(key).map(|(_, value)| value).ok_or(KeyNotFound)
    }

    /// Returns the entry with the smallest key.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.first_entry()
    }

    /// Returns the value of the entry with the smallest key.
    pub fn first(&self) -> Option<&V> {
        self.first_entry().map(|entry| entry.1)
    }

    /// Removes and returns the entry with the smallest key.
    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let taken = self.root.take_first_entry();
        if taken.is_some() {
            self.len -= 1;
        }
        taken
    }

    /// Removes and returns the value of the entry with the smallest key.
    pub fn take_first(&mut self) -> Option<V> {
        self.take_first_entry().map(|entry| entry.1)
    }

    /// Returns the entry with the largest key.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.last_entry()
    }

    /// Returns the value of the entry with the largest key.
    pub fn last(&self) -> Option<&V> {
        self.last_entry().map(|entry| entry.1)
    }

    /// Removes and returns the entry with the largest key.
    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let taken = self.root.take_last_entry();
        if taken.is_some() {
            self.len -= 1;
        }
        taken
    }

    /// Removes and returns the value of the entry with the largest key.
    pub fn take_last(&mut self) -> Option<V> {
        self.take_last_entry().map(|entry| entry.1)
    }

    /// Visits every entry in ascending key order, passing each to `visit`
    /// until it returns false or the entries run out.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.for_each_range(None, None, visit);
    }

    /// Visits the entries with keys in `[from, to]` in ascending order.
    /// Either bound may be open. Subtrees outside the range are never
    /// descended into.
    pub fn for_each_range<F>(&self, from: Option<&K>, to: Option<&K>, mut visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.root.for_each_range(&self.cmp, from, to, &mut visit);
    }

    /// Returns an iterator over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        self.range(None, None)
    }

    /// Returns an iterator over the entries with keys in `[from, to]`, in
    /// ascending order. Either bound may be open.
    pub fn range<'a>(&'a self, from: Option<&'a K>, to: Option<&'a K>) -> Iter<'a, K, V, C> {
        Iter::new(&self.root, &self.cmp, from, to)
    }
}

impl<K, V, C: Comparator<K>> Dictionary<K, V> for TreeDictionary<K, V, C> {
    type Iter<'a>
        = Iter<'a, K, V, C>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        TreeDictionary::insert(self, key, value)
    }

    fn contains(&self, key: &K) -> bool {
        TreeDictionary::contains(self, key)
    }

    fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        TreeDictionary::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V, KeyNotFound> {
        TreeDictionary::remove(self, key)
    }

    fn len(&self) -> usize {
        TreeDictionary::len(self)
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        TreeDictionary::for_each(self, visit);
    }

    fn iter(&self) -> Iter<'_, K, V, C> {
        TreeDictionary::iter(self)
    }
}

impl<K, V, C: Comparator<K>> OrderedDictionary<K, V> for TreeDictionary<K, V, C> {
    fn for_each_range<F>(&self, from: Option<&K>, to: Option<&K>, visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        TreeDictionary::for_each_range(self, from, to, visit);
    }

    fn range<'a>(&'a self, from: Option<&'a K>, to: Option<&'a K>) -> Iter<'a, K, V, C> {
        TreeDictionary::range(self, from, to)
    }
}

impl<K: Ord, V> Default for TreeDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeDictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = TreeDictionary::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

impl<K: Debug, V: Debug, C: Comparator<K>> Debug for TreeDictionary<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeDictionary")
            .field("nodes", &format_args!("\n{:?}\n", &self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Debug, V: Debug, C: Comparator<K>> Display for TreeDictionary<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
