use std::cmp::Ordering;

/// The ordering a [`TreeDictionary`](super::TreeDictionary) arranges its keys
/// by. Implementations must be pure and consistent for the lifetime of the
/// structure; an ordering that shifts underneath the tree breaks its search
/// invariant.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a comparator, so one-off orderings
/// don't need a named type.
pub trait Comparator<K> {
    fn cmp(&self, a: &K, b: &K) -> Ordering;
}

/// Compares keys by their [`Ord`] implementation. The default comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F: Fn(&K, &K) -> Ordering> Comparator<K> for F {
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
