use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::{Branch, Comparator, Node, TreeDictionary};
use crate::collections::contiguous::Stack;
use crate::collections::traits::{Cursor, IteratorExhausted};

impl<'a, K, V, C: Comparator<K>> IntoIterator for &'a TreeDictionary<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy in-order traversal, optionally bounded on both sides. The stack holds
/// the pending left spine: every node that has been reached but not yet
/// visited, topmost being the next in order. No recursion, no per-node state.
pub struct Iter<'a, K, V, C: Comparator<K>> {
    stack: Stack<&'a Node<K, V>>,
    cmp: &'a C,
    from: Option<&'a K>,
    to: Option<&'a K>,
}

impl<'a, K, V, C: Comparator<K>> Iter<'a, K, V, C> {
    pub(crate) fn new(
        root: &'a Branch<K, V>,
        cmp: &'a C,
        from: Option<&'a K>,
        to: Option<&'a K>,
    ) -> Iter<'a, K, V, C> {
        let mut iter = Iter {
            stack: Stack::new(),
            cmp,
            from,
            to,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Descends along left children pushing every pending node. Nodes below
    /// the `from` bound are skipped along with their left subtrees; only
    /// their right subtrees can still hold keys in range.
    fn push_left_spine(&mut self, branch: &'a Branch<K, V>) {
        let mut current = branch.0.as_deref();

        while let Some(node) = current {
            match self.from {
                Some(from) if self.cmp.cmp(&node.key, from) == Ordering::Less => {
                    current = node.right.0.as_deref();
                },
                _ => {
                    self.stack.push(node);
                    current = node.left.0.as_deref();
                },
            }
        }
    }
}

impl<'a, K, V, C: Comparator<K>> Cursor<'a, K, V> for Iter<'a, K, V, C> {
    /// False once the stack runs out or the next key falls past the upper
    /// bound; everything still stacked beyond that point is out of range.
    fn has_next(&self) -> bool {
        match self.stack.top() {
            Some(node) => self
                .to
                .is_none_or(|to| self.cmp.cmp(&node.key, to) != Ordering::Greater),
            None => false,
        }
    }

    fn current(&self) -> Result<(&'a K, &'a V), IteratorExhausted> {
        if !self.has_next() {
            return Err(IteratorExhausted);
        }

        let node = *self.stack.top().ok_or(IteratorExhausted)?;
        Ok((&node.key, &node.value))
    }

    fn advance(&mut self) -> Result<(), IteratorExhausted> {
        if !self.has_next() {
            return Err(IteratorExhausted);
        }

        let node = self.stack.pop().ok_or(IteratorExhausted)?;
        self.push_left_spine(&node.right);
        Ok(())
    }
}

impl<'a, K, V, C: Comparator<K>> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current().ok()?;
        // current() just succeeded, so the cursor has somewhere to step from.
        self.advance().ok()?;
        Some(entry)
    }
}

impl<K, V, C: Comparator<K>> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C: Comparator<K>> IntoIterator for TreeDictionary<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

pub struct IntoIter<K, V, C: Comparator<K>>(TreeDictionary<K, V, C>);

impl<K, V, C: Comparator<K>> Iterator for IntoIter<K, V, C> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        // Pays the depth of the left spine on every call, which is fine for
        // a consuming walk.
        self.0.take_first_entry()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<K, V, C: Comparator<K>> FusedIterator for IntoIter<K, V, C> {}
