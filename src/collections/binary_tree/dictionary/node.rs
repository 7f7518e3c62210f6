use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::Comparator;

/// An owned, possibly-empty link to a subtree. All of the recursive work
/// happens here; the dictionary itself only keeps the root and the counters.
pub(crate) struct Branch<K, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
}

impl<K, V> Branch<K, V> {
    pub const fn empty() -> Branch<K, V> {
        Branch(None)
    }

    pub fn insert<C: Comparator<K>>(&mut self, cmp: &C, key: K, value: V) -> Option<V> {
        match &mut self.0 {
            Some(node) => match cmp.cmp(&key, &node.key) {
                Ordering::Less => node.left.insert(cmp, key, value),
                Ordering::Greater => node.right.insert(cmp, key, value),
                Ordering::Equal => Some(mem::replace(&mut node.value, value)),
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: Branch(None),
                    right: Branch(None),
                    key,
                    value,
                }));
                None
            },
        }
    }

    pub fn get_entry<C: Comparator<K>>(&self, cmp: &C, key: &K) -> Option<(&K, &V)> {
        let node = self.0.as_deref()?;
        match cmp.cmp(key, &node.key) {
            Ordering::Less => node.left.get_entry(cmp, key),
            Ordering::Greater => node.right.get_entry(cmp, key),
            Ordering::Equal => Some((&node.key, &node.value)),
        }
    }

    pub fn get_mut<C: Comparator<K>>(&mut self, cmp: &C, key: &K) -> Option<&mut V> {
        let node = self.0.as_deref_mut()?;
        match cmp.cmp(key, &node.key) {
            Ordering::Less => node.left.get_mut(cmp, key),
            Ordering::Greater => node.right.get_mut(cmp, key),
            Ordering::Equal => Some(&mut node.value),
        }
    }

    pub fn remove_entry<C: Comparator<K>>(&mut self, cmp: &C, key: &K) -> Option<(K, V)> {
        // Compare first so the node borrow ends before a splice.
        let ordering = cmp.cmp(key, &self.0.as_ref()?.key);
        match ordering {
            Ordering::Less => self.0.as_mut()?.left.remove_entry(cmp, key),
            Ordering::Greater => self.0.as_mut()?.right.remove_entry(cmp, key),
            Ordering::Equal => self.splice_out(),
        }
    }

    /// Unlinks the node at this branch while keeping the search order of
    /// everything below it. With two children the node's entry is swapped
    /// with its in-order successor's (the leftmost of the right subtree),
    /// which has no left child and so splices out trivially.
    fn splice_out(&mut self) -> Option<(K, V)> {
        let mut node = self.0.take()?;

        if node.left.0.is_none() {
            self.0 = node.right.0.take();
            Some((node.key, node.value))
        } else if node.right.0.is_none() {
            self.0 = node.left.0.take();
            Some((node.key, node.value))
        } else {
            let (successor_key, successor_value) = node.right.take_first_entry()?;
            let key = mem::replace(&mut node.key, successor_key);
            let value = mem::replace(&mut node.value, successor_value);
            self.0 = Some(node);
            Some((key, value))
        }
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let node = self.0.as_deref()?;
        match node.left.first_entry() {
            Some(entry) => Some(entry),
            None => Some((&node.key, &node.value)),
        }
    }

    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let node = self.0.as_deref_mut()?;
        if node.left.0.is_some() {
            node.left.take_first_entry()
        } else {
            self.splice_out()
        }
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let node = self.0.as_deref()?;
        match node.right.last_entry() {
            Some(entry) => Some(entry),
            None => Some((&node.key, &node.value)),
        }
    }

    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let node = self.0.as_deref_mut()?;
        if node.right.0.is_some() {
            node.right.take_last_entry()
        } else {
            self.splice_out()
        }
    }

    /// In-order traversal bounded by the inclusive `from`/`to` keys, skipping
    /// subtrees that cannot intersect the range. Returns false once `visit`
    /// has asked to stop.
    pub fn for_each_range<C, F>(
        &self,
        cmp: &C,
        from: Option<&K>,
        to: Option<&K>,
        visit: &mut F,
    ) -> bool
    where
        C: Comparator<K>,
        F: FnMut(&K, &V) -> bool,
    {
        let Some(node) = self.0.as_deref() else {
            return true;
        };

        let above_from = from.is_none_or(|from| cmp.cmp(&node.key, from) != Ordering::Less);
        let below_to = to.is_none_or(|to| cmp.cmp(&node.key, to) != Ordering::Greater);

        if above_from && !node.left.for_each_range(cmp, from, to, visit) {
            return false;
        }
        if above_from && below_to && !visit(&node.key, &node.value) {
            return false;
        }
        if below_to && !node.right.for_each_range(cmp, from, to, visit) {
            return false;
        }
        true
    }
}

impl<K: Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => {
                writeln!(f, "{}", prefixed(&node.left, "┌    "))?;
                writeln!(f, "({:?}: {:?})", node.key, node.value)?;
                write!(f, "{}", prefixed(&node.right, "└    "))
            },
            None => write!(f, "-"),
        }
    }
}

/// Renders a subtree with every line prefixed, so nesting reads as columns.
fn prefixed<K: Debug, V: Debug>(branch: &Branch<K, V>, prefix: &str) -> String {
    format!("{branch:?}")
        .lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
