use std::fmt::{Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::iter;
use std::mem;
use std::{cmp, fmt};

use super::{Iter, Keys, Values, ValuesMut};
use crate::collections::traits::{Dictionary, KeyNotFound};

/// Capacities never drop below this floor, so the probe arithmetic never
/// sees an empty table.
const MIN_CAP: usize = 17;

const INITIAL_CAP: usize = 17;

const GROWTH_FACTOR: usize = 2;

const MAX_LOAD_NUMERATOR: usize = 7;
const MIN_LOAD_NUMERATOR: usize = 2;
const LOAD_DENOMINATOR: usize = 10;

/// A dictionary over a flat slot table, relying on the keys implementing
/// [`Hash`]. Collisions are resolved by probing forward one slot at a time;
/// removals leave tombstones behind so the probe chains of other keys stay
/// intact until a resize reclaims them.
///
/// The load factor (counting tombstones) is kept at or below 7/10 by growing,
/// and the table shrinks once the live entries alone fall under 2/10 of the
/// capacity. Neither bound is configurable at this point.
///
/// It is a logic error for keys to be manipulated in a way that changes their
/// hash. Because of this, the API prevents mutable access to stored keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the dictionary.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)`** |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`*, `O(n)`** |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`, `O(1)`*** |
///
/// \* Probe chains add time under hash collisions; the load factor bound
/// keeps them short on average.
///
/// \** When the operation crosses a load threshold, the whole table is
/// rehashed. Amortized over a sequence of operations this stays `O(1)`.
///
/// \*** `reserve` is `O(1)` when the table already has enough room.
pub struct HashDictionary<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) table: Vec<Slot<K, V>>,
    pub(crate) len: usize,
    pub(crate) tombstones: usize,
    pub(crate) hasher: B,
}

/// One position of the table. A removed entry leaves a `Tombstone` rather
/// than going back to `Empty`: probes for other keys may have stepped over
/// this slot, so it must keep reading as "occupied at some point".
pub(crate) enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
    Tombstone,
}

impl<K, V> Slot<K, V> {
    pub(crate) const fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }

    pub(crate) const fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }

    fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    fn into_entry(self) -> Option<(K, V)> {
        match self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }
}

/// Where an insertion probe ended up.
enum Probe {
    /// A live entry with an equal key sits at this index.
    Existing(usize),
    /// No equal key exists; this is the slot to claim (the first tombstone
    /// passed on the way, if any, else the empty slot that ended the probe).
    Vacant(usize),
}

fn empty_table<K, V>(cap: usize) -> Vec<Slot<K, V>> {
    iter::repeat_with(|| Slot::Empty).take(cap).collect()
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashDictionary<K, V, B> {
    /// Creates an empty dictionary at the minimum capacity, using the default
    /// value for `B`.
    pub fn new() -> HashDictionary<K, V, B> {
        HashDictionary::with_cap(INITIAL_CAP)
    }

    /// Creates an empty dictionary with at least `cap` slots (the capacity
    /// floor applies). The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashDictionary<K, V, B> {
        HashDictionary::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashDictionary<K, V, B> {
    /// Creates an empty dictionary at the minimum capacity with the provided
    /// `hasher`.
    pub fn with_hasher(hasher: B) -> HashDictionary<K, V, B> {
        HashDictionary::with_cap_and_hasher(INITIAL_CAP, hasher)
    }

    /// Creates an empty dictionary with at least `cap` slots and the provided
    /// `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashDictionary<K, V, B> {
        HashDictionary {
            table: empty_table(cmp::max(cap, MIN_CAP)),
            len: 0,
            tombstones: 0,
            hasher,
        }
    }

    /// Returns the number of live entries.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the dictionary contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current slot count.
    pub const fn cap(&self) -> usize {
        self.table.len()
    }

    /// Stores `value` under `key`, growing the table first when the load
    /// factor calls for it. If the key already has an entry, the previous
    /// value is returned and the stored key is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow();
        }

        match self.probe_insert(&key) {
            Probe::Existing(index) => self.table[index]
                .value_mut()
                .map(|existing| mem::replace(existing, value)),
            Probe::Vacant(index) => {
                if matches!(self.table[index], Slot::Tombstone) {
                    self.tombstones -= 1;
                }
                self.table[index] = Slot::Occupied { key, value };
                self.len += 1;
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair, or None
    /// if there is no live entry.
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        let index = self.find_index(key)?;
        self.table[index].entry()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.get_entry(key).map(|(_, value)| value).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value stored under `key`, or None
    /// if there is no live entry.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find_index(key)?;
        self.table[index].value_mut()
    }

    /// Returns true if there is a live entry for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes the entry for `key`, returning it if it exists. The slot is
    /// left as a tombstone; the table shrinks once live entries fall under
    /// the minimum load, though never below the capacity floor.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.find_index(key)?;

        let removed = mem::replace(&mut self.table[index], Slot::Tombstone);
        self.len -= 1;
        self.tombstones += 1;

        if self.should_shrink() {
            self.rehash(cmp::max(self.cap() / GROWTH_FACTOR, MIN_CAP));
        }

        removed.into_entry()
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Result<V, KeyNotFound> {
        self.remove_entry(key).map(|(_, value)| value).ok_or(KeyNotFound)
    }

    /// Grows the table to ensure that `len + extra` entries will fit without
    /// another rehash.
    pub fn reserve(&mut self, extra: usize) {
        let needed =
            self.len.saturating_add(extra) * LOAD_DENOMINATOR / MAX_LOAD_NUMERATOR + 1;
        if needed <= self.cap() {
            return;
        }

        self.rehash(cmp::max(needed, MIN_CAP));
    }

    /// Visits every live entry in table order (unrelated to insertion order),
    /// passing each to `visit` until it returns false or the entries run out.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for slot in &self.table {
            if let Some((key, value)) = slot.entry()
                && !visit(key, value)
            {
                return;
            }
        }
    }

    /// Returns an iterator over all entries, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> super::IntoKeys<K, V> {
        super::IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> super::IntoValues<K, V> {
        super::IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values, as mutable references. Keys stay
    /// immutable; their hashes must not change while stored.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.into_iter())
    }

    /// Returns an iterator over all values, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashDictionary<K, V, B> {
    /// Live and dead slots both lengthen probe chains, so both count against
    /// the growth threshold.
    pub(crate) const fn should_grow(&self) -> bool {
        (self.len + self.tombstones) * LOAD_DENOMINATOR > self.cap() * MAX_LOAD_NUMERATOR
    }

    /// Only live entries count here: removals trade an occupied slot for a
    /// tombstone without moving the total, so a threshold over the total
    /// would never trigger on a shrinking workload.
    pub(crate) const fn should_shrink(&self) -> bool {
        self.cap() > MIN_CAP
            && self.len * LOAD_DENOMINATOR < self.cap() * MIN_LOAD_NUMERATOR
    }

    pub(crate) fn grow(&mut self) {
        self.rehash(self.cap() * GROWTH_FACTOR);
    }

    /// Rebuilds the table at `new_cap` slots, re-probing every live entry
    /// into it. Tombstones are dropped, not carried over.
    pub(crate) fn rehash(&mut self, new_cap: usize) {
        let old_table = mem::replace(&mut self.table, empty_table(new_cap));
        self.tombstones = 0;

        for slot in old_table {
            if let Slot::Occupied { key, value } = slot {
                let index = self.find_free(&key);
                self.table[index] = Slot::Occupied { key, value };
            }
        }
    }

    /// The home index for `key` at the current capacity. The capacity floor
    /// keeps the modulus nonzero.
    fn index_for(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.cap() as u64) as usize
    }

    /// Probes for a live entry with an equal key: forward from the home
    /// index, through tombstones, until an empty slot or a full cycle proves
    /// the key absent.
    fn find_index(&self, key: &K) -> Option<usize> {
        let start = self.index_for(key);
        let mut index = start;

        loop {
            match &self.table[index] {
                Slot::Empty => return None,
                Slot::Occupied { key: existing, .. } if existing == key => return Some(index),
                _ => {},
            }

            index = (index + 1) % self.cap();
            if index == start {
                return None;
            }
        }
    }

    /// Probes for the slot an insertion of `key` should use. Remembering the
    /// first tombstone along the way bounds how far later probes for this key
    /// have to walk.
    fn probe_insert(&self, key: &K) -> Probe {
        let start = self.index_for(key);
        let mut index = start;
        let mut first_tombstone = None;

        loop {
            match &self.table[index] {
                Slot::Empty => break,
                Slot::Occupied { key: existing, .. } if existing == key => {
                    return Probe::Existing(index);
                },
                Slot::Tombstone if first_tombstone.is_none() => first_tombstone = Some(index),
                _ => {},
            }

            index = (index + 1) % self.cap();
            if index == start {
                break;
            }
        }

        Probe::Vacant(first_tombstone.unwrap_or(index))
    }

    /// First free slot on the probe path. Only used against a freshly rebuilt
    /// table, which holds no tombstones and no equal keys.
    fn find_free(&self, key: &K) -> usize {
        let mut index = self.index_for(key);

        while self.table[index].is_occupied() {
            index = (index + 1) % self.cap();
        }

        index
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Dictionary<K, V> for HashDictionary<K, V, B> {
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashDictionary::insert(self, key, value)
    }

    fn contains(&self, key: &K) -> bool {
        HashDictionary::contains(self, key)
    }

    fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        HashDictionary::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V, KeyNotFound> {
        HashDictionary::remove(self, key)
    }

    fn len(&self) -> usize {
        HashDictionary::len(self)
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        HashDictionary::for_each(self, visit);
    }

    fn iter(&self) -> Iter<'_, K, V> {
        HashDictionary::iter(self)
    }
}

impl<K: Hash + Eq, V> Default for HashDictionary<K, V> {
    fn default() -> Self {
        HashDictionary::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashDictionary<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashDictionary<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = HashDictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K: Hash + Eq + Debug, V: Debug> Debug for Slot<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => write!(f, "-"),
            Slot::Occupied { key, value } => write!(f, "({key:?}: {value:?})"),
            Slot::Tombstone => write!(f, "x"),
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for HashDictionary<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashDictionary")
            .field("slots", &self.table)
            .field("len", &self.len)
            .field("tombstones", &self.tombstones)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashDictionary<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
