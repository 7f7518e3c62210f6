use std::hash::{BuildHasher, Hash, Hasher};

/// A key that hashes as a chosen number while comparing by the wrapped value.
/// Paired with [`FoldHasherBuilder`] it lets tests steer keys into exact
/// slots, to set up collisions and probe chains deliberately.
#[derive(Debug)]
pub struct PresetHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> PresetHash<T> {
    pub const fn new(hash: u64, value: T) -> PresetHash<T> {
        PresetHash { hash, value }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Eq> Hash for PresetHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for PresetHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for PresetHash<T> {}

/// Folds written bytes straight into the state, so hashing a small `u64`
/// returns that `u64`. Terrible distribution on purpose: a [`PresetHash`]
/// key lands exactly at `hash % capacity`.
#[derive(Debug, Default)]
pub struct FoldHasher {
    state: u64,
}

impl Hasher for FoldHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= u64::from(*byte) << ((offset % 8) * 8);
        }
    }
}

#[derive(Debug, Default)]
pub struct FoldHasherBuilder;

impl BuildHasher for FoldHasherBuilder {
    type Hasher = FoldHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FoldHasher::default()
    }
}
