use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The key has no live entry in the dictionary. Returned by lookups and
/// removals; callers are expected to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key not present in the dictionary!")
    }
}

impl Error for KeyNotFound {}

/// The iterator has no remaining entries. Returned when reading or advancing
/// past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IteratorExhausted;

impl Display for IteratorExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Iterator has no further entries!")
    }
}

impl Error for IteratorExhausted {}

/// Union of the two recoverable dictionary failures, for callers that mix
/// lookups and iteration behind one `?`.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum DictionaryError {
    KeyNotFound(KeyNotFound),
    IteratorExhausted(IteratorExhausted),
}
