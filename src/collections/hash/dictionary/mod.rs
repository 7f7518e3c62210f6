//! A module containing [`HashDictionary`] and associated types.
//!
//! Besides the dictionary itself, the types here provide owned and borrowed
//! iteration over entries, keys or values.
//!
//! As a note, there is no mutable iterator over entries or keys because
//! mutating the keys of a hash-based container in place would cause a logic
//! error.
//!
//! [`HashDictionary`] is also re-exported under the parent module.

mod hash_dictionary;
mod iter;

pub use hash_dictionary::*;
pub use iter::*;
