//! This crate is my take on the classic "dictionary" abstract data type,
//! implemented twice behind a single capability contract.
//!
//! # Purpose
//! I wrote these containers to understand the two standard ways of backing an
//! associative container properly: a flat open-addressing hash table (with
//! everything that deletion does to probe chains) and a plain binary search
//! tree (with everything that an explicit in-order iterator has to track).
//! Callers program against the [`Dictionary`](collections::traits::Dictionary)
//! and [`OrderedDictionary`](collections::traits::OrderedDictionary) traits
//! and shouldn't care which structure is underneath.
//!
//! # Method
//! Both implementations are written from my own understanding of the
//! algorithms rather than from any particular library, although I haven't
//! stopped myself from looking at how existing APIs are shaped. The hash
//! table deletes lazily with tombstones instead of rehashing on every
//! removal; the tree is intentionally unbalanced, so adversarial insertion
//! order degrades it to a list. That asymmetry is the point of having both.
//!
//! # Error Handling
//! Lookups and deletions of absent keys, and reads of exhausted iterators,
//! are expected control flow for callers, not defects. They are reported as
//! strongly typed [`Result`]s (unit error structs, with an enum for callers
//! that need to mix them) rather than panics or silent defaults. Nothing in
//! this crate panics on user input.
//!
//! # Dependencies
//! Storage is `std` (`Vec`, `Box`); the only runtime dependency is a derive
//! macro crate for the error enum, because that programming is repetitive
//! enough to automate.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
