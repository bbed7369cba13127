//! Dictionary filtering layer for the jumble word finder.
//!
//! Sits between the permutation engine and the user-facing tools: collects
//! every candidate arrangement into a uniqueness set, filters the set
//! through a word validity oracle, and presents the surviving words in a
//! deterministic order.
//!
//! # Architecture
//!
//! - [`dictionary`] -- the word validity oracle and its word-list implementation
//! - [`finder`] -- candidate collection, deduplication, dictionary filtering
//! - [`handle`] -- top-level handle owning a dictionary and finder options

pub mod dictionary;
pub mod finder;
pub mod handle;
