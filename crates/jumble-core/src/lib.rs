//! Shared leaf types and utilities for the jumble word finder.
//!
//! # Architecture
//!
//! - [`character`] -- character classification and single-character case mapping
//! - [`case`] -- word-level case pattern detection and folding

pub mod case;
pub mod character;

/// Maximum number of input letters accepted by the finder pipeline.
///
/// Enumeration visits every ordering of every subset of the input, so the
/// work grows factorially with input length. The engine itself imposes no
/// limit; this bound is enforced where user input enters the pipeline.
pub const MAX_LETTERS: usize = 12;
