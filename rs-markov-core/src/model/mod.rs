//! Top-level module for the Markov chain generation system.
//!
//! This module provides a word-level order-k Markov generator, including:
//! - Corpus windowing (`windower`)
//! - Unambiguous state keys (`State`)
//! - The transition table learned from a corpus (`TransitionTable`)
//! - The lazy chain walker (`ChainWalker`)
//! - Generation options and the high-level `generate` entry point

/// High-level generation entry points.
///
/// Validates options, trains a fresh transition table and walks it
/// for exactly `words_count` steps.
pub mod generator;

/// Generation options (source, start seed, output length, window width).
pub mod generate_options;

/// Lazy chain walker over a transition table.
///
/// Grows the chain on known continuations and backtracks on dead ends.
pub mod chain;

/// Transition table: state key to the list of observed next tokens.
pub mod transition_table;

/// Serialized state key built from `sample_size - 1` tokens.
pub mod state;

/// Sliding-window slicing of a corpus into fixed-size samples.
pub mod windower;

/// Injectable uniform random source and random pick helper.
pub mod random;
