//! Markov-chain text generation library.
//!
//! This crate provides a word-level, order-k Markov chain generator including:
//! - Corpus windowing into fixed-size samples
//! - Transition table construction keyed by unambiguous serialized states
//! - A lazy chain walker that backtracks on dead ends
//! - A default word/punctuation tokenizer
//!
//! The usual entry point is [`generate`], which runs the whole pipeline
//! from source text to rendered text.

/// Core Markov model: windowing, states, transition table and chain walking.
///
/// Also hosts the high-level `generate` entry point and its options.
pub mod model;

/// Tokenizer contract and the default word tokenizer.
pub mod tokenizer;

/// Error taxonomy for invalid generation requests.
pub mod error;

/// I/O utilities (source loading, path helpers).
pub mod io;

pub use error::GenerateError;
pub use model::generate_options::GenerateOptions;
pub use model::generator::{generate, generate_with};
pub use tokenizer::{Token, Tokenizer, WordTokenizer};
