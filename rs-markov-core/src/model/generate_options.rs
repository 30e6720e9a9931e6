use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Default number of tokens requested from the walker.
pub const DEFAULT_WORDS_COUNT: usize = 200;

/// Default window width (order-2 chain).
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

fn default_words_count() -> usize {
	DEFAULT_WORDS_COUNT
}

fn default_sample_size() -> usize {
	DEFAULT_SAMPLE_SIZE
}

/// Input parameters of a generation call.
///
/// Deserializable so hosts can take it straight from a request body;
/// omitted fields get their defaults (an omitted `source` is empty and
/// is rejected by [`GenerateOptions::validate`]).
///
/// # Invariants (checked by `validate`, not on construction)
/// - `source` is not empty
/// - `sample_size >= 2`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
	/// Corpus text the transition table is trained on.
	#[serde(default)]
	pub source: String,

	/// Optional seed text. When absent, a random known state is used.
	#[serde(default)]
	pub start: Option<String>,

	/// Number of steps drawn from the walker (dead ends included).
	#[serde(default = "default_words_count")]
	pub words_count: usize,

	/// Window width: `k + 1` for an order-k chain.
	#[serde(default = "default_sample_size")]
	pub sample_size: usize,
}

impl GenerateOptions {
	/// Creates options with default length and window width.
	pub fn new(source: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			start: None,
			words_count: DEFAULT_WORDS_COUNT,
			sample_size: DEFAULT_SAMPLE_SIZE,
		}
	}

	/// Creates options from raw bytes (invalid UTF-8 is replaced).
	pub fn from_bytes(source: &[u8]) -> Self {
		Self::new(String::from_utf8_lossy(source))
	}

	pub fn with_start(mut self, start: impl Into<String>) -> Self {
		self.start = Some(start.into());
		self
	}

	pub fn with_words_count(mut self, words_count: usize) -> Self {
		self.words_count = words_count;
		self
	}

	pub fn with_sample_size(mut self, sample_size: usize) -> Self {
		self.sample_size = sample_size;
		self
	}

	/// Checks the options before any work is done.
	///
	/// # Errors
	/// - `EmptySource` if `source` is empty (checked first)
	/// - `InvalidSampleSize` if `sample_size < 2`
	pub fn validate(&self) -> Result<(), GenerateError> {
		if self.source.is_empty() {
			return Err(GenerateError::EmptySource);
		}
		GenerateError::check_sample_size(self.sample_size)
	}
}
