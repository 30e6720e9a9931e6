use std::collections::BTreeMap;

use log::debug;

use super::random::RandomRange;
use super::state::State;
use super::windower::slice_corpus;
use crate::error::GenerateError;
use crate::tokenizer::Token;

/// Transition table of an order-k Markov chain.
///
/// Maps each [`State`] (serialized `sample_size - 1` tokens) to the ordered
/// list of tokens observed right after it in the corpus.
///
/// # Responsibilities
/// - Split samples into (state tokens, next token)
/// - Accumulate candidates per state, duplicates included
/// - Expose lookups and random state selection to the chain walker
///
/// # Invariants
/// - `sample_size` is always >= 2
/// - Every key was built from exactly `sample_size - 1` tokens
/// - Every candidate list is non-empty
/// - Keys are kept ordered, so a seeded random source replays the same walk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
	/// Window width (state tokens + next token)
	sample_size: usize,

	/// Candidate lists in append order. Duplicates weight the random pick.
	/// Example: { "1:a" => ["b", "b", "c"] }
	transitions: BTreeMap<State, Vec<Token>>,
}

impl TransitionTable {
	/// Creates an empty table for windows of `sample_size` tokens.
	///
	/// # Errors
	/// Returns `InvalidSampleSize` if `sample_size < 2`.
	pub fn new(sample_size: usize) -> Result<Self, GenerateError> {
		GenerateError::check_sample_size(sample_size)?;
		Ok(Self { sample_size, transitions: BTreeMap::new() })
	}

	/// Builds the table from a sequence of samples.
	///
	/// Samples whose length differs from `sample_size` are ignored.
	pub fn from_samples<'a, I>(samples: I, sample_size: usize) -> Result<Self, GenerateError>
	where
		I: IntoIterator<Item = &'a [Token]>,
	{
		let mut table = Self::new(sample_size)?;
		for sample in samples {
			table.add_sample(sample);
		}
		Ok(table)
	}

	/// Windows a corpus and builds its table.
	///
	/// A corpus shorter than `sample_size` gives an empty table.
	pub fn from_corpus(corpus: &[Token], sample_size: usize) -> Result<Self, GenerateError> {
		let table = Self::from_samples(slice_corpus(corpus, sample_size), sample_size)?;
		debug!(
			"Transition table built: {} tokens, sample size {}, {} states",
			corpus.len(),
			sample_size,
			table.len()
		);
		Ok(table)
	}

	/// Records one sample: every token but the last is the state,
	/// the last one is appended to that state's candidates.
	///
	/// Returns `false` (and records nothing) if the sample has the wrong length.
	pub fn add_sample(&mut self, sample: &[Token]) -> bool {
		if sample.len() != self.sample_size {
			return false;
		}
		let Some((next, rest)) = sample.split_last() else {
			return false;
		};

		self.transitions
			.entry(State::from_tokens(rest))
			.or_default()
			.push(next.clone());
		true
	}

	/// Window width this table was trained with.
	pub fn sample_size(&self) -> usize {
		self.sample_size
	}

	/// Number of tokens in every state key (`sample_size - 1`).
	pub fn state_width(&self) -> usize {
		self.sample_size - 1
	}

	/// Number of distinct states.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Iterates over the known states, in key order.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.transitions.keys()
	}

	/// Iterates over (state, candidates) pairs, in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&State, &[Token])> {
		self.transitions.iter().map(|(state, next)| (state, next.as_slice()))
	}

	/// Candidates observed after `state`, empty if the state is unknown.
	pub fn candidates(&self, state: &State) -> &[Token] {
		self.transitions.get(state).map(Vec::as_slice).unwrap_or_default()
	}

	/// Picks a state uniformly among the known ones.
	///
	/// Returns `None` if the table is empty.
	pub fn random_state<R: RandomRange + ?Sized>(&self, rng: &mut R) -> Option<&State> {
		let last = self.transitions.len().checked_sub(1)?;
		self.transitions.keys().nth(rng.range_inclusive(0, last))
	}
}
