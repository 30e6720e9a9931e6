use log::debug;

use super::chain::ChainWalker;
use super::generate_options::GenerateOptions;
use super::random::RandomRange;
use super::transition_table::TransitionTable;
use crate::error::GenerateError;
use crate::tokenizer::{Token, Tokenizer, WordTokenizer};

/// Upper bound of the step buffer reserved up front; longer walks grow it as they go.
const PREALLOCATED_STEPS: usize = 4096;

/// Generates text with the default [`WordTokenizer`] and the thread-local RNG.
///
/// See [`generate_with`].
pub fn generate(options: &GenerateOptions) -> Result<String, GenerateError> {
	generate_with(options, &WordTokenizer, rand::rng())
}

/// Runs the whole pipeline with injected collaborators.
///
/// # Behavior
/// - Validates the options before any tokenization
/// - Tokenizes `source`, windows it and builds a fresh transition table
/// - Seeds the chain with the tokenized `start`, or a random known state
/// - Draws exactly `words_count` steps (dead ends included) and renders them
///
/// # Errors
/// - `EmptySource` if `source` is empty
/// - `InvalidSampleSize` if `sample_size < 2`
///
/// # Notes
/// - The table is built per call and dropped afterwards.
/// - Dead ends are not errors: they render as nothing.
pub fn generate_with<T, R>(options: &GenerateOptions, tokenizer: &T, rng: R) -> Result<String, GenerateError>
where
	T: Tokenizer + ?Sized,
	R: RandomRange,
{
	options.validate()?;

	let table = {
		let corpus = tokenizer.tokenize(&options.source);
		TransitionTable::from_corpus(&corpus, options.sample_size)?
	};

	let walker = match &options.start {
		Some(start) => ChainWalker::new(&table, tokenizer.tokenize(start), rng),
		None => ChainWalker::from_random_state(&table, rng),
	};

	let mut chain: Vec<Option<Token>> = Vec::with_capacity(options.words_count.min(PREALLOCATED_STEPS));
	chain.extend(walker.take(options.words_count));
	debug!(
		"Generated {} steps, {} dead ends",
		chain.len(),
		chain.iter().filter(|step| step.is_none()).count()
	);

	Ok(tokenizer.textify(&chain))
}
