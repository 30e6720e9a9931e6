use log::trace;

use super::random::{RandomRange, pick_random};
use super::state::State;
use super::transition_table::TransitionTable;
use crate::tokenizer::Token;

/// Lazy walker over a [`TransitionTable`].
///
/// The walker owns the chain being generated (a growable token buffer that
/// only changes at its tail) and a random source. Each step looks at the
/// last `sample_size - 1` tokens of the chain:
/// - a known continuation is picked uniformly, yielded and appended
/// - a dead end yields `None` and drops the last token, so the next step
///   retries from one token earlier
///
/// Walking never ends on its own: as an [`Iterator`] it always returns
/// `Some(step)`, the caller bounds it with `take`.
///
/// A window shorter than `sample_size - 1` tokens (chain unwound below the
/// state width) never matches a trained state, so it keeps yielding `None`
/// until the chain is empty.
#[derive(Debug)]
pub struct ChainWalker<'t, R> {
	table: &'t TransitionTable,
	chain: Vec<Token>,
	rng: R,
}

impl<'t, R: RandomRange> ChainWalker<'t, R> {
	/// Starts a walk from an explicit seed sequence.
	pub fn new(table: &'t TransitionTable, seed: Vec<Token>, rng: R) -> Self {
		Self { table, chain: seed, rng }
	}

	/// Starts a walk from a state drawn uniformly from the table's keys.
	///
	/// An empty table gives an empty chain.
	pub fn from_random_state(table: &'t TransitionTable, mut rng: R) -> Self {
		let seed = table.random_state(&mut rng).map(State::tokens).unwrap_or_default();
		Self::new(table, seed, rng)
	}

	/// Current chain content (seed plus accepted tokens, minus backtracked ones).
	pub fn chain(&self) -> &[Token] {
		&self.chain
	}

	/// State key of the trailing window of the chain.
	pub fn lookup_state(&self) -> State {
		let from = self.chain.len().saturating_sub(self.table.state_width());
		State::from_tokens(&self.chain[from..])
	}

	/// Picks a continuation of the current window without changing the chain.
	pub fn predict_next(&mut self) -> Option<Token> {
		let state = self.lookup_state();
		pick_random(self.table.candidates(&state), &mut self.rng).cloned()
	}

	/// Advances the walk by one step.
	///
	/// Returns the appended token, or `None` on a dead end (after backtracking).
	pub fn step(&mut self) -> Option<Token> {
		match self.predict_next() {
			Some(next) => {
				self.chain.push(next.clone());
				Some(next)
			}
			None => {
				let dropped = self.chain.pop();
				trace!("Dead end, backtracking over {:?} ({} tokens left)", dropped, self.chain.len());
				None
			}
		}
	}
}

impl<R: RandomRange> Iterator for ChainWalker<'_, R> {
	type Item = Option<Token>;

	fn next(&mut self) -> Option<Self::Item> {
		Some(self.step())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::VecDeque;

	/// Replays a fixed list of picks (offset from `min`), then always `min`.
	struct Scripted(VecDeque<usize>);

	impl RandomRange for Scripted {
		fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
			let pick = min + self.0.pop_front().unwrap_or(0);
			assert!(pick <= max, "scripted pick {pick} out of {min}..={max}");
			pick
		}
	}

	fn scripted(picks: &[usize]) -> Scripted {
		Scripted(picks.iter().copied().collect())
	}

	fn corpus(text: &str) -> Vec<Token> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn alternating_corpus_walks_deterministically() {
		let table = TransitionTable::from_corpus(&corpus("a b a b a b"), 2).unwrap();
		let walker = ChainWalker::new(&table, corpus("a"), scripted(&[]));

		let steps: Vec<Option<Token>> = walker.take(4).collect();
		assert_eq!(steps, vec![Some("b".to_owned()), Some("a".to_owned()), Some("b".to_owned()), Some("a".to_owned())]);
	}

	#[test]
	fn picks_follow_the_random_source() {
		// "x" is followed by ["y", "z", "y"]
		let table = TransitionTable::from_corpus(&corpus("x y x z x y"), 2).unwrap();
		let mut walker = ChainWalker::new(&table, corpus("x"), scripted(&[1, 0, 2]));

		assert_eq!(walker.step(), Some("z".to_owned()));
		assert_eq!(walker.step(), Some("x".to_owned()));
		assert_eq!(walker.step(), Some("y".to_owned()));
		assert_eq!(ChainWalker::chain(&walker), corpus("x z x y").as_slice());
	}

	#[test]
	fn dead_end_backtracks_one_token() {
		// "c" is never followed by anything
		let table = TransitionTable::from_corpus(&corpus("a b c"), 2).unwrap();
		let mut walker = ChainWalker::new(&table, corpus("a"), scripted(&[]));

		assert_eq!(walker.step(), Some("b".to_owned()));
		assert_eq!(walker.step(), Some("c".to_owned()));
		assert_eq!(walker.step(), None);
		assert_eq!(ChainWalker::chain(&walker), corpus("a b").as_slice());
		// Back on "b", which continues again
		assert_eq!(walker.step(), Some("c".to_owned()));
	}

	#[test]
	fn exhausted_chain_keeps_missing() {
		let table = TransitionTable::from_corpus(&corpus("a b c"), 3).unwrap();
		let mut walker = ChainWalker::new(&table, corpus("z"), scripted(&[]));

		assert_eq!(walker.step(), None);
		assert!(ChainWalker::chain(&walker).is_empty());
		assert_eq!(walker.step(), None);
		assert_eq!(walker.step(), None);
	}

	#[test]
	fn under_length_window_misses() {
		let table = TransitionTable::from_corpus(&corpus("a b c"), 3).unwrap();
		let walker = ChainWalker::new(&table, corpus("b"), scripted(&[]));

		assert_eq!(walker.lookup_state(), State::from_tokens(&["b"]));
		assert!(table.candidates(&walker.lookup_state()).is_empty());
	}

	#[test]
	fn window_slides_over_longer_seed() {
		let table = TransitionTable::from_corpus(&corpus("a b c d"), 3).unwrap();
		let mut walker = ChainWalker::new(&table, corpus("x y a b"), scripted(&[]));

		assert_eq!(walker.lookup_state(), State::from_tokens(&["a", "b"]));
		assert_eq!(walker.step(), Some("c".to_owned()));
		assert_eq!(walker.step(), Some("d".to_owned()));
	}

	#[test]
	fn random_start_uses_a_table_state() {
		let table = TransitionTable::from_corpus(&corpus("a b c d"), 3).unwrap();
		// Keys in order: [a b], [b c]; pick the second one
		let walker = ChainWalker::from_random_state(&table, scripted(&[1]));

		assert_eq!(ChainWalker::chain(&walker), corpus("b c").as_slice());
	}

	#[test]
	fn bounded_walk_does_not_presize() {
		let table = TransitionTable::from_corpus(&corpus("a b"), 2).unwrap();
		let walker = ChainWalker::new(&table, corpus("a"), scripted(&[]));

		// A huge bound must not turn into a huge up-front reservation
		assert_eq!(walker.take(1 << 44).size_hint().0, 0);
	}

	#[test]
	fn random_start_on_empty_table_is_empty() {
		let table = TransitionTable::from_corpus(&corpus("a"), 2).unwrap();
		let mut walker = ChainWalker::from_random_state(&table, scripted(&[]));

		assert!(ChainWalker::chain(&walker).is_empty());
		assert_eq!(walker.next(), Some(None));
	}
}
