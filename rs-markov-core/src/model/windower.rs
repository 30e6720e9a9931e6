use crate::tokenizer::Token;

/// Slices a corpus into all contiguous samples of exactly `sample_size` tokens.
///
/// The window slides one token at a time from the start to the end of the
/// corpus, so a corpus of `len >= sample_size` tokens yields
/// `len - sample_size + 1` samples. Shorter tails are never produced, and a
/// corpus shorter than `sample_size` (or a zero size) yields nothing.
pub fn slice_corpus(corpus: &[Token], sample_size: usize) -> impl Iterator<Item = &[Token]> {
	(sample_size > 0)
		.then(|| corpus.windows(sample_size))
		.into_iter()
		.flatten()
}
