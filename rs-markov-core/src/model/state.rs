use crate::tokenizer::Token;

/// Lookup key of the transition table.
///
/// A `State` is the serialized form of the tokens preceding a transition
/// (the first `sample_size - 1` tokens of a sample, or the trailing window
/// of a growing chain).
///
/// ## Encoding
/// Each token is written as `<byte length>:<token>`, one after the other.
/// The length prefix makes the encoding prefix-free, so two token sequences
/// share a key if and only if they are element-wise equal, whatever the
/// tokens contain (`["ab", "c"]` is `2:ab1:c`, `["a", "bc"]` is `1:a2:bc`).
///
/// ## Invariants
/// - `key` is always produced by [`State::from_tokens`]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
	key: String,
}

impl State {
	/// Serializes a token sequence into a state key.
	pub fn from_tokens<T: AsRef<str>>(tokens: &[T]) -> Self {
		let mut key = String::new();
		for token in tokens {
			let token = token.as_ref();
			key.push_str(&token.len().to_string());
			key.push(':');
			key.push_str(token);
		}
		Self { key }
	}

	/// Walks the length-prefixed segments of the key without copying them.
	fn segments(&self) -> impl Iterator<Item = &str> {
		let mut rest = self.key.as_str();
		std::iter::from_fn(move || {
			let (len, tail) = rest.split_once(':')?;
			let len = len.parse::<usize>().ok()?;
			let token = tail.get(..len)?;
			rest = &tail[len..];
			Some(token)
		})
	}

	/// Decodes the state back into its token sequence.
	pub fn tokens(&self) -> Vec<Token> {
		self.segments().map(str::to_owned).collect()
	}

	/// Number of tokens the state was built from.
	pub fn width(&self) -> usize {
		self.segments().count()
	}

	/// Raw serialized key.
	pub fn as_str(&self) -> &str {
		&self.key
	}
}
