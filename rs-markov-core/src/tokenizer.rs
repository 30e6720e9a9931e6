//! Tokenization of source text into words and punctuation, and the inverse
//! rendering of generated tokens back into display text.

/// Opaque unit of text (word, punctuation mark or paragraph break).
///
/// Equality is value equality.
pub type Token = String;

/// Token emitted for any whitespace run containing a line break (`\n` or a bare `\r`).
pub const PARAGRAPH: &str = "\n";

/// Characters allowed inside a word when surrounded by alphanumerics.
const JOINERS: [char; 3] = ['\'', '\u{2019}', '-'];

/// Punctuation rendered without a space before it.
const CLOSING: [char; 11] = [',', '!', '?', ';', ':', ')', ']', '}', '»', '…', '%'];

/// Punctuation rendered without a space after it.
const OPENING: [char; 4] = ['(', '[', '{', '«'];

/// Contract between the Markov core and the host's text format.
///
/// Implementations must be stable (same text, same tokens) and `textify`
/// must accept missing entries without failing.
pub trait Tokenizer {
	/// Splits text into an ordered sequence of tokens.
	fn tokenize(&self, text: &str) -> Vec<Token>;

	/// Renders tokens back to text. `None` entries are dead ends produced
	/// while walking the chain.
	fn textify(&self, tokens: &[Option<Token>]) -> String;
}

/// Default tokenizer: words, single punctuation marks, dot runs and
/// paragraph breaks.
///
/// - `"don't"` and `"well-known"` stay whole (joiner between alphanumerics)
/// - `"..."` is a single token
/// - `"\n\n"` (or any whitespace run with a line break) becomes [`PARAGRAPH`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
	fn is_closing(token: &str) -> bool {
		if token.starts_with('.') {
			return true;
		}
		let mut chars = token.chars();
		matches!((chars.next(), chars.next()), (Some(c), None) if CLOSING.contains(&c))
	}

	fn is_opening(token: &str) -> bool {
		let mut chars = token.chars();
		matches!((chars.next(), chars.next()), (Some(c), None) if OPENING.contains(&c))
	}
}

impl Tokenizer for WordTokenizer {
	fn tokenize(&self, text: &str) -> Vec<Token> {
		let chars: Vec<char> = text.chars().collect();
		let mut tokens: Vec<Token> = Vec::new();
		let mut i = 0;

		while i < chars.len() {
			let start = i;
			let c = chars[i];
			i += 1;

			if c.is_whitespace() {
				while i < chars.len() && chars[i].is_whitespace() {
					i += 1;
				}
				// Leading breaks carry nothing to continue from
				if !tokens.is_empty() && chars[start..i].iter().any(|c| matches!(c, '\n' | '\r')) {
					tokens.push(PARAGRAPH.to_owned());
				}
				continue;
			}

			if c.is_alphanumeric() {
				while i < chars.len() {
					let joined = JOINERS.contains(&chars[i])
						&& chars.get(i + 1).is_some_and(|next| next.is_alphanumeric());
					if !chars[i].is_alphanumeric() && !joined {
						break;
					}
					i += 1;
				}
			} else if c == '.' {
				while i < chars.len() && chars[i] == '.' {
					i += 1;
				}
			}

			tokens.push(chars[start..i].iter().collect());
		}

		tokens
	}

	fn textify(&self, tokens: &[Option<Token>]) -> String {
		let mut text = String::new();
		// No space before the next token (start of text, line or after an opening bracket)
		let mut glued = true;

		for token in tokens.iter().flatten() {
			if token == PARAGRAPH {
				text.push('\n');
				glued = true;
				continue;
			}
			if !glued && !Self::is_closing(token) {
				text.push(' ');
			}
			text.push_str(token);
			glued = Self::is_opening(token);
		}

		text
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(text: &str) -> Vec<String> {
		WordTokenizer.tokenize(text)
	}

	fn render(text: &str) -> String {
		let all: Vec<Option<Token>> = tokens(text).into_iter().map(Some).collect();
		WordTokenizer.textify(&all)
	}

	#[test]
	fn splits_words_and_punctuation() {
		assert_eq!(tokens("Hello, world!"), vec!["Hello", ",", "world", "!"]);
	}

	#[test]
	fn keeps_contractions_and_compounds() {
		assert_eq!(tokens("don't over-think it's"), vec!["don't", "over-think", "it's"]);
		assert_eq!(tokens("a - b"), vec!["a", "-", "b"]);
		assert_eq!(tokens("end-"), vec!["end", "-"]);
	}

	#[test]
	fn groups_dot_runs() {
		assert_eq!(tokens("wait... what."), vec!["wait", "...", "what", "."]);
	}

	#[test]
	fn line_breaks_become_one_paragraph_token() {
		assert_eq!(tokens("\n\nOne.\n\n  Two"), vec!["One", ".", "\n", "Two"]);
	}

	#[test]
	fn carriage_returns_are_line_breaks() {
		assert_eq!(tokens("One.\rTwo"), vec!["One", ".", "\n", "Two"]);
		assert_eq!(tokens("One.\r\n\r\nTwo"), vec!["One", ".", "\n", "Two"]);
	}

	#[test]
	fn handles_non_ascii_words() {
		assert_eq!(tokens("Привет, мир"), vec!["Привет", ",", "мир"]);
	}

	#[test]
	fn renders_punctuation_tightly() {
		let text = "Hello, world! How are you... fine (really).";
		assert_eq!(render(text), text);
	}

	#[test]
	fn ellipsis_and_percent_close_tightly() {
		assert_eq!(tokens("wait… 50%"), vec!["wait", "…", "50", "%"]);
		assert_eq!(render("wait… 50% done"), "wait… 50% done");
	}

	#[test]
	fn renders_paragraphs_as_line_breaks() {
		assert_eq!(render("One.\n\nTwo."), "One.\nTwo.");
	}

	#[test]
	fn missing_tokens_render_as_nothing() {
		let chain = vec![Some("b".to_owned()), None, Some("a".to_owned()), None, Some(".".to_owned())];
		assert_eq!(WordTokenizer.textify(&chain), "b a.");
	}

	#[test]
	fn empty_input_renders_empty() {
		assert!(tokens("   ").is_empty());
		assert_eq!(WordTokenizer.textify(&[]), "");
		assert_eq!(WordTokenizer.textify(&[None, None]), "");
	}
}
