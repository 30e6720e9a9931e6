use thiserror::Error;

/// Input validation failures raised by [`crate::generate`].
///
/// Both variants are detected before any tokenization or table construction,
/// so a failing call never produces partial output.
///
/// Dead ends met while walking the chain are not errors: the walker
/// backtracks and yields a missing token instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
	/// The source text is absent or empty.
	#[error("The source text cannot be empty.")]
	EmptySource,

	/// The sample size is below 2 (a state needs at least one token plus a next token).
	#[error("Sample size must not be less than 2.")]
	InvalidSampleSize(usize),
}

impl GenerateError {
	/// Checks a sample size, returning `InvalidSampleSize` when it is below 2.
	pub fn check_sample_size(sample_size: usize) -> Result<(), Self> {
		if sample_size < 2 {
			return Err(Self::InvalidSampleSize(sample_size));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_size_below_two_is_rejected() {
		assert_eq!(GenerateError::check_sample_size(0), Err(GenerateError::InvalidSampleSize(0)));
		assert_eq!(GenerateError::check_sample_size(1), Err(GenerateError::InvalidSampleSize(1)));
		assert!(GenerateError::check_sample_size(2).is_ok());
	}

	#[test]
	fn messages_are_human_readable() {
		assert_eq!(GenerateError::EmptySource.to_string(), "The source text cannot be empty.");
		assert_eq!(GenerateError::InvalidSampleSize(1).to_string(), "Sample size must not be less than 2.");
		assert_eq!(GenerateError::InvalidSampleSize(0).to_string(), "Sample size must not be less than 2.");
	}
}
