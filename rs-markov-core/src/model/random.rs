use rand::Rng;

/// Uniform random source consumed by the chain walker.
///
/// Its only contract is returning an integer uniformly distributed over
/// an inclusive range. Every `rand::Rng` provides it, and tests can plug
/// scripted sources to assert exact walks.
pub trait RandomRange {
	/// Returns a value in `min..=max`.
	fn range_inclusive(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomRange for R {
	fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
		self.random_range(min..=max)
	}
}

/// Picks a uniformly random element of `list`.
///
/// Returns `None` if the list is empty. Duplicated elements are
/// proportionally more likely to be picked.
pub fn pick_random<'a, T, R: RandomRange + ?Sized>(list: &'a [T], rng: &mut R) -> Option<&'a T> {
	let last = list.len().checked_sub(1)?;
	list.get(rng.range_inclusive(0, last))
}
