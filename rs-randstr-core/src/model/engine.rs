use log::debug;

use crate::error::{Error, Result};
use crate::model::alphabet::Alphabet;
use crate::sampler::IndexSampler;
use crate::MAX_LENGTH;

/// A validated generation request.
///
/// ## Invariants
/// - `1 <= length <= MAX_LENGTH`
/// - the alphabet is non-empty and within its size cap (guaranteed by `Alphabet`)
/// - if `require_full_coverage`, `alphabet.len() <= length`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
	length: usize,
	alphabet: Alphabet,
	require_full_coverage: bool,
}

impl GenerationRequest {
	/// Validates and assembles a request.
	///
	/// # Errors
	/// - `Error::OutOfRange` if `length` is zero or above `MAX_LENGTH`
	/// - `Error::InvalidOperation` if full coverage is requested and the
	///   alphabet holds more symbols than `length`
	pub fn new(length: usize, alphabet: Alphabet, require_full_coverage: bool) -> Result<Self> {
		validate_length(length)?;
		if require_full_coverage && alphabet.len() > length {
			return Err(Error::InvalidOperation { length, minimum: alphabet.len() });
		}
		Ok(Self { length, alphabet, require_full_coverage })
	}

	pub fn length(&self) -> usize {
		self.length
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	pub fn require_full_coverage(&self) -> bool {
		self.require_full_coverage
	}
}

/// Checks that `length` lies in `1..=MAX_LENGTH`.
pub(crate) fn validate_length(length: usize) -> Result<()> {
	if length == 0 {
		return Err(Error::OutOfRange(
			"the length of the random string must be a positive non-zero integer".to_owned(),
		));
	}
	if length > MAX_LENGTH {
		return Err(Error::OutOfRange(format!(
			"the length of the random string must not exceed {}, got {}",
			MAX_LENGTH, length
		)));
	}
	Ok(())
}

/// Assembles a random string for `request`, drawing indices from `sampler`.
///
/// # Behavior
/// - Uniform mode: each position, left to right, receives
///   `alphabet[sample(alphabet.len())]`.
/// - Full-coverage mode: positions are shuffled by sorting them on a key
///   drawn with `sample(length)`. The first `alphabet.len()` shuffled
///   positions receive the alphabet symbols in order, the rest are filled
///   uniformly.
///
/// # Errors
/// Only sampler errors can surface here; the request is already valid.
/// Nothing is returned on error, never a partial string.
pub fn generate<S: IndexSampler + ?Sized>(request: &GenerationRequest, sampler: &mut S) -> Result<String> {
	debug!(
		"Generating {} chars from {} symbols (full coverage: {})",
		request.length,
		request.alphabet.len(),
		request.require_full_coverage
	);

	let result = if request.require_full_coverage {
		fill_with_coverage(request, sampler)?
	} else {
		fill_uniform(request, sampler)?
	};

	Ok(result.into_iter().collect())
}

fn draw_symbol<S: IndexSampler + ?Sized>(alphabet: &Alphabet, sampler: &mut S) -> Result<char> {
	let index = sampler.sample(alphabet.len())?;
	alphabet
		.get(index)
		.ok_or_else(|| Error::InvalidArgument(format!("sampler returned {} for bound {}", index, alphabet.len())))
}

fn fill_uniform<S: IndexSampler + ?Sized>(request: &GenerationRequest, sampler: &mut S) -> Result<Vec<char>> {
	(0..request.length)
		.map(|_| draw_symbol(&request.alphabet, &mut *sampler))
		.collect()
}

fn fill_with_coverage<S: IndexSampler + ?Sized>(request: &GenerationRequest, sampler: &mut S) -> Result<Vec<char>> {
	let length = request.length;
	let alphabet = &request.alphabet;

	// (sort key, position); sort_by_key is stable
	let mut positions = (0..length)
		.map(|position| Ok((sampler.sample(length)?, position)))
		.collect::<Result<Vec<(usize, usize)>>>()?;
	positions.sort_by_key(|(key, _)| *key);

	let mut result = vec!['\0'; length];
	for (visit, (_, position)) in positions.into_iter().enumerate() {
		result[position] = match alphabet.get(visit) {
			Some(c) => c,
			None => draw_symbol(alphabet, sampler)?,
		};
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sampler::FastSampler;

	/// Replays a fixed list of indices, then fails.
	struct Scripted(Vec<usize>);

	impl IndexSampler for Scripted {
		fn sample(&mut self, bound: usize) -> Result<usize> {
			if self.0.is_empty() {
				return Err(Error::Entropy("script exhausted".to_owned()));
			}
			let next = self.0.remove(0);
			assert!(next < bound);
			Ok(next)
		}
	}

	fn alphabet(s: &str) -> Alphabet {
		Alphabet::try_from(s).unwrap()
	}

	#[test]
	fn uniform_fills_left_to_right() {
		let request = GenerationRequest::new(4, alphabet("abc"), false).unwrap();
		let out = generate(&request, &mut Scripted(vec![2, 0, 1, 2])).unwrap();
		assert_eq!(out, "cabc");
	}

	#[test]
	fn coverage_places_symbols_at_shuffled_positions() {
		// keys for positions 0..4: [3, 0, 2, 1] -> visit order 1, 3, 2, 0
		// 'a' -> 1, 'b' -> 3, then position 2 and 0 filled with index 1 and 0
		let request = GenerationRequest::new(4, alphabet("ab"), true).unwrap();
		let out = generate(&request, &mut Scripted(vec![3, 0, 2, 1, 1, 0])).unwrap();
		assert_eq!(out, "aabb");
	}

	#[test]
	fn coverage_equal_length_is_a_permutation() {
		let request = GenerationRequest::new(26, alphabet("abcdefghijklmnopqrstuvwxyz"), true).unwrap();
		let out = generate(&request, &mut FastSampler::from_seed(99)).unwrap();
		let mut sorted: Vec<char> = out.chars().collect();
		sorted.sort();
		assert_eq!(sorted.into_iter().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
	}

	#[test]
	fn sampler_error_yields_no_output() {
		let request = GenerationRequest::new(3, alphabet("ab"), false).unwrap();
		let result = generate(&request, &mut Scripted(vec![0, 1]));
		assert!(matches!(result, Err(Error::Entropy(_))));
	}

	#[test]
	fn request_validation() {
		assert!(matches!(GenerationRequest::new(0, alphabet("a"), false), Err(Error::OutOfRange(_))));
		assert!(matches!(
			GenerationRequest::new(MAX_LENGTH + 1, alphabet("a"), false),
			Err(Error::OutOfRange(_))
		));
		assert_eq!(
			GenerationRequest::new(2, alphabet("ABC"), true),
			Err(Error::InvalidOperation { length: 2, minimum: 3 })
		);
		assert!(GenerationRequest::new(3, alphabet("ABC"), true).is_ok());
	}
}
