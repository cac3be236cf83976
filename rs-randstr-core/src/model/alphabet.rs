use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::MAX_ALPHABET_SIZE;

/// Ordered, duplicate-free set of symbols eligible for placement.
///
/// ## Invariants
/// - Never empty
/// - At most `MAX_ALPHABET_SIZE` symbols
/// - Each symbol appears once, at the position of its first occurrence
///   in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
	symbols: Vec<char>,
}

impl Alphabet {
	/// Builds an alphabet from any sequence of characters.
	///
	/// Duplicates are dropped, keeping the first occurrence.
	///
	/// # Errors
	/// Returns `Error::OutOfRange` if the result is empty or holds more than
	/// `MAX_ALPHABET_SIZE` symbols.
	pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self> {
		let mut seen = HashSet::new();
		let symbols: Vec<char> = chars.into_iter().filter(|c| seen.insert(*c)).collect();

		if symbols.is_empty() {
			return Err(Error::OutOfRange(
				"there must be at least one allowed character to create a random string".to_owned(),
			));
		}
		if symbols.len() > MAX_ALPHABET_SIZE {
			return Err(Error::OutOfRange(format!(
				"at most {} distinct characters are allowed, got {}",
				MAX_ALPHABET_SIZE,
				symbols.len()
			)));
		}

		Ok(Self { symbols })
	}

	/// Number of distinct symbols.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// Always `false`; kept for API symmetry with collections.
	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	/// Symbol at `index`, if any.
	pub fn get(&self, index: usize) -> Option<char> {
		self.symbols.get(index).copied()
	}

	pub fn contains(&self, c: char) -> bool {
		self.symbols.contains(&c)
	}

	pub fn as_slice(&self) -> &[char] {
		&self.symbols
	}

	pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
		self.symbols.iter().copied()
	}
}

impl TryFrom<&[char]> for Alphabet {
	type Error = Error;

	fn try_from(chars: &[char]) -> Result<Self> {
		Self::new(chars.iter().copied())
	}
}

impl TryFrom<&str> for Alphabet {
	type Error = Error;

	fn try_from(chars: &str) -> Result<Self> {
		Self::new(chars.chars())
	}
}
