use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::character_group::{CharacterGroup, SIMILAR_LOOKING_CHARACTERS};
use crate::model::options::GenerationOptions;

/// Fluent construction of `GenerationOptions`.
///
/// Starts from `GenerationOptions::default()`. Every step consumes and
/// returns the builder, so a whole configuration reads as one chain:
///
/// ```
/// use rs_randstr_core::{CharacterGroup, GenerationBuilder};
///
/// let options = GenerationBuilder::new()
/// 	.with_length(16)
/// 	.allow_group(CharacterGroup::LETTERS)
/// 	.and_allow_characters(&['!', '?'])
/// 	.exclude_similar_looking_characters()
/// 	.build()?;
/// assert_eq!(options.length, 16);
/// assert!(!options.allowed.contains(&'l'));
/// # Ok::<(), rs_randstr_core::Error>(())
/// ```
///
/// # Errors
/// Steps never fail on their own. The first invalid step is remembered and
/// reported by `build()`.
#[derive(Debug, Clone)]
pub struct GenerationBuilder {
	length: usize,
	allowed: Vec<char>,
	/// Mirror of `allowed` for constant-time membership checks.
	seen: HashSet<char>,
	each_character_at_least_once: bool,
	exclude_similar_looking_characters: bool,
	error: Option<Error>,
}

impl GenerationBuilder {
	pub fn new() -> Self {
		let defaults = GenerationOptions::default();
		Self {
			length: defaults.length,
			seen: defaults.allowed.iter().copied().collect(),
			allowed: defaults.allowed,
			each_character_at_least_once: defaults.each_character_at_least_once,
			exclude_similar_looking_characters: false,
			error: None,
		}
	}

	/// Sets the output length. Zero is rejected.
	pub fn with_length(mut self, length: usize) -> Self {
		if length == 0 {
			self.fail(Error::OutOfRange(
				"the length of the random string must be a positive non-zero integer".to_owned(),
			));
		} else {
			self.length = length;
		}
		self
	}

	/// Replaces the allowed characters.
	pub fn allow_characters(mut self, characters: &[char]) -> Self {
		self.clear();
		self.extend(characters.iter().copied());
		self
	}

	/// Replaces the allowed characters with the characters of `groups`.
	pub fn allow_group(mut self, groups: CharacterGroup) -> Self {
		self.clear();
		self.and_allow_group(groups)
	}

	/// Adds characters to the allowed set.
	pub fn and_allow_characters(mut self, characters: &[char]) -> Self {
		self.extend(characters.iter().copied());
		self
	}

	/// Adds the characters of `groups` to the allowed set.
	pub fn and_allow_group(mut self, groups: CharacterGroup) -> Self {
		match groups.chars() {
			Ok(chars) => self.extend(chars),
			Err(e) => self.fail(e),
		}
		self
	}

	/// Removes characters from the allowed set.
	pub fn exclude_characters(mut self, characters: &[char]) -> Self {
		let excluded: HashSet<char> = characters.iter().copied().collect();
		self.remove(|c| excluded.contains(c));
		self
	}

	/// Requires every allowed character to appear in the output.
	pub fn each_character_must_occur_at_least_once(mut self) -> Self {
		self.each_character_at_least_once = true;
		self
	}

	/// Removes `1 l I | o O 0` from the allowed set when building.
	pub fn exclude_similar_looking_characters(mut self) -> Self {
		self.exclude_similar_looking_characters = true;
		self
	}

	/// Produces the options.
	///
	/// # Errors
	/// - the first error recorded by a builder step
	/// - `Error::InvalidOperation` if every character must occur at least
	///   once and the allowed set is larger than the length
	pub fn build(mut self) -> Result<GenerationOptions> {
		if let Some(e) = self.error {
			return Err(e);
		}

		if self.exclude_similar_looking_characters {
			self.remove(|c| SIMILAR_LOOKING_CHARACTERS.contains(c));
		}

		if self.each_character_at_least_once && self.allowed.len() > self.length {
			return Err(Error::InvalidOperation { length: self.length, minimum: self.allowed.len() });
		}

		Ok(GenerationOptions::new(self.length, self.allowed, self.each_character_at_least_once))
	}

	fn clear(&mut self) {
		self.allowed.clear();
		self.seen.clear();
	}

	fn extend<I: IntoIterator<Item = char>>(&mut self, characters: I) {
		for c in characters {
			if self.seen.insert(c) {
				self.allowed.push(c);
			}
		}
	}

	fn remove<F: Fn(&char) -> bool>(&mut self, excluded: F) {
		let seen = &mut self.seen;
		self.allowed.retain(|c| {
			if excluded(c) {
				seen.remove(c);
				false
			} else {
				true
			}
		});
	}

	fn fail(&mut self, error: Error) {
		if self.error.is_none() {
			self.error = Some(error);
		}
	}
}

impl Default for GenerationBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_options_defaults() {
		assert_eq!(GenerationBuilder::new().build().unwrap(), GenerationOptions::default());
	}

	#[test]
	fn allow_replaces_and_and_allow_extends() {
		let options = GenerationBuilder::new()
			.allow_characters(&['a', 'b', 'a'])
			.and_allow_characters(&['b', 'c'])
			.and_allow_group(CharacterGroup::MINUS)
			.build()
			.unwrap();
		assert_eq!(options.allowed, vec!['a', 'b', 'c', '-']);
	}

	#[test]
	fn exclude_removes_characters() {
		let options = GenerationBuilder::new()
			.allow_group(CharacterGroup::DIGITS)
			.exclude_characters(&['0', '5'])
			.build()
			.unwrap();
		assert_eq!(options.allowed.len(), 8);
		assert!(!options.allowed.contains(&'0'));
	}

	#[test]
	fn similar_looking_characters_removed() {
		let options = GenerationBuilder::new()
			.allow_group(CharacterGroup::ALL_READABLE_ASCII)
			.exclude_similar_looking_characters()
			.build()
			.unwrap();
		for c in SIMILAR_LOOKING_CHARACTERS {
			assert!(!options.allowed.contains(c));
		}
		assert_eq!(options.allowed.len(), 95 - SIMILAR_LOOKING_CHARACTERS.len());
	}

	#[test]
	fn large_repeated_input_is_deduplicated_in_order() {
		let repeated: Vec<char> = (0..200_000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
		let options = GenerationBuilder::new()
			.with_length(26)
			.allow_characters(&repeated)
			.and_allow_characters(&repeated)
			.build()
			.unwrap();
		let expected: Vec<char> = ('a'..='z').collect();
		assert_eq!(options.allowed, expected);
	}

	#[test]
	fn excluded_characters_can_be_allowed_again() {
		let options = GenerationBuilder::new()
			.allow_characters(&['a', 'b', 'c'])
			.exclude_characters(&['b'])
			.and_allow_characters(&['b', 'a'])
			.build()
			.unwrap();
		assert_eq!(options.allowed, vec!['a', 'c', 'b']);
	}

	#[test]
	fn replaced_characters_are_forgotten() {
		let options = GenerationBuilder::new()
			.allow_characters(&['x', 'y'])
			.allow_characters(&['z'])
			.and_allow_characters(&['x', 'z'])
			.build()
			.unwrap();
		assert_eq!(options.allowed, vec!['z', 'x']);
	}

	#[test]
	fn zero_length_is_reported_by_build() {
		let result = GenerationBuilder::new().with_length(0).with_length(5).build();
		assert!(matches!(result, Err(Error::OutOfRange(_))));
	}

	#[test]
	fn none_group_is_reported_by_build() {
		let result = GenerationBuilder::new().allow_group(CharacterGroup::LETTERS).and_allow_group(CharacterGroup::NONE).build();
		assert!(matches!(result, Err(Error::OutOfRange(_))));
	}

	#[test]
	fn coverage_longer_than_length_fails() {
		let result = GenerationBuilder::new()
			.with_length(12)
			.allow_group(CharacterGroup::ALL_ALPHA_NUMERIC)
			.each_character_must_occur_at_least_once()
			.build();
		assert_eq!(result, Err(Error::InvalidOperation { length: 12, minimum: 62 }));
	}

	#[test]
	fn similar_exclusion_happens_before_coverage_check() {
		let result = GenerationBuilder::new()
			.with_length(4)
			.allow_characters(&['a', 'b', 'l', '1', 'O'])
			.each_character_must_occur_at_least_once()
			.exclude_similar_looking_characters()
			.build();
		assert_eq!(result.unwrap().allowed, vec!['a', 'b']);
	}
}
