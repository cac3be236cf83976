use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::character_group::CharacterGroup;

/// Length used when none is specified.
pub const DEFAULT_LENGTH: usize = 32;

/// Character groups used when none are specified.
pub const DEFAULT_GROUPS: CharacterGroup = CharacterGroup::FILE_SYSTEM_SAFE;

/// Parameters of a single random string generation.
///
/// `GenerationOptions` is a plain value: it is not validated on
/// construction. Validation happens when the options reach a generator,
/// before any random number is drawn.
///
/// # Defaults
/// - `length`: 32
/// - `allowed`: upper and lower case letters, digits, `-` and `_`
/// - `each_character_at_least_once`: `false`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationOptions {
	/// Number of characters to produce.
	pub length: usize,

	/// Characters eligible for placement. Duplicates are ignored.
	pub allowed: Vec<char>,

	/// Whether every allowed character must appear in the output.
	pub each_character_at_least_once: bool,
}

impl GenerationOptions {
	pub fn new(length: usize, allowed: Vec<char>, each_character_at_least_once: bool) -> Self {
		Self { length, allowed, each_character_at_least_once }
	}

	/// Creates options drawing from a set of character groups.
	///
	/// # Errors
	/// Returns `Error::OutOfRange` if `groups` is empty.
	pub fn from_groups(length: usize, groups: CharacterGroup, each_character_at_least_once: bool) -> Result<Self> {
		Ok(Self::new(length, groups.chars()?, each_character_at_least_once))
	}
}

impl Default for GenerationOptions {
	fn default() -> Self {
		let allowed = DEFAULT_GROUPS.chars().unwrap_or_default();
		Self::new(DEFAULT_LENGTH, allowed, false)
	}
}
