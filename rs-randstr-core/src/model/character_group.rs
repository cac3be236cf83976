use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

const UPPER_CASE_LETTERS: &[char] = &[
	'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
	'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const LOWER_CASE_LETTERS: &[char] = &[
	'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
	'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const DIGITS: &[char] = &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];
const MINUS: &[char] = &['-'];
const UNDERSCORE: &[char] = &['_'];
const SPACE: &[char] = &[' '];
const BRACKETS: &[char] = &['<', '>', '{', '}', '[', ']', '(', ')'];
const SPECIAL_READABLE_ASCII: &[char] = &[
	'!', '"', '#', '$', '%', '&', '\'', '*', '+', ',', '.',
	'/', ':', ';', '=', '?', '@', '\\', '^', '`', '|', '~',
];

/// Characters easily confused with one another when read by a human.
pub const SIMILAR_LOOKING_CHARACTERS: &[char] = &['1', 'l', 'I', '|', 'o', 'O', '0'];

/// Atomic groups with their names and tables, in concatenation order.
static ATOMIC: [(CharacterGroup, &str, &[char]); 8] = [
	(CharacterGroup::UPPER_CASE_LETTERS, "upper-case-letters", UPPER_CASE_LETTERS),
	(CharacterGroup::LOWER_CASE_LETTERS, "lower-case-letters", LOWER_CASE_LETTERS),
	(CharacterGroup::DIGITS, "digits", DIGITS),
	(CharacterGroup::MINUS, "minus", MINUS),
	(CharacterGroup::UNDERSCORE, "underscore", UNDERSCORE),
	(CharacterGroup::SPACE, "space", SPACE),
	(CharacterGroup::BRACKETS, "brackets", BRACKETS),
	(CharacterGroup::SPECIAL_READABLE_ASCII, "special-readable-ascii", SPECIAL_READABLE_ASCII),
];

/// Composite names accepted by the parser.
static COMPOSITE: [(CharacterGroup, &str); 5] = [
	(CharacterGroup::NONE, "none"),
	(CharacterGroup::LETTERS, "letters"),
	(CharacterGroup::ALL_ALPHA_NUMERIC, "all-alpha-numeric"),
	(CharacterGroup::FILE_SYSTEM_SAFE, "file-system-safe"),
	(CharacterGroup::ALL_READABLE_ASCII, "all-readable-ascii"),
];

/// Set of named ASCII character groups.
///
/// Groups combine with `|`. The characters of a set are produced by
/// `chars()` in a fixed order (upper case, lower case, digits, minus,
/// underscore, space, brackets, special characters), so a given set always
/// yields the same alphabet.
///
/// # Example
/// ```
/// use rs_randstr_core::CharacterGroup;
///
/// let group = CharacterGroup::LETTERS | CharacterGroup::DIGITS;
/// assert_eq!(group, CharacterGroup::ALL_ALPHA_NUMERIC);
/// assert_eq!(group.chars()?.len(), 62);
/// # Ok::<(), rs_randstr_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharacterGroup(u16);

impl CharacterGroup {
	pub const NONE: Self = Self(0);
	pub const UPPER_CASE_LETTERS: Self = Self(1);
	pub const LOWER_CASE_LETTERS: Self = Self(1 << 1);
	pub const DIGITS: Self = Self(1 << 2);
	pub const MINUS: Self = Self(1 << 3);
	pub const UNDERSCORE: Self = Self(1 << 4);
	pub const SPACE: Self = Self(1 << 5);
	pub const BRACKETS: Self = Self(1 << 6);
	pub const SPECIAL_READABLE_ASCII: Self = Self(1 << 7);

	pub const LETTERS: Self = Self(Self::UPPER_CASE_LETTERS.0 | Self::LOWER_CASE_LETTERS.0);
	pub const ALL_ALPHA_NUMERIC: Self = Self(Self::LETTERS.0 | Self::DIGITS.0);
	pub const FILE_SYSTEM_SAFE: Self = Self(Self::ALL_ALPHA_NUMERIC.0 | Self::MINUS.0 | Self::UNDERSCORE.0);
	pub const ALL_READABLE_ASCII: Self = Self(
		Self::FILE_SYSTEM_SAFE.0 | Self::SPACE.0 | Self::BRACKETS.0 | Self::SPECIAL_READABLE_ASCII.0,
	);

	/// Returns `true` if every group of `other` is part of `self`.
	pub fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}

	pub fn is_empty(self) -> bool {
		self.0 == 0
	}

	/// Concatenates the tables of every group in the set.
	///
	/// # Errors
	/// Returns `Error::OutOfRange` for the empty set.
	pub fn chars(self) -> Result<Vec<char>> {
		if self.is_empty() {
			return Err(Error::OutOfRange(
				"at least one character group is needed to generate a random string".to_owned(),
			));
		}
		Ok(ATOMIC
			.iter()
			.filter(|(group, _, _)| self.contains(*group))
			.flat_map(|(_, _, table)| table.iter().copied())
			.collect())
	}

	/// All group names the parser understands, paired with their group.
	pub fn names() -> impl Iterator<Item = (&'static str, Self)> {
		ATOMIC
			.iter()
			.map(|(group, name, _)| (*name, *group))
			.chain(COMPOSITE.iter().map(|(group, name)| (*name, *group)))
	}

	/// Looks up a single group by name.
	///
	/// Matching ignores case as well as `-`, `_` and spaces, so
	/// `"FileSystemSafe"`, `"file_system_safe"` and `"file-system-safe"`
	/// are equivalent.
	pub fn from_name(name: &str) -> Option<Self> {
		let wanted = Self::normalize(name);
		Self::names()
			.find(|(candidate, _)| Self::normalize(candidate) == wanted)
			.map(|(_, group)| group)
	}

	fn normalize(name: &str) -> String {
		name.chars()
			.filter(|c| !matches!(c, '-' | '_' | ' '))
			.flat_map(|c| c.to_lowercase())
			.collect()
	}
}

impl BitOr for CharacterGroup {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		Self(self.0 | rhs.0)
	}
}

impl BitOrAssign for CharacterGroup {
	fn bitor_assign(&mut self, rhs: Self) {
		self.0 |= rhs.0;
	}
}

impl BitAnd for CharacterGroup {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self {
		Self(self.0 & rhs.0)
	}
}

/// Comma separated list of atomic group names, or `none`.
impl fmt::Display for CharacterGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("none");
		}
		let names: Vec<&str> = ATOMIC
			.iter()
			.filter(|(group, _, _)| self.contains(*group))
			.map(|(_, name, _)| *name)
			.collect();
		f.write_str(&names.join(","))
	}
}

/// Parses a comma separated union of group names.
impl FromStr for CharacterGroup {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let mut group = Self::NONE;
		for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
			group |= Self::from_name(name).ok_or_else(|| Error::UnknownGroup(name.to_owned()))?;
		}
		Ok(group)
	}
}

impl Serialize for CharacterGroup {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for CharacterGroup {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}
