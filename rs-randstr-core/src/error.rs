use thiserror::Error;

/// Errors that can occur while building an alphabet or generating a string.
///
/// Every variant except `Entropy` is a precondition violation the caller can
/// correct. Nothing is retried internally and no partial output is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	/// An argument passed to a sampler is unusable (ex. a bound of zero).
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A length, alphabet or group is empty or exceeds its maximum.
	#[error("Out of range: {0}")]
	OutOfRange(String),

	/// Full coverage was requested for an alphabet larger than the output.
	#[error(
		"Each character must occur at least once, but the requested length {length} \
		is shorter than the minimum length {minimum}"
	)]
	InvalidOperation { length: usize, minimum: usize },

	/// The operating system entropy source failed.
	#[error("Entropy source failure: {0}")]
	Entropy(String),

	/// A character group name could not be parsed.
	#[error("Unknown character group: {0}")]
	UnknownGroup(String),
}

pub type Result<T> = std::result::Result<T, Error>;
