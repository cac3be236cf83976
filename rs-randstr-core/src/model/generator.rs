use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::error::Result;
use crate::model::alphabet::Alphabet;
use crate::model::builder::GenerationBuilder;
use crate::model::character_group::CharacterGroup;
use crate::model::engine::{self, GenerationRequest};
use crate::model::options::{DEFAULT_GROUPS, GenerationOptions};
use crate::sampler::{FastSampler, IndexSampler, SecureSampler};

/// Which sampler backend a generator creates for each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerKind {
	/// `FastSampler` seeded from the thread-local generator.
	Fast,
	/// `FastSampler` derived from a fixed seed; reproducible.
	Seeded(u64),
	/// `SecureSampler` reading operating system entropy.
	Secure,
}

/// High-level random string generator.
///
/// # Responsibilities
/// - Turn convenience inputs (char slices, groups, options, builder closures)
///   into a validated `GenerationRequest`
/// - Create a fresh sampler for every call, so no random state is shared
///   between calls or threads
/// - Run the assembly engine
///
/// Generators are ordinary values owned by the caller; create as many as
/// needed. The only interior state is the call counter of a seeded
/// generator, which makes each call of a seeded generator differ while the
/// whole sequence stays reproducible.
#[derive(Debug)]
pub struct RandomStringGenerator {
	kind: SamplerKind,
	calls: AtomicU64,
}

impl RandomStringGenerator {
	pub fn new(kind: SamplerKind) -> Self {
		Self { kind, calls: AtomicU64::new(0) }
	}

	/// Fast, non-cryptographic generator.
	pub fn pseudo_random() -> Self {
		Self::new(SamplerKind::Fast)
	}

	/// Fast generator producing a reproducible sequence of strings.
	pub fn seeded(seed: u64) -> Self {
		Self::new(SamplerKind::Seeded(seed))
	}

	/// Generator backed by the operating system entropy source.
	pub fn cryptographic() -> Self {
		Self::new(SamplerKind::Secure)
	}

	pub fn kind(&self) -> SamplerKind {
		self.kind
	}

	/// Creates the sampler for one call.
	fn sampler(&self) -> Box<dyn IndexSampler> {
		#[cfg(test)]
		tests::SAMPLERS_CREATED.with(|created| created.set(created.get() + 1));

		match self.kind {
			SamplerKind::Fast => Box::new(FastSampler::new()),
			SamplerKind::Seeded(seed) => {
				let call = self.calls.fetch_add(1, Ordering::Relaxed);
				Box::new(FastSampler::from_seed(call_seed(seed, call)))
			}
			SamplerKind::Secure => Box::new(SecureSampler::new()),
		}
	}

	/// Generates a string for an already validated request.
	///
	/// The sampler lives for this call only.
	pub fn generate_request(&self, request: &GenerationRequest) -> Result<String> {
		let mut sampler = self.sampler();
		debug!("Running {:?} generator", self.kind);
		engine::generate(request, &mut sampler)
	}

	/// Generates `length` characters drawn from `allowed`.
	///
	/// Duplicates in `allowed` are ignored.
	///
	/// # Errors
	/// - `Error::OutOfRange` if `length` is zero or too large, or if
	///   `allowed` is empty or too large
	/// - `Error::InvalidOperation` if `each_character_at_least_once` is set
	///   and `allowed` holds more distinct characters than `length`
	/// - `Error::Entropy` if the secure backend cannot read entropy
	pub fn generate(&self, length: usize, allowed: &[char], each_character_at_least_once: bool) -> Result<String> {
		engine::validate_length(length)?;
		let alphabet = Alphabet::try_from(allowed)?;
		let request = GenerationRequest::new(length, alphabet, each_character_at_least_once)?;
		self.generate_request(&request)
	}

	/// Generates `length` characters drawn from the given character groups.
	pub fn generate_from_group(&self, length: usize, groups: CharacterGroup, each_character_at_least_once: bool) -> Result<String> {
		engine::validate_length(length)?;
		self.generate(length, &groups.chars()?, each_character_at_least_once)
	}

	/// Generates `length` characters from the default, file-system-safe set.
	pub fn generate_with_length(&self, length: usize) -> Result<String> {
		self.generate_from_group(length, DEFAULT_GROUPS, false)
	}

	/// Generates a string from options assembled by a builder closure.
	///
	/// ```
	/// use rs_randstr_core::{CharacterGroup, RandomStringGenerator};
	///
	/// let pin = RandomStringGenerator::pseudo_random()
	/// 	.generate_with(|b| b.with_length(6).allow_group(CharacterGroup::DIGITS))?;
	/// assert!(pin.chars().all(|c| c.is_ascii_digit()));
	/// # Ok::<(), rs_randstr_core::Error>(())
	/// ```
	pub fn generate_with<F>(&self, configure: F) -> Result<String>
	where
		F: FnOnce(GenerationBuilder) -> GenerationBuilder,
	{
		let options = configure(GenerationBuilder::new()).build()?;
		self.generate_options(&options)
	}

	pub fn generate_options(&self, options: &GenerationOptions) -> Result<String> {
		self.generate(options.length, &options.allowed, options.each_character_at_least_once)
	}

	/// Generates 32 file-system-safe characters.
	pub fn generate_default(&self) -> Result<String> {
		self.generate_options(&GenerationOptions::default())
	}
}

/// Seed of call `call` of a generator seeded with `seed`.
///
/// The seed is hashed before the counter is added, so nearby seeds such as
/// 1, 2, 3 yield unrelated sequences instead of the same one shifted by a call.
fn call_seed(seed: u64, call: u64) -> u64 {
	splitmix64(splitmix64(seed).wrapping_add(call))
}

/// SplitMix64 finalizer.
fn splitmix64(value: u64) -> u64 {
	let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
	z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
	z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
	z ^ (z >> 31)
}

impl Default for RandomStringGenerator {
	fn default() -> Self {
		Self::cryptographic()
	}
}

impl Clone for RandomStringGenerator {
	fn clone(&self) -> Self {
		Self { kind: self.kind, calls: AtomicU64::new(self.calls.load(Ordering::Relaxed)) }
	}
}
