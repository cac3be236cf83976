use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::IndexSampler;
use crate::error::{Error, Result};

/// Fast, non-cryptographic index sampler.
///
/// Wraps a `SmallRng` and delegates to `random_range`, which is already free
/// of modulo bias. The output is predictable from the seed: never use this
/// backend for secrets.
///
/// # Seeding
/// - `new()` seeds from the thread-local generator
/// - `from_seed(u64)` gives a reproducible sequence
#[derive(Debug, Clone)]
pub struct FastSampler {
	rng: SmallRng,
}

impl FastSampler {
	/// Creates a sampler seeded from the thread-local generator.
	pub fn new() -> Self {
		Self { rng: SmallRng::from_rng(&mut rand::rng()) }
	}

	/// Creates a sampler producing a reproducible sequence for `seed`.
	pub fn from_seed(seed: u64) -> Self {
		Self { rng: SmallRng::seed_from_u64(seed) }
	}
}

impl Default for FastSampler {
	fn default() -> Self {
		Self::new()
	}
}

impl IndexSampler for FastSampler {
	fn sample(&mut self, bound: usize) -> Result<usize> {
		if bound == 0 {
			return Err(Error::InvalidArgument("bound must be greater than zero".to_owned()));
		}
		Ok(self.rng.random_range(0..bound))
	}
}
