//! Bounded random index sampling.
//!
//! A sampler answers a single question: "give me a uniformly distributed
//! index in `[0, bound)`". The string assembly engine is generic over this
//! capability so that both backends share one placement algorithm:
//! - `FastSampler`: small, seedable pseudo-random generator (throughput first)
//! - `SecureSampler`: operating system entropy with rejection sampling

use crate::error::Result;

/// Pseudo-random backend built on `rand::rngs::SmallRng`.
pub mod fast;

/// Cryptographically secure backend built on `rand::rngs::OsRng`.
pub mod secure;

pub use fast::FastSampler;
pub use secure::SecureSampler;

/// Capability of drawing uniformly distributed indices below an exclusive bound.
///
/// # Contract
/// - `sample(bound)` returns a value in `[0, bound)`
/// - successive calls are independent
/// - `bound == 0` is rejected with `Error::InvalidArgument`
///
/// Instances are meant to be owned by a single generation call and are not
/// shared between threads.
pub trait IndexSampler {
	/// Draws an index in `[0, bound)`.
	fn sample(&mut self, bound: usize) -> Result<usize>;
}

impl<S: IndexSampler + ?Sized> IndexSampler for &mut S {
	fn sample(&mut self, bound: usize) -> Result<usize> {
		(**self).sample(bound)
	}
}

impl<S: IndexSampler + ?Sized> IndexSampler for Box<S> {
	fn sample(&mut self, bound: usize) -> Result<usize> {
		(**self).sample(bound)
	}
}
