use log::trace;
use rand::TryRngCore;
use rand::rngs::OsRng;

use super::IndexSampler;
use crate::error::{Error, Result};

/// Largest bound the secure sampler accepts (draws fit in a 4-byte buffer).
pub const MAX_SECURE_BOUND: u64 = u32::MAX as u64;

/// Cryptographically secure index sampler.
///
/// Draws the minimum number of bytes able to represent `bound - 1` from the
/// operating system entropy source and rejects every draw at or above the
/// largest multiple of `bound` representable in those bytes. Reducing the
/// accepted draw modulo `bound` is then exactly uniform.
///
/// # Termination
/// The accepted share of the draw space is always above one half, so the
/// expected number of draws per sample is below 2. There is no retry cap:
/// capping would reintroduce bias.
///
/// # Counters
/// `draws()` and `rejections()` report how many byte draws were performed and
/// how many were discarded since creation.
#[derive(Debug, Default)]
pub struct SecureSampler {
	rng: OsRng,
	draws: u64,
	rejections: u64,
}

impl SecureSampler {
	/// Creates a sampler bound to the operating system entropy source.
	pub fn new() -> Self {
		Self { rng: OsRng, draws: 0, rejections: 0 }
	}

	/// Number of byte draws performed so far.
	pub fn draws(&self) -> u64 {
		self.draws
	}

	/// Number of draws discarded by the rejection step so far.
	pub fn rejections(&self) -> u64 {
		self.rejections
	}

	/// Minimum number of bytes whose value range covers `[0, bound)`.
	///
	/// Equals `ceil(log2(bound) / 8)`, computed on integers: the bit length of
	/// `bound - 1` rounded up to whole bytes. A bound of 1 needs no bytes.
	pub(crate) fn byte_count(bound: u64) -> u32 {
		if bound <= 1 {
			return 0;
		}
		let bits = u64::BITS - (bound - 1).leading_zeros();
		bits.div_ceil(8)
	}

	/// Largest multiple of `bound` representable in `byte_count` bytes.
	pub(crate) fn cutoff(bound: u64, byte_count: u32) -> u64 {
		let space = 1u64 << (byte_count * 8);
		(space / bound) * bound
	}

	/// Reads `byte_count` random bytes into the low-order end of a
	/// little-endian buffer and returns the resulting integer.
	fn draw(&mut self, byte_count: u32) -> Result<u64> {
		let mut buffer = [0u8; 4];
		self.rng
			.try_fill_bytes(&mut buffer[..byte_count as usize])
			.map_err(|e| Error::Entropy(e.to_string()))?;
		self.draws += 1;
		Ok(u32::from_le_bytes(buffer) as u64)
	}
}

impl IndexSampler for SecureSampler {
	fn sample(&mut self, bound: usize) -> Result<usize> {
		if bound == 0 {
			return Err(Error::InvalidArgument("bound must be greater than zero".to_owned()));
		}
		let bound = bound as u64;
		if bound > MAX_SECURE_BOUND {
			return Err(Error::InvalidArgument(format!(
				"bound must not exceed {}, got {}",
				MAX_SECURE_BOUND, bound
			)));
		}

		let byte_count = Self::byte_count(bound);
		let cutoff = Self::cutoff(bound, byte_count);

		loop {
			let draw = self.draw(byte_count)?;
			if draw < cutoff {
				return Ok((draw % bound) as usize);
			}
			self.rejections += 1;
			trace!("Rejected draw {} (cutoff {}, bound {})", draw, cutoff, bound);
		}
	}
}
