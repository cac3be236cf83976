//! Random string generation library.
//!
//! This crate provides a small random string generation system including:
//! - Bounded random index sampling (fast and cryptographically secure backends)
//! - String assembly with an optional "every character at least once" guarantee
//! - Named ASCII character groups, generation options and a fluent builder
//!
//! The usual entry point is [`RandomStringGenerator`]:
//!
//! ```
//! use rs_randstr_core::{CharacterGroup, RandomStringGenerator};
//!
//! let generator = RandomStringGenerator::cryptographic();
//! let token = generator.generate_from_group(24, CharacterGroup::FILE_SYSTEM_SAFE, false)?;
//! assert_eq!(token.chars().count(), 24);
//! # Ok::<(), rs_randstr_core::Error>(())
//! ```

/// Error type shared by every layer of the crate.
pub mod error;

/// Bounded random index samplers.
///
/// Exposes the `IndexSampler` trait and its fast and secure backends.
pub mod sampler;

/// Alphabets, character groups, options, the assembly engine and generators.
pub mod model;

pub use error::{Error, Result};
pub use model::alphabet::Alphabet;
pub use model::builder::GenerationBuilder;
pub use model::character_group::CharacterGroup;
pub use model::engine::GenerationRequest;
pub use model::generator::{RandomStringGenerator, SamplerKind};
pub use model::options::GenerationOptions;
pub use sampler::{FastSampler, IndexSampler, SecureSampler};

/// Maximum number of characters a single generation may produce.
pub const MAX_LENGTH: usize = 5000;

/// Maximum number of distinct symbols an alphabet may hold.
pub const MAX_ALPHABET_SIZE: usize = 5000;
