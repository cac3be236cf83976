//! Top-level module for random string generation.
//!
//! This module provides:
//! - Alphabets (`Alphabet`)
//! - Named ASCII character groups (`CharacterGroup`)
//! - Generation options and their fluent builder
//! - The string assembly engine (`engine::generate`)
//! - A high-level generation interface (`RandomStringGenerator`)

/// Ordered, duplicate-free symbol set consumed by the engine.
pub mod alphabet;

/// Named ASCII character groups and their fixed tables.
///
/// Groups are bit flags combined with `|` and parsed from names.
pub mod character_group;

/// Plain generation parameters with crate-wide defaults.
pub mod options;

/// Fluent builder producing `GenerationOptions`.
pub mod builder;

/// Uniform and full-coverage string assembly over any `IndexSampler`.
pub mod engine;

/// High-level interface creating one sampler per call.
///
/// Exposes fast, seeded and cryptographic generators with convenience
/// entry points for slices, groups, options and builder closures.
pub mod generator;
