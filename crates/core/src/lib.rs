#![deny(unsafe_code)]
//! Bit-exact replica of the legacy subtractive pseudo-random generator.
//!
//! Provides `LegacyRandom` (seeding, state advance, `sample`/`next` and the
//! other reference output methods), the `Variant` switch between the exact
//! 32-bit seeding and the table-driven modular seeding, `RngError`, and the
//! parity vector model used to diff this generator against other
//! implementations.

pub mod error;
pub mod prng;
pub mod seed;
pub mod variant;
pub mod vector;

pub use error::RngError;
pub use prng::LegacyRandom;
pub use variant::Variant;
pub use vector::{Method, Mismatch, Value, VectorRecord, VectorSet, VectorSpec};
