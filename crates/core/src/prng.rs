//! The legacy subtractive generator and its output transforms.
//!
//! Every output reproduces the reference runtime bit-for-bit: the advance
//! step, the `1 / MBIG` scaling in [`LegacyRandom::sample`], the truncating
//! casts in [`LegacyRandom::next`] and [`LegacyRandom::next_range`], and the
//! two-draw sample used for ranges wider than `MBIG`. None of this may be
//! "improved"; downstream predictions depend on the exact rounding.

use serde::{Deserialize, Serialize};

use crate::error::RngError;
use crate::seed::{self, INEXTP_START, INEXT_START, MBIG, RING_LEN};
use crate::variant::Variant;

/// Replica of the legacy subtractive generator.
///
/// A generator is a pure function of `(seed, variant, calls made)`. It holds
/// no shared state; give each thread its own instance. Every output method
/// takes `&mut self` and advances the ring, except when it returns an error,
/// in which case nothing is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedState", into = "SavedState")]
pub struct LegacyRandom {
    variant: Variant,
    seed_array: [i32; RING_LEN],
    inext: usize,
    inextp: usize,
}

impl LegacyRandom {
    /// Creates a generator for `seed`. Every `i32` is a valid seed.
    pub fn new(seed: i32, variant: Variant) -> Self {
        Self {
            variant,
            seed_array: seed::initial_ring(seed, variant),
            inext: INEXT_START,
            inextp: INEXTP_START,
        }
    }

    /// Shorthand for `LegacyRandom::new(seed, Variant::Full)`.
    pub fn full(seed: i32) -> Self {
        Self::new(seed, Variant::Full)
    }

    /// Shorthand for `LegacyRandom::new(seed, Variant::Lite)`.
    pub fn lite(seed: i32) -> Self {
        Self::new(seed, Variant::Lite)
    }

    /// Returns the seeding variant this generator was built with.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Advances the ring one step and returns the new word in `[0, MBIG)`.
    #[inline]
    fn step(&mut self) -> i32 {
        let inext = if self.inext + 1 >= RING_LEN { 1 } else { self.inext + 1 };
        let inextp = if self.inextp + 1 >= RING_LEN { 1 } else { self.inextp + 1 };

        let mut ret = self.seed_array[inext].wrapping_sub(self.seed_array[inextp]);
        if ret == MBIG {
            ret -= 1;
        }
        if ret < 0 {
            ret = ret.wrapping_add(MBIG);
        }

        self.seed_array[inext] = ret;
        self.inext = inext;
        self.inextp = inextp;
        ret
    }

    /// Returns the raw next word, an integer in `[0, i32::MAX)`.
    pub fn next_raw(&mut self) -> i32 {
        self.step()
    }

    /// Returns a double in `[0, 1)`. Advances the ring one step.
    pub fn sample(&mut self) -> f64 {
        self.step() as f64 * (1.0 / MBIG as f64)
    }

    /// Same as [`sample`](Self::sample).
    pub fn next_f64(&mut self) -> f64 {
        self.sample()
    }

    /// Returns an integer in `[0, bound)`. Advances the ring one step.
    ///
    /// Fails with [`RngError::InvalidArgument`] if `bound <= 0`; the ring is
    /// left untouched in that case.
    pub fn next(&mut self, bound: i32) -> Result<i32, RngError> {
        if bound <= 0 {
            return Err(RngError::invalid(
                "bound",
                format!("must be positive, got {bound}"),
            ));
        }
        Ok((self.sample() * bound as f64) as i32)
    }

    /// Returns an integer in `[min, max)`, or `min` when `min == max`.
    ///
    /// Ranges up to `i32::MAX` wide take one step. Wider ranges take two
    /// steps: the second decides the sign of the first, which spreads the
    /// draw over the whole span.
    ///
    /// Fails with [`RngError::InvalidArgument`] if `min > max`; the ring is
    /// left untouched in that case.
    pub fn next_range(&mut self, min: i32, max: i32) -> Result<i32, RngError> {
        if min > max {
            return Err(RngError::invalid(
                "min",
                format!("{min} is greater than max {max}"),
            ));
        }
        let range = max as i64 - min as i64;
        if range <= MBIG as i64 {
            Ok((self.sample() * range as f64) as i32 + min)
        } else {
            let scaled = (self.large_range_sample() * range as f64) as i64;
            Ok((scaled + min as i64) as i32)
        }
    }

    fn large_range_sample(&mut self) -> f64 {
        let mut result = self.step();
        if self.step() % 2 == 0 {
            result = -result;
        }
        let mut d = result as f64;
        d += (MBIG - 1) as f64;
        d /= 2.0 * MBIG as f64 - 1.0;
        d
    }

    /// Fills `buf` with bytes, one step per byte (the low byte of each word).
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = (self.step() % 256) as u8;
        }
    }
}

/// Serialized form of a generator: the ring as a list plus both cursors.
#[derive(Serialize, Deserialize)]
struct SavedState {
    variant: Variant,
    seed_array: Vec<i32>,
    inext: usize,
    inextp: usize,
}

impl From<LegacyRandom> for SavedState {
    fn from(rng: LegacyRandom) -> Self {
        SavedState {
            variant: rng.variant,
            seed_array: rng.seed_array.to_vec(),
            inext: rng.inext,
            inextp: rng.inextp,
        }
    }
}

impl TryFrom<SavedState> for LegacyRandom {
    type Error = RngError;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        let len = saved.seed_array.len();
        let seed_array: [i32; RING_LEN] = saved.seed_array.try_into().map_err(|_| {
            RngError::invalid(
                "seed_array",
                format!("expected {RING_LEN} words, got {len}"),
            )
        })?;
        if saved.inext >= RING_LEN {
            return Err(RngError::invalid(
                "inext",
                format!("{} is outside the ring", saved.inext),
            ));
        }
        // The cursors always stay 21 apart on the 55-slot cycle.
        if saved.inextp != 1 + (saved.inext + INEXTP_START - 1) % (RING_LEN - 1) {
            return Err(RngError::invalid(
                "inextp",
                format!("{} is not in step with inext {}", saved.inextp, saved.inext),
            ));
        }
        Ok(LegacyRandom {
            variant: saved.variant,
            seed_array,
            inext: saved.inext,
            inextp: saved.inextp,
        })
    }
}
