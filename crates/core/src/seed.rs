//! Seed expansion: turns an `i32` seed into the generator's initial ring.
//!
//! The ring is 56 words; index 0 is never read or written by the generator.
//! Words `1..=55` are filled with a stride-21 walk over `1..55` and then
//! mixed by four subtractive passes with an offset of 31.
//!
//! Two schemes produce the ring:
//!
//! - [`full_ring`] runs the walk in wrapping 32-bit arithmetic with a single
//!   conditional `+ MBIG` correction per step. This is the reference runtime's
//!   behavior, including its overflow quirks for `|seed| > MSEED`.
//! - [`lite_ring`] evaluates precomputed affine coefficients modulo `MBIG`.
//!   Every ring word is `offset + slope * subtraction (mod MBIG)` when the walk
//!   runs in exact modular arithmetic, so the tables are built once at compile
//!   time and construction is a single pass of multiply-adds.

use crate::variant::Variant;

/// Modulus of the subtractive generator, also the `Sample` divisor.
pub const MBIG: i32 = i32::MAX;

/// Seeding constant of the reference algorithm.
pub const MSEED: i32 = 161_803_398;

/// Length of the ring buffer. Slot 0 is unused.
pub const RING_LEN: usize = 56;

/// Initial value of the `inext` cursor.
pub const INEXT_START: usize = 0;

/// Initial value of the `inextp` cursor; the lag between the two cursors.
pub const INEXTP_START: usize = 21;

const STRIDE: usize = 21;
const SHUFFLE_PASSES: usize = 4;
const SHUFFLE_OFFSET: usize = 30;

/// The value subtracted from `MSEED`. `i32::MIN` has no absolute value and
/// maps to `i32::MAX`.
pub fn subtraction(seed: i32) -> i32 {
    seed.checked_abs().unwrap_or(i32::MAX)
}

/// Builds the initial ring for `seed` under `variant`.
pub fn initial_ring(seed: i32, variant: Variant) -> [i32; RING_LEN] {
    match variant {
        Variant::Full => full_ring(seed),
        Variant::Lite => lite_ring(seed),
    }
}

/// Wrapping 32-bit seeding, bit-exact with the reference runtime.
pub fn full_ring(seed: i32) -> [i32; RING_LEN] {
    let mut ring = [0i32; RING_LEN];

    let mut mj = MSEED.wrapping_sub(subtraction(seed));
    ring[RING_LEN - 1] = mj;
    let mut mk = 1i32;

    for i in 1..RING_LEN - 1 {
        let ii = (STRIDE * i) % (RING_LEN - 1);
        ring[ii] = mk;
        mk = mj.wrapping_sub(mk);
        if mk < 0 {
            mk = mk.wrapping_add(MBIG);
        }
        mj = ring[ii];
    }

    for _ in 0..SHUFFLE_PASSES {
        for i in 1..RING_LEN {
            let partner = 1 + (i + SHUFFLE_OFFSET) % (RING_LEN - 1);
            ring[i] = ring[i].wrapping_sub(ring[partner]);
            // A single correction, never a loop: the reference leaves
            // whatever one addition produces.
            if ring[i] < 0 {
                ring[i] = ring[i].wrapping_add(MBIG);
            }
        }
    }

    ring
}

/// Table-driven modular seeding.
pub fn lite_ring(seed: i32) -> [i32; RING_LEN] {
    let sub = subtraction(seed) as i64;
    let m = MBIG as i64;
    let mut ring = [0i32; RING_LEN];
    for (k, word) in ring.iter_mut().enumerate().skip(1) {
        // offset, slope < 2^31 and sub <= 2^31 - 1, so this stays below 2^63.
        *word = ((LITE_OFFSET[k] + LITE_SLOPE[k] * sub) % m) as i32;
    }
    ring
}

/// Runs the seeding walk in exact arithmetic modulo `MBIG` for a given
/// subtraction. Used at compile time to derive the Lite tables.
pub const fn modular_ring(subtraction: i64) -> [i64; RING_LEN] {
    let m = MBIG as i64;
    let mut ring = [0i64; RING_LEN];

    let mut mj = (MSEED as i64 - subtraction).rem_euclid(m);
    ring[RING_LEN - 1] = mj;
    let mut mk = 1i64;

    let mut i = 1;
    while i < RING_LEN - 1 {
        let ii = (STRIDE * i) % (RING_LEN - 1);
        ring[ii] = mk;
        mk = (mj - mk).rem_euclid(m);
        mj = ring[ii];
        i += 1;
    }

    let mut pass = 0;
    while pass < SHUFFLE_PASSES {
        let mut i = 1;
        while i < RING_LEN {
            let partner = 1 + (i + SHUFFLE_OFFSET) % (RING_LEN - 1);
            ring[i] = (ring[i] - ring[partner]).rem_euclid(m);
            i += 1;
        }
        pass += 1;
    }

    ring
}

const fn lite_slope() -> [i64; RING_LEN] {
    let m = MBIG as i64;
    let at_zero = modular_ring(0);
    let at_one = modular_ring(1);
    let mut slope = [0i64; RING_LEN];
    let mut k = 0;
    while k < RING_LEN {
        slope[k] = (at_one[k] - at_zero[k]).rem_euclid(m);
        k += 1;
    }
    slope
}

/// Ring words for subtraction 0.
const LITE_OFFSET: [i64; RING_LEN] = modular_ring(0);

/// Per-word change of the ring for each unit of subtraction, modulo `MBIG`.
const LITE_SLOPE: [i64; RING_LEN] = lite_slope();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtraction_is_absolute_value_with_min_guard() {
        assert_eq!(subtraction(0), 0);
        assert_eq!(subtraction(12345), 12345);
        assert_eq!(subtraction(-12345), 12345);
        assert_eq!(subtraction(i32::MAX), i32::MAX);
        assert_eq!(subtraction(i32::MIN), i32::MAX);
    }

    #[test]
    fn full_ring_for_seed_zero_matches_known_words() {
        // Recorded from the reference runtime's seeding of Random(0).
        let ring = full_ring(0);
        assert_eq!(
            &ring[..6],
            &[0, 1_440_537_475, 765_327_687, 2_146_736_586, 1_117_085_494, 1_507_827_100]
        );
        assert_eq!(ring[55], 25_386_146);
    }

    #[test]
    fn slot_zero_is_never_written() {
        for seed in [0, 1, -1, 12345, i32::MIN, i32::MAX] {
            assert_eq!(full_ring(seed)[0], 0, "full ring slot 0 for seed {seed}");
            assert_eq!(lite_ring(seed)[0], 0, "lite ring slot 0 for seed {seed}");
        }
    }

    #[test]
    fn full_ring_words_are_reduced_after_seeding() {
        for seed in [0, 1, -1, 42, 12345, -638_161_535, i32::MIN, i32::MAX] {
            for (k, &w) in full_ring(seed).iter().enumerate() {
                assert!((0..=MBIG).contains(&w), "seed {seed}: word {k} = {w}");
            }
        }
    }

    #[test]
    fn lite_matches_full_up_to_mseed() {
        for seed in [0, 1, -1, 42, 100, 12345, -100, MSEED, -MSEED, MSEED - 1] {
            assert_eq!(lite_ring(seed), full_ring(seed), "seed {seed}");
        }
    }

    #[test]
    fn lite_diverges_from_full_when_32_bit_wrap_kicks_in() {
        assert_ne!(lite_ring(i32::MAX), full_ring(i32::MAX));
        // Only the words reached by the wrapped arithmetic differ.
        let lite = lite_ring(-638_161_535);
        let full = full_ring(-638_161_535);
        assert_eq!(&lite[..6], &full[..6]);
        assert_ne!(lite, full);
    }

    #[test]
    fn lite_ring_is_modular_seeding_for_any_subtraction() {
        for sub in [0i64, 1, 2, 7, 12345, 638_161_535, MBIG as i64 - 1, MBIG as i64] {
            let expected = modular_ring(sub);
            let seed = sub as i32;
            let lite = lite_ring(seed);
            for k in 0..RING_LEN {
                assert_eq!(lite[k] as i64, expected[k], "subtraction {sub}, word {k}");
            }
        }
    }

    #[test]
    fn lite_treats_max_like_zero() {
        // MBIG is congruent to 0, so Random(i32::MAX) seeds like Random(0).
        assert_eq!(lite_ring(i32::MAX), lite_ring(0));
        assert_eq!(lite_ring(i32::MIN), lite_ring(0));
    }

    #[test]
    fn initial_ring_dispatches_on_variant() {
        assert_eq!(initial_ring(i32::MAX, Variant::Full), full_ring(i32::MAX));
        assert_eq!(initial_ring(i32::MAX, Variant::Lite), lite_ring(i32::MAX));
    }
}
