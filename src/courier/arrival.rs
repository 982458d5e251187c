//! Courier arrival delays.
//!
//! A courier shows up `(draw % 13) + 3` time units after dispatch, with
//! `draw` uniform over `0..=1091`. 1092 is a multiple of 13, so every delay
//! in `3..=15` is equally likely.

use rand::Rng;

pub const ARRIVAL_DRAW_MAX: u32 = 1091;
pub const ARRIVAL_SPREAD: u32 = 13;
pub const ARRIVAL_MIN_UNITS: u32 = 3;
pub const ARRIVAL_MAX_UNITS: u32 = ARRIVAL_MIN_UNITS + ARRIVAL_SPREAD - 1;

/// Draw how many time units a courier needs to arrive.
pub fn draw_arrival_units<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..=ARRIVAL_DRAW_MAX) % ARRIVAL_SPREAD + ARRIVAL_MIN_UNITS
}

/// Derive the seed of courier `index` from the run seed.
///
/// SplitMix64 finalizer, so neighbouring indices get unrelated streams.
pub fn courier_seed(run_seed: u64, index: usize) -> u64 {
    let mut z = run_seed.wrapping_add((index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
