//! Pseudo-random sources matching the Java generators bit-for-bit, so spawn
//! rolls line up with a vanilla server for a given seed.

mod legacy_random;

pub use legacy_random::LegacyRandom;

/// A deterministic pseudo-random source.
pub trait Random {
    /// Forks off an independent generator seeded from this one.
    fn fork(&mut self) -> Self
    where
        Self: Sized;

    /// A uniform i32 over the full range.
    fn next_i32(&mut self) -> i32;

    /// A uniform value in `[0, bound)`. `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// A uniform i64 over the full range.
    fn next_i64(&mut self) -> i64;

    /// A uniform f32 in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// A uniform f64 in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// A uniform bool.
    fn next_bool(&mut self) -> bool;
}
