use crate::random::Random;

/// The 48-bit linear congruential generator used by `java.util.Random`.
///
/// This is the generator backing a vanilla server world's `random` field,
/// which the spawn cycle draws from.
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Creates a generator from a seed, scrambling it the way Java does.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed as i64 ^ 0x5DEECE66D) & 0xFFFF_FFFF_FFFF,
        }
    }

    fn next(&mut self, bits: u64) -> i32 {
        (self.next_random() >> (48 - bits)) as i32
    }

    fn next_random(&mut self) -> i64 {
        let m = self
            .seed
            .wrapping_mul(0x5DEECE66D)
            .wrapping_add(0xB)
            & 0xFFFF_FFFF_FFFF;
        self.seed = m;
        m
    }
}

impl Random for LegacyRandom {
    fn fork(&mut self) -> Self {
        Self::from_seed(self.next_i64() as u64)
    }

    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        if bound & bound.wrapping_sub(1) == 0 {
            ((bound as i64).wrapping_mul(self.next(31) as i64) >> 31) as i32
        } else {
            loop {
                let i = self.next(31);
                let j = i % bound;
                if i.wrapping_sub(j).wrapping_add(bound.wrapping_sub(1)) >= 0 {
                    return j;
                }
            }
        }
    }

    fn next_i64(&mut self) -> i64 {
        let i = self.next_i32();
        let j = self.next_i32();
        ((i as i64) << 32).wrapping_add(j as i64)
    }

    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 * 5.960_464_5e-8f32
    }

    fn next_f64(&mut self) -> f64 {
        (((self.next(26) as u64) << 27) | (self.next(27) as u64)) as f64 * 1.110_223e-16f32 as f64
    }

    fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }
}
