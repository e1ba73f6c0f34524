// Wrapper types making it harder to accidentally use the wrong underlying type.

use crate::math::{Vector2, Vector3};

/// Chunk edge length as a power of two, used for block-to-chunk shifts.
const CHUNK_BITS: i32 = 4;

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a block position from world coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Returns this position offset `n` blocks upwards.
    #[must_use]
    pub const fn up(self, n: i32) -> Self {
        Self::new(self.0.x, self.0.y + n, self.0.z)
    }

    /// Returns this position offset `n` blocks east (positive X).
    #[must_use]
    pub const fn east(self, n: i32) -> Self {
        Self::new(self.0.x + n, self.0.y, self.0.z)
    }

    /// Returns this position offset `n` blocks south (positive Z).
    #[must_use]
    pub const fn south(self, n: i32) -> Self {
        Self::new(self.0.x, self.0.y, self.0.z + n)
    }
}

/// A chunk position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos(pub Vector2<i32>);

impl ChunkPos {
    /// Creates a chunk position from chunk coordinates.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self(Vector2::new(x, z))
    }

    /// The chunk containing the given block position.
    ///
    /// Arithmetic shift so negative coordinates round towards negative
    /// infinity, matching the 16-block chunk grid.
    #[must_use]
    pub const fn from_block(pos: BlockPos) -> Self {
        Self::new(pos.0.x >> CHUNK_BITS, pos.0.z >> CHUNK_BITS)
    }

    /// Packs this position into a single i64 key.
    ///
    /// Lower 32 bits hold x, upper 32 bits hold z. Equal chunks always
    /// produce equal keys.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        (self.0.x as u32 as i64) | ((self.0.y as u32 as i64) << 32)
    }

    /// Unpacks a key produced by [`Self::as_i64`].
    #[must_use]
    pub const fn from_i64(key: i64) -> Self {
        Self::new(key as i32, (key >> 32) as i32)
    }

    /// All chunks within Chebyshev distance `radius` of this chunk, in
    /// row-major order. Includes this chunk itself.
    #[must_use]
    pub fn chunks_within_radius(self, radius: u8) -> Vec<ChunkPos> {
        let radius = i32::from(radius);
        let mut chunks = Vec::with_capacity(((radius * 2 + 1) * (radius * 2 + 1)) as usize);

        for dx in -radius..=radius {
            for dz in -radius..=radius {
                chunks.push(Self::new(self.0.x + dx, self.0.y + dz));
            }
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_offsets() {
        let pos = BlockPos::new(1, 2, 3);
        assert_eq!(pos.up(20), BlockPos::new(1, 22, 3));
        assert_eq!(pos.east(-10), BlockPos::new(-9, 2, 3));
        assert_eq!(pos.south(7), BlockPos::new(1, 2, 10));
    }

    #[test]
    fn test_chunk_from_block() {
        assert_eq!(ChunkPos::from_block(BlockPos::new(0, 64, 0)), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::from_block(BlockPos::new(15, 64, 15)), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::from_block(BlockPos::new(16, 64, 31)), ChunkPos::new(1, 1));
        // Negative coordinates round towards negative infinity
        assert_eq!(ChunkPos::from_block(BlockPos::new(-1, 64, -16)), ChunkPos::new(-1, -1));
        assert_eq!(ChunkPos::from_block(BlockPos::new(-17, 64, -33)), ChunkPos::new(-2, -3));
    }

    #[test]
    fn test_packed_key_round_trip() {
        for pos in [
            ChunkPos::new(0, 0),
            ChunkPos::new(1, -1),
            ChunkPos::new(-1, 1),
            ChunkPos::new(i32::MAX, i32::MIN),
            ChunkPos::new(-30_000_000 / 16, 30_000_000 / 16),
        ] {
            assert_eq!(ChunkPos::from_i64(pos.as_i64()), pos);
        }
    }

    #[test]
    fn test_packed_keys_distinct() {
        // (x, z) and (z, x) must not collide
        assert_ne!(ChunkPos::new(1, 2).as_i64(), ChunkPos::new(2, 1).as_i64());
        assert_ne!(ChunkPos::new(-1, 0).as_i64(), ChunkPos::new(0, -1).as_i64());
    }

    #[test]
    fn test_chunks_within_radius() {
        let center = ChunkPos::new(10, -10);

        let chunks = center.chunks_within_radius(2);
        assert_eq!(chunks.len(), 25);
        assert!(chunks.contains(&center));
        assert!(chunks.contains(&ChunkPos::new(8, -12)));
        assert!(chunks.contains(&ChunkPos::new(12, -8)));
        assert!(!chunks.contains(&ChunkPos::new(13, -10)));

        assert_eq!(center.chunks_within_radius(0), vec![center]);
    }
}
