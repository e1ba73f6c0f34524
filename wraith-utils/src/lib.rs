//! Shared primitives for the wraith spawner: math vectors, block and chunk
//! positions, and the pseudo-random sources gameplay logic draws from.

pub mod math;
pub mod random;
mod types;

pub use types::{BlockPos, ChunkPos};
