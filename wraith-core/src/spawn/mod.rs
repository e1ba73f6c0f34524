//! Phantom spawning with per-chunk cooldowns.

mod cooldown;
mod phantom_spawner;

pub use cooldown::SpawnCooldowns;
pub use phantom_spawner::{Observer, PhantomSpawner, SpawnWorld};
