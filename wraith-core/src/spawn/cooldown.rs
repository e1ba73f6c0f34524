//! Per-chunk spawn cooldown tracking.

use scc::HashMap;
use wraith_utils::ChunkPos;

use crate::config::SpawnerConfig;

/// Tracks the last spawn-commit tick for each chunk.
///
/// Keys are packed i64 chunk coordinates. Thread-safe via `scc::HashMap` so
/// concurrent observer evaluations can consult and stamp it without a lock
/// around the whole table. Per-key updates are monotonic: a stored tick is
/// never replaced by an earlier one, even when neighborhood stamps from two
/// simultaneous commits interleave.
pub struct SpawnCooldowns {
    /// Maps packed chunk coords (i64) to the last commit tick.
    chunks: HashMap<i64, u64>,
    cooldown_ticks: u64,
    radius: u8,
    sweep_factor: u64,
}

impl SpawnCooldowns {
    /// Creates an empty table with the given tuning.
    #[must_use]
    pub fn new(cooldown_ticks: u64, radius: u8, sweep_factor: u64) -> Self {
        Self {
            chunks: HashMap::new(),
            cooldown_ticks,
            radius,
            sweep_factor,
        }
    }

    /// Creates a table tuned from a config.
    #[must_use]
    pub fn from_config(config: &SpawnerConfig) -> Self {
        Self::new(
            config.cooldown_ticks,
            config.cooldown_radius,
            config.sweep_factor,
        )
    }

    /// True if `chunk` committed a spawn less than the cooldown ago.
    #[must_use]
    pub fn is_active(&self, chunk: ChunkPos, now: u64) -> bool {
        self.chunks
            .read_sync(&chunk.as_i64(), |_, &last| {
                now.saturating_sub(last) < self.cooldown_ticks
            })
            .unwrap_or(false)
    }

    /// Commits a spawn: stamps `now` on `center` and every chunk within the
    /// cooldown radius of it.
    pub fn mark(&self, center: ChunkPos, now: u64) {
        for chunk in center.chunks_within_radius(self.radius) {
            self.stamp(chunk.as_i64(), now);
        }
    }

    /// Last committed tick for `chunk`, if any.
    #[must_use]
    pub fn last_activation(&self, chunk: ChunkPos) -> Option<u64> {
        self.chunks.read_sync(&chunk.as_i64(), |_, &last| last)
    }

    /// Drops entries whose cooldown expired more than `sweep_factor`
    /// cooldown windows ago, bounding table growth as the world is explored.
    pub fn sweep(&self, now: u64) {
        let horizon = self.sweep_factor.saturating_mul(self.cooldown_ticks);
        self.chunks
            .retain_sync(|_, &mut last| now.saturating_sub(last) < horizon);
    }

    /// Number of chunks currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True if no chunk is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Monotonic upsert: only ever moves a key's tick forwards.
    fn stamp(&self, key: i64, now: u64) {
        let updated = self
            .chunks
            .update_sync(&key, |_, last| {
                if now > *last {
                    *last = now;
                }
            })
            .is_some();

        if !updated
            && let Err((key, _)) = self.chunks.insert_sync(key, now)
        {
            // Lost the vacant-entry race; retry through the update path.
            let _ = self.chunks.update_sync(&key, |_, last| {
                if now > *last {
                    *last = now;
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SpawnCooldowns {
        SpawnCooldowns::new(4000, 2, 4)
    }

    #[test]
    fn test_untracked_chunk_is_available() {
        let cooldowns = table();
        assert!(!cooldowns.is_active(ChunkPos::new(0, 0), 0));
        assert!(cooldowns.is_empty());
    }

    #[test]
    fn test_cooldown_window_boundaries() {
        let cooldowns = table();
        cooldowns.mark(ChunkPos::new(0, 0), 100);

        assert!(cooldowns.is_active(ChunkPos::new(0, 0), 100));
        assert!(cooldowns.is_active(ChunkPos::new(0, 0), 4099));
        assert!(!cooldowns.is_active(ChunkPos::new(0, 0), 4100));
    }

    #[test]
    fn test_mark_stamps_neighborhood() {
        let cooldowns = table();
        let center = ChunkPos::new(3, -7);
        cooldowns.mark(center, 500);

        assert_eq!(cooldowns.len(), 25);
        for dx in -2..=2 {
            for dz in -2..=2 {
                let chunk = ChunkPos::new(center.0.x + dx, center.0.y + dz);
                assert_eq!(cooldowns.last_activation(chunk), Some(500));
            }
        }
        assert_eq!(cooldowns.last_activation(ChunkPos::new(6, -7)), None);
    }

    #[test]
    fn test_stamps_are_monotonic() {
        let cooldowns = table();
        let chunk = ChunkPos::new(0, 0);

        cooldowns.mark(chunk, 5000);
        // An overlapping commit carrying an older tick must not move the
        // stored value backwards.
        cooldowns.mark(ChunkPos::new(1, 1), 4000);

        assert_eq!(cooldowns.last_activation(chunk), Some(5000));
        // (2, 2) is in both neighborhoods; the newer stamp wins.
        assert_eq!(cooldowns.last_activation(ChunkPos::new(2, 2)), Some(5000));
        // (3, 3) is only in the second neighborhood; the older stamp still
        // lands on a fresh key.
        assert_eq!(cooldowns.last_activation(ChunkPos::new(3, 3)), Some(4000));
    }

    #[test]
    fn test_sweep_evicts_stale_entries() {
        let cooldowns = table();
        cooldowns.mark(ChunkPos::new(0, 0), 0);
        cooldowns.mark(ChunkPos::new(100, 100), 15_000);
        assert_eq!(cooldowns.len(), 50);

        // Horizon is 4 * 4000; entries stamped at 0 are stale by tick 16000.
        cooldowns.sweep(16_000);
        assert_eq!(cooldowns.len(), 25);
        assert_eq!(cooldowns.last_activation(ChunkPos::new(0, 0)), None);
        assert_eq!(
            cooldowns.last_activation(ChunkPos::new(100, 100)),
            Some(15_000)
        );
    }

    #[test]
    fn test_concurrent_stamps_keep_latest() {
        use std::sync::Arc;

        let cooldowns = Arc::new(table());
        let chunk = ChunkPos::new(0, 0);

        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                let cooldowns = Arc::clone(&cooldowns);
                std::thread::spawn(move || cooldowns.mark(chunk, 1000 + i))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cooldowns.last_activation(chunk), Some(1007));
    }
}
