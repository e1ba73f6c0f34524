//! The phantom spawn cycle.
//!
//! Follows the vanilla nocturnal spawner's shape: a global gate, then one
//! independent roll per player, in player-list order. The one addition is
//! the cooldown consult before clearance and the cooldown commit after a
//! successful spawn.

use uuid::Uuid;
use wraith_utils::random::Random;
use wraith_utils::{BlockPos, ChunkPos};

use super::SpawnCooldowns;
use crate::config::GameRules;
use crate::difficulty::LocalDifficulty;

/// Minimum ambient darkness before phantoms are considered in a sky-lit
/// dimension. 0 is full day, 11 is night; thunderstorms reach 5 by day.
const MIN_AMBIENT_DARKNESS: u8 = 5;

/// A player the spawner anchors candidate positions on.
#[derive(Debug, Clone, Copy)]
pub struct Observer {
    /// The player's block position.
    pub pos: BlockPos,
    /// Spectators are skipped entirely.
    pub spectator: bool,
}

/// World queries the spawn cycle needs from the host.
pub trait SpawnWorld {
    /// Current ambient darkness level, 0 (clear day) to 11.
    fn ambient_darkness(&self) -> u8;

    /// Whether this dimension has sky light at all.
    fn has_sky_light(&self) -> bool;

    /// The dimension's sea level.
    fn sea_level(&self) -> i32;

    /// Highest buildable Y of the dimension.
    fn top_y(&self) -> i32;

    /// Total build height of the dimension in blocks.
    fn height(&self) -> i32;

    /// Active players in a stable order; evaluation follows this order.
    fn players(&self) -> Vec<Observer>;

    /// Whether `pos` has an unobstructed view of the sky.
    fn is_sky_visible(&self, pos: BlockPos) -> bool;

    /// The local difficulty sample at `pos`.
    fn local_difficulty(&self, pos: BlockPos) -> LocalDifficulty;

    /// Whether the block and fluid state at `pos` leave room for a phantom.
    fn is_clear_for_spawn(&self, pos: BlockPos) -> bool;

    /// Materializes a phantom at `pos`, returning its id, or `None` if the
    /// host could not create one. Failure is not an error.
    fn spawn_phantom(&self, pos: BlockPos) -> Option<Uuid>;
}

/// Nocturnal spawner with a per-chunk spawn cooldown.
///
/// Owns its cooldown table; construct one per world and call
/// [`Self::spawn`] from the world's tick loop.
pub struct PhantomSpawner {
    cooldowns: SpawnCooldowns,
    rules: GameRules,
}

impl PhantomSpawner {
    /// Creates a spawner over the given cooldown table and rules.
    #[must_use]
    pub fn new(cooldowns: SpawnCooldowns, rules: GameRules) -> Self {
        Self { cooldowns, rules }
    }

    /// The cooldown table, for inspection and periodic sweeping.
    #[must_use]
    pub fn cooldowns(&self) -> &SpawnCooldowns {
        &self.cooldowns
    }

    /// Runs one spawn cycle at `tick`. Returns the number of phantoms
    /// spawned across all players.
    ///
    /// Every "cannot spawn here/now" outcome is a silent skip; the cycle
    /// itself cannot fail.
    pub fn spawn<W: SpawnWorld, R: Random>(
        &self,
        world: &W,
        spawn_monsters: bool,
        tick: u64,
        random: &mut R,
    ) -> u32 {
        if !spawn_monsters || !self.rules.do_insomnia {
            return 0;
        }
        if world.ambient_darkness() < MIN_AMBIENT_DARKNESS && world.has_sky_light() {
            return 0;
        }

        let mut spawned = 0;
        for observer in world.players() {
            if observer.spectator {
                continue;
            }
            spawned += self.try_spawn_around(world, observer.pos, tick, random);
        }
        spawned
    }

    /// One player's roll: gates, candidate sampling, cooldown consult,
    /// group spawn, cooldown commit.
    fn try_spawn_around<W: SpawnWorld, R: Random>(
        &self,
        world: &W,
        player_pos: BlockPos,
        tick: u64,
        random: &mut R,
    ) -> u32 {
        // Phantoms only stalk players exposed to the sky, unless the
        // dimension has no sky light at all.
        if world.has_sky_light()
            && (player_pos.0.y < world.sea_level() || !world.is_sky_visible(player_pos))
        {
            return 0;
        }

        let difficulty = world.local_difficulty(player_pos);
        if !difficulty.is_harder_than(random.next_f32() * 3.0) {
            return 0;
        }
        if player_pos.0.y <= world.top_y() - world.height() / 10 {
            return 0;
        }

        let candidate = player_pos
            .up(20 + random.next_i32_bounded(15))
            .east(-10 + random.next_i32_bounded(21))
            .south(-10 + random.next_i32_bounded(21));

        let chunk = ChunkPos::from_block(candidate);
        if self.cooldowns.is_active(chunk, tick) {
            return 0;
        }
        if !world.is_clear_for_spawn(candidate) {
            return 0;
        }

        let group_size = 1 + random.next_i32_bounded(difficulty.global.id() + 1);
        let mut spawned = 0;
        for _ in 0..group_size {
            if world.spawn_phantom(candidate).is_some() {
                spawned += 1;
            }
        }

        // Only a candidate that actually produced phantoms puts its
        // neighborhood on cooldown.
        if spawned > 0 {
            self.cooldowns.mark(chunk, tick);
            log::debug!(
                "spawned {spawned} phantoms at {candidate:?}, chunk {chunk:?} on cooldown"
            );
        }
        spawned
    }
}
