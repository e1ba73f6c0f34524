//! Server difficulty settings.

/// The server difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Peaceful - no hostile mobs spawn, health regenerates.
    Peaceful = 0,
    /// Easy - hostile mobs deal less damage.
    Easy = 1,
    /// Normal - default difficulty.
    #[default]
    Normal = 2,
    /// Hard - hostile mobs deal more damage, can break doors.
    Hard = 3,
}

impl Difficulty {
    /// Numeric tier, 0 (peaceful) to 3 (hard). Scales spawn group sizes.
    #[inline]
    #[must_use]
    pub const fn id(self) -> i32 {
        self as i32
    }
}

/// Position-dependent difficulty sampled by the host world.
///
/// The effective value folds in regional modifiers (inhabited time, moon
/// phase, day count); the host computes it, this crate only compares it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDifficulty {
    /// The world-wide difficulty setting.
    pub global: Difficulty,
    /// The effective difficulty scalar at the sampled position.
    pub effective: f32,
}

impl LocalDifficulty {
    /// Creates a local difficulty sample.
    #[must_use]
    pub const fn new(global: Difficulty, effective: f32) -> Self {
        Self { global, effective }
    }

    /// True if the effective difficulty strictly exceeds `value`.
    #[must_use]
    pub fn is_harder_than(&self, value: f32) -> bool {
        self.effective > value
    }
}
