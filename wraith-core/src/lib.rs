//! Gameplay logic for the wraith nocturnal spawner.
//!
//! Reimplements the vanilla phantom spawn cycle with one change: every
//! successful spawn puts the surrounding chunks on a cooldown, so the same
//! area is not hit again until the cooldown expires. The host world is
//! reached through the [`spawn::SpawnWorld`] trait; this crate owns only the
//! decision logic and the cooldown table.

pub mod config;
pub mod difficulty;
pub mod spawn;
