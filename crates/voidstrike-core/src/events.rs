//! Events emitted by the simulation for the host's HUD, audio and storage.
//!
//! Events accumulate in order during a tick and are handed to the host
//! after the tick completes.

use serde::{Deserialize, Serialize};

use crate::enums::{Achievement, MusicCue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ScoreChanged { score: u64 },
    LevelChanged { level: u32 },
    /// Health reaching 0 ends the run.
    HealthChanged { health: u32 },
    AchievementUnlocked { achievement: Achievement },
    /// Boss name while the warning banner is up, `None` when it clears.
    BossWarning { name: Option<String> },
    Music { cue: MusicCue },
}
