//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Regular enemy archetype. Bosses reuse the enemy record with a flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnemyKind {
    /// Straight descent, one hit.
    #[default]
    Basic,
    /// Faster and smaller.
    Fast,
    /// Slow and armored. Also used for boss escorts.
    Heavy,
    /// Stops at a holding line and fires aimed shots.
    Ranged,
}

/// Collectible power-up type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerUpKind {
    /// Timed three-way spread.
    TripleShot,
    /// Absorbs exactly one hit, no expiry.
    Shield,
}

/// Top-level run phase as seen by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Which music track the host should be playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicCue {
    Normal,
    Boss,
}

/// Boss director phase as exposed in snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Idle,
    Warning,
    Entering,
    Active,
}

/// Achievement identifiers. Serialized as their stable string ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstBlood,
    Ace,
    ShieldMaster,
    TripleThreat,
    LevelUp,
    BossSlayer,
    Untouchable,
    PowerHungry,
    PlanetTraveler,
    OrderRestorer,
    Survivor,
    SpeedDemon,
}

impl Achievement {
    pub const ALL: [Achievement; 12] = [
        Achievement::FirstBlood,
        Achievement::Ace,
        Achievement::ShieldMaster,
        Achievement::TripleThreat,
        Achievement::LevelUp,
        Achievement::BossSlayer,
        Achievement::Untouchable,
        Achievement::PowerHungry,
        Achievement::PlanetTraveler,
        Achievement::OrderRestorer,
        Achievement::Survivor,
        Achievement::SpeedDemon,
    ];

    /// Stable string id used by the host's catalog and storage.
    pub fn id(self) -> &'static str {
        match self {
            Achievement::FirstBlood => "first_blood",
            Achievement::Ace => "ace",
            Achievement::ShieldMaster => "shield_master",
            Achievement::TripleThreat => "triple_threat",
            Achievement::LevelUp => "level_up",
            Achievement::BossSlayer => "boss_slayer",
            Achievement::Untouchable => "untouchable",
            Achievement::PowerHungry => "power_hungry",
            Achievement::PlanetTraveler => "planet_traveler",
            Achievement::OrderRestorer => "order_restorer",
            Achievement::Survivor => "survivor",
            Achievement::SpeedDemon => "speed_demon",
        }
    }

    /// Look up an achievement by id. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Achievement> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    /// Whether the simulation has any trigger for this achievement.
    /// The rest exist only in the host's static catalog.
    pub fn is_wired(self) -> bool {
        !matches!(
            self,
            Achievement::PlanetTraveler
                | Achievement::OrderRestorer
                | Achievement::Survivor
                | Achievement::SpeedDemon
        )
    }
}
