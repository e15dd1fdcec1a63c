//! Score, level, healing and achievement unlocks.
//!
//! Score only rises through kills and only falls through escapes (floored
//! at zero). Level only rises.

use log::{debug, info};

use voidstrike_core::components::Player;
use voidstrike_core::constants::*;
use voidstrike_core::enums::Achievement;
use voidstrike_core::events::GameEvent;

use crate::world::Progress;

/// Announce an achievement once per run.
pub fn unlock(progress: &mut Progress, achievement: Achievement, events: &mut Vec<GameEvent>) {
    if progress.unlocked.insert(achievement) {
        info!("achievement unlocked: {}", achievement.id());
        events.push(GameEvent::AchievementUnlocked { achievement });
    }
}

fn add_score(progress: &mut Progress, amount: u64, events: &mut Vec<GameEvent>) {
    progress.score = progress.score.saturating_add(amount);
    events.push(GameEvent::ScoreChanged {
        score: progress.score,
    });
}

/// Score for a regular enemy kill, plus the level-up check when no boss is
/// in play.
pub fn award_kill(
    progress: &mut Progress,
    player: &mut Player,
    score_value: u64,
    boss_active: bool,
    events: &mut Vec<GameEvent>,
) {
    add_score(progress, score_value, events);
    unlock(progress, Achievement::FirstBlood, events);
    if progress.score >= ACE_SCORE {
        unlock(progress, Achievement::Ace, events);
    }
    if !boss_active {
        check_level_up(progress, player, events);
    }
}

/// Level up once the score reaches `level * 2000`. Even levels heal one
/// point, at most once per level.
pub fn check_level_up(progress: &mut Progress, player: &mut Player, events: &mut Vec<GameEvent>) {
    if progress.score < u64::from(progress.level) * LEVEL_SCORE_STEP {
        return;
    }

    progress.level += 1;
    debug!("level up to {}", progress.level);
    events.push(GameEvent::LevelChanged {
        level: progress.level,
    });

    if progress.level % 2 == 0 && progress.level > progress.last_healed_level {
        progress.last_healed_level = progress.level;
        if player.health < player.max_health {
            player.health += 1;
            events.push(GameEvent::HealthChanged {
                health: player.health,
            });
        }
    }

    if progress.level >= LEVEL_UP_ACHIEVEMENT_LEVEL {
        unlock(progress, Achievement::LevelUp, events);
    }
}

pub fn award_boss_kill(progress: &mut Progress, score_value: u64, events: &mut Vec<GameEvent>) {
    add_score(progress, score_value, events);
    unlock(progress, Achievement::BossSlayer, events);
}

/// Last boss of the encounter is gone: bonus level, untouchable check.
pub fn boss_encounter_cleared(progress: &mut Progress, events: &mut Vec<GameEvent>) {
    progress.level += 1;
    info!("boss encounter cleared, level {}", progress.level);
    events.push(GameEvent::LevelChanged {
        level: progress.level,
    });
    if !progress.hit_during_encounter {
        unlock(progress, Achievement::Untouchable, events);
    }
}

/// `score = max(0, score - 50 * escaped)`.
pub fn apply_escape_penalty(progress: &mut Progress, escaped: usize, events: &mut Vec<GameEvent>) {
    let penalty = ESCAPE_PENALTY.saturating_mul(escaped as u64);
    let before = progress.score;
    progress.score = before.saturating_sub(penalty);
    if progress.score != before {
        events.push(GameEvent::ScoreChanged {
            score: progress.score,
        });
    }
}

/// Power-up pickup bookkeeping.
pub fn record_pickup(progress: &mut Progress, events: &mut Vec<GameEvent>) {
    progress.power_ups_collected += 1;
    if progress.power_ups_collected >= POWER_HUNGRY_PICKUPS {
        unlock(progress, Achievement::PowerHungry, events);
    }
}
