//! Boss director finite state machine.
//!
//! IDLE → WARNING → ENTERING → ACTIVE → (cleared) → IDLE.
//!
//! Pure functions over plain data: the caller supplies the clock and what
//! it observes in the world, and applies the returned action. Timing is
//! polled against the supplied clock, so pausing the host pauses every
//! countdown.

use voidstrike_core::constants::{BOSS_ENTRANCE_MS, BOSS_WARNING_MS};
use voidstrike_core::enums::EncounterPhase;

use crate::profiles::{boss_for_level, is_boss_level, BossProfile};

/// Director state, with the timestamps each phase is measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectorPhase {
    #[default]
    Idle,
    /// Warning banner is up; bosses arrive when the delay elapses.
    Warning { started_at: u64, level: u32 },
    /// Bosses are easing into the field.
    Entering { spawned_at: u64, level: u32 },
    /// Normal boss combat.
    Active { level: u32 },
}

/// What the director sees this tick.
pub struct DirectorContext {
    pub now_ms: u64,
    pub level: u32,
    pub bosses_present: usize,
}

/// Side effect the caller must perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectorAction {
    None,
    /// Show the warning and clear all regular enemies.
    BeginWarning(&'static BossProfile),
    /// Hide the warning and spawn bosses plus escorts.
    SpawnEncounter(&'static BossProfile),
    /// Entrance easing is over.
    EntranceComplete,
}

/// Output from the director FSM.
pub struct DirectorUpdate {
    pub new_phase: DirectorPhase,
    pub action: DirectorAction,
    pub phase_changed: bool,
}

impl DirectorPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, DirectorPhase::Idle)
    }

    /// True while regular enemy spawning must stay suspended.
    pub fn suspends_spawning(&self) -> bool {
        !self.is_idle()
    }

    /// Start of the entrance window, if bosses are entering.
    pub fn entering_since(&self) -> Option<u64> {
        match self {
            DirectorPhase::Entering { spawned_at, .. } => Some(*spawned_at),
            _ => None,
        }
    }

    /// Host-facing view of the phase.
    pub fn encounter_phase(&self) -> EncounterPhase {
        match self {
            DirectorPhase::Idle => EncounterPhase::Idle,
            DirectorPhase::Warning { .. } => EncounterPhase::Warning,
            DirectorPhase::Entering { .. } => EncounterPhase::Entering,
            DirectorPhase::Active { .. } => EncounterPhase::Active,
        }
    }
}

/// Evaluate the director for one tick.
pub fn evaluate(phase: DirectorPhase, ctx: &DirectorContext) -> DirectorUpdate {
    let no_change = DirectorUpdate {
        new_phase: phase,
        action: DirectorAction::None,
        phase_changed: false,
    };

    match phase {
        DirectorPhase::Idle => {
            if ctx.bosses_present == 0 && is_boss_level(ctx.level) {
                return DirectorUpdate {
                    new_phase: DirectorPhase::Warning {
                        started_at: ctx.now_ms,
                        level: ctx.level,
                    },
                    action: DirectorAction::BeginWarning(boss_for_level(ctx.level)),
                    phase_changed: true,
                };
            }
            no_change
        }
        DirectorPhase::Warning { started_at, level } => {
            if ctx.now_ms.saturating_sub(started_at) >= BOSS_WARNING_MS {
                return DirectorUpdate {
                    new_phase: DirectorPhase::Entering {
                        spawned_at: ctx.now_ms,
                        level,
                    },
                    action: DirectorAction::SpawnEncounter(boss_for_level(level)),
                    phase_changed: true,
                };
            }
            no_change
        }
        DirectorPhase::Entering { spawned_at, level } => {
            if ctx.now_ms.saturating_sub(spawned_at) >= BOSS_ENTRANCE_MS {
                return DirectorUpdate {
                    new_phase: DirectorPhase::Active { level },
                    action: DirectorAction::EntranceComplete,
                    phase_changed: true,
                };
            }
            no_change
        }
        DirectorPhase::Active { .. } => no_change,
    }
}
