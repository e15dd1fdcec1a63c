#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, TAU};

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use voidstrike_core::constants::*;
    use voidstrike_core::enums::{EncounterPhase, EnemyKind};

    use crate::director::{evaluate, DirectorAction, DirectorContext, DirectorPhase};
    use crate::patterns::*;
    use crate::profiles::*;

    fn make_attack(level: u32, now_ms: u64) -> AttackContext {
        AttackContext {
            boss_center: Vec2::new(300.0, 90.0),
            boss_bottom: 130.0,
            player_center: Vec2::new(300.0, 725.0),
            level,
            now_ms,
            field_width: FIELD_WIDTH,
        }
    }

    fn ctx(now_ms: u64, level: u32, bosses_present: usize) -> DirectorContext {
        DirectorContext {
            now_ms,
            level,
            bosses_present,
        }
    }

    fn sorted_angles(bullets: &[BulletSpawn]) -> Vec<f32> {
        let mut angles: Vec<f32> = bullets.iter().map(|b| b.angle).collect();
        angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
        angles
    }

    // ---- Profiles ----

    #[test]
    fn test_enemy_health_scales_with_level() {
        assert_eq!(enemy_health(EnemyKind::Basic, 1), 1);
        assert_eq!(enemy_health(EnemyKind::Basic, 2), 2);
        assert_eq!(enemy_health(EnemyKind::Heavy, 7), 6);
        assert_eq!(enemy_health(EnemyKind::Ranged, 0), 2);
    }

    #[test]
    fn test_basic_enemy_worth_100() {
        assert_eq!(get_profile(EnemyKind::Basic).score_value, 100);
    }

    #[test]
    fn test_enemy_speed_bonus() {
        let s = enemy_speed(2.0, 10);
        assert!((s - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_choose_kind_last_gate_wins() {
        // Below every gate level, always BASIC.
        assert_eq!(choose_enemy_kind(1, 0.99), EnemyKind::Basic);
        // FAST unlocks at 3.
        assert_eq!(choose_enemy_kind(3, 0.61), EnemyKind::Fast);
        assert_eq!(choose_enemy_kind(3, 0.60), EnemyKind::Basic);
        // At 5 a high draw passes both FAST and RANGED; RANGED is later.
        assert_eq!(choose_enemy_kind(5, 0.8), EnemyKind::Ranged);
        assert_eq!(choose_enemy_kind(5, 0.95), EnemyKind::Ranged);
        // HEAVY overrides everything from level 7.
        assert_eq!(choose_enemy_kind(7, 0.95), EnemyKind::Heavy);
        assert_eq!(choose_enemy_kind(7, 0.7), EnemyKind::Fast);
        assert_eq!(choose_enemy_kind(7, 0.1), EnemyKind::Basic);
    }

    #[test]
    fn test_spawn_interval_floor() {
        assert_eq!(spawn_interval_ms(1), 1380);
        assert_eq!(spawn_interval_ms(10), 300);
        assert_eq!(spawn_interval_ms(9), 420);
        assert_eq!(spawn_interval_ms(100), 300);
    }

    #[test]
    fn test_boss_attack_interval() {
        assert_eq!(boss_attack_interval_ms(19), 1000);
        assert_eq!(boss_attack_interval_ms(20), 500);
    }

    #[test]
    fn test_boss_tiers_counts_and_escorts() {
        let expected = [(5, 1, 0), (10, 1, 0), (20, 2, 2), (30, 3, 3), (50, 1, 5)];
        for (level, count, escorts) in expected {
            let tier = boss_for_level(level);
            assert_eq!(tier.level, level);
            assert_eq!(tier.count, count, "count at level {level}");
            assert_eq!(tier.escorts, escorts, "escorts at level {level}");
        }
    }

    #[test]
    fn test_boss_lookup_falls_back_to_highest_tier() {
        assert_eq!(boss_for_level(7).level, 50);
        assert_eq!(boss_for_level(999).name, "Void Sovereign");
        assert!(!is_boss_level(7));
        assert!(is_boss_level(30));
    }

    // ---- Patterns ----

    #[test]
    fn test_circular_burst_counts() {
        let low = circular_burst(&make_attack(5, 0));
        assert_eq!(low.len(), 12);
        assert!(low.iter().all(|b| b.speed == 4.0 && b.damage == 1));
        let step = low[1].angle - low[0].angle;
        assert!((step - TAU / 12.0).abs() < 1e-5);

        let high = circular_burst(&make_attack(30, 0));
        assert_eq!(high.len(), 20);
    }

    #[test]
    fn test_targeted_burst_centered_on_player() {
        let attack = make_attack(5, 0);
        let fan = targeted_burst(&attack);
        assert_eq!(fan.len(), 3);
        let angles = sorted_angles(&fan);
        // Player is straight below the boss.
        assert!((angles[1] - FRAC_PI_2).abs() < 1e-5);
        assert!((angles[0] - (FRAC_PI_2 - 0.15)).abs() < 1e-5);
        assert!((angles[2] - (FRAC_PI_2 + 0.15)).abs() < 1e-5);
        assert!(fan.iter().all(|b| b.speed == 6.0));

        assert_eq!(targeted_burst(&make_attack(30, 0)).len(), 5);
    }

    #[test]
    fn test_spiral_rotates_with_clock() {
        let first = spiral(&make_attack(5, 1000));
        assert_eq!(first.len(), 4);
        assert!((first[0].angle - 1.0).abs() < 1e-5);
        assert!((first[1].angle - (1.0 + FRAC_PI_2)).abs() < 1e-5);

        let later = spiral(&make_attack(5, 2000));
        assert!((later[0].angle - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_spiral_handles_wall_clock_timestamps() {
        let volley = spiral(&make_attack(5, 1_700_000_000_000));
        assert!(volley.iter().all(|b| b.angle.is_finite()));
        assert!(volley[0].angle >= 0.0 && volley[0].angle < TAU);
    }

    #[test]
    fn test_rain_leaves_two_adjacent_columns_open() {
        let attack = make_attack(5, 0);
        let rain = rain_with_gap(&attack, 3);
        assert_eq!(rain.len(), 8);
        let spacing = FIELD_WIDTH / 10.0;
        let columns: Vec<u32> = rain
            .iter()
            .map(|b| ((b.pos.x + b.size.x / 2.0) / spacing) as u32)
            .collect();
        assert_eq!(columns, vec![0, 1, 2, 5, 6, 7, 8, 9]);
        assert!(rain.iter().all(|b| b.size == Vec2::new(6.0, 20.0)));
        assert!(rain.iter().all(|b| (b.angle - FRAC_PI_2).abs() < 1e-6));
    }

    #[test]
    fn test_random_rain_gap_in_range() {
        let attack = make_attack(5, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..200 {
            let rain = emit(AttackPattern::RainWithGap, &attack, &mut rng);
            assert_eq!(rain.len(), 8);
        }
    }

    #[test]
    fn test_ultimate_wave_shape() {
        let wave = ultimate_wave(&make_attack(50, 0));
        assert_eq!(wave.len(), 20);
        assert!(wave.iter().all(|b| b.damage == 2 && b.speed == 3.0));
    }

    #[test]
    fn test_no_ultimate_below_level_50() {
        let attack = make_attack(49, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..500 {
            let volley = boss_attack(&attack, &mut rng);
            assert!(volley.iter().all(|b| b.damage == 1));
        }
    }

    #[test]
    fn test_ultimate_sometimes_at_level_50() {
        let attack = make_attack(50, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let with_ultimate = (0..1000)
            .filter(|_| boss_attack(&attack, &mut rng).iter().any(|b| b.damage == 2))
            .count();
        // ~10% of volleys.
        assert!(
            (50..=160).contains(&with_ultimate),
            "ultimate fired {with_ultimate} times in 1000 volleys"
        );
    }

    #[test]
    fn test_patterns_chosen_uniformly() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let picked = choose_pattern(&mut rng);
            let idx = AttackPattern::ALL
                .iter()
                .position(|p| *p == picked)
                .unwrap();
            counts[idx] += 1;
        }
        for c in counts {
            assert!((800..=1200).contains(&c), "pattern counts {counts:?}");
        }
    }

    #[test]
    fn test_aimed_shot_points_at_target() {
        let shot = aimed_shot(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0));
        assert!((shot.angle - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
        assert_eq!(shot.damage, 1);
    }

    // ---- Director ----

    #[test]
    fn test_idle_triggers_warning_on_boss_level() {
        let update = evaluate(DirectorPhase::Idle, &ctx(1000, 5, 0));
        assert!(update.phase_changed);
        assert_eq!(
            update.new_phase,
            DirectorPhase::Warning {
                started_at: 1000,
                level: 5
            }
        );
        match update.action {
            DirectorAction::BeginWarning(tier) => assert_eq!(tier.name, "Iron Warden"),
            other => panic!("expected BeginWarning, got {other:?}"),
        }
    }

    #[test]
    fn test_idle_ignores_other_levels() {
        let update = evaluate(DirectorPhase::Idle, &ctx(1000, 6, 0));
        assert!(!update.phase_changed);
        assert_eq!(update.action, DirectorAction::None);
    }

    #[test]
    fn test_idle_does_not_trigger_with_boss_present() {
        let update = evaluate(DirectorPhase::Idle, &ctx(1000, 5, 1));
        assert!(!update.phase_changed);
    }

    #[test]
    fn test_warning_lasts_exactly_3000ms() {
        let warning = DirectorPhase::Warning {
            started_at: 1000,
            level: 20,
        };
        let early = evaluate(warning, &ctx(3999, 20, 0));
        assert!(!early.phase_changed);
        assert_eq!(early.new_phase, warning);

        let due = evaluate(warning, &ctx(4000, 20, 0));
        assert!(due.phase_changed);
        assert_eq!(
            due.new_phase,
            DirectorPhase::Entering {
                spawned_at: 4000,
                level: 20
            }
        );
        match due.action {
            DirectorAction::SpawnEncounter(tier) => {
                assert_eq!(tier.count, 2);
                assert_eq!(tier.escorts, 2);
            }
            other => panic!("expected SpawnEncounter, got {other:?}"),
        }
    }

    #[test]
    fn test_entering_becomes_active_after_2000ms() {
        let entering = DirectorPhase::Entering {
            spawned_at: 4000,
            level: 5,
        };
        assert!(!evaluate(entering, &ctx(5999, 5, 1)).phase_changed);
        let update = evaluate(entering, &ctx(6000, 5, 1));
        assert_eq!(update.new_phase, DirectorPhase::Active { level: 5 });
        assert_eq!(update.action, DirectorAction::EntranceComplete);
    }

    #[test]
    fn test_active_holds() {
        let active = DirectorPhase::Active { level: 5 };
        let update = evaluate(active, &ctx(100_000, 5, 1));
        assert!(!update.phase_changed);
    }

    #[test]
    fn test_phase_views() {
        assert_eq!(DirectorPhase::Idle.encounter_phase(), EncounterPhase::Idle);
        assert!(!DirectorPhase::Idle.suspends_spawning());
        let warning = DirectorPhase::Warning {
            started_at: 0,
            level: 5,
        };
        assert!(warning.suspends_spawning());
        assert_eq!(warning.encounter_phase(), EncounterPhase::Warning);
        assert_eq!(warning.entering_since(), None);
        let entering = DirectorPhase::Entering {
            spawned_at: 7,
            level: 5,
        };
        assert_eq!(entering.entering_since(), Some(7));
        assert!(DirectorPhase::Active { level: 5 }.suspends_spawning());
    }
}
