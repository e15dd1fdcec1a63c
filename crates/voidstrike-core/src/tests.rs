#[cfg(test)]
mod tests {
    use crate::commands::{PlayerCommand, TickInput};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::WorldSnapshot;
    use crate::types::{angle_between, Field, Rect, SimTime};
    use glam::Vec2;

    #[test]
    fn test_achievement_ids_round_trip() {
        for a in Achievement::ALL {
            assert_eq!(Achievement::from_id(a.id()), Some(a));
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.id()));
        }
    }

    #[test]
    fn test_unknown_achievement_is_none() {
        assert_eq!(Achievement::from_id("moon_walker"), None);
        assert_eq!(Achievement::from_id(""), None);
    }

    #[test]
    fn test_unwired_achievements() {
        let unwired: Vec<_> = Achievement::ALL
            .into_iter()
            .filter(|a| !a.is_wired())
            .collect();
        assert_eq!(
            unwired,
            vec![
                Achievement::PlanetTraveler,
                Achievement::OrderRestorer,
                Achievement::Survivor,
                Achievement::SpeedDemon,
            ]
        );
    }

    #[test]
    fn test_enemy_kind_wire_names() {
        assert_eq!(serde_json::to_string(&EnemyKind::Ranged).unwrap(), "\"RANGED\"");
        assert_eq!(
            serde_json::to_string(&PowerUpKind::TripleShot).unwrap(),
            "\"TRIPLE_SHOT\""
        );
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let inside = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_field_outside() {
        let field = Field::new(100.0, 100.0);
        assert!(!field.is_outside(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(field.is_outside(&Rect::new(10.0, -20.0, 5.0, 5.0)));
        assert!(field.is_outside(&Rect::new(10.0, 101.0, 5.0, 5.0)));
        assert!(field.is_outside(&Rect::new(-10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_sim_time_fixed_step() {
        let mut t = SimTime::default();
        for _ in 0..60 {
            t.advance();
        }
        assert_eq!(t.tick, 60);
        assert_eq!(t.now_ms, 960);
    }

    #[test]
    fn test_angle_between_screen_space() {
        let down = angle_between(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!((down - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        let right = angle_between(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert!(right.abs() < 1e-6);
    }

    #[test]
    fn test_pointer_counts_as_fire() {
        let idle = TickInput::default();
        assert!(!idle.firing());
        let touch = TickInput {
            pointer: Some(Vec2::new(1.0, 2.0)),
            ..Default::default()
        };
        assert!(touch.firing());
    }

    #[test]
    fn test_event_serde_tagged() {
        let ev = GameEvent::BossWarning {
            name: Some("Iron Warden".into()),
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains("\"type\":\"BossWarning\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Pause"}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::Pause);
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = WorldSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
