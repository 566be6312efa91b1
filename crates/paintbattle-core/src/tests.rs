#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::components::{Attack, Health, Mobility, UnitId};
    use crate::constants::*;
    use crate::enums::BattlePhase;
    use crate::error::BattleError;
    use crate::events::BattleEvent;
    use crate::state::{BattleSnapshot, StandingView};
    use crate::types::{ArenaBounds, Position, SimTime, TeamColor, UnitStats};

    #[test]
    fn test_battle_phase_serde() {
        let variants = vec![BattlePhase::Drawing, BattlePhase::Battle, BattlePhase::Ended];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BattlePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_team_color_is_plain_string_on_the_wire() {
        let color = TeamColor::new("#FF0000");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#FF0000\"");
        assert_eq!(color.to_string(), "#FF0000");
    }

    /// PlayerCommand uses an internally tagged representation the frontend builds by hand.
    #[test]
    fn test_player_command_wire_format() {
        let json = r##"{"type":"SpawnUnit","x":12.5,"y":40.0,"color":"#00FF00"}"##;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::SpawnUnit {
                x: 12.5,
                y: 40.0,
                color: TeamColor::new("#00FF00"),
            }
        );

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"StartBattle"}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::StartBattle);

        let stroke = PlayerCommand::PaintStroke {
            from: Position::new(0.0, 0.0),
            to: Position::new(10.0, 0.0),
            color: TeamColor::new("#0000FF"),
        };
        let json = serde_json::to_string(&stroke).unwrap();
        assert!(json.contains("\"type\":\"PaintStroke\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(stroke, back);
    }

    #[test]
    fn test_battle_event_tagged() {
        let event = BattleEvent::TeamEliminated {
            color: TeamColor::new("#FF0000"),
            order: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r##"{"type":"TeamEliminated","color":"#FF0000","order":1}"##
        );
        let back: BattleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    /// Verify BattleSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let mut snapshot = BattleSnapshot::default();
        snapshot.standings.push(StandingView {
            rank: 1,
            color: TeamColor::new("#FF0000"),
            initial_count: 10,
            survived_count: 3,
        });
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BattleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time, back.time);
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(snapshot.standings, back.standings);
        assert!(
            json.len() < 1024,
            "Near-empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_error_messages_are_status_text() {
        assert_eq!(BattleError::NoUnits.to_string(), "Draw some armies first!");
        assert_eq!(
            BattleError::NotEnoughTeams { teams: 1 }.to_string(),
            "You need at least 2 different color teams to battle!"
        );
        let wrong = BattleError::WrongPhase {
            expected: BattlePhase::Drawing,
            actual: BattlePhase::Battle,
        };
        assert_eq!(wrong.to_string(), "Not allowed during Battle (needs Drawing)");
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
        assert_eq!(Position::from(a.as_vec() + DVec2::new(1.0, 2.0)), Position::new(1.0, 2.0));
    }

    #[test]
    fn test_arena_clamp_respects_radius() {
        let arena = ArenaBounds {
            width: 100.0,
            height: 50.0,
        };
        let inside = DVec2::new(40.0, 20.0);
        assert_eq!(arena.clamp(inside, 3.0), inside);
        assert_eq!(arena.clamp(DVec2::new(-10.0, 70.0), 3.0), DVec2::new(3.0, 47.0));
        assert_eq!(arena.clamp(DVec2::new(150.0, 1.0), 3.0), DVec2::new(97.0, 3.0));
    }

    #[test]
    fn test_arena_clamp_degenerate_does_not_panic() {
        let arena = ArenaBounds {
            width: 4.0,
            height: 4.0,
        };
        let p = arena.clamp(DVec2::new(2.0, 2.0), 3.0);
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn test_health_fraction() {
        let mut health = Health::full(100);
        assert!(health.is_alive());
        assert_eq!(health.fraction(), 1.0);

        health.current = 25;
        assert!((health.fraction() - 0.25).abs() < 1e-10);

        // The killing blow can overshoot below zero.
        health.current = -1;
        assert!(!health.is_alive());
        assert_eq!(health.fraction(), 0.0);

        health.current = 0;
        assert!(!health.is_alive());
    }

    #[test]
    fn test_components_from_default_stats() {
        let stats = UnitStats::default();
        let health = Health::from(&stats);
        let attack = Attack::from(&stats);
        let mobility = Mobility::from(&stats);

        assert_eq!(health.current, UNIT_MAX_HEALTH);
        assert_eq!(health.max, UNIT_MAX_HEALTH);
        assert_eq!(attack.range, UNIT_ATTACK_RANGE);
        assert_eq!(attack.damage, UNIT_ATTACK_DAMAGE);
        assert_eq!(attack.attack_speed, UNIT_ATTACK_SPEED);
        assert_eq!(attack.cooldown, 0, "Fresh units are ready to attack");
        assert_eq!(mobility.speed, UNIT_SPEED);
        assert_eq!(mobility.radius, UNIT_RADIUS);
    }

    #[test]
    fn test_unit_id_ordering() {
        assert!(UnitId(1) < UnitId(2));
        assert_eq!(serde_json::to_string(&UnitId(7)).unwrap(), "7");
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
    }
}
