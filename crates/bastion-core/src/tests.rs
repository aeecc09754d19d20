#[cfg(test)]
mod tests {
    use crate::commands::{FireOutcome, PlayerCommand};
    use crate::enums::*;
    use crate::events::{GameEvent, StructureRef};
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Viewport};

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::Won,
            GamePhase::Lost,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Menu.is_terminal());
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Start,
            PlayerCommand::FireAt { x: 120.5, y: 300.0 },
            PlayerCommand::ReturnToMenu,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"FireAt","x":10.0,"y":20.0}"#).unwrap();
        assert_eq!(parsed, PlayerCommand::FireAt { x: 10.0, y: 20.0 });
    }

    #[test]
    fn test_game_event_tagging() {
        let event = GameEvent::Impact {
            x: 80.0,
            y: 580.0,
            struck: Some(StructureRef {
                kind: StructureKind::LaunchSite,
                index: 0,
            }),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"Impact""#), "got {json}");
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_event_outcome() {
        assert_eq!(
            GameEvent::SessionWon { score: 1000, tick: 5 }.outcome(),
            Some(SessionOutcome::Won)
        );
        assert_eq!(
            GameEvent::SessionLost { score: 0, tick: 5 }.outcome(),
            Some(SessionOutcome::Lost)
        );
        assert_eq!(GameEvent::Detonation { x: 0.0, y: 0.0 }.outcome(), None);
    }

    #[test]
    fn test_fire_outcome_fired() {
        let fired = FireOutcome::Fired {
            site_index: 1,
            projectile: 7,
            origin: Position::new(400.0, 580.0),
            ammo_left: 3999,
        };
        assert!(fired.fired());
        assert!(!FireOutcome::NoEligibleSite.fired());
        assert!(!FireOutcome::NotPlaying.fired());
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_bearing() {
        let origin = Position::new(0.0, 0.0);

        // Straight down the screen (positive y).
        let below = Position::new(0.0, 100.0);
        assert!((origin.bearing_to(&below) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);

        let right = Position::new(100.0, 0.0);
        assert!(origin.bearing_to(&right).abs() < 1e-10);
    }

    #[test]
    fn test_position_coincides() {
        let a = Position::new(100.0, 580.0);
        assert!(a.coincides_with(&Position::new(100.5, 579.5), 1.0));
        assert!(!a.coincides_with(&Position::new(101.0, 580.0), 1.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(16.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_ms - 960.0).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_scales_to_playfield() {
        // Canvas drawn at half size, offset by (10, 20).
        let viewport = Viewport::new(10.0, 20.0, 400.0, 300.0);
        let p = viewport.to_world(210.0, 170.0, 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < 1e-10);
        assert!((p.y - 300.0).abs() < 1e-10);

        let degenerate = Viewport::new(0.0, 0.0, 0.0, 300.0);
        assert!(degenerate.to_world(1.0, 1.0, 800.0, 600.0).is_none());
    }
}
