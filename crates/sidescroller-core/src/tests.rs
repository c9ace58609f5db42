#[cfg(test)]
mod tests {
    use crate::commands::SessionCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::input::{Action, InputState};
    use crate::level::*;
    use crate::types::{Aabb, Viewport};

    // ---- Geometry ----

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let touching_right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let touching_below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        let inside = Aabb::new(9.0, 9.0, 10.0, 10.0);

        assert!(!a.overlaps(&touching_right), "Shared vertical edge is not overlap");
        assert!(!a.overlaps(&touching_below), "Shared horizontal edge is not overlap");
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a), "Overlap should be symmetric");
    }

    #[test]
    fn test_aabb_edges_and_center() {
        let b = Aabb::new(100.0, 200.0, 40.0, 80.0);
        assert_eq!(b.right(), 140.0);
        assert_eq!(b.bottom(), 280.0);
        assert_eq!(b.center().x, 120.0);
        assert_eq!(b.center().y, 240.0);
    }

    #[test]
    fn test_viewport_logical_width_tracks_aspect() {
        assert_eq!(Viewport::new(1920.0, 1080.0).logical_width(), 960.0);
        assert_eq!(Viewport::new(1080.0, 1080.0).logical_width(), 540.0);
        // Degenerate surface should not divide by zero.
        assert_eq!(Viewport::new(800.0, 0.0).logical_width(), 800.0);
    }

    // ---- Input ----

    #[test]
    fn test_key_bindings() {
        assert_eq!(Action::from_code("ArrowLeft"), Some(Action::Left));
        assert_eq!(Action::from_code("KeyA"), Some(Action::Left));
        assert_eq!(Action::from_code("ArrowRight"), Some(Action::Right));
        assert_eq!(Action::from_code("KeyD"), Some(Action::Right));
        for code in ["ArrowUp", "Space", "KeyW"] {
            assert_eq!(Action::from_code(code), Some(Action::Jump), "{code} should jump");
        }
        assert_eq!(Action::from_code("KeyQ"), None);
    }

    #[test]
    fn test_input_press_release() {
        let mut input = InputState::default();
        assert!(input.apply_key("Space", true));
        assert!(input.jump);
        assert!(!input.apply_key("Escape", true), "Unbound key reports false");
        assert!(input.apply_key("KeyW", false));
        assert!(!input.jump, "Any jump binding releases the jump flag");
    }

    // ---- Level descriptor ----

    #[test]
    fn test_empty_descriptor_defaults() {
        let descriptor = LevelDescriptor::from_json("{}").unwrap();
        assert!(descriptor.levels.is_empty());
        assert_eq!(descriptor.player.pos, Point::new(SPAWN_X, SPAWN_Y));
        assert_eq!(descriptor.player.size, Point::new(PLAYER_SIZE.x, PLAYER_SIZE.y));
        assert_eq!(descriptor.player.color().as_str(), DEFAULT_PLAYER_COLOR);
    }

    #[test]
    fn test_enemy_record_defaults() {
        let json = r#"{
            "levels": [
                { "name": "World 1", "enemies": [ { "pos": { "x": 400, "y": 300 } } ] }
            ]
        }"#;
        let descriptor = LevelDescriptor::from_json(json).unwrap();
        let level = descriptor.level(0).unwrap();
        assert_eq!(level.theme().as_str(), DEFAULT_THEME_COLOR);

        let bp = level.enemies[0].blueprint();
        assert_eq!(bp.kind, EnemyKind::Mushroom);
        assert!(bp.alive);
        assert_eq!(bp.speed, DEFAULT_ENEMY_SPEED);
        assert_eq!(bp.velocity_x, DEFAULT_ENEMY_SPEED);
        assert_eq!(bp.body.size, ENEMY_SIZE);
        assert_eq!(bp.cap_color.as_str(), MUSHROOM_CAP_COLOR);
        assert_eq!(bp.stem_color.as_str(), MUSHROOM_STEM_COLOR);
        assert_eq!(bp.dot_color.as_str(), MUSHROOM_DOT_COLOR);
    }

    #[test]
    fn test_enemy_record_authored_fields() {
        let json = r#"{
            "type": "boss",
            "pos": { "x": 1300, "y": 100 },
            "size": { "x": 80, "y": 80 },
            "speed": 2.0,
            "velocity": { "x": -0.5, "y": 0 },
            "alive": true
        }"#;
        let record: EnemyRecord = serde_json::from_str(json).unwrap();
        let bp = record.blueprint();
        assert_eq!(bp.kind, EnemyKind::Boss);
        assert_eq!(bp.health, BOSS_DEFAULT_HEALTH);
        assert_eq!(bp.speed, 2.0);
        assert_eq!(bp.velocity_x, -0.5, "Authored velocity wins over speed");
        assert_eq!(bp.color.as_str(), BOSS_COLOR);
    }

    #[test]
    fn test_unknown_kind_is_basic_block() {
        let record: EnemyRecord = serde_json::from_str(r#"{ "type": "slime" }"#).unwrap();
        let bp = record.blueprint();
        assert_eq!(bp.kind, EnemyKind::Basic);
        assert_eq!(bp.color.as_str(), DEFAULT_ENEMY_COLOR);
    }

    #[test]
    fn test_theme_color_camel_case() {
        let entry: LevelEntry =
            serde_json::from_str(r##"{ "name": "Dusk", "themeColor": "#402040" }"##).unwrap();
        assert_eq!(entry.theme().as_str(), "#402040");
    }

    #[test]
    fn test_display_name_fallback() {
        let empty = LevelDescriptor::default();
        assert_eq!(empty.display_name("forest"), "forest");

        let named = LevelDescriptor::from_json(r#"{ "levels": [ { "name": "Caverns" } ] }"#).unwrap();
        assert_eq!(named.display_name("forest"), "Caverns");
    }

    #[test]
    fn test_malformed_descriptor_is_error() {
        let err = LevelDescriptor::from_json("{ levels: ").unwrap_err();
        assert!(matches!(err, LevelError::Parse(_)));
    }

    #[test]
    fn test_snap_to_platform() {
        let platforms = [Aabb::new(240.0, 340.0, 160.0, 20.0)];
        let over = Aabb::new(380.0, 10.0, 40.0, 40.0);
        let snapped = snap_to_platform(over, &platforms);
        assert_eq!(snapped.bottom(), 340.0, "Partial x-overlap still snaps");
        assert_eq!(snapped.pos.x, 380.0);

        let clear = Aabb::new(400.0, 123.0, 40.0, 40.0);
        assert_eq!(snap_to_platform(clear, &platforms), clear, "Edge contact keeps authored y");
    }

    // ---- Serde ----

    #[test]
    fn test_session_command_serde() {
        let commands = vec![
            SessionCommand::KeyDown {
                code: "ArrowRight".into(),
            },
            SessionCommand::KeyUp { code: "Space".into() },
            SessionCommand::Resize {
                width: 1280.0,
                height: 720.0,
            },
            SessionCommand::SelectLevel { index: 2 },
            SessionCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SessionCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
        assert!(SessionCommand::Restart.rebuilds());
        assert!(!SessionCommand::Resize {
            width: 1.0,
            height: 1.0
        }
        .rebuilds());
    }

    #[test]
    fn test_game_event_tagging() {
        let event = GameEvent::EnemyStomped {
            slot: 1,
            kind: EnemyKind::Mushroom,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"EnemyStomped""#), "got {json}");
        assert!(json.contains(r#""kind":"mushroom""#), "got {json}");
    }
}
