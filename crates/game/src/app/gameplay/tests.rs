    use super::*;
    use std::path::Path;

    use engine::{GameLoop, LoopState, Rect};

    use super::chimp::{AnimationState, Character, Facing, CHIMP_START};
    use super::fist::Cursor;
    use super::play_field::{BackgroundColor, PlayField};

    const CHIMP_COLOR: [u8; 4] = [120, 80, 40, 255];
    const FIST_COLOR: [u8; 4] = [230, 190, 150, 255];

    fn chimp_sprite() -> Sprite {
        Sprite::solid(40, 40, CHIMP_COLOR)
    }

    fn fist_sprite() -> Sprite {
        Sprite::solid(30, 30, FIST_COLOR)
    }

    fn simulation() -> SimulationState {
        SimulationState::new(chimp_sprite(), fist_sprite())
    }

    fn silent_game() -> MonkeyFever {
        MonkeyFever::new(
            chimp_sprite(),
            fist_sprite(),
            Sounds::silent(),
            AudioDevice::disabled(),
        )
    }

    fn square_fist_at(pointer: Point) -> Cursor {
        let mut cursor = Cursor::new(Sprite::solid(40, 40, FIST_COLOR));
        cursor.update(pointer);
        cursor
    }

    #[test]
    fn chimp_starts_walking_right_at_spawn() {
        let sim = simulation();
        let chimp = sim.character();

        assert_eq!(chimp.rect().top_left(), CHIMP_START);
        assert_eq!(chimp.velocity(), 9);
        assert_eq!(chimp.facing(), Facing::Right);
        assert_eq!(chimp.animation(), AnimationState::Walking);
        assert_eq!(sim.background(), BackgroundColor::Red);
    }

    #[test]
    fn chimp_never_leaves_play_field() {
        let mut sim = simulation();
        let area = sim.field().area();

        for tick in 1..=2_000 {
            sim.advance(Point::default());
            let rect = sim.character().rect();
            assert!(
                rect.left() >= area.left() && rect.right() <= area.right(),
                "tick {tick}: {rect:?}"
            );
        }
    }

    #[test]
    fn reversing_twice_restores_velocity() {
        let mut chimp = Character::new(chimp_sprite());

        chimp.reverse_direction();
        assert_eq!(chimp.velocity(), -9);
        assert_eq!(chimp.facing(), Facing::Left);

        chimp.reverse_direction();
        assert_eq!(chimp.velocity(), 9);
        assert_eq!(chimp.facing(), Facing::Right);
    }

    #[test]
    fn velocity_flips_once_when_right_edge_is_reached() {
        let mut sim = simulation();
        let mut flips = Vec::new();

        for tick in 1..=60 {
            let before = sim.character().velocity();
            sim.advance(Point::default());
            if sim.character().velocity().signum() != before.signum() {
                flips.push(tick);
            }
        }

        // left = 10 + 9 * 46 = 424 puts the next right edge at 473 > 468.
        assert_eq!(flips, vec![47]);
    }

    #[test]
    fn turn_and_color_toggle_can_fire_on_the_same_tick() {
        let mut sim = simulation();
        for _ in 0..46 {
            sim.advance(Point::default());
        }
        let mirrored_before = sim.character().actor().is_mirrored();
        let background_before = sim.background();

        sim.advance(Point::default());

        // Turned back to left = 415, right = 455 = 13 * 35.
        assert_eq!(sim.character().rect().left(), 415);
        assert_eq!(sim.character().facing(), Facing::Left);
        assert_ne!(sim.background(), background_before);
        assert_eq!(sim.character().actor().is_mirrored(), mirrored_before);
    }

    #[test]
    fn background_toggles_exactly_on_right_edges_divisible_by_13() {
        let mut sim = simulation();
        let mut toggle_ticks = Vec::new();

        for tick in 1..=200 {
            let before = sim.background();
            sim.advance(Point::default());
            let right = sim.character().rect().right();
            let toggled = sim.background() != before;

            assert_eq!(toggled, right % 13 == 0, "tick {tick}: right={right}");
            if toggled {
                toggle_ticks.push(tick);
            }
        }

        // right = 50 + 9 * tick first hits a multiple of 13 at 104.
        assert_eq!(toggle_ticks.first(), Some(&6));
        assert!(toggle_ticks.len() > 3);
    }

    #[test]
    fn color_toggle_also_mirrors_the_chimp() {
        let mut sim = simulation();
        for _ in 0..5 {
            sim.advance(Point::default());
        }
        assert!(!sim.character().actor().is_mirrored());

        sim.advance(Point::default());

        assert_eq!(sim.character().rect().right(), 104);
        assert_eq!(sim.background(), BackgroundColor::Green);
        assert!(sim.character().actor().is_mirrored());
    }

    #[test]
    fn background_color_pair_alternates() {
        let mut field = PlayField::default();
        assert_eq!(field.background().rgba(), [211, 4, 4, 255]);

        field.toggle_background();
        assert_eq!(field.background().rgba(), [153, 229, 80, 255]);

        field.toggle_background();
        assert_eq!(field.background(), BackgroundColor::Red);
    }

    #[test]
    fn spin_lasts_thirty_ticks_and_restores_original_image() {
        let mut sim = simulation();
        let original_image = sim.character().actor().image().clone();
        let original_rect = sim.character().rect();
        let center = original_rect.center();

        assert!(sim.character_mut().punched());
        assert_eq!(sim.character().spin_angle(), 1);

        for tick in 1..30u32 {
            sim.advance(Point::default());
            let chimp = sim.character();
            assert_eq!(chimp.animation(), AnimationState::Spinning { angle: 1 + 12 * tick });
            assert_eq!(chimp.rect().center(), center, "tick {tick}");
        }

        sim.advance(Point::default());
        let chimp = sim.character();
        assert_eq!(chimp.animation(), AnimationState::Walking);
        assert_eq!(chimp.spin_angle(), 0);
        assert_eq!(chimp.actor().image(), &original_image);
        assert_eq!(chimp.rect(), original_rect);
    }

    #[test]
    fn spinning_rotates_from_the_captured_image() {
        let mut sim = simulation();
        sim.character_mut().punched();

        for _ in 0..3 {
            sim.advance(Point::default());
        }

        let chimp = sim.character();
        assert_eq!(chimp.spin_angle(), 37);
        assert_eq!(chimp.actor().image(), &chimp.actor().baseline().rotated(37));
        assert!(chimp.rect().width > 40);
    }

    #[test]
    fn punch_during_spin_does_not_restart_it() {
        let mut sim = simulation();
        assert!(sim.character_mut().punched());
        sim.advance(Point::default());
        sim.advance(Point::default());

        assert!(!sim.character_mut().punched());
        assert_eq!(sim.character().spin_angle(), 25);
    }

    #[test]
    fn fist_follows_pointer_by_midtop_and_thrusts_while_punching() {
        let mut cursor = Cursor::new(fist_sprite());
        cursor.update(Point::new(100, 20));
        assert_eq!(cursor.rect(), Rect::new(85, 20, 30, 30));

        cursor.attempt_punch(&Rect::new(0, 0, 1, 1));
        cursor.update(Point::new(100, 20));
        assert_eq!(cursor.rect(), Rect::new(90, 30, 30, 30));

        cursor.release_punch();
        cursor.update(Point::new(100, 20));
        assert_eq!(cursor.rect(), Rect::new(85, 20, 30, 30));
    }

    #[test]
    fn second_punch_while_punching_is_ignored() {
        let target = Rect::new(100, 10, 40, 40);
        let mut cursor = square_fist_at(Point::new(120, 10));

        assert!(cursor.attempt_punch(&target));
        let rect_before = cursor.rect();

        assert!(!cursor.attempt_punch(&target));
        assert!(cursor.is_punching());
        assert_eq!(cursor.rect(), rect_before);

        cursor.release_punch();
        assert!(cursor.attempt_punch(&target));
    }

    #[test]
    fn release_is_idempotent() {
        let mut cursor = Cursor::new(fist_sprite());
        cursor.release_punch();
        assert!(!cursor.is_punching());

        cursor.attempt_punch(&Rect::new(0, 0, 1, 1));
        cursor.release_punch();
        cursor.release_punch();
        assert!(!cursor.is_punching());
    }

    #[test]
    fn edge_touching_fist_misses() {
        let target = Rect::new(100, 10, 40, 40);
        let mut cursor = square_fist_at(Point::new(80, 10));

        assert_eq!(cursor.rect().right(), target.left());
        assert!(!cursor.attempt_punch(&target));
    }

    #[test]
    fn shallow_overlap_is_absorbed_by_the_hitbox_margin() {
        let target = Rect::new(100, 10, 40, 40);
        let mut cursor = square_fist_at(Point::new(82, 10));

        assert!(cursor.rect().intersects(&target));
        assert!(!cursor.attempt_punch(&target));
    }

    #[test]
    fn hitbox_threshold_is_exact() {
        let target = Rect::new(100, 10, 40, 40);

        let mut short = square_fist_at(Point::new(83, 10));
        assert_eq!(short.hitbox().right(), 100);
        assert!(!short.attempt_punch(&target));

        let mut reaching = square_fist_at(Point::new(84, 10));
        assert_eq!(reaching.hitbox().right(), 101);
        assert!(reaching.attempt_punch(&target));
    }

    #[test]
    fn fully_overlapping_fist_hits() {
        let target = Rect::new(100, 10, 40, 40);
        let mut cursor = square_fist_at(Point::new(120, 10));

        assert_eq!(cursor.rect(), target);
        assert!(cursor.attempt_punch(&target));
    }

    #[test]
    fn miss_leaves_chimp_walking() {
        let mut sim = simulation();
        sim.advance(Point::new(400, 0));

        assert_eq!(sim.press(), PunchOutcome::Miss);
        assert!(sim.cursor().is_punching());
        assert_eq!(sim.character().animation(), AnimationState::Walking);
    }

    #[test]
    fn press_over_chimp_starts_spin_and_release_retracts() {
        let mut game_loop = GameLoop::new(silent_game());
        let mut canvas = Canvas::new(PLAY_FIELD_WIDTH, PLAY_FIELD_HEIGHT);
        let pointer = Point::new(40, 20);

        assert_eq!(game_loop.tick([], pointer, &mut canvas), LoopState::Running);
        assert!(!game_loop.game().simulation().character().is_spinning());

        game_loop.tick([InputEvent::PointerButtonDown], pointer, &mut canvas);
        let sim = game_loop.game().simulation();
        assert!(sim.cursor().is_punching());
        assert_eq!(sim.character().animation(), AnimationState::Spinning { angle: 13 });

        game_loop.tick([InputEvent::PointerButtonUp], pointer, &mut canvas);
        let sim = game_loop.game().simulation();
        assert!(!sim.cursor().is_punching());
        assert!(sim.character().is_spinning());
    }

    #[test]
    fn release_without_press_keeps_fist_retracted() {
        let mut game_loop = GameLoop::new(silent_game());
        let mut canvas = Canvas::new(PLAY_FIELD_WIDTH, PLAY_FIELD_HEIGHT);

        game_loop.tick([InputEvent::PointerButtonUp], Point::new(300, 5), &mut canvas);

        assert!(!game_loop.game().simulation().cursor().is_punching());
    }

    #[test]
    fn frame_draws_background_then_fist_then_chimp() {
        let mut game_loop = GameLoop::new(silent_game());
        let mut canvas = Canvas::new(PLAY_FIELD_WIDTH, PLAY_FIELD_HEIGHT);

        // Chimp lands at (19, 10, 40, 40), fist at (45, 25, 30, 30).
        game_loop.tick([], Point::new(60, 25), &mut canvas);

        assert_eq!(canvas.pixel(467, 59), Some(BackgroundColor::Red.rgba()));
        assert_eq!(canvas.pixel(50, 30), Some(CHIMP_COLOR));
        assert_eq!(canvas.pixel(70, 52), Some(FIST_COLOR));
        assert_eq!(canvas.pixel(30, 55), Some(BackgroundColor::Red.rgba()));
    }

    #[test]
    fn escape_stops_the_game_loop() {
        let mut game_loop = GameLoop::new(silent_game());
        let mut canvas = Canvas::new(PLAY_FIELD_WIDTH, PLAY_FIELD_HEIGHT);

        let state = game_loop.tick(
            [InputEvent::KeyDown(engine::Key::Escape), InputEvent::PointerButtonDown],
            Point::new(40, 20),
            &mut canvas,
        );

        assert_eq!(state, LoopState::Stopped);
        assert!(!game_loop.game().simulation().cursor().is_punching());
    }

    #[test]
    fn bundled_assets_decode_and_fit_the_play_field() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/data");
        let loader = AssetLoader::new(data_dir);

        let (chimp, chimp_rect) = loader
            .load_image(CHIMP_IMAGE, ColorKey::Corner)
            .expect("chimp image");
        let (fist, _) = loader
            .load_image(FIST_IMAGE, ColorKey::Corner)
            .expect("fist image");

        assert!(chimp_rect.height + CHIMP_START.y <= PLAY_FIELD_HEIGHT as i32);
        assert_eq!(chimp.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(fist.pixel(0, 0), Some([0, 0, 0, 0]));

        for sound in [HIT_SOUND, MISS_SOUND] {
            let (_, bytes) = loader.read_bytes(sound).expect("sound bytes");
            assert_eq!(&bytes[..4], b"RIFF", "{sound}");
        }
    }
