//! End-to-end frame tests: drive the real scenes through the manager with
//! a null presenter and assert on the observable entity state.

use glam::Vec2;

use rally_engine::{GameManager, ImageHandle, InputEvent, NullPresenter, Rng, Scene};
use rally_pong::scenes;
use rally_pong::settings::Settings;
use rally_pong::{controls, images};

fn match_manager(settings: Settings) -> GameManager {
    let mut rng = Rng::new(7);
    let scene = scenes::two_player(settings, &mut rng);
    GameManager::new(settings.config(7), scene)
}

fn place_puck(manager: &mut GameManager, position: Vec2, velocity: Vec2) {
    let puck = manager
        .scene_mut()
        .find_by_tag_mut("puck")
        .expect("no puck in scene");
    puck.transform.position = position;
    puck.rigid_body.as_mut().unwrap().velocity = velocity;
}

fn puck_state(manager: &GameManager) -> (Vec2, Vec2) {
    let puck = manager.scene().find_by_tag("puck").unwrap();
    (puck.transform.position, puck.rigid_body.unwrap().velocity)
}

fn counter_image(manager: &GameManager, tag: &str) -> ImageHandle {
    manager
        .scene()
        .find_by_tag(tag)
        .unwrap()
        .sprite
        .as_ref()
        .unwrap()
        .image
}

#[test]
fn puck_bounces_off_the_top_barrier() {
    let mut manager = match_manager(Settings::default());
    let mut presenter = NullPresenter;

    // Heading up-right, one frame away from the top barrier (y 70..100).
    place_puck(&mut manager, Vec2::new(200.0, 105.0), Vec2::new(7.0, -7.0));
    manager.frame(&mut presenter);

    // Collision recorded at the cast position: the puck is frozen in place.
    let (position, velocity) = puck_state(&manager);
    assert_eq!(position, Vec2::new(200.0, 105.0));
    assert_eq!(velocity, Vec2::new(7.0, -7.0));

    // Next frame the controller flips the vertical component; the
    // horizontal component is untouched and the puck moves again.
    manager.frame(&mut presenter);
    let (position, velocity) = puck_state(&manager);
    assert_eq!(velocity, Vec2::new(7.0, 7.0));
    assert_eq!(position, Vec2::new(207.0, 112.0));
}

#[test]
fn paddle_hit_flips_x_and_speeds_the_puck_up() {
    let mut manager = match_manager(Settings::default());
    let mut presenter = NullPresenter;

    // One frame from the left paddle (x 30..46, y 365..435).
    place_puck(&mut manager, Vec2::new(50.0, 400.0), Vec2::new(-7.0, -7.0));
    manager.frame(&mut presenter);
    manager.frame(&mut presenter);

    let (_, velocity) = puck_state(&manager);
    // Magnitudes grow by 0.75 per axis before the horizontal flip.
    assert_eq!(velocity, Vec2::new(7.75, -7.75));
}

#[test]
fn left_goal_scores_for_the_right_side_and_resets_the_rally() {
    let settings = Settings::default();
    let mut manager = match_manager(settings);
    let mut presenter = NullPresenter;

    // One frame from crossing into the left goal (x -100..0).
    place_puck(&mut manager, Vec2::new(5.0, 400.0), Vec2::new(-7.0, 0.0));
    manager.frame(&mut presenter);
    manager.frame(&mut presenter);

    assert_eq!(counter_image(&manager, "score-right"), images::digit(1));
    assert_eq!(counter_image(&manager, "score-left"), images::digit(0));

    // The rally restarted from the screen center with a fresh diagonal
    // velocity of +/- initial speed per axis; by the time we observe it,
    // the puck has advanced one unobstructed frame from the center.
    let (position, velocity) = puck_state(&manager);
    assert_eq!(velocity.x.abs(), settings.puck_speed);
    assert_eq!(velocity.y.abs(), settings.puck_speed);
    assert_eq!(position, manager.config().screen_size / 2.0 + velocity);
}

#[test]
fn score_keeper_ends_the_match_when_the_max_is_reached() {
    let settings = Settings::default();
    assert_eq!(settings.max_score, 2);
    let mut manager = match_manager(settings);
    let mut presenter = NullPresenter;

    // First goal.
    place_puck(&mut manager, Vec2::new(5.0, 400.0), Vec2::new(-7.0, 0.0));
    manager.frame(&mut presenter);
    manager.frame(&mut presenter);
    assert!(
        manager.scene().find_by_tag("puck").is_some(),
        "match must continue below max score"
    );

    // Second goal: the score keeper runs after the puck controller in the
    // same script phase, so the switch lands on the scoring frame itself.
    place_puck(&mut manager, Vec2::new(5.0, 400.0), Vec2::new(-7.0, 0.0));
    manager.frame(&mut presenter);
    assert!(manager.scene().find_by_tag("puck").is_some());
    manager.frame(&mut presenter);

    assert!(manager.scene().find_by_tag("play-again").is_some());
    assert!(manager.scene().find_by_tag("puck").is_none());
}

#[test]
fn down_key_wins_over_up_and_moves_the_paddle() {
    let settings = Settings::default();
    let mut manager = match_manager(settings);
    let mut presenter = NullPresenter;

    manager.input.apply(InputEvent::KeyDown {
        slot: controls::P1_UP,
    });
    manager.input.apply(InputEvent::KeyDown {
        slot: controls::P1_DOWN,
    });
    let before = manager
        .scene()
        .find_by_tag("paddle-left")
        .unwrap()
        .transform
        .position;
    manager.frame(&mut presenter);

    let paddle = manager.scene().find_by_tag("paddle-left").unwrap();
    assert_eq!(
        paddle.rigid_body.unwrap().velocity,
        Vec2::new(0.0, settings.paddle_speed)
    );
    assert_eq!(
        paddle.transform.position,
        before + Vec2::new(0.0, settings.paddle_speed)
    );

    // Releasing both keys stops the paddle the next frame.
    manager.input.apply(InputEvent::KeyUp {
        slot: controls::P1_UP,
    });
    manager.input.apply(InputEvent::KeyUp {
        slot: controls::P1_DOWN,
    });
    manager.frame(&mut presenter);
    let paddle = manager.scene().find_by_tag("paddle-left").unwrap();
    assert_eq!(paddle.rigid_body.unwrap().velocity, Vec2::ZERO);
}

#[test]
fn clicking_play_starts_a_match_and_drops_the_menu() {
    let settings = Settings::default();
    let mut manager = GameManager::new(settings.config(3), scenes::start_menu(settings));
    let mut presenter = NullPresenter;
    let center = settings.screen_size() / 2.0;

    manager.input.apply(InputEvent::PointerDown {
        x: center.x,
        y: center.y,
    });
    manager.frame(&mut presenter);
    assert!(manager.scene().find_by_tag("play").is_some());

    manager.input.apply(InputEvent::PointerUp {
        x: center.x,
        y: center.y,
    });
    manager.frame(&mut presenter);

    assert!(manager.scene().find_by_tag("puck").is_some());
    assert!(manager.scene().find_by_tag("play").is_none());
}

#[test]
fn every_match_entity_is_present_with_its_components() {
    let settings = Settings::default();
    let mut rng = Rng::new(1);
    let scene: Scene = scenes::two_player(settings, &mut rng);

    for tag in [
        "barrier-top",
        "barrier-bottom",
        "paddle-left",
        "paddle-right",
        "goal-left",
        "goal-right",
    ] {
        let entity = scene.find_by_tag(tag).unwrap_or_else(|| panic!("{tag} missing"));
        assert!(entity.collider.is_some(), "{tag} must collide");
    }
    let puck = scene.find_by_tag("puck").unwrap();
    assert!(puck.collider.is_some() && puck.rigid_body.is_some());
    let velocity = puck.rigid_body.unwrap().velocity;
    assert_eq!(velocity.x.abs(), settings.puck_speed);
    assert_eq!(velocity.y.abs(), settings.puck_speed);

    let keeper = scene.find_by_tag("score-keeper").unwrap();
    assert!(keeper.sprite.is_none() && keeper.collider.is_none());
}
