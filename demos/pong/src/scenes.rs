//! Scene factories. Each factory builds a fresh scene from scratch, so
//! switching back into the match always starts a clean game.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use rally_engine::{
    spawn_button, ChangeSceneOnRelease, Collider, Entity, RigidBody, Rng, Scene, Sprite,
};

use crate::controls;
use crate::images;
use crate::scripts::{PlayerController, PuckController, ScoreKeeper};
use crate::settings::Settings;

const BARRIER_THICKNESS: f32 = 30.0;
const BARRIER_OFFSET: f32 = 70.0;
const PADDLE_SIZE: Vec2 = Vec2::new(16.0, 70.0);
const PADDLE_EDGE_OFFSET: f32 = 30.0;
const GOAL_DEPTH: f32 = 100.0;
const PUCK_SIZE: Vec2 = Vec2::new(10.0, 10.0);
const SCORE_BOX: Vec2 = Vec2::new(50.0, 50.0);
const SCORE_Y: f32 = 8.0;
const SCORE_X_SEPARATION: f32 = 140.0;
const PLAY_BUTTON_SIZE: Vec2 = Vec2::new(176.0, 96.0);
const PLAY_AGAIN_BUTTON_SIZE: Vec2 = Vec2::new(370.0, 96.0);

/// Start menu: a single PLAY button that launches a two-player match.
pub fn start_menu(settings: Settings) -> Scene {
    let mut scene = Scene::new();
    let position = settings.screen_size() / 2.0 - PLAY_BUTTON_SIZE / 2.0;
    let (id, state) = spawn_button(
        &mut scene,
        "play",
        position,
        PLAY_BUTTON_SIZE,
        images::PLAY,
        images::PLAY_PRESSED,
    );
    scene
        .get_mut(id)
        .expect("button was just spawned")
        .add_script(ChangeSceneOnRelease::new(state, move |ctx| {
            two_player(settings, ctx.rng)
        }));
    scene
}

/// The match itself: two barriers, two paddles, two off-screen goals, two
/// score counters, the puck, and an invisible score keeper.
pub fn two_player(settings: Settings, rng: &mut Rng) -> Scene {
    let mut scene = Scene::new();
    let screen = settings.screen_size();

    let barrier_size = Vec2::new(screen.x, BARRIER_THICKNESS);
    let top = scene.next_id();
    scene.spawn(
        Entity::new(top)
            .with_tag("barrier-top")
            .with_position(Vec2::new(0.0, BARRIER_OFFSET))
            .with_sprite(Sprite::new(images::BARRIER))
            .with_collider(Collider::new(barrier_size)),
    );
    let bottom = scene.next_id();
    scene.spawn(
        Entity::new(bottom)
            .with_tag("barrier-bottom")
            .with_position(Vec2::new(0.0, screen.y - BARRIER_THICKNESS - BARRIER_OFFSET))
            .with_sprite(Sprite::new(images::BARRIER))
            .with_collider(Collider::new(barrier_size)),
    );

    let paddle_y = screen.y / 2.0 - PADDLE_SIZE.y / 2.0;
    let paddle_left = scene.next_id();
    scene.spawn(
        Entity::new(paddle_left)
            .with_tag("paddle-left")
            .with_position(Vec2::new(PADDLE_EDGE_OFFSET, paddle_y))
            .with_sprite(Sprite::new(images::PADDLE_LEFT))
            .with_collider(Collider::new(PADDLE_SIZE))
            .with_rigid_body(RigidBody::new())
            .with_script(PlayerController::new(
                controls::P1_UP,
                controls::P1_DOWN,
                settings.paddle_speed,
            )),
    );
    let paddle_right = scene.next_id();
    scene.spawn(
        Entity::new(paddle_right)
            .with_tag("paddle-right")
            .with_position(Vec2::new(
                screen.x - PADDLE_EDGE_OFFSET - PADDLE_SIZE.x,
                paddle_y,
            ))
            .with_sprite(Sprite::new(images::PADDLE_RIGHT))
            .with_collider(Collider::new(PADDLE_SIZE))
            .with_rigid_body(RigidBody::new())
            .with_script(PlayerController::new(
                controls::P2_UP,
                controls::P2_DOWN,
                settings.paddle_speed,
            )),
    );

    // Goals sit just outside the visible field; the puck reaches them only
    // by slipping past a paddle.
    let goal_size = Vec2::new(GOAL_DEPTH, screen.y);
    let goal_left = scene.next_id();
    scene.spawn(
        Entity::new(goal_left)
            .with_tag("goal-left")
            .with_position(Vec2::new(-GOAL_DEPTH, 0.0))
            .with_sprite(Sprite::new(images::GOAL))
            .with_collider(Collider::new(goal_size)),
    );
    let goal_right = scene.next_id();
    scene.spawn(
        Entity::new(goal_right)
            .with_tag("goal-right")
            .with_position(Vec2::new(screen.x, 0.0))
            .with_sprite(Sprite::new(images::GOAL))
            .with_collider(Collider::new(goal_size)),
    );

    let counter_left = scene.next_id();
    scene.spawn(
        Entity::new(counter_left)
            .with_tag("score-left")
            .with_position(Vec2::new(
                screen.x / 2.0 - SCORE_BOX.x / 2.0 - SCORE_X_SEPARATION,
                SCORE_Y,
            ))
            .with_sprite(Sprite::new(images::digit(0))),
    );
    let counter_right = scene.next_id();
    scene.spawn(
        Entity::new(counter_right)
            .with_tag("score-right")
            .with_position(Vec2::new(
                screen.x / 2.0 - SCORE_BOX.x / 2.0 + SCORE_X_SEPARATION,
                SCORE_Y,
            ))
            .with_sprite(Sprite::new(images::digit(0))),
    );

    let score_left = Rc::new(Cell::new(0));
    let score_right = Rc::new(Cell::new(0));

    let initial_velocity = Vec2::new(
        rng.sign() * settings.puck_speed,
        rng.sign() * settings.puck_speed,
    );
    let puck = scene.next_id();
    scene.spawn(
        Entity::new(puck)
            .with_tag("puck")
            .with_position(screen / 2.0 - PUCK_SIZE / 2.0)
            .with_sprite(Sprite::new(images::PUCK))
            .with_collider(Collider::new(PUCK_SIZE))
            .with_rigid_body(RigidBody::new().with_velocity(initial_velocity))
            .with_script(PuckController {
                top,
                bottom,
                paddle_left,
                paddle_right,
                goal_left,
                goal_right,
                counter_left,
                counter_right,
                score_left: Rc::clone(&score_left),
                score_right: Rc::clone(&score_right),
                initial_speed: settings.puck_speed,
                speed_increase: settings.speed_increase,
            }),
    );

    // Spawned after the puck so a winning goal and the scene switch happen
    // within the same script phase.
    let keeper = scene.next_id();
    scene.spawn(Entity::new(keeper).with_tag("score-keeper").with_script(
        ScoreKeeper {
            max_score: settings.max_score,
            score_left,
            score_right,
            settings,
        },
    ));

    scene
}

/// End menu: a PLAY AGAIN button that starts a fresh match.
pub fn end_menu(settings: Settings) -> Scene {
    let mut scene = Scene::new();
    let position = settings.screen_size() / 2.0 - PLAY_AGAIN_BUTTON_SIZE / 2.0;
    let (id, state) = spawn_button(
        &mut scene,
        "play-again",
        position,
        PLAY_AGAIN_BUTTON_SIZE,
        images::PLAY_AGAIN,
        images::PLAY_AGAIN_PRESSED,
    );
    scene
        .get_mut(id)
        .expect("button was just spawned")
        .add_script(ChangeSceneOnRelease::new(state, move |ctx| {
            two_player(settings, ctx.rng)
        }));
    scene
}
