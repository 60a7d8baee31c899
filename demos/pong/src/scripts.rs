//! Per-entity behaviors for the match scene: paddle control, puck bounce
//! and scoring, and the win-condition watcher.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use log::{debug, info};

use rally_engine::{EntityId, Script, ScriptCtx};

use crate::images;
use crate::scenes;
use crate::settings::Settings;

/// Drives a paddle from two key slots. The down key wins when both are
/// held. Velocity is rewritten every frame, so releasing both keys stops
/// the paddle immediately.
pub struct PlayerController {
    up_slot: usize,
    down_slot: usize,
    speed: f32,
}

impl PlayerController {
    pub fn new(up_slot: usize, down_slot: usize, speed: f32) -> Self {
        Self {
            up_slot,
            down_slot,
            speed,
        }
    }
}

impl Script for PlayerController {
    fn update(&mut self, ctx: &mut ScriptCtx) {
        let velocity = if ctx.input.key(self.down_slot) {
            Vec2::new(0.0, self.speed)
        } else if ctx.input.key(self.up_slot) {
            Vec2::new(0.0, -self.speed)
        } else {
            Vec2::ZERO
        };
        ctx.this_mut()
            .rigid_body
            .as_mut()
            .expect("paddle has no rigid body")
            .velocity = velocity;
    }
}

/// Add `increase` to each component's magnitude, preserving sign. Zero
/// components stay zero.
fn increase_speed(velocity: &mut Vec2, increase: f32) {
    if velocity.x > 0.0 {
        velocity.x += increase;
    } else if velocity.x < 0.0 {
        velocity.x -= increase;
    }
    if velocity.y > 0.0 {
        velocity.y += increase;
    } else if velocity.y < 0.0 {
        velocity.y -= increase;
    }
}

/// Puck physics and scoring. Classifies each collision partner recorded
/// last frame against the handles captured at scene construction: barriers
/// bounce the puck vertically, paddles bounce it horizontally and speed it
/// up, goals score for the opposing side and reset the rally.
pub struct PuckController {
    pub top: EntityId,
    pub bottom: EntityId,
    pub paddle_left: EntityId,
    pub paddle_right: EntityId,
    pub goal_left: EntityId,
    pub goal_right: EntityId,
    pub counter_left: EntityId,
    pub counter_right: EntityId,
    pub score_left: Rc<Cell<u32>>,
    pub score_right: Rc<Cell<u32>>,
    pub initial_speed: f32,
    pub speed_increase: f32,
}

impl PuckController {
    fn reset_rally(&self, ctx: &mut ScriptCtx) {
        let center = ctx.config.screen_size / 2.0;
        let velocity = Vec2::new(
            ctx.rng.sign() * self.initial_speed,
            ctx.rng.sign() * self.initial_speed,
        );
        let puck = ctx.this_mut();
        puck.transform.position = center;
        puck.rigid_body
            .as_mut()
            .expect("puck has no rigid body")
            .velocity = velocity;
    }

    fn award_point(&self, ctx: &mut ScriptCtx, counter: EntityId, score: &Cell<u32>) {
        score.set(score.get() + 1);
        info!(
            "goal: {} - {}",
            self.score_left.get(),
            self.score_right.get()
        );
        ctx.scene
            .get_mut(counter)
            .expect("score counter is missing from the scene")
            .sprite
            .as_mut()
            .expect("score counter has no sprite")
            .image = images::digit(score.get());
    }
}

impl Script for PuckController {
    fn update(&mut self, ctx: &mut ScriptCtx) {
        let hits = ctx
            .this()
            .collider
            .as_ref()
            .expect("puck has no collider")
            .collisions
            .clone();

        for other in hits {
            if other == self.top || other == self.bottom {
                let body = ctx
                    .this_mut()
                    .rigid_body
                    .as_mut()
                    .expect("puck has no rigid body");
                body.velocity.y = -body.velocity.y;
                debug!("barrier bounce, velocity now {}", body.velocity);
            }

            if other == self.paddle_left || other == self.paddle_right {
                let increase = self.speed_increase;
                let body = ctx
                    .this_mut()
                    .rigid_body
                    .as_mut()
                    .expect("puck has no rigid body");
                increase_speed(&mut body.velocity, increase);
                body.velocity.x = -body.velocity.x;
                debug!("paddle bounce, velocity now {}", body.velocity);
            }

            if other == self.goal_left {
                self.reset_rally(ctx);
                self.award_point(ctx, self.counter_right, &self.score_right);
            } else if other == self.goal_right {
                self.reset_rally(ctx);
                self.award_point(ctx, self.counter_left, &self.score_left);
            }
        }
    }
}

/// Watches both scores every frame and switches to the end menu the frame
/// either one first reaches the maximum. There is no "already switched"
/// guard: the script is torn down with its scene, so it can never fire
/// twice.
pub struct ScoreKeeper {
    pub max_score: u32,
    pub score_left: Rc<Cell<u32>>,
    pub score_right: Rc<Cell<u32>>,
    pub settings: Settings,
}

impl Script for ScoreKeeper {
    fn update(&mut self, ctx: &mut ScriptCtx) {
        if self.score_left.get() == self.max_score || self.score_right.get() == self.max_score {
            info!(
                "match over: {} - {}",
                self.score_left.get(),
                self.score_right.get()
            );
            let next = scenes::end_menu(self.settings);
            ctx.change_scene(next);
        }
    }
}
