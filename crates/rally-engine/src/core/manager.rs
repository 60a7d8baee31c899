use log::{debug, info};

use crate::api::config::GameConfig;
use crate::api::types::Color;
use crate::components::script::ScriptCtx;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::input::state::InputState;
use crate::renderer::draw_list::DrawList;
use crate::renderer::traits::Presenter;
use crate::systems::{collision, motion, render};

/// Owns the active scene and runs the per-frame simulation pipeline.
///
/// The phase order is a correctness invariant: scripts first, then motion
/// prediction, then collision detection, then collision-gated resolution,
/// then render composition. Scripts therefore always observe the previous
/// frame's collision lists, and collision always tests predicted positions.
pub struct GameManager {
    config: GameConfig,
    scene: Scene,
    /// Cumulative input snapshot. Written by the host between frames,
    /// read by scripts during the script phase.
    pub input: InputState,
    /// Background clear color handed to the presenter. Mutable at runtime.
    pub background: Color,
    clock: FrameClock,
    rng: Rng,
    draw_list: DrawList,
    pending_scene: Option<Scene>,
    frame_dt: f32,
}

impl GameManager {
    pub fn new(config: GameConfig, initial_scene: Scene) -> Self {
        let clock = FrameClock::new(config.target_fps);
        let rng = Rng::new(config.rng_seed);
        let background = config.background;
        Self {
            config,
            scene: initial_scene,
            input: InputState::new(),
            background,
            clock,
            rng,
            draw_list: DrawList::new(),
            pending_scene: None,
            frame_dt: 0.0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Wall-clock seconds measured between the two most recent frames.
    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }

    /// Replace the current scene immediately, dropping the old one and all
    /// of its entities. Host-level counterpart of `ScriptCtx::change_scene`;
    /// never call from inside a script.
    pub fn change_scene(&mut self, scene: Scene) {
        info!(
            "scene switch: {} entities out, {} in",
            self.scene.len(),
            scene.len()
        );
        self.scene = scene;
    }

    /// Run one frame: script phase, cast phase, collision phase, resolution
    /// phase, render phase. The presenter receives the composed draw list
    /// and background color at the end.
    pub fn frame<P: Presenter>(&mut self, presenter: &mut P) {
        self.frame_dt = self.clock.measure();

        self.run_script_phase();
        motion::cast_rigid_bodies(&mut self.scene);
        collision::update_collisions(&mut self.scene);
        motion::resolve_motion(&mut self.scene);

        render::build_draw_list(self.scene.iter(), &mut self.draw_list);
        presenter.present(self.background, &self.draw_list);
    }

    /// Sleep off the remainder of the frame budget. Call once per loop
    /// iteration from the host; tests and headless batch runs skip it.
    pub fn throttle(&mut self) {
        self.clock.throttle();
    }

    /// Script phase. The entity list is walked by index so entities spawned
    /// mid-phase are visited before the phase ends. Each entity's script
    /// list is taken out while it runs, which hands the scripts full mutable
    /// access to the scene; the list is put back afterwards unless the
    /// entity despawned itself.
    ///
    /// A scene change requested by any script is applied once the phase
    /// completes: the remaining scripts of the old scene still run this
    /// frame, and every later phase sees the new scene.
    fn run_script_phase(&mut self) {
        let mut index = 0;
        while index < self.scene.len() {
            let Some(id) = self.scene.get_at(index).map(|e| e.id) else {
                break;
            };
            let mut slots = match self.scene.get_mut(id) {
                Some(entity) => std::mem::take(&mut entity.scripts),
                None => {
                    index += 1;
                    continue;
                }
            };
            for slot in &mut slots {
                if !slot.enabled {
                    continue;
                }
                let mut ctx = ScriptCtx::new(
                    id,
                    &mut self.scene,
                    &self.input,
                    &self.config,
                    &mut self.rng,
                    self.frame_dt,
                    &mut self.pending_scene,
                );
                slot.behavior.update(&mut ctx);
            }
            if let Some(entity) = self.scene.get_mut(id) {
                entity.scripts = slots;
            }
            index += 1;
        }

        if let Some(next) = self.pending_scene.take() {
            debug!(
                "script-requested scene switch: {} entities out, {} in",
                self.scene.len(),
                next.len()
            );
            self.scene = next;
        }
    }
}
