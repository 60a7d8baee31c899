use crate::api::config::GameConfig;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::state::InputState;

/// A per-entity behavior unit, invoked once per frame while enabled.
///
/// Scripts may mutate any entity in the scene, spawn or despawn entities,
/// and request a scene change. They run strictly before the cast, collision,
/// resolution, and render phases, so a collider's `collisions` list always
/// reflects the previous frame when a script reads it.
pub trait Script {
    fn update(&mut self, ctx: &mut ScriptCtx);
}

/// A script plus its enabled flag. Disabled slots are skipped entirely.
pub struct ScriptSlot {
    pub enabled: bool,
    pub behavior: Box<dyn Script>,
}

impl ScriptSlot {
    pub fn new(script: impl Script + 'static) -> Self {
        Self {
            enabled: true,
            behavior: Box::new(script),
        }
    }
}

/// Everything a script can see during its update: the owning entity's id,
/// the current scene, the frame's input snapshot, configuration, the
/// manager's RNG, and the measured frame delta.
pub struct ScriptCtx<'a> {
    /// Id of the entity this script is attached to.
    pub entity: EntityId,
    pub scene: &'a mut Scene,
    pub input: &'a InputState,
    pub config: &'a GameConfig,
    pub rng: &'a mut Rng,
    /// Wall-clock seconds since the previous frame. Informational only;
    /// velocities are per-frame and never scaled by this.
    pub frame_dt: f32,
    next_scene: &'a mut Option<Scene>,
}

impl<'a> ScriptCtx<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        entity: EntityId,
        scene: &'a mut Scene,
        input: &'a InputState,
        config: &'a GameConfig,
        rng: &'a mut Rng,
        frame_dt: f32,
        next_scene: &'a mut Option<Scene>,
    ) -> Self {
        Self {
            entity,
            scene,
            input,
            config,
            rng,
            frame_dt,
            next_scene,
        }
    }

    /// The entity this script is attached to.
    ///
    /// Panics if the entity was removed from the scene while its scripts
    /// were still running; that is a contract violation, not a recoverable
    /// state.
    pub fn this(&self) -> &Entity {
        self.scene
            .get(self.entity)
            .expect("script's entity is missing from the scene")
    }

    /// Mutable access to the entity this script is attached to.
    pub fn this_mut(&mut self) -> &mut Entity {
        self.scene
            .get_mut(self.entity)
            .expect("script's entity is missing from the scene")
    }

    /// Replace the current scene once the script phase finishes.
    ///
    /// The remaining scripts of the old scene still run this frame; every
    /// later phase (cast, collision, resolution, render) operates on the new
    /// scene. The old scene and all of its entities are dropped. If several
    /// scripts request a change in the same frame, the last request wins.
    pub fn change_scene(&mut self, scene: Scene) {
        *self.next_scene = Some(scene);
    }
}
