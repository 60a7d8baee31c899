use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::collider::Collider;
use crate::components::rigid_body::RigidBody;
use crate::components::script::{Script, ScriptSlot};
use crate::components::sprite::Sprite;

/// World placement. Always present on every entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec2,
}

/// Fat entity: a single struct with optional capability components.
///
/// Any combination of components is valid: a static wall is collider-only,
/// a one-shot mover is rigid-body-only, a score keeper is scripts-only.
pub struct Entity {
    /// Unique identifier within the owning scene.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    pub transform: Transform,
    pub sprite: Option<Sprite>,
    pub collider: Option<Collider>,
    pub rigid_body: Option<RigidBody>,
    /// Behavior units, run in order by the script phase when enabled.
    pub scripts: Vec<ScriptSlot>,
}

impl Entity {
    /// Create a new entity with the given id at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            transform: Transform::default(),
            sprite: None,
            collider: None,
            rigid_body: None,
            scripts: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_rigid_body(mut self, rigid_body: RigidBody) -> Self {
        self.rigid_body = Some(rigid_body);
        self
    }

    pub fn with_script(mut self, script: impl Script + 'static) -> Self {
        self.add_script(script);
        self
    }

    /// Append a behavior unit; it runs after any scripts already attached.
    pub fn add_script(&mut self, script: impl Script + 'static) {
        self.scripts.push(ScriptSlot::new(script));
    }

    /// Re-enable the sprite, every script, and the collider/rigid-body flags.
    ///
    /// Together with `disable` this is the supported way to toggle an
    /// entity's participation without removing it from the scene.
    pub fn enable(&mut self) {
        self.set_enabled(true);
    }

    /// Disable the sprite, every script, and the collider/rigid-body flags.
    pub fn disable(&mut self) {
        self.set_enabled(false);
    }

    fn set_enabled(&mut self, enabled: bool) {
        if let Some(sprite) = &mut self.sprite {
            sprite.enabled = enabled;
        }
        for slot in &mut self.scripts {
            slot.enabled = enabled;
        }
        if let Some(collider) = &mut self.collider {
            collider.enabled = enabled;
        }
        if let Some(rigid_body) = &mut self.rigid_body {
            rigid_body.enabled = enabled;
        }
    }
}
