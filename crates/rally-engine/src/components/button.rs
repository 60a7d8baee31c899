use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::api::types::{EntityId, ImageHandle};
use crate::components::entity::Entity;
use crate::components::script::{Script, ScriptCtx};
use crate::components::sprite::Sprite;
use crate::core::scene::Scene;

/// Shared state of a clickable button, read and written by the watcher
/// scripts below. Shared via `Rc` because the press and release watchers
/// are separate scripts on the same entity; neither owns the other.
///
/// `pressed` persists across frames; `released_inside` / `released_outside`
/// are edge-triggered and reset at the start of every release-watcher tick,
/// so at most one of them is true on any given frame.
pub struct ButtonState {
    pub size: Vec2,
    pub pressed: Cell<bool>,
    pub released_inside: Cell<bool>,
    pub released_outside: Cell<bool>,
}

impl ButtonState {
    pub fn new(size: Vec2) -> Rc<Self> {
        Rc::new(Self {
            size,
            pressed: Cell::new(false),
            released_inside: Cell::new(false),
            released_outside: Cell::new(false),
        })
    }
}

/// Pointer strictly inside the box; boundary points do not count.
fn contains(pointer: Vec2, position: Vec2, size: Vec2) -> bool {
    pointer.x > position.x
        && pointer.x < position.x + size.x
        && pointer.y > position.y
        && pointer.y < position.y + size.y
}

/// Latches `pressed` the frame the pointer goes down inside the button
/// bounds, swapping the sprite to the pressed image.
pub struct PressWatcher {
    state: Rc<ButtonState>,
    pressed_image: ImageHandle,
}

impl PressWatcher {
    pub fn new(state: Rc<ButtonState>, pressed_image: ImageHandle) -> Self {
        Self {
            state,
            pressed_image,
        }
    }
}

impl Script for PressWatcher {
    fn update(&mut self, ctx: &mut ScriptCtx) {
        if self.state.pressed.get() || !ctx.input.pointer_down {
            return;
        }
        let position = ctx.this().transform.position;
        if contains(ctx.input.pointer, position, self.state.size) {
            self.state.pressed.set(true);
            ctx.this_mut()
                .sprite
                .as_mut()
                .expect("button entity has no sprite")
                .image = self.pressed_image;
        }
    }
}

/// Classifies the frame the pointer is released while the button is pressed:
/// `released_inside` if the pointer is still within bounds, otherwise
/// `released_outside`. Restores the idle sprite either way.
pub struct ReleaseWatcher {
    state: Rc<ButtonState>,
    idle_image: ImageHandle,
}

impl ReleaseWatcher {
    pub fn new(state: Rc<ButtonState>, idle_image: ImageHandle) -> Self {
        Self { state, idle_image }
    }
}

impl Script for ReleaseWatcher {
    fn update(&mut self, ctx: &mut ScriptCtx) {
        let state = &self.state;
        state.released_inside.set(false);
        state.released_outside.set(false);

        if !state.pressed.get() || ctx.input.pointer_down {
            return;
        }
        state.released_outside.set(true);
        state.pressed.set(false);
        ctx.this_mut()
            .sprite
            .as_mut()
            .expect("button entity has no sprite")
            .image = self.idle_image;

        let position = ctx.this().transform.position;
        if contains(ctx.input.pointer, position, state.size) {
            state.released_outside.set(false);
            state.released_inside.set(true);
        }
    }
}

/// Builds a replacement scene the frame the button is released inside its
/// bounds. The factory runs at press time, so a fresh scene is constructed
/// on every activation.
pub struct ChangeSceneOnRelease {
    state: Rc<ButtonState>,
    factory: Box<dyn FnMut(&mut ScriptCtx) -> Scene>,
}

impl ChangeSceneOnRelease {
    pub fn new(
        state: Rc<ButtonState>,
        factory: impl FnMut(&mut ScriptCtx) -> Scene + 'static,
    ) -> Self {
        Self {
            state,
            factory: Box::new(factory),
        }
    }
}

impl Script for ChangeSceneOnRelease {
    fn update(&mut self, ctx: &mut ScriptCtx) {
        if self.state.released_inside.get() {
            let next = (self.factory)(ctx);
            ctx.change_scene(next);
        }
    }
}

/// Spawn a button entity: sprite plus press/release watchers, no collider.
/// Returns the entity id and the shared state for further wiring (e.g.
/// attaching a `ChangeSceneOnRelease`).
pub fn spawn_button(
    scene: &mut Scene,
    tag: impl Into<String>,
    position: Vec2,
    size: Vec2,
    idle: ImageHandle,
    pressed: ImageHandle,
) -> (EntityId, Rc<ButtonState>) {
    let state = ButtonState::new(size);
    let id = scene.next_id();
    scene.spawn(
        Entity::new(id)
            .with_tag(tag)
            .with_position(position)
            .with_sprite(Sprite::new(idle))
            .with_script(PressWatcher::new(Rc::clone(&state), pressed))
            .with_script(ReleaseWatcher::new(Rc::clone(&state), idle)),
    );
    (id, state)
}
