pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::types::{Color, EntityId, ImageHandle};
pub use components::button::{
    spawn_button, ButtonState, ChangeSceneOnRelease, PressWatcher, ReleaseWatcher,
};
pub use components::collider::Collider;
pub use components::entity::{Entity, Transform};
pub use components::rigid_body::RigidBody;
pub use components::script::{Script, ScriptCtx, ScriptSlot};
pub use components::sprite::Sprite;
pub use core::manager::GameManager;
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use input::state::{InputEvent, InputState, MAX_KEYS};
pub use renderer::draw_list::{DrawCommand, DrawList, LAYER_COUNT};
pub use renderer::traits::{NullPresenter, Presenter};
pub use systems::collision::aabb_overlap;
