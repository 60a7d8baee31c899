pub mod button;
pub mod collider;
pub mod entity;
pub mod rigid_body;
pub mod script;
pub mod sprite;
