pub mod collision;
pub mod motion;
pub mod render;
