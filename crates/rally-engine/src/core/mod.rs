pub mod manager;
pub mod rng;
pub mod scene;
pub mod time;
