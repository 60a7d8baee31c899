pub mod controls;
pub mod images;
pub mod scenes;
pub mod scripts;
pub mod settings;

pub use settings::Settings;
