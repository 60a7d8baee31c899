use serde::{Deserialize, Serialize};

/// Unique identifier for an entity in a scene.
///
/// Ids are allocated per scene and compared by value, so scripts classify
/// collision partners by handle equality rather than object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Opaque handle to a presentation image.
///
/// The engine never interprets handles; the presenter resolves them to
/// whatever surface/texture representation it owns. Games define their own
/// handle tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageHandle(pub u32);

/// 8-bit RGB color, used for the background clear and by presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREY: Color = Color::rgb(140, 140, 140);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 249, 42);
    pub const BLUE: Color = Color::rgb(19, 111, 249);
    pub const TURQUOISE: Color = Color::rgb(0, 255, 162);
    pub const RED: Color = Color::rgb(249, 19, 19);
    pub const ORANGE: Color = Color::rgb(255, 85, 0);
    pub const YELLOW: Color = Color::rgb(239, 195, 21);
    pub const PINK: Color = Color::rgb(255, 0, 196);
    pub const PURPLE: Color = Color::rgb(171, 0, 255);
}
