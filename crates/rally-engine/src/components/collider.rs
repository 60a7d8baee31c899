use glam::Vec2;

use crate::api::types::EntityId;

/// Axis-aligned box collider.
///
/// `collisions` holds the ids of every other enabled collider whose box
/// overlapped this one during the most recent collision phase. The list is
/// rebuilt from scratch each frame; scripts read it one phase later.
#[derive(Debug, Clone)]
pub struct Collider {
    pub enabled: bool,
    /// Box extents; the box spans `position .. position + size`.
    pub size: Vec2,
    pub collisions: Vec<EntityId>,
}

impl Collider {
    pub fn new(size: Vec2) -> Self {
        Self {
            enabled: true,
            size,
            collisions: Vec::new(),
        }
    }
}
