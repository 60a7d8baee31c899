use glam::Vec2;

/// Motion component.
///
/// `velocity` is expressed in pixels per frame, not per second; the loop is
/// paced by wall-clock throttling and never scales motion by elapsed time.
/// `cast_position` is the tentative next-frame position computed by the cast
/// phase and committed (or not) by the resolution phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    pub enabled: bool,
    pub velocity: Vec2,
    pub cast_position: Vec2,
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            enabled: true,
            velocity: Vec2::ZERO,
            cast_position: Vec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}
