//! Image-handle table. Handles are opaque to the engine; a presenter maps
//! them to whatever surfaces it renders with. Score digits get a handle
//! range of their own so a counter can swap its sprite as the count changes.

use rally_engine::ImageHandle;

pub const BARRIER: ImageHandle = ImageHandle(1);
pub const PADDLE_LEFT: ImageHandle = ImageHandle(2);
pub const PADDLE_RIGHT: ImageHandle = ImageHandle(3);
pub const PUCK: ImageHandle = ImageHandle(4);
pub const GOAL: ImageHandle = ImageHandle(5);
pub const PLAY: ImageHandle = ImageHandle(6);
pub const PLAY_PRESSED: ImageHandle = ImageHandle(7);
pub const PLAY_AGAIN: ImageHandle = ImageHandle(8);
pub const PLAY_AGAIN_PRESSED: ImageHandle = ImageHandle(9);

const DIGIT_BASE: u32 = 100;

/// Handle displaying a score value.
pub fn digit(count: u32) -> ImageHandle {
    ImageHandle(DIGIT_BASE + count)
}
