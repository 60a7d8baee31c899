use glam::Vec2;

/// Number of named key slots. Games assign their own meaning to each slot
/// (e.g. player-one up/down, player-two up/down).
pub const MAX_KEYS: usize = 4;

/// Input event types the engine understands. The host translates real
/// window events into these; the engine attaches no game meaning to them.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The pointer moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// The primary pointer button went down at (x, y).
    PointerDown { x: f32, y: f32 },
    /// The primary pointer button went up at (x, y).
    PointerUp { x: f32, y: f32 },
    /// A named key slot went down.
    KeyDown { slot: usize },
    /// A named key slot went up.
    KeyUp { slot: usize },
}

/// Cumulative input snapshot read by scripts.
///
/// Single-writer, many-reader: the host applies events once per tick before
/// the frame runs; scripts only read. State persists between frames: a key
/// stays down until a matching `KeyUp` arrives.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub pointer: Vec2,
    pub pointer_down: bool,
    keys: [bool; MAX_KEYS],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the snapshot.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::PointerDown { x, y } => {
                self.pointer = Vec2::new(x, y);
                self.pointer_down = true;
            }
            InputEvent::PointerUp { x, y } => {
                self.pointer = Vec2::new(x, y);
                self.pointer_down = false;
            }
            InputEvent::KeyDown { slot } => self.set_key(slot, true),
            InputEvent::KeyUp { slot } => self.set_key(slot, false),
        }
    }

    pub fn key(&self, slot: usize) -> bool {
        assert!(slot < MAX_KEYS, "key slot {slot} out of range");
        self.keys[slot]
    }

    pub fn set_key(&mut self, slot: usize, down: bool) {
        assert!(slot < MAX_KEYS, "key slot {slot} out of range");
        self.keys[slot] = down;
    }
}
