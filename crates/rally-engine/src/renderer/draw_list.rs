use glam::Vec2;

use crate::api::types::ImageHandle;

/// Number of draw-order buckets. Sprite layers are 0..LAYER_COUNT.
pub const LAYER_COUNT: usize = 10;

/// One blit: an image handle and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub image: ImageHandle,
    pub position: Vec2,
}

/// Per-frame layered draw buffer. Commands are pushed into their sprite's
/// layer bucket during the render phase and handed to the presenter in
/// ascending layer order; within a bucket, insertion order is preserved.
pub struct DrawList {
    layers: [Vec<DrawCommand>; LAYER_COUNT],
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            layers: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Append a command to a layer bucket. An out-of-range layer is a
    /// programming-contract violation.
    pub fn push(&mut self, layer: u8, command: DrawCommand) {
        assert!(
            (layer as usize) < LAYER_COUNT,
            "draw layer {layer} out of range"
        );
        self.layers[layer as usize].push(command);
    }

    /// Commands of a single layer, insertion-ordered.
    pub fn layer(&self, index: usize) -> &[DrawCommand] {
        &self.layers[index]
    }

    /// All commands in presentation order: layer 0 first, layer 9 last.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.layers.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Vec::is_empty)
    }

    /// Reset every bucket for the next frame.
    pub fn clear(&mut self) {
        for layer in &mut self.layers {
            layer.clear();
        }
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(image: u32) -> DrawCommand {
        DrawCommand {
            image: ImageHandle(image),
            position: Vec2::ZERO,
        }
    }

    #[test]
    fn commands_iterate_in_layer_order() {
        let mut list = DrawList::new();
        list.push(9, command(9));
        list.push(0, command(0));
        list.push(4, command(4));
        let images: Vec<u32> = list.commands().map(|c| c.image.0).collect();
        assert_eq!(images, [0, 4, 9]);
    }

    #[test]
    fn clear_empties_every_bucket() {
        let mut list = DrawList::new();
        list.push(1, command(1));
        list.push(8, command(2));
        assert_eq!(list.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_range_layer_panics() {
        let mut list = DrawList::new();
        list.push(LAYER_COUNT as u8, command(0));
    }
}
