use crate::api::types::ImageHandle;
use crate::renderer::draw_list::LAYER_COUNT;

/// Sprite component defining how an entity appears on screen.
///
/// Higher layers are drawn after (on top of) lower layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Opaque handle resolved by the presenter.
    pub image: ImageHandle,
    /// Draw-order bucket, 0..LAYER_COUNT.
    pub layer: u8,
    /// Disabled sprites are skipped by the render phase.
    pub enabled: bool,
}

impl Sprite {
    pub fn new(image: ImageHandle) -> Self {
        Self {
            image,
            layer: 0,
            enabled: true,
        }
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        assert!(
            (layer as usize) < LAYER_COUNT,
            "sprite layer {layer} out of range"
        );
        self.layer = layer;
        self
    }
}
