use crate::api::types::Color;
use crate::renderer::draw_list::DrawList;

/// Presentation boundary. The engine composes a layered draw list once per
/// frame and hands it over together with the background clear color; window
/// management, blitting, and text rendering all live behind this trait.
pub trait Presenter {
    fn present(&mut self, background: Color, frame: &DrawList);
}

/// Presenter that discards every frame. Useful for headless runs and tests.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _background: Color, _frame: &DrawList) {}
}
