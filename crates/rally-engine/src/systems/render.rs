use crate::components::entity::Entity;
use crate::renderer::draw_list::{DrawCommand, DrawList};

/// Render phase: bucket every enabled sprite into the draw list by layer.
/// Insertion order within a layer follows scene order; layer order is
/// applied when the list is iterated.
pub fn build_draw_list<'a>(entities: impl Iterator<Item = &'a Entity>, list: &mut DrawList) {
    list.clear();
    for entity in entities {
        let Some(sprite) = &entity.sprite else {
            continue;
        };
        if !sprite.enabled {
            continue;
        }
        list.push(
            sprite.layer,
            DrawCommand {
                image: sprite.image,
                position: entity.transform.position,
            },
        );
    }
}
