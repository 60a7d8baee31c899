use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::scene::Scene;

/// AABB overlap test. All four comparisons are strict, so boxes that merely
/// touch along an edge or corner do not overlap.
pub fn aabb_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    pos_a.x < pos_b.x + size_b.x
        && pos_a.x + size_a.x > pos_b.x
        && pos_a.y < pos_b.y + size_b.y
        && pos_a.y + size_a.y > pos_b.y
}

/// The position a collider is tested at: the cast position when a rigid
/// body is present (collision is predictive), else the current position.
fn probe_position(entity: &Entity) -> Vec2 {
    match &entity.rigid_body {
        Some(body) => body.cast_position,
        None => entity.transform.position,
    }
}

/// Collision phase: enumerate every ordered pair of distinct entities with
/// enabled colliders, O(n²) pairwise. Each entity's collision list is
/// cleared and repopulated with the ids of the partners it overlaps; since
/// all ordered pairs are visited, both sides of an overlap end up recorded
/// within the same phase. Disabled colliders are neither tested nor cleared.
pub fn update_collisions(scene: &mut Scene) {
    let mut recorded: Vec<(EntityId, Vec<EntityId>)> = Vec::new();

    for primary in scene.iter() {
        let Some(collider) = &primary.collider else {
            continue;
        };
        if !collider.enabled {
            continue;
        }
        let mut contacts = Vec::new();
        for secondary in scene.iter() {
            if secondary.id == primary.id {
                continue;
            }
            let Some(other) = &secondary.collider else {
                continue;
            };
            if !other.enabled {
                continue;
            }
            if aabb_overlap(
                probe_position(primary),
                collider.size,
                probe_position(secondary),
                other.size,
            ) {
                contacts.push(secondary.id);
            }
        }
        recorded.push((primary.id, contacts));
    }

    for (id, contacts) in recorded {
        let entity = scene
            .get_mut(id)
            .expect("entity vanished during collision phase");
        let collider = entity
            .collider
            .as_mut()
            .expect("collider vanished during collision phase");
        collider.collisions = contacts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::collider::Collider;
    use crate::components::rigid_body::RigidBody;

    fn boxed(scene: &mut Scene, tag: &str, pos: Vec2, size: Vec2) -> EntityId {
        let id = scene.next_id();
        scene.spawn(
            Entity::new(id)
                .with_tag(tag)
                .with_position(pos)
                .with_collider(Collider::new(size)),
        );
        id
    }

    fn collisions(scene: &Scene, id: EntityId) -> &[EntityId] {
        &scene.get(id).unwrap().collider.as_ref().unwrap().collisions
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = (Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = (Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(aabb_overlap(a.0, a.1, b.0, b.1));
        assert!(aabb_overlap(b.0, b.1, a.0, a.1));
    }

    #[test]
    fn touching_edges_never_collide() {
        let size = Vec2::new(10.0, 10.0);
        // Edge contact on x, full overlap on y.
        assert!(!aabb_overlap(
            Vec2::new(0.0, 0.0),
            size,
            Vec2::new(10.0, 0.0),
            size
        ));
        // Corner contact.
        assert!(!aabb_overlap(
            Vec2::new(0.0, 0.0),
            size,
            Vec2::new(10.0, 10.0),
            size
        ));
    }

    #[test]
    fn both_sides_are_recorded_in_one_phase() {
        let mut scene = Scene::new();
        let a = boxed(&mut scene, "a", Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = boxed(&mut scene, "b", Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        update_collisions(&mut scene);
        assert_eq!(collisions(&scene, a), [b]);
        assert_eq!(collisions(&scene, b), [a]);
    }

    #[test]
    fn lists_are_rebuilt_every_phase() {
        let mut scene = Scene::new();
        let a = boxed(&mut scene, "a", Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = boxed(&mut scene, "b", Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        update_collisions(&mut scene);
        assert_eq!(collisions(&scene, a), [b]);

        scene.get_mut(b).unwrap().transform.position = Vec2::new(100.0, 100.0);
        update_collisions(&mut scene);
        assert!(collisions(&scene, a).is_empty());
        assert!(collisions(&scene, b).is_empty());
    }

    #[test]
    fn disabled_collider_is_ignored() {
        let mut scene = Scene::new();
        let a = boxed(&mut scene, "a", Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = boxed(&mut scene, "b", Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        scene.get_mut(b).unwrap().collider.as_mut().unwrap().enabled = false;
        update_collisions(&mut scene);
        assert!(collisions(&scene, a).is_empty());
    }

    #[test]
    fn rigid_bodies_are_tested_at_their_cast_position() {
        let mut scene = Scene::new();
        let wall = boxed(
            &mut scene,
            "wall",
            Vec2::new(20.0, 0.0),
            Vec2::new(10.0, 10.0),
        );
        let mover = scene.next_id();
        scene.spawn(
            Entity::new(mover)
                .with_position(Vec2::new(0.0, 0.0))
                .with_collider(Collider::new(Vec2::new(10.0, 10.0)))
                .with_rigid_body(RigidBody::new().with_velocity(Vec2::new(15.0, 0.0))),
        );
        // Not overlapping at the current position.
        update_collisions(&mut scene);
        assert!(collisions(&scene, mover).is_empty());

        // After casting, the tentative position overlaps the wall.
        crate::systems::motion::cast_rigid_bodies(&mut scene);
        update_collisions(&mut scene);
        assert_eq!(collisions(&scene, mover), [wall]);
        assert_eq!(collisions(&scene, wall), [mover]);
    }
}
