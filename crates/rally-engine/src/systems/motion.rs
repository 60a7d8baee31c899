use glam::Vec2;

use crate::core::scene::Scene;

/// Cast phase: every rigid body computes its tentative next position.
/// Nothing is committed here; the collision phase decides what moves.
pub fn cast_rigid_bodies(scene: &mut Scene) {
    for entity in scene.iter_mut() {
        let position = entity.transform.position;
        if let Some(body) = &mut entity.rigid_body {
            body.cast_position = position + body.velocity;
        }
    }
}

/// Resolution phase: commit cast positions, gated on this frame's collisions.
///
/// - Rigid body with a collider that recorded at least one collision: the
///   position does not advance and the velocity is left untouched; scripts
///   observing the collision list decide what happens next frame.
/// - Rigid body with a collider and zero collisions: commit the cast
///   position, velocity unchanged.
/// - Rigid body with no collider: commit the cast position and zero the
///   velocity. Non-collidable movers are one-shot displacements.
pub fn resolve_motion(scene: &mut Scene) {
    for entity in scene.iter_mut() {
        let Some(body) = &mut entity.rigid_body else {
            continue;
        };
        match &entity.collider {
            Some(collider) => {
                if collider.collisions.is_empty() {
                    entity.transform.position = body.cast_position;
                }
            }
            None => {
                entity.transform.position = body.cast_position;
                body.velocity = Vec2::ZERO;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::collider::Collider;
    use crate::components::entity::Entity;
    use crate::components::rigid_body::RigidBody;

    fn mover(scene: &mut Scene, velocity: Vec2) -> EntityId {
        let id = scene.next_id();
        scene.spawn(
            Entity::new(id)
                .with_position(Vec2::new(100.0, 100.0))
                .with_rigid_body(RigidBody::new().with_velocity(velocity)),
        );
        id
    }

    #[test]
    fn cast_adds_velocity_to_position() {
        let mut scene = Scene::new();
        let id = mover(&mut scene, Vec2::new(5.0, -3.0));
        cast_rigid_bodies(&mut scene);
        let body = scene.get(id).unwrap().rigid_body.unwrap();
        assert_eq!(body.cast_position, Vec2::new(105.0, 97.0));
    }

    #[test]
    fn colliding_body_is_frozen_with_velocity_intact() {
        let mut scene = Scene::new();
        let id = mover(&mut scene, Vec2::new(5.0, 0.0));
        let entity = scene.get_mut(id).unwrap();
        entity.collider = Some(Collider::new(Vec2::new(10.0, 10.0)));
        entity.collider.as_mut().unwrap().collisions.push(EntityId(99));

        cast_rigid_bodies(&mut scene);
        resolve_motion(&mut scene);

        let entity = scene.get(id).unwrap();
        assert_eq!(entity.transform.position, Vec2::new(100.0, 100.0));
        assert_eq!(entity.rigid_body.unwrap().velocity, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn clear_body_advances_and_keeps_velocity() {
        let mut scene = Scene::new();
        let id = mover(&mut scene, Vec2::new(5.0, 0.0));
        scene.get_mut(id).unwrap().collider = Some(Collider::new(Vec2::new(10.0, 10.0)));

        cast_rigid_bodies(&mut scene);
        resolve_motion(&mut scene);

        let entity = scene.get(id).unwrap();
        assert_eq!(entity.transform.position, Vec2::new(105.0, 100.0));
        assert_eq!(entity.rigid_body.unwrap().velocity, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn colliderless_mover_advances_once_then_stops() {
        let mut scene = Scene::new();
        let id = mover(&mut scene, Vec2::new(5.0, 2.0));

        cast_rigid_bodies(&mut scene);
        resolve_motion(&mut scene);

        let entity = scene.get(id).unwrap();
        assert_eq!(entity.transform.position, Vec2::new(105.0, 102.0));
        assert_eq!(entity.rigid_body.unwrap().velocity, Vec2::ZERO);

        // A second pass does not move it again.
        cast_rigid_bodies(&mut scene);
        resolve_motion(&mut scene);
        assert_eq!(
            scene.get(id).unwrap().transform.position,
            Vec2::new(105.0, 102.0)
        );
    }
}
