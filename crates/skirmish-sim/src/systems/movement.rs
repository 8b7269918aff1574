//! Movement collision gate.
//!
//! A proposed displacement is accepted or rejected as a whole. There is
//! no sliding along obstacles: a blocked move leaves the entity exactly
//! where it was, which keeps the gate a single ray cast per move.

use glam::Vec3;
use hecs::{Entity, World};

use skirmish_core::components::{Body, Life, Transform};
use skirmish_core::geom::{intersect_ray_box, intersect_ray_sphere, Ray, Sphere};
use skirmish_core::level::Level;

/// Attempt to displace `entity` by `delta`. Returns whether the move was
/// committed.
///
/// The destination must stay inside the level boundary, and a ray from
/// the current position along the move must reach `|delta| + radius`
/// without striking a building or another live entity. The radius pad
/// keeps the mover's collision sphere clear of whatever lies just beyond
/// the destination point.
pub fn try_move(world: &mut World, level: &Level, entity: Entity, delta: Vec3) -> bool {
    let distance = delta.length();
    if distance == 0.0 {
        return true;
    }

    let (origin, radius) = {
        let Ok(entity_ref) = world.entity(entity) else {
            return false;
        };
        let (Some(transform), Some(body)) =
            (entity_ref.get::<&Transform>(), entity_ref.get::<&Body>())
        else {
            return false;
        };
        (transform.position, body.radius)
    };

    let destination = origin + delta;
    if !level.inside_bounds(destination, radius) {
        return false;
    }

    // Unit direction, so t is metric and the interval end is a distance.
    let dir = delta / distance;
    let ray = Ray::new(origin, dir, 0.0, distance + radius);

    for building in &level.buildings {
        let local = building.ray_to_local(&ray);
        if intersect_ray_box(&local, &building.aabb()).is_some() {
            return false;
        }
    }

    for (other, (transform, body, life)) in world.query::<(&Transform, &Body, &Life)>().iter() {
        if other == entity || life.current <= 0.0 {
            continue;
        }
        let sphere = Sphere {
            center: transform.position,
            radius: body.radius,
        };
        if intersect_ray_sphere(&ray, &sphere).is_some() {
            return false;
        }
    }

    if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
        transform.position = destination;
        true
    } else {
        false
    }
}
