//! Nearest-hit resolution: one ray against everything in the world.
//!
//! Candidates are evaluated in a fixed order — the player, then enemies
//! by ascending spawn index, then buildings in level order — and a new
//! candidate replaces the current best only when strictly nearer. Equal
//! distances therefore resolve to the earliest candidate in that order,
//! independent of ECS iteration order.

use glam::Vec3;
use hecs::{Entity, World};

use skirmish_core::components::{Body, Enemy, Life, Player, SpawnIndex, Transform};
use skirmish_core::enums::HitKind;
use skirmish_core::geom::{intersect_ray_box, intersect_ray_sphere, Ray, Sphere};
use skirmish_core::level::Level;

/// Outcome of a ray cast. Buildings are level data, not entities, so a
/// building hit carries an index into the level's building list instead.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Parametric distance to the hit, in units of the ray direction.
    /// `f32::INFINITY` when nothing was struck.
    pub t: f32,
    pub kind: HitKind,
    pub entity: Option<Entity>,
    pub building: Option<usize>,
}

impl Hit {
    pub fn none() -> Self {
        Self {
            t: f32::INFINITY,
            kind: HitKind::None,
            entity: None,
            building: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.kind != HitKind::None
    }
}

/// Cast a ray and return the nearest obstacle in `[0, max_distance)`.
///
/// `caster` is excluded so an entity never shoots itself, and entities
/// with no remaining life are never candidates.
pub fn first_hit(
    world: &World,
    level: &Level,
    caster: Option<Entity>,
    origin: Vec3,
    dir: Vec3,
    max_distance: f32,
) -> Hit {
    let ray = Ray::new(origin, dir, 0.0, max_distance);
    let mut best = Hit::none();

    for (entity, (transform, body, life)) in world
        .query::<(&Transform, &Body, &Life)>()
        .with::<&Player>()
        .iter()
    {
        if Some(entity) == caster || life.current <= 0.0 {
            continue;
        }
        let sphere = Sphere {
            center: transform.position,
            radius: body.radius,
        };
        if let Some(t) = intersect_ray_sphere(&ray, &sphere) {
            if t < best.t {
                best = Hit {
                    t,
                    kind: HitKind::Player,
                    entity: Some(entity),
                    building: None,
                };
            }
        }
    }

    let mut enemies: Vec<(u64, Entity, Sphere)> = Vec::new();
    for (entity, (spawn_index, transform, body, life)) in world
        .query::<(&SpawnIndex, &Transform, &Body, &Life)>()
        .with::<&Enemy>()
        .iter()
    {
        if Some(entity) == caster || life.current <= 0.0 {
            continue;
        }
        enemies.push((
            spawn_index.0,
            entity,
            Sphere {
                center: transform.position,
                radius: body.radius,
            },
        ));
    }
    enemies.sort_by_key(|(index, _, _)| *index);

    for (_, entity, sphere) in enemies {
        if let Some(t) = intersect_ray_sphere(&ray, &sphere) {
            if t < best.t {
                best = Hit {
                    t,
                    kind: HitKind::Enemy,
                    entity: Some(entity),
                    building: None,
                };
            }
        }
    }

    for (index, building) in level.buildings.iter().enumerate() {
        let local = building.ray_to_local(&ray);
        if let Some(t) = intersect_ray_box(&local, &building.aabb()) {
            if t < best.t {
                best = Hit {
                    t,
                    kind: HitKind::Building,
                    entity: None,
                    building: Some(index),
                };
            }
        }
    }

    best
}

/// Whether `from` can see `to`: the first thing along the segment between
/// their positions is `to` itself.
pub fn line_of_sight(world: &World, level: &Level, from: Entity, to: Entity) -> bool {
    let src = match world.get::<&Transform>(from) {
        Ok(transform) => transform.position,
        Err(_) => return false,
    };
    let dst = match world.get::<&Transform>(to) {
        Ok(transform) => transform.position,
        Err(_) => return false,
    };

    let dir = dst - src;
    if dir.length_squared() == 0.0 {
        return true;
    }

    let hit = first_hit(world, level, Some(from), src, dir, f32::INFINITY);
    hit.entity == Some(to)
}
