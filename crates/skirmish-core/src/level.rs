//! Level geometry: the horizontal boundary and the static building list.
//!
//! Levels arrive as plain data from the embedding layer and are immutable
//! for the session's duration. Buildings carry an optional color for the
//! presentation layer; the simulation ignores it.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use crate::geom::{Aabb, Ray};

/// A static building: a box defined in its own local frame, placed in the
/// world by a translation and a rotation about the y axis (no scale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// World-space center of the box.
    pub center: Vec3,
    /// Rotation about the y axis (radians).
    pub yaw: f32,
    /// Half-extent along each local axis.
    pub half_extents: Vec3,
    /// Presentation hint, ignored by the simulation.
    #[serde(default)]
    pub color: Option<u32>,
}

impl Building {
    pub fn new(center: Vec3, yaw: f32, half_extents: Vec3) -> Self {
        debug_assert!(
            half_extents.cmpgt(Vec3::ZERO).all(),
            "building half-extents must be positive"
        );
        Self {
            center,
            yaw,
            half_extents,
            color: None,
        }
    }

    /// The box in the building's local frame.
    pub fn aabb(&self) -> Aabb {
        Aabb {
            half_extents: self.half_extents,
        }
    }

    /// Transform a world-space ray into the building's local frame
    /// (inverse translation, then inverse rotation).
    pub fn ray_to_local(&self, ray: &Ray) -> Ray {
        let inv = Mat3::from_rotation_y(-self.yaw);
        Ray {
            origin: inv * (ray.origin - self.center),
            dir: inv * ray.dir,
            t_min: ray.t_min,
            t_max: ray.t_max,
        }
    }

    /// Whether a world-space sphere overlaps the box.
    pub fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool {
        let inv = Mat3::from_rotation_y(-self.yaw);
        let local = inv * (center - self.center);
        let closest = local.clamp(-self.half_extents, self.half_extents);
        (local - closest).length_squared() < radius * radius
    }
}

/// Level data: a rectangular horizontal boundary centered on the origin
/// plus the static buildings, in a fixed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Boundary extent along x (meters).
    pub width: f32,
    /// Boundary extent along z (meters).
    pub depth: f32,
    pub buildings: Vec<Building>,
}

impl Level {
    /// True if an entity of the given radius fits inside the boundary
    /// when centered at `pos`. Only the horizontal plane is bounded.
    pub fn inside_bounds(&self, pos: Vec3, radius: f32) -> bool {
        pos.x.abs() + radius <= self.width / 2.0 && pos.z.abs() + radius <= self.depth / 2.0
    }

    /// A small default arena: 100 x 100 meters with three buildings.
    pub fn default_arena() -> Self {
        Self {
            width: 100.0,
            depth: 100.0,
            buildings: vec![
                Building::new(
                    Vec3::new(20.0, 10.0, 10.0),
                    0.0,
                    Vec3::new(2.5, 10.0, 2.5),
                ),
                Building::new(
                    Vec3::new(-10.0, 15.0, 20.0),
                    30f32.to_radians(),
                    Vec3::new(2.5, 15.0, 2.5),
                ),
                Building::new(
                    Vec3::new(30.0, 5.0, -20.0),
                    0.0,
                    Vec3::new(5.0, 5.0, 12.5),
                ),
            ],
        }
    }
}
