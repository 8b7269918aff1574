//! Analytic ray intersection primitives.
//!
//! Both tests return the smallest parametric `t` in `[t_min, t_max)` at
//! which the ray enters the primitive, or `None` when no such `t` exists.
//! `t` is measured in units of the supplied direction vector, which is not
//! required to be unit length; callers that need metric distance must
//! normalize the direction before casting.

use glam::Vec3;

/// A parametric ray: points are `origin + t * dir` for `t` in `[t_min, t_max)`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
    pub t_min: f32,
    pub t_max: f32,
}

impl Ray {
    /// Create a ray. A zero-length direction is a caller contract violation.
    pub fn new(origin: Vec3, dir: Vec3, t_min: f32, t_max: f32) -> Self {
        debug_assert!(
            dir.length_squared() > 0.0,
            "ray direction must be non-zero"
        );
        Self {
            origin,
            dir,
            t_min,
            t_max,
        }
    }

    /// The point at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// An axis-aligned box centered on the origin of its local frame.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Half-extent along each local axis.
    pub half_extents: Vec3,
}

/// A sphere in world space.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Slab test against an origin-centered box.
///
/// Each axis is handled explicitly when the direction component is zero:
/// the ray runs parallel to that slab and passes only if the origin already
/// lies within the slab's extent. This avoids the NaN that the reciprocal
/// formulation produces when the origin sits exactly on a slab face.
pub fn intersect_ray_box(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    debug_assert!(
        aabb.half_extents.cmpgt(Vec3::ZERO).all(),
        "box half-extents must be positive"
    );

    let mut t_enter = ray.t_min;
    let mut t_exit = ray.t_max;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        let h = aabb.half_extents[axis];

        if d == 0.0 {
            if o < -h || o > h {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t0 = (-h - o) * inv;
        let mut t1 = (h - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter >= t_exit {
            return None;
        }
    }

    Some(t_enter)
}

/// Quadratic-discriminant test against a sphere.
///
/// Solves `|origin + t * dir - center|^2 = radius^2` and returns the
/// smallest root inside `[t_min, t_max)`. The far root covers the case
/// where the origin is already inside the sphere.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    debug_assert!(sphere.radius > 0.0, "sphere radius must be positive");

    let m = ray.origin - sphere.center;
    let a = ray.dir.dot(ray.dir);
    let b = m.dot(ray.dir);
    let c = m.dot(m) - sphere.radius * sphere.radius;

    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    for t in [(-b - sqrt_d) / a, (-b + sqrt_d) / a] {
        if t >= ray.t_min && t < ray.t_max {
            return Some(t);
        }
    }

    None
}
