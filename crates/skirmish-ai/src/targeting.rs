//! Targeting-cone and pursuit evaluation.

use glam::Vec3;

/// Situation of one enemy relative to its target, in world space.
pub struct TargetingContext {
    pub position: Vec3,
    /// Current facing direction (any non-zero magnitude).
    pub facing: Vec3,
    /// Target position (the player).
    pub target: Vec3,
    /// Firing range (meters).
    pub range: f32,
    /// Half-angle of the forward targeting cone (radians).
    pub target_half_angle: f32,
}

/// What the enemy wants to do this tick.
pub struct TargetingDecision {
    /// Unit direction toward the target, when one exists.
    pub desired_facing: Option<Vec3>,
    /// The target is in range and inside the targeting cone. The caller
    /// must still confirm line of sight before firing.
    pub wants_to_fire: bool,
}

/// Evaluate range and cone for one enemy.
///
/// Range uses a squared-distance compare against `range^2`; the cone uses
/// a dot-product compare against the cosine of the half-angle.
pub fn evaluate(ctx: &TargetingContext) -> TargetingDecision {
    let to_target = ctx.target - ctx.position;
    let dist_sq = to_target.length_squared();

    let desired_facing = to_target.try_normalize();
    let Some(to_target_dir) = desired_facing else {
        // Standing exactly on the target: nothing sensible to aim at.
        return TargetingDecision {
            desired_facing: None,
            wants_to_fire: false,
        };
    };

    let in_range = dist_sq <= ctx.range * ctx.range;

    let in_cone = match ctx.facing.try_normalize() {
        Some(facing) => facing.dot(to_target_dir) >= ctx.target_half_angle.cos(),
        None => false,
    };

    TargetingDecision {
        desired_facing: Some(to_target_dir),
        wants_to_fire: in_range && in_cone,
    }
}

/// Displacement for one tick of pursuit: advance toward the target at
/// `move_speed`, stopping short at `stop_range` so the pursuer never
/// walks into its target.
pub fn pursuit_step(
    position: Vec3,
    target: Vec3,
    stop_range: f32,
    move_speed: f32,
    dt: f32,
) -> Vec3 {
    let to_target = target - position;
    let distance = to_target.length();
    if distance <= stop_range {
        return Vec3::ZERO;
    }

    let step = (move_speed * dt).min(distance - stop_range);
    to_target / distance * step
}
