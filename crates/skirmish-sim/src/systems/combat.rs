//! Weapon timing and shot damage.
//!
//! A shot is not instantaneous: after the trigger pull it stays active
//! for the weapon's `shot_duration`, and every tick inside that window
//! casts a ray and applies damage for the slice of the window the tick
//! covers. A full uninterrupted window therefore deals exactly
//! `base_damage`; a target that breaks line of sight mid-window escapes
//! the remainder.

use hecs::{Entity, World};

use skirmish_core::components::{Enemy, Life, Player, SpawnIndex, Transform, Weapon};
use skirmish_core::enums::HitKind;
use skirmish_core::level::Level;

use crate::hit;

/// Whether the weapon may fire at time `now`: ammunition remains and the
/// spacing since the previous shot has fully elapsed. The comparison is
/// inclusive, so a 1-second spacing permits shots at t = 0, 1, 2, ...
pub fn can_shoot(weapon: &Weapon, now: f32) -> bool {
    weapon.ammo > 0
        && weapon
            .last_shot
            .map_or(true, |t| now >= t + weapon.min_shot_spacing)
}

/// Commit a trigger pull at time `now`.
pub fn fire(weapon: &mut Weapon, now: f32) {
    debug_assert!(can_shoot(weapon, now), "fire called while on cooldown");
    weapon.ammo = weapon.ammo.saturating_sub(1);
    weapon.last_shot = Some(now);
}

/// Whether the most recent shot's active window covers time `now`.
pub fn is_shooting(weapon: &Weapon, now: f32) -> bool {
    weapon
        .last_shot
        .map_or(false, |t| now >= t && now < t + weapon.shot_duration)
}

/// Damage dealt by this tick's slice of the shot window. The window may
/// end mid-tick; only the in-window portion counts, so the slices of any
/// window sum to exactly `base_damage` regardless of tick size.
fn tick_damage(weapon: &Weapon, now: f32, dt: f32) -> f32 {
    let window_end = weapon.last_shot.map_or(now, |t| t + weapon.shot_duration);
    let active = (window_end - now).min(dt);
    weapon.base_damage * active / weapon.shot_duration
}

/// Resolve every active shot for this tick.
///
/// Shooters are processed in a fixed order (player first, then enemies by
/// spawn index) and damage applies immediately, so a target killed by an
/// earlier shooter is no longer a candidate for later rays this tick.
pub fn run(world: &mut World, level: &Level, now: f32, dt: f32) {
    struct Shot {
        shooter: Entity,
        origin: glam::Vec3,
        dir: glam::Vec3,
        damage: f32,
        range: f32,
    }

    let mut shots: Vec<(u64, Shot)> = Vec::new();

    for (entity, (transform, weapon, life)) in world
        .query::<(&Transform, &Weapon, &Life)>()
        .with::<&Player>()
        .iter()
    {
        if life.current <= 0.0 || !is_shooting(weapon, now) {
            continue;
        }
        if let Some(dir) = transform.facing.try_normalize() {
            shots.push((
                0,
                Shot {
                    shooter: entity,
                    origin: transform.position,
                    dir,
                    damage: tick_damage(weapon, now, dt),
                    range: weapon.range,
                },
            ));
        }
    }

    let mut enemy_shots: Vec<(u64, Shot)> = Vec::new();
    for (entity, (spawn_index, transform, weapon, life)) in world
        .query::<(&SpawnIndex, &Transform, &Weapon, &Life)>()
        .with::<&Enemy>()
        .iter()
    {
        if life.current <= 0.0 || !is_shooting(weapon, now) {
            continue;
        }
        if let Some(dir) = transform.facing.try_normalize() {
            enemy_shots.push((
                spawn_index.0,
                Shot {
                    shooter: entity,
                    origin: transform.position,
                    dir,
                    damage: tick_damage(weapon, now, dt),
                    range: weapon.range,
                },
            ));
        }
    }
    enemy_shots.sort_by_key(|(index, _)| *index);
    shots.extend(enemy_shots);

    for (_, shot) in shots {
        let hit = hit::first_hit(
            world,
            level,
            Some(shot.shooter),
            shot.origin,
            shot.dir,
            shot.range,
        );
        if !matches!(hit.kind, HitKind::Player | HitKind::Enemy) {
            continue;
        }
        let Some(target) = hit.entity else {
            continue;
        };
        if let Ok(mut life) = world.get::<&mut Life>(target) {
            life.current -= shot.damage.min(life.current);
        }
    }
}
