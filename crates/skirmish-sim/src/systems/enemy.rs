//! Enemy behavior: pursue the player while visible, fire when the player
//! sits inside the targeting cone.
//!
//! Range and cone are the cheap tests and run first; line of sight casts
//! a ray and runs once per enemy per tick, gating both pursuit and fire.
//! An enemy that cannot see the player holds position and keeps its
//! current facing, so breaking line of sight genuinely shakes pursuit.

use glam::Vec3;
use hecs::{Entity, World};

use skirmish_ai::targeting::{self, TargetingContext};
use skirmish_core::components::{Body, Enemy, Life, Player, SpawnIndex, Targeting, Transform, Weapon};
use skirmish_core::events::GameEvent;
use skirmish_core::level::Level;

use crate::hit;
use crate::systems::{combat, movement};

/// Step every enemy, in ascending spawn order.
pub fn run(world: &mut World, level: &Level, now: f32, dt: f32, events: &mut Vec<GameEvent>) {
    let player = {
        let mut found: Option<(Entity, Vec3, f32)> = None;
        for (entity, (transform, body, life)) in world
            .query::<(&Transform, &Body, &Life)>()
            .with::<&Player>()
            .iter()
        {
            if life.current > 0.0 {
                found = Some((entity, transform.position, body.radius));
                break;
            }
        }
        found
    };
    // No live player: enemies idle.
    let Some((player_entity, player_pos, player_radius)) = player else {
        return;
    };

    struct EnemyState {
        entity: Entity,
        spawn_index: u64,
        position: Vec3,
        facing: Vec3,
        radius: f32,
        target_half_angle: f32,
        move_speed: f32,
        range: f32,
    }

    let mut roster: Vec<EnemyState> = Vec::new();
    for (entity, (spawn_index, transform, body, life, targeting, weapon)) in world
        .query::<(&SpawnIndex, &Transform, &Body, &Life, &Targeting, &Weapon)>()
        .with::<&Enemy>()
        .iter()
    {
        if life.current <= 0.0 {
            continue;
        }
        roster.push(EnemyState {
            entity,
            spawn_index: spawn_index.0,
            position: transform.position,
            facing: transform.facing,
            radius: body.radius,
            target_half_angle: targeting.target_half_angle,
            move_speed: targeting.move_speed,
            range: weapon.range,
        });
    }
    roster.sort_by_key(|state| state.spawn_index);

    for state in roster {
        let decision = targeting::evaluate(&TargetingContext {
            position: state.position,
            facing: state.facing,
            target: player_pos,
            range: state.range,
            target_half_angle: state.target_half_angle,
        });

        if !hit::line_of_sight(world, level, state.entity, player_entity) {
            continue;
        }

        if let Some(desired) = decision.desired_facing {
            if let Ok(mut transform) = world.get::<&mut Transform>(state.entity) {
                transform.facing = desired;
            }
        }

        let step = targeting::pursuit_step(
            state.position,
            player_pos,
            player_radius + state.radius,
            state.move_speed,
            dt,
        );
        if step != Vec3::ZERO {
            movement::try_move(world, level, state.entity, step);
        }

        if decision.wants_to_fire {
            let fired = match world.get::<&mut Weapon>(state.entity) {
                Ok(mut weapon) => {
                    if combat::can_shoot(&weapon, now) {
                        combat::fire(&mut weapon, now);
                        true
                    } else {
                        false
                    }
                }
                Err(_) => false,
            };
            if fired {
                events.push(GameEvent::EnemyFired {
                    spawn_index: state.spawn_index,
                });
            }
        }
    }
}
