//! Builds the per-tick snapshot for the presentation layer.

use hecs::World;

use skirmish_core::components::{Enemy, Life, Player, SpawnIndex, Transform, Weapon};
use skirmish_core::enums::GamePhase;
use skirmish_core::state::{EnemyView, PlayerView, Snapshot};
use skirmish_core::types::SimTime;

use crate::systems::combat;

pub fn build_snapshot(world: &World, time: SimTime, phase: GamePhase, now: f32) -> Snapshot {
    let mut player = PlayerView::default();
    for (_, (transform, life, weapon)) in world
        .query::<(&Transform, &Life, &Weapon)>()
        .with::<&Player>()
        .iter()
    {
        player = PlayerView {
            position: transform.position,
            facing: transform.facing,
            life: life.current,
            ammo: weapon.ammo,
        };
    }

    let mut enemies: Vec<EnemyView> = world
        .query::<(&SpawnIndex, &Transform, &Life, &Weapon)>()
        .with::<&Enemy>()
        .iter()
        .map(|(_, (spawn_index, transform, life, weapon))| EnemyView {
            spawn_index: spawn_index.0,
            position: transform.position,
            facing: transform.facing,
            life: life.current,
            firing: combat::is_shooting(weapon, now),
        })
        .collect();
    enemies.sort_by_key(|view| view.spawn_index);

    Snapshot {
        time,
        phase,
        player,
        enemies,
    }
}
