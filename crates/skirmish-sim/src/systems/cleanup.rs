//! Cleanup system: reaps enemies whose life has reached zero.
//!
//! Despawns go through the engine's reusable buffer, and reap events are
//! emitted in spawn order so the stream is deterministic. The player is
//! never reaped here; player death ends the session instead, which the
//! engine handles after systems run.

use hecs::{Entity, World};

use skirmish_core::components::{Enemy, Life, SpawnIndex};
use skirmish_core::events::GameEvent;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    despawn_buffer.clear();

    let mut reaped: Vec<(u64, Entity)> = Vec::new();
    for (entity, (spawn_index, life)) in world
        .query::<(&SpawnIndex, &Life)>()
        .with::<&Enemy>()
        .iter()
    {
        if life.current <= 0.0 {
            reaped.push((spawn_index.0, entity));
        }
    }
    // Emit in spawn order so the event stream is deterministic.
    reaped.sort_by_key(|(index, _)| *index);

    for (spawn_index, entity) in reaped {
        despawn_buffer.push(entity);
        events.push(GameEvent::EnemyReaped { spawn_index });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
