//! A few frames of the game loop driven against the registry.
//!
//! Run with `RUST_LOG=packed_ecs=debug cargo run --example frame_loop` to see the store
//! level logging.

use glam::Vec2;
use packed_ecs::components::{Collision, Enemy, EnemyType, Motion, PlayerProjectile, Projectile, Ship};
use packed_ecs::{EntityHandle, Registry, RegistryBase};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME_MS: f32 = 16.0;

fn spawn_enemy(registry: &mut Registry, position: Vec2) -> EntityHandle {
    let e = registry.create_entity();
    registry.motions.emplace(e, Motion { position, ..Default::default() });
    registry.enemies.emplace(e, Enemy { enemy_type: EnemyType::Flyer, health: 10, ..Default::default() });
    e
}

fn fire(registry: &mut Registry, from: Vec2, alive_time_ms: f32) -> EntityHandle {
    let e = registry.create_entity();
    registry.motions.emplace(e, Motion { position: from, velocity: Vec2::X * 200.0, ..Default::default() });
    registry.player_projectiles.emplace(e, PlayerProjectile(Projectile { damage: 10.0, alive_time_ms }));
    e
}

fn step_motions(registry: &mut Registry, elapsed_ms: f32) {
    for motion in registry.motions.components_mut() {
        motion.position += motion.velocity * (elapsed_ms / 1000.0);
    }
}

// Radius check standing in for the physics step.
fn detect_collisions(registry: &mut Registry) {
    let Registry { motions, player_projectiles, enemies, collisions, .. } = registry;
    for (shot, _) in player_projectiles.iter() {
        let Some(shot_motion) = motions.find(shot) else { continue };
        for (enemy, _) in enemies.iter() {
            let Some(enemy_motion) = motions.find(enemy) else { continue };
            if shot_motion.position.distance(enemy_motion.position) < 5.0 {
                collisions.emplace_with_duplicates(shot, Collision::new(enemy));
            }
        }
    }
}

fn handle_collisions(registry: &mut Registry) {
    let records: Vec<_> = registry.collisions.iter().map(|(owner, c)| (owner, c.other)).collect();
    for (shot, enemy) in records {
        if !registry.player_projectiles.has(shot) || !registry.enemies.has(enemy) {
            continue;
        }
        let damage = registry.player_projectiles.get(shot).0.damage;
        let killed = {
            let target = registry.enemies.get_mut(enemy);
            target.health -= damage as i32;
            target.health <= 0
        };
        registry.remove_all_components_of(shot);
        if killed {
            info!(%enemy, "enemy destroyed");
            registry.remove_all_components_of(enemy);
        }
    }
    registry.collisions.clear();
}

fn expire_projectiles(registry: &mut Registry, elapsed_ms: f32) {
    let mut expired = Vec::new();
    registry.player_projectiles.retain(|e, PlayerProjectile(p)| {
        p.alive_time_ms -= elapsed_ms;
        if p.alive_time_ms <= 0.0 {
            expired.push(e);
            return false;
        }
        true
    });
    for e in expired {
        registry.remove_all_components_of(e);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut registry = Registry::with_capacity(64);

    let ship = registry.create_entity();
    registry.motions.emplace_default(ship);
    registry.ships.emplace(ship, Ship { health: 100.0, ..Default::default() });

    for i in 0..3 {
        spawn_enemy(&mut registry, Vec2::new(20.0 + 10.0 * i as f32, 0.0));
    }
    fire(&mut registry, Vec2::new(18.0, 0.0), 500.0);
    fire(&mut registry, Vec2::new(0.0, 50.0), 40.0);

    for frame in 0..10 {
        step_motions(&mut registry, FRAME_MS);
        detect_collisions(&mut registry);
        handle_collisions(&mut registry);
        expire_projectiles(&mut registry, FRAME_MS);
        info!(frame, components = registry.total_components(), "frame done");
    }

    registry.list_all_components();
    registry.list_all_components_of(ship);

    info!(dropped = registry.clear_all_components(), "level reset");
}
