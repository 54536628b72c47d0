//! The game's registry: one store per component type.
//!
//! Build one [`Registry`] before the main loop and pass it by reference to every system.
//! Bring [`RegistryBase`](crate::RegistryBase) into scope for the registry-wide operations.

use glam::Vec3;

use crate::components::*;
use crate::define_registry;

define_registry! {
    #[derive(Debug)]
    pub struct Registry {
        render_requests: ComponentStore<RenderRequest>,
        grid_lines: ComponentStore<GridLine>,
        screen_states: ComponentStore<ScreenState>,
        /// Tint applied by the coloured effect.
        colors: ComponentStore<Vec3>,

        players: ComponentStore<Player>,
        player_animations: ComponentStore<PlayerAnimation>,

        ships: ComponentStore<Ship>,

        motions: ComponentStore<Motion>,
        /// Filled by the physics step and consumed by collision handling in the same frame.
        collisions: MultiStore<Collision>,

        background_objects: ComponentStore<BackgroundObject>,
        cameras: ComponentStore<Camera>,
        enemies: ComponentStore<Enemy>,

        islands: ComponentStore<Island>,
        bases: ComponentStore<Base>,

        steering_wheels: ComponentStore<SteeringWheel>,
        simple_cannons: ComponentStore<SimpleCannon>,

        projectiles: ComponentStore<Projectile>,
        player_projectiles: ComponentStore<PlayerProjectile>,
        enemy_projectiles: ComponentStore<EnemyProjectile>,
        bunnies: ComponentStore<Bunny>,

        walking_paths: ComponentStore<WalkingPath>,
        filled_tiles: ComponentStore<FilledTile>,

        disasters: ComponentStore<Disaster>,
    }
}
