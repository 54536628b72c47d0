//! Component types of the game.
//!
//! Plain data only: the systems reading and writing them (physics, AI, animation,
//! rendering, UI) live outside this crate.

use glam::{IVec2, Vec2};
use hashbrown::HashMap;

#[cfg(feature = "use_serde")]
use serde::{Deserialize, Serialize};

use crate::EntityHandle;

/// Shape and motion of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Motion {
    pub position: Vec2,
    pub angle: f32,
    pub velocity: Vec2,
    pub scale: Vec2,
}

impl Default for Motion {
    fn default() -> Self {
        Motion {
            position: Vec2::ZERO,
            angle: 0.0,
            velocity: Vec2::ZERO,
            scale: Vec2::splat(10.0),
        }
    }
}

/// One collision detected by the physics step.
///
/// The first entity involved is the owner of the record in the store; `other` is the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Collision {
    pub other: EntityHandle,
}

impl Collision {
    pub fn new(other: EntityHandle) -> Self {
        Collision { other }
    }
}

/// Post-processing factors; negative means disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct ScreenState {
    pub darken_screen_factor: f32,
    pub vignette_screen_factor: f32,
}

impl Default for ScreenState {
    fn default() -> Self {
        ScreenState { darken_screen_factor: -1.0, vignette_screen_factor: -1.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Island {
    pub polygon: Vec<IVec2>,
}

/// The player's home base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Base {
    pub polygon: Vec<IVec2>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct GridLine {
    pub start_pos: Vec2,
    pub end_pos: Vec2,
}

impl Default for GridLine {
    fn default() -> Self {
        GridLine { start_pos: Vec2::ZERO, end_pos: Vec2::splat(10.0) }
    }
}

// Asset identifiers. The renderer maps them to the actual GPU resources.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum TextureAssetId {
    BunnyIdle,
    BunnyWalk,
    BunnyJailed,
    BunnyNotJailed,
    WaterBackground,
    IslandBackground,
    Enemy,
    SimpleCannon,
    TileCursor,
    MainMenuBackground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum EffectAssetId {
    Coloured,
    Textured,
    Vignette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum GeometryBufferId {
    Sprite,
    DebugLine,
    ScreenTriangle,
    ShipSquare,
    UiSquare,
}

/// What the renderer should draw for this entity. `None` fields are not set up yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct RenderRequest {
    pub used_texture: Option<TextureAssetId>,
    pub used_effect: Option<EffectAssetId>,
    pub used_geometry: Option<GeometryBufferId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Right,
    #[default]
    Down,
    Left,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum PlayerState {
    #[default]
    Idle,
    Walking,
    Stationing,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Player {
    pub health: f32,
    pub name: String,
    pub direction: Direction,
    pub player_state: PlayerState,
    pub is_sailing_ship: bool,
}

/// Reads the [`Player`] component of the same entity, so both must be added together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct PlayerAnimation {
    pub curr_anim: TextureAssetId,
    /// Milliseconds before switching to the next frame.
    pub timer_ms: i32,
}

/// Marks things that stay put while the camera follows the ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct BackgroundObject;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Camera {
    pub acceleration: Vec2,
    pub apply_friction_x: bool,
    pub apply_friction_y: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Camera { acceleration: Vec2::ZERO, apply_friction_x: true, apply_friction_y: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum ModuleType {
    #[default]
    Empty,
    Platform,
    SteeringWheel,
    SimpleCannon,
    FastCannon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct SteeringWheel {
    pub is_automated: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct SimpleCannon {
    pub is_automated: bool,
    /// Cooldown before the next shot.
    pub timer_ms: f32,
}

/// Shared payload of everything that is fired and expires on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Projectile {
    pub damage: f32,
    /// Time left before the projectile is removed.
    pub alive_time_ms: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct PlayerProjectile(pub Projectile);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct EnemyProjectile(pub Projectile);

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Ship {
    pub health: f32,
    /// Module placed on each tile of the ship grid.
    pub ship_modules: Vec<Vec<ModuleType>>,
    /// Entity backing each module, index-aligned with `ship_modules`.
    pub ship_modules_entity: Vec<Vec<Option<EntityHandle>>>,
    /// How many of each module are in the inventory.
    pub available_modules: HashMap<ModuleType, u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum EnemyType {
    #[default]
    BasicGunner,
    Flyer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Enemy {
    pub enemy_type: EnemyType,
    pub health: i32,
    pub timer_ms: i32,
    pub home_island: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Bunny {
    pub on_island: bool,
    pub is_jailed: bool,
    pub on_ship: bool,
    /// 0 unless `is_jailed`.
    pub jail_health: f32,
    pub timer_ms: i32,
}

/// Tile a walking character may step on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct WalkingPath;

/// Map tile that blocks movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct FilledTile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum DisasterType {
    #[default]
    Tornado,
    Whirlpool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Disaster {
    pub disaster_type: DisasterType,
    /// Only tornadoes expire.
    pub alive_time_ms: f32,
}
