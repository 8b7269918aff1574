//! Gameplay constants and tuning defaults.

/// Player collision radius (meters).
pub const PLAYER_RADIUS: f32 = 0.5;

/// Player starting life.
pub const PLAYER_MAX_LIFE: f32 = 100.0;

/// Player starting ammunition.
pub const PLAYER_AMMO: u32 = 5;

/// Minimum time between player shots (seconds).
pub const PLAYER_SHOT_SPACING: f32 = 1.0;

/// Eye height above ground level (meters).
pub const PLAYER_EYE_HEIGHT: f32 = 1.8;

/// Enemy collision radius (meters).
pub const ENEMY_RADIUS: f32 = 1.0;

/// Enemy starting life.
pub const ENEMY_MAX_LIFE: f32 = 50.0;

/// Enemy starting ammunition.
pub const ENEMY_AMMO: u32 = 200;

/// Minimum time between enemy shots (seconds).
pub const ENEMY_SHOT_SPACING: f32 = 1.0;

/// Half-angle of the enemy forward targeting cone (radians, 17.5 degrees).
pub const ENEMY_TARGET_HALF_ANGLE: f32 = 17.5 * std::f32::consts::PI / 180.0;

/// Enemy firing range (meters).
pub const ENEMY_FIRING_RANGE: f32 = 30.0;

/// Enemy chase speed (meters per second).
pub const ENEMY_MOVE_SPEED: f32 = 12.0;

/// Active duration of one shot (seconds).
pub const SHOT_DURATION: f32 = 0.25;

/// Total damage dealt by one full shot.
pub const SHOT_BASE_DAMAGE: f32 = 25.0;

/// Maximum enemies alive at once.
pub const MAX_ACTIVE_ENEMIES: usize = 5;

/// Minimum time between enemy spawns (seconds).
pub const ENEMY_SPAWN_INTERVAL: f32 = 5.0;

/// Attempts per tick to find a spawn position clear of buildings.
pub const SPAWN_PLACEMENT_ATTEMPTS: u32 = 8;
