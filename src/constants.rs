//! Design constants. All timers are frame counts at the 60 FPS tick rate.

// ── Arena ─────────────────────────────────────────────────────────────────────

pub const ARENA_W: f32 = 800.0;
pub const ARENA_H: f32 = 600.0;

pub const WALL_THICKNESS: i32 = 40;
pub const DOOR_WIDTH: i32 = 100;
pub const DOOR_BLOCK_THICKNESS: i32 = 10;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SPEED: f32 = 4.0;
pub const PLAYER_SIZE: i32 = 40;
pub const PLAYER_MAX_HEALTH: i32 = 20;

/// 0.5 seconds of damage immunity after a hit.
pub const INVULNERABILITY_FRAMES: u32 = 30;
/// While invulnerable the render-visibility flag toggles on this period.
pub const FLASH_INTERVAL: u32 = 5;

/// Base attack cooldown (300 ms at 60 FPS) and its hard floor (50 ms).
pub const SHOOT_COOLDOWN: u32 = 18;
pub const MIN_SHOOT_COOLDOWN: u32 = 3;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_SPEED: f32 = 8.0;
pub const PROJECTILE_LIFETIME: u32 = 45;
pub const ENEMY_SHOT_SPEED: f32 = 5.0;

/// Explosion radius is `BASE + PER_LEVEL * explosive_level`.
pub const EXPLOSION_BASE_RADIUS: f32 = 50.0;
pub const EXPLOSION_RADIUS_PER_LEVEL: f32 = 20.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: i32 = 30;
pub const ENEMY_SPEED: f32 = 2.0;
pub const ENEMY_HEALTH_SCALE: f32 = 1.2;

pub const JUMP_SPEED: f32 = 6.0;
pub const JUMP_ARRIVE_EPSILON: f32 = 10.0;
pub const JUMP_MAX_TRAVEL: f32 = 300.0;

// ── Progression ───────────────────────────────────────────────────────────────

pub const BASE_ENEMIES: u32 = 3;
/// A boss room every this many cleared rooms.
pub const BOSS_INTERVAL: u32 = 5;

pub const POWERUP_SIZE: i32 = 20;
pub const POWERUP_LIFETIME: u32 = 1200;

/// How close to a room edge counts as leaving through the open door.
pub const TRANSITION_MARGIN: f32 = 10.0;
