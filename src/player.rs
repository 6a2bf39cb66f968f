//! The player: movement with axis-separated wall resolution, the stacking
//! power-up model, cone-spread attacks, and the invulnerability-frame damage
//! contract.

use rand::Rng;

use crate::constants::*;
use crate::geometry::{Aabb, Vec2};
use crate::projectile::Projectile;
use crate::room::Wall;

// ── Input snapshot ────────────────────────────────────────────────────────────

/// One of the four cardinal directions. Used both for aiming and for room
/// transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Base aim angle in degrees, screen convention (y down).
    pub fn angle(self) -> f32 {
        match self {
            Dir::Up => -90.0,
            Dir::Down => 90.0,
            Dir::Left => 180.0,
            Dir::Right => 0.0,
        }
    }

    pub fn step(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

/// Per-frame snapshot of held movement keys and the requested attack
/// direction. The frontend fills one of these each frame; the core never
/// touches input devices.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputFrame {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: Option<Dir>,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub health: i32,
    pub invuln_frames: u32,
    /// Render-visibility toggle while invulnerable (hidden when true).
    pub is_flashing: bool,
    /// Frames until the next attack is allowed.
    pub attack_cooldown: u32,
    /// Pellet count per attack: 1, 3, 5, ...
    pub multi_shot_level: u32,
    pub speed_level: u32,
    pub rapid_level: u32,
    pub piercing_level: u32,
    pub explosive_level: u32,
    pub slow_frames: u32,
    pub slow_factor: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Player {
            pos,
            health: PLAYER_MAX_HEALTH,
            invuln_frames: 0,
            is_flashing: false,
            attack_cooldown: 0,
            multi_shot_level: 1,
            speed_level: 0,
            rapid_level: 0,
            piercing_level: 0,
            explosive_level: 0,
            slow_frames: 0,
            slow_factor: 1.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Apply a slow status. Only overwrites an active slow if the incoming
    /// factor is stronger (smaller).
    pub fn apply_slow(&mut self, duration_frames: u32, factor: f32) {
        if self.slow_frames == 0 || factor < self.slow_factor {
            self.slow_factor = factor;
            self.slow_frames = duration_frames;
        }
    }

    /// Per-frame update: status timers, flash state, then axis-separated
    /// movement against the wall set. Applying X and Y independently lets
    /// the player slide along a wall on diagonal input.
    pub fn update(&mut self, walls: &[Wall], input: &InputFrame) {
        if self.slow_frames > 0 {
            self.slow_frames -= 1;
            if self.slow_frames == 0 {
                self.slow_factor = 1.0;
            }
        }

        if self.invuln_frames > 0 {
            self.invuln_frames -= 1;
            if self.invuln_frames % FLASH_INTERVAL == 0 {
                self.is_flashing = !self.is_flashing;
            }
        } else {
            self.is_flashing = false;
        }

        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);

        let spd = (PLAYER_SPEED + self.speed_level as f32) * self.slow_factor;
        let mut dx = 0.0;
        let mut dy = 0.0;
        if input.up {
            dy -= spd;
        }
        if input.down {
            dy += spd;
        }
        if input.left {
            dx -= spd;
        }
        if input.right {
            dx += spd;
        }

        self.pos.x += dx;
        if self.collides(walls) {
            self.pos.x -= dx;
        }
        self.pos.y += dy;
        if self.collides(walls) {
            self.pos.y -= dy;
        }
    }

    fn collides(&self, walls: &[Wall]) -> bool {
        let b = self.bounds();
        walls.iter().any(|w| b.intersects(&w.rect))
    }

    // ── Attacks ──────────────────────────────────────────────────────────────

    /// Cooldown shrinks multiplicatively with rapid-fire stacks, floored at
    /// 50 ms worth of frames.
    pub fn cooldown_frames(&self) -> u32 {
        let cd = SHOOT_COOLDOWN as f32 * 0.8f32.powi(self.rapid_level as i32);
        (cd as u32).max(MIN_SHOOT_COOLDOWN)
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown == 0
    }

    /// Fire a volley in the requested direction. The base angle gets a small
    /// random jitter so straight-line shots feel less robotic; the cone
    /// spread itself is deterministic around that base.
    pub fn attack(&mut self, dir: Dir, rng: &mut impl Rng) -> Vec<Projectile> {
        self.attack_cooldown = self.cooldown_frames();

        let jitter = (rng.gen_range(1..=10) - rng.gen_range(1..=10i32)) as f32;
        let base_angle = dir.angle() + jitter;

        pellet_angles(base_angle, self.multi_shot_level)
            .into_iter()
            .map(|angle| Projectile::new(self.pos, angle, self.piercing_level, self.explosive_level))
            .collect()
    }

    // ── Damage ───────────────────────────────────────────────────────────────

    /// No-op while invulnerability frames are active. Otherwise subtracts
    /// damage (clamped at zero health) and opens a fresh i-frame window.
    pub fn take_damage(&mut self, damage: i32) {
        if self.invuln_frames > 0 {
            return;
        }
        self.health = (self.health - damage).max(0);
        self.invuln_frames = INVULNERABILITY_FRAMES;
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(PLAYER_MAX_HEALTH);
    }
}

/// Pellet angles for a volley of `count` shots centred on `base_angle`.
/// A single pellet flies straight; otherwise the cone (which widens with the
/// pellet count) is spread evenly with the first and last pellet exactly on
/// the cone edges.
pub fn pellet_angles(base_angle: f32, count: u32) -> Vec<f32> {
    if count <= 1 {
        return vec![base_angle];
    }
    let cone = 30.0 + 5.0 * count as f32;
    let start = base_angle - cone / 2.0;
    let step = cone / (count - 1) as f32;
    (0..count).map(|i| start + step * i as f32).collect()
}
