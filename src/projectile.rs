//! Ballistic entities: player pellets, enemy shots, and cosmetic debris.
//! All of them integrate explicit-Euler, one step per frame, and flag
//! themselves dead on wall contact, lifetime expiry, or leaving the arena.

use rand::Rng;

use crate::constants::*;
use crate::geometry::{angle_to_vec, Aabb, Vec2};
use crate::room::Wall;

fn hits_wall(bounds: &Aabb, walls: &[Wall]) -> bool {
    walls.iter().any(|w| bounds.intersects(&w.rect))
}

fn out_of_arena(pos: Vec2) -> bool {
    pos.x < -100.0 || pos.x > ARENA_W + 100.0 || pos.y < -100.0 || pos.y > ARENA_H + 100.0
}

// ── Player projectile ─────────────────────────────────────────────────────────

/// A pellet fired by the player. Piercing and explosive levels are stamped
/// at fire time from the player's current stacks.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: u32,
    pub lifetime: u32,
    /// How many enemies this pellet may still damage before it is spent.
    pub hits_left: u32,
    pub explosive: u32,
    pub alive: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, angle_degrees: f32, piercing: u32, explosive: u32) -> Self {
        Projectile {
            pos,
            vel: angle_to_vec(angle_degrees) * PROJECTILE_SPEED,
            age: 0,
            lifetime: PROJECTILE_LIFETIME,
            hits_left: (piercing + 1).max(1),
            explosive,
            alive: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        let size = 10 + 4 * self.explosive as i32;
        Aabb::from_center(self.pos, size, size)
    }

    pub fn explosion_radius(&self) -> f32 {
        EXPLOSION_BASE_RADIUS + EXPLOSION_RADIUS_PER_LEVEL * self.explosive as f32
    }

    pub fn update(&mut self, walls: &[Wall]) {
        self.age += 1;
        self.pos += self.vel;
        if hits_wall(&self.bounds(), walls) || self.age >= self.lifetime {
            self.alive = false;
        }
    }
}

// ── Enemy shot ────────────────────────────────────────────────────────────────

/// A projectile fired by an enemy or boss. Pre-aimed at construction: once
/// launched it flies straight regardless of where the player moves.
#[derive(Clone, Debug)]
pub struct EnemyShot {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    pub alive: bool,
}

impl EnemyShot {
    /// Shot aimed at the target's position at fire time.
    pub fn aimed(pos: Vec2, target: Vec2, damage: i32) -> Self {
        EnemyShot {
            pos,
            vel: pos.dir_toward(target) * ENEMY_SHOT_SPEED,
            damage,
            alive: true,
        }
    }

    /// Shot launched at a fixed angle in degrees.
    pub fn angled(pos: Vec2, angle_degrees: f32, damage: i32) -> Self {
        EnemyShot {
            pos,
            vel: angle_to_vec(angle_degrees) * ENEMY_SHOT_SPEED,
            damage,
            alive: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, 8, 8)
    }

    pub fn update(&mut self, walls: &[Wall]) {
        self.pos += self.vel;
        if hits_wall(&self.bounds(), walls) || out_of_arena(self.pos) {
            self.alive = false;
        }
    }
}

// ── Particles ─────────────────────────────────────────────────────────────────

/// Decorative debris spawned on kills and explosions. Consumed only by the
/// renderer; never participates in collision.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub lifetime: u32,
}

impl Particle {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Particle {
            pos,
            vel: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
            lifetime: rng.gen_range(10..=20),
        }
    }

    /// The standard 6-particle kill burst.
    pub fn burst(pos: Vec2, count: u32, rng: &mut impl Rng) -> Vec<Particle> {
        (0..count).map(|_| Particle::new(pos, rng)).collect()
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    pub fn alive(&self) -> bool {
        self.lifetime > 0
    }
}
