//! Regular enemies: straight-line pursuit plus per-kind twists (shooting,
//! jump-dashes, tank stats). Pathfinding is deliberately absent; the chase
//! is a plain normalized step toward the player every frame.

use rand::Rng;

use crate::constants::*;
use crate::geometry::{Aabb, Vec2};
use crate::projectile::EnemyShot;

const SHOOTER_COOLDOWN: u32 = 90;
const HIT_FLASH_FRAMES: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Grunt,
    Shooter,
    Jumper,
    Tank,
}

impl EnemyKind {
    pub fn base_health(self) -> i32 {
        match self {
            EnemyKind::Grunt => 2,
            EnemyKind::Shooter => 3,
            EnemyKind::Jumper => 2,
            EnemyKind::Tank => 6,
        }
    }

    pub fn speed(self) -> f32 {
        match self {
            EnemyKind::Tank => 1.0,
            _ => ENEMY_SPEED,
        }
    }

    /// Spawn mix: mostly grunts, then shooters, with jumpers and tanks rare.
    pub fn choose(rng: &mut impl Rng) -> Self {
        let r: f32 = rng.gen();
        if r < 0.55 {
            EnemyKind::Grunt
        } else if r < 0.80 {
            EnemyKind::Shooter
        } else if r < 0.90 {
            EnemyKind::Jumper
        } else {
            EnemyKind::Tank
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub contact_damage: i32,
    pub flash_frames: u32,
    // Shooter state
    pub shoot_timer: u32,
    // Jumper state: commit to the player's position at dash start and fly
    // there without re-aiming.
    pub jump_timer: u32,
    pub jump_cooldown: u32,
    pub jump_target: Option<Vec2>,
    pub jump_travelled: f32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2, rng: &mut impl Rng) -> Self {
        Enemy {
            kind,
            pos,
            health: kind.base_health(),
            max_health: kind.base_health(),
            contact_damage: 1,
            flash_frames: 0,
            shoot_timer: 0,
            jump_timer: 0,
            jump_cooldown: rng.gen_range(120..=180),
            jump_target: None,
            jump_travelled: 0.0,
        }
    }

    /// Multiply health by the dungeon's difficulty curve. Called once at
    /// spawn, before the enemy enters a room.
    pub fn scale_health(&mut self, difficulty: u32) {
        let factor = ENEMY_HEALTH_SCALE.powi(difficulty as i32 - 1);
        self.max_health = ((self.max_health as f32 * factor) as i32).max(1);
        self.health = self.max_health;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, ENEMY_SIZE, ENEMY_SIZE)
    }

    /// One hit of damage. Reports death; the caller removes the body.
    pub fn take_hit(&mut self) -> bool {
        self.health -= 1;
        self.flash_frames = HIT_FLASH_FRAMES;
        self.health <= 0
    }

    /// Per-frame AI step. Shooters may return a shot aimed at the player's
    /// current position.
    pub fn update(&mut self, player_pos: Vec2, rng: &mut impl Rng) -> Option<EnemyShot> {
        self.flash_frames = self.flash_frames.saturating_sub(1);

        match self.kind {
            EnemyKind::Grunt | EnemyKind::Tank => {
                self.pursue(player_pos);
                None
            }
            EnemyKind::Shooter => {
                self.pursue(player_pos);
                self.shoot_timer += 1;
                if self.shoot_timer >= SHOOTER_COOLDOWN {
                    self.shoot_timer = 0;
                    Some(EnemyShot::aimed(self.pos, player_pos, 1))
                } else {
                    None
                }
            }
            EnemyKind::Jumper => {
                self.jump_timer += 1;
                if self.jump_timer >= self.jump_cooldown {
                    self.jump_timer = 0;
                    self.jump_cooldown = rng.gen_range(120..=180);
                    self.jump_target = Some(player_pos);
                    self.jump_travelled = 0.0;
                }
                if let Some(target) = self.jump_target {
                    let dir = self.pos.dir_toward(target);
                    self.pos += dir * JUMP_SPEED;
                    self.jump_travelled += JUMP_SPEED;
                    let d = target - self.pos;
                    if (d.x.abs() < JUMP_ARRIVE_EPSILON && d.y.abs() < JUMP_ARRIVE_EPSILON)
                        || self.jump_travelled >= JUMP_MAX_TRAVEL
                    {
                        self.jump_target = None;
                    }
                }
                None
            }
        }
    }

    fn pursue(&mut self, player_pos: Vec2) {
        let dir = self.pos.dir_toward(player_pos);
        self.pos += dir * self.kind.speed();
    }
}
