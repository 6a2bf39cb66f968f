//! A single arena room: perimeter walls with four sealable door gaps, an
//! enemy population (or a boss), power-up drops, and the clear/unlock state
//! machine.

use rand::Rng;

use crate::boss::{create_boss, Boss, SpawnRequest};
use crate::constants::*;
use crate::enemy::{Enemy, EnemyKind};
use crate::events::{AirstrikeEvent, BOMB_PLAYER_DAMAGE, BOMB_RADIUS};
use crate::geometry::{Aabb, Vec2};
use crate::item::{PowerUp, PowerUpKind};
use crate::player::Player;
use crate::projectile::EnemyShot;

const DROP_CHANCE: f64 = 0.75;
const AIRSTRIKE_CHANCE: f64 = 0.20;
const SPAWN_CLEARANCE: f32 = 200.0;
const SPAWN_TRIES: u32 = 200;

/// A solid rectangle. Door blocks are walls too, just flagged so the unlock
/// step can remove them.
#[derive(Clone, Copy, Debug)]
pub struct Wall {
    pub rect: Aabb,
    pub is_door: bool,
}

#[derive(Clone, Debug)]
pub struct Room {
    pub coord: (i32, i32),
    pub locked: bool,
    /// Set when the unlock transition has run; it never runs twice.
    pub cleared: bool,
    pub is_boss_room: bool,
    pub walls: Vec<Wall>,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub shots: Vec<EnemyShot>,
    pub powerups: Vec<PowerUp>,
    pub airstrike: Option<AirstrikeEvent>,
}

impl Room {
    /// Build the wall set: each edge is two segments flanking a centered
    /// door gap, with a thin door block sealing the gap while locked.
    pub fn new(coord: (i32, i32)) -> Self {
        let w = ARENA_W as i32;
        let h = ARENA_H as i32;
        let t = WALL_THICKNESS;
        let gap = DOOR_WIDTH;
        let seg_w = (w - gap) / 2;
        let seg_h = (h - gap) / 2;
        let dt = DOOR_BLOCK_THICKNESS;

        let mut walls = vec![
            // Top and bottom edges
            Wall { rect: Aabb::new(0, 0, seg_w, t), is_door: false },
            Wall { rect: Aabb::new(seg_w + gap, 0, seg_w, t), is_door: false },
            Wall { rect: Aabb::new(0, h - t, seg_w, t), is_door: false },
            Wall { rect: Aabb::new(seg_w + gap, h - t, seg_w, t), is_door: false },
            // Left and right edges
            Wall { rect: Aabb::new(0, 0, t, seg_h), is_door: false },
            Wall { rect: Aabb::new(0, seg_h + gap, t, seg_h), is_door: false },
            Wall { rect: Aabb::new(w - t, 0, t, seg_h), is_door: false },
            Wall { rect: Aabb::new(w - t, seg_h + gap, t, seg_h), is_door: false },
        ];
        // Door blocks sealing the four gaps
        walls.push(Wall { rect: Aabb::new(seg_w, 0, gap, dt), is_door: true });
        walls.push(Wall { rect: Aabb::new(seg_w, h - dt, gap, dt), is_door: true });
        walls.push(Wall { rect: Aabb::new(0, seg_h, dt, gap), is_door: true });
        walls.push(Wall { rect: Aabb::new(w - dt, seg_h, dt, gap), is_door: true });

        Room {
            coord,
            locked: true,
            cleared: false,
            is_boss_room: false,
            walls,
            enemies: Vec::new(),
            boss: None,
            shots: Vec::new(),
            powerups: Vec::new(),
            airstrike: None,
        }
    }

    /// Fill a fresh room with a difficulty-sized enemy pack, every spawn at
    /// least `SPAWN_CLEARANCE` away from where the player entered.
    pub fn populate(&mut self, difficulty: u32, player_pos: Vec2, rng: &mut impl Rng) {
        let base = BASE_ENEMIES + difficulty / 2;
        let count = rng.gen_range(base..=base + 2);
        for _ in 0..count {
            let pos = spawn_point(player_pos, rng);
            let mut enemy = Enemy::new(EnemyKind::choose(rng), pos, rng);
            enemy.scale_health(difficulty);
            self.enemies.push(enemy);
        }
    }

    /// Fill a fresh boss room: one boss at the arena center, picked by the
    /// run's boss counter.
    pub fn populate_boss(&mut self, boss_index: u32, difficulty: u32, stage: u32) {
        self.is_boss_room = true;
        let center = Vec2::new(ARENA_W / 2.0, ARENA_H / 2.0);
        self.boss = Some(create_boss(boss_index, center, difficulty, stage));
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty() && self.boss.is_none()
    }

    /// The unlock transition: remove the door blocks, roll drops near the
    /// room center, maybe roll an airstrike. Runs at most once per room; the
    /// caller updates the run counters.
    pub fn unlock(&mut self, player_pos: Vec2, rng: &mut impl Rng) {
        self.locked = false;
        self.cleared = true;
        self.walls.retain(|w| !w.is_door);

        let drops = if self.is_boss_room {
            2
        } else if rng.gen_bool(DROP_CHANCE) {
            1
        } else {
            0
        };
        for _ in 0..drops {
            let pos = Vec2::new(
                rng.gen_range(100.0..ARENA_W - 100.0),
                rng.gen_range(100.0..ARENA_H - 100.0),
            );
            self.powerups.push(PowerUp::new(PowerUpKind::choose(rng), pos));
        }

        if rng.gen_bool(AIRSTRIKE_CHANCE) {
            self.airstrike = Some(AirstrikeEvent::new(player_pos));
        }
    }

    /// Per-frame room step: airstrike, enemy AI, boss state machine, shot
    /// and power-up upkeep. Returns positions of airstrike kills so the
    /// caller can spawn debris (airstrike kills never score).
    pub fn update(&mut self, player: &mut Player, rng: &mut impl Rng) -> Vec<Vec2> {
        let mut kill_positions = Vec::new();

        let mut strike_done = false;
        if let Some(strike) = &mut self.airstrike {
            let detonations = strike.update();
            for blast in detonations {
                for enemy in &mut self.enemies {
                    // Skip enemies a same-frame blast already finished off.
                    if enemy.health > 0
                        && enemy.pos.distance(blast) <= BOMB_RADIUS
                        && enemy.take_hit()
                    {
                        kill_positions.push(enemy.pos);
                    }
                }
                if let Some(boss) = &mut self.boss {
                    if boss.health > 0
                        && boss.pos.distance(blast) <= BOMB_RADIUS
                        && boss.take_hit()
                    {
                        kill_positions.push(boss.pos);
                    }
                }
                if player.pos.distance(blast) <= BOMB_RADIUS {
                    player.take_damage(BOMB_PLAYER_DAMAGE);
                }
            }
            self.enemies.retain(|e| e.health > 0);
            if self.boss.as_ref().is_some_and(|b| b.health <= 0) {
                self.boss = None;
            }
            strike_done = strike.finished();
        }
        if strike_done {
            self.airstrike = None;
        }

        for enemy in &mut self.enemies {
            if let Some(shot) = enemy.update(player.pos, rng) {
                self.shots.push(shot);
            }
        }

        if let Some(boss) = &mut self.boss {
            match boss.update(player, rng) {
                SpawnRequest::None => {}
                SpawnRequest::Shots(volley) => self.shots.extend(volley),
                SpawnRequest::Minions(minions) => self.enemies.extend(minions),
            }
        }

        for shot in &mut self.shots {
            shot.update(&self.walls);
        }
        self.shots.retain(|s| s.alive);

        for p in &mut self.powerups {
            p.update();
        }
        self.powerups.retain(|p| p.alive());

        kill_positions
    }
}

fn spawn_point(player_pos: Vec2, rng: &mut impl Rng) -> Vec2 {
    for _ in 0..SPAWN_TRIES {
        let pos = Vec2::new(
            rng.gen_range(100.0..ARENA_W - 100.0),
            rng.gen_range(100.0..ARENA_H - 100.0),
        );
        if pos.distance(player_pos) >= SPAWN_CLEARANCE {
            return pos;
        }
    }
    Vec2::new(150.0, 150.0)
}
