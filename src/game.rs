//! The top-level simulation state and the fixed-order frame tick. The core
//! is a closed loop: the frontend feeds it one `InputFrame` per frame and
//! reads back positions afterwards. Pausing is simply not calling `tick`.

use rand::Rng;

use crate::combat;
use crate::constants::*;
use crate::dungeon::Dungeon;
use crate::geometry::Vec2;
use crate::player::Player;
use crate::projectile::{Particle, Projectile};

pub use crate::player::{Dir, InputFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub status: Status,
    pub player: Player,
    pub dungeon: Dungeon,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,
    pub score: u32,
}

impl GameState {
    /// A fresh run: player at the arena center, a new dungeon, all counters
    /// zeroed. Restart replaces the whole state in one move, so a dead run
    /// can never leak into the next one.
    pub fn new_run(rng: &mut impl Rng) -> Self {
        let start = Vec2::new(ARENA_W / 2.0, ARENA_H / 2.0);
        GameState {
            status: Status::Playing,
            player: Player::new(start),
            dungeon: Dungeon::new(start, rng),
            projectiles: Vec::new(),
            particles: Vec::new(),
            score: 0,
        }
    }

    /// One simulation frame. Order is fixed: attack, player movement, room
    /// step (events, AI, boss), projectile integration, combat resolution,
    /// clear check, room transition, death check.
    pub fn tick(&mut self, input: &InputFrame, rng: &mut impl Rng) {
        if self.status != Status::Playing {
            return;
        }

        if let Some(dir) = input.fire {
            if self.player.can_attack() {
                self.projectiles.extend(self.player.attack(dir, rng));
            }
        }

        let room = self.dungeon.current_room_mut();
        self.player.update(&room.walls, input);

        let strike_kills = room.update(&mut self.player, rng);
        for pos in strike_kills {
            self.particles.extend(Particle::burst(pos, 6, rng));
        }

        for proj in &mut self.projectiles {
            proj.update(&room.walls);
        }
        self.projectiles.retain(|p| p.alive);
        for part in &mut self.particles {
            part.update();
        }
        self.particles.retain(|p| p.alive());

        let outcome = combat::resolve(&mut self.player, &mut self.projectiles, room, rng);
        self.score += outcome.kills;
        self.particles.extend(outcome.particles);

        self.dungeon.check_clear(self.player.pos, rng);
        self.try_transition(rng);

        if self.player.health <= 0 {
            self.status = Status::GameOver;
        }
    }

    /// Walk through an open door: crossing within the margin of any edge of
    /// an unlocked room moves the run to the neighbouring grid coordinate
    /// and repositions the player just inside the opposite edge. In-flight
    /// projectiles and debris do not follow.
    fn try_transition(&mut self, rng: &mut impl Rng) {
        if self.dungeon.current_room().locked {
            return;
        }

        let p = self.player.pos;
        let exit = if p.x < TRANSITION_MARGIN {
            Some(Dir::Left)
        } else if p.x > ARENA_W - TRANSITION_MARGIN {
            Some(Dir::Right)
        } else if p.y < TRANSITION_MARGIN {
            Some(Dir::Up)
        } else if p.y > ARENA_H - TRANSITION_MARGIN {
            Some(Dir::Down)
        } else {
            None
        };

        if let Some(dir) = exit {
            let (cx, cy) = self.dungeon.current;
            let (dx, dy) = dir.step();
            let coord = (cx + dx, cy + dy);
            let entry = match dir {
                Dir::Left => Vec2::new(ARENA_W - 120.0, p.y),
                Dir::Right => Vec2::new(120.0, p.y),
                Dir::Up => Vec2::new(p.x, ARENA_H - 100.0),
                Dir::Down => Vec2::new(p.x, 100.0),
            };
            self.player.pos = entry;
            self.projectiles.clear();
            self.particles.clear();
            self.dungeon.enter(coord, entry, rng);
        }
    }
}
