//! Power-up drops and the pickup effect table.

use rand::Rng;

use crate::constants::{POWERUP_LIFETIME, POWERUP_SIZE};
use crate::geometry::{Aabb, Vec2};
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    Health,
    MultiShot,
    Speed,
    RapidFire,
    Piercing,
    Explosive,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Health,
        PowerUpKind::MultiShot,
        PowerUpKind::Speed,
        PowerUpKind::RapidFire,
        PowerUpKind::Piercing,
        PowerUpKind::Explosive,
    ];

    pub fn choose(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A floating pickup. Despawns untouched after 20 seconds.
#[derive(Clone, Debug)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub frames_left: u32,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        PowerUp {
            kind,
            pos,
            frames_left: POWERUP_LIFETIME,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, POWERUP_SIZE, POWERUP_SIZE)
    }

    pub fn update(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
    }

    pub fn alive(&self) -> bool {
        self.frames_left > 0
    }

    /// The pickup effect table. `MultiShot` jumps 1 to 3 and then climbs in
    /// steps of 2, keeping the pellet count odd so the cone stays symmetric.
    pub fn apply(&self, player: &mut Player) {
        match self.kind {
            PowerUpKind::Health => player.heal(2),
            PowerUpKind::MultiShot => {
                if player.multi_shot_level == 1 {
                    player.multi_shot_level = 3;
                } else {
                    player.multi_shot_level += 2;
                }
            }
            PowerUpKind::Speed => player.speed_level += 1,
            PowerUpKind::RapidFire => player.rapid_level += 1,
            PowerUpKind::Piercing => player.piercing_level += 1,
            PowerUpKind::Explosive => player.explosive_level += 1,
        }
    }
}
