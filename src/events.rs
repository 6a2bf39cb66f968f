//! One-shot environmental events. Currently just the airstrike: a plane
//! crosses the room on a fixed heading, trailing timed bombs.

use crate::geometry::Vec2;

pub const PLANE_SPEED: f32 = 10.0;
pub const WARNING_FRAMES: u32 = 60;
pub const EVENT_FRAMES: u32 = 300;
pub const DROP_SPACING: f32 = 50.0;
pub const BOMB_FUSE: u32 = 40;
pub const BOMB_RADIUS: f32 = 30.0;
pub const BOMB_PLAYER_DAMAGE: i32 = 2;

/// A dropped bomb waiting out its fuse.
#[derive(Clone, Debug)]
pub struct Bomb {
    pub pos: Vec2,
    pub fuse: u32,
}

/// The airstrike. Aimed once, at the player's position when the event was
/// rolled; the plane never re-aims after that.
#[derive(Clone, Debug)]
pub struct AirstrikeEvent {
    pub plane_pos: Vec2,
    dir: Vec2,
    age: u32,
    travelled: f32,
    next_drop: f32,
    pub bombs: Vec<Bomb>,
}

impl AirstrikeEvent {
    pub fn new(target: Vec2) -> Self {
        let start = Vec2::new(-150.0, -50.0);
        AirstrikeEvent {
            plane_pos: start,
            dir: start.dir_toward(target),
            age: 0,
            travelled: 0.0,
            next_drop: DROP_SPACING,
            bombs: Vec::new(),
        }
    }

    /// True while the warning siren runs, before the plane moves.
    pub fn warning(&self) -> bool {
        self.age < WARNING_FRAMES
    }

    /// Advance one frame. Returns the positions of bombs that detonated this
    /// frame; the caller resolves their blast damage.
    pub fn update(&mut self) -> Vec<Vec2> {
        self.age += 1;
        if self.age > WARNING_FRAMES && self.age <= EVENT_FRAMES {
            self.plane_pos += self.dir * PLANE_SPEED;
            self.travelled += PLANE_SPEED;
            while self.travelled >= self.next_drop {
                self.bombs.push(Bomb {
                    pos: self.plane_pos,
                    fuse: BOMB_FUSE,
                });
                self.next_drop += DROP_SPACING;
            }
        }

        let mut detonations = Vec::new();
        for bomb in &mut self.bombs {
            bomb.fuse -= 1;
            if bomb.fuse == 0 {
                detonations.push(bomb.pos);
            }
        }
        self.bombs.retain(|b| b.fuse > 0);
        detonations
    }

    /// The event ends once the flight window closes and every bomb has gone
    /// off.
    pub fn finished(&self) -> bool {
        self.age >= EVENT_FRAMES && self.bombs.is_empty()
    }
}
