//! The room graph and run progression. Rooms are created lazily the first
//! time the player walks through a door; revisited rooms come back exactly
//! as they were left.

use std::collections::HashMap;

use rand::Rng;

use crate::constants::BOSS_INTERVAL;
use crate::geometry::Vec2;
use crate::room::Room;

#[derive(Clone, Debug)]
pub struct Dungeon {
    pub rooms: HashMap<(i32, i32), Room>,
    pub current: (i32, i32),
    pub rooms_cleared: u32,
    pub bosses_defeated: u32,
    pub difficulty: u32,
}

impl Dungeon {
    /// A fresh run: one populated starting room at the origin.
    pub fn new(player_pos: Vec2, rng: &mut impl Rng) -> Self {
        let mut dungeon = Dungeon {
            rooms: HashMap::new(),
            current: (0, 0),
            rooms_cleared: 0,
            bosses_defeated: 0,
            difficulty: 1,
        };
        dungeon.enter((0, 0), player_pos, rng);
        dungeon
    }

    /// Whether the next freshly-created room should hold a boss.
    fn next_room_is_boss(&self) -> bool {
        self.rooms_cleared > 0 && (self.rooms_cleared + 1) % BOSS_INTERVAL == 0
    }

    /// Move to `coord`, creating and populating the room on first visit.
    pub fn enter(&mut self, coord: (i32, i32), player_pos: Vec2, rng: &mut impl Rng) {
        if !self.rooms.contains_key(&coord) {
            let mut room = Room::new(coord);
            if self.next_room_is_boss() {
                room.populate_boss(self.bosses_defeated, self.difficulty, self.bosses_defeated);
            } else {
                room.populate(self.difficulty, player_pos, rng);
            }
            self.rooms.insert(coord, room);
        }
        self.current = coord;
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[&self.current]
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        self.rooms
            .get_mut(&self.current)
            .unwrap_or_else(|| unreachable!("current room always exists"))
    }

    /// Pass 5 of the resolver: if the current room just emptied, run its
    /// unlock transition once and advance the run counters. Returns whether
    /// an unlock happened this frame.
    pub fn check_clear(&mut self, player_pos: Vec2, rng: &mut impl Rng) -> bool {
        let room = self.current_room_mut();
        if !room.locked || !room.is_empty() {
            return false;
        }
        let was_boss_room = room.is_boss_room;
        room.unlock(player_pos, rng);

        self.rooms_cleared += 1;
        self.difficulty = self.rooms_cleared / 3 + 1;
        if was_boss_room {
            self.bosses_defeated += 1;
        }
        true
    }
}
