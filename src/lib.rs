//! Top-down arena shooter core: a fixed-timestep combat and progression
//! simulation. The library is headless; `display` and `main` wrap it in a
//! terminal frontend.

pub mod boss;
pub mod combat;
pub mod constants;
pub mod display;
pub mod dungeon;
pub mod enemy;
pub mod events;
pub mod game;
pub mod geometry;
pub mod item;
pub mod player;
pub mod projectile;
pub mod room;
