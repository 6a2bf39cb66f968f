//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! state into terminal commands. The 800x600 world is mapped onto a fixed
//! 80x24 cell grid below a one-row HUD.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::boss::Boss;
use crate::enemy::EnemyKind;
use crate::game::{GameState, Status};
use crate::geometry::{Aabb, Vec2};
use crate::item::PowerUpKind;
use crate::room::Room;

// World-to-cell scale: 800/80 and 600/25.
const CELL_W: f32 = 10.0;
const CELL_H: f32 = 24.0;
const GRID_COLS: u16 = 80;
const GRID_ROWS: u16 = 25;
/// Rows above the playfield reserved for the HUD.
const Y_OFF: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WALL: Color = Color::DarkBlue;
const C_DOOR: Color = Color::DarkYellow;
const C_PLAYER: Color = Color::White;
const C_GRUNT: Color = Color::Red;
const C_SHOOTER: Color = Color::Magenta;
const C_JUMPER: Color = Color::Yellow;
const C_TANK: Color = Color::DarkRed;
const C_BOSS: Color = Color::Red;
const C_BOSS_FLASH: Color = Color::White;
const C_SHOT_PLAYER: Color = Color::Cyan;
const C_SHOT_ENEMY: Color = Color::Magenta;
const C_POWERUP: Color = Color::Green;
const C_PARTICLE: Color = Color::DarkGrey;
const C_PLANE: Color = Color::White;
const C_BOMB: Color = Color::Yellow;
const C_HUD_HP: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn cell(pos: Vec2) -> Option<(u16, u16)> {
    let col = (pos.x / CELL_W) as i32;
    let row = (pos.y / CELL_H) as i32;
    if col < 0 || col >= GRID_COLS as i32 || row < 0 || row >= GRID_ROWS as i32 {
        return None;
    }
    Some((col as u16, row as u16 + Y_OFF))
}

fn put<W: Write>(out: &mut W, pos: Vec2, color: Color, glyph: &str) -> std::io::Result<()> {
    if let Some((col, row)) = cell(pos) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, paused: bool) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let room = state.dungeon.current_room();

    draw_walls(out, room)?;
    draw_hud(out, state, room)?;

    for p in &state.particles {
        put(out, p.pos, C_PARTICLE, ".")?;
    }
    for item in &room.powerups {
        let glyph = match item.kind {
            PowerUpKind::Health => "H",
            PowerUpKind::MultiShot => "M",
            PowerUpKind::Speed => "S",
            PowerUpKind::RapidFire => "R",
            PowerUpKind::Piercing => "P",
            PowerUpKind::Explosive => "E",
        };
        put(out, item.pos, C_POWERUP, glyph)?;
    }
    for enemy in &room.enemies {
        let (color, glyph) = match enemy.kind {
            EnemyKind::Grunt => (C_GRUNT, "g"),
            EnemyKind::Shooter => (C_SHOOTER, "s"),
            EnemyKind::Jumper => (C_JUMPER, "j"),
            EnemyKind::Tank => (C_TANK, "T"),
        };
        let color = if enemy.flash_frames > 0 { Color::White } else { color };
        put(out, enemy.pos, color, glyph)?;
    }
    if let Some(boss) = &room.boss {
        draw_boss(out, boss)?;
    }
    for shot in &room.shots {
        put(out, shot.pos, C_SHOT_ENEMY, "*")?;
    }
    for proj in &state.projectiles {
        let glyph = if proj.explosive > 0 { "o" } else { "." };
        put(out, proj.pos, C_SHOT_PLAYER, glyph)?;
    }
    if let Some(strike) = &room.airstrike {
        if strike.warning() {
            let banner = "!! AIRSTRIKE INBOUND !!";
            out.queue(style::SetForegroundColor(Color::Red))?;
            out.queue(cursor::MoveTo(
                (GRID_COLS / 2).saturating_sub(banner.chars().count() as u16 / 2),
                Y_OFF + 1,
            ))?;
            out.queue(Print(banner))?;
        }
        for bomb in &strike.bombs {
            put(out, bomb.pos, C_BOMB, "v")?;
        }
        put(out, strike.plane_pos, C_PLANE, ">")?;
    }

    // Invulnerability flash: skip drawing on "hidden" frames.
    if !state.player.is_flashing {
        put(out, state.player.pos, C_PLAYER, "@")?;
    }

    draw_hint(out, room)?;

    if paused {
        draw_overlay(out, &["╔══════════╗", "║  PAUSED  ║", "╚══════════╝"], Color::Yellow)?;
    }
    if state.status == Status::GameOver {
        draw_game_over(out, state)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, GRID_ROWS + Y_OFF))?;
    out.flush()?;
    Ok(())
}

// ── Walls ─────────────────────────────────────────────────────────────────────

fn draw_walls<W: Write>(out: &mut W, room: &Room) -> std::io::Result<()> {
    for wall in &room.walls {
        let (color, glyph) = if wall.is_door { (C_DOOR, "▒") } else { (C_WALL, "█") };
        out.queue(style::SetForegroundColor(color))?;
        draw_rect(out, &wall.rect, glyph)?;
    }
    Ok(())
}

fn draw_rect<W: Write>(out: &mut W, rect: &Aabb, glyph: &str) -> std::io::Result<()> {
    let c0 = (rect.x as f32 / CELL_W) as i32;
    let c1 = (((rect.x + rect.w) as f32 / CELL_W).ceil() as i32).min(GRID_COLS as i32);
    let r0 = (rect.y as f32 / CELL_H) as i32;
    let r1 = (((rect.y + rect.h) as f32 / CELL_H).ceil() as i32).min(GRID_ROWS as i32);
    for row in r0.max(0)..r1.max(r0 + 1).min(GRID_ROWS as i32) {
        for col in c0.max(0)..c1.max(c0 + 1).min(GRID_COLS as i32) {
            out.queue(cursor::MoveTo(col as u16, row as u16 + Y_OFF))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, room: &Room) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HP))?;
    out.queue(Print(format!(
        "HP {:>2}/{}",
        state.player.health,
        crate::constants::PLAYER_MAX_HEALTH
    )))?;

    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("  Score {:>5}", state.score)))?;

    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(format!(
        "  Room ({},{})  Cleared {}  Lv {}",
        state.dungeon.current.0,
        state.dungeon.current.1,
        state.dungeon.rooms_cleared,
        state.dungeon.difficulty,
    )))?;

    if let Some(boss) = &room.boss {
        let bar_len = 10;
        let filled = ((boss.health.max(0) * bar_len) / boss.max_health.max(1)).max(0) as usize;
        out.queue(style::SetForegroundColor(C_BOSS))?;
        out.queue(Print(format!(
            "  {} [{}{}]",
            boss.name(),
            "#".repeat(filled),
            "-".repeat(bar_len as usize - filled),
        )))?;
    }
    Ok(())
}

// ── Boss ──────────────────────────────────────────────────────────────────────

fn draw_boss<W: Write>(out: &mut W, boss: &Boss) -> std::io::Result<()> {
    let color = if boss.flash_frames > 0 || boss.intangible() || boss.phasing() {
        C_BOSS_FLASH
    } else {
        C_BOSS
    };
    // Bosses get a 3-cell sprite so they read as bigger than regular foes.
    put(out, Vec2::new(boss.pos.x - CELL_W, boss.pos.y), color, "<")?;
    put(out, boss.pos, color, "B")?;
    put(out, Vec2::new(boss.pos.x + CELL_W, boss.pos.y), color, ">")?;
    Ok(())
}

// ── Hint row ──────────────────────────────────────────────────────────────────

fn draw_hint<W: Write>(out: &mut W, room: &Room) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, GRID_ROWS + Y_OFF))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    if room.locked {
        out.queue(Print("WASD : Move   Arrows : Shoot   Esc : Pause   Q : Quit   [doors locked]"))?;
    } else {
        out.queue(Print("WASD : Move   Arrows : Shoot   Esc : Pause   Q : Quit"))?;
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_overlay<W: Write>(out: &mut W, lines: &[&str], color: Color) -> std::io::Result<()> {
    let cx = GRID_COLS / 2;
    let start = Y_OFF + GRID_ROWS / 2 - lines.len() as u16 / 2;
    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start + i as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    draw_overlay(
        out,
        &["╔════════════════════╗", "║     GAME  OVER     ║", "╚════════════════════╝"],
        Color::Red,
    )?;
    let score_line = format!("Score: {:>5}   Rooms: {:>3}", state.score, state.dungeon.rooms_cleared);
    let hint = "R - Play Again  Q - Quit";
    let cx = GRID_COLS / 2;
    let row = Y_OFF + GRID_ROWS / 2 + 2;

    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(cursor::MoveTo(cx.saturating_sub(score_line.chars().count() as u16 / 2), row))?;
    out.queue(Print(&score_line))?;

    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(cursor::MoveTo(cx.saturating_sub(hint.chars().count() as u16 / 2), row + 1))?;
    out.queue(Print(hint))?;
    Ok(())
}
