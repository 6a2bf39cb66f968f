//! The per-frame collision and damage resolver. Pass order is fixed:
//! contact damage, player projectiles vs foes, enemy shots vs the player,
//! then power-up pickup. Dead foes are removed within the pass that killed
//! them so no later pass can touch a corpse.

use rand::Rng;

use crate::item::PowerUp;
use crate::player::Player;
use crate::projectile::{Particle, Projectile};
use crate::room::Room;

/// Debris count per kill.
const KILL_PARTICLES: u32 = 6;

/// Score and debris produced by one resolver run.
#[derive(Debug, Default)]
pub struct CombatOutcome {
    pub kills: u32,
    pub particles: Vec<Particle>,
}

pub fn resolve(
    player: &mut Player,
    projectiles: &mut Vec<Projectile>,
    room: &mut Room,
    rng: &mut impl Rng,
) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();

    contact_pass(player, room);
    projectile_pass(projectiles, room, &mut outcome, rng);
    enemy_shot_pass(player, room);
    pickup_pass(player, room);

    outcome
}

/// Pass 1: overlapping foes deal contact damage. The i-frame window inside
/// `take_damage` means several simultaneous contacts still hurt only once.
fn contact_pass(player: &mut Player, room: &mut Room) {
    let pb = player.bounds();
    for enemy in &room.enemies {
        if pb.intersects(&enemy.bounds()) {
            player.take_damage(enemy.contact_damage);
        }
    }
    if let Some(boss) = &room.boss {
        if pb.intersects(&boss.bounds()) {
            player.take_damage(boss.contact_damage);
        }
    }
}

/// Pass 2: player projectiles against enemies and the boss. Explosive
/// pellets trade their piercing budget for one area blast; everything else
/// spends `hits_left` one foe at a time.
fn projectile_pass(
    projectiles: &mut Vec<Projectile>,
    room: &mut Room,
    outcome: &mut CombatOutcome,
    rng: &mut impl Rng,
) {
    for proj in projectiles.iter_mut() {
        if !proj.alive {
            continue;
        }
        if proj.explosive > 0 {
            explosive_hit(proj, room, outcome, rng);
        } else {
            piercing_hit(proj, room, outcome, rng);
        }
    }
    room.enemies.retain(|e| e.health > 0);
    projectiles.retain(|p| p.alive);
}

/// One blast per projectile: the first overlap detonates it, and every foe
/// within the radius takes `1 + explosive` hits.
fn explosive_hit(
    proj: &mut Projectile,
    room: &mut Room,
    outcome: &mut CombatOutcome,
    rng: &mut impl Rng,
) {
    let pb = proj.bounds();
    let touched = room
        .enemies
        .iter()
        .any(|e| e.health > 0 && pb.intersects(&e.bounds()))
        || room.boss.as_ref().is_some_and(|b| pb.intersects(&b.bounds()));
    if !touched {
        return;
    }

    let radius = proj.explosion_radius();
    let hits = 1 + proj.explosive;
    for enemy in room.enemies.iter_mut().filter(|e| e.health > 0) {
        if enemy.pos.distance(proj.pos) <= radius {
            for _ in 0..hits {
                if enemy.take_hit() {
                    break;
                }
            }
            if enemy.health <= 0 {
                outcome.kills += 1;
                outcome
                    .particles
                    .extend(Particle::burst(enemy.pos, KILL_PARTICLES, rng));
            }
        }
    }

    let mut boss_died = false;
    if let Some(boss) = &mut room.boss {
        if boss.pos.distance(proj.pos) <= radius {
            for _ in 0..hits {
                if boss.take_hit() {
                    boss_died = true;
                    break;
                }
            }
            if boss_died {
                outcome.kills += 1;
                outcome.particles.extend(Particle::burst(boss.pos, KILL_PARTICLES, rng));
            }
        }
    }
    if boss_died {
        room.boss = None;
    }

    proj.alive = false;
}

/// Normal and piercing pellets: each overlap costs one `hits_left`, and the
/// pellet dies when the budget runs out.
fn piercing_hit(
    proj: &mut Projectile,
    room: &mut Room,
    outcome: &mut CombatOutcome,
    rng: &mut impl Rng,
) {
    let pb = proj.bounds();
    for enemy in room.enemies.iter_mut() {
        if proj.hits_left == 0 {
            break;
        }
        if enemy.health <= 0 || !pb.intersects(&enemy.bounds()) {
            continue;
        }
        if enemy.take_hit() {
            outcome.kills += 1;
            outcome
                .particles
                .extend(Particle::burst(enemy.pos, KILL_PARTICLES, rng));
        }
        proj.hits_left -= 1;
    }

    let mut boss_died = false;
    if proj.hits_left > 0 {
        if let Some(boss) = &mut room.boss {
            if pb.intersects(&boss.bounds()) {
                // A shielded boss still absorbs the pellet.
                if boss.take_hit() {
                    boss_died = true;
                    outcome.kills += 1;
                    outcome.particles.extend(Particle::burst(boss.pos, KILL_PARTICLES, rng));
                }
                proj.hits_left -= 1;
            }
        }
    }
    if boss_died {
        room.boss = None;
    }

    if proj.hits_left == 0 {
        proj.alive = false;
    }
}

/// Pass 3: enemy shots against the player. The shot always dies on contact;
/// damage still respects i-frames.
fn enemy_shot_pass(player: &mut Player, room: &mut Room) {
    let pb = player.bounds();
    for shot in &mut room.shots {
        if shot.alive && pb.intersects(&shot.bounds()) {
            shot.alive = false;
            player.take_damage(shot.damage);
        }
    }
    room.shots.retain(|s| s.alive);
}

/// Pass 4: power-up pickup, each consumed and applied exactly once.
fn pickup_pass(player: &mut Player, room: &mut Room) {
    let pb = player.bounds();
    room.powerups.retain(|p: &PowerUp| {
        if pb.intersects(&p.bounds()) {
            p.apply(player);
            false
        } else {
            true
        }
    });
}
