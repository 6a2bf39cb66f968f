use dungeon_shooter::boss::{Boss, BossKind, BossState};
use dungeon_shooter::combat;
use dungeon_shooter::enemy::{Enemy, EnemyKind};
use dungeon_shooter::geometry::Vec2;
use dungeon_shooter::item::{PowerUp, PowerUpKind};
use dungeon_shooter::player::Player;
use dungeon_shooter::projectile::{EnemyShot, Projectile};
use dungeon_shooter::room::Room;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn arena() -> (Player, Room) {
    (Player::new(Vec2::new(400.0, 300.0)), Room::new((0, 0)))
}

fn enemy_at(pos: Vec2, health: i32) -> Enemy {
    let mut rng = seeded_rng();
    let mut e = Enemy::new(EnemyKind::Grunt, pos, &mut rng);
    e.health = health;
    e.max_health = health;
    e
}

// ── Pass 1: contact ───────────────────────────────────────────────────────────

#[test]
fn overlapping_enemy_deals_contact_damage() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    room.enemies.push(enemy_at(player.pos, 2));

    combat::resolve(&mut player, &mut Vec::new(), &mut room, &mut rng);
    assert_eq!(player.health, 19);
}

#[test]
fn simultaneous_contacts_hurt_only_once() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    for _ in 0..4 {
        room.enemies.push(enemy_at(player.pos, 2));
    }

    combat::resolve(&mut player, &mut Vec::new(), &mut room, &mut rng);
    assert_eq!(player.health, 19);
}

// ── Pass 2: player projectiles ────────────────────────────────────────────────

#[test]
fn plain_pellet_kills_and_scores() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    let target = Vec2::new(600.0, 300.0);
    room.enemies.push(enemy_at(target, 1));

    let mut projectiles = vec![Projectile::new(target, 0.0, 0, 0)];
    let outcome = combat::resolve(&mut player, &mut projectiles, &mut room, &mut rng);

    assert_eq!(outcome.kills, 1);
    assert_eq!(outcome.particles.len(), 6);
    assert!(room.enemies.is_empty());
    assert!(projectiles.is_empty());
}

#[test]
fn piercing_budget_caps_hits_per_lifetime() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    let spot = Vec2::new(600.0, 300.0);
    // Three one-hit foes stacked on the pellet; piercing 1 allows only 2 hits
    for _ in 0..3 {
        room.enemies.push(enemy_at(spot, 1));
    }

    let mut projectiles = vec![Projectile::new(spot, 0.0, 1, 0)];
    let outcome = combat::resolve(&mut player, &mut projectiles, &mut room, &mut rng);

    assert_eq!(outcome.kills, 2);
    assert_eq!(room.enemies.len(), 1);
    assert!(projectiles.is_empty());
}

#[test]
fn explosive_blast_overkills_in_radius() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    let spot = Vec2::new(600.0, 300.0);
    // Level 2: radius 90, 3 take_hit calls per foe in radius
    room.enemies.push(enemy_at(spot, 5));
    room.enemies.push(enemy_at(Vec2::new(650.0, 300.0), 3));

    let mut projectiles = vec![Projectile::new(spot, 0.0, 0, 2)];
    let outcome = combat::resolve(&mut player, &mut projectiles, &mut room, &mut rng);

    // hp 5 drops to 2; hp 3 dies
    assert_eq!(room.enemies.len(), 1);
    assert_eq!(room.enemies[0].health, 2);
    assert_eq!(outcome.kills, 1);
    assert!(projectiles.is_empty());

    // A second explosive finishes the survivor
    let mut second = vec![Projectile::new(spot, 0.0, 0, 2)];
    let outcome = combat::resolve(&mut player, &mut second, &mut room, &mut rng);
    assert_eq!(outcome.kills, 1);
    assert!(room.enemies.is_empty());
}

#[test]
fn explosive_detonates_exactly_once() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    let spot = Vec2::new(600.0, 300.0);
    for i in 0..5 {
        room.enemies.push(enemy_at(Vec2::new(590.0 + i as f32 * 5.0, 300.0), 1));
    }

    let mut projectiles = vec![Projectile::new(spot, 0.0, 0, 1)];
    let outcome = combat::resolve(&mut player, &mut projectiles, &mut room, &mut rng);

    // One blast, everyone inside dies, projectile gone
    assert_eq!(outcome.kills, 5);
    assert!(room.enemies.is_empty());
    assert!(projectiles.is_empty());
}

#[test]
fn pellet_kills_boss_and_scores() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    let spot = Vec2::new(600.0, 300.0);
    let mut boss = Boss::new(BossKind::MiniCore, spot, 1);
    boss.health = 1;
    room.boss = Some(boss);

    let mut projectiles = vec![Projectile::new(spot, 0.0, 0, 0)];
    let outcome = combat::resolve(&mut player, &mut projectiles, &mut room, &mut rng);

    assert_eq!(outcome.kills, 1);
    assert!(room.boss.is_none());
}

#[test]
fn shielded_boss_absorbs_pellet_without_damage() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    let spot = Vec2::new(600.0, 300.0);
    let mut boss = Boss::new(BossKind::Warden, spot, 1);
    boss.state = BossState::Warden {
        timer: 0,
        shield_timer: 30,
        shield_cooldown: 290,
    };
    let hp = boss.health;
    room.boss = Some(boss);

    let mut projectiles = vec![Projectile::new(spot, 0.0, 0, 0)];
    let outcome = combat::resolve(&mut player, &mut projectiles, &mut room, &mut rng);

    assert_eq!(outcome.kills, 0);
    assert!(projectiles.is_empty());
    assert_eq!(room.boss.as_ref().map(|b| b.health), Some(hp));
}

// ── Pass 3: enemy shots ───────────────────────────────────────────────────────

#[test]
fn enemy_shot_is_consumed_and_hurts() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    room.shots.push(EnemyShot::aimed(player.pos, player.pos, 3));

    combat::resolve(&mut player, &mut Vec::new(), &mut room, &mut rng);
    assert_eq!(player.health, 17);
    assert!(room.shots.is_empty());
}

#[test]
fn shot_dies_even_when_iframes_block_damage() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    player.take_damage(1);
    let hp = player.health;
    room.shots.push(EnemyShot::aimed(player.pos, player.pos, 3));

    combat::resolve(&mut player, &mut Vec::new(), &mut room, &mut rng);
    assert_eq!(player.health, hp);
    assert!(room.shots.is_empty());
}

// ── Pass 4: pickups ───────────────────────────────────────────────────────────

#[test]
fn pickup_is_applied_exactly_once() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    room.powerups.push(PowerUp::new(PowerUpKind::Speed, player.pos));

    combat::resolve(&mut player, &mut Vec::new(), &mut room, &mut rng);
    assert_eq!(player.speed_level, 1);
    assert!(room.powerups.is_empty());

    combat::resolve(&mut player, &mut Vec::new(), &mut room, &mut rng);
    assert_eq!(player.speed_level, 1);
}

#[test]
fn multi_shot_pickup_steps_one_three_five() {
    let mut player = Player::new(Vec2::new(400.0, 300.0));
    let pickup = PowerUp::new(PowerUpKind::MultiShot, player.pos);
    pickup.apply(&mut player);
    assert_eq!(player.multi_shot_level, 3);
    pickup.apply(&mut player);
    assert_eq!(player.multi_shot_level, 5);
}

#[test]
fn distant_pickup_is_left_alone() {
    let mut rng = seeded_rng();
    let (mut player, mut room) = arena();
    room.powerups.push(PowerUp::new(PowerUpKind::Piercing, Vec2::new(100.0, 100.0)));

    combat::resolve(&mut player, &mut Vec::new(), &mut room, &mut rng);
    assert_eq!(player.piercing_level, 0);
    assert_eq!(room.powerups.len(), 1);
}
