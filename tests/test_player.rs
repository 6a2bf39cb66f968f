use dungeon_shooter::constants::*;
use dungeon_shooter::geometry::{Aabb, Vec2};
use dungeon_shooter::player::{pellet_angles, Dir, InputFrame, Player};
use dungeon_shooter::room::Wall;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_player() -> Player {
    Player::new(Vec2::new(400.0, 300.0))
}

// ── Pellet cone ───────────────────────────────────────────────────────────────

#[test]
fn single_pellet_flies_straight() {
    assert_eq!(pellet_angles(0.0, 1), vec![0.0]);
}

#[test]
fn three_pellets_cone_45_degrees() {
    // multi level 3: cone = 30 + 5*3 = 45, edges at ±22.5
    let angles = pellet_angles(0.0, 3);
    assert_eq!(angles.len(), 3);
    assert!((angles[0] + 22.5).abs() < 1e-4);
    assert!(angles[1].abs() < 1e-4);
    assert!((angles[2] - 22.5).abs() < 1e-4);
}

#[test]
fn pellet_angles_symmetric_and_increasing() {
    for count in [3u32, 5, 7, 9] {
        let base = 90.0;
        let angles = pellet_angles(base, count);
        assert_eq!(angles.len(), count as usize);
        for pair in angles.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        let cone = 30.0 + 5.0 * count as f32;
        assert!((angles[0] - (base - cone / 2.0)).abs() < 1e-3);
        assert!((angles[count as usize - 1] - (base + cone / 2.0)).abs() < 1e-3);
        // Symmetry around the base angle
        for i in 0..angles.len() {
            let mirror = angles[angles.len() - 1 - i];
            assert!(((angles[i] - base) + (mirror - base)).abs() < 1e-3);
        }
    }
}

#[test]
fn attack_produces_one_projectile_per_pellet() {
    let mut rng = seeded_rng();
    let mut p = make_player();
    p.multi_shot_level = 5;
    let volley = p.attack(Dir::Right, &mut rng);
    assert_eq!(volley.len(), 5);
    assert_eq!(p.attack_cooldown, p.cooldown_frames());
    assert!(!p.can_attack());
}

// ── Attack cooldown ───────────────────────────────────────────────────────────

#[test]
fn base_cooldown_is_18_frames() {
    let p = make_player();
    assert_eq!(p.cooldown_frames(), SHOOT_COOLDOWN);
}

#[test]
fn rapid_fire_shrinks_cooldown_to_floor() {
    let mut p = make_player();
    p.rapid_level = 1;
    assert_eq!(p.cooldown_frames(), 14); // 18 * 0.8
    p.rapid_level = 20;
    assert_eq!(p.cooldown_frames(), MIN_SHOOT_COOLDOWN);
}

// ── Damage and invulnerability ────────────────────────────────────────────────

#[test]
fn damage_opens_iframe_window() {
    let mut p = make_player();
    p.take_damage(3);
    assert_eq!(p.health, PLAYER_MAX_HEALTH - 3);
    assert_eq!(p.invuln_frames, INVULNERABILITY_FRAMES);
}

#[test]
fn damage_within_iframes_is_a_noop() {
    let mut p = make_player();
    p.take_damage(1);
    let after_first = p.health;
    for _ in 0..5 {
        p.take_damage(4);
    }
    assert_eq!(p.health, after_first);
}

#[test]
fn lethal_hit_clamps_at_zero() {
    let mut p = make_player();
    p.health = 1;
    p.take_damage(1);
    assert_eq!(p.health, 0);
    // Dead, not negative, even if hit again inside the window
    p.take_damage(5);
    assert_eq!(p.health, 0);
}

#[test]
fn damage_lands_again_after_iframes_expire() {
    let mut p = make_player();
    let walls: Vec<Wall> = Vec::new();
    let idle = InputFrame::default();
    p.take_damage(1);
    for _ in 0..INVULNERABILITY_FRAMES {
        p.update(&walls, &idle);
    }
    p.take_damage(1);
    assert_eq!(p.health, PLAYER_MAX_HEALTH - 2);
}

#[test]
fn flash_toggles_while_invulnerable_and_clears_after() {
    let mut p = make_player();
    let walls: Vec<Wall> = Vec::new();
    let idle = InputFrame::default();
    p.take_damage(1);

    let mut toggles = 0;
    let mut last = p.is_flashing;
    for _ in 0..INVULNERABILITY_FRAMES {
        p.update(&walls, &idle);
        if p.is_flashing != last {
            toggles += 1;
            last = p.is_flashing;
        }
    }
    assert_eq!(toggles, (INVULNERABILITY_FRAMES / FLASH_INTERVAL) as i32);
    assert!(!p.is_flashing);
}

#[test]
fn heal_clamps_at_max() {
    let mut p = make_player();
    p.health = PLAYER_MAX_HEALTH - 1;
    p.heal(5);
    assert_eq!(p.health, PLAYER_MAX_HEALTH);
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn moves_at_base_speed() {
    let mut p = make_player();
    let walls: Vec<Wall> = Vec::new();
    let input = InputFrame { right: true, ..Default::default() };
    p.update(&walls, &input);
    assert!((p.pos.x - (400.0 + PLAYER_SPEED)).abs() < 1e-4);
    assert!((p.pos.y - 300.0).abs() < 1e-4);
}

#[test]
fn speed_stacks_add_one_each() {
    let mut p = make_player();
    p.speed_level = 2;
    let walls: Vec<Wall> = Vec::new();
    let input = InputFrame { down: true, ..Default::default() };
    p.update(&walls, &input);
    assert!((p.pos.y - (300.0 + PLAYER_SPEED + 2.0)).abs() < 1e-4);
}

#[test]
fn diagonal_input_slides_along_wall() {
    let mut p = make_player();
    // A wall flush against the player's right edge
    let walls = vec![Wall {
        rect: Aabb::new(420, 0, 40, 600),
        is_door: false,
    }];
    let input = InputFrame { right: true, up: true, ..Default::default() };
    p.update(&walls, &input);
    // X move is rolled back, Y move goes through
    assert!((p.pos.x - 400.0).abs() < 1e-4);
    assert!((p.pos.y - (300.0 - PLAYER_SPEED)).abs() < 1e-4);
}

// ── Slow effect ───────────────────────────────────────────────────────────────

#[test]
fn slow_scales_movement() {
    let mut p = make_player();
    p.apply_slow(40, 0.5);
    let walls: Vec<Wall> = Vec::new();
    let input = InputFrame { right: true, ..Default::default() };
    p.update(&walls, &input);
    assert!((p.pos.x - (400.0 + PLAYER_SPEED * 0.5)).abs() < 1e-4);
}

#[test]
fn stronger_slow_wins_weaker_is_ignored() {
    let mut p = make_player();
    p.apply_slow(40, 0.8);
    p.apply_slow(40, 0.55);
    assert!((p.slow_factor - 0.55).abs() < 1e-6);
    p.apply_slow(40, 0.9);
    assert!((p.slow_factor - 0.55).abs() < 1e-6);
}

#[test]
fn slow_expires_back_to_full_speed() {
    let mut p = make_player();
    let walls: Vec<Wall> = Vec::new();
    let idle = InputFrame::default();
    p.apply_slow(3, 0.5);
    for _ in 0..3 {
        p.update(&walls, &idle);
    }
    assert!((p.slow_factor - 1.0).abs() < 1e-6);
    assert_eq!(p.slow_frames, 0);
}
