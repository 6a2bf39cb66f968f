use dungeon_shooter::boss::{create_boss, Boss, BossKind, BossState, SpawnRequest};
use dungeon_shooter::enemy::EnemyKind;
use dungeon_shooter::geometry::Vec2;
use dungeon_shooter::player::Player;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn center() -> Vec2 {
    Vec2::new(400.0, 300.0)
}

fn far_player() -> Player {
    Player::new(Vec2::new(700.0, 500.0))
}

// ── Factory ───────────────────────────────────────────────────────────────────

#[test]
fn factory_wraps_around_the_roster() {
    assert_eq!(create_boss(0, center(), 1, 0).kind, BossKind::MiniCore);
    assert_eq!(create_boss(19, center(), 1, 0).kind, BossKind::OmegaCore);
    assert_eq!(create_boss(20, center(), 1, 0).kind, BossKind::MiniCore);
    assert_eq!(create_boss(21, center(), 1, 0).kind, BossKind::DualBlades);
}

#[test]
fn every_roster_entry_has_a_name() {
    for (i, kind) in BossKind::ALL.iter().enumerate() {
        let boss = create_boss(i as u32, center(), 1, 0);
        assert_eq!(boss.kind, *kind);
        assert!(!boss.name().is_empty());
        assert!(boss.max_health > 0);
    }
}

// ── Stage scaling ─────────────────────────────────────────────────────────────

#[test]
fn first_boss_gets_triple_health() {
    // trunc(8 * 1.15^1) = 9 base, tripled at stage 0 since 1.2^0 = 1
    let boss = create_boss(0, center(), 1, 0);
    assert_eq!(boss.max_health, 27);
    assert_eq!(boss.health, boss.max_health);
}

#[test]
fn later_stages_compound_health() {
    // 9 * 3.0 * 1.2^3 = 46.65, truncated
    let boss = create_boss(0, center(), 1, 3);
    assert_eq!(boss.max_health, 46);
}

#[test]
fn stage_scaling_is_applied_exactly_once() {
    let mut boss = create_boss(0, center(), 1, 2);
    let (hp, contact, pdmg) = (boss.max_health, boss.contact_damage, boss.projectile_damage);
    boss.apply_stage_scaling(2, 1);
    boss.apply_stage_scaling(5, 4);
    assert_eq!(boss.max_health, hp);
    assert_eq!(boss.contact_damage, contact);
    assert_eq!(boss.projectile_damage, pdmg);
}

#[test]
fn stage_scaling_grows_damage() {
    let base = create_boss(16, center(), 1, 0); // Titan
    let scaled = create_boss(16, center(), 1, 4);
    assert!(scaled.contact_damage > base.contact_damage);
    assert!(scaled.projectile_damage > base.projectile_damage);
}

#[test]
fn cooldowns_shrink_with_stage_but_never_below_floor() {
    let relaxed = create_boss(0, center(), 1, 0);
    let pressed = create_boss(0, center(), 1, 10);
    let cd_of = |b: &Boss| match b.state {
        BossState::MiniCore { cooldown, .. } => cooldown,
        _ => unreachable!(),
    };
    assert!(cd_of(&pressed) < cd_of(&relaxed));
    let extreme = create_boss(0, center(), 1, 100);
    assert!(cd_of(&extreme) >= 6);
}

#[test]
fn orbiter_count_caps_at_eight() {
    let boss = create_boss(5, center(), 1, 30); // Orbweaver
    match boss.state {
        BossState::Orbweaver { num_orbiters, .. } => assert!(num_orbiters <= 8),
        _ => unreachable!(),
    }
}

// ── Cadence ───────────────────────────────────────────────────────────────────

#[test]
fn mini_core_fires_once_per_cooldown() {
    let mut rng = seeded_rng();
    let mut player = far_player();
    let mut boss = Boss::new(BossKind::MiniCore, center(), 1);
    let cooldown = match boss.state {
        BossState::MiniCore { cooldown, .. } => cooldown,
        _ => unreachable!(),
    };

    let mut volleys = 0;
    for _ in 0..cooldown * 2 {
        if let SpawnRequest::Shots(shots) = boss.update(&mut player, &mut rng) {
            assert_eq!(shots.len(), 1);
            volleys += 1;
        }
    }
    assert_eq!(volleys, 2);
}

#[test]
fn mini_core_tracks_the_player() {
    let mut rng = seeded_rng();
    let mut player = far_player();
    let mut boss = Boss::new(BossKind::MiniCore, center(), 1);
    let before = boss.pos.distance(player.pos);
    for _ in 0..30 {
        boss.update(&mut player, &mut rng);
    }
    assert!(boss.pos.distance(player.pos) < before);
}

#[test]
fn burster_volley_size_grows_with_difficulty() {
    let mut rng = seeded_rng();
    let mut player = far_player();
    let mut boss = Boss::new(BossKind::Burster, center(), 4);
    // 5 + 4/2 = 7 pellets per volley
    loop {
        if let SpawnRequest::Shots(shots) = boss.update(&mut player, &mut rng) {
            assert_eq!(shots.len(), 7);
            break;
        }
    }
}

#[test]
fn orbweaver_burst_is_radial() {
    let mut rng = seeded_rng();
    let mut player = far_player();
    let mut boss = Boss::new(BossKind::Orbweaver, center(), 1);
    loop {
        if let SpawnRequest::Shots(shots) = boss.update(&mut player, &mut rng) {
            // 6 + (3 + 1/4) orbiters
            assert_eq!(shots.len(), 9);
            break;
        }
    }
}

// ── Intangibility ─────────────────────────────────────────────────────────────

#[test]
fn shielded_warden_shrugs_off_hits() {
    let mut boss = Boss::new(BossKind::Warden, center(), 1);
    boss.state = BossState::Warden {
        timer: 0,
        shield_timer: 10,
        shield_cooldown: 290,
    };
    assert!(boss.intangible());
    let hp = boss.health;
    assert!(!boss.take_hit());
    assert_eq!(boss.health, hp);
}

#[test]
fn phased_phantom_still_takes_hits() {
    // The phase is a render-only fade; only the Warden's shield blocks damage.
    let mut boss = Boss::new(BossKind::Phantom, center(), 1);
    boss.state = BossState::Phantom {
        timer: 0,
        cooldown: 78,
        phased: true,
        phase_timer: 5,
    };
    assert!(!boss.intangible());
    assert!(boss.phasing());
    let hp = boss.health;
    boss.take_hit();
    assert_eq!(boss.health, hp - 1);
}

#[test]
fn warden_shield_drops_after_its_duration() {
    let mut rng = seeded_rng();
    let mut player = far_player();
    let mut boss = Boss::new(BossKind::Warden, center(), 1);
    boss.state = BossState::Warden {
        timer: 0,
        shield_timer: 60,
        shield_cooldown: 290,
    };
    for _ in 0..60 {
        boss.update(&mut player, &mut rng);
    }
    assert!(!boss.intangible());
    assert!(!boss.take_hit());
    assert_eq!(boss.health, boss.max_health - 1);
}

// ── Minion spawns ─────────────────────────────────────────────────────────────

#[test]
fn spawner_produces_toughened_grunts() {
    let mut rng = seeded_rng();
    let mut player = far_player();
    let mut boss = create_boss(12, center(), 1, 5); // Spawner at stage 5
    let mut frames = 0;
    loop {
        frames += 1;
        assert!(frames < 10_000, "spawner never spawned");
        if let SpawnRequest::Minions(minions) = boss.update(&mut player, &mut rng) {
            assert!(!minions.is_empty() && minions.len() <= 2);
            for m in &minions {
                assert_eq!(m.kind, EnemyKind::Grunt);
                // Grunt base 2, times (1 + 0.2*5) = 4
                assert_eq!(m.max_health, 4);
                assert_eq!(m.health, m.max_health);
            }
            break;
        }
    }
}

// ── Health-threshold phases ───────────────────────────────────────────────────

#[test]
fn colossus_escalates_and_never_deescalates() {
    let mut rng = seeded_rng();
    let mut player = far_player();
    let mut boss = Boss::new(BossKind::Colossus, center(), 1);

    boss.health = boss.max_health / 2; // below 0.66
    boss.update(&mut player, &mut rng);
    assert!(matches!(boss.state, BossState::Colossus { phase: 2, .. }));

    boss.health = boss.max_health / 4; // below 0.33
    boss.update(&mut player, &mut rng);
    assert!(matches!(boss.state, BossState::Colossus { phase: 3, .. }));

    // Healing back up must not drop the phase
    boss.health = boss.max_health;
    boss.update(&mut player, &mut rng);
    assert!(matches!(boss.state, BossState::Colossus { phase: 3, .. }));
}

#[test]
fn omega_core_cycles_through_phases() {
    let mut rng = seeded_rng();
    let mut player = far_player();
    let mut boss = Boss::new(BossKind::OmegaCore, center(), 1);

    let mut saw_shots = false;
    let mut saw_minions = false;
    for _ in 0..400 {
        match boss.update(&mut player, &mut rng) {
            SpawnRequest::Shots(_) => saw_shots = true,
            SpawnRequest::Minions(m) => {
                saw_minions = true;
                assert!(m.iter().all(|e| e.kind == EnemyKind::Shooter));
            }
            SpawnRequest::None => {}
        }
    }
    assert!(saw_shots);
    assert!(saw_minions);
}

// ── Auras ─────────────────────────────────────────────────────────────────────

#[test]
fn frost_king_slows_a_player_inside_the_aura() {
    let mut rng = seeded_rng();
    let mut boss = Boss::new(BossKind::FrostKing, center(), 1);

    let mut near = Player::new(Vec2::new(420.0, 300.0));
    boss.update(&mut near, &mut rng);
    assert!((near.slow_factor - 0.55).abs() < 1e-6);
    assert_eq!(near.slow_frames, 40);

    let mut far = Player::new(Vec2::new(700.0, 500.0));
    let mut boss2 = Boss::new(BossKind::FrostKing, center(), 1);
    boss2.update(&mut far, &mut rng);
    assert!((far.slow_factor - 1.0).abs() < 1e-6);
}
