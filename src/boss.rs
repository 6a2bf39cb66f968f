//! The boss roster: 20 timer-driven attack-pattern state machines behind one
//! `Boss` value. Each variant keeps its own counters in a `BossState` arm and
//! is driven by `Boss::update`, which returns whatever the pattern spawned
//! this frame. A shared stage-scaling step amplifies stats once per instance
//! as the player defeats more bosses.

use rand::Rng;

use crate::constants::{ARENA_H, ARENA_W, ENEMY_SIZE};
use crate::enemy::{Enemy, EnemyKind};
use crate::geometry::{Aabb, Vec2};
use crate::player::Player;
use crate::projectile::EnemyShot;

const HIT_FLASH_FRAMES: u32 = 15;
const SHIELD_FLASH_FRAMES: u32 = 6;

const DASH_DURATION: u32 = 18;
const CHARGE_DURATION: u32 = 16;
const SHIELD_DURATION: u32 = 60;
const STREAM_DURATION: u32 = 60;
const STREAM_IDLE: u32 = 120;
const PHASE_DURATION: u32 = 40;
const PHASE_COOLDOWN: u32 = 120;

// ── Roster ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossKind {
    MiniCore,
    DualBlades,
    Burster,
    Crawler,
    Sentinel,
    Orbweaver,
    Sprinter,
    Warden,
    Bomber,
    PhaseWalker,
    Cycler,
    Shifter,
    Spawner,
    Blazer,
    FrostKing,
    Stormer,
    Titan,
    Phantom,
    Colossus,
    OmegaCore,
}

impl BossKind {
    pub const ALL: [BossKind; 20] = [
        BossKind::MiniCore,
        BossKind::DualBlades,
        BossKind::Burster,
        BossKind::Crawler,
        BossKind::Sentinel,
        BossKind::Orbweaver,
        BossKind::Sprinter,
        BossKind::Warden,
        BossKind::Bomber,
        BossKind::PhaseWalker,
        BossKind::Cycler,
        BossKind::Shifter,
        BossKind::Spawner,
        BossKind::Blazer,
        BossKind::FrostKing,
        BossKind::Stormer,
        BossKind::Titan,
        BossKind::Phantom,
        BossKind::Colossus,
        BossKind::OmegaCore,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BossKind::MiniCore => "Mini Core",
            BossKind::DualBlades => "Dual Blades",
            BossKind::Burster => "Burster",
            BossKind::Crawler => "Crawler",
            BossKind::Sentinel => "Sentinel",
            BossKind::Orbweaver => "Orbweaver",
            BossKind::Sprinter => "Sprinter",
            BossKind::Warden => "Warden",
            BossKind::Bomber => "Bomber",
            BossKind::PhaseWalker => "Phase Walker",
            BossKind::Cycler => "Cycler",
            BossKind::Shifter => "Shifter",
            BossKind::Spawner => "Spawner",
            BossKind::Blazer => "Blazer",
            BossKind::FrostKing => "Frost King",
            BossKind::Stormer => "Stormer",
            BossKind::Titan => "Titan",
            BossKind::Phantom => "Phantom",
            BossKind::Colossus => "Colossus",
            BossKind::OmegaCore => "Omega Core",
        }
    }

    /// Base health before stage scaling: `base * growth^difficulty`.
    fn base_health(self, difficulty: u32) -> i32 {
        let (base, growth) = match self {
            BossKind::MiniCore => (8.0, 1.15),
            BossKind::DualBlades => (20.0, 1.25),
            BossKind::Burster => (18.0, 1.20),
            BossKind::Crawler => (22.0, 1.18),
            BossKind::Sentinel => (28.0, 1.22),
            BossKind::Orbweaver => (24.0, 1.20),
            BossKind::Sprinter => (16.0, 1.18),
            BossKind::Warden => (32.0, 1.25),
            BossKind::Bomber => (26.0, 1.20),
            BossKind::PhaseWalker => (20.0, 1.20),
            BossKind::Cycler => (30.0, 1.20),
            BossKind::Shifter => (22.0, 1.18),
            BossKind::Spawner => (26.0, 1.22),
            BossKind::Blazer => (24.0, 1.20),
            BossKind::FrostKing => (28.0, 1.20),
            BossKind::Stormer => (26.0, 1.22),
            BossKind::Titan => (45.0, 1.28),
            BossKind::Phantom => (18.0, 1.18),
            BossKind::Colossus => (60.0, 1.25),
            BossKind::OmegaCore => (80.0, 1.30),
        };
        ((base * f32::powi(growth, difficulty as i32)) as i32).max(1)
    }

    fn projectile_damage(self) -> i32 {
        match self {
            BossKind::Bomber | BossKind::Colossus => 2,
            BossKind::Titan | BossKind::OmegaCore => 3,
            _ => 1,
        }
    }

    /// Bounding-box side length. Flavour sizes from the roster, squared off.
    fn size(self) -> i32 {
        let factor = match self {
            BossKind::MiniCore => 1.2,
            BossKind::DualBlades => 1.8,
            BossKind::Burster => 2.2,
            BossKind::Crawler => 2.2,
            BossKind::Sentinel => 2.6,
            BossKind::Orbweaver => 2.2,
            BossKind::Sprinter => 1.8,
            BossKind::Warden => 2.8,
            BossKind::Bomber => 2.4,
            BossKind::PhaseWalker => 2.0,
            BossKind::Cycler => 2.6,
            BossKind::Shifter => 2.4,
            BossKind::Spawner => 2.4,
            BossKind::Blazer => 2.0,
            BossKind::FrostKing => 3.2,
            BossKind::Stormer => 2.6,
            BossKind::Titan => 3.6,
            BossKind::Phantom => 2.4,
            BossKind::Colossus => 3.2,
            BossKind::OmegaCore => 3.8,
        };
        (ENEMY_SIZE as f32 * factor) as i32
    }
}

// ── Spawn result ──────────────────────────────────────────────────────────────

/// What a boss pattern produced this frame. The room classifies the result
/// and routes it into the right container.
#[derive(Debug)]
pub enum SpawnRequest {
    None,
    Shots(Vec<EnemyShot>),
    Minions(Vec<Enemy>),
}

// ── Per-variant state machines ────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub enum BossState {
    MiniCore {
        timer: u32,
        cooldown: u32,
        speed: f32,
    },
    DualBlades {
        dash_timer: u32,
        dash_cooldown: u32,
        dash_speed: f32,
        dashing: bool,
        dash_dir: Vec2,
        dash_tick: u32,
    },
    Burster {
        timer: u32,
        cooldown: u32,
        shots: u32,
    },
    Crawler {
        timer: u32,
        cooldown: u32,
        patrol_dir: f32,
        patrol_speed: f32,
    },
    Sentinel {
        timer: u32,
        cooldown: u32,
    },
    Orbweaver {
        timer: u32,
        cooldown: u32,
        num_orbiters: u32,
    },
    Sprinter {
        charge_timer: u32,
        charge_cooldown: u32,
        charge_speed: f32,
        charging: bool,
        charge_dir: Vec2,
        charge_tick: u32,
    },
    Warden {
        timer: u32,
        shield_timer: u32,
        shield_cooldown: u32,
    },
    Bomber {
        timer: u32,
        drop_cooldown: u32,
    },
    PhaseWalker {
        tp_timer: u32,
        tp_cooldown: u32,
    },
    Cycler {
        timer: u32,
        cooldown: u32,
        rotor: f32,
    },
    Shifter {
        timer: u32,
        change_cooldown: u32,
    },
    Spawner {
        timer: u32,
        spawn_cooldown: u32,
    },
    Blazer {
        timer: u32,
        stream_rate: u32,
        stream_active: bool,
        stream_tick: u32,
    },
    FrostKing {
        timer: u32,
        freeze_radius: f32,
    },
    Stormer {
        timer: u32,
        chain_rate: u32,
    },
    Titan {
        timer: u32,
        cooldown: u32,
    },
    Phantom {
        timer: u32,
        cooldown: u32,
        phased: bool,
        phase_timer: u32,
    },
    Colossus {
        timer: u32,
        phase: u8,
    },
    OmegaCore {
        timer: u32,
        phase_timer: u32,
        phase: u8,
    },
}

impl BossState {
    fn new(kind: BossKind, d: u32) -> Self {
        match kind {
            BossKind::MiniCore => BossState::MiniCore {
                timer: 0,
                cooldown: (90u32.saturating_sub(4 * d)).max(40),
                speed: 0.6 + 0.02 * d as f32,
            },
            BossKind::DualBlades => BossState::DualBlades {
                dash_timer: 0,
                dash_cooldown: (160u32.saturating_sub(6 * d)).max(60),
                dash_speed: 10.0 + 0.6 * d as f32,
                dashing: false,
                dash_dir: Vec2::ZERO,
                dash_tick: 0,
            },
            BossKind::Burster => BossState::Burster {
                timer: 0,
                cooldown: (85u32.saturating_sub(3 * d)).max(30),
                shots: 5 + d / 2,
            },
            BossKind::Crawler => BossState::Crawler {
                timer: 0,
                cooldown: (120u32.saturating_sub(2 * d)).max(20),
                patrol_dir: 1.0,
                patrol_speed: 2.0 + 0.1 * d as f32,
            },
            BossKind::Sentinel => BossState::Sentinel {
                timer: 0,
                cooldown: (70u32.saturating_sub(2 * d)).max(25),
            },
            BossKind::Orbweaver => BossState::Orbweaver {
                timer: 0,
                cooldown: (90u32.saturating_sub(3 * d)).max(40),
                num_orbiters: 3 + d / 4,
            },
            BossKind::Sprinter => BossState::Sprinter {
                charge_timer: 0,
                charge_cooldown: (140u32.saturating_sub(5 * d)).max(40),
                charge_speed: 12.0 + 0.6 * d as f32,
                charging: false,
                charge_dir: Vec2::ZERO,
                charge_tick: 0,
            },
            BossKind::Warden => BossState::Warden {
                timer: 0,
                shield_timer: 0,
                shield_cooldown: (300u32.saturating_sub(10 * d)).max(120),
            },
            BossKind::Bomber => BossState::Bomber {
                timer: 0,
                drop_cooldown: (140u32.saturating_sub(4 * d)).max(40),
            },
            BossKind::PhaseWalker => BossState::PhaseWalker {
                tp_timer: 0,
                tp_cooldown: (150u32.saturating_sub(4 * d)).max(60),
            },
            BossKind::Cycler => BossState::Cycler {
                timer: 0,
                cooldown: (50u32.saturating_sub(2 * d)).max(20),
                rotor: 0.0,
            },
            BossKind::Shifter => BossState::Shifter {
                timer: 0,
                change_cooldown: (200u32.saturating_sub(6 * d)).max(80),
            },
            BossKind::Spawner => BossState::Spawner {
                timer: 0,
                spawn_cooldown: (160u32.saturating_sub(6 * d)).max(60),
            },
            BossKind::Blazer => BossState::Blazer {
                timer: 0,
                stream_rate: (12u32.saturating_sub(d)).max(4),
                stream_active: false,
                stream_tick: 0,
            },
            BossKind::FrostKing => BossState::FrostKing {
                timer: 0,
                freeze_radius: 100.0 + 5.0 * d as f32,
            },
            BossKind::Stormer => BossState::Stormer {
                timer: 0,
                chain_rate: (110u32.saturating_sub(4 * d)).max(40),
            },
            BossKind::Titan => BossState::Titan {
                timer: 0,
                cooldown: (140u32.saturating_sub(3 * d)).max(50),
            },
            BossKind::Phantom => BossState::Phantom {
                timer: 0,
                cooldown: (80u32.saturating_sub(2 * d)).max(30),
                phased: false,
                phase_timer: 0,
            },
            BossKind::Colossus => BossState::Colossus { timer: 0, phase: 1 },
            BossKind::OmegaCore => BossState::OmegaCore {
                timer: 0,
                phase_timer: 0,
                phase: 0,
            },
        }
    }

    /// Stage amplification of variant timers: shoot-like cooldowns shrink
    /// (floored at 6 frames), movement speeds grow, orbiter counts grow
    /// (capped), minion spawn cooldowns shrink (floored at 20 frames).
    fn apply_stage_scaling(&mut self, stage: u32) {
        let cd_mul = (1.0 - 0.04 * stage as f32).max(0.4);
        let spd_mul = 1.0 + 0.03 * stage as f32;
        let spawn_mul = (1.0 - 0.03 * stage as f32).max(0.45);
        let shrink = |cd: &mut u32| *cd = ((*cd as f32 * cd_mul) as u32).max(6);

        match self {
            BossState::MiniCore { cooldown, speed, .. } => {
                shrink(cooldown);
                *speed *= spd_mul;
            }
            BossState::DualBlades { dash_speed, .. } => *dash_speed *= spd_mul,
            BossState::Burster { cooldown, .. } => shrink(cooldown),
            BossState::Crawler { cooldown, patrol_speed, .. } => {
                shrink(cooldown);
                *patrol_speed *= spd_mul;
            }
            BossState::Sentinel { cooldown, .. } => shrink(cooldown),
            BossState::Orbweaver { cooldown, num_orbiters, .. } => {
                shrink(cooldown);
                *num_orbiters = (*num_orbiters + stage / 3).min(8);
            }
            BossState::Sprinter { charge_speed, .. } => *charge_speed *= spd_mul,
            BossState::Cycler { cooldown, .. } => shrink(cooldown),
            BossState::Spawner { spawn_cooldown, .. } => {
                *spawn_cooldown = ((*spawn_cooldown as f32 * spawn_mul) as u32).max(20);
            }
            BossState::Titan { cooldown, .. } => shrink(cooldown),
            BossState::Phantom { cooldown, .. } => shrink(cooldown),
            _ => {}
        }
    }
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Boss {
    pub kind: BossKind,
    pub pos: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub contact_damage: i32,
    pub projectile_damage: i32,
    pub flash_frames: u32,
    /// Frames since spawn, used by hover/wobble motion.
    pub age: u64,
    /// How many bosses were defeated before this one (0-based).
    pub stage: u32,
    pub scaled: bool,
    pub state: BossState,
}

impl Boss {
    pub fn new(kind: BossKind, pos: Vec2, difficulty: u32) -> Self {
        let hp = kind.base_health(difficulty);
        let mut pos = pos;
        // The crawler patrols a lane below the room centre.
        if kind == BossKind::Crawler {
            pos.y += 100.0;
        }
        Boss {
            kind,
            pos,
            health: hp,
            max_health: hp,
            contact_damage: 2,
            projectile_damage: kind.projectile_damage(),
            flash_frames: 0,
            age: 0,
            stage: 0,
            scaled: false,
            state: BossState::new(kind, difficulty),
        }
    }

    pub fn bounds(&self) -> Aabb {
        let size = self.kind.size();
        Aabb::from_center(self.pos, size, size)
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// One-time amplification applied right after construction. Multiplies
    /// rather than sets, so a second call must be (and is) a no-op.
    pub fn apply_stage_scaling(&mut self, stage: u32, difficulty: u32) {
        if self.scaled {
            return;
        }
        self.scaled = true;
        self.stage = stage;

        let strength = 3.0 * f32::powi(1.2, stage as i32);
        self.max_health = ((self.max_health as f32 * strength) as i32).max(1);
        self.health = self.max_health;

        let d = difficulty.max(1) as f32 - 1.0;
        self.contact_damage = ((self.contact_damage as f32
            * f32::powi(1.15, stage as i32)
            * (1.0 + 0.08 * d)) as i32)
            .max(1);
        self.projectile_damage = ((self.projectile_damage as f32
            * f32::powi(1.2, stage as i32)
            * (1.0 + 0.05 * d)) as i32)
            .max(1);

        self.state.apply_stage_scaling(stage);
    }

    /// Whether hits currently bounce off. Only the Warden's shield blocks
    /// damage; the Phantom's phase is a cosmetic fade.
    pub fn intangible(&self) -> bool {
        match self.state {
            BossState::Warden { shield_timer, .. } => shield_timer > 0,
            _ => false,
        }
    }

    /// Render-only fade state (Phantom). Hits still land while phased.
    pub fn phasing(&self) -> bool {
        matches!(self.state, BossState::Phantom { phased: true, .. })
    }

    /// One hit of damage, unless shielded. Reports death; the caller
    /// removes the boss and banks the score.
    pub fn take_hit(&mut self) -> bool {
        if self.intangible() {
            self.flash_frames = SHIELD_FLASH_FRAMES;
            return false;
        }
        self.health -= 1;
        self.flash_frames = HIT_FLASH_FRAMES;
        self.health <= 0
    }

    /// Advance the variant's state machine one frame. May move the boss,
    /// apply auras to the player, and return spawned shots or minions.
    pub fn update(&mut self, player: &mut Player, rng: &mut impl Rng) -> SpawnRequest {
        self.age += 1;
        self.flash_frames = self.flash_frames.saturating_sub(1);

        let pos = self.pos;
        let player_pos = player.pos;
        let pdmg = self.projectile_damage;
        let stage = self.stage;
        let age = self.age as f32;

        match &mut self.state {
            // Slowly tracks the player, fires a single aimed shot on cooldown.
            BossState::MiniCore { timer, cooldown, speed } => {
                self.pos += pos.dir_toward(player_pos) * *speed;
                *timer += 1;
                if *timer >= *cooldown {
                    *timer = 0;
                    return SpawnRequest::Shots(vec![EnemyShot::aimed(self.pos, player_pos, pdmg)]);
                }
                SpawnRequest::None
            }

            // Creeps, then commits to a straight dash at the player's last
            // position. No projectiles; contact damage does the work.
            BossState::DualBlades {
                dash_timer,
                dash_cooldown,
                dash_speed,
                dashing,
                dash_dir,
                dash_tick,
            } => {
                *dash_timer += 1;
                if *dashing {
                    *dash_tick += 1;
                    self.pos += *dash_dir * *dash_speed;
                    if *dash_tick >= DASH_DURATION {
                        *dashing = false;
                        *dash_tick = 0;
                    }
                    return SpawnRequest::None;
                }
                self.pos += pos.dir_toward(player_pos) * 1.0;
                if *dash_timer >= *dash_cooldown {
                    *dash_timer = 0;
                    *dash_dir = self.pos.dir_toward(player_pos);
                    *dashing = true;
                    *dash_tick = 0;
                }
                SpawnRequest::None
            }

            // Aimed shotgun spread, 40 degrees wide.
            BossState::Burster { timer, cooldown, shots } => {
                *timer += 1;
                if *timer >= *cooldown {
                    *timer = 0;
                    let base = pos.angle_toward(player_pos);
                    let n = *shots;
                    if n <= 1 {
                        return SpawnRequest::Shots(vec![EnemyShot::aimed(pos, player_pos, pdmg)]);
                    }
                    let spread = 40.0;
                    let start = base - spread / 2.0;
                    let step = spread / (n - 1) as f32;
                    let volley = (0..n)
                        .map(|i| EnemyShot::angled(pos, start + step * i as f32, pdmg))
                        .collect();
                    return SpawnRequest::Shots(volley);
                }
                SpawnRequest::None
            }

            // Patrols a horizontal lane; periodic 3-shot heavy volley.
            BossState::Crawler {
                timer,
                cooldown,
                patrol_dir,
                patrol_speed,
            } => {
                self.pos.x += *patrol_speed * *patrol_dir;
                let half = self.kind.size() as f32 / 2.0;
                if self.pos.x - half < 60.0 || self.pos.x + half > ARENA_W - 60.0 {
                    *patrol_dir = -*patrol_dir;
                }
                *timer += 1;
                if *timer >= *cooldown {
                    *timer = 0;
                    let base = self.pos.angle_toward(player_pos);
                    let volley = [-10.0, 0.0, 10.0]
                        .iter()
                        .map(|a| EnemyShot::angled(self.pos, base + a, pdmg + 1))
                        .collect();
                    return SpawnRequest::Shots(volley);
                }
                SpawnRequest::None
            }

            // Hovers in place, volleys of aimed shots that grow with stage.
            BossState::Sentinel { timer, cooldown } => {
                self.pos.x += (age * 0.06).sin() * 1.2;
                self.pos.y += (age * 0.06).cos() * 1.0;
                *timer += 1;
                if *timer >= *cooldown {
                    *timer = 0;
                    let count = 2 + stage / 3;
                    let volley = (0..count)
                        .map(|_| EnemyShot::aimed(self.pos, player_pos, pdmg))
                        .collect();
                    return SpawnRequest::Shots(volley);
                }
                SpawnRequest::None
            }

            // Radial burst sized by the orbiter count.
            BossState::Orbweaver { timer, cooldown, num_orbiters } => {
                *timer += 1;
                if *timer >= *cooldown {
                    *timer = 0;
                    let count = 6 + *num_orbiters;
                    let volley = (0..count)
                        .map(|i| EnemyShot::angled(pos, i as f32 * (360.0 / count as f32), pdmg))
                        .collect();
                    return SpawnRequest::Shots(volley);
                }
                SpawnRequest::None
            }

            // Repeated commit-then-execute charges.
            BossState::Sprinter {
                charge_timer,
                charge_cooldown,
                charge_speed,
                charging,
                charge_dir,
                charge_tick,
            } => {
                *charge_timer += 1;
                if *charging {
                    *charge_tick += 1;
                    self.pos += *charge_dir * *charge_speed;
                    if *charge_tick >= CHARGE_DURATION {
                        *charging = false;
                        *charge_tick = 0;
                    }
                } else {
                    self.pos.x += (age * 0.12).sin() * 1.0;
                }
                if *charge_timer >= *charge_cooldown {
                    *charge_timer = 0;
                    *charge_dir = self.pos.dir_toward(player_pos);
                    *charging = true;
                    *charge_tick = 0;
                }
                SpawnRequest::None
            }

            // Cycles a 60-frame invulnerable shield; leaks radial bullets
            // while shielded, single aimed shots otherwise.
            BossState::Warden {
                timer,
                shield_timer,
                shield_cooldown,
            } => {
                *timer += 1;
                if *shield_timer > 0 {
                    *shield_timer -= 1;
                    if *timer % 8 == 0 {
                        let volley = (0..6)
                            .map(|i| EnemyShot::angled(pos, i as f32 * 60.0, pdmg))
                            .collect();
                        return SpawnRequest::Shots(volley);
                    }
                } else {
                    if *timer >= *shield_cooldown {
                        *timer = 0;
                        *shield_timer = SHIELD_DURATION;
                        return SpawnRequest::None;
                    }
                    if *timer % 50 == 0 {
                        return SpawnRequest::Shots(vec![EnemyShot::aimed(pos, player_pos, pdmg)]);
                    }
                }
                SpawnRequest::None
            }

            // Drops heavy bombs that fall roughly downward.
            BossState::Bomber { timer, drop_cooldown } => {
                *timer += 1;
                if *timer >= *drop_cooldown {
                    *timer = 0;
                    let angle = 90.0 + rng.gen_range(-10.0..10.0);
                    let origin = Vec2::new(pos.x + rng.gen_range(-20..=20) as f32, pos.y);
                    return SpawnRequest::Shots(vec![EnemyShot::angled(origin, angle, pdmg + 1)]);
                }
                SpawnRequest::None
            }

            // Teleports to a random in-bounds point, then fires a jittered
            // burst from the new position.
            BossState::PhaseWalker { tp_timer, tp_cooldown } => {
                *tp_timer += 1;
                if *tp_timer >= *tp_cooldown {
                    *tp_timer = 0;
                    self.pos = Vec2::new(
                        rng.gen_range(100..=(ARENA_W as i32 - 100)) as f32,
                        rng.gen_range(100..=(ARENA_H as i32 - 100)) as f32,
                    );
                    let base = self.pos.angle_toward(player_pos);
                    let burst = (0..3)
                        .map(|_| {
                            EnemyShot::angled(self.pos, base + rng.gen_range(-20.0..20.0), pdmg)
                        })
                        .collect();
                    return SpawnRequest::Shots(burst);
                }
                SpawnRequest::None
            }

            // A rotor advances every frame; volleys are offset by it so the
            // bullet pattern spirals.
            BossState::Cycler { timer, cooldown, rotor } => {
                *timer += 1;
                *rotor = (*rotor + 6.0) % 360.0;
                if *timer >= *cooldown {
                    *timer = 0;
                    let base = *rotor;
                    let volley = (0..6)
                        .map(|i| EnemyShot::angled(pos, base + i as f32 * 60.0, pdmg))
                        .collect();
                    return SpawnRequest::Shots(volley);
                }
                SpawnRequest::None
            }

            // Picks a random form on cooldown and fires that form's pattern.
            BossState::Shifter { timer, change_cooldown } => {
                *timer += 1;
                if *timer >= *change_cooldown {
                    *timer = 0;
                    match rng.gen_range(0..4) {
                        0 => {
                            return SpawnRequest::Shots(vec![EnemyShot::aimed(
                                pos, player_pos, pdmg + 1,
                            )])
                        }
                        1 => {
                            let volley = (0..8)
                                .map(|i| EnemyShot::angled(pos, i as f32 * 45.0, pdmg))
                                .collect();
                            return SpawnRequest::Shots(volley);
                        }
                        2 => {
                            let at = Vec2::new(
                                pos.x + rng.gen_range(-30..=30) as f32,
                                pos.y + rng.gen_range(-30..=30) as f32,
                            );
                            return SpawnRequest::Minions(vec![Enemy::new(
                                EnemyKind::Grunt,
                                at,
                                rng,
                            )]);
                        }
                        _ => {
                            let base = pos.angle_toward(player_pos);
                            let volley = [-10.0, 0.0, 10.0]
                                .iter()
                                .map(|a| EnemyShot::angled(pos, base + a, pdmg))
                                .collect();
                            return SpawnRequest::Shots(volley);
                        }
                    }
                }
                SpawnRequest::None
            }

            // Periodically spawns one or two grunts near itself, toughened
            // by the boss stage.
            BossState::Spawner { timer, spawn_cooldown } => {
                *timer += 1;
                if *timer >= *spawn_cooldown {
                    *timer = 0;
                    let count = if rng.gen::<f32>() < 0.4 { 2 } else { 1 };
                    let minions = (0..count)
                        .map(|_| {
                            let at = Vec2::new(
                                pos.x + rng.gen_range(-60..=60) as f32,
                                pos.y + rng.gen_range(-60..=60) as f32,
                            );
                            let mut e = Enemy::new(EnemyKind::Grunt, at, rng);
                            toughen_minion(&mut e, stage);
                            e
                        })
                        .collect();
                    return SpawnRequest::Minions(minions);
                }
                SpawnRequest::None
            }

            // Idles, then vents a 60-frame stream of fast small shots.
            BossState::Blazer {
                timer,
                stream_rate,
                stream_active,
                stream_tick,
            } => {
                *timer += 1;
                if !*stream_active && *timer >= STREAM_IDLE {
                    *stream_active = true;
                    *stream_tick = 0;
                    *timer = 0;
                }
                if *stream_active {
                    *stream_tick += 1;
                    if *stream_tick % *stream_rate == 0 {
                        let origin = Vec2::new(pos.x + rng.gen_range(-10..=10) as f32, pos.y);
                        return SpawnRequest::Shots(vec![EnemyShot::aimed(
                            origin, player_pos, pdmg,
                        )]);
                    }
                    if *stream_tick >= STREAM_DURATION {
                        *stream_active = false;
                    }
                }
                SpawnRequest::None
            }

            // Chill aura: slows the player inside the radius every frame,
            // independent of the shard volley cadence.
            BossState::FrostKing { timer, freeze_radius } => {
                if player_pos.distance(pos) <= *freeze_radius {
                    player.apply_slow(40, 0.55);
                }
                *timer += 1;
                if *timer >= 80 {
                    *timer = 0;
                    let base = pos.angle_toward(player_pos);
                    let volley = [-12.0, 0.0, 12.0]
                        .iter()
                        .map(|a| EnemyShot::angled(pos, base + a, pdmg))
                        .collect();
                    return SpawnRequest::Shots(volley);
                }
                SpawnRequest::None
            }

            // Chain-lightning feel: a clump of jittered near-aimed shots.
            BossState::Stormer { timer, chain_rate } => {
                *timer += 1;
                if *timer >= *chain_rate {
                    *timer = 0;
                    let volley = (0..6)
                        .map(|_| {
                            let origin = Vec2::new(
                                pos.x + rng.gen_range(-20..=20) as f32,
                                pos.y + rng.gen_range(-20..=20) as f32,
                            );
                            let angle =
                                pos.angle_toward(player_pos) + rng.gen_range(-25.0..25.0);
                            EnemyShot::angled(origin, angle, pdmg)
                        })
                        .collect();
                    return SpawnRequest::Shots(volley);
                }
                SpawnRequest::None
            }

            // Massive, immobile, one very heavy shot at a time.
            BossState::Titan { timer, cooldown } => {
                *timer += 1;
                if *timer >= *cooldown {
                    *timer = 0;
                    return SpawnRequest::Shots(vec![EnemyShot::aimed(
                        pos,
                        player_pos,
                        pdmg + 2,
                    )]);
                }
                SpawnRequest::None
            }

            // Fades out on a cycle, jitter-teleporting while phased; the
            // fade is purely visual. Fires paired offset bolts on its own
            // cadence.
            BossState::Phantom {
                timer,
                cooldown,
                phased,
                phase_timer,
            } => {
                *timer += 1;
                if *timer >= PHASE_COOLDOWN {
                    *timer = 0;
                    *phased = true;
                    *phase_timer = 0;
                }
                if *phased {
                    *phase_timer += 1;
                    if *phase_timer % 10 == 0 {
                        self.pos.x += rng.gen_range(-40..=40) as f32;
                        self.pos.y += rng.gen_range(-30..=30) as f32;
                    }
                    if *phase_timer >= PHASE_DURATION {
                        *phased = false;
                        *phase_timer = 0;
                    }
                }
                if *timer % *cooldown == 0 {
                    let base = self.pos.angle_toward(player_pos);
                    return SpawnRequest::Shots(vec![
                        EnemyShot::angled(self.pos, base - 6.0, pdmg),
                        EnemyShot::angled(self.pos, base + 6.0, pdmg),
                    ]);
                }
                SpawnRequest::None
            }

            // Health-threshold phases; each escalation is permanent.
            BossState::Colossus { timer, phase } => {
                *timer += 1;
                let ratio = self.health as f32 / self.max_health as f32;
                if ratio < 0.66 && *phase == 1 {
                    *phase = 2;
                }
                if ratio < 0.33 && *phase == 2 {
                    *phase = 3;
                }
                match *phase {
                    1 if *timer % 90 == 0 => SpawnRequest::Shots(vec![EnemyShot::aimed(
                        pos,
                        player_pos,
                        pdmg + 1,
                    )]),
                    2 if *timer % 60 == 0 => {
                        let base = pos.angle_toward(player_pos);
                        SpawnRequest::Shots(
                            [-12.0, 0.0, 12.0]
                                .iter()
                                .map(|a| EnemyShot::angled(pos, base + a, pdmg + 1))
                                .collect(),
                        )
                    }
                    3 if *timer % 40 == 0 => SpawnRequest::Shots(
                        (0..12)
                            .map(|i| EnemyShot::angled(pos, i as f32 * 30.0, pdmg + 1))
                            .collect(),
                    ),
                    _ => SpawnRequest::None,
                }
            }

            // The finale: rotates through radial barrage, shooter minions,
            // and a targeted nano-storm on a 120-frame cycle.
            BossState::OmegaCore {
                timer,
                phase_timer,
                phase,
            } => {
                *timer += 1;
                *phase_timer += 1;
                if *phase_timer >= 120 {
                    *phase_timer = 0;
                    *phase = (*phase + 1) % 3;
                }
                match *phase {
                    0 if *timer % 40 == 0 => SpawnRequest::Shots(
                        (0..16)
                            .map(|i| EnemyShot::angled(pos, i as f32 * 22.5, pdmg))
                            .collect(),
                    ),
                    1 if *timer % 90 == 0 => {
                        let count = 2 + stage / 3;
                        let minions = (0..count)
                            .map(|_| {
                                let at = Vec2::new(
                                    pos.x + rng.gen_range(-80..=80) as f32,
                                    pos.y + rng.gen_range(-80..=80) as f32,
                                );
                                let mut e = Enemy::new(EnemyKind::Shooter, at, rng);
                                toughen_minion(&mut e, stage);
                                e
                            })
                            .collect();
                        SpawnRequest::Minions(minions)
                    }
                    2 if *timer % 20 == 0 => {
                        let count = 3 + stage / 2;
                        let storm = (0..count)
                            .map(|_| {
                                let origin = Vec2::new(
                                    pos.x + rng.gen_range(-20..=20) as f32,
                                    pos.y + rng.gen_range(-20..=20) as f32,
                                );
                                EnemyShot::aimed(origin, player_pos, pdmg)
                            })
                            .collect();
                        SpawnRequest::Shots(storm)
                    }
                    _ => SpawnRequest::None,
                }
            }
        }
    }
}

/// Boss-spawned minions get tougher with the boss stage.
fn toughen_minion(e: &mut Enemy, stage: u32) {
    e.max_health = ((e.max_health as f32 * (1.0 + stage as f32 * 0.2)) as i32).max(1);
    e.health = e.max_health;
}

/// Deterministic-by-index boss selection: `index` wraps around the ordered
/// roster, then stage scaling is applied exactly once.
pub fn create_boss(index: u32, pos: Vec2, difficulty: u32, stage: u32) -> Boss {
    let kind = BossKind::ALL[(index as usize) % BossKind::ALL.len()];
    let mut boss = Boss::new(kind, pos, difficulty);
    boss.apply_stage_scaling(stage, difficulty);
    boss
}
