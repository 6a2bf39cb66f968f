//! Point/vector arithmetic and axis-aligned boxes. Positions are float
//! (sub-pixel); bounding boxes are integer and derived from position each
//! frame, matching how the sim resolves collisions.

use std::ops::{Add, AddAssign, Mul, Sub};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector from `self` toward `target`. The divisor is clamped to 1
    /// so two co-located points yield a short (or zero) step instead of NaN.
    pub fn dir_toward(self, target: Vec2) -> Vec2 {
        let d = target - self;
        let dist = d.length().max(1.0);
        Vec2::new(d.x / dist, d.y / dist)
    }

    /// Angle of the vector from `self` to `target`, in degrees.
    /// Screen convention: y grows downward, so "up" is -90.
    pub fn angle_toward(self, target: Vec2) -> f32 {
        let d = target - self;
        d.y.atan2(d.x).to_degrees()
    }
}

/// Unit vector for an angle in degrees (screen convention, y down).
pub fn angle_to_vec(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// Integer axis-aligned box, top-left anchored. Edges are exclusive: two
/// boxes that merely touch do not overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Aabb {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Aabb { x, y, w, h }
    }

    pub fn from_center(center: Vec2, w: i32, h: i32) -> Self {
        Aabb {
            x: center.x as i32 - w / 2,
            y: center.y as i32 - h / 2,
            w,
            h,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.x + self.w / 2) as f32,
            (self.y + self.h / 2) as f32,
        )
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}
