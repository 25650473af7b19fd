//! Wave Arena - a top-down wave survival shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, waves, collisions, game flow)
//! - `config`: Data-driven game balance
//! - `autopilot`: Demo-mode input generator

pub mod autopilot;
pub mod config;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::{ConfigError, GameConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical tick length in milliseconds (60 Hz host cadence)
    pub const TICK_MS: f64 = 1000.0 / 60.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0; // per tick
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const INVINCIBLE_DURATION_MS: f64 = 1000.0;
    /// Health lost on enemy contact
    pub const CONTACT_DAMAGE: i32 = 10;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_DAMAGE: f32 = 1.0;

    /// Base enemy stats, scaled per wave
    pub const ENEMY_RADIUS: f32 = 15.0;
    pub const ENEMY_BASE_SPEED: f32 = 1.0;
    pub const ENEMY_BASE_HEALTH: f32 = 1.0;
    /// Enemy hue range in degrees (red through yellow)
    pub const ENEMY_HUE_RANGE: f32 = 60.0;
    pub const KILL_SCORE: u64 = 10;

    /// Wave scaling
    pub const WAVE_BASE_ENEMIES: u32 = 3;
    pub const WAVE_ENEMIES_PER_WAVE: f32 = 0.7;
    pub const WAVE_HEALTH_PER_WAVE: f32 = 0.3;
    pub const WAVE_SPEED_PER_WAVE: f32 = 0.05;
    pub const SPAWN_INTERVAL_MS: f64 = 500.0;
    /// Clearing this wave wins the run
    pub const FINAL_WAVE: u32 = 100;
    /// Upper bound on enemies in a single wave
    pub const MAX_WAVE_ENEMIES: u32 = 1000;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector from `from` toward `to`, plus the distance between them.
///
/// Coincident points yield a zero direction instead of NaN.
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> (Vec2, f32) {
    let delta = to - from;
    let dist = delta.length();
    if dist > 0.0 {
        (delta / dist, dist)
    } else {
        (Vec2::ZERO, 0.0)
    }
}

/// Angle (radians) of the ray from `from` through `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit vector for an angle in radians
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Clamp a circle's center so the whole circle stays inside `[0, size]`
#[inline]
pub fn clamp_circle_to_bounds(pos: Vec2, radius: f32, size: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.max(radius).min(size.x - radius),
        pos.y.max(radius).min(size.y - radius),
    )
}

/// Whether a point lies inside `[0, size]` (edges count as inside)
#[inline]
pub fn in_bounds(pos: Vec2, size: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= size.x && pos.y >= 0.0 && pos.y <= size.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_to_coincident_points() {
        let p = Vec2::new(3.0, 4.0);
        let (dir, dist) = direction_to(p, p);
        assert_eq!(dir, Vec2::ZERO);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_direction_to_is_unit() {
        let (dir, dist) = direction_to(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((dist - 5.0).abs() < 1e-6);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_circle_to_bounds() {
        let size = Vec2::new(800.0, 600.0);
        let clamped = clamp_circle_to_bounds(Vec2::new(-50.0, 700.0), 20.0, size);
        assert_eq!(clamped, Vec2::new(20.0, 580.0));
    }

    #[test]
    fn test_in_bounds_edges_inclusive() {
        let size = Vec2::new(800.0, 600.0);
        assert!(in_bounds(Vec2::new(0.0, 600.0), size));
        assert!(in_bounds(Vec2::new(800.0, 0.0), size));
        assert!(!in_bounds(Vec2::new(800.1, 10.0), size));
        assert!(!in_bounds(Vec2::new(10.0, -0.1), size));
    }

    #[test]
    fn test_angle_to() {
        let angle = angle_to(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
