//! Circle collision tests
//!
//! Every entity is a circle; contact means the center distance is strictly
//! less than the sum of radii.

use glam::Vec2;

use super::state::{Bullet, Enemy};
use crate::distance;

/// Strict overlap of two circles
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    distance(a, b) < radius_a + radius_b
}

/// Index of the newest unspent bullet touching `enemy`, if any.
///
/// `spent` is indexed like `bullets`; bullets already consumed this tick are
/// skipped so one bullet never damages two enemies.
pub fn first_bullet_hit(enemy: &Enemy, bullets: &[Bullet], spent: &[bool]) -> Option<usize> {
    (0..bullets.len()).rev().find(|&i| {
        !spent.get(i).copied().unwrap_or(false)
            && circles_overlap(bullets[i].pos, bullets[i].radius, enemy.pos, enemy.radius)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy {
            id: 1,
            pos,
            radius: 15.0,
            speed: 1.0,
            health: 1.0,
            max_health: 1.0,
            hue: 0.0,
        }
    }

    fn bullet_at(pos: Vec2) -> Bullet {
        Bullet {
            pos,
            vel: Vec2::ZERO,
            radius: 5.0,
        }
    }

    #[test]
    fn test_touching_is_not_overlap() {
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(20.0, 0.0), 15.0));
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(19.9, 0.0), 15.0));
    }

    #[test]
    fn test_first_bullet_hit_prefers_newest() {
        let enemy = enemy_at(Vec2::new(100.0, 100.0));
        let bullets = vec![
            bullet_at(Vec2::new(100.0, 100.0)),
            bullet_at(Vec2::new(500.0, 500.0)),
            bullet_at(Vec2::new(105.0, 100.0)),
        ];
        assert_eq!(first_bullet_hit(&enemy, &bullets, &[false; 3]), Some(2));
    }

    #[test]
    fn test_first_bullet_hit_skips_spent() {
        let enemy = enemy_at(Vec2::new(100.0, 100.0));
        let bullets = vec![bullet_at(Vec2::new(100.0, 100.0))];
        assert_eq!(first_bullet_hit(&enemy, &bullets, &[true]), None);
    }

    #[test]
    fn test_first_bullet_hit_misses() {
        let enemy = enemy_at(Vec2::new(100.0, 100.0));
        let bullets = vec![bullet_at(Vec2::new(200.0, 100.0))];
        assert_eq!(first_bullet_hit(&enemy, &bullets, &[false]), None);
    }
}
