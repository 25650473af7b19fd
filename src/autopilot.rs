//! Idle/demo mode - an AI that plays the game
//!
//! Produces [`TickInput`] from the current state: aim at the nearest enemy,
//! fire on a fixed cadence, and sidestep anything that gets too close.

use glam::Vec2;

use crate::sim::{GameState, TickInput};

/// Demo player
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks between shots
    pub fire_interval: u32,
    /// Enemies closer than this (center to center) trigger evasion
    pub danger_radius: f32,
    ticks: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            fire_interval: 8,
            danger_radius: 120.0,
            ticks: 0,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide this tick's input
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        self.ticks = self.ticks.wrapping_add(1);
        let player = state.player.pos;

        // Find the most dangerous enemy (closest to the player)
        let nearest = state.enemies.iter().min_by(|a, b| {
            a.pos
                .distance(player)
                .partial_cmp(&b.pos.distance(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let Some(target) = nearest else {
            // Nothing to shoot: drift back toward the center
            let mut input = steer(state.config.arena_center() - player, 10.0);
            input.aim = state.aim;
            return input;
        };

        // Lead the target slightly along its pursuit path
        let aim = target.pos + (player - target.pos).normalize_or_zero() * target.speed * 4.0;

        let away = player - target.pos;
        let mut input = if away.length() < self.danger_radius {
            // Flee, biased toward the center so we don't get pinned on a wall
            let to_center = state.config.arena_center() - player;
            steer(away.normalize_or_zero() + to_center.normalize_or_zero() * 0.5, 0.1)
        } else {
            TickInput::default()
        };

        input.aim = aim;
        input.fire = self.ticks % self.fire_interval.max(1) == 0;
        input
    }
}

/// Intent flags pointing along `dir`, ignoring components below `dead_zone`
fn steer(dir: Vec2, dead_zone: f32) -> TickInput {
    TickInput {
        left: dir.x < -dead_zone,
        right: dir.x > dead_zone,
        up: dir.y < -dead_zone,
        down: dir.y > dead_zone,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_MS;
    use crate::sim::{Enemy, tick};

    fn enemy(id: u32, pos: Vec2) -> Enemy {
        Enemy {
            id,
            pos,
            radius: 15.0,
            speed: 1.0,
            health: 1.0,
            max_health: 1.0,
            hue: 0.0,
        }
    }

    #[test]
    fn test_aims_at_nearest_enemy() {
        let mut state = GameState::new(1);
        state.start();
        state.push_enemy(enemy(1, Vec2::new(0.0, 300.0)));
        state.push_enemy(enemy(2, Vec2::new(700.0, 300.0)));

        let mut pilot = Autopilot::new();
        let input = pilot.next_input(&state);
        assert!(input.aim.x > 600.0);
        assert!((input.aim.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_flees_close_enemy() {
        let mut state = GameState::new(1);
        state.start();
        let pos = state.player.pos + Vec2::new(50.0, 0.0);
        state.push_enemy(enemy(1, pos));

        let input = Autopilot::new().next_input(&state);
        assert!(input.left);
        assert!(!input.right);
    }

    #[test]
    fn test_fires_on_cadence() {
        let mut state = GameState::new(1);
        state.start();
        state.push_enemy(enemy(1, Vec2::new(0.0, 0.0)));

        let mut pilot = Autopilot {
            fire_interval: 3,
            ..Default::default()
        };
        let shots: Vec<bool> = (0..6).map(|_| pilot.next_input(&state).fire).collect();
        assert_eq!(shots, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_demo_run_scores() {
        let mut state = GameState::new(2024);
        state.start();
        let mut pilot = Autopilot::new();
        for _ in 0..60 * 20 {
            let input = pilot.next_input(&state);
            tick(&mut state, &input, TICK_MS);
            if !state.continue_to_next_wave() && state.is_over() {
                break;
            }
        }
        assert!(state.score > 0);
    }
}
