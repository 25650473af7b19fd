//! Read-only views for presentation layers
//!
//! Renderers and HUDs never touch [`GameState`] directly; they read these
//! plain, serializable copies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub health: i32,
    pub max_health: i32,
    pub aim_angle: f32,
    /// Contact damage is currently suppressed
    pub invincible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub health: f32,
    pub max_health: f32,
    /// Health bar fill in [0, 1]
    pub health_fraction: f32,
    pub hue: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub arena: Vec2,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    /// Reticle position
    pub aim: Vec2,
}

/// Scalars shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub health: i32,
    pub score: u64,
    pub wave: u32,
    pub enemies_remaining: u32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let player = &self.player;
        RenderSnapshot {
            arena: self.config.arena_size(),
            player: PlayerView {
                pos: player.pos,
                radius: player.radius,
                health: player.reported_health(),
                max_health: player.max_health,
                aim_angle: player.aim_angle,
                invincible: player.invincible,
            },
            bullets: self
                .bullets
                .iter()
                .map(|b| BulletView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    pos: e.pos,
                    radius: e.radius,
                    health: e.health,
                    max_health: e.max_health,
                    health_fraction: e.health_fraction(),
                    hue: e.hue,
                })
                .collect(),
            aim: self.aim,
        }
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            health: self.player.reported_health(),
            score: self.score,
            wave: self.wave,
            enemies_remaining: self.enemies_remaining,
            phase: self.phase,
        }
    }
}

/// Tracks the last HUD pushed to the UI so updates go out only on change
#[derive(Debug, Clone, Default)]
pub struct HudWatch {
    last: Option<HudSnapshot>,
}

impl HudWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current HUD if it differs from the last one returned
    pub fn poll(&mut self, state: &GameState) -> Option<HudSnapshot> {
        let hud = state.hud();
        if self.last == Some(hud) {
            return None;
        }
        self.last = Some(hud);
        Some(hud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy};

    #[test]
    fn test_hud_after_start() {
        let mut state = GameState::new(1);
        state.start();
        let hud = state.hud();
        assert_eq!(hud.health, 100);
        assert_eq!(hud.score, 0);
        assert_eq!(hud.wave, 1);
        assert_eq!(hud.enemies_remaining, 3);
        assert_eq!(hud.phase, GamePhase::Playing);
    }

    #[test]
    fn test_hud_clamps_health() {
        let mut state = GameState::new(1);
        state.player.health = -10;
        assert_eq!(state.hud().health, 0);
        assert_eq!(state.render_snapshot().player.health, 0);
    }

    #[test]
    fn test_hud_watch_only_reports_changes() {
        let mut state = GameState::new(1);
        let mut watch = HudWatch::new();
        assert!(watch.poll(&state).is_some());
        assert!(watch.poll(&state).is_none());

        state.start();
        assert_eq!(watch.poll(&state).map(|h| h.wave), Some(1));
        assert!(watch.poll(&state).is_none());

        state.score += 10;
        assert_eq!(watch.poll(&state).map(|h| h.score), Some(10));
    }

    #[test]
    fn test_render_snapshot_copies_entities() {
        let mut state = GameState::new(1);
        state.push_bullet(Bullet {
            pos: Vec2::new(1.0, 2.0),
            vel: Vec2::X,
            radius: 5.0,
        });
        state.aim = Vec2::new(50.0, 60.0);
        let snap = state.render_snapshot();
        assert_eq!(snap.bullets, vec![BulletView { pos: Vec2::new(1.0, 2.0), radius: 5.0 }]);
        assert!(snap.enemies.is_empty());
        assert_eq!(snap.aim, Vec2::new(50.0, 60.0));
        assert_eq!(snap.arena, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_enemy_health_bar_fill() {
        let mut state = GameState::new(1);
        state.push_enemy(Enemy {
            id: 1,
            pos: Vec2::ZERO,
            radius: 15.0,
            speed: 1.0,
            health: 0.3,
            max_health: 1.2,
            hue: 0.0,
        });
        state.push_enemy(Enemy {
            id: 2,
            pos: Vec2::ZERO,
            radius: 15.0,
            speed: 1.0,
            health: -0.7,
            max_health: 1.3,
            hue: 0.0,
        });
        let snap = state.render_snapshot();
        assert!((snap.enemies[0].health_fraction - 0.25).abs() < 1e-6);
        assert_eq!(snap.enemies[1].health_fraction, 0.0);
    }

    #[test]
    fn test_hud_serializes() {
        let state = GameState::new(1);
        let json = serde_json::to_string(&state.hud()).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
    }
}
