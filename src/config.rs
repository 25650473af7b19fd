//! Game balance configuration
//!
//! Defaults mirror [`crate::consts`]. A host may override any subset of
//! fields from JSON; missing fields keep their defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::WaveParams;

/// Errors produced while loading a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Displacement per tick along one axis
    pub player_speed: f32,
    pub player_max_health: i32,
    pub invincible_duration_ms: f64,
    pub contact_damage: i32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_damage: f32,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_base_speed: f32,
    pub enemy_base_health: f32,
    pub enemy_hue_range: f32,
    pub kill_score: u64,

    // === Waves ===
    pub wave_base_enemies: u32,
    pub wave_enemies_per_wave: f32,
    pub wave_health_per_wave: f32,
    pub wave_speed_per_wave: f32,
    pub spawn_interval_ms: f64,
    pub final_wave: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_max_health: PLAYER_MAX_HEALTH,
            invincible_duration_ms: INVINCIBLE_DURATION_MS,
            contact_damage: CONTACT_DAMAGE,

            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_damage: BULLET_DAMAGE,

            enemy_radius: ENEMY_RADIUS,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_base_health: ENEMY_BASE_HEALTH,
            enemy_hue_range: ENEMY_HUE_RANGE,
            kill_score: KILL_SCORE,

            wave_base_enemies: WAVE_BASE_ENEMIES,
            wave_enemies_per_wave: WAVE_ENEMIES_PER_WAVE,
            wave_health_per_wave: WAVE_HEALTH_PER_WAVE,
            wave_speed_per_wave: WAVE_SPEED_PER_WAVE,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            final_wave: FINAL_WAVE,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded config: arena {}x{}, final wave {}",
            config.arena_width,
            config.arena_height,
            config.final_wave
        );
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_radius <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "player_radius",
                reason: "must be positive",
            });
        }
        if self.arena_width < self.player_radius * 2.0 {
            return Err(ConfigError::Invalid {
                field: "arena_width",
                reason: "must fit the player",
            });
        }
        if self.arena_height < self.player_radius * 2.0 {
            return Err(ConfigError::Invalid {
                field: "arena_height",
                reason: "must fit the player",
            });
        }
        if self.player_max_health <= 0 {
            return Err(ConfigError::Invalid {
                field: "player_max_health",
                reason: "must be positive",
            });
        }
        if self.bullet_damage <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "bullet_damage",
                reason: "must be positive",
            });
        }
        if self.enemy_hue_range <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "enemy_hue_range",
                reason: "must be positive",
            });
        }
        if self.spawn_interval_ms < 0.0 {
            return Err(ConfigError::Invalid {
                field: "spawn_interval_ms",
                reason: "must not be negative",
            });
        }
        if self.final_wave == 0 {
            return Err(ConfigError::Invalid {
                field: "final_wave",
                reason: "must be at least 1",
            });
        }
        if self.contact_damage <= 0 {
            return Err(ConfigError::Invalid {
                field: "contact_damage",
                reason: "must be positive",
            });
        }
        if !self.invincible_duration_ms.is_finite() || self.invincible_duration_ms < 0.0 {
            return Err(ConfigError::Invalid {
                field: "invincible_duration_ms",
                reason: "must be finite and not negative",
            });
        }
        let per_wave = [
            ("wave_enemies_per_wave", self.wave_enemies_per_wave),
            ("wave_health_per_wave", self.wave_health_per_wave),
            ("wave_speed_per_wave", self.wave_speed_per_wave),
        ];
        for (field, value) in per_wave {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite and not negative",
                });
            }
        }
        // Waves only grow, so the final wave is the largest
        if WaveParams::for_wave(self.final_wave, self).enemy_count > MAX_WAVE_ENEMIES {
            return Err(ConfigError::Invalid {
                field: "wave_enemies_per_wave",
                reason: "final wave spawns too many enemies",
            });
        }
        Ok(())
    }

    /// Arena size as a vector
    #[inline]
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Arena center, where the player starts each wave
    #[inline]
    pub fn arena_center(&self) -> Vec2 {
        self.arena_size() / 2.0
    }
}
