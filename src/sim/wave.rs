//! Wave director
//!
//! Derives per-wave difficulty and turns it into an explicit spawn schedule
//! that the tick loop consumes. Leaving the playing phase drops whatever is
//! still pending, so no spawn can leak into a later wave.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Enemy, GameEvent, GamePhase, GameState};
use crate::config::GameConfig;

/// Difficulty numbers for one wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    pub wave: u32,
    pub enemy_count: u32,
    pub health_multiplier: f32,
    pub speed_multiplier: f32,
}

impl WaveParams {
    pub fn for_wave(wave: u32, config: &GameConfig) -> Self {
        let w = wave as f32;
        Self {
            wave,
            enemy_count: config
                .wave_base_enemies
                .saturating_add((config.wave_enemies_per_wave * w).floor() as u32),
            health_multiplier: 1.0 + config.wave_health_per_wave * w,
            speed_multiplier: 1.0 + config.wave_speed_per_wave * w,
        }
    }
}

/// Stats an enemy receives when its spawn fires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub radius: f32,
    pub speed: f32,
    pub health: f32,
}

/// One pending spawn, `at_ms` after wave start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntry {
    pub at_ms: f64,
    pub spawn: EnemySpawn,
}

/// Pending spawns ordered by fire time
#[derive(Debug, Clone, Default)]
pub struct SpawnSchedule {
    entries: VecDeque<SpawnEntry>,
}

impl SpawnSchedule {
    /// Stagger `enemy_count` identical spawns `spawn_interval_ms` apart
    pub fn for_wave(params: &WaveParams, config: &GameConfig) -> Self {
        let spawn = EnemySpawn {
            radius: config.enemy_radius,
            speed: config.enemy_base_speed * params.speed_multiplier,
            health: config.enemy_base_health * params.health_multiplier,
        };
        let entries = (0..params.enemy_count)
            .map(|i| SpawnEntry {
                at_ms: i as f64 * config.spawn_interval_ms,
                spawn,
            })
            .collect();
        Self { entries }
    }

    /// Pop the next spawn if it is due at `elapsed_ms` into the wave
    pub fn pop_due(&mut self, elapsed_ms: f64) -> Option<SpawnEntry> {
        match self.entries.front() {
            Some(entry) if entry.at_ms <= elapsed_ms => self.entries.pop_front(),
            _ => None,
        }
    }

    /// Drop every pending spawn
    pub fn cancel(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Cancelled {} pending spawns", self.entries.len());
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpawnEntry> {
        self.entries.iter()
    }
}

/// Begin `wave`: reset the remaining counter, clear residual enemies and
/// schedule the wave's spawns from the current session time.
pub fn start_wave(state: &mut GameState, wave: u32) {
    let params = WaveParams::for_wave(wave, &state.config);

    state.wave = wave;
    state.enemies_remaining = params.enemy_count;
    state.enemies.clear();
    state.wave_started_ms = state.time_ms;
    state.schedule = SpawnSchedule::for_wave(&params, &state.config);

    log::info!(
        "Wave {}: {} enemies, health x{:.2}, speed x{:.2}",
        wave,
        params.enemy_count,
        params.health_multiplier,
        params.speed_multiplier
    );
    state.emit(GameEvent::WaveStarted {
        wave,
        enemy_count: params.enemy_count,
    });
}

/// Fire every spawn that is due. Returns how many enemies appeared.
///
/// Outside the playing phase pending spawns are stale and get discarded.
pub fn spawn_due(state: &mut GameState) -> u32 {
    if state.phase != GamePhase::Playing {
        state.schedule.cancel();
        return 0;
    }

    let elapsed = state.wave_elapsed_ms();
    let mut spawned = 0;
    while let Some(entry) = state.schedule.pop_due(elapsed) {
        let enemy = place_enemy(state, &entry.spawn);
        state.emit(GameEvent::EnemySpawned { id: enemy.id });
        state.push_enemy(enemy);
        spawned += 1;
    }
    spawned
}

/// Build an enemy on a random side edge of the arena
fn place_enemy(state: &mut GameState, spawn: &EnemySpawn) -> Enemy {
    let width = state.config.arena_width;
    let height = state.config.arena_height;
    let hue_range = state.config.enemy_hue_range;
    let id = state.next_entity_id();

    let rng = state.rng();
    let x = if rng.random_bool(0.5) { 0.0 } else { width };
    let y = rng.random::<f32>() * height;
    let hue = rng.random::<f32>() * hue_range;

    Enemy {
        id,
        pos: Vec2::new(x, y),
        radius: spawn.radius,
        speed: spawn.speed,
        health: spawn.health,
        max_health: spawn.health,
        hue,
    }
}
