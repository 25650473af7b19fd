//! Game state and core simulation types
//!
//! A [`GameState`] is one self-contained session: it owns the player, the
//! live bullets and enemies, the pending spawn schedule and the session RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::wave::SpawnSchedule;
use crate::config::GameConfig;
use crate::unit_from_angle;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player health reached zero
    Defeat,
    /// Final wave cleared
    Victory,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Between waves, waiting for the host to continue
    WaveCleared,
    /// Run ended
    GameOver(Outcome),
}

/// Notable things that happened during a tick or transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveStarted { wave: u32, enemy_count: u32 },
    EnemySpawned { id: u32 },
    BulletFired,
    EnemyKilled { id: u32, score: u64 },
    /// An enemy touched the player and was consumed
    PlayerHit { enemy_id: u32, health: i32 },
    WaveCleared { wave: u32 },
    GameOver { outcome: Outcome, wave: u32, score: u64 },
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Displacement per tick along one axis
    pub speed: f32,
    /// May dip below zero for the rest of the tick that kills the player
    pub health: i32,
    pub max_health: i32,
    /// Gun direction (radians)
    pub aim_angle: f32,
    pub invincible: bool,
    /// Session time of the last contact hit (ms)
    pub last_hit_ms: f64,
    pub invincible_duration_ms: f64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.arena_center(),
            radius: config.player_radius,
            speed: config.player_speed,
            health: config.player_max_health,
            max_health: config.player_max_health,
            aim_angle: 0.0,
            invincible: false,
            last_hit_ms: 0.0,
            invincible_duration_ms: config.invincible_duration_ms,
        }
    }

    /// Whether contact damage is suppressed at session time `now_ms`
    pub fn is_invincible_at(&self, now_ms: f64) -> bool {
        self.invincible && now_ms - self.last_hit_ms < self.invincible_duration_ms
    }

    /// Apply contact damage and open the invincibility window
    pub fn take_hit(&mut self, damage: i32, now_ms: f64) {
        self.health -= damage;
        self.invincible = true;
        self.last_hit_ms = now_ms;
    }

    /// Clear invincibility once the window has elapsed
    pub fn expire_invincibility(&mut self, now_ms: f64) {
        if self.invincible && now_ms - self.last_hit_ms >= self.invincible_duration_ms {
            self.invincible = false;
        }
    }

    /// Health as shown to the UI (never negative)
    pub fn reported_health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// A projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Fixed at spawn
    pub vel: Vec2,
    pub radius: f32,
}

impl Bullet {
    /// Bullet leaving the player's rim along `angle`
    pub fn fired_from(player: &Player, angle: f32, speed: f32, radius: f32) -> Self {
        let dir = unit_from_angle(angle);
        Self {
            pos: player.pos + dir * player.radius,
            vel: dir * speed,
            radius,
        }
    }
}

/// A pursuing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Spawn order within the session
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Fractional after wave scaling
    pub health: f32,
    pub max_health: f32,
    /// Cosmetic hue in degrees
    pub hue: f32,
}

impl Enemy {
    /// Remaining health in [0, 1] for health bars
    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            (self.health / self.max_health).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Current wave (0 before the first start)
    pub wave: u32,
    /// Enemies of this wave not yet killed or consumed, spawned or not
    pub enemies_remaining: u32,
    pub score: u64,
    /// Session clock (ms), advances only while playing
    pub time_ms: f64,
    /// Session time the current wave began
    pub wave_started_ms: f64,
    pub player: Player,
    /// Live bullets in fire order
    pub bullets: Vec<Bullet>,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Pending spawns for the current wave
    pub schedule: SpawnSchedule,
    /// Last aim point, kept for reticle drawing
    pub aim: Vec2,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle session with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        let player = Player::new(&config);
        Self {
            aim: player.pos,
            player,
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            wave: 0,
            enemies_remaining: 0,
            score: 0,
            time_ms: 0.0,
            wave_started_ms: 0.0,
            bullets: Vec::new(),
            enemies: Vec::new(),
            schedule: SpawnSchedule::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Milliseconds since the current wave began
    pub fn wave_elapsed_ms(&self) -> f64 {
        self.time_ms - self.wave_started_ms
    }

    /// Restore the player to full health at the arena center
    pub fn reset_player(&mut self) {
        self.player = Player::new(&self.config);
    }

    /// Move the player back to the arena center, keeping health
    pub fn recenter_player(&mut self) {
        self.player.pos = self.config.arena_center();
    }

    pub fn push_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    pub fn push_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Drop every bullet whose mark is set
    pub fn remove_bullets(&mut self, marks: &[bool]) {
        retain_unmarked(&mut self.bullets, marks);
    }

    /// Drop every enemy whose mark is set
    pub fn remove_enemies(&mut self, marks: &[bool]) {
        retain_unmarked(&mut self.enemies, marks);
    }

    pub fn clear_entities(&mut self) {
        self.bullets.clear();
        self.enemies.clear();
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn emit_all(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        self.events.extend(events);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Keep items whose mark is unset; `marks` is indexed like `items`
fn retain_unmarked<T>(items: &mut Vec<T>, marks: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !marks.get(index).copied().unwrap_or(false);
        index += 1;
        keep
    });
}
