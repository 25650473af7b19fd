//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Session clock advanced only by the host's tick calls
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod flow;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{circles_overlap, first_bullet_hit};
pub use snapshot::{BulletView, EnemyView, HudSnapshot, HudWatch, PlayerView, RenderSnapshot};
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Outcome, Player};
pub use tick::{TickInput, tick};
pub use wave::{EnemySpawn, SpawnEntry, SpawnSchedule, WaveParams, spawn_due, start_wave};
