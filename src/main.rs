//! Wave Arena headless runner
//!
//! Plays a seeded session with the demo autopilot and prints the final HUD.
//!
//! Usage: `wave-arena [seed] [max_ticks]`. Set `WAVE_ARENA_CONFIG` to a JSON
//! file to override balance values.

use std::error::Error;

use wave_arena::consts::TICK_MS;
use wave_arena::sim::{GameEvent, GamePhase, GameState, HudWatch, tick};
use wave_arena::{Autopilot, GameConfig};

const DEFAULT_SEED: u64 = 42;
/// Ten minutes at 60 Hz
const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 10;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SEED,
    };
    let max_ticks = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_MAX_TICKS,
    };

    let config = match std::env::var("WAVE_ARENA_CONFIG") {
        Ok(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        Err(_) => GameConfig::default(),
    };

    log::info!("Wave Arena (headless) starting with seed {}", seed);

    let mut state = GameState::with_config(config, seed);
    let mut pilot = Autopilot::new();
    let mut hud = HudWatch::new();
    state.start();

    for _ in 0..max_ticks {
        let input = pilot.next_input(&state);
        tick(&mut state, &input, TICK_MS);

        for event in state.drain_events() {
            match event {
                GameEvent::PlayerHit { health, .. } => {
                    log::debug!("Player hit, health {}", health)
                }
                GameEvent::EnemyKilled { id, score } => {
                    log::debug!("Enemy {} down, score {}", id, score)
                }
                _ => {}
            }
        }
        if let Some(update) = hud.poll(&state) {
            log::trace!("HUD {:?}", update);
        }

        match state.phase {
            GamePhase::WaveCleared => {
                state.continue_to_next_wave();
            }
            GamePhase::GameOver(_) => break,
            GamePhase::Idle | GamePhase::Playing => {}
        }
    }

    println!("{}", serde_json::to_string_pretty(&state.hud())?);
    Ok(())
}
