//! Session flow: Idle -> Playing -> WaveCleared -> Playing ... -> GameOver
//!
//! Transitions requested from the wrong phase are ignored and report `false`.

use super::state::{GameEvent, GamePhase, GameState, Outcome};
use super::wave::start_wave;

impl GameState {
    /// Begin a fresh run at wave 1. Only valid from [`GamePhase::Idle`].
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            log::debug!("Ignoring start in {:?}", self.phase);
            return false;
        }

        self.score = 0;
        self.reset_player();
        self.aim = self.player.pos;
        self.clear_entities();
        self.phase = GamePhase::Playing;
        log::info!("Run started (seed {})", self.seed);
        start_wave(self, 1);
        true
    }

    /// Advance from a cleared wave to the next one
    pub fn continue_to_next_wave(&mut self) -> bool {
        if self.phase != GamePhase::WaveCleared {
            log::debug!("Ignoring continue in {:?}", self.phase);
            return false;
        }

        let next = self.wave + 1;
        self.recenter_player();
        self.bullets.clear();
        self.phase = GamePhase::Playing;
        start_wave(self, next);
        true
    }

    /// Return to idle after a finished run and immediately start a new one
    pub fn restart_after_game_over(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::GameOver(_)) {
            log::debug!("Ignoring restart in {:?}", self.phase);
            return false;
        }

        self.phase = GamePhase::Idle;
        self.start()
    }

    /// Playing -> WaveCleared
    pub(crate) fn clear_wave(&mut self) {
        self.phase = GamePhase::WaveCleared;
        self.schedule.cancel();
        log::info!("Wave {} cleared (score {})", self.wave, self.score);
        self.emit(GameEvent::WaveCleared { wave: self.wave });
    }

    /// Playing -> GameOver
    pub(crate) fn end_game(&mut self, outcome: Outcome) {
        self.phase = GamePhase::GameOver(outcome);
        self.schedule.cancel();
        log::info!(
            "Game over ({:?}) at wave {} with score {}",
            outcome,
            self.wave,
            self.score
        );
        self.emit(GameEvent::GameOver {
            outcome,
            wave: self.wave,
            score: self.score,
        });
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::Bullet;

    #[test]
    fn test_start_from_idle() {
        let mut state = GameState::new(1);
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.wave, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.enemies_remaining, 3);
        assert_eq!(state.schedule.len(), 3);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = GameState::new(1);
        state.start();
        state.score = 50;
        assert!(!state.start());
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_continue_only_from_wave_cleared() {
        let mut state = GameState::new(1);
        assert!(!state.continue_to_next_wave());
        state.start();
        assert!(!state.continue_to_next_wave());
        assert_eq!(state.wave, 1);
    }

    #[test]
    fn test_continue_keeps_score_and_health() {
        let mut state = GameState::new(1);
        state.start();
        state.score = 30;
        state.player.health = 70;
        state.player.pos = Vec2::new(100.0, 100.0);
        state.bullets.push(Bullet {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::X,
            radius: 5.0,
        });
        state.clear_wave();

        assert!(state.continue_to_next_wave());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.wave, 2);
        assert_eq!(state.score, 30);
        assert_eq!(state.player.health, 70);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert!(state.bullets.is_empty());
        assert_eq!(state.enemies_remaining, 4);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = GameState::new(1);
        state.start();
        assert!(!state.restart_after_game_over());

        state.wave = 12;
        state.score = 400;
        state.player.health = -5;
        state.end_game(Outcome::Defeat);
        assert!(state.schedule.is_empty());

        assert!(state.restart_after_game_over());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.wave, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.health, 100);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_clear_wave_cancels_pending_spawns() {
        let mut state = GameState::new(1);
        state.start();
        state.clear_wave();
        assert_eq!(state.phase, GamePhase::WaveCleared);
        assert!(state.schedule.is_empty());
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::WaveCleared { wave: 1 })
        );
    }
}
