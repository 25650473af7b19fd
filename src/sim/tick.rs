//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session one step. Movement is expressed
//! per tick; `dt_ms` only drives the session clock (spawn schedule and
//! invincibility window).

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use super::collision::first_bullet_hit;
use super::state::{Bullet, GameEvent, GamePhase, GameState, Outcome};
use super::wave::spawn_due;
use crate::{angle_to, clamp_circle_to_bounds, direction_to, in_bounds};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement intent
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Aim point in arena coordinates (mouse position)
    pub aim: Vec2,
    /// Fire one bullet; the host clears this after each tick
    pub fire: bool,
}

impl TickInput {
    /// Raw intent direction, each axis in {-1, 0, 1}
    pub fn movement(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Advance the game state by one tick. Does nothing unless playing.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ms += dt_ms;
    spawn_due(state);

    move_player(state, input);

    state.aim = input.aim;
    state.player.aim_angle = angle_to(state.player.pos, input.aim);

    if input.fire {
        fire(state);
    }

    update_bullets(state);

    if update_enemies(state) {
        // Defeat ends the tick
        return;
    }

    let now = state.time_ms;
    state.player.expire_invincibility(now);

    if state.enemies_remaining == 0
        && state.enemies.is_empty()
        && state.phase == GamePhase::Playing
    {
        if state.wave >= state.config.final_wave {
            state.end_game(Outcome::Victory);
        } else {
            state.clear_wave();
        }
    }
}

/// Apply movement intent, normalizing diagonals, then keep the player inside
fn move_player(state: &mut GameState, input: &TickInput) {
    let mut step = input.movement() * state.player.speed;
    if step.x != 0.0 && step.y != 0.0 {
        step *= FRAC_1_SQRT_2;
    }

    let size = state.config.arena_size();
    let player = &mut state.player;
    player.pos = clamp_circle_to_bounds(player.pos + step, player.radius, size);
}

/// Spawn a bullet along the current aim
fn fire(state: &mut GameState) {
    let bullet = Bullet::fired_from(
        &state.player,
        state.player.aim_angle,
        state.config.bullet_speed,
        state.config.bullet_radius,
    );
    state.push_bullet(bullet);
    state.emit(GameEvent::BulletFired);
}

/// Integrate bullets and drop the ones that left the arena
fn update_bullets(state: &mut GameState) {
    let size = state.config.arena_size();
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;
    }
    state.bullets.retain(|b| in_bounds(b.pos, size));
}

/// Pursuit and collisions, newest enemy first. Returns true on defeat.
///
/// Removals are marked during the pass and applied afterwards, so every live
/// enemy is visited exactly once per tick.
fn update_enemies(state: &mut GameState) -> bool {
    let now = state.time_ms;
    let contact_damage = state.config.contact_damage;
    let bullet_damage = state.config.bullet_damage;
    let kill_score = state.config.kill_score;

    let mut dead = vec![false; state.enemies.len()];
    let mut spent = vec![false; state.bullets.len()];
    let mut events = Vec::new();
    let mut defeated = false;

    for i in (0..state.enemies.len()).rev() {
        let enemy = &mut state.enemies[i];
        let player = &mut state.player;

        // Contact uses the distance before this tick's step
        let (dir, dist) = direction_to(enemy.pos, player.pos);
        enemy.pos += dir * enemy.speed;

        if !player.is_invincible_at(now) && dist < player.radius + enemy.radius {
            player.take_hit(contact_damage, now);
            dead[i] = true;
            state.enemies_remaining = state.enemies_remaining.saturating_sub(1);
            events.push(GameEvent::PlayerHit {
                enemy_id: enemy.id,
                health: player.reported_health(),
            });

            if player.is_dead() {
                defeated = true;
                break;
            }
            continue;
        }

        if let Some(j) = first_bullet_hit(enemy, &state.bullets, &spent) {
            spent[j] = true;
            enemy.health -= bullet_damage;

            if enemy.health <= 0.0 {
                state.score += kill_score;
                dead[i] = true;
                state.enemies_remaining = state.enemies_remaining.saturating_sub(1);
                events.push(GameEvent::EnemyKilled {
                    id: enemy.id,
                    score: state.score,
                });
            }
        }
    }

    state.remove_enemies(&dead);
    state.remove_bullets(&spent);
    state.emit_all(events);

    if defeated {
        state.end_game(Outcome::Defeat);
    }
    defeated
}
