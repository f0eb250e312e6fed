//! Frame orchestration
//!
//! One call to [`tick`] advances the session by one host frame. Subsystems run
//! in a fixed order: player motion and firing, bullets, spawner and enemy
//! steering, collisions, particles, then cleanup.

use glam::Vec2;

use super::collision::{resolve_bullets_vs_enemies, resolve_enemies_vs_player};
use super::motion::{aim_player, demo_input, intent_vector, move_player, update_bullets, update_firing};
use super::particles::{emit_bursts, update_particles};
use super::spawner::update_enemies;
use super::state::{GameEvent, GamePhase, GameState};
use crate::sanitize_dt;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal intent in {-1, 0, 1} (other values are clamped by sign)
    pub move_x: i8,
    /// Vertical intent in {-1, 0, 1}, positive is down the playfield
    pub move_y: i8,
    /// Aim target in playfield coordinates (keeps the last facing if absent)
    pub aim: Option<Vec2>,
    /// Fire held
    pub fire: bool,
    /// Pause toggle (edge event)
    pub pause: bool,
    /// Start/restart command
    pub start: bool,
    /// Demo mode - the core pilots the player
    pub demo: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.clear_events();

    if input.start && matches!(state.phase, GamePhase::Idle | GamePhase::GameOver) {
        state.start_session();
        // The start frame's delta belongs to the previous session
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                state.push_event(GameEvent::Paused);
                log::info!("Paused at score {}", state.score);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                state.push_event(GameEvent::Resumed);
                log::info!("Resumed");
                // This frame's delta spans the pause, so it is not charged
                return;
            }
            _ => {}
        }
    }

    // Don't tick unless running
    if !state.is_running() {
        return;
    }

    let dt = sanitize_dt(dt, state.tuning.max_dt);
    state.time_ticks += 1;
    state.elapsed += dt;

    let demo;
    let input = if input.demo {
        demo = demo_input(state, input);
        &demo
    } else {
        input
    };

    // Player motion and firing
    if let Some(player) = state.player.as_mut() {
        move_player(player, intent_vector(input.move_x, input.move_y), dt);
        if let Some(target) = input.aim {
            aim_player(player, target);
        }
    }
    update_firing(state, input.fire, dt);

    // Bullets integrate and leave the field before anything tests against them
    update_bullets(&mut state.bullets, dt);

    update_enemies(state, dt);

    let mut bursts = Vec::new();
    resolve_bullets_vs_enemies(state, &mut bursts);
    resolve_enemies_vs_player(state, &mut bursts);

    emit_bursts(state, &bursts);
    update_particles(&mut state.particles, dt);

    state.cull_dead();
}
