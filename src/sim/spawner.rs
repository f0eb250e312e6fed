//! Enemy waves, difficulty curves and seek steering
//!
//! Difficulty is a pure function of score: waves come faster, grow larger and
//! bring tougher, quicker enemies as the score rises, each curve saturating at
//! a tunable limit.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyPattern, GameEvent, GameState};
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::direction_to;
use crate::tuning::Tuning;

/// Gap between a freshly spawned enemy's edge and the playfield border
const SPAWN_GAP: f32 = 2.0;

/// Jitter wobble frequency (radians per second of age)
const JITTER_FREQ: f32 = 4.0;

/// Playfield border an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Point just outside this edge; `t` in [0, 1] runs along it
    pub fn spawn_point(self, t: f32, offset: f32) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(t * PLAYFIELD_WIDTH, -offset),
            Edge::Bottom => Vec2::new(t * PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT + offset),
            Edge::Left => Vec2::new(-offset, t * PLAYFIELD_HEIGHT),
            Edge::Right => Vec2::new(PLAYFIELD_WIDTH + offset, t * PLAYFIELD_HEIGHT),
        }
    }
}

/// Seconds until the next wave, shrinking with score down to the floor
pub fn spawn_interval(score: u64, tuning: &Tuning) -> f32 {
    let reduced = tuning.spawn_base_interval - tuning.spawn_interval_per_score * score as f32;
    reduced.max(tuning.spawn_min_interval)
}

/// Wave size for a score and a random increment in `0..=wave_random_extra`
pub fn wave_size(score: u64, extra: u32, tuning: &Tuning) -> u32 {
    let bonus = (score / tuning.wave_score_step).min(u32::MAX as u64) as u32;
    tuning
        .wave_base_count
        .saturating_add(extra)
        .saturating_add(bonus)
        .min(tuning.wave_max_count)
}

/// Starting hit points for enemies spawned at this score
pub fn enemy_hp(score: u64, tuning: &Tuning) -> u32 {
    let bonus = (score / tuning.enemy_hp_score_step).min(u32::MAX as u64 - 1) as u32;
    1 + bonus
}

/// Seek speed for this score, saturating at the cap
pub fn enemy_speed(score: u64, tuning: &Tuning) -> f32 {
    (tuning.enemy_base_speed + tuning.enemy_speed_per_score * score as f32)
        .min(tuning.enemy_max_speed)
}

/// Roll one enemy at a random edge position
pub fn roll_enemy<R: Rng>(rng: &mut R, id: u32, score: u64, tuning: &Tuning) -> Enemy {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let t = rng.random_range(0.0..=1.0);
    let pattern = EnemyPattern::ALL[rng.random_range(0..EnemyPattern::ALL.len())];
    Enemy {
        id,
        pos: edge.spawn_point(t, tuning.enemy_radius + SPAWN_GAP),
        vel: Vec2::ZERO,
        radius: tuning.enemy_radius,
        alive: true,
        hp: enemy_hp(score, tuning),
        pattern,
        age: 0.0,
    }
}

/// Spawn one wave sized for the current score, returning how many enemies it added
pub fn generate_wave(state: &mut GameState) -> u32 {
    let extra = state.rng.random_range(0..=state.tuning.wave_random_extra);
    let count = wave_size(state.score, extra, &state.tuning);

    for _ in 0..count {
        let id = state.next_entity_id();
        let enemy = roll_enemy(&mut state.rng, id, state.score, &state.tuning);
        state.enemies.push(enemy);
    }

    state.push_event(GameEvent::WaveSpawned { count });
    count
}

/// Count down the spawn timer and release a wave when it expires
pub fn update_spawner(state: &mut GameState, dt: f32) {
    state.spawn_timer -= dt;
    if state.spawn_timer > 0.0 {
        return;
    }
    let count = generate_wave(state);
    state.spawn_timer = spawn_interval(state.score, &state.tuning);
    log::debug!(
        "Wave of {} at score {} (next in {:.2}s, {} enemies live)",
        count,
        state.score,
        state.spawn_timer,
        state.enemies.len()
    );
}

/// Age enemies and steer them toward `target` at `speed`.
///
/// Jittering enemies add a lateral wobble driven by age and position.
/// With no target, enemies hold position.
pub fn steer_enemies(enemies: &mut [Enemy], target: Option<Vec2>, speed: f32, jitter: f32, dt: f32) {
    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        enemy.age += dt;

        let Some(target) = target else {
            enemy.vel = Vec2::ZERO;
            continue;
        };

        let dir = direction_to(enemy.pos, target);
        let mut vel = dir * speed;
        if enemy.pattern == EnemyPattern::Jitter {
            let phase = enemy.age * JITTER_FREQ + enemy.pos.x * 0.01;
            vel += dir.perp() * phase.sin() * jitter;
        }
        enemy.vel = vel;
        enemy.pos += vel * dt;
    }
}

/// Spawner stage of the tick: maybe release a wave, then steer everyone at the player
pub fn update_enemies(state: &mut GameState, dt: f32) {
    update_spawner(state, dt);

    let target = state.player.as_ref().filter(|p| p.alive).map(|p| p.pos);
    let speed = enemy_speed(state.score, &state.tuning);
    steer_enemies(&mut state.enemies, target, speed, state.tuning.enemy_jitter, dt);
}
