//! Player motion, aiming and firing
//!
//! Turns normalized input into player movement and bullets, and integrates
//! bullets until they leave the playfield.

use glam::Vec2;

use super::state::{Bullet, BulletOwner, GameState, Player};
use super::tick::TickInput;
use crate::consts::BULLET_CULL_MARGIN;
use crate::{clamp_to_playfield, direction_to, distance_sq, outside_playfield};

/// Enemies closer than this make the demo pilot back off
const DEMO_DANGER_RADIUS: f32 = 140.0;

/// Movement intent from per-axis input in {-1, 0, 1}
pub fn intent_vector(move_x: i8, move_y: i8) -> Vec2 {
    Vec2::new(move_x.signum() as f32, move_y.signum() as f32)
}

/// Move the player along `intent` at its speed, clamped to the playfield.
///
/// Diagonal intent is normalized so it covers the same distance as axial intent.
pub fn move_player(player: &mut Player, intent: Vec2, dt: f32) {
    player.vel = intent.normalize_or_zero() * player.speed;
    player.pos = clamp_to_playfield(player.pos + player.vel * dt, player.radius);
}

/// Face the player toward the aim target (keeps the last angle if the target is on top of it)
pub fn aim_player(player: &mut Player, target: Vec2) {
    let dir = direction_to(player.pos, target);
    if dir != Vec2::ZERO {
        player.angle = dir.y.atan2(dir.x);
    }
}

/// Tick the fire cooldown and spawn one bullet if firing is allowed.
///
/// Returns true when a bullet was fired.
pub fn update_firing(state: &mut GameState, fire: bool, dt: f32) -> bool {
    let Some(player) = state.player.as_mut() else {
        return false;
    };
    player.fire_cooldown = (player.fire_cooldown - dt).max(0.0);
    if !fire || player.fire_cooldown > 0.0 || !player.alive {
        return false;
    }
    player.fire_cooldown = state.tuning.fire_interval;

    let dir = Vec2::from_angle(player.angle);
    let pos = player.pos + dir * state.tuning.muzzle_offset;
    let id = state.next_entity_id();
    state.bullets.push(Bullet {
        id,
        pos,
        vel: dir * state.tuning.bullet_speed,
        radius: state.tuning.bullet_radius,
        alive: true,
        owner: BulletOwner::Player,
    });
    true
}

/// Integrate bullets and drop those that left the playfield
pub fn update_bullets(bullets: &mut Vec<Bullet>, dt: f32) {
    for bullet in bullets.iter_mut() {
        bullet.pos += bullet.vel * dt;
        if outside_playfield(bullet.pos, BULLET_CULL_MARGIN) {
            bullet.alive = false;
        }
    }
    bullets.retain(|b| b.alive);
}

/// Demo pilot: aim at the nearest enemy, keep firing, and back away from close threats
pub fn demo_input(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    let Some(player) = state.player.as_ref() else {
        return input;
    };

    let nearest = state
        .enemies
        .iter()
        .filter(|e| e.alive)
        .min_by(|a, b| {
            distance_sq(player.pos, a.pos)
                .partial_cmp(&distance_sq(player.pos, b.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match nearest {
        Some(enemy) => {
            input.aim = Some(enemy.pos);
            input.fire = true;

            if distance_sq(player.pos, enemy.pos) < DEMO_DANGER_RADIUS * DEMO_DANGER_RADIUS {
                let away = direction_to(enemy.pos, player.pos);
                input.move_x = axis(away.x);
                input.move_y = axis(away.y);
            } else {
                // Drift back toward the start position between threats
                let home = direction_to(player.pos, state.tuning.player_start);
                input.move_x = axis(home.x);
                input.move_y = axis(home.y);
            }
        }
        None => {
            input.fire = false;
            input.move_x = 0;
            input.move_y = 0;
        }
    }
    input
}

fn axis(v: f32) -> i8 {
    if v > 0.3 {
        1
    } else if v < -0.3 {
        -1
    } else {
        0
    }
}
