//! Arena Shooter - simulation core for a top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Per-frame simulation (motion, spawning, collisions, particles, game state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player-facing presets (particle budget, reduced motion)
//! - `error`: Configuration errors
//!
//! Rendering, input devices and frame scheduling live outside this crate.
//! The host feeds a [`sim::TickInput`] and a frame delta into [`sim::tick`]
//! and reads back a [`sim::Snapshot`].

pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical playfield width (rendering scales to this space)
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    /// Logical playfield height
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    /// Largest step a single tick may take (seconds).
    /// Bounds per-tick travel so frame hitches don't tunnel through enemies.
    pub const MAX_DT: f32 = 0.033;

    /// Bullets are culled this far outside the playfield
    pub const BULLET_CULL_MARGIN: f32 = 10.0;

    /// Score per enemy destroyed
    pub const KILL_REWARD: u64 = 100;
    /// Lives at the start of a session
    pub const STARTING_LIVES: u8 = 3;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 14.0;
    pub const PLAYER_SPEED: f32 = 260.0; // pixels/s
    pub const FIRE_INTERVAL: f32 = 0.12; // seconds between shots

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 620.0;
    /// Distance from player center to the bullet spawn point
    pub const MUZZLE_OFFSET: f32 = 20.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const ENEMY_BASE_SPEED: f32 = 60.0;
    pub const ENEMY_MAX_SPEED: f32 = 180.0;
}

/// Clamp a position to the playfield, inset by `margin` on every side
#[inline]
pub fn clamp_to_playfield(pos: Vec2, margin: f32) -> Vec2 {
    use consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
    // A margin wider than half the field collapses to the center line
    let mx = margin.min(PLAYFIELD_WIDTH / 2.0);
    let my = margin.min(PLAYFIELD_HEIGHT / 2.0);
    Vec2::new(
        pos.x.clamp(mx, PLAYFIELD_WIDTH - mx),
        pos.y.clamp(my, PLAYFIELD_HEIGHT - my),
    )
}

/// Squared distance between two points
#[inline]
pub fn distance_sq(a: Vec2, b: Vec2) -> f32 {
    (b - a).length_squared()
}

/// Unit vector from `from` toward `to`, zero when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Whether a point lies outside the playfield by more than `margin`
#[inline]
pub fn outside_playfield(pos: Vec2, margin: f32) -> bool {
    use consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
    pos.x < -margin
        || pos.x > PLAYFIELD_WIDTH + margin
        || pos.y < -margin
        || pos.y > PLAYFIELD_HEIGHT + margin
}

/// Sanitize a frame delta: negative or NaN becomes zero, large values clamp to `max`
#[inline]
pub fn sanitize_dt(dt: f32, max: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max)
    }
}
