//! Per-frame simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform concerns:
//! - Variable `dt`, sanitized and clamped per tick
//! - Seeded RNG only (spawner and emitter share the state's generator)
//! - Stable iteration order (insertion order, matching entity ID order)

pub mod collision;
pub mod motion;
pub mod particles;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, player_hit, resolve_bullets_vs_enemies, resolve_enemies_vs_player};
pub use particles::{Burst, BurstKind, emit_burst, update_particles};
pub use snapshot::{BulletView, EnemyView, ParticleView, PlayerView, Snapshot};
pub use spawner::{Edge, enemy_hp, enemy_speed, generate_wave, spawn_interval, wave_size};
pub use state::{
    Bullet, BulletOwner, Enemy, EnemyPattern, GameEvent, GamePhase, GameState, Particle,
    ParticleColor, Player,
};
pub use tick::{TickInput, tick};
