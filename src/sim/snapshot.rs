//! Read-only view of the simulation for the renderer and HUD
//!
//! Built after a tick completes; the renderer never touches live state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, ParticleColor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    /// Facing angle toward the aim target (radians)
    pub angle: f32,
    pub radius: f32,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Seconds since spawn (drives pulsing/animation)
    pub age: f32,
    pub hp: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Remaining life as 0-1 opacity
    pub alpha: f32,
    pub color: ParticleColor,
}

/// Everything the renderer and HUD need for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub player: Option<PlayerView>,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub particles: Vec<ParticleView>,
}

impl GameState {
    /// Copy out the renderable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            player: self.player.as_ref().map(|p| PlayerView {
                pos: p.pos,
                angle: p.angle,
                radius: p.radius,
                alive: p.alive,
            }),
            bullets: self
                .bullets
                .iter()
                .map(|b| BulletView {
                    id: b.id,
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    pos: e.pos,
                    radius: e.radius,
                    age: e.age,
                    hp: e.hp,
                })
                .collect(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    alpha: p.alpha(),
                    color: p.color,
                })
                .collect(),
        }
    }
}
