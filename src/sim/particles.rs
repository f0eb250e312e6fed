//! Particle bursts for hit, death and game-over feedback
//!
//! Purely cosmetic: nothing here feeds back into gameplay.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle, ParticleColor};
use crate::tuning::{BurstTuning, Tuning};

/// Max angular jitter per particle, as a fraction of the even spacing
const ANGLE_JITTER: f32 = 0.35;

/// Which burst preset to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    /// Bullet struck an enemy (every hit, killing hits included)
    Hit,
    /// Enemy destroyed
    Death,
    /// Player lost a life
    PlayerHit,
    /// Final burst when the session ends
    GameOver,
}

impl BurstKind {
    pub fn preset(self, tuning: &Tuning) -> &BurstTuning {
        match self {
            BurstKind::Hit => &tuning.hit_burst,
            BurstKind::Death => &tuning.death_burst,
            BurstKind::PlayerHit => &tuning.player_hit_burst,
            BurstKind::GameOver => &tuning.game_over_burst,
        }
    }

    pub fn color(self) -> ParticleColor {
        match self {
            BurstKind::Hit => ParticleColor::Spark,
            BurstKind::Death => ParticleColor::Explosion,
            BurstKind::PlayerHit => ParticleColor::Damage,
            BurstKind::GameOver => ParticleColor::Finale,
        }
    }
}

/// A pending burst request raised by the collision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub origin: Vec2,
    pub kind: BurstKind,
}

impl Burst {
    pub fn new(origin: Vec2, kind: BurstKind) -> Self {
        Self { origin, kind }
    }
}

/// Emit `count` particles evenly spaced around `origin`, each slightly jittered.
///
/// Speed and lifetime are sampled uniformly from the given inclusive ranges.
/// Emission stops once `particles` reaches `cap`.
#[allow(clippy::too_many_arguments)]
pub fn emit_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    origin: Vec2,
    color: ParticleColor,
    count: u32,
    speed_range: (f32, f32),
    life_range: (f32, f32),
    cap: usize,
) {
    if count == 0 {
        return;
    }
    let spacing = TAU / count as f32;
    let jitter = spacing * ANGLE_JITTER;

    for i in 0..count {
        if particles.len() >= cap {
            break;
        }
        let angle = i as f32 * spacing + rng.random_range(-jitter..=jitter);
        let speed = rng.random_range(speed_range.0..=speed_range.1);
        let life = rng.random_range(life_range.0..=life_range.1);
        particles.push(Particle {
            pos: origin,
            vel: Vec2::from_angle(angle) * speed,
            life,
            max_life: life,
            color,
        });
    }
}

/// Emit all pending bursts using the state's tuning, settings and RNG
pub fn emit_bursts(state: &mut GameState, bursts: &[Burst]) {
    let cap = state.settings.max_particles();
    for burst in bursts {
        let preset = *burst.kind.preset(&state.tuning);
        let count = state.settings.burst_count(preset.count);
        emit_burst(
            &mut state.particles,
            &mut state.rng,
            burst.origin,
            burst.kind.color(),
            count,
            preset.speed,
            preset.life,
            cap,
        );
    }
}

/// Integrate particles, decay their lifetime and drop expired ones
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.life -= dt;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn burst(count: u32, cap: usize) -> Vec<Particle> {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        emit_burst(
            &mut particles,
            &mut rng,
            Vec2::new(100.0, 100.0),
            ParticleColor::Explosion,
            count,
            (50.0, 150.0),
            (0.5, 1.0),
            cap,
        );
        particles
    }

    #[test]
    fn test_burst_count_and_ranges() {
        let particles = burst(12, 1000);
        assert_eq!(particles.len(), 12);
        for p in &particles {
            let speed = p.vel.length();
            assert!((49.9..=150.1).contains(&speed), "speed {speed}");
            assert!((0.5..=1.0).contains(&p.life));
            assert_eq!(p.life, p.max_life);
            assert_eq!(p.pos, Vec2::new(100.0, 100.0));
        }
    }

    #[test]
    fn test_burst_covers_full_circle() {
        // Evenly spaced directions: every quadrant gets particles
        let particles = burst(16, 1000);
        let quadrants = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
        for (sx, sy) in quadrants {
            assert!(
                particles
                    .iter()
                    .any(|p| p.vel.x * sx > 0.0 && p.vel.y * sy > 0.0),
                "no particle in quadrant ({sx}, {sy})"
            );
        }
    }

    #[test]
    fn test_burst_respects_cap() {
        assert_eq!(burst(40, 10).len(), 10);
        assert!(burst(40, 0).is_empty());
    }

    #[test]
    fn test_same_seed_same_burst() {
        let a = burst(8, 100);
        let b = burst(8, 100);
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.life, pb.life);
        }
    }

    #[test]
    fn test_update_particles_decays_and_culls() {
        let mut particles = vec![
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::new(10.0, 0.0),
                life: 0.5,
                max_life: 0.5,
                color: ParticleColor::Spark,
            },
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                life: 0.01,
                max_life: 0.5,
                color: ParticleColor::Spark,
            },
        ];

        update_particles(&mut particles, 0.02);

        assert_eq!(particles.len(), 1);
        assert!((particles[0].pos.x - 0.2).abs() < 1e-5);
        assert!((particles[0].life - 0.48).abs() < 1e-6);
    }

    #[test]
    fn test_emit_bursts_uses_presets() {
        let mut state = GameState::new(3);
        let bursts = [
            Burst::new(Vec2::new(10.0, 10.0), BurstKind::Hit),
            Burst::new(Vec2::new(20.0, 20.0), BurstKind::Death),
        ];
        emit_bursts(&mut state, &bursts);

        let hits = state
            .particles
            .iter()
            .filter(|p| p.color == ParticleColor::Spark)
            .count();
        let deaths = state
            .particles
            .iter()
            .filter(|p| p.color == ParticleColor::Explosion)
            .count();
        assert_eq!(hits, state.tuning.hit_burst.count as usize);
        assert_eq!(deaths, state.tuning.death_burst.count as usize);
    }
}
