//! Data-driven game balance
//!
//! Every numeric knob the simulation reads lives here so balance passes can be
//! done from a JSON file without recompiling. Missing fields fall back to the
//! built-in defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result, read_config};

/// Particle burst preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstTuning {
    /// Particles per burst
    pub count: u32,
    /// Initial speed range (pixels/s)
    pub speed: (f32, f32),
    /// Lifetime range (seconds)
    pub life: (f32, f32),
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_radius: f32,
    pub player_speed: f32,
    /// Spawn and respawn position
    pub player_start: Vec2,
    /// Seconds between shots while fire is held
    pub fire_interval: f32,

    // === Bullets ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    pub muzzle_offset: f32,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_base_speed: f32,
    /// Extra speed per point of score
    pub enemy_speed_per_score: f32,
    pub enemy_max_speed: f32,
    /// Score needed for each extra enemy hit point
    pub enemy_hp_score_step: u64,
    /// Lateral wobble amplitude for jittering enemies (pixels/s)
    pub enemy_jitter: f32,

    // === Spawning ===
    pub spawn_base_interval: f32,
    /// Interval reduction per point of score
    pub spawn_interval_per_score: f32,
    pub spawn_min_interval: f32,
    pub wave_base_count: u32,
    /// Upper bound of the random wave-size increment (inclusive)
    pub wave_random_extra: u32,
    /// Score needed for each extra enemy per wave
    pub wave_score_step: u64,
    pub wave_max_count: u32,

    // === Session ===
    pub kill_reward: u64,
    pub starting_lives: u8,
    pub max_dt: f32,

    // === Effects ===
    pub hit_burst: BurstTuning,
    pub death_burst: BurstTuning,
    pub player_hit_burst: BurstTuning,
    pub game_over_burst: BurstTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_start: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT * 0.8),
            fire_interval: FIRE_INTERVAL,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            muzzle_offset: MUZZLE_OFFSET,

            enemy_radius: ENEMY_RADIUS,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_per_score: 0.02,
            enemy_max_speed: ENEMY_MAX_SPEED,
            enemy_hp_score_step: 2500,
            enemy_jitter: 40.0,

            spawn_base_interval: 1.6,
            spawn_interval_per_score: 0.0002,
            spawn_min_interval: 0.45,
            wave_base_count: 3,
            wave_random_extra: 2,
            wave_score_step: 1000,
            wave_max_count: 12,

            kill_reward: KILL_REWARD,
            starting_lives: STARTING_LIVES,
            max_dt: MAX_DT,

            hit_burst: BurstTuning {
                count: 6,
                speed: (60.0, 160.0),
                life: (0.2, 0.4),
            },
            death_burst: BurstTuning {
                count: 18,
                speed: (80.0, 260.0),
                life: (0.4, 0.9),
            },
            player_hit_burst: BurstTuning {
                count: 24,
                speed: (100.0, 300.0),
                life: (0.5, 1.0),
            },
            game_over_burst: BurstTuning {
                count: 48,
                speed: (120.0, 380.0),
                life: (0.8, 1.6),
            },
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let tuning = Self::from_json(&read_config(path)?)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<()> {
        positive("player_radius", self.player_radius)?;
        positive("player_speed", self.player_speed)?;
        positive("fire_interval", self.fire_interval)?;
        positive("bullet_radius", self.bullet_radius)?;
        positive("bullet_speed", self.bullet_speed)?;
        non_negative("muzzle_offset", self.muzzle_offset)?;
        positive("enemy_radius", self.enemy_radius)?;
        positive("enemy_base_speed", self.enemy_base_speed)?;
        non_negative("enemy_speed_per_score", self.enemy_speed_per_score)?;
        non_negative("enemy_jitter", self.enemy_jitter)?;
        positive("spawn_min_interval", self.spawn_min_interval)?;
        non_negative("spawn_interval_per_score", self.spawn_interval_per_score)?;
        positive("max_dt", self.max_dt)?;

        if !self.player_start.is_finite() {
            return Err(invalid("player_start", "must be finite"));
        }
        if self.enemy_max_speed < self.enemy_base_speed {
            return Err(invalid("enemy_max_speed", "must be >= enemy_base_speed"));
        }
        if self.spawn_base_interval < self.spawn_min_interval {
            return Err(invalid(
                "spawn_base_interval",
                "must be >= spawn_min_interval",
            ));
        }
        if self.enemy_hp_score_step == 0 {
            return Err(invalid("enemy_hp_score_step", "must be non-zero"));
        }
        if self.wave_score_step == 0 {
            return Err(invalid("wave_score_step", "must be non-zero"));
        }
        if self.wave_base_count == 0 || self.wave_max_count < self.wave_base_count {
            return Err(invalid(
                "wave_max_count",
                "must be >= wave_base_count, which must be non-zero",
            ));
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives", "must be non-zero"));
        }

        burst("hit_burst", &self.hit_burst)?;
        burst("death_burst", &self.death_burst)?;
        burst("player_hit_burst", &self.player_hit_burst)?;
        burst("game_over_burst", &self.game_over_burst)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> Error {
    Error::InvalidTuning { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be positive and finite"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be non-negative and finite"))
    }
}

fn burst(field: &'static str, b: &BurstTuning) -> Result<()> {
    let (smin, smax) = b.speed;
    let (lmin, lmax) = b.life;
    if !(smin.is_finite() && smax.is_finite() && 0.0 <= smin && smin <= smax) {
        return Err(invalid(field, "speed range must be finite and ordered"));
    }
    if !(lmin.is_finite() && lmax.is_finite() && 0.0 < lmin && lmin <= lmax) {
        return Err(invalid(field, "life range must be positive and ordered"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        Tuning::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "player_speed": 300.0, "kill_reward": 50 }"#).unwrap();
        assert_eq!(t.player_speed, 300.0);
        assert_eq!(t.kill_reward, 50);
        assert_eq!(t.bullet_speed, Tuning::default().bullet_speed);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let err = Tuning::from_json(r#"{ "enemy_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTuning {
                field: "enemy_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_burst_range() {
        let json = r#"{ "hit_burst": { "count": 4, "speed": [200.0, 100.0], "life": [0.1, 0.2] } }"#;
        let err = Tuning::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTuning {
                field: "hit_burst",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
