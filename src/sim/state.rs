//! Game state and core simulation types
//!
//! The entity store: one optional player plus insertion-ordered collections of
//! bullets, enemies and particles, and the session counters around them.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session yet, waiting for a start command
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Session frozen, no simulation steps
    Paused,
    /// Lives exhausted; final snapshot stays renderable
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
    /// Movement speed (pixels/s)
    pub speed: f32,
    /// Seconds until the next shot is allowed
    pub fire_cooldown: f32,
    /// Facing angle toward the aim target (radians)
    pub angle: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start,
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
            alive: true,
            speed: tuning.player_speed,
            fire_cooldown: 0.0,
            angle: -std::f32::consts::FRAC_PI_2, // Facing up the field
        }
    }
}

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    /// Reserved; the base ruleset never spawns enemy fire
    Enemy,
}

/// A projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
    pub owner: BulletOwner,
}

/// Enemy movement flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPattern {
    /// Straight pursuit
    Direct,
    /// Pursuit with a lateral wobble
    Jitter,
}

impl EnemyPattern {
    pub const ALL: [EnemyPattern; 2] = [EnemyPattern::Direct, EnemyPattern::Jitter];
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Last applied seek velocity (derived each tick, not integrated on its own)
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
    pub hp: u32,
    pub pattern: EnemyPattern,
    /// Seconds since spawn
    pub age: f32,
}

/// Display color tag for particles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Bullet impact on a surviving enemy
    Spark,
    /// Enemy destroyed
    Explosion,
    /// Player took a hit
    Damage,
    /// Game over
    Finale,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining
    pub life: f32,
    /// Lifetime at spawn, for alpha fade
    pub max_life: f32,
    pub color: ParticleColor,
}

impl Particle {
    /// Remaining life as a 0-1 fade factor
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            0.0
        } else {
            (self.life / self.max_life).clamp(0.0, 1.0)
        }
    }
}

/// Notable things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    WaveSpawned { count: u32 },
    EnemyHit { id: u32 },
    EnemyKilled { id: u32 },
    ScoreChanged(u64),
    LivesChanged(u8),
    PlayerHit,
    GameOver { score: u64 },
}

/// Complete simulation state, owned by the host and advanced by [`super::tick`]
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG shared by the spawner and emitter
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Present exactly while a session is running or paused
    pub player: Option<Player>,
    /// Live bullets (insertion order)
    pub bullets: Vec<Bullet>,
    /// Live enemies (insertion order decides collision ties)
    pub enemies: Vec<Enemy>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Seconds until the next wave
    pub spawn_timer: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds in the current session
    pub elapsed: f32,
    pub tuning: Tuning,
    pub settings: Settings,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default(), Settings::default())
    }

    /// Create an idle game state with explicit tuning and settings.
    ///
    /// Fails if `tuning` does not pass [`Tuning::validate`].
    pub fn with_config(seed: u64, tuning: Tuning, settings: Settings) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning, settings))
    }

    fn build(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            lives: tuning.starting_lives,
            player: None,
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            spawn_timer: 0.0,
            time_ticks: 0,
            elapsed: 0.0,
            tuning,
            settings,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a fresh session: clear everything, recreate the player, spawn promptly
    pub fn start_session(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.bullets.clear();
        self.enemies.clear();
        self.particles.clear();
        self.player = Some(Player::new(&self.tuning));
        self.spawn_timer = 0.0;
        self.elapsed = 0.0;
        self.phase = GamePhase::Running;

        self.push_event(GameEvent::Started);
        self.push_event(GameEvent::ScoreChanged(self.score));
        self.push_event(GameEvent::LivesChanged(self.lives));
        log::info!("Session started (seed {}, lives {})", self.seed, self.lives);
    }

    /// Add points for a kill. Score never decreases.
    pub fn add_score(&mut self, points: u64) {
        if points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        self.push_event(GameEvent::ScoreChanged(self.score));
    }

    /// Remove one life, returning how many remain
    pub fn lose_life(&mut self) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        self.push_event(GameEvent::LivesChanged(self.lives));
        self.lives
    }

    /// Drop every entity flagged dead so none survive into the next tick
    pub fn cull_dead(&mut self) {
        self.bullets.retain(|b| b.alive);
        self.enemies.retain(|e| e.alive);
        self.particles.retain(|p| p.life > 0.0);
        if self.player.as_ref().is_some_and(|p| !p.alive) {
            self.player = None;
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Events recorded by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events recorded by the most recent tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether the simulation advances on the next tick
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
