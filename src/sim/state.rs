//! Game state and core simulation types
//!
//! One owned aggregate holds every entity collection; the tick and collision
//! routines borrow it mutably. No ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Boss, Bullet, Enemy, HostileBullet, Particle, PowerUp, PowerUpKind};
use super::spawn::Director;
use crate::consts::*;
use crate::heading;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only the restart intent is honored
    GameOver,
}

/// Notable things that happened during a tick, for logging and frontends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    EnemyDestroyed,
    BossSpawned,
    BossDefeated,
    PowerUpCollected(PowerUpKind),
    PlayerHit,
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Aim heading in degrees; follows the pointer, not the movement direction
    pub angle: f32,
    /// Clamped to [0, PLAYER_MAX_HEALTH] after every mutation
    pub health: i32,
    pub fire_cooldown: f32,
    /// Rapid fire is active while this is positive
    pub rapid_fire_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ARENA_W / 2.0, ARENA_H / 2.0),
            angle: 0.0,
            health: PLAYER_MAX_HEALTH,
            fire_cooldown: 0.0,
            rapid_fire_timer: 0.0,
        }
    }
}

impl Player {
    pub fn radius(&self) -> f32 {
        PLAYER_RADIUS
    }

    pub fn tick_cooldowns(&mut self, dt: f32) {
        self.fire_cooldown -= dt;
    }

    /// Fire from the ship's nose when off cooldown; rapid fire quarters the
    /// cooldown that gets armed
    pub fn try_fire(&mut self) -> Option<Bullet> {
        if self.fire_cooldown > 0.0 {
            return None;
        }
        let mut cooldown = PLAYER_FIRE_COOLDOWN;
        if self.rapid_fire_timer > 0.0 {
            cooldown *= RAPID_FIRE_FACTOR;
        }
        self.fire_cooldown = cooldown;
        let muzzle = self.pos + heading(self.angle) * self.radius();
        Some(Bullet::new(muzzle, self.angle))
    }

    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, PLAYER_MAX_HEALTH);
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).clamp(0, PLAYER_MAX_HEALTH);
    }

    /// Keep the full silhouette inside the arena
    pub fn clamp_to_arena(&mut self) {
        self.pos.x = self.pos.x.clamp(self.radius(), ARENA_W - self.radius());
        self.pos.y = self.pos.y.clamp(self.radius(), ARENA_H - self.radius());
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Shared random source, injected through every construction path
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    pub director: Director,
    pub bullets: Vec<Bullet>,
    pub hostile_bullets: Vec<HostileBullet>,
    pub enemies: Vec<Enemy>,
    /// At most one boss exists at any time
    pub boss: Option<Boss>,
    pub powerups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            player: Player::default(),
            director: Director::new(),
            bullets: Vec::new(),
            hostile_bullets: Vec::new(),
            enemies: Vec::new(),
            boss: None,
            powerups: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Damage the player and flip to GameOver at zero health
    ///
    /// A no-op once the run has ended, so nothing mutates between death and
    /// restart.
    pub fn damage_player(&mut self, amount: i32) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.player.apply_damage(amount);
        self.events.push(GameEvent::PlayerHit);
        if self.player.is_dead() {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
            log::info!("game over at score {}", self.score);
        }
    }

    /// Award points; scoring stops once the run has ended
    pub fn add_score(&mut self, points: u32) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.score += points;
    }

    pub fn apply_powerup(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::RapidFire => self.player.rapid_fire_timer = RAPID_FIRE_DURATION,
            PowerUpKind::Shield => self.player.heal(SHIELD_HEAL),
            PowerUpKind::Health => self.player.heal(HEALTH_HEAL),
        }
        self.events.push(GameEvent::PowerUpCollected(kind));
    }

    /// Reset for a fresh run: player back to center, score zeroed, and every
    /// transient collection cleared, boss and power-ups included
    pub fn restart(&mut self) {
        self.player = Player::default();
        self.director = Director::new();
        self.score = 0;
        self.bullets.clear();
        self.hostile_bullets.clear();
        self.enemies.clear();
        self.boss = None;
        self.powerups.clear();
        self.particles.clear();
        self.phase = GamePhase::Playing;
        log::info!("restarting run");
    }
}
