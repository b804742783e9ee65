//! Timer-driven spawning and random entity construction
//!
//! All random draws go through the caller-provided `Pcg32` so runs stay
//! reproducible under a fixed seed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Boss, Enemy, EnemyKind, Particle, PowerUp, PowerUpKind};
use crate::consts::*;

/// Drives enemy wave pressure and the one-time boss entrance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    enemy_timer: f32,
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

impl Director {
    /// Timer starts elapsed so the first enemy appears on the first tick
    pub fn new() -> Self {
        Self { enemy_timer: 0.0 }
    }

    /// Count down the spawn timer; yields one enemy per elapsed interval
    pub fn maybe_spawn_enemy(&mut self, rng: &mut Pcg32, dt: f32) -> Option<Enemy> {
        self.enemy_timer -= dt;
        if self.enemy_timer <= 0.0 {
            self.enemy_timer = ENEMY_SPAWN_INTERVAL;
            Some(spawn_enemy(rng))
        } else {
            None
        }
    }

    /// Edge-triggered boss condition: threshold crossed and no boss alive
    pub fn boss_due(&self, score: u32, boss_alive: bool) -> bool {
        score >= BOSS_SCORE_THRESHOLD && !boss_alive
    }
}

/// New enemy just outside a random arena edge, with random kind and speed
pub fn spawn_enemy(rng: &mut Pcg32) -> Enemy {
    let pos = match rng.random_range(0u8..4) {
        // Top
        0 => Vec2::new(rng.random_range(0.0..ARENA_W), ARENA_H + ENEMY_SPAWN_OFFSET),
        // Right
        1 => Vec2::new(ARENA_W + ENEMY_SPAWN_OFFSET, rng.random_range(0.0..ARENA_H)),
        // Bottom
        2 => Vec2::new(rng.random_range(0.0..ARENA_W), -ENEMY_SPAWN_OFFSET),
        // Left
        _ => Vec2::new(-ENEMY_SPAWN_OFFSET, rng.random_range(0.0..ARENA_H)),
    };
    let kind = if rng.random_bool(0.5) {
        EnemyKind::Shooter
    } else {
        EnemyKind::Normal
    };
    let speed = rng.random_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX);
    Enemy::new(pos, kind, speed)
}

/// New boss above the arena top-center with horizontal jitter
pub fn spawn_boss(rng: &mut Pcg32) -> Boss {
    let x = ARENA_W / 2.0 + rng.random_range(-BOSS_SPAWN_JITTER..=BOSS_SPAWN_JITTER);
    Boss::new(Vec2::new(x, ARENA_H + BOSS_SPAWN_HEIGHT))
}

/// Roll the power-up drop at a defeated enemy's position
///
/// The roll only happens on an actual kill; a hit that leaves the enemy
/// alive never drops anything.
pub fn roll_powerup(rng: &mut Pcg32, pos: Vec2) -> Option<PowerUp> {
    if !rng.random_bool(POWERUP_DROP_CHANCE) {
        return None;
    }
    let kind = match rng.random_range(0u8..3) {
        0 => PowerUpKind::RapidFire,
        1 => PowerUpKind::Shield,
        _ => PowerUpKind::Health,
    };
    Some(PowerUp::new(pos, kind))
}

/// Scatter explosion debris at a kill site, respecting the particle cap
pub fn spawn_explosion(particles: &mut Vec<Particle>, rng: &mut Pcg32, pos: Vec2) {
    for _ in 0..PARTICLE_COUNT {
        if particles.len() >= MAX_PARTICLES {
            break;
        }
        particles.push(Particle::new(rng, pos));
    }
}
