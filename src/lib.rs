//! Nova Strike - a top-down arena space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `render`: Drawing capability boundary (the core never owns a window)

pub mod render;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_W: f32 = 900.0;
    pub const ARENA_H: f32 = 600.0;

    /// Player ship
    pub const PLAYER_RADIUS: f32 = 45.0;
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_FIRE_COOLDOWN: f32 = 0.2;
    /// Hostile bullets hurt the ship inside this fixed range of its center
    pub const PLAYER_HIT_RANGE: f32 = 15.0;

    /// Player bullets
    pub const BULLET_SPEED: f32 = 600.0;
    pub const BULLET_RADIUS: f32 = 4.0;

    /// Enemies
    pub const ENEMY_SPAWN_INTERVAL: f32 = 1.0;
    pub const ENEMY_SPAWN_OFFSET: f32 = 20.0;
    pub const ENEMY_CULL_MARGIN: f32 = 50.0;
    pub const ENEMY_SPEED_MIN: f32 = 150.0;
    pub const ENEMY_SPEED_MAX: f32 = 210.0;
    pub const ENEMY_RADIUS: f32 = 12.0;
    pub const ENEMY_MAX_HEALTH: i32 = 3;
    pub const ENEMY_FIRE_COOLDOWN: f32 = 2.0;
    pub const ENEMY_CONTACT_DAMAGE: i32 = 10;
    pub const ENEMY_SCORE: u32 = 10;

    /// Hostile bullets
    pub const ENEMY_BULLET_SPEED: f32 = 300.0;
    pub const ENEMY_BULLET_RADIUS: f32 = 6.0;
    pub const ENEMY_BULLET_DAMAGE: i32 = 10;
    pub const BOSS_BULLET_SPEED: f32 = 420.0;
    pub const BOSS_NORMAL_RADIUS: f32 = 6.0;
    pub const BOSS_NORMAL_DAMAGE: i32 = 30;
    pub const BOSS_BIG_RADIUS: f32 = 12.0;
    pub const BOSS_BIG_DAMAGE: i32 = 999;

    /// Boss
    pub const BOSS_SCORE_THRESHOLD: u32 = 210;
    pub const BOSS_RADIUS: f32 = 135.0;
    pub const BOSS_SPEED: f32 = 120.0;
    pub const BOSS_MAX_HEALTH: i32 = 100;
    pub const BOSS_NORMAL_COOLDOWN: f32 = 1.5;
    pub const BOSS_BIG_COOLDOWN: f32 = 8.0;
    pub const BOSS_FLASH_DURATION: f32 = 0.3;
    pub const BOSS_SPAWN_JITTER: f32 = 200.0;
    pub const BOSS_SPAWN_HEIGHT: f32 = 100.0;
    pub const BOSS_CULL_MARGIN: f32 = 100.0;
    pub const BOSS_SCORE: u32 = 500;

    /// Power-ups
    pub const POWERUP_RADIUS: f32 = 20.0;
    pub const POWERUP_FALL_SPEED: f32 = 60.0;
    pub const POWERUP_DROP_CHANCE: f64 = 0.2;
    pub const POWERUP_CULL_MARGIN: f32 = 50.0;
    pub const RAPID_FIRE_DURATION: f32 = 5.0;
    /// Rapid fire quarters the fire cooldown while active
    pub const RAPID_FIRE_FACTOR: f32 = 0.25;
    pub const SHIELD_HEAL: i32 = 20;
    pub const HEALTH_HEAL: i32 = 50;

    /// Explosion particles (cosmetic)
    pub const PARTICLE_COUNT: usize = 5;
    pub const PARTICLE_SPEED: f32 = 180.0;
    pub const PARTICLE_FADE_RATE: f32 = 480.0;
    pub const MAX_PARTICLES: usize = 256;
}

/// Unit vector for a heading in degrees (0° = +x axis, counter-clockwise)
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Heading in degrees from `from` toward `to`
///
/// Coincident points yield 0° rather than a NaN heading.
#[inline]
pub fn aim_angle(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    if d.length_squared() < f32::EPSILON {
        return 0.0;
    }
    d.y.atan2(d.x).to_degrees()
}
