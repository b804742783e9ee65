//! Entity kinds and their movement/firing behavior
//!
//! Every moving entity owns its position, heading (degrees, 0° = +x, CCW) and
//! speed, and advances with `pos += heading * speed * dt`. Pursuit entities
//! re-derive their heading toward the player before moving, so the angle is
//! always a snapshot, never integrated.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{aim_angle, heading};

/// A player-fired bullet
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub angle: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self { pos, angle }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += heading(self.angle) * BULLET_SPEED * dt;
    }

    pub fn off_arena(&self) -> bool {
        self.pos.x < 0.0 || self.pos.x > ARENA_W || self.pos.y < 0.0 || self.pos.y > ARENA_H
    }
}

/// Who fired a hostile bullet; determines speed, radius and damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostileKind {
    Enemy,
    BossNormal,
    BossBig,
}

impl HostileKind {
    pub fn speed(&self) -> f32 {
        match self {
            HostileKind::Enemy => ENEMY_BULLET_SPEED,
            HostileKind::BossNormal | HostileKind::BossBig => BOSS_BULLET_SPEED,
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            HostileKind::Enemy => ENEMY_BULLET_RADIUS,
            HostileKind::BossNormal => BOSS_NORMAL_RADIUS,
            HostileKind::BossBig => BOSS_BIG_RADIUS,
        }
    }

    pub fn damage(&self) -> i32 {
        match self {
            HostileKind::Enemy => ENEMY_BULLET_DAMAGE,
            HostileKind::BossNormal => BOSS_NORMAL_DAMAGE,
            HostileKind::BossBig => BOSS_BIG_DAMAGE,
        }
    }
}

/// A bullet aimed at the player, fired by a shooter enemy or the boss
///
/// All hostile bullets share one collection; the kind tag carries the
/// per-variant stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileBullet {
    pub pos: Vec2,
    pub angle: f32,
    pub kind: HostileKind,
}

impl HostileBullet {
    pub fn new(pos: Vec2, angle: f32, kind: HostileKind) -> Self {
        Self { pos, angle, kind }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += heading(self.angle) * self.kind.speed() * dt;
    }

    /// Off-arena test is symmetric on both axes
    pub fn off_arena(&self) -> bool {
        self.pos.x < 0.0 || self.pos.x > ARENA_W || self.pos.y < 0.0 || self.pos.y > ARENA_H
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal,
    Shooter,
}

/// A pursuing enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub kind: EnemyKind,
    pub health: i32,
    pub fire_cooldown: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, kind: EnemyKind, speed: f32) -> Self {
        Self {
            pos,
            angle: 0.0,
            speed,
            kind,
            health: ENEMY_MAX_HEALTH,
            fire_cooldown: 0.0,
        }
    }

    pub fn radius(&self) -> f32 {
        ENEMY_RADIUS
    }

    /// Pure pursuit: face the target, then move straight at it
    pub fn advance(&mut self, target: Vec2, dt: f32) {
        self.angle = aim_angle(self.pos, target);
        self.pos += heading(self.angle) * self.speed * dt;
    }

    pub fn tick_cooldowns(&mut self, dt: f32) {
        if self.kind == EnemyKind::Shooter {
            self.fire_cooldown -= dt;
        }
    }

    /// Shooter variant fires from its nose when its cooldown has elapsed
    pub fn try_fire(&mut self) -> Option<HostileBullet> {
        if self.kind != EnemyKind::Shooter || self.fire_cooldown > 0.0 {
            return None;
        }
        self.fire_cooldown = ENEMY_FIRE_COOLDOWN;
        let muzzle = self.pos + heading(self.angle) * self.radius();
        Some(HostileBullet::new(muzzle, self.angle, HostileKind::Enemy))
    }

    /// Apply one point of bullet damage; returns true when the enemy dies
    pub fn take_hit(&mut self) -> bool {
        self.health -= 1;
        self.health <= 0
    }

    pub fn off_arena(&self) -> bool {
        self.pos.x < -ENEMY_CULL_MARGIN
            || self.pos.x > ARENA_W + ENEMY_CULL_MARGIN
            || self.pos.y < -ENEMY_CULL_MARGIN
            || self.pos.y > ARENA_H + ENEMY_CULL_MARGIN
    }
}

/// The boss: a singleton pursuit enemy with two independent weapons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub angle: f32,
    pub health: i32,
    pub normal_cooldown: f32,
    pub big_cooldown: f32,
    /// Cosmetic damage flash, counts down from BOSS_FLASH_DURATION
    pub flash_timer: f32,
}

impl Boss {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            angle: 0.0,
            health: BOSS_MAX_HEALTH,
            normal_cooldown: 0.0,
            big_cooldown: 0.0,
            flash_timer: 0.0,
        }
    }

    pub fn radius(&self) -> f32 {
        BOSS_RADIUS
    }

    pub fn advance(&mut self, target: Vec2, dt: f32) {
        self.angle = aim_angle(self.pos, target);
        self.pos += heading(self.angle) * BOSS_SPEED * dt;
    }

    pub fn tick_cooldowns(&mut self, dt: f32) {
        self.normal_cooldown -= dt;
        self.big_cooldown -= dt;
        if self.flash_timer > 0.0 {
            self.flash_timer -= dt;
        }
    }

    /// Frequent weak shot
    pub fn try_fire_normal(&mut self) -> Option<HostileBullet> {
        if self.normal_cooldown > 0.0 {
            return None;
        }
        self.normal_cooldown = BOSS_NORMAL_COOLDOWN;
        let muzzle = self.pos + heading(self.angle) * self.radius();
        Some(HostileBullet::new(muzzle, self.angle, HostileKind::BossNormal))
    }

    /// Rare lethal shot
    pub fn try_fire_big(&mut self) -> Option<HostileBullet> {
        if self.big_cooldown > 0.0 {
            return None;
        }
        self.big_cooldown = BOSS_BIG_COOLDOWN;
        let muzzle = self.pos + heading(self.angle) * self.radius();
        Some(HostileBullet::new(muzzle, self.angle, HostileKind::BossBig))
    }

    /// Apply one point of bullet damage; returns true when the boss dies
    pub fn take_hit(&mut self) -> bool {
        self.health -= 1;
        self.flash_timer = BOSS_FLASH_DURATION;
        self.health <= 0
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_timer > 0.0
    }

    /// Never triggers during normal pursuit, kept for cull correctness
    pub fn off_arena(&self) -> bool {
        self.pos.x < -BOSS_CULL_MARGIN
            || self.pos.x > ARENA_W + BOSS_CULL_MARGIN
            || self.pos.y < -BOSS_CULL_MARGIN
            || self.pos.y > ARENA_H + BOSS_CULL_MARGIN
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    RapidFire,
    Shield,
    Health,
}

/// A power-up drifting down from a defeated enemy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self { pos, kind }
    }

    pub fn radius(&self) -> f32 {
        POWERUP_RADIUS
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos.y -= POWERUP_FALL_SPEED * dt;
    }

    pub fn off_arena(&self) -> bool {
        self.pos.y < -POWERUP_CULL_MARGIN
    }
}

/// Explosion debris tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleTint {
    Yellow,
    Orange,
    Red,
}

/// A cosmetic explosion particle, fades out then disappears
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 0-255, decreases over time
    pub alpha: f32,
    pub tint: ParticleTint,
}

impl Particle {
    pub fn new(rng: &mut Pcg32, pos: Vec2) -> Self {
        let tint = match rng.random_range(0u8..3) {
            0 => ParticleTint::Yellow,
            1 => ParticleTint::Orange,
            _ => ParticleTint::Red,
        };
        Self {
            pos,
            vel: Vec2::new(
                rng.random_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
                rng.random_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
            ),
            size: rng.random_range(2.0..=6.0),
            alpha: 255.0,
            tint,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.alpha -= PARTICLE_FADE_RATE * dt;
    }

    pub fn alive(&self) -> bool {
        self.alpha > 0.0
    }
}
