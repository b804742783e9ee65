//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. The frame
//! order matters: intents, spawning, movement, then collision resolution,
//! with hostile damage able to end the run mid-frame.

use glam::Vec2;

use super::collision::{
    check_boss_spawn, resolve_bullets_vs_boss, resolve_bullets_vs_enemies,
    resolve_enemies_vs_player, resolve_hostile_bullets_vs_player, resolve_powerups_vs_player,
};
use super::state::{GamePhase, GameState};
use crate::aim_angle;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement intents
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire is held (key or pointer button)
    pub fire: bool,
    /// Pointer position in arena coordinates; the ship aims at it
    pub aim: Option<Vec2>,
    /// One-shot restart intent, only honored in GameOver
    pub restart: bool,
    /// Demo mode - the ship flies itself
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    let input = if input.autopilot {
        autopilot(state, input)
    } else {
        input.clone()
    };

    state.time_ticks += 1;

    // Aim follows the pointer
    if let Some(pointer) = input.aim {
        state.player.angle = aim_angle(state.player.pos, pointer);
    }

    // Cooldowns, then the fire intent
    state.player.tick_cooldowns(dt);
    if input.fire {
        if let Some(bullet) = state.player.try_fire() {
            state.bullets.push(bullet);
        }
    }

    // Spawner tick
    if let Some(enemy) = state.director.maybe_spawn_enemy(&mut state.rng, dt) {
        state.enemies.push(enemy);
    }

    // Movement intents, per axis, clamped to keep the silhouette inside
    if input.up {
        state.player.pos.y += PLAYER_SPEED * dt;
    }
    if input.down {
        state.player.pos.y -= PLAYER_SPEED * dt;
    }
    if input.left {
        state.player.pos.x -= PLAYER_SPEED * dt;
    }
    if input.right {
        state.player.pos.x += PLAYER_SPEED * dt;
    }
    state.player.clamp_to_arena();

    // Player bullets advance and cull
    for bullet in &mut state.bullets {
        bullet.advance(dt);
    }
    state.bullets.retain(|b| !b.off_arena());

    // Hostile bullets advance, then proximity damage and cull in one pass
    for bullet in &mut state.hostile_bullets {
        bullet.advance(dt);
    }
    resolve_hostile_bullets_vs_player(state);
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Enemies pursue, shooters fire
    let target = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.advance(target, dt);
        enemy.tick_cooldowns(dt);
        if let Some(bullet) = enemy.try_fire() {
            state.hostile_bullets.push(bullet);
        }
    }
    resolve_enemies_vs_player(state);
    if state.phase == GamePhase::GameOver {
        return;
    }

    resolve_bullets_vs_enemies(state);

    // Boss lifecycle
    check_boss_spawn(state);
    if let Some(boss) = state.boss.as_mut() {
        boss.advance(target, dt);
        boss.tick_cooldowns(dt);
        if let Some(bullet) = boss.try_fire_normal() {
            state.hostile_bullets.push(bullet);
        }
        if let Some(bullet) = boss.try_fire_big() {
            state.hostile_bullets.push(bullet);
        }
    }
    resolve_bullets_vs_boss(state);

    // Power-ups drift, cull, pick up
    for powerup in &mut state.powerups {
        powerup.advance(dt);
    }
    resolve_powerups_vs_player(state);

    // Cosmetic particles
    for particle in &mut state.particles {
        particle.advance(dt);
    }
    state.particles.retain(|p| p.alive());

    // Rapid fire winds down last
    if state.player.rapid_fire_timer > 0.0 {
        state.player.rapid_fire_timer -= dt;
    }
}

/// Demo mode: aim at the boss (else the nearest enemy), hold fire, and drift
/// back toward the arena center so edge spawns can't pin the ship
fn autopilot(state: &GameState, base: &TickInput) -> TickInput {
    let mut input = base.clone();
    let player_pos = state.player.pos;

    let target = state.boss.as_ref().map(|b| b.pos).or_else(|| {
        state
            .enemies
            .iter()
            .min_by(|a, b| {
                let da = a.pos.distance_squared(player_pos);
                let db = b.pos.distance_squared(player_pos);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|e| e.pos)
    });
    input.aim = target;
    input.fire = true;

    let center = Vec2::new(ARENA_W / 2.0, ARENA_H / 2.0);
    let deadzone = 40.0;
    input.left = player_pos.x > center.x + deadzone;
    input.right = player_pos.x < center.x - deadzone;
    input.down = player_pos.y > center.y + deadzone;
    input.up = player_pos.y < center.y - deadzone;

    input
}
