//! Collision detection and per-rule resolution
//!
//! Everything is a circle: two shapes overlap when the distance between
//! centers is under the sum of their radii. The boss is the one exception,
//! using its own radius alone as a single combined hitbox.
//!
//! Each `resolve_*` routine handles one pair of entity classes and removes
//! what it destroys before returning, so no dead entity survives the frame.
//! A bullet or enemy resolves at most once per frame (first match wins).

use glam::Vec2;

use super::spawn::{roll_powerup, spawn_explosion};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Circle-overlap test: distance under the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Fixed-range proximity test (hostile bullets vs the ship's center)
#[inline]
pub fn within_range(a: Vec2, b: Vec2, range: f32) -> bool {
    a.distance(b) < range
}

/// Player bullets vs enemies: 1 damage per hit, bullet always consumed
///
/// A kill scores, may drop a power-up at the enemy's position, and scatters
/// debris.
pub fn resolve_bullets_vs_enemies(state: &mut GameState) {
    let mut bi = 0;
    while bi < state.bullets.len() {
        let bullet_pos = state.bullets[bi].pos;
        let mut consumed = false;

        let mut ei = 0;
        while ei < state.enemies.len() {
            let (enemy_pos, enemy_radius) = {
                let enemy = &state.enemies[ei];
                (enemy.pos, enemy.radius())
            };
            if circles_overlap(bullet_pos, BULLET_RADIUS, enemy_pos, enemy_radius) {
                if state.enemies[ei].take_hit() {
                    state.enemies.remove(ei);
                    state.add_score(ENEMY_SCORE);
                    state.events.push(GameEvent::EnemyDestroyed);
                    spawn_explosion(&mut state.particles, &mut state.rng, enemy_pos);
                    if let Some(powerup) = roll_powerup(&mut state.rng, enemy_pos) {
                        state.powerups.push(powerup);
                    }
                }
                consumed = true;
                break;
            }
            ei += 1;
        }

        if consumed {
            state.bullets.remove(bi);
        } else {
            bi += 1;
        }
    }
}

/// Player bullets vs the boss: one bullet resolves per frame
///
/// The hit test uses the boss radius alone, a deliberate simplification for
/// the oversized hitbox.
pub fn resolve_bullets_vs_boss(state: &mut GameState) {
    let Some((boss_pos, boss_radius)) = state.boss.as_ref().map(|b| (b.pos, b.radius())) else {
        return;
    };

    let hit = state
        .bullets
        .iter()
        .position(|b| within_range(b.pos, boss_pos, boss_radius));
    let Some(bi) = hit else {
        return;
    };
    state.bullets.remove(bi);

    let died = match state.boss.as_mut() {
        Some(boss) => boss.take_hit(),
        None => false,
    };
    if died {
        state.boss = None;
        state.add_score(BOSS_SCORE);
        state.events.push(GameEvent::BossDefeated);
        spawn_explosion(&mut state.particles, &mut state.rng, boss_pos);
    }
}

/// Hostile bullets vs the player, plus off-arena culling in the same pass
pub fn resolve_hostile_bullets_vs_player(state: &mut GameState) {
    let player_pos = state.player.pos;
    let mut i = 0;
    while i < state.hostile_bullets.len() {
        let bullet = state.hostile_bullets[i];
        if within_range(bullet.pos, player_pos, PLAYER_HIT_RANGE) {
            state.hostile_bullets.remove(i);
            state.damage_player(bullet.kind.damage());
        } else if bullet.off_arena() {
            state.hostile_bullets.remove(i);
        } else {
            i += 1;
        }
    }
}

/// Enemy contact damage and off-arena culling
///
/// Contact is always lethal to the enemy; the player takes fixed damage.
pub fn resolve_enemies_vs_player(state: &mut GameState) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius();
    let mut i = 0;
    while i < state.enemies.len() {
        let (enemy_pos, enemy_radius) = {
            let enemy = &state.enemies[i];
            (enemy.pos, enemy.radius())
        };
        if circles_overlap(enemy_pos, enemy_radius, player_pos, player_radius) {
            state.enemies.remove(i);
            spawn_explosion(&mut state.particles, &mut state.rng, enemy_pos);
            state.damage_player(ENEMY_CONTACT_DAMAGE);
        } else if state.enemies[i].off_arena() {
            state.enemies.remove(i);
        } else {
            i += 1;
        }
    }
}

/// Power-up pickup and off-arena culling
pub fn resolve_powerups_vs_player(state: &mut GameState) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius();
    let mut i = 0;
    while i < state.powerups.len() {
        let powerup = state.powerups[i];
        if powerup.off_arena() {
            state.powerups.remove(i);
        } else if circles_overlap(powerup.pos, powerup.radius(), player_pos, player_radius) {
            state.powerups.remove(i);
            state.apply_powerup(powerup.kind);
        } else {
            i += 1;
        }
    }
}

/// Boss spawn edge-trigger, checked once per frame after scoring
pub fn check_boss_spawn(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    if state.director.boss_due(state.score, state.boss.is_some()) {
        state.boss = Some(super::spawn::spawn_boss(&mut state.rng));
        state.events.push(GameEvent::BossSpawned);
        log::info!("boss inbound at score {}", state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Boss, Bullet, Enemy, EnemyKind, HostileBullet, HostileKind, PowerUp, PowerUpKind};

    fn playing_state() -> GameState {
        GameState::new(77)
    }

    #[test]
    fn test_circle_overlap_symmetry() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(circles_overlap(a, 6.0, b, 5.0), circles_overlap(b, 5.0, a, 6.0));
        assert!(circles_overlap(a, 6.0, b, 5.0));
        assert!(!circles_overlap(a, 4.0, b, 5.0));
    }

    #[test]
    fn test_bullet_kills_enemy_after_three_hits() {
        let mut state = playing_state();
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), EnemyKind::Normal, 0.0));

        for expected_health in [2, 1] {
            state.bullets.push(Bullet::new(Vec2::new(100.0, 100.0), 0.0));
            resolve_bullets_vs_enemies(&mut state);
            assert!(state.bullets.is_empty(), "bullet consumed on hit");
            assert_eq!(state.enemies[0].health, expected_health);
            assert_eq!(state.score, 0);
        }

        state.bullets.push(Bullet::new(Vec2::new(100.0, 100.0), 0.0));
        resolve_bullets_vs_enemies(&mut state);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, ENEMY_SCORE);
    }

    #[test]
    fn test_bullet_resolves_against_one_enemy_only() {
        let mut state = playing_state();
        // Two overlapping enemies; one bullet must only damage the first
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), EnemyKind::Normal, 0.0));
        state.enemies.push(Enemy::new(Vec2::new(102.0, 100.0), EnemyKind::Normal, 0.0));
        state.bullets.push(Bullet::new(Vec2::new(100.0, 100.0), 0.0));

        resolve_bullets_vs_enemies(&mut state);

        let total_health: i32 = state.enemies.iter().map(|e| e.health).sum();
        assert_eq!(total_health, ENEMY_MAX_HEALTH * 2 - 1);
    }

    #[test]
    fn test_powerup_only_drops_on_kill() {
        // A hit that leaves the enemy alive must not consume an rng draw for
        // the drop roll: verify by comparing rng positions.
        let mut state = playing_state();
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), EnemyKind::Normal, 0.0));
        state.bullets.push(Bullet::new(Vec2::new(100.0, 100.0), 0.0));
        let rng_before = state.rng.clone();
        resolve_bullets_vs_enemies(&mut state);
        assert_eq!(state.rng, rng_before, "non-lethal hit must not roll");
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_boss_hit_uses_boss_radius_alone() {
        let mut state = playing_state();
        state.boss = Some(Boss::new(Vec2::new(450.0, 300.0)));
        // Just inside the boss radius
        state.bullets.push(Bullet::new(Vec2::new(450.0 + BOSS_RADIUS - 1.0, 300.0), 0.0));
        resolve_bullets_vs_boss(&mut state);
        assert!(state.bullets.is_empty());
        assert_eq!(state.boss.as_ref().map(|b| b.health), Some(BOSS_MAX_HEALTH - 1));

        // Just outside: no hit even though bullet radius would overlap a
        // sum-of-radii test
        state.bullets.push(Bullet::new(Vec2::new(450.0 + BOSS_RADIUS + 1.0, 300.0), 0.0));
        resolve_bullets_vs_boss(&mut state);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_one_bullet_per_frame_resolves_against_boss() {
        let mut state = playing_state();
        state.boss = Some(Boss::new(Vec2::new(450.0, 300.0)));
        state.bullets.push(Bullet::new(Vec2::new(450.0, 300.0), 0.0));
        state.bullets.push(Bullet::new(Vec2::new(451.0, 300.0), 0.0));

        resolve_bullets_vs_boss(&mut state);

        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.boss.as_ref().map(|b| b.health), Some(BOSS_MAX_HEALTH - 1));
    }

    #[test]
    fn test_boss_death_awards_bonus_and_clears() {
        let mut state = playing_state();
        let mut boss = Boss::new(Vec2::new(450.0, 300.0));
        boss.health = 1;
        state.boss = Some(boss);
        state.bullets.push(Bullet::new(Vec2::new(450.0, 300.0), 0.0));

        resolve_bullets_vs_boss(&mut state);

        assert!(state.boss.is_none());
        assert_eq!(state.score, BOSS_SCORE);
        assert!(state.events.contains(&GameEvent::BossDefeated));
    }

    #[test]
    fn test_enemy_contact_damages_player_and_removes_enemy() {
        let mut state = playing_state();
        let player_pos = state.player.pos;
        state.enemies.push(Enemy::new(player_pos + Vec2::new(10.0, 0.0), EnemyKind::Normal, 0.0));

        resolve_enemies_vs_player(&mut state);

        assert_eq!(state.player.health, PLAYER_MAX_HEALTH - ENEMY_CONTACT_DAMAGE);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_hostile_bullet_proximity_damage() {
        let mut state = playing_state();
        let player_pos = state.player.pos;
        // Inside the fixed hit range
        state
            .hostile_bullets
            .push(HostileBullet::new(player_pos + Vec2::new(10.0, 0.0), 0.0, HostileKind::Enemy));
        // Outside the hit range but well within the ship silhouette
        state
            .hostile_bullets
            .push(HostileBullet::new(player_pos + Vec2::new(30.0, 0.0), 0.0, HostileKind::Enemy));

        resolve_hostile_bullets_vs_player(&mut state);

        assert_eq!(state.player.health, PLAYER_MAX_HEALTH - ENEMY_BULLET_DAMAGE);
        assert_eq!(state.hostile_bullets.len(), 1);
    }

    #[test]
    fn test_boss_big_bullet_is_lethal() {
        let mut state = playing_state();
        let player_pos = state.player.pos;
        state
            .hostile_bullets
            .push(HostileBullet::new(player_pos, 0.0, HostileKind::BossBig));

        resolve_hostile_bullets_vs_player(&mut state);

        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_powerup_pickup_applies_effect_once() {
        let mut state = playing_state();
        state.player.health = 50;
        state.powerups.push(PowerUp::new(state.player.pos, PowerUpKind::Shield));

        resolve_powerups_vs_player(&mut state);
        assert_eq!(state.player.health, 70);
        assert!(state.powerups.is_empty());

        // Nothing left to pick up
        resolve_powerups_vs_player(&mut state);
        assert_eq!(state.player.health, 70);
    }

    #[test]
    fn test_boss_singleton_refused_while_alive() {
        let mut state = playing_state();
        state.score = BOSS_SCORE_THRESHOLD;
        check_boss_spawn(&mut state);
        assert!(state.boss.is_some());

        let boss_pos = state.boss.as_ref().map(|b| b.pos);
        check_boss_spawn(&mut state);
        assert_eq!(state.boss.as_ref().map(|b| b.pos), boss_pos, "no respawn while alive");
    }
}
