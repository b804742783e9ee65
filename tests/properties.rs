//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use nova_strike::consts::*;
use nova_strike::sim::entity::{Bullet, Enemy, EnemyKind};
use nova_strike::sim::{GameState, Player, TickInput, circles_overlap, tick};
use nova_strike::{aim_angle, heading};

proptest! {
    /// After advance(dt) the bullet moved exactly speed*dt along its heading
    #[test]
    fn bullet_advance_displacement_is_exact(
        x in 0.0f32..ARENA_W,
        y in 0.0f32..ARENA_H,
        angle in -720.0f32..720.0,
        dt in 0.001f32..0.5,
    ) {
        let start = Vec2::new(x, y);
        let mut bullet = Bullet::new(start, angle);
        bullet.advance(dt);

        let moved = bullet.pos - start;
        let expected = heading(angle) * BULLET_SPEED * dt;
        prop_assert!((moved - expected).length() < 1e-2);
        prop_assert!((moved.length() - BULLET_SPEED * dt).abs() < 1e-2);
    }

    /// Pursuit displacement also scales with speed*dt, pointed at the target
    #[test]
    fn enemy_pursuit_displacement_is_exact(
        x in 0.0f32..ARENA_W,
        y in 0.0f32..ARENA_H,
        tx in 0.0f32..ARENA_W,
        ty in 0.0f32..ARENA_H,
        speed in 1.0f32..500.0,
        dt in 0.001f32..0.5,
    ) {
        let start = Vec2::new(x, y);
        let target = Vec2::new(tx, ty);
        prop_assume!(start.distance(target) > 1.0);

        let mut enemy = Enemy::new(start, EnemyKind::Normal, speed);
        enemy.advance(target, dt);

        let moved = enemy.pos - start;
        prop_assert!((moved.length() - speed * dt).abs() < 1e-2);
        let toward = (target - start).normalize();
        prop_assert!(moved.normalize().dot(toward) > 0.999);
    }

    /// Circle overlap is symmetric in its arguments
    #[test]
    fn circle_overlap_is_symmetric(
        ax in -1000.0f32..1000.0,
        ay in -1000.0f32..1000.0,
        bx in -1000.0f32..1000.0,
        by in -1000.0f32..1000.0,
        ra in 0.0f32..200.0,
        rb in 0.0f32..200.0,
    ) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        prop_assert_eq!(circles_overlap(a, ra, b, rb), circles_overlap(b, rb, a, ra));
    }

    /// aim_angle never produces a non-finite heading
    #[test]
    fn aim_angle_is_always_finite(
        ax in -10_000.0f32..10_000.0,
        ay in -10_000.0f32..10_000.0,
        bx in -10_000.0f32..10_000.0,
        by in -10_000.0f32..10_000.0,
    ) {
        let angle = aim_angle(Vec2::new(ax, ay), Vec2::new(bx, by));
        prop_assert!(angle.is_finite());
    }

    /// Health stays in [0, 100] under any damage/heal sequence
    #[test]
    fn player_health_always_clamped(deltas in prop::collection::vec(-500i32..500, 0..64)) {
        let mut player = Player::default();
        for delta in deltas {
            if delta < 0 {
                player.apply_damage(-delta);
            } else {
                player.heal(delta);
            }
            prop_assert!((0..=PLAYER_MAX_HEALTH).contains(&player.health));
        }
    }

    /// Whole-run invariants: health clamped, score monotonic, dead entities
    /// never survive the frame that culled them
    #[test]
    fn autopilot_run_upholds_invariants(seed in any::<u64>(), ticks in 1usize..300) {
        let mut state = GameState::new(seed);
        let input = TickInput { autopilot: true, ..Default::default() };
        let mut last_score = 0u32;

        for _ in 0..ticks {
            tick(&mut state, &input, SIM_DT);

            prop_assert!((0..=PLAYER_MAX_HEALTH).contains(&state.player.health));
            prop_assert!(state.score >= last_score);
            last_score = state.score;

            prop_assert!(state.enemies.iter().all(|e| e.health > 0));
            prop_assert!(state.enemies.iter().all(|e| !e.off_arena()));
            prop_assert!(state.bullets.iter().all(|b| !b.off_arena()));
            prop_assert!(state.particles.iter().all(|p| p.alive()));
        }
    }
}
