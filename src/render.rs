//! Drawing capability boundary
//!
//! The simulation core never owns a window. A frontend hands in anything
//! implementing [`Canvas`] and [`draw_scene`] describes the frame with plain
//! shape and text calls.

use glam::Vec2;

use crate::consts::*;
use crate::heading;
use crate::sim::entity::{Boss, Enemy, EnemyKind, HostileKind, ParticleTint, PowerUpKind};
use crate::sim::state::{GamePhase, GameState};

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const ORANGE_RED: Color = Color::rgb(255, 69, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
}

/// Shape and text drawing capability consumed by the core
pub trait Canvas {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
    fn draw_polygon(&mut self, points: &[Vec2], color: Color);
    fn draw_rect(&mut self, center: Vec2, w: f32, h: f32, color: Color);
    fn draw_rect_outline(&mut self, center: Vec2, w: f32, h: f32, color: Color, border: f32);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color, size: f32);
}

/// Canvas that draws nothing; used by the headless demo and tests
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
    fn draw_triangle(&mut self, _a: Vec2, _b: Vec2, _c: Vec2, _color: Color) {}
    fn draw_polygon(&mut self, _points: &[Vec2], _color: Color) {}
    fn draw_rect(&mut self, _center: Vec2, _w: f32, _h: f32, _color: Color) {}
    fn draw_rect_outline(&mut self, _center: Vec2, _w: f32, _h: f32, _color: Color, _border: f32) {}
    fn draw_text(&mut self, _text: &str, _pos: Vec2, _color: Color, _size: f32) {}
}

/// Draw the complete frame for the current state
pub fn draw_scene(state: &GameState, canvas: &mut dyn Canvas) {
    if state.phase == GamePhase::GameOver {
        canvas.draw_text(
            "GAME OVER - Press 'R' to Restart",
            Vec2::new(ARENA_W / 2.0, ARENA_H / 2.0),
            Color::RED,
            30.0,
        );
        return;
    }

    if let Some(boss) = &state.boss {
        draw_boss(boss, canvas);
    }

    for enemy in &state.enemies {
        draw_enemy(enemy, canvas);
    }

    draw_player_ship(state, canvas);

    for bullet in &state.bullets {
        canvas.draw_circle(bullet.pos, BULLET_RADIUS, Color::YELLOW);
    }

    for bullet in &state.hostile_bullets {
        let color = match bullet.kind {
            HostileKind::Enemy => Color::YELLOW,
            HostileKind::BossNormal => Color::ORANGE_RED,
            HostileKind::BossBig => Color::YELLOW,
        };
        canvas.draw_circle(bullet.pos, bullet.kind.radius(), color);
    }

    for powerup in &state.powerups {
        let (color, glyph) = match powerup.kind {
            PowerUpKind::RapidFire => (Color::CYAN, "R"),
            PowerUpKind::Shield => (Color::BLUE, "S"),
            PowerUpKind::Health => (Color::GREEN, "H"),
        };
        canvas.draw_circle(powerup.pos, powerup.radius(), color);
        canvas.draw_text(glyph, powerup.pos - Vec2::splat(6.0), Color::WHITE, 12.0);
    }

    for particle in &state.particles {
        let base = match particle.tint {
            ParticleTint::Yellow => Color::YELLOW,
            ParticleTint::Orange => Color::ORANGE,
            ParticleTint::Red => Color::RED,
        };
        let alpha = particle.alpha.clamp(0.0, 255.0) as u8;
        canvas.draw_circle(particle.pos, particle.size, base.with_alpha(alpha));
    }

    canvas.draw_text(
        &format!("Score: {} Health: {}", state.score, state.player.health),
        Vec2::new(10.0, 10.0),
        Color::WHITE,
        16.0,
    );
}

/// The ship is a triangle: nose at 1.5x radius, tail corners swept ±150°
fn draw_player_ship(state: &GameState, canvas: &mut dyn Canvas) {
    let player = &state.player;
    let pos = player.pos;
    let r = player.radius();
    let a = player.angle;
    canvas.draw_triangle(
        pos + heading(a) * r * 1.5,
        pos + heading(a + 150.0) * r,
        pos + heading(a - 150.0) * r,
        Color::WHITE,
    );
}

/// Enemies are narrower darts: nose at 2x radius, tail corners at ±140°
fn draw_enemy(enemy: &Enemy, canvas: &mut dyn Canvas) {
    let color = match enemy.kind {
        EnemyKind::Shooter => Color::RED,
        EnemyKind::Normal => Color::BLUE,
    };
    let pos = enemy.pos;
    let r = enemy.radius();
    let a = enemy.angle;
    canvas.draw_triangle(
        pos + heading(a) * r * 2.0,
        pos + heading(a + 140.0) * r,
        pos + heading(a - 140.0) * r,
        color,
    );

    // Health bar appears once damaged
    if enemy.health < ENEMY_MAX_HEALTH {
        let bar_center = pos + Vec2::new(0.0, r + 30.0);
        let frac = enemy.health as f32 / ENEMY_MAX_HEALTH as f32;
        draw_health_bar(canvas, bar_center, 40.0, 5.0, frac, Color::GREEN);
    }
}

/// The boss is a quad stretched along its heading, flashing white when hit
fn draw_boss(boss: &Boss, canvas: &mut dyn Canvas) {
    let color = if boss.is_flashing() {
        Color::WHITE
    } else {
        Color::ORANGE
    };
    let pos = boss.pos;
    let r = boss.radius();
    let a = boss.angle;
    let points = [
        pos + heading(a) * r * 1.5,
        pos + heading(a + 90.0) * r,
        pos + heading(a + 180.0) * r * 1.5,
        pos + heading(a + 270.0) * r,
    ];
    canvas.draw_polygon(&points, color);

    let frac = boss.health as f32 / BOSS_MAX_HEALTH as f32;
    let fill = if frac > 0.7 {
        Color::GREEN
    } else if frac > 0.4 {
        Color::YELLOW
    } else {
        Color::RED
    };
    let bar_center = pos + Vec2::new(0.0, r + 40.0);
    draw_health_bar(canvas, bar_center, 200.0, 15.0, frac, fill);
    canvas.draw_text(
        &format!("BOSS HP: {}/{}", boss.health, BOSS_MAX_HEALTH),
        bar_center + Vec2::new(-80.0, 25.0),
        Color::WHITE,
        12.0,
    );
}

/// Red background, partial fill from the left, white outline
fn draw_health_bar(canvas: &mut dyn Canvas, center: Vec2, w: f32, h: f32, frac: f32, fill: Color) {
    let frac = frac.clamp(0.0, 1.0);
    canvas.draw_rect(center, w, h, Color::RED);
    let fill_w = frac * w;
    let fill_center = center - Vec2::new((w - fill_w) / 2.0, 0.0);
    canvas.draw_rect(fill_center, fill_w, h, fill);
    canvas.draw_rect_outline(center, w, h, Color::WHITE, 1.0);
}
