//! Nova Strike headless demo
//!
//! Runs the simulation at the fixed timestep with the autopilot flying the
//! ship, logs notable events, and prints a JSON run summary. A graphical
//! frontend would drive the same `tick`/`draw_scene` pair from its frame
//! loop, feeding real input instead of the autopilot.

use serde::Serialize;

use nova_strike::consts::SIM_DT;
use nova_strike::render::{NullCanvas, draw_scene};
use nova_strike::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Demo run length in simulated seconds
const DEMO_SECONDS: f32 = 120.0;

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    score: u32,
    health: i32,
    boss_defeated: bool,
    outcome: &'static str,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    log::info!("demo run starting, seed {seed}");

    let mut state = GameState::new(seed);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut canvas = NullCanvas;
    let mut boss_defeated = false;

    let total_ticks = (DEMO_SECONDS / SIM_DT) as u64;
    for _ in 0..total_ticks {
        tick(&mut state, &input, SIM_DT);
        for event in &state.events {
            match event {
                GameEvent::BossSpawned => log::info!("boss spawned"),
                GameEvent::BossDefeated => {
                    boss_defeated = true;
                    log::info!("boss defeated");
                }
                GameEvent::PowerUpCollected(kind) => log::info!("picked up {kind:?}"),
                GameEvent::GameOver => log::info!("ship destroyed"),
                _ => log::debug!("{event:?}"),
            }
        }
        draw_scene(&state, &mut canvas);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let summary = RunSummary {
        seed,
        ticks: state.time_ticks,
        score: state.score,
        health: state.player.health,
        boss_defeated,
        outcome: match state.phase {
            GamePhase::GameOver => "destroyed",
            GamePhase::Playing => "survived",
        },
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize run summary: {err}"),
    }
}
