//! Palette Run entry point
//!
//! Native builds have no window yet: the binary runs the game headless with a
//! seeded pilot at the input and logs what happened. Useful as a soak test
//! for new layouts.
//!
//! Usage: `palette-run [settings.json] [frames] [seed]`

use palette_run::consts::SIM_DT;
use palette_run::input::RandomPilot;
use palette_run::renderer::QuadBatch;
use palette_run::sim::LevelEvent;
use palette_run::{Game, Settings};

const DEFAULT_FRAMES: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Palette Run (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let mut batch = QuadBatch::new(settings.colors);
    let mut game = Game::new(settings);
    let mut pilot = RandomPilot::new(seed);

    let (mut jumps, mut landings) = (0u32, 0u32);
    while game.is_running() && game.frame_count() < frames {
        let events = pilot.next_events();
        for event in game.frame(SIM_DT, &events, &mut batch) {
            match event {
                LevelEvent::Jumped => jumps += 1,
                LevelEvent::Landed => landings += 1,
            }
        }
    }

    let level = game.level();
    log::info!(
        "Ran {} frames: {} jumps, {} landings, camera offset {:.0}, palette {:?}",
        game.frame_count(),
        jumps,
        landings,
        level.camera().offset,
        level.palette()
    );
    if let Some(player) = level.player() {
        log::info!("Player ended at {:?} ({:?})", player.rect.top_left(), player.status);
    }
    log::info!(
        "Last frame: {} draw calls, {} bytes of vertex data",
        batch.draw_calls(),
        batch.as_bytes().len()
    );
}
