//! Frame driver
//!
//! Polls input once per host frame, applies discrete commands before any
//! simulation runs, then steps the level at a fixed rate.

use crate::consts::*;
use crate::input::{Command, InputEvent, KeyState};
use crate::renderer::Canvas;
use crate::settings::Settings;
use crate::sim::{Level, LevelEvent};

/// Game instance holding all state
pub struct Game {
    pub settings: Settings,
    level: Level,
    keys: KeyState,
    accumulator: f32,
    /// One-shot jump request, consumed by the next simulation step
    jump_requested: bool,
    running: bool,
    /// Simulation steps run so far
    frame_count: u64,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let level = Level::new(settings.layout(), &settings);
        Self {
            settings,
            level,
            keys: KeyState::new(),
            accumulator: 0.0,
            jump_requested: false,
            running: true,
            frame_count: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Background for the active palette
    pub fn background(&self) -> [f32; 4] {
        self.settings.colors.background(self.level.palette())
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::SelectPalette(palette) => self.level.select_palette(palette),
            Command::Jump => self.jump_requested = true,
            Command::Quit => {
                log::info!("Quit requested after {} frames", self.frame_count);
                self.running = false;
            }
        }
    }

    /// Handle host events, then run as many fixed steps as `dt` covers.
    ///
    /// Returns the level events of every step run.
    pub fn frame(&mut self, dt: f32, events: &[InputEvent], canvas: &mut impl Canvas) -> Vec<LevelEvent> {
        for event in events {
            if let Some(command) = self.keys.handle(*event, &self.settings.bindings) {
                self.apply(command);
            }
        }

        let mut level_events = Vec::new();
        if !self.running {
            return level_events;
        }

        // Clamp so a stalled host doesn't fast-forward the world
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            level_events.extend(self.step(canvas));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        level_events
    }

    /// Run exactly one simulation step
    pub fn step(&mut self, canvas: &mut impl Canvas) -> Vec<LevelEvent> {
        let input = self.keys.player_input(self.jump_requested);
        self.jump_requested = false;

        canvas.clear(self.background());
        self.frame_count += 1;
        self.level.advance(&input, canvas)
    }
}
