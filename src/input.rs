//! Keyboard input
//!
//! Raw key events come from the host window. Key-downs are mapped to discrete
//! `Command`s through `Bindings`; held keys are kept in `KeyState` and polled
//! once per frame into a `PlayerInput`.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::{Palette, PlayerInput};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Space,
    U,
    Y,
    Escape,
    Other,
}

/// Events delivered by the host window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Discrete actions triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    SelectPalette(Palette),
    Jump,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub key: Key,
    pub command: Command,
}

/// Key-down to command table. First matching binding wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings(pub Vec<Binding>);

impl Default for Bindings {
    fn default() -> Self {
        Self(vec![
            Binding {
                key: Key::U,
                command: Command::SelectPalette(Palette::White),
            },
            Binding {
                key: Key::Y,
                command: Command::SelectPalette(Palette::Black),
            },
            Binding {
                key: Key::Space,
                command: Command::Jump,
            },
            Binding {
                key: Key::Escape,
                command: Command::Quit,
            },
        ])
    }
}

impl Bindings {
    pub fn command_for(&self, key: Key) -> Option<Command> {
        self.0.iter().find(|b| b.key == key).map(|b| b.command)
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the event and return the command it triggers, if any.
    ///
    /// Auto-repeat key-downs for an already held key trigger nothing.
    pub fn handle(&mut self, event: InputEvent, bindings: &Bindings) -> Option<Command> {
        match event {
            InputEvent::KeyDown(key) => {
                if self.held.insert(key) {
                    bindings.command_for(key)
                } else {
                    None
                }
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&key);
                None
            }
            InputEvent::Quit => Some(Command::Quit),
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Movement snapshot for this frame
    pub fn player_input(&self, jump: bool) -> PlayerInput {
        PlayerInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            jump,
        }
    }
}

/// Seeded input generator that plays the game unattended (demo/soak runs)
#[derive(Debug, Clone)]
pub struct RandomPilot {
    rng: Pcg32,
    /// Key currently held for movement
    heading: Option<Key>,
}

impl RandomPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            heading: None,
        }
    }

    /// Events for the next frame
    pub fn next_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // Change heading now and then, biased toward running right
        if self.rng.random_bool(0.05) {
            if let Some(key) = self.heading.take() {
                events.push(InputEvent::KeyUp(key));
            }
            let roll: u32 = self.rng.random_range(0..10);
            let next = match roll {
                0..=5 => Some(Key::Right),
                6..=8 => Some(Key::Left),
                _ => None,
            };
            if let Some(key) = next {
                events.push(InputEvent::KeyDown(key));
            }
            self.heading = next;
        }

        if self.rng.random_bool(0.03) {
            events.push(InputEvent::KeyDown(Key::Space));
            events.push(InputEvent::KeyUp(Key::Space));
        }

        if self.rng.random_bool(0.01) {
            let key = if self.rng.random_bool(0.5) { Key::U } else { Key::Y };
            events.push(InputEvent::KeyDown(key));
            events.push(InputEvent::KeyUp(key));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_select_palettes() {
        let bindings = Bindings::default();
        assert_eq!(
            bindings.command_for(Key::U),
            Some(Command::SelectPalette(Palette::White))
        );
        assert_eq!(
            bindings.command_for(Key::Y),
            Some(Command::SelectPalette(Palette::Black))
        );
        assert_eq!(bindings.command_for(Key::Other), None);
    }

    #[test]
    fn test_key_repeat_fires_once() {
        let bindings = Bindings::default();
        let mut keys = KeyState::new();

        assert_eq!(
            keys.handle(InputEvent::KeyDown(Key::Space), &bindings),
            Some(Command::Jump)
        );
        assert_eq!(keys.handle(InputEvent::KeyDown(Key::Space), &bindings), None);
        keys.handle(InputEvent::KeyUp(Key::Space), &bindings);
        assert_eq!(
            keys.handle(InputEvent::KeyDown(Key::Space), &bindings),
            Some(Command::Jump)
        );
    }

    #[test]
    fn test_held_keys_become_player_input() {
        let bindings = Bindings::default();
        let mut keys = KeyState::new();
        keys.handle(InputEvent::KeyDown(Key::Left), &bindings);

        let input = keys.player_input(false);
        assert!(input.left);
        assert!(!input.right);

        keys.handle(InputEvent::KeyUp(Key::Left), &bindings);
        assert_eq!(keys.player_input(true), PlayerInput {
            left: false,
            right: false,
            jump: true,
        });
    }

    #[test]
    fn test_bindings_json() {
        let json = serde_json::to_string(&Bindings::default()).unwrap();
        let back: Bindings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Bindings::default());
    }

    #[test]
    fn test_pilot_is_deterministic() {
        let mut a = RandomPilot::new(7);
        let mut b = RandomPilot::new(7);
        for _ in 0..500 {
            assert_eq!(a.next_events(), b.next_events());
        }
    }
}
