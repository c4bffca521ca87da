//! User input delivered between ticks.

use serde::{Deserialize, Serialize};

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Place a field at `(x, y)` with the current placement mass.
    PlaceField { x: f64, y: f64 },
    /// Raise the placement mass by one step.
    IncreaseMass,
    /// Lower the placement mass by one step.
    DecreaseMass,
    /// Remove every field and restore the default placement mass.
    Reset,
}

/// Source of input events, polled once before each tick.
pub trait InputSource {
    /// Returns the events to apply before tick number `tick` (0-based).
    fn poll(&mut self, tick: u64) -> Vec<InputEvent>;
}

/// An input source with nothing to say.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self, _tick: u64) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// An event pinned to the tick before which it fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub tick: u64,
    pub event: InputEvent,
}

/// Replays a fixed list of events at their ticks.
///
/// Events sharing a tick fire in list order. Events whose tick has already
/// passed when first polled fire on that poll.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: Vec<ScheduledEvent>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<ScheduledEvent>) -> Self {
        // stable: same-tick events keep their order
        events.sort_by_key(|e| e.tick);
        Self { events, cursor: 0 }
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, tick: u64) -> Vec<InputEvent> {
        let due = self.events[self.cursor..]
            .iter()
            .take_while(|e| e.tick <= tick)
            .count();
        let start = self.cursor;
        self.cursor += due;
        self.events[start..self.cursor]
            .iter()
            .map(|e| e.event)
            .collect()
    }
}
