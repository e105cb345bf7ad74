use std::collections::VecDeque;

use crate::format_time;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Lap {
    pub index: u32,
    pub duration_ms: u64,
}

impl Lap {
    pub fn label(&self) -> String {
        format!("Lap {}", self.index)
    }

    pub fn time_text(&self) -> String {
        format_time(self.duration_ms)
    }
}

/// Lap deltas, newest first.
pub struct LapBook {
    laps: VecDeque<Lap>,
    next_index: u32,
    last_lap_elapsed_ms: u64,
}

impl LapBook {
    pub fn new() -> Self {
        Self {
            laps: VecDeque::new(),
            next_index: 1,
            last_lap_elapsed_ms: 0,
        }
    }

    /// Closes the current lap at `elapsed_ms` and returns it.
    pub fn record(&mut self, elapsed_ms: u64) -> Lap {
        let lap = Lap {
            index: self.next_index,
            duration_ms: elapsed_ms.saturating_sub(self.last_lap_elapsed_ms),
        };
        self.last_lap_elapsed_ms = elapsed_ms;
        self.laps.push_front(lap);
        self.next_index += 1;
        lap
    }

    pub fn clear(&mut self) {
        self.laps.clear();
        self.next_index = 1;
        self.last_lap_elapsed_ms = 0;
    }

    pub fn laps(&self) -> impl Iterator<Item = &Lap> {
        self.laps.iter()
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    pub fn last_lap_elapsed_ms(&self) -> u64 {
        self.last_lap_elapsed_ms
    }
}

impl Default for LapBook {
    fn default() -> Self {
        Self::new()
    }
}
