//! Playback controller over a fully generated [`Timeline`]
//!
//! The controller is a small state machine over `timeline`, `cursor` and
//! `is_playing`:
//!
//! ```text
//! Idle ──reset──▶ Paused ◀──toggle──▶ Playing
//!                   ▲                    │
//!                   └──── terminal ──────┘
//! ```
//!
//! The observed state is always exactly `timeline[cursor]`.
//!
//! # Autoplay
//!
//! Autoplay is driven from outside by a timer. [`Player::schedule`] hands out
//! a [`Tick`] stamped with the current generation; [`Player::fire`] only acts
//! on a tick whose generation still matches. `reset`, `toggle_play`,
//! `pause` and `fire` itself bump the generation, so at most one tick is
//! live: a tick scheduled before any of those calls is stale and ignored.

use crate::snapshot::{Snapshot, Timeline};
use std::time::{Duration, Instant};

/// Coarse controller state derived from the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Paused,
    Playing,
}

/// A scheduled autoplay step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
    pub due: Instant,
}

impl Tick {
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

pub struct Player {
    timeline: Timeline,
    cursor: usize,
    is_playing: bool,
    generation: u64,
    interval: Duration,
}

impl Player {
    pub fn new(timeline: Timeline, interval: Duration) -> Self {
        Player {
            timeline,
            cursor: 0,
            is_playing: false,
            generation: 0,
            interval,
        }
    }

    /// Replace the timeline, rewind to 0 and pause
    pub fn reset(&mut self, timeline: Timeline) {
        tracing::trace!(steps = timeline.len(), "playback reset");
        self.timeline = timeline;
        self.cursor = 0;
        self.is_playing = false;
        self.generation += 1;
    }

    /// Advance one step; false at the terminal snapshot
    pub fn step_forward(&mut self) -> bool {
        if self.cursor >= self.timeline.last_index() {
            self.is_playing = false;
            return false;
        }
        self.cursor += 1;
        if self.cursor == self.timeline.last_index() {
            self.is_playing = false;
        }
        tracing::trace!(cursor = self.cursor, "step forward");
        true
    }

    /// Go back one step; false at the initial snapshot
    pub fn step_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        tracing::trace!(cursor = self.cursor, "step backward");
        true
    }

    /// Flip autoplay; does nothing at the terminal snapshot
    pub fn toggle_play(&mut self) {
        if self.at_end() {
            return;
        }
        self.is_playing = !self.is_playing;
        self.generation += 1;
        tracing::trace!(playing = self.is_playing, "toggle play");
    }

    /// Stop autoplay without moving
    pub fn pause(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.generation += 1;
        }
    }

    /// Rewind to the initial snapshot and pause
    pub fn jump_to_start(&mut self) {
        self.pause();
        self.cursor = 0;
    }

    /// Fast-forward to the terminal snapshot and pause
    pub fn jump_to_end(&mut self) {
        self.pause();
        self.cursor = self.timeline.last_index();
    }

    /// Next autoplay tick, if playing
    pub fn schedule(&self, now: Instant) -> Option<Tick> {
        if !self.is_playing || self.at_end() {
            return None;
        }
        Some(Tick {
            generation: self.generation,
            due: now + self.interval,
        })
    }

    /// Run a scheduled tick. Stale ticks are no-ops and return false.
    ///
    /// Firing spends the tick: the generation moves on, so the same tick
    /// fired again is stale and the next step needs a fresh `schedule`.
    pub fn fire(&mut self, tick: Tick) -> bool {
        if tick.generation != self.generation || !self.is_playing {
            tracing::trace!("stale tick ignored");
            return false;
        }
        self.generation += 1;
        self.step_forward()
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        // cursor never exceeds last_index
        &self.timeline.snapshots()[self.cursor]
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.timeline.last_index()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_playing {
            PlaybackState::Playing
        } else if self.cursor == 0 {
            PlaybackState::Idle
        } else {
            PlaybackState::Paused
        }
    }
}
