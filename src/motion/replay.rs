//! Animation replay control flow.
//!
//! An external signal (an intersection observer, a route change) may ask a
//! motion widget to restart its entrance transition. Restarting means a keyed
//! teardown/remount, so the control flow is modeled as an explicit state
//! machine instead of nested timers: `trigger` is the single transition
//! input, `finish` settles a running animation, and `generation` is the
//! remount key consumers feed to their renderer.

/// Replay machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// Nothing running.
    Idle,
    /// An animation is in flight.
    Animating,
    /// An animation is in flight and a restart is queued behind it.
    Replaying,
}

/// The replay state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    state: ReplayState,
    generation: u64,
}

impl Replay {
    /// A new machine, idle at generation 0.
    pub fn new() -> Self {
        Self {
            state: ReplayState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// The remount key. Bumps exactly when a new animation pass starts.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The single external transition input.
    ///
    /// - `Idle` → `Animating`, bumping the generation (a fresh pass starts).
    /// - `Animating` → `Replaying` (queue a restart behind the running pass).
    /// - `Replaying` stays `Replaying` (restarts do not stack).
    pub fn trigger(&mut self) {
        match self.state {
            ReplayState::Idle => {
                self.state = ReplayState::Animating;
                self.generation += 1;
            }
            ReplayState::Animating => self.state = ReplayState::Replaying,
            ReplayState::Replaying => {}
        }
    }

    /// Report that the running animation pass completed.
    ///
    /// - `Animating` → `Idle`.
    /// - `Replaying` → `Animating`, bumping the generation (the queued
    ///   restart begins).
    /// - `Idle` stays `Idle`.
    pub fn finish(&mut self) {
        match self.state {
            ReplayState::Animating => self.state = ReplayState::Idle,
            ReplayState::Replaying => {
                self.state = ReplayState::Animating;
                self.generation += 1;
            }
            ReplayState::Idle => {}
        }
    }
}

impl Default for Replay {
    fn default() -> Self {
        Self::new()
    }
}
