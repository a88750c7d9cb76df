//! Motion control flow (no animation physics, only state).

pub mod replay;

pub use replay::{Replay, ReplayState};
