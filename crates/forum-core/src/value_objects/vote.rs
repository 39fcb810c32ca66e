//! Upvote counter arithmetic
//!
//! Shared by threads and replies. A vote moves a counter by exactly one step
//! in either direction. Any other delta is ignored, and a step that would
//! leave the `i32` range is skipped rather than clamped.

use std::fmt;

/// A single vote step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDelta {
    Up,
    Down,
}

impl VoteDelta {
    /// Interpret a raw delta; only `+1` and `-1` are votes
    pub fn from_raw(delta: i32) -> Option<Self> {
        match delta {
            1 => Some(Self::Up),
            -1 => Some(Self::Down),
            _ => None,
        }
    }

    /// Signed step applied to the counter
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl fmt::Display for VoteDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// Result of applying a raw delta to a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The counter moved and must be persisted
    Applied(i32),
    /// The delta was not `+1`/`-1`; the counter is unchanged
    InvalidDelta(i32),
    /// The step would overflow `i32`; the counter is unchanged
    Saturated(i32),
}

impl VoteOutcome {
    /// Counter value to report back to the caller
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Self::Applied(v) | Self::InvalidDelta(v) | Self::Saturated(v) => v,
        }
    }

    /// Whether the new value has to be written to the store
    #[inline]
    pub fn needs_write(self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Compute the outcome of a vote on a counter currently at `current`
///
/// Only a step that would leave the `i32` range is skipped. A counter
/// sitting at `i32::MAX` can still be voted down, and one at `i32::MIN` up.
pub fn adjust_vote(current: i32, raw_delta: i32) -> VoteOutcome {
    let Some(delta) = VoteDelta::from_raw(raw_delta) else {
        return VoteOutcome::InvalidDelta(current);
    };

    match current.checked_add(delta.step()) {
        Some(next) => VoteOutcome::Applied(next),
        None => VoteOutcome::Saturated(current),
    }
}
