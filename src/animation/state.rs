use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Mutable per-instance record driven by a combinator.
///
/// Timestamps are milliseconds, velocities are units per millisecond.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    pub current: f64,
    pub velocity: f64,
    pub last_timestamp: f64,
    /// Accumulated paused time; only meaningful under a pause wrapper.
    pub elapsed: f64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Externally owned pause switch read once per tick.
///
/// Clones share the same flag, so the gesture/UI side keeps one handle and
/// the pause combinator another.
#[derive(Clone, Debug, Default)]
pub struct PauseFlag(Arc<AtomicBool>);

impl PauseFlag {
    pub fn new(paused: bool) -> Self {
        Self(Arc::new(AtomicBool::new(paused)))
    }

    pub fn is_paused(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, paused: bool) {
        self.0.store(paused, Ordering::Relaxed);
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn shares_with(&self, other: &PauseFlag) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
