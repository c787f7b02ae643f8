use crate::{
    animation::{
        combinator::{Animator, Combinator, Nested},
        ease::Ease,
        state::AnimationState,
    },
    foundation::error::{GlideError, GlideResult},
    foundation::math::lerp,
};

/// Eased interpolation from the start value to `to` over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    to: f64,
    duration_ms: f64,
    ease: Ease,
    from: f64,
    started_at: f64,
}

impl Timing {
    pub fn new(to: f64, duration_ms: f64, ease: Ease) -> GlideResult<Self> {
        if !to.is_finite() {
            return Err(GlideError::configuration("timing target must be finite"));
        }
        if !(duration_ms > 0.0 && duration_ms.is_finite()) {
            return Err(GlideError::configuration(format!(
                "timing duration_ms must be > 0, got {duration_ms}"
            )));
        }
        Ok(Self {
            to,
            duration_ms,
            ease,
            from: 0.0,
            started_at: 0.0,
        })
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    // Aim back at the value the last run started from.
    fn reverse(&mut self) {
        self.to = self.from;
    }
}

impl Animator for Timing {
    fn start(
        &mut self,
        state: &mut AnimationState,
        value: f64,
        now: f64,
        _previous: Option<&AnimationState>,
    ) {
        self.from = value;
        self.started_at = now;
        state.current = value;
        state.velocity = 0.0;
        state.last_timestamp = now;
    }

    fn step(&mut self, state: &mut AnimationState, now: f64) -> bool {
        let progress = ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0);
        let x = lerp(self.from, self.to, self.ease.apply(progress));
        let dt = now - state.last_timestamp;
        if dt > 0.0 {
            state.velocity = (x - state.current) / dt;
        }
        state.current = x;
        state.last_timestamp = now;
        progress >= 1.0
    }
}

/// Restarts a child each time it finishes.
#[derive(Clone, Debug)]
pub struct Repeat {
    child: Nested,
    count: Option<u32>,
    reverse: bool,
    origin: f64,
    completed: u32,
}

impl Repeat {
    /// `count = None` repeats forever. `reverse` needs a timing child.
    pub fn new(child: Combinator, count: Option<u32>, reverse: bool) -> GlideResult<Self> {
        if count == Some(0) {
            return Err(GlideError::configuration("repeat count must be >= 1"));
        }
        if reverse && !matches!(child, Combinator::Timing(_)) {
            return Err(GlideError::configuration(format!(
                "repeat with reverse needs a timing child, got {}",
                child.kind()
            )));
        }
        Ok(Self {
            child: Nested::new(child),
            count,
            reverse,
            origin: 0.0,
            completed: 0,
        })
    }

    pub fn child(&self) -> &Nested {
        &self.child
    }

    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Runs of the child that have finished so far.
    pub fn completed(&self) -> u32 {
        self.completed
    }
}

impl Animator for Repeat {
    fn start(
        &mut self,
        state: &mut AnimationState,
        value: f64,
        now: f64,
        previous: Option<&AnimationState>,
    ) {
        self.origin = value;
        self.completed = 0;
        self.child.start(value, now, previous);
        self.child.mirror_into(state);
        state.last_timestamp = now;
    }

    fn step(&mut self, state: &mut AnimationState, now: f64) -> bool {
        let finished = self.child.step(now);
        self.child.mirror_into(state);
        state.last_timestamp = now;
        if !finished {
            return false;
        }

        self.completed = self.completed.saturating_add(1);
        if self.count.is_some_and(|n| self.completed >= n) {
            return true;
        }

        let restart_from = if self.reverse {
            if let Combinator::Timing(t) = self.child.combinator_mut() {
                t.reverse();
            }
            self.child.state().current
        } else {
            self.origin
        };
        tracing::trace!(completed = self.completed, restart_from, "repeat restarted child");
        self.child.start(restart_from, now, None);
        self.child.mirror_into(state);
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
