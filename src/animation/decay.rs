use crate::{
    animation::{combinator::Animator, state::AnimationState},
    foundation::core::Bounds,
    foundation::error::{GlideError, GlideResult},
};

/// Velocity retained per elapsed millisecond.
pub const DEFAULT_DECELERATION: f64 = 0.997;
/// Decay finishes once `|velocity|` drops below this (units/ms).
pub const DEFAULT_VELOCITY_EPSILON: f64 = 5.0;

/// Exponential velocity attenuation after a release gesture.
///
/// Velocity follows `v(t) = v0 * r^t` in closed form, so results do not
/// depend on how time is sliced into ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decay {
    velocity: f64,
    deceleration: f64,
    velocity_epsilon: f64,
    clamp: Option<Bounds>,
}

impl Decay {
    pub fn new(velocity: f64) -> GlideResult<Self> {
        let d = Self {
            velocity,
            deceleration: DEFAULT_DECELERATION,
            velocity_epsilon: DEFAULT_VELOCITY_EPSILON,
            clamp: None,
        };
        d.validate()?;
        Ok(d)
    }

    pub fn with_deceleration(mut self, deceleration: f64) -> GlideResult<Self> {
        self.deceleration = deceleration;
        self.validate()?;
        Ok(self)
    }

    pub fn with_velocity_epsilon(mut self, velocity_epsilon: f64) -> GlideResult<Self> {
        self.velocity_epsilon = velocity_epsilon;
        self.validate()?;
        Ok(self)
    }

    /// Stop at the edges of `bounds` instead of gliding past them.
    pub fn with_clamp(mut self, bounds: Bounds) -> GlideResult<Self> {
        bounds.validate()?;
        self.clamp = Some(bounds);
        Ok(self)
    }

    pub fn validate(&self) -> GlideResult<()> {
        if !self.velocity.is_finite() {
            return Err(GlideError::configuration("decay velocity must be finite"));
        }
        if !(self.deceleration > 0.0 && self.deceleration < 1.0) {
            return Err(GlideError::configuration(format!(
                "decay deceleration must be in (0, 1), got {}",
                self.deceleration
            )));
        }
        if !(self.velocity_epsilon > 0.0 && self.velocity_epsilon.is_finite()) {
            return Err(GlideError::configuration(format!(
                "decay velocity_epsilon must be > 0, got {}",
                self.velocity_epsilon
            )));
        }
        Ok(())
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn deceleration(&self) -> f64 {
        self.deceleration
    }

    pub fn velocity_epsilon(&self) -> f64 {
        self.velocity_epsilon
    }

    pub fn clamp(&self) -> Option<Bounds> {
        self.clamp
    }

    /// Closed-form velocity after `elapsed_ms` without clamping.
    pub fn velocity_at(&self, elapsed_ms: f64) -> f64 {
        self.velocity * self.deceleration.powf(elapsed_ms.max(0.0))
    }

    /// Closed-form displacement after `elapsed_ms` without clamping.
    pub fn distance_at(&self, elapsed_ms: f64) -> f64 {
        let r = self.deceleration;
        let k = r.powf(elapsed_ms.max(0.0));
        self.velocity * r * (1.0 - k) / (1.0 - r)
    }
}

impl Animator for Decay {
    fn start(
        &mut self,
        state: &mut AnimationState,
        value: f64,
        now: f64,
        _previous: Option<&AnimationState>,
    ) {
        state.current = value;
        state.velocity = self.velocity;
        state.last_timestamp = now;
    }

    fn step(&mut self, state: &mut AnimationState, now: f64) -> bool {
        // A clock running backwards is treated as no time passing.
        let dt = (now - state.last_timestamp).max(0.0);
        let r = self.deceleration;
        let v0 = state.velocity;
        let k = r.powf(dt);
        let v = v0 * k;
        let x = state.current + v0 * r * (1.0 - k) / (1.0 - r);
        state.last_timestamp = now;

        if let Some(bounds) = self.clamp
            && !bounds.contains(x)
        {
            state.current = bounds.clamp(x);
            state.velocity = 0.0;
            return true;
        }

        state.velocity = v;
        state.current = x;
        v.abs() < self.velocity_epsilon
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/decay.rs"]
mod tests;
