use crate::{
    animation::{combinator::Animator, state::AnimationState},
    foundation::error::{GlideError, GlideResult},
};

pub const DEFAULT_STIFFNESS: f64 = 100.0;
pub const DEFAULT_DAMPING: f64 = 10.0;
pub const DEFAULT_MASS: f64 = 1.0;
/// Units/ms (2 units per second).
pub const DEFAULT_REST_SPEED_THRESHOLD: f64 = 0.002;
pub const DEFAULT_REST_DISPLACEMENT_THRESHOLD: f64 = 0.01;

/// Damped harmonic oscillator pulling the value towards `to`.
///
/// `stiffness`, `damping` and `mass` are the usual per-second spring
/// constants; velocities and thresholds are per millisecond like the rest of
/// the crate. Each step evaluates the analytic solution for the elapsed
/// interval, so the trajectory does not depend on tick spacing.
///
/// The spring rests once both the speed and the distance to `to` fall below
/// their thresholds; it then snaps onto `to` with zero velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    to: f64,
    velocity: f64,
    stiffness: f64,
    damping: f64,
    mass: f64,
    rest_speed_threshold: f64,
    rest_displacement_threshold: f64,
    overshoot_clamping: bool,
    from: f64,
}

impl Spring {
    pub fn new(to: f64) -> GlideResult<Self> {
        let s = Self {
            to,
            velocity: 0.0,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
            rest_speed_threshold: DEFAULT_REST_SPEED_THRESHOLD,
            rest_displacement_threshold: DEFAULT_REST_DISPLACEMENT_THRESHOLD,
            overshoot_clamping: false,
            from: 0.0,
        };
        s.validate()?;
        Ok(s)
    }

    /// Initial velocity in units/ms, replacing whatever the state carried.
    pub fn with_velocity(mut self, velocity: f64) -> GlideResult<Self> {
        self.velocity = velocity;
        self.validate()?;
        Ok(self)
    }

    pub fn with_constants(mut self, stiffness: f64, damping: f64, mass: f64) -> GlideResult<Self> {
        self.stiffness = stiffness;
        self.damping = damping;
        self.mass = mass;
        self.validate()?;
        Ok(self)
    }

    pub fn with_rest_thresholds(mut self, speed: f64, displacement: f64) -> GlideResult<Self> {
        self.rest_speed_threshold = speed;
        self.rest_displacement_threshold = displacement;
        self.validate()?;
        Ok(self)
    }

    /// Finish as soon as the value reaches or crosses `to`.
    pub fn with_overshoot_clamping(mut self, overshoot_clamping: bool) -> Self {
        self.overshoot_clamping = overshoot_clamping;
        self
    }

    pub fn validate(&self) -> GlideResult<()> {
        if !self.to.is_finite() || !self.velocity.is_finite() {
            return Err(GlideError::configuration(
                "spring target and velocity must be finite",
            ));
        }
        for (name, v) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_speed_threshold", self.rest_speed_threshold),
            ("rest_displacement_threshold", self.rest_displacement_threshold),
        ] {
            if !(v > 0.0 && v.is_finite()) {
                return Err(GlideError::configuration(format!(
                    "spring {name} must be > 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; below 1 the spring oscillates.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Displacement from `to` and its rate (per second) after `t` seconds,
    /// starting from displacement `x0` and rate `v0`.
    fn evolve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let w0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            let e = (-w0 * t).exp();
            let b = v0 + w0 * x0;
            (e * (x0 + b * t), e * (v0 - w0 * b * t))
        } else if zeta < 1.0 {
            let a = zeta * w0;
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-a * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let b = (v0 + a * x0) / wd;
            (
                e * (x0 * cos + b * sin),
                e * (v0 * cos - (x0 * wd + a * b) * sin),
            )
        } else {
            let z = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z);
            let r2 = -w0 * (zeta + z);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }
}

impl Animator for Spring {
    fn start(
        &mut self,
        state: &mut AnimationState,
        value: f64,
        now: f64,
        _previous: Option<&AnimationState>,
    ) {
        self.from = value;
        state.current = value;
        state.velocity = self.velocity;
        state.last_timestamp = now;
    }

    fn step(&mut self, state: &mut AnimationState, now: f64) -> bool {
        let dt = (now - state.last_timestamp).max(0.0);
        state.last_timestamp = now;

        let (x, v) = self.evolve(
            state.current - self.to,
            state.velocity * 1000.0,
            dt / 1000.0,
        );
        state.current = self.to + x;
        state.velocity = v / 1000.0;

        let overshot = self.overshoot_clamping && (self.from - self.to) * x <= 0.0;
        let resting = state.velocity.abs() < self.rest_speed_threshold
            && x.abs() < self.rest_displacement_threshold;
        if overshot || resting {
            state.current = self.to;
            state.velocity = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
