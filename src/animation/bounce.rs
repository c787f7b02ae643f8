use crate::{
    animation::{
        combinator::{Animator, Combinator, Nested},
        state::AnimationState,
    },
    foundation::core::Bounds,
    foundation::error::GlideResult,
};

/// Velocity multiplier applied when the child crosses a bound.
pub const RESTITUTION: f64 = -0.5;

/// Reflects a child off `[lower, upper]` with energy loss.
///
/// The child's integration law is untouched; only its state is redirected.
#[derive(Clone, Debug)]
pub struct Bounce {
    child: Nested,
    bounds: Bounds,
}

impl Bounce {
    pub fn new(child: Combinator, bounds: Bounds) -> GlideResult<Self> {
        bounds.validate()?;
        Ok(Self {
            child: Nested::new(child),
            bounds,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn child(&self) -> &Nested {
        &self.child
    }
}

impl Animator for Bounce {
    fn start(
        &mut self,
        state: &mut AnimationState,
        value: f64,
        now: f64,
        previous: Option<&AnimationState>,
    ) {
        self.child.start(value, now, previous);
        self.child.mirror_into(state);
    }

    fn step(&mut self, state: &mut AnimationState, now: f64) -> bool {
        let finished = self.child.step(now);

        let Bounds { lower, upper } = self.bounds;
        let child = self.child.state_mut();
        if (child.velocity < 0.0 && child.current < lower)
            || (child.velocity > 0.0 && child.current > upper)
        {
            tracing::trace!(
                current = child.current,
                velocity = child.velocity,
                "bounce reflected"
            );
            child.velocity *= RESTITUTION;
            child.current = self.bounds.clamp(child.current);
        }

        self.child.mirror_into(state);
        finished
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bounce.rs"]
mod tests;
