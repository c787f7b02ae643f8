use crate::animation::{
    combinator::{Animator, Combinator, Nested},
    state::{AnimationState, PauseFlag},
};

/// Freezes a child's clock while an external flag is set.
///
/// The flag is sampled at each tick; an interval that ends on a paused tick
/// counts as paused, so the child sees real time minus paused time.
#[derive(Clone, Debug)]
pub struct Pause {
    child: Nested,
    flag: PauseFlag,
}

impl Pause {
    pub fn new(child: Combinator, flag: PauseFlag) -> Self {
        Self {
            child: Nested::new(child),
            flag,
        }
    }

    pub fn flag(&self) -> &PauseFlag {
        &self.flag
    }

    pub fn child(&self) -> &Nested {
        &self.child
    }
}

impl Animator for Pause {
    fn start(
        &mut self,
        state: &mut AnimationState,
        value: f64,
        now: f64,
        previous: Option<&AnimationState>,
    ) {
        state.elapsed = 0.0;
        state.last_timestamp = now;
        self.child.start(value, now, previous);
        self.child.mirror_into(state);
    }

    fn step(&mut self, state: &mut AnimationState, now: f64) -> bool {
        if self.flag.is_paused() {
            state.elapsed += now - state.last_timestamp;
            state.last_timestamp = now;
            return false;
        }

        let finished = self.child.step(now - state.elapsed);
        self.child.mirror_into(state);
        state.last_timestamp = now;
        finished
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pause.rs"]
mod tests;
