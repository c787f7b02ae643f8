use crate::animation::{
    bounce::Bounce, decay::Decay, pause::Pause, spring::Spring, state::AnimationState,
    timing::Repeat, timing::Timing,
};

/// Two-operation protocol every combinator implements.
///
/// A driver calls [`Animator::start`] once, then [`Animator::step`] on every
/// tick until it returns `true`, reading `state.current` after each call.
/// `step` never allocates and never fails.
pub trait Animator {
    fn start(
        &mut self,
        state: &mut AnimationState,
        value: f64,
        now: f64,
        previous: Option<&AnimationState>,
    );

    fn step(&mut self, state: &mut AnimationState, now: f64) -> bool;
}

/// Closed set of combinators. Wrappers own their child exclusively.
#[derive(Clone, Debug)]
pub enum Combinator {
    Decay(Decay),
    Bounce(Bounce),
    Pause(Pause),
    Spring(Spring),
    Timing(Timing),
    Repeat(Repeat),
}

impl Combinator {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Decay(_) => "decay",
            Self::Bounce(_) => "bounce",
            Self::Pause(_) => "pause",
            Self::Spring(_) => "spring",
            Self::Timing(_) => "timing",
            Self::Repeat(_) => "repeat",
        }
    }

    /// Number of combinators on the longest root-to-leaf chain.
    pub fn depth(&self) -> usize {
        match self {
            Self::Decay(_) | Self::Spring(_) | Self::Timing(_) => 1,
            Self::Bounce(b) => 1 + b.child().combinator().depth(),
            Self::Pause(p) => 1 + p.child().combinator().depth(),
            Self::Repeat(r) => 1 + r.child().combinator().depth(),
        }
    }
}

impl Animator for Combinator {
    fn start(
        &mut self,
        state: &mut AnimationState,
        value: f64,
        now: f64,
        previous: Option<&AnimationState>,
    ) {
        match self {
            Self::Decay(a) => a.start(state, value, now, previous),
            Self::Bounce(a) => a.start(state, value, now, previous),
            Self::Pause(a) => a.start(state, value, now, previous),
            Self::Spring(a) => a.start(state, value, now, previous),
            Self::Timing(a) => a.start(state, value, now, previous),
            Self::Repeat(a) => a.start(state, value, now, previous),
        }
    }

    fn step(&mut self, state: &mut AnimationState, now: f64) -> bool {
        match self {
            Self::Decay(a) => a.step(state, now),
            Self::Bounce(a) => a.step(state, now),
            Self::Pause(a) => a.step(state, now),
            Self::Spring(a) => a.step(state, now),
            Self::Timing(a) => a.step(state, now),
            Self::Repeat(a) => a.step(state, now),
        }
    }
}

impl From<Decay> for Combinator {
    fn from(v: Decay) -> Self {
        Self::Decay(v)
    }
}

impl From<Bounce> for Combinator {
    fn from(v: Bounce) -> Self {
        Self::Bounce(v)
    }
}

impl From<Pause> for Combinator {
    fn from(v: Pause) -> Self {
        Self::Pause(v)
    }
}

impl From<Spring> for Combinator {
    fn from(v: Spring) -> Self {
        Self::Spring(v)
    }
}

impl From<Timing> for Combinator {
    fn from(v: Timing) -> Self {
        Self::Timing(v)
    }
}

impl From<Repeat> for Combinator {
    fn from(v: Repeat) -> Self {
        Self::Repeat(v)
    }
}

/// A child combinator together with the state it exclusively owns.
#[derive(Clone, Debug)]
pub struct Nested {
    combinator: Box<Combinator>,
    state: AnimationState,
}

impl Nested {
    pub(crate) fn new(combinator: Combinator) -> Self {
        Self {
            combinator: Box::new(combinator),
            state: AnimationState::default(),
        }
    }

    pub fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    pub(crate) fn combinator_mut(&mut self) -> &mut Combinator {
        &mut self.combinator
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    pub(crate) fn start(&mut self, value: f64, now: f64, previous: Option<&AnimationState>) {
        self.combinator.start(&mut self.state, value, now, previous);
    }

    pub(crate) fn step(&mut self, now: f64) -> bool {
        self.combinator.step(&mut self.state, now)
    }

    /// Copy the child's observable output into the parent's state.
    pub(crate) fn mirror_into(&self, state: &mut AnimationState) {
        state.current = self.state.current;
        state.velocity = self.state.velocity;
    }
}
