use crate::{
    animation::{
        bounce::Bounce,
        combinator::Combinator,
        decay::Decay,
        ease::Ease,
        pause::Pause,
        spring::Spring,
        state::PauseFlag,
        timing::{Repeat, Timing},
    },
    foundation::core::Bounds,
    foundation::error::GlideResult,
};

pub fn decay(velocity: f64) -> GlideResult<Combinator> {
    Ok(Decay::new(velocity)?.into())
}

pub fn bounce(child: Combinator, bounds: Bounds) -> GlideResult<Combinator> {
    Ok(Bounce::new(child, bounds)?.into())
}

pub fn pause(child: Combinator, flag: &PauseFlag) -> Combinator {
    Pause::new(child, flag.clone()).into()
}

pub fn spring(to: f64) -> GlideResult<Combinator> {
    Ok(Spring::new(to)?.into())
}

pub fn timing(to: f64, duration_ms: f64, ease: Ease) -> GlideResult<Combinator> {
    Ok(Timing::new(to, duration_ms, ease)?.into())
}

pub fn repeat(child: Combinator, count: Option<u32>, reverse: bool) -> GlideResult<Combinator> {
    Ok(Repeat::new(child, count, reverse)?.into())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
