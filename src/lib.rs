//! Glide drives gesture-released UI values with composable, tick-driven
//! animation combinators and maps them onto arc-length indexed paths.
//!
//! # Animation
//!
//! A [`Combinator`] is an owning tree over a closed set of variants
//! ([`Decay`], [`Bounce`], [`Pause`], [`Spring`], [`Timing`], [`Repeat`]).
//! A driver calls [`Animator::start`] once and then [`Animator::step`] on
//! every rendering tick until it reports `true`, reading
//! [`AnimationState::current`] after each call. `step` never allocates, blocks, or fails.
//!
//! # Geometry
//!
//! [`PathGeometry`] parses `M`/`C` path data into cubic segments with a
//! cumulative arc-length table so [`PathGeometry::point_at_length`] can turn a
//! scalar into a 2D point in logarithmic time. [`PathCursor`] binds horizontal
//! drags and release velocities to a path.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod geometry;

pub use animation::bounce::{Bounce, RESTITUTION};
pub use animation::combinator::{Animator, Combinator, Nested};
pub use animation::decay::{DEFAULT_DECELERATION, DEFAULT_VELOCITY_EPSILON, Decay};
pub use animation::descriptor::{CombinatorSpec, PauseSignals};
pub use animation::ease::Ease;
pub use animation::ops::{bounce, decay, pause, repeat, spring, timing};
pub use animation::pause::Pause;
pub use animation::spring::{
    DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_REST_DISPLACEMENT_THRESHOLD,
    DEFAULT_REST_SPEED_THRESHOLD, DEFAULT_STIFFNESS, Spring,
};
pub use animation::state::{AnimationState, PauseFlag};
pub use animation::timing::{Repeat, Timing};
pub use foundation::core::{Bounds, CubicBez, Point, Vec2};
pub use foundation::error::{GlideError, GlideResult};
pub use foundation::math::{Extrapolation, interpolate};
pub use geometry::cursor::PathCursor;
pub use geometry::path::{ARCLEN_ACCURACY, Curve, PathGeometry};
