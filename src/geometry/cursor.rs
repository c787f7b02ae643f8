use crate::{
    animation::{
        combinator::Combinator,
        decay::{DEFAULT_VELOCITY_EPSILON, Decay},
    },
    foundation::core::{Bounds, Point},
    foundation::error::{GlideError, GlideResult},
    foundation::math::{Extrapolation, interpolate},
    geometry::path::PathGeometry,
};

/// Maps horizontal drags across a track of `track_width` onto a path.
///
/// The whole track corresponds to the whole path, so dragging from the left
/// edge to the right edge walks the cursor from the first point to the last.
#[derive(Clone, Debug)]
pub struct PathCursor<'a> {
    path: &'a PathGeometry,
    track_width: f64,
    offset: f64,
}

impl<'a> PathCursor<'a> {
    pub fn new(path: &'a PathGeometry, track_width: f64) -> GlideResult<Self> {
        if !(track_width > 0.0 && track_width.is_finite()) {
            return Err(GlideError::configuration(format!(
                "cursor track width must be > 0, got {track_width}"
            )));
        }
        Ok(Self {
            path,
            track_width,
            offset: 0.0,
        })
    }

    pub fn path(&self) -> &PathGeometry {
        self.path
    }

    /// Anchor a new drag at the track position of `length`.
    pub fn begin(&mut self, length: f64) {
        self.offset = interpolate(
            length,
            [0.0, self.path.total_length()],
            [0.0, self.track_width],
            Extrapolation::Clamp,
        );
    }

    /// Arc length under the finger after moving `translation_x` from the anchor.
    pub fn drag(&self, translation_x: f64) -> f64 {
        interpolate(
            self.offset + translation_x,
            [0.0, self.track_width],
            [0.0, self.path.total_length()],
            Extrapolation::Clamp,
        )
    }

    /// Length decay for a release at `velocity_x` (track units per second).
    ///
    /// Gesture velocities are per second, so the stop threshold is
    /// [`DEFAULT_VELOCITY_EPSILON`] track units per second, rescaled to path
    /// length per millisecond along with the velocity.
    pub fn release(&self, velocity_x: f64) -> GlideResult<Combinator> {
        let per_ms = self.path.total_length() / self.track_width / 1000.0;
        let clamp = Bounds::new(0.0, self.path.total_length())?;
        Ok(Decay::new(velocity_x * per_ms)?
            .with_velocity_epsilon(DEFAULT_VELOCITY_EPSILON * per_ms)?
            .with_clamp(clamp)?
            .into())
    }

    pub fn point(&self, length: f64) -> GlideResult<Point> {
        self.path.point_at_length(length)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/cursor.rs"]
mod tests;
