use crate::foundation::error::{GlideError, GlideResult};

pub use kurbo::{CubicBez, Point, Vec2};

/// Closed interval `[lower, upper]` with `lower < upper`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> GlideResult<Self> {
        let b = Self { lower, upper };
        b.validate()?;
        Ok(b)
    }

    pub fn validate(&self) -> GlideResult<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(GlideError::configuration(format!(
                "bounds must be finite, got [{}, {}]",
                self.lower, self.upper
            )));
        }
        if self.lower >= self.upper {
            return Err(GlideError::configuration(format!(
                "bounds must satisfy lower < upper, got [{}, {}]",
                self.lower, self.upper
            )));
        }
        Ok(())
    }

    pub fn contains(self, v: f64) -> bool {
        self.lower <= v && v <= self.upper
    }

    pub fn clamp(self, v: f64) -> f64 {
        v.clamp(self.lower, self.upper)
    }
}
