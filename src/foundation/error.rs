/// Result alias used across `glide`.
pub type GlideResult<T> = Result<T, GlideError>;

/// Top-level error type for path parsing, lookups, and combinator composition.
#[derive(thiserror::Error, Debug)]
pub enum GlideError {
    /// A path description did not match the accepted grammar.
    #[error("parse error: {0}")]
    Parse(String),

    /// A path lookup was outside `[0, total]` or hit no segment.
    #[error("out of range: length {length} is outside [0, {total}]")]
    OutOfRange {
        /// Requested arc length.
        length: f64,
        /// Total arc length of the path.
        total: f64,
    },

    /// A combinator tree was composed with invalid parameters.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// JSON (de)serialization failed outside of descriptor validation.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlideError {
    /// Build a [`GlideError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`GlideError::OutOfRange`].
    pub fn out_of_range(length: f64, total: f64) -> Self {
        Self::OutOfRange { length, total }
    }

    /// Build a [`GlideError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`GlideError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
