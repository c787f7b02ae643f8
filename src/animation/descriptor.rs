use std::collections::BTreeMap;

use crate::{
    animation::{
        bounce::Bounce,
        combinator::Combinator,
        decay::{DEFAULT_DECELERATION, DEFAULT_VELOCITY_EPSILON, Decay},
        ease::Ease,
        pause::Pause,
        spring::{
            DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_REST_DISPLACEMENT_THRESHOLD,
            DEFAULT_REST_SPEED_THRESHOLD, DEFAULT_STIFFNESS, Spring,
        },
        state::PauseFlag,
        timing::{Repeat, Timing},
    },
    foundation::core::Bounds,
    foundation::error::{GlideError, GlideResult},
};

/// Serializable description of a combinator tree.
///
/// ```json
/// { "kind": "pause", "signal": "play",
///   "child": { "kind": "bounce", "bounds": { "lower": 0, "upper": 300 },
///              "child": { "kind": "decay", "velocity": 1.5 } } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombinatorSpec {
    Decay {
        velocity: f64,
        #[serde(default = "default_deceleration")]
        deceleration: f64,
        #[serde(default = "default_velocity_epsilon")]
        velocity_epsilon: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        clamp: Option<Bounds>,
    },
    Bounce {
        bounds: Bounds,
        child: Box<CombinatorSpec>,
    },
    Pause {
        signal: String,
        child: Box<CombinatorSpec>,
    },
    Spring {
        to: f64,
        #[serde(default)]
        velocity: f64,
        #[serde(default = "default_stiffness")]
        stiffness: f64,
        #[serde(default = "default_damping")]
        damping: f64,
        #[serde(default = "default_mass")]
        mass: f64,
        #[serde(default = "default_rest_speed_threshold")]
        rest_speed_threshold: f64,
        #[serde(default = "default_rest_displacement_threshold")]
        rest_displacement_threshold: f64,
        #[serde(default)]
        overshoot_clamping: bool,
    },
    Timing {
        to: f64,
        duration_ms: f64,
        #[serde(default)]
        ease: Ease,
    },
    Repeat {
        child: Box<CombinatorSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<u32>,
        #[serde(default)]
        reverse: bool,
    },
}

fn default_deceleration() -> f64 {
    DEFAULT_DECELERATION
}

fn default_velocity_epsilon() -> f64 {
    DEFAULT_VELOCITY_EPSILON
}

fn default_stiffness() -> f64 {
    DEFAULT_STIFFNESS
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_mass() -> f64 {
    DEFAULT_MASS
}

fn default_rest_speed_threshold() -> f64 {
    DEFAULT_REST_SPEED_THRESHOLD
}

fn default_rest_displacement_threshold() -> f64 {
    DEFAULT_REST_DISPLACEMENT_THRESHOLD
}

impl CombinatorSpec {
    pub fn from_json(json: &str) -> GlideResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            GlideError::configuration(format!("invalid combinator descriptor: {e}"))
        })
    }

    pub fn to_json(&self) -> GlideResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GlideError::serde(e.to_string()))
    }
}

/// Named pause flags shared between descriptors and the code that toggles them.
#[derive(Clone, Debug, Default)]
pub struct PauseSignals {
    flags: BTreeMap<String, PauseFlag>,
}

impl PauseSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the flag for `name`, creating an unpaused one on first use.
    pub fn flag(&mut self, name: &str) -> PauseFlag {
        self.flags.entry(name.to_owned()).or_default().clone()
    }

    pub fn get(&self, name: &str) -> Option<&PauseFlag> {
        self.flags.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PauseFlag)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Combinator {
    pub fn from_json(json: &str, signals: &mut PauseSignals) -> GlideResult<Self> {
        let spec = CombinatorSpec::from_json(json)?;
        let combinator = Self::from_spec(&spec, signals)?;
        tracing::debug!(
            root = combinator.kind(),
            depth = combinator.depth(),
            "built combinator from descriptor"
        );
        Ok(combinator)
    }

    pub fn from_spec(spec: &CombinatorSpec, signals: &mut PauseSignals) -> GlideResult<Self> {
        Ok(match spec {
            CombinatorSpec::Decay {
                velocity,
                deceleration,
                velocity_epsilon,
                clamp,
            } => {
                let mut d = Decay::new(*velocity)?
                    .with_deceleration(*deceleration)?
                    .with_velocity_epsilon(*velocity_epsilon)?;
                if let Some(bounds) = clamp {
                    d = d.with_clamp(*bounds)?;
                }
                d.into()
            }
            CombinatorSpec::Bounce { bounds, child } => {
                Bounce::new(Self::from_spec(child, signals)?, *bounds)?.into()
            }
            CombinatorSpec::Pause { signal, child } => {
                if signal.is_empty() {
                    return Err(GlideError::configuration("pause signal name must not be empty"));
                }
                let flag = signals.flag(signal);
                Pause::new(Self::from_spec(child, signals)?, flag).into()
            }
            CombinatorSpec::Spring {
                to,
                velocity,
                stiffness,
                damping,
                mass,
                rest_speed_threshold,
                rest_displacement_threshold,
                overshoot_clamping,
            } => Spring::new(*to)?
                .with_velocity(*velocity)?
                .with_constants(*stiffness, *damping, *mass)?
                .with_rest_thresholds(*rest_speed_threshold, *rest_displacement_threshold)?
                .with_overshoot_clamping(*overshoot_clamping)
                .into(),
            CombinatorSpec::Timing {
                to,
                duration_ms,
                ease,
            } => Timing::new(*to, *duration_ms, *ease)?.into(),
            CombinatorSpec::Repeat {
                child,
                count,
                reverse,
            } => Repeat::new(Self::from_spec(child, signals)?, *count, *reverse)?.into(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/descriptor.rs"]
mod tests;
