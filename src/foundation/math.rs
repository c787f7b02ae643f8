/// How [`interpolate`] treats inputs outside the input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolation {
    Extend,
    Clamp,
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map `value` from `input` onto `output` linearly.
///
/// A zero-width input range maps everything to `output[0]`.
pub fn interpolate(value: f64, input: [f64; 2], output: [f64; 2], mode: Extrapolation) -> f64 {
    let span = input[1] - input[0];
    if span == 0.0 {
        return output[0];
    }
    let mut t = (value - input[0]) / span;
    if mode == Extrapolation::Clamp {
        t = t.clamp(0.0, 1.0);
    }
    lerp(output[0], output[1], t)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
