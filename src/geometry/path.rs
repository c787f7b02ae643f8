use std::{fmt, str::FromStr};

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathEl, QuadBez};

use crate::{
    foundation::core::{CubicBez, Point},
    foundation::error::{GlideError, GlideResult},
};

/// Error bound handed to kurbo's adaptive Gauss-Legendre arc length.
pub const ARCLEN_ACCURACY: f64 = 1e-9;

/// One cubic segment placed in the path's cumulative arc-length space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Curve {
    pub from: Point,
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
    pub start: f64,
    pub end: f64,
}

impl Curve {
    pub fn as_cubic(&self) -> CubicBez {
        CubicBez::new(self.from, self.c1, self.c2, self.to)
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Point at local parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        self.as_cubic().eval(t)
    }
}

/// Arc-length indexed sequence of cubic Bézier segments.
///
/// Built once from a path description and read-only afterwards. Segment
/// `end` values strictly increase, adjacent segments share their boundary,
/// and `total_length` is the last `end`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathGeometry {
    total_length: f64,
    curves: Vec<Curve>,
}

impl PathGeometry {
    /// Parse `M x,y` followed by one or more `C` commands.
    ///
    /// Any other command is rejected; use [`PathGeometry::parse_normalized`]
    /// for general SVG path data.
    #[tracing::instrument(skip(d), fields(bytes = d.len()))]
    pub fn parse(d: &str) -> GlideResult<Self> {
        check_cubic_only(d)?;
        let path = parse_svg(d)?;
        let geometry = Self::from_elements(path.elements(), false)?;
        tracing::debug!(
            curves = geometry.curves.len(),
            total_length = geometry.total_length,
            "parsed path"
        );
        Ok(geometry)
    }

    /// Parse a single-subpath SVG path, reducing every command to cubics.
    ///
    /// Lines and quadratics are degree-elevated exactly, arcs are
    /// approximated by kurbo, and a closing segment becomes a line back to
    /// the subpath start. Zero-length segments are dropped.
    #[tracing::instrument(skip(d), fields(bytes = d.len()))]
    pub fn parse_normalized(d: &str) -> GlideResult<Self> {
        let path = parse_svg(d)?;
        let geometry = Self::from_elements(path.elements(), true)?;
        tracing::debug!(
            curves = geometry.curves.len(),
            total_length = geometry.total_length,
            "parsed normalized path"
        );
        Ok(geometry)
    }

    fn from_elements(elements: &[PathEl], normalize: bool) -> GlideResult<Self> {
        let mut iter = elements.iter();
        let origin = match iter.next() {
            Some(PathEl::MoveTo(p)) => *p,
            Some(_) => return Err(GlideError::parse("path must start with a moveto")),
            None => return Err(GlideError::parse("path is empty")),
        };
        check_point(origin)?;

        let mut cursor = origin;
        let mut length = 0.0;
        let mut curves = Vec::new();
        for (index, el) in iter.enumerate() {
            let cubic = match (*el, normalize) {
                (PathEl::CurveTo(c1, c2, to), _) => CubicBez::new(cursor, c1, c2, to),
                (PathEl::MoveTo(_), _) => {
                    return Err(GlideError::parse(
                        "path must be a single subpath (found a second moveto)",
                    ));
                }
                (PathEl::LineTo(to), true) => line_to_cubic(cursor, to),
                (PathEl::QuadTo(c, to), true) => QuadBez::new(cursor, c, to).raise(),
                (PathEl::ClosePath, true) => {
                    if cursor == origin {
                        continue;
                    }
                    line_to_cubic(cursor, origin)
                }
                (other, false) => {
                    return Err(GlideError::parse(format!(
                        "segment {index}: only cubic curveto commands are accepted, got {other:?}"
                    )));
                }
            };
            for p in [cubic.p1, cubic.p2, cubic.p3] {
                check_point(p)?;
            }

            let seg_len = cubic.arclen(ARCLEN_ACCURACY);
            if !seg_len.is_finite() {
                return Err(GlideError::parse(format!(
                    "segment {index}: arc length is not finite"
                )));
            }
            if seg_len <= 0.0 {
                if normalize {
                    tracing::debug!(index, "dropping zero-length segment");
                    continue;
                }
                return Err(GlideError::parse(format!(
                    "segment {index}: zero-length curve"
                )));
            }

            let start = length;
            length += seg_len;
            curves.push(Curve {
                from: cubic.p0,
                c1: cubic.p1,
                c2: cubic.p2,
                to: cubic.p3,
                start,
                end: length,
            });
            cursor = cubic.p3;
        }

        if curves.is_empty() {
            return Err(GlideError::parse("path has no curve segments"));
        }
        Ok(Self {
            total_length: length,
            curves,
        })
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn start_point(&self) -> Point {
        self.curves[0].from
    }

    pub fn end_point(&self) -> Point {
        self.curves[self.curves.len() - 1].to
    }

    /// Index of the curve whose `[start, end)` holds `length`.
    ///
    /// `length == total_length` resolves to the last curve.
    pub fn curve_index_at_length(&self, length: f64) -> GlideResult<usize> {
        if !(0.0..=self.total_length).contains(&length) {
            return Err(GlideError::out_of_range(length, self.total_length));
        }
        let idx = self
            .curves
            .partition_point(|c| c.end <= length)
            .min(self.curves.len() - 1);
        let c = &self.curves[idx];
        if !(c.start..=c.end).contains(&length) {
            return Err(GlideError::out_of_range(length, self.total_length));
        }
        Ok(idx)
    }

    /// Map an arc length onto the path.
    ///
    /// Inside a segment the Bézier parameter is taken proportional to the
    /// length offset, so spacing is only approximately uniform there.
    pub fn point_at_length(&self, length: f64) -> GlideResult<Point> {
        let c = &self.curves[self.curve_index_at_length(length)?];
        let t = ((length - c.start) / (c.end - c.start)).clamp(0.0, 1.0);
        Ok(c.eval(t))
    }

    /// `M{x},{y}C{c1},{c2},{to}...` with shortest round-trip number formatting.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start_point());
        for c in &self.curves {
            path.curve_to(c.c1, c.c2, c.to);
        }
        path
    }
}

impl FromStr for PathGeometry {
    type Err = GlideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.start_point();
        write!(f, "M{},{}", first.x, first.y)?;
        for c in &self.curves {
            write!(
                f,
                "C{},{},{},{},{},{}",
                c.c1.x, c.c1.y, c.c2.x, c.c2.y, c.to.x, c.to.y
            )?;
        }
        Ok(())
    }
}

fn parse_svg(d: &str) -> GlideResult<BezPath> {
    if d.trim().is_empty() {
        return Err(GlideError::parse("path is empty"));
    }
    BezPath::from_svg(d).map_err(|e| GlideError::parse(format!("invalid path data: {e}")))
}

// Command letters are every ASCII letter except the exponent marker.
fn check_cubic_only(d: &str) -> GlideResult<()> {
    let mut commands = d
        .chars()
        .filter(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'));
    match commands.next() {
        Some('M' | 'm') => {}
        Some(c) => {
            return Err(GlideError::parse(format!(
                "path must start with a moveto, found '{c}'"
            )));
        }
        None => return Err(GlideError::parse("path has no commands")),
    }
    let mut curves = 0usize;
    for c in commands {
        if !matches!(c, 'C' | 'c') {
            return Err(GlideError::parse(format!(
                "only cubic curveto commands may follow the moveto, found '{c}'"
            )));
        }
        curves += 1;
    }
    if curves == 0 {
        return Err(GlideError::parse("path has no curve segments"));
    }
    Ok(())
}

fn check_point(p: Point) -> GlideResult<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(GlideError::parse(format!("non-finite coordinate {p:?}")))
    }
}

fn line_to_cubic(from: Point, to: Point) -> CubicBez {
    CubicBez::new(from, from.lerp(to, 1.0 / 3.0), from.lerp(to, 2.0 / 3.0), to)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
