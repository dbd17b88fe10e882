//! Piecewise-linear curves.
//!
//! Two table shapes are supported:
//!
//! - **segments**: each piece is `base + slope * (x - start)` and is active up
//!   to and including its `upper` bound; the last piece is unbounded.
//! - **anchors**: known `(x, y)` points joined by straight lines, extended past
//!   the last point with the slope of the final pair.
//!
//! Lookups use `x <= upper`, so a value sitting exactly on a breakpoint is
//! evaluated by the lower piece. The tables in `engine::tables` are continuous,
//! so both pieces agree there anyway.

/// One linear piece of a segment table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    /// Inclusive upper bound (`f64::INFINITY` for the open tail).
    pub upper: f64,
    /// Value at `start`.
    pub base: f64,
    /// Increase per unit of `x` past `start`.
    pub slope: f64,
}

impl Segment {
    pub const fn new(start: f64, upper: f64, base: f64, slope: f64) -> Self {
        Self {
            start,
            upper,
            base,
            slope,
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.base + self.slope * (x - self.start)
    }

    pub fn is_tail(&self) -> bool {
        self.upper.is_infinite()
    }
}

/// Index of the segment that covers `x`.
///
/// Values past every `upper` bound land in the last segment. Returns `None`
/// only for an empty table.
pub fn locate_segment(segments: &[Segment], x: f64) -> Option<usize> {
    let last = segments.len().checked_sub(1)?;
    Some(segments.iter().position(|s| x <= s.upper).unwrap_or(last))
}

/// Evaluate a segment table, returning the active index and the value.
pub fn eval_segments(segments: &[Segment], x: f64) -> Option<(usize, f64)> {
    let idx = locate_segment(segments, x)?;
    Some((idx, segments[idx].eval(x)))
}

/// A known point on an anchor curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where on an anchor curve a value was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSpan {
    /// Interpolated between `anchors[i]` and `anchors[i + 1]`.
    Between(usize),
    /// Extrapolated past the last anchor.
    Beyond,
}

/// Evaluate an anchor curve at `x`.
///
/// Returns `None` when fewer than two anchors are given.
pub fn interpolate(anchors: &[Anchor], x: f64) -> Option<(AnchorSpan, f64)> {
    if anchors.len() < 2 {
        return None;
    }

    for (i, pair) in anchors.windows(2).enumerate() {
        if x <= pair[1].x {
            return Some((AnchorSpan::Between(i), lerp(pair[0], pair[1], x)));
        }
    }

    let n = anchors.len();
    Some((AnchorSpan::Beyond, lerp(anchors[n - 2], anchors[n - 1], x)))
}

/// Slope of the line through two anchors.
pub fn anchor_slope(a: Anchor, b: Anchor) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

fn lerp(a: Anchor, b: Anchor, x: f64) -> f64 {
    a.y + (x - a.x) * anchor_slope(a, b)
}

/// Round to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    // `f64::round` already rounds halves away from zero.
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: [Segment; 2] = [
        Segment::new(0.0, 1.0, 0.0, 10.0),
        Segment::new(1.0, f64::INFINITY, 10.0, 2.0),
    ];

    #[test]
    fn breakpoint_uses_lower_segment() {
        assert_eq!(locate_segment(&STEPS, 1.0), Some(0));
        assert_eq!(locate_segment(&STEPS, 1.0001), Some(1));
        assert_eq!(eval_segments(&STEPS, 1.0), Some((0, 10.0)));
    }

    #[test]
    fn tail_catches_large_values() {
        let (idx, y) = eval_segments(&STEPS, 6.0).unwrap();
        assert_eq!(idx, 1);
        assert!((y - 20.0).abs() < 1e-12);
        assert!(STEPS[1].is_tail());
    }

    #[test]
    fn empty_tables_yield_none() {
        assert_eq!(eval_segments(&[], 1.0), None);
        assert_eq!(interpolate(&[Anchor::new(0.0, 0.0)], 1.0), None);
    }

    #[test]
    fn interpolation_hits_anchors_exactly() {
        let anchors = [Anchor::new(0.0, 0.0), Anchor::new(2.0, 10.0), Anchor::new(4.0, 11.0)];
        assert_eq!(interpolate(&anchors, 2.0), Some((AnchorSpan::Between(0), 10.0)));
        assert_eq!(interpolate(&anchors, 3.0), Some((AnchorSpan::Between(1), 10.5)));
        assert_eq!(interpolate(&anchors, 6.0), Some((AnchorSpan::Beyond, 12.0)));
    }

    #[test]
    fn rounding_half_away_from_zero() {
        assert_eq!(round_one_decimal(23.96), 24.0);
        assert_eq!(round_one_decimal(23.94), 23.9);
        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(-0.25), -0.3);
    }
}
