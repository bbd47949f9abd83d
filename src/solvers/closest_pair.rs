//! Closest pair of points via divide and conquer.
//!
//! The solver pre-sorts the input by x once, then recursively splits the
//! sorted slice in half, solves each side, and merges by scanning the
//! strip of points within the current minimum distance of the split line.
//! Strip points are sorted by y and each is compared against at most the
//! next 6 in y-order, which bounds the merge to O(n) work per level and
//! keeps the whole solve at O(n log n).
//!
//! Every pairwise distance examined bumps the trace's operation counter,
//! and each divide/base/merge decision is narrated into the trace at its
//! recursion depth.

use crate::error::Error;
use crate::trace::Trace;

/// Absolute per-coordinate tolerance for [`Point::almost_eq`].
pub const COORD_EPSILON: f64 = 1e-4;

/// A 2-D point, immutable once read from input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in double precision.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Approximate identity: both coordinates within [`COORD_EPSILON`].
    ///
    /// Points are value types with no stable identity across recursive
    /// slicing, and coordinates may round-trip through text, so "is this
    /// point part of the result pair" is deliberately an epsilon match
    /// rather than exact equality.
    pub fn almost_eq(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < COORD_EPSILON && (self.y - other.y).abs() < COORD_EPSILON
    }
}

/// Check the solver's preconditions: at least two points, all finite.
pub fn validate(points: &[Point]) -> Result<(), Error> {
    if points.len() < 2 {
        return Err(Error::InsufficientPoints(points.len()));
    }
    for (index, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(Error::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }
    }
    Ok(())
}

/// Sort points by x ascending, stably, with a deterministic total order.
///
/// Ties keep input order so repeated runs over the same input produce
/// identical traces.
pub fn sort_by_x(points: &mut [Point]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}

/// Find the closest pair among `points`.
///
/// Validates, sorts a copy by x, and runs the recursion. Returns the
/// minimum Euclidean distance and the pair achieving it.
pub fn solve(points: &[Point], trace: &mut Trace) -> Result<(f64, (Point, Point)), Error> {
    validate(points)?;
    let mut sorted = points.to_vec();
    sort_by_x(&mut sorted);
    Ok(solve_sorted(&sorted, trace))
}

/// Run the recursion over points already validated and sorted by x.
///
/// Callers that emit their own preamble (the run layer) use this to keep
/// the banner and the recursion trace in one recorder.
pub fn solve_sorted(points: &[Point], trace: &mut Trace) -> (f64, (Point, Point)) {
    debug_assert!(points.len() >= 2);
    closest(points, 0, trace)
}

fn closest(points: &[Point], depth: usize, trace: &mut Trace) -> (f64, (Point, Point)) {
    let n = points.len();
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("closest", size = n, depth).entered();

    if n <= 3 {
        trace.blank();
        trace.line(depth, format!("Base case: {n} points - using brute force"));
        let (dist, pair) = brute_force(points, trace);
        trace.line(depth + 1, format!("→ Minimum distance: {dist:.4}"));
        return (dist, pair);
    }

    let mid = n / 2;
    trace.blank();
    trace.line(depth, format!("Dividing {n} points at index {mid}"));
    trace.line(depth + 1, format!("Left: {mid} points"));
    trace.line(depth + 1, format!("Right: {} points", n - mid));

    let (d_left, pair_left) = closest(&points[..mid], depth + 1, trace);
    let (d_right, pair_right) = closest(&points[mid..], depth + 1, trace);

    // Strict less-than: on exact ties the right pair wins. The tie-break
    // is a fixed convention for trace reproducibility, not a correctness
    // requirement.
    let mut d = d_left.min(d_right);
    let mut best = if d_left < d_right { pair_left } else { pair_right };
    trace.line(depth, format!("Merging: min({d_left:.4}, {d_right:.4}) = {d:.4}"));

    let mid_x = points[mid].x;
    let mut strip: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| (p.x - mid_x).abs() < d)
        .collect();
    strip.sort_by(|a, b| a.y.total_cmp(&b.y));
    trace.line(
        depth,
        format!("Checking strip: {} points within distance {d:.4}", strip.len()),
    );

    // At a fixed d, no closer pair can have more than 6 strip candidates
    // ahead of it in y-order.
    for i in 0..strip.len() {
        for j in (i + 1)..strip.len().min(i + 7) {
            let dist = strip[i].distance(&strip[j]);
            trace.tick();
            if dist < d {
                d = dist;
                best = (strip[i], strip[j]);
                trace.line(depth + 1, format!("✓ New minimum found: {d:.4}"));
            }
        }
    }

    (d, best)
}

/// O(k²) minimum over all pairs; one counter bump per pair examined.
fn brute_force(points: &[Point], trace: &mut Trace) -> (f64, (Point, Point)) {
    let mut min_dist = f64::INFINITY;
    let mut pair = (points[0], points[1]);
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = points[i].distance(&points[j]);
            trace.tick();
            if d < min_dist {
                min_dist = d;
                pair = (points[i], points[j]);
            }
        }
    }
    (min_dist, pair)
}
