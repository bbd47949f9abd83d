//! The two run entry points and their reports.
//!
//! A "run" validates its input, narrates a banner and an input echo into
//! a fresh [`Trace`], times the recursion, and returns a typed report
//! holding the result, the operation count, the elapsed wall-time, and
//! the completed trace. Everything in a report is created fresh per run;
//! nothing persists across runs.

use std::time::{Duration, Instant};

use num_bigint::BigUint;

use crate::error::Error;
use crate::solvers::{closest_pair, karatsuba};
use crate::solvers::closest_pair::Point;
use crate::trace::Trace;
use crate::utils::decimal_digits;

/// At most this many points are echoed into the trace preamble.
const PREAMBLE_POINT_LIMIT: usize = 10;

/// Derived per-run statistics; computed on demand, never stored.
#[derive(Clone, Debug)]
pub struct RunStats {
    pub algorithm: &'static str,
    pub input_size: usize,
    pub operations: u64,
    pub elapsed: Duration,
    pub complexity: &'static str,
}

/// Report of one closest-pair run.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosestPairRun {
    pub distance: f64,
    pub pair: (Point, Point),
    /// The input, sorted by x as the recursion saw it.
    pub points: Vec<Point>,
    pub comparisons: u64,
    pub elapsed: Duration,
    pub trace: Vec<String>,
}

impl ClosestPairRun {
    pub fn stats(&self) -> RunStats {
        RunStats {
            algorithm: "Closest Pair of Points",
            input_size: self.points.len(),
            operations: self.comparisons,
            elapsed: self.elapsed,
            complexity: "O(n log n)",
        }
    }
}

/// Report of one Karatsuba multiplication run.
#[derive(Clone, Debug, PartialEq)]
pub struct KaratsubaRun {
    pub product: BigUint,
    /// Decimal digit counts of (x, y).
    pub digits: (usize, usize),
    pub recursive_calls: u64,
    pub elapsed: Duration,
    pub trace: Vec<String>,
}

impl KaratsubaRun {
    pub fn stats(&self) -> RunStats {
        RunStats {
            algorithm: "Karatsuba Integer Multiplication",
            input_size: self.digits.0.max(self.digits.1),
            operations: self.recursive_calls,
            elapsed: self.elapsed,
            complexity: "O(n^1.585)",
        }
    }
}

/// Find the closest pair among `coords`.
///
/// Validates (≥2 points, all finite) before any trace line is emitted,
/// so a failed run carries no partial trace.
///
/// ```
/// let run = dnc_trace::run_closest_pair(&[(0.0, 0.0), (3.0, 4.0), (1.0, 1.0)]).unwrap();
/// assert!((run.distance - 2.0_f64.sqrt()).abs() < 1e-9);
/// assert_eq!(run.comparisons, 3);
/// assert!(run.trace[1].contains("CLOSEST PAIR"));
/// ```
pub fn run_closest_pair(coords: &[(f64, f64)]) -> Result<ClosestPairRun, Error> {
    let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
    closest_pair::validate(&points)?;

    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("run_closest_pair", points = points.len()).entered();

    let mut sorted = points;
    closest_pair::sort_by_x(&mut sorted);
    let n = sorted.len();

    let mut trace = Trace::new();
    trace.line(0, "=".repeat(60));
    trace.line(0, "CLOSEST PAIR OF POINTS ALGORITHM");
    trace.line(0, "=".repeat(60));
    trace.blank();
    trace.line(0, format!("Input: {n} points"));
    trace.line(0, "Points (sorted by x-coordinate):");
    for (i, p) in sorted.iter().take(PREAMBLE_POINT_LIMIT).enumerate() {
        trace.line(1, format!("{}. ({:.2}, {:.2})", i + 1, p.x, p.y));
    }
    if n > PREAMBLE_POINT_LIMIT {
        trace.line(1, format!("... and {} more points", n - PREAMBLE_POINT_LIMIT));
    }

    let start = Instant::now();
    let (distance, pair) = closest_pair::solve_sorted(&sorted, &mut trace);
    let elapsed = start.elapsed();

    Ok(ClosestPairRun {
        distance,
        pair,
        points: sorted,
        comparisons: trace.ops(),
        elapsed,
        trace: trace.into_lines(),
    })
}

/// Multiply two non-negative integers via Karatsuba.
///
/// Structured `BigUint` input cannot violate the preconditions, so this
/// never fails today; the `Result` keeps the two entry points symmetric.
///
/// ```
/// use num_bigint::BigUint;
/// let x = BigUint::from(1234u32);
/// let y = BigUint::from(5678u32);
/// let run = dnc_trace::run_karatsuba(&x, &y).unwrap();
/// assert_eq!(run.product.to_string(), "7006652");
/// assert_eq!(run.recursive_calls, 16);
/// ```
pub fn run_karatsuba(x: &BigUint, y: &BigUint) -> Result<KaratsubaRun, Error> {
    let digits = (decimal_digits(x), decimal_digits(y));

    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("run_karatsuba", digits_x = digits.0, digits_y = digits.1)
        .entered();

    let mut trace = Trace::new();
    trace.line(0, "=".repeat(60));
    trace.line(0, "KARATSUBA INTEGER MULTIPLICATION ALGORITHM");
    trace.line(0, "=".repeat(60));
    trace.blank();
    trace.line(0, "Input Numbers:");
    trace.line(1, format!("X = {x}"));
    trace.line(1, format!("Y = {y}"));
    trace.blank();
    trace.line(
        0,
        format!("Digits: X has {} digits, Y has {} digits", digits.0, digits.1),
    );

    let start = Instant::now();
    let product = karatsuba::multiply(x, y, &mut trace);
    let elapsed = start.elapsed();

    Ok(KaratsubaRun {
        product,
        digits,
        recursive_calls: trace.ops(),
        elapsed,
        trace: trace.into_lines(),
    })
}
