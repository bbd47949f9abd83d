//! Instrumented divide-and-conquer algorithms.
//!
//! This crate implements two classic divide-and-conquer algorithms and
//! records a structured, human-readable trace of every recursive decision
//! they make:
//!
//! - **Closest pair of points** — O(n log n) over N planar points, with
//!   the bounded-strip merge step.
//! - **Karatsuba multiplication** — exact products of arbitrary-precision
//!   non-negative integers, split by decimal digit count.
//!
//! ## Core idea
//! 1. Hand a run entry point plain numeric input.
//! 2. The solver recursively decomposes it, narrating splits, base cases,
//!    and merges into a depth-indented [`Trace`] and bumping a run-scoped
//!    operation counter.
//! 3. You get back a typed report: result, counter, elapsed wall-time,
//!    and the completed trace, ready for whatever renders it.
//!
//! ## Quick start
//! ```
//! use dnc_trace::run_closest_pair;
//!
//! let run = run_closest_pair(&[(0.0, 0.0), (3.0, 4.0), (1.0, 1.0)]).unwrap();
//! assert!((run.distance - 2.0_f64.sqrt()).abs() < 1e-9);
//! assert!(run.trace.iter().any(|line| line.contains("Base case")));
//! ```
//!
//! Raw whitespace-separated text goes through [`input::parse_points`] /
//! [`input::parse_operands`] first; both fail fast with a descriptive
//! [`Error`] on malformed input, before any recursion starts.

pub mod error;
pub mod input;
pub mod run;
pub mod solvers;
pub mod trace;
pub mod utils;

pub use crate::error::Error;
pub use crate::run::{run_closest_pair, run_karatsuba, ClosestPairRun, KaratsubaRun, RunStats};
pub use crate::solvers::closest_pair::Point;
pub use crate::trace::Trace;
