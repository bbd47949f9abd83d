//! The two divide-and-conquer solvers.
//!
//! Both share one shape: recursively divide the input, solve the parts
//! depth-first, merge, and narrate every decision into a [`crate::Trace`].

pub mod closest_pair;
pub mod karatsuba;
