//! Karatsuba integer multiplication.
//!
//! Operands are arbitrary-precision non-negative integers, split by
//! decimal digit count into `high`/`low` halves at `10^(n/2)`. Each
//! invocation (base cases included) bumps the trace's operation counter,
//! and the counter value at entry numbers the `Step {n}:` trace line, so
//! the narrated step order follows the depth-first z0, z1, z2 recursion.
//!
//! All arithmetic stays exact: `BigUint` throughout, no overflow, no
//! rounding. The combine-step subtraction `z1 - z2 - z0` cannot
//! underflow because `z1 = (l1+h1)(l2+h2) ≥ h1·h2 + l1·l2 = z2 + z0`
//! identically.

use num_bigint::BigUint;
use num_integer::Integer;

use crate::trace::Trace;
use crate::utils::decimal_digits;

/// Multiply two non-negative integers, narrating every recursive step.
///
/// Returns the exact product. The trace's operation counter ends at the
/// total number of recursive invocations.
pub fn multiply(x: &BigUint, y: &BigUint, trace: &mut Trace) -> BigUint {
    karatsuba(x.clone(), y.clone(), 0, trace)
}

fn karatsuba(x: BigUint, y: BigUint, depth: usize, trace: &mut Trace) -> BigUint {
    let step = trace.tick();
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("karatsuba", step, depth).entered();
    let ten = BigUint::from(10u32);

    if x < ten || y < ten {
        let result = &x * &y;
        trace.line(depth, format!("Base case: {x} × {y} = {result}"));
        return result;
    }

    let n = decimal_digits(&x).max(decimal_digits(&y));
    let half = n / 2;
    let pow = ten.pow(half as u32);
    let (high1, low1) = x.div_rem(&pow);
    let (high2, low2) = y.div_rem(&pow);

    trace.blank();
    trace.line(depth, format!("Step {step}:"));
    trace.line(depth + 1, format!("X = {x} → high={high1}, low={low1}"));
    trace.line(depth + 1, format!("Y = {y} → high={high2}, low={low2}"));

    // Fixed recursion order; it shapes the trace, not the product.
    let z0 = karatsuba(low1.clone(), low2.clone(), depth + 1, trace);
    let z1 = karatsuba(&low1 + &high1, &low2 + &high2, depth + 1, trace);
    let z2 = karatsuba(high1, high2, depth + 1, trace);

    let result = &z2 * (&pow * &pow) + (&z1 - &z2 - &z0) * &pow + &z0;
    trace.line(depth + 1, format!("→ Result: {result}"));

    result
}

#[cfg(test)]
mod tests {
    use super::multiply;
    use crate::trace::Trace;
    use num_bigint::BigUint;

    fn big(s: &str) -> BigUint {
        s.parse().unwrap()
    }

    #[test]
    fn single_digit_operands_hit_base_case() {
        let mut trace = Trace::new();
        let product = multiply(&big("7"), &big("8"), &mut trace);
        assert_eq!(product, big("56"));
        assert_eq!(trace.ops(), 1);
        assert_eq!(trace.lines(), ["Base case: 7 × 8 = 56"]);
    }

    #[test]
    fn one_single_digit_operand_short_circuits() {
        let mut trace = Trace::new();
        let product = multiply(&big("4"), &big("987654321"), &mut trace);
        assert_eq!(product, big("3950617284"));
        assert_eq!(trace.ops(), 1);
    }

    #[test]
    fn zero_operand() {
        let mut trace = Trace::new();
        assert_eq!(multiply(&big("0"), &big("123456"), &mut trace), big("0"));
        assert_eq!(trace.ops(), 1);
    }

    #[test]
    fn four_digit_operands() {
        let mut trace = Trace::new();
        let product = multiply(&big("1234"), &big("5678"), &mut trace);
        assert_eq!(product, big("7006652"));
        assert_eq!(trace.ops(), 16);
    }

    #[test]
    fn first_split_is_narrated() {
        let mut trace = Trace::new();
        multiply(&big("1234"), &big("5678"), &mut trace);
        let lines = trace.lines();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Step 1:");
        assert_eq!(lines[2], "  X = 1234 → high=12, low=34");
        assert_eq!(lines[3], "  Y = 5678 → high=56, low=78");
        assert_eq!(lines.last().unwrap(), "  → Result: 7006652");
    }

    #[test]
    fn uneven_digit_counts() {
        let mut trace = Trace::new();
        let product = multiply(&big("12"), &big("3456789"), &mut trace);
        assert_eq!(product, big("41481468"));
    }

    #[test]
    fn commutative_on_asymmetric_operands() {
        let x = big("90817263545463728190");
        let y = big("1029384756");
        let mut t1 = Trace::new();
        let mut t2 = Trace::new();
        assert_eq!(multiply(&x, &y, &mut t1), multiply(&y, &x, &mut t2));
    }

    #[test]
    fn fifty_digit_operands_match_direct_product() {
        let x = big("12345678901234567890123456789012345678901234567890");
        let y = big("98765432109876543210987654321098765432109876543210");
        let mut trace = Trace::new();
        assert_eq!(multiply(&x, &y, &mut trace), &x * &y);
        assert!(trace.ops() > 1);
    }
}
