//! Assorted utilities and helpers.

use num_bigint::BigUint;

/// Number of decimal digits in `n`, with `digits(0) == 1`.
///
/// Karatsuba splits operands by decimal digit count, so this is the
/// size measure used when picking the split position `10^(n/2)`.
pub fn decimal_digits(n: &BigUint) -> usize {
    n.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::decimal_digits;
    use num_bigint::BigUint;

    #[test]
    fn zero_has_one_digit() {
        assert_eq!(decimal_digits(&BigUint::from(0u32)), 1);
    }

    #[test]
    fn counts_across_power_of_ten_boundaries() {
        assert_eq!(decimal_digits(&BigUint::from(9u32)), 1);
        assert_eq!(decimal_digits(&BigUint::from(10u32)), 2);
        assert_eq!(decimal_digits(&BigUint::from(99u32)), 2);
        assert_eq!(decimal_digits(&BigUint::from(100u32)), 3);
        assert_eq!(decimal_digits(&BigUint::from(123_456_789u64)), 9);
    }

    #[test]
    fn handles_operands_beyond_machine_words() {
        let huge: BigUint = "9".repeat(80).parse().unwrap();
        assert_eq!(decimal_digits(&huge), 80);
    }
}
