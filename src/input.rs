//! Token-level input parsing.
//!
//! The raw on-disk format is plain whitespace-separated numbers: an
//! even-length sequence of decimal coordinates consumed pairwise as
//! (x, y) for closest pair, or exactly two non-negative integer literals
//! for multiplication. Shape and literal errors are reported before any
//! solver runs.

use num_bigint::BigUint;

use crate::error::Error;
use crate::solvers::closest_pair::Point;

/// Parse whitespace-separated coordinates into points, consumed pairwise.
///
/// Errors: empty or odd token count ([`Error::InvalidInputShape`]), a
/// token that is not a decimal number ([`Error::InvalidNumericLiteral`]),
/// or a NaN/infinite value ([`Error::NonFiniteCoordinate`]).
pub fn parse_points(input: &str) -> Result<Vec<Point>, Error> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(Error::InvalidInputShape("no coordinates supplied".into()));
    }
    if tokens.len() % 2 != 0 {
        return Err(Error::InvalidInputShape(format!(
            "odd coordinate count {}; coordinates are consumed pairwise as (x, y)",
            tokens.len()
        )));
    }

    let mut points = Vec::with_capacity(tokens.len() / 2);
    for (index, pair) in tokens.chunks_exact(2).enumerate() {
        let x = parse_coordinate(pair[0])?;
        let y = parse_coordinate(pair[1])?;
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFiniteCoordinate { index, x, y });
        }
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn parse_coordinate(token: &str) -> Result<f64, Error> {
    token
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumericLiteral(token.to_string()))
}

/// Parse exactly two whitespace-separated non-negative integer literals.
pub fn parse_operands(input: &str) -> Result<(BigUint, BigUint), Error> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(Error::InvalidInputShape(format!(
            "expected exactly 2 integer operands, got {}",
            tokens.len()
        )));
    }
    let x = parse_operand(tokens[0])?;
    let y = parse_operand(tokens[1])?;
    Ok((x, y))
}

fn parse_operand(token: &str) -> Result<BigUint, Error> {
    token
        .parse::<BigUint>()
        .map_err(|_| Error::InvalidNumericLiteral(token.to_string()))
}
