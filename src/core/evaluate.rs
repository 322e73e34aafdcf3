//! Arithmetic evaluation of a classified query
//!
//! This is the consumer side of the router payload: it takes an operation and
//! its numbers and renders the sentence a person would read.

use crate::core::operation::Operation;
use std::fmt;

pub const UNKNOWN_OPERATION: &str = "I’m not sure how to handle that operation.";
pub const NO_NUMBERS: &str = "No numbers were provided for this operation.";
pub const EXPONENT_NEEDS_TWO: &str = "Not enough numbers to perform exponent (need at least 2).";

/// Result of an arithmetic fold
///
/// Integer math is exact until it overflows; from then on the value is carried
/// as a float, which may end up infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    fn combine(self, rhs: i64, int_op: fn(i64, i64) -> Option<i64>, float_op: fn(f64, f64) -> f64) -> Number {
        match self {
            Number::Int(lhs) => match int_op(lhs, rhs) {
                Some(value) => Number::Int(value),
                None => Number::Float(float_op(lhs as f64, rhs as f64)),
            },
            Number::Float(lhs) => Number::Float(float_op(lhs, rhs as f64)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) if value.is_nan() => write!(f, "NaN"),
            Number::Float(value) if value.is_infinite() && *value > 0.0 => write!(f, "Infinity"),
            Number::Float(value) if value.is_infinite() => write!(f, "-Infinity"),
            Number::Float(value) if uses_exponent(*value) => {
                let formatted = format!("{:e}", value);
                match formatted.split_once('e') {
                    Some((mantissa, exp)) if !exp.starts_with('-') => {
                        write!(f, "{}e+{}", mantissa, exp)
                    }
                    _ => write!(f, "{}", formatted),
                }
            }
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}

/// Magnitudes from 1e21 up, and nonzero ones below 1e-6, print in exponent form
fn uses_exponent(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6)
}

/// Render the answer for an operation over the extracted numbers
pub fn evaluate(operation: Operation, numbers: &[i64]) -> String {
    if operation.is_unknown() {
        return UNKNOWN_OPERATION.to_string();
    }
    if numbers.is_empty() {
        return NO_NUMBERS.to_string();
    }

    match operation {
        Operation::PrimeCheck => describe_primes(numbers),
        Operation::Addition => {
            let sum = fold(Number::Int(0), numbers, i64::checked_add, |a, b| a + b);
            format!("{} = {}", join(numbers, " + "), sum)
        }
        Operation::Subtraction => {
            let (first, rest) = (numbers[0], &numbers[1..]);
            if rest.is_empty() {
                return format!(
                    "Only one number provided: {}. There's nothing to subtract.",
                    first
                );
            }
            let result = fold(Number::Int(first), rest, i64::checked_sub, |a, b| a - b);
            format!("{} = {}", join(numbers, " - "), result)
        }
        Operation::Multiplication => {
            let product = fold(Number::Int(1), numbers, i64::checked_mul, |a, b| a * b);
            format!("{} = {}", join(numbers, " * "), product)
        }
        Operation::Exponent => {
            if numbers.len() < 2 {
                return EXPONENT_NEEDS_TWO.to_string();
            }
            let (base, exp) = (numbers[0], numbers[1]);
            format!("{} ^ {} = {}", base, exp, power(base, exp))
        }
        Operation::Unknown => UNKNOWN_OPERATION.to_string(),
    }
}

fn fold(
    seed: Number,
    numbers: &[i64],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    numbers
        .iter()
        .fold(seed, |acc, &n| acc.combine(n, int_op, float_op))
}

/// `base` raised to `exp`, exact when the result fits in an `i64`
pub fn power(base: i64, exp: i64) -> Number {
    let exact = u32::try_from(exp)
        .ok()
        .and_then(|exp| base.checked_pow(exp));

    match exact {
        Some(value) => Number::Int(value),
        None => Number::Float(Number::Int(base).as_f64().powf(exp as f64)),
    }
}

fn describe_primes(numbers: &[i64]) -> String {
    let (primes, non_primes): (Vec<i64>, Vec<i64>) = numbers.iter().partition(|&&n| is_prime(n));

    if primes.is_empty() {
        format!("None of the numbers [{}] are prime.", join(numbers, ", "))
    } else if non_primes.is_empty() {
        format!("All of the numbers [{}] are prime.", join(numbers, ", "))
    } else {
        format!(
            "Primes: {}. Non-primes: {}.",
            join(&primes, ", "),
            join(&non_primes, ", ")
        )
    }
}

fn join(numbers: &[i64], separator: &str) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Primality over the whole `i64` range
///
/// Values below 2 are never prime. Small candidates use trial division; the
/// rest use Miller-Rabin with a witness set that is deterministic for 64-bit
/// integers.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;

    const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
    for p in SMALL_PRIMES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    if n < 41 * 41 {
        return true;
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for a in SMALL_PRIMES {
        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mod_mul(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn mod_pow(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, m);
        }
        base = mod_mul(base, base, m);
        exp >>= 1;
    }
    result
}
