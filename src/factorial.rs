// Copyright 2024 Martin Pool

//! Iterative factorial on a fixed-width accumulator.

/// Compute `n!` by multiplying an `i32` accumulator by every value from 1
/// through `n` in ascending order.
///
/// `factorial(0)` returns 1, the empty-product convention for `0!`. For
/// negative `n` the range is likewise empty and the initial accumulator
/// comes back unchanged, so `factorial(-1)` is also 1: the factorial is
/// mathematically undefined there, but no validation is done and no error
/// is raised.
///
/// Multiplication wraps on overflow, so results are exact only through
/// `factorial(12)`; from 13 upward the value is the true product reduced
/// mod 2^32.
pub fn factorial(n: i32) -> i32 {
    let mut result: i32 = 1;
    for i in 1..=n {
        result = result.wrapping_mul(i);
    }
    result
}
