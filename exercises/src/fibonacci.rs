//! Fibonacci in four styles: naive recursion, memoized recursion,
//! iteration, and an iterator over the whole sequence.

use std::collections::HashMap;

use crate::error::{ExerciseError, Result};

/// Largest `n` with `fib(n)` representable in a `u64`.
pub const MAX_FIB_INDEX: u32 = 93;

/// Exponential-time recursion. Only practical for small `n`.
pub fn fib_recursive(n: u32) -> Result<u64> {
    if n > MAX_FIB_INDEX {
        return Err(ExerciseError::FibonacciOverflow(n));
    }
    Ok(fib_unchecked(n))
}

fn fib_unchecked(n: u32) -> u64 {
    if n < 2 {
        return n as u64;
    }
    fib_unchecked(n - 1) + fib_unchecked(n - 2)
}

/// Memoized recursion. The memo persists across calls.
#[derive(Debug, Clone)]
pub struct FibMemo {
    memo: HashMap<u32, u64>,
}

impl FibMemo {
    pub fn new() -> Self {
        Self {
            memo: HashMap::from([(0, 0), (1, 1)]),
        }
    }

    pub fn fib(&mut self, n: u32) -> Result<u64> {
        if n > MAX_FIB_INDEX {
            return Err(ExerciseError::FibonacciOverflow(n));
        }
        if let Some(&value) = self.memo.get(&n) {
            return Ok(value);
        }
        let value = self.fib(n - 1)? + self.fib(n - 2)?;
        self.memo.insert(n, value);
        Ok(value)
    }

    pub fn cached(&self) -> usize {
        self.memo.len()
    }
}

impl Default for FibMemo {
    fn default() -> Self {
        Self::new()
    }
}

pub fn fib_iterative(n: u32) -> Result<u64> {
    if n == 0 {
        return Ok(0);
    }
    let (mut last, mut next): (u64, u64) = (0, 1);
    for _ in 1..n {
        let sum = last
            .checked_add(next)
            .ok_or(ExerciseError::FibonacciOverflow(n))?;
        last = next;
        next = sum;
    }
    Ok(next)
}

/// Yields `fib(0)` through `fib(MAX_FIB_INDEX)`, then ends.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|n| n.checked_add(value));
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: [u64; 12] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];

    #[test]
    fn test_recursive_small() {
        for (n, &expected) in FIRST.iter().enumerate() {
            assert_eq!(fib_recursive(n as u32).unwrap(), expected);
        }
        assert_eq!(fib_recursive(20).unwrap(), 6765);
    }

    #[test]
    fn test_memo_matches_iterative() {
        let mut memo = FibMemo::new();
        for n in 0..=MAX_FIB_INDEX {
            assert_eq!(memo.fib(n).unwrap(), fib_iterative(n).unwrap(), "n = {}", n);
        }
        assert_eq!(memo.cached(), MAX_FIB_INDEX as usize + 1);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(fib_iterative(50).unwrap(), 12_586_269_025);
        assert_eq!(FibMemo::new().fib(MAX_FIB_INDEX).unwrap(), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(fib_iterative(94).unwrap_err(), ExerciseError::FibonacciOverflow(94));
        assert_eq!(FibMemo::new().fib(94).unwrap_err(), ExerciseError::FibonacciOverflow(94));
        assert_eq!(fib_recursive(94).unwrap_err(), ExerciseError::FibonacciOverflow(94));
        assert_eq!(
            fib_recursive(u32::MAX).unwrap_err(),
            ExerciseError::FibonacciOverflow(u32::MAX)
        );
    }

    #[test]
    fn test_sequence() {
        let head: Vec<u64> = Fibonacci::new().take(FIRST.len()).collect();
        assert_eq!(head, FIRST);
    }

    #[test]
    fn test_sequence_ends_before_overflow() {
        let all: Vec<u64> = Fibonacci::new().collect();
        assert_eq!(all.len(), MAX_FIB_INDEX as usize + 1);
        assert_eq!(*all.last().unwrap(), fib_iterative(MAX_FIB_INDEX).unwrap());
    }
}
