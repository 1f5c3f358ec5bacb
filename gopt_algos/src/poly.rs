//! Dense integer polynomials, just enough for chromatic polynomials.

use std::fmt;
use std::ops::{Add, Sub};

/// A polynomial with `i64` coefficients, stored dense from the constant
/// term up. The zero polynomial has no coefficients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coeffs: Vec<i64>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Polynomial::default()
    }

    /// The monomial `x^n`.
    pub fn x_pow(n: usize) -> Self {
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = 1;
        Polynomial { coeffs }
    }

    /// Build from coefficients, constant term first; trailing zeros are
    /// trimmed.
    pub fn from_coeffs(coeffs: Vec<i64>) -> Self {
        let mut p = Polynomial { coeffs };
        p.trim();
        p
    }

    /// Coefficients, constant term first.
    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Evaluate at an integer point (Horner).
    pub fn eval(&self, x: i64) -> i64 {
        self.coeffs.iter().rev().fold(0, |acc, &c| acc * x + c)
    }

    fn trim(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        combine(self, rhs, 1)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        combine(self, rhs, -1)
    }
}

fn combine(mut lhs: Polynomial, rhs: Polynomial, sign: i64) -> Polynomial {
    if lhs.coeffs.len() < rhs.coeffs.len() {
        lhs.coeffs.resize(rhs.coeffs.len(), 0);
    }
    for (slot, c) in lhs.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
        *slot += sign * c;
    }
    lhs.trim();
    lhs
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " {} ", if c < 0 { "-" } else { "+" })?;
            } else if c < 0 {
                write!(f, "-")?;
            }
            first = false;
            match (c.abs(), power) {
                (magnitude, 0) => write!(f, "{magnitude}")?,
                (1, 1) => write!(f, "x")?,
                (1, _) => write!(f, "x^{power}")?,
                (magnitude, 1) => write!(f, "{magnitude}x")?,
                (magnitude, _) => write!(f, "{magnitude}x^{power}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_eval() {
        let p = Polynomial::x_pow(2) - Polynomial::x_pow(1);
        assert_eq!(p.coeffs(), &[0, -1, 1]);
        assert_eq!(p.eval(5), 20);
        assert_eq!(p.degree(), Some(2));
    }

    #[test]
    fn cancellation_trims() {
        let p = Polynomial::x_pow(3) - Polynomial::x_pow(3);
        assert_eq!(p, Polynomial::zero());
        assert_eq!(p.degree(), None);
        assert_eq!(p.eval(7), 0);
    }

    #[test]
    fn display_is_readable() {
        let p = Polynomial::from_coeffs(vec![0, 4, -10, 10, -5, 1]);
        assert_eq!(p.to_string(), "x^5 - 5x^4 + 10x^3 - 10x^2 + 4x");
    }
}
