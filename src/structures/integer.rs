//! The two integer group families.
//!
//! - `IntegerAdditive`: all integers under addition; identity 0, inverse
//!   is negation. Group exponentiation degenerates to multiplication.
//! - `IntegerMultiplicative`: the invertible integers `{ 1, -1 }` under
//!   multiplication. Any nonzero integer collapses to its sign on entry;
//!   zero is rejected because it has no multiplicative inverse.

use core::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::algebra::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntegerAdditive;

impl IntegerAdditive {
    pub(crate) fn identity(&self) -> Value {
        Value::Int(BigInt::zero())
    }

    pub(crate) fn combine(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    pub(crate) fn invert(&self, a: &BigInt) -> BigInt {
        -a
    }
}

impl fmt::Display for IntegerAdditive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "integers under addition")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntegerMultiplicative;

impl IntegerMultiplicative {
    pub(crate) fn identity(&self) -> Value {
        Value::Int(BigInt::one())
    }

    /// Collapse a nonzero integer to its sign. Zero is left in place so
    /// the membership check can reject it.
    pub(crate) fn canonical(&self, n: &BigInt) -> BigInt {
        if n.is_positive() {
            BigInt::one()
        } else if n.is_negative() {
            -BigInt::one()
        } else {
            BigInt::zero()
        }
    }

    pub(crate) fn contains(&self, n: &BigInt) -> bool {
        !n.is_zero()
    }

    pub(crate) fn combine(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    pub(crate) fn invert(&self, a: &BigInt) -> BigInt {
        a.clone()
    }
}

impl fmt::Display for IntegerMultiplicative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invertible integers under multiplication")
    }
}
