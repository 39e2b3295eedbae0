//! Integers modulo `m`, under addition and under multiplication.
//!
//! Values entering either family are reduced to the canonical residue in
//! `[0, m)` with floored division, so negative inputs wrap around. The
//! additive family contains every residue; the multiplicative family
//! contains exactly the residues coprime with the modulus, and computes
//! inverses from Bezout coefficients.

use core::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::algebra::group::GroupError;
use crate::algebra::value::Value;
use crate::utils::bezout;

fn check_modulus(modulus: &BigInt) -> Result<(), GroupError> {
    if modulus < &BigInt::from(2) {
        return Err(GroupError::InvalidParameter {
            reason: format!("modulus must be at least 2, got {}", modulus),
        });
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModularAdditive {
    pub(crate) modulus: BigInt,
}

impl ModularAdditive {
    pub(crate) fn new(modulus: BigInt) -> Result<Self, GroupError> {
        check_modulus(&modulus)?;
        Ok(Self { modulus })
    }

    pub(crate) fn identity(&self) -> Value {
        Value::Int(BigInt::zero())
    }

    pub(crate) fn canonical(&self, n: &BigInt) -> BigInt {
        n.mod_floor(&self.modulus)
    }

    pub(crate) fn combine(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a + b).mod_floor(&self.modulus)
    }

    pub(crate) fn invert(&self, a: &BigInt) -> BigInt {
        (-a).mod_floor(&self.modulus)
    }

    pub(crate) fn enumerate(&self) -> Vec<Value> {
        let mut residues = Vec::new();
        let mut r = BigInt::zero();
        while r < self.modulus {
            residues.push(Value::Int(r.clone()));
            r += 1;
        }
        residues
    }
}

impl fmt::Display for ModularAdditive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "integers mod {} under addition", self.modulus)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModularMultiplicative {
    pub(crate) modulus: BigInt,
}

impl ModularMultiplicative {
    pub(crate) fn new(modulus: BigInt) -> Result<Self, GroupError> {
        check_modulus(&modulus)?;
        Ok(Self { modulus })
    }

    pub(crate) fn identity(&self) -> Value {
        Value::Int(BigInt::one())
    }

    pub(crate) fn canonical(&self, n: &BigInt) -> BigInt {
        n.mod_floor(&self.modulus)
    }

    /// A residue is a unit exactly when it is coprime with the modulus.
    pub(crate) fn contains(&self, n: &BigInt) -> bool {
        n.gcd(&self.modulus).is_one()
    }

    pub(crate) fn combine(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a * b).mod_floor(&self.modulus)
    }

    /// Multiplicative inverse from the Bezout identity: with
    /// `gcd(a, m) = 1`, `a*x + m*y = 1` gives `a*x = 1 (mod m)`.
    pub(crate) fn invert(&self, a: &BigInt) -> BigInt {
        let (x, _) = bezout(a, &self.modulus);
        x.mod_floor(&self.modulus)
    }

    pub(crate) fn enumerate(&self) -> Vec<Value> {
        let mut units = Vec::new();
        let mut r = BigInt::zero();
        while r < self.modulus {
            if self.contains(&r) {
                units.push(Value::Int(r.clone()));
            }
            r += 1;
        }
        units
    }
}

impl fmt::Display for ModularMultiplicative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "integers mod {} under multiplication", self.modulus)
    }
}
