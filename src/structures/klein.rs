//! The Klein four-group on the values `{0, 1, 2, 3}`.
//!
//! The operation is bitwise XOR of the two-bit values, so every element
//! is its own inverse and the group is abelian. There are no parameters.

use core::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::algebra::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Klein;

impl Klein {
    pub(crate) fn identity(&self) -> Value {
        Value::Int(BigInt::zero())
    }

    pub(crate) fn contains(&self, n: &BigInt) -> bool {
        !n.is_negative() && n < &BigInt::from(4)
    }

    pub(crate) fn combine(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a ^ b
    }

    pub(crate) fn invert(&self, a: &BigInt) -> BigInt {
        a.clone()
    }

    pub(crate) fn enumerate(&self) -> Vec<Value> {
        (0..4).map(|n| Value::Int(BigInt::from(n))).collect()
    }
}

impl fmt::Display for Klein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the Klein four-group")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Group, GroupError};
    use num_bigint::BigUint;

    #[test]
    fn has_four_elements() {
        let group = Group::klein();
        let elements = group.elements().unwrap();
        assert_eq!(elements.len(), 4);
        assert_eq!(group.order(), Some(BigUint::from(4u32)));
    }

    #[test]
    fn rejects_values_outside_range() {
        let group = Group::klein();
        for bad in [4, -1, 100] {
            assert!(matches!(
                group.elem(bad),
                Err(GroupError::DomainError { .. })
            ));
        }
    }

    #[test]
    fn operation_is_xor() {
        let group = Group::klein();
        assert_eq!(group.op(1, 2).unwrap(), group.elem(3).unwrap());
        assert_eq!(group.op(2, 3).unwrap(), group.elem(1).unwrap());
        assert_eq!(group.op(3, 3).unwrap(), group.identity());
    }

    #[test]
    fn every_element_is_self_inverse() {
        let group = Group::klein();
        for element in group.elements().unwrap() {
            assert_eq!(element.inverse(), element);
            assert_eq!(element.pow(2), group.identity());
        }
    }

    #[test]
    fn group_axioms_hold_over_all_triples() {
        let group = Group::klein();
        let elements = group.elements().unwrap();
        for a in &elements {
            assert_eq!((a * &group.identity()), *a);
            assert_eq!((&group.identity() * a), *a);
            for b in &elements {
                for c in &elements {
                    assert_eq!((a * b) * c.clone(), a.clone() * (b * c));
                }
            }
        }
    }
}
