//! Group elements: a canonical value bound to its owning group.
//!
//! An [`Element`] is only ever produced by a [`Group`], so its value is
//! guaranteed canonical and in the group's domain. Elements compose via
//! [`Element::compose`] (checked) or the `*` operator (panics on a
//! cross-group mix), invert without re-stating the group, and raise to
//! signed integer powers by square-and-multiply.

use core::fmt;
use std::ops::Mul;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::algebra::group::{Group, GroupError};
use crate::algebra::value::{DihedralKind, Value};
use crate::structures::permutation::cycle_string;

/// A validated member of a specific [`Group`].
///
/// # Example
///
/// ```
/// use gruppe::{Group, Op};
///
/// let group = Group::modular(Op::Mul, 10).unwrap();
/// let seven = group.elem(7).unwrap();
/// assert_eq!(&seven * &seven.inverse(), group.identity());
/// assert_eq!(seven.pow(3), group.elem(3).unwrap());
/// ```
#[derive(Clone, Debug, Hash)]
pub struct Element {
    value: Value,
    group: Group,
}

impl Element {
    pub(crate) fn new(value: Value, group: Group) -> Self {
        Element { value, group }
    }

    /// The canonical raw value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The group this element belongs to.
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// The group inverse.
    pub fn inverse(&self) -> Element {
        self.group.wrap(self.group.law().invert(&self.value))
    }

    /// Compose with another element of the same group.
    ///
    /// # Errors
    ///
    /// [`GroupError::IncompatibleGroups`] if the elements belong to
    /// different groups.
    pub fn compose(&self, other: &Element) -> Result<Element, GroupError> {
        if self.group != other.group {
            return Err(GroupError::IncompatibleGroups {
                left: self.group.to_string(),
                right: other.group.to_string(),
            });
        }
        Ok(self
            .group
            .wrap(self.group.law().combine(&self.value, &other.value)))
    }

    /// `self` composed with itself `exponent` times, by repeated
    /// squaring. A zero exponent gives the identity; a negative exponent
    /// raises the inverse to the absolute value. Any signed integer
    /// exponent is accepted, with no size ceiling.
    pub fn pow(&self, exponent: impl Into<BigInt>) -> Element {
        let exponent = exponent.into();
        let base = if exponent.is_negative() {
            self.inverse()
        } else {
            self.clone()
        };
        let mut remaining = exponent.magnitude().clone();
        let mut square = base.value;
        let mut acc = self.group.law().identity();
        while !remaining.is_zero() {
            if remaining.is_odd() {
                acc = self.group.law().combine(&acc, &square);
            }
            square = self.group.law().combine(&square, &square);
            remaining >>= 1;
        }
        self.group.wrap(acc)
    }

    /// Render a permutation element in disjoint-cycle notation, omitting
    /// fixed letters. The identity renders as the empty string.
    ///
    /// # Panics
    ///
    /// Panics if this is not a permutation element.
    pub fn to_cycles(&self) -> String {
        let Some(images) = self.value.as_perm() else {
            panic!("to_cycles is only defined for permutation elements");
        };
        cycle_string(images)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.value == other.value
    }
}

impl Eq for Element {}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl Mul for Element {
    type Output = Element;

    fn mul(self, rhs: Element) -> Element {
        self.compose(&rhs)
            .expect("elements must belong to the same group")
    }
}

impl Mul<&Element> for Element {
    type Output = Element;

    fn mul(self, rhs: &Element) -> Element {
        self.compose(rhs)
            .expect("elements must belong to the same group")
    }
}

impl Mul<Element> for &Element {
    type Output = Element;

    fn mul(self, rhs: Element) -> Element {
        self.compose(&rhs)
            .expect("elements must belong to the same group")
    }
}

impl Mul<&Element> for &Element {
    type Output = Element;

    fn mul(self, rhs: &Element) -> Element {
        self.compose(rhs)
            .expect("elements must belong to the same group")
    }
}

/// Anything a group method accepts where an element is expected: either
/// an existing [`Element`] or a raw value to validate on the way in.
#[derive(Clone, Debug)]
pub enum Operand {
    Element(Element),
    Value(Value),
}

impl From<Element> for Operand {
    fn from(element: Element) -> Self {
        Operand::Element(element)
    }
}

impl From<&Element> for Operand {
    fn from(element: &Element) -> Self {
        Operand::Element(element.clone())
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Value(value.clone())
    }
}

impl From<BigInt> for Operand {
    fn from(n: BigInt) -> Self {
        Operand::Value(Value::from(n))
    }
}

impl From<&BigInt> for Operand {
    fn from(n: &BigInt) -> Self {
        Operand::Value(Value::from(n))
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Value(Value::from(n))
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Value(Value::from(n))
    }
}

impl From<u32> for Operand {
    fn from(n: u32) -> Self {
        Operand::Value(Value::from(n))
    }
}

impl From<u64> for Operand {
    fn from(n: u64) -> Self {
        Operand::Value(Value::from(n))
    }
}

impl From<Vec<u32>> for Operand {
    fn from(images: Vec<u32>) -> Self {
        Operand::Value(Value::from(images))
    }
}

impl From<&[u32]> for Operand {
    fn from(images: &[u32]) -> Self {
        Operand::Value(Value::from(images))
    }
}

impl From<(DihedralKind, i64)> for Operand {
    fn from(pair: (DihedralKind, i64)) -> Self {
        Operand::Value(Value::from(pair))
    }
}
