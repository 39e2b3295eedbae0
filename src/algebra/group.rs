//! The generic group machinery: family selection, validation, dispatch.
//!
//! A [`Group`] is a cheap-to-clone handle over a reference-counted
//! definition: the family law (identity, canonical form, membership,
//! operation, inverse, plus any parameters), the eagerly computed
//! identity value, and a compute-once cache of the finite element
//! enumeration. Raw values enter through [`Group::elem`], which
//! canonicalizes and validates them into [`Element`]s; all further
//! composition happens without re-specifying the operation.

use core::fmt;
use std::cell::OnceCell;
use std::rc::Rc;

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

use crate::algebra::element::{Element, Operand};
use crate::algebra::value::{DihedralKind, Value};
use crate::structures::dihedral::Dihedral;
use crate::structures::integer::{IntegerAdditive, IntegerMultiplicative};
use crate::structures::klein::Klein;
use crate::structures::modular::{ModularAdditive, ModularMultiplicative};
use crate::structures::permutation::Permutation;
use crate::utils::factorial;

/// Which binary operation an integer-valued family uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Mul,
}

/// Typed failures surfaced by group construction and value validation.
///
/// No operation is retried internally; every failure carries the group
/// description and the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// A group-level construction parameter violates its constraint.
    #[error("invalid group parameter: {reason}")]
    InvalidParameter { reason: String },

    /// The raw input is not of the representation kind the group expects,
    /// or a permutation array / cycle string is malformed.
    #[error("invalid value for {group}: {reason}")]
    InvalidValue { group: String, reason: String },

    /// The input has the right shape but is not a member of the group.
    #[error("{value} does not belong to {group}: {reason}")]
    DomainError {
        group: String,
        value: String,
        reason: String,
    },

    /// Elements of two different group instances were combined.
    #[error("cannot combine elements of {left} and {right}")]
    IncompatibleGroups { left: String, right: String },
}

/// The per-family law: an explicit configuration value rather than
/// dynamic dispatch. Each variant carries the family parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Law {
    IntegerAdditive(IntegerAdditive),
    IntegerMultiplicative(IntegerMultiplicative),
    ModularAdditive(ModularAdditive),
    ModularMultiplicative(ModularMultiplicative),
    Permutation(Permutation),
    Klein(Klein),
    Dihedral(Dihedral),
}

impl Law {
    pub(crate) fn identity(&self) -> Value {
        match self {
            Law::IntegerAdditive(g) => g.identity(),
            Law::IntegerMultiplicative(g) => g.identity(),
            Law::ModularAdditive(g) => g.identity(),
            Law::ModularMultiplicative(g) => g.identity(),
            Law::Permutation(g) => g.identity(),
            Law::Klein(g) => g.identity(),
            Law::Dihedral(g) => g.identity(),
        }
    }

    /// Bring a raw value into canonical form, rejecting values of the
    /// wrong representation kind. Membership is checked separately.
    fn canonical(&self, raw: &Value) -> Result<Value, GroupError> {
        match self {
            Law::IntegerAdditive(_) | Law::Klein(_) => {
                let n = self.expect_int(raw)?;
                Ok(Value::Int(n.clone()))
            }
            Law::IntegerMultiplicative(g) => {
                let n = self.expect_int(raw)?;
                Ok(Value::Int(g.canonical(n)))
            }
            Law::ModularAdditive(g) => {
                let n = self.expect_int(raw)?;
                Ok(Value::Int(g.canonical(n)))
            }
            Law::ModularMultiplicative(g) => {
                let n = self.expect_int(raw)?;
                Ok(Value::Int(g.canonical(n)))
            }
            Law::Permutation(g) => {
                let Value::Perm(images) = raw else {
                    return Err(self.shape_error(raw, "a permutation array"));
                };
                g.canonical(images)
                    .map(Value::Perm)
                    .map_err(|reason| GroupError::InvalidValue {
                        group: self.to_string(),
                        reason,
                    })
            }
            Law::Dihedral(g) => {
                let Value::Dihedral(kind, index) = raw else {
                    return Err(self.shape_error(raw, "a tagged rotation or reflection"));
                };
                Ok(Value::Dihedral(*kind, g.reduce(*index)))
            }
        }
    }

    /// Membership of an already-canonical value.
    fn contains(&self, value: &Value) -> bool {
        match (self, value) {
            (Law::IntegerAdditive(_), Value::Int(_)) => true,
            (Law::IntegerMultiplicative(g), Value::Int(n)) => g.contains(n),
            (Law::ModularAdditive(_), Value::Int(_)) => true,
            (Law::ModularMultiplicative(g), Value::Int(n)) => g.contains(n),
            (Law::Permutation(_), Value::Perm(_)) => true,
            (Law::Klein(g), Value::Int(n)) => g.contains(n),
            (Law::Dihedral(g), Value::Dihedral(_, index)) => g.contains(*index),
            _ => false,
        }
    }

    /// Why a right-shaped value can still be rejected.
    fn membership_reason(&self) -> &'static str {
        match self {
            Law::IntegerMultiplicative(_) => "only the units 1 and -1 are invertible",
            Law::ModularMultiplicative(_) => "the value is not coprime with the modulus",
            Law::Klein(_) => "the value must lie in the range 0..4",
            Law::Dihedral(_) => "the index is out of range",
            _ => "the value is outside the group domain",
        }
    }

    pub(crate) fn combine(&self, a: &Value, b: &Value) -> Value {
        match (self, a, b) {
            (Law::IntegerAdditive(g), Value::Int(x), Value::Int(y)) => Value::Int(g.combine(x, y)),
            (Law::IntegerMultiplicative(g), Value::Int(x), Value::Int(y)) => {
                Value::Int(g.combine(x, y))
            }
            (Law::ModularAdditive(g), Value::Int(x), Value::Int(y)) => Value::Int(g.combine(x, y)),
            (Law::ModularMultiplicative(g), Value::Int(x), Value::Int(y)) => {
                Value::Int(g.combine(x, y))
            }
            (Law::Permutation(g), Value::Perm(x), Value::Perm(y)) => Value::Perm(g.combine(x, y)),
            (Law::Klein(g), Value::Int(x), Value::Int(y)) => Value::Int(g.combine(x, y)),
            (Law::Dihedral(g), Value::Dihedral(xk, xi), Value::Dihedral(yk, yi)) => {
                let (kind, index) = g.combine((*xk, *xi), (*yk, *yi));
                Value::Dihedral(kind, index)
            }
            _ => unreachable!("group elements always hold canonical values"),
        }
    }

    pub(crate) fn invert(&self, value: &Value) -> Value {
        match (self, value) {
            (Law::IntegerAdditive(g), Value::Int(n)) => Value::Int(g.invert(n)),
            (Law::IntegerMultiplicative(g), Value::Int(n)) => Value::Int(g.invert(n)),
            (Law::ModularAdditive(g), Value::Int(n)) => Value::Int(g.invert(n)),
            (Law::ModularMultiplicative(g), Value::Int(n)) => Value::Int(g.invert(n)),
            (Law::Permutation(g), Value::Perm(images)) => Value::Perm(g.invert(images)),
            (Law::Klein(g), Value::Int(n)) => Value::Int(g.invert(n)),
            (Law::Dihedral(g), Value::Dihedral(kind, index)) => {
                let (kind, index) = g.invert((*kind, *index));
                Value::Dihedral(kind, index)
            }
            _ => unreachable!("group elements always hold canonical values"),
        }
    }

    /// The two integer families are treated as infinite; every other
    /// family has a finite, enumerable carrier.
    fn is_finite(&self) -> bool {
        !matches!(self, Law::IntegerAdditive(_) | Law::IntegerMultiplicative(_))
    }

    fn enumerate(&self) -> Vec<Value> {
        match self {
            Law::IntegerAdditive(_) | Law::IntegerMultiplicative(_) => Vec::new(),
            Law::ModularAdditive(g) => g.enumerate(),
            Law::ModularMultiplicative(g) => g.enumerate(),
            Law::Permutation(g) => g.enumerate(),
            Law::Klein(g) => g.enumerate(),
            Law::Dihedral(g) => g.enumerate(),
        }
    }

    fn expect_int<'v>(&self, raw: &'v Value) -> Result<&'v BigInt, GroupError> {
        match raw {
            Value::Int(n) => Ok(n),
            _ => Err(self.shape_error(raw, "an integer")),
        }
    }

    fn shape_error(&self, raw: &Value, expected: &str) -> GroupError {
        GroupError::InvalidValue {
            group: self.to_string(),
            reason: format!("expected {}, got {}", expected, raw.kind_name()),
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Law::IntegerAdditive(g) => g.fmt(f),
            Law::IntegerMultiplicative(g) => g.fmt(f),
            Law::ModularAdditive(g) => g.fmt(f),
            Law::ModularMultiplicative(g) => g.fmt(f),
            Law::Permutation(g) => g.fmt(f),
            Law::Klein(g) => g.fmt(f),
            Law::Dihedral(g) => g.fmt(f),
        }
    }
}

struct GroupInner {
    law: Law,
    identity: Value,
    elements: OnceCell<Vec<Value>>,
}

/// A group instance: one of the seven families, fixed parameters.
///
/// `Group` is a handle over shared, immutable state, so cloning is cheap
/// and every [`Element`] keeps its owning group alive. Two groups are
/// equal exactly when they have the same family and parameters.
///
/// # Example
///
/// ```
/// use gruppe::{Group, Op};
///
/// let units = Group::modular(Op::Mul, 10).unwrap();
/// let nine = units.compose([3, 7, 9]).unwrap();
/// assert_eq!(nine, units.elem(9).unwrap());
/// assert_eq!(units.inverse(7).unwrap(), units.elem(3).unwrap());
/// ```
#[derive(Clone)]
pub struct Group {
    inner: Rc<GroupInner>,
}

impl Group {
    fn from_law(law: Law) -> Self {
        let identity = law.identity();
        Group {
            inner: Rc::new(GroupInner {
                law,
                identity,
                elements: OnceCell::new(),
            }),
        }
    }

    /// The integers under `+`, or the invertible integers `{1, -1}`
    /// under `*`.
    pub fn integer(op: Op) -> Self {
        match op {
            Op::Add => Group::from_law(Law::IntegerAdditive(IntegerAdditive)),
            Op::Mul => Group::from_law(Law::IntegerMultiplicative(IntegerMultiplicative)),
        }
    }

    /// The integers mod `modulus` under `+`, or the units mod `modulus`
    /// under `*`. The modulus must be at least 2.
    ///
    /// # Example
    ///
    /// ```
    /// use gruppe::{Group, Op};
    ///
    /// let group = Group::modular(Op::Add, 10).unwrap();
    /// assert_eq!(group.compose([7, 8, 9]).unwrap(), group.elem(4).unwrap());
    /// ```
    pub fn modular(op: Op, modulus: impl Into<BigInt>) -> Result<Self, GroupError> {
        let modulus = modulus.into();
        let law = match op {
            Op::Add => Law::ModularAdditive(ModularAdditive::new(modulus)?),
            Op::Mul => Law::ModularMultiplicative(ModularMultiplicative::new(modulus)?),
        };
        Ok(Group::from_law(law))
    }

    /// The symmetric group on `letters` letters (`letters >= 1`).
    ///
    /// # Example
    ///
    /// ```
    /// use gruppe::Group;
    ///
    /// let group = Group::permutation(5).unwrap();
    /// let a = group.parse_cycles("(1 2 5) (3 4)").unwrap();
    /// assert_eq!(a, group.elem(vec![2u32, 5, 4, 3, 1]).unwrap());
    /// assert_eq!(a.to_cycles(), "(1 2 5) (3 4)");
    /// ```
    pub fn permutation(letters: usize) -> Result<Self, GroupError> {
        Ok(Group::from_law(Law::Permutation(Permutation::new(letters)?)))
    }

    /// The Klein four-group on `{0, 1, 2, 3}` under XOR.
    pub fn klein() -> Self {
        Group::from_law(Law::Klein(Klein))
    }

    /// The dihedral group of the regular `sides`-gon (`sides > 2`).
    ///
    /// # Example
    ///
    /// ```
    /// use gruppe::Group;
    ///
    /// let group = Group::dihedral(5).unwrap();
    /// let rot = group.rotation(1);
    /// let refl = group.reflection(0);
    /// assert_eq!(&(&refl * &rot) * &refl, rot.inverse());
    /// ```
    pub fn dihedral(sides: u32) -> Result<Self, GroupError> {
        Ok(Group::from_law(Law::Dihedral(Dihedral::new(sides)?)))
    }

    /// The identity element.
    pub fn identity(&self) -> Element {
        self.wrap(self.inner.identity.clone())
    }

    /// Validate and wrap a raw value, or pass an element of this group
    /// through unchanged.
    ///
    /// # Errors
    ///
    /// - [`GroupError::InvalidValue`] if the value has the wrong
    ///   representation kind or is not a well-formed permutation.
    /// - [`GroupError::DomainError`] if the value has the right shape but
    ///   is not a member (e.g. a residue that is not coprime with the
    ///   modulus).
    /// - [`GroupError::IncompatibleGroups`] if an element of another
    ///   group is passed in.
    pub fn elem(&self, raw: impl Into<Operand>) -> Result<Element, GroupError> {
        match raw.into() {
            Operand::Element(element) => {
                if element.group() == self {
                    Ok(element)
                } else {
                    Err(GroupError::IncompatibleGroups {
                        left: element.group().to_string(),
                        right: self.to_string(),
                    })
                }
            }
            Operand::Value(value) => {
                let canonical = self.inner.law.canonical(&value)?;
                if self.inner.law.contains(&canonical) {
                    Ok(self.wrap(canonical))
                } else {
                    Err(GroupError::DomainError {
                        group: self.to_string(),
                        value: value.to_string(),
                        reason: self.inner.law.membership_reason().to_string(),
                    })
                }
            }
        }
    }

    /// Binary composition of two values or elements.
    pub fn op(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Element, GroupError> {
        let a = self.elem(a)?;
        let b = self.elem(b)?;
        Ok(self.wrap(self.inner.law.combine(a.value(), b.value())))
    }

    /// Left fold of the group operation over any number of values or
    /// elements, starting from the identity. The fold order matters for
    /// the non-commutative families.
    pub fn compose<I>(&self, items: I) -> Result<Element, GroupError>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let mut acc = self.identity();
        for item in items {
            let rhs = self.elem(item)?;
            acc = self.wrap(self.inner.law.combine(acc.value(), rhs.value()));
        }
        Ok(acc)
    }

    /// The inverse of a value or element.
    pub fn inverse(&self, x: impl Into<Operand>) -> Result<Element, GroupError> {
        Ok(self.elem(x)?.inverse())
    }

    /// `x` composed with itself `exponent` times, by square-and-multiply;
    /// negative exponents raise the inverse instead. The exponent can be
    /// any signed integer.
    pub fn exp(
        &self,
        x: impl Into<Operand>,
        exponent: impl Into<BigInt>,
    ) -> Result<Element, GroupError> {
        Ok(self.elem(x)?.pow(exponent))
    }

    /// All elements of a finite group, in the family's fixed enumeration
    /// order. `None` for the infinite integer families. The enumeration
    /// is computed once per group instance and cached.
    pub fn elements(&self) -> Option<Vec<Element>> {
        if !self.inner.law.is_finite() {
            return None;
        }
        let values = self
            .inner
            .elements
            .get_or_init(|| self.inner.law.enumerate());
        Some(values.iter().map(|v| self.wrap(v.clone())).collect())
    }

    /// The number of elements, `None` for the infinite families.
    ///
    /// For the multiplicative modular family this counts the units, which
    /// enumerates the residues once (and caches them).
    pub fn order(&self) -> Option<BigUint> {
        match &self.inner.law {
            Law::IntegerAdditive(_) | Law::IntegerMultiplicative(_) => None,
            Law::ModularAdditive(g) => g.modulus.to_biguint(),
            Law::ModularMultiplicative(_) => {
                self.elements().map(|units| BigUint::from(units.len()))
            }
            Law::Permutation(g) => Some(factorial(g.letters as u64)),
            Law::Klein(_) => Some(BigUint::from(4u32)),
            Law::Dihedral(g) => Some(BigUint::from(2 * g.sides as u64)),
        }
    }

    /// Whether the group has finitely many elements.
    pub fn is_finite(&self) -> bool {
        self.inner.law.is_finite()
    }

    /// Parse a disjoint-cycle string into an element of this permutation
    /// group. The empty string parses to the identity.
    ///
    /// # Panics
    ///
    /// Panics if this is not a permutation group.
    pub fn parse_cycles(&self, cycles: &str) -> Result<Element, GroupError> {
        let Law::Permutation(g) = &self.inner.law else {
            panic!("parse_cycles is only defined for permutation groups");
        };
        let images = g
            .parse_cycles(cycles)
            .map_err(|reason| GroupError::InvalidValue {
                group: self.to_string(),
                reason,
            })?;
        self.elem(images)
    }

    /// The rotation with the given index, reduced mod the side count.
    ///
    /// # Panics
    ///
    /// Panics if this is not a dihedral group.
    pub fn rotation(&self, index: i64) -> Element {
        let Law::Dihedral(g) = &self.inner.law else {
            panic!("rotation is only defined for dihedral groups");
        };
        self.wrap(Value::Dihedral(DihedralKind::Rotation, g.reduce(index)))
    }

    /// The reflection with the given index, reduced mod the side count.
    ///
    /// # Panics
    ///
    /// Panics if this is not a dihedral group.
    pub fn reflection(&self, index: i64) -> Element {
        let Law::Dihedral(g) = &self.inner.law else {
            panic!("reflection is only defined for dihedral groups");
        };
        self.wrap(Value::Dihedral(DihedralKind::Reflection, g.reduce(index)))
    }

    /// The `sides` rotations, by ascending index.
    ///
    /// # Panics
    ///
    /// Panics if this is not a dihedral group.
    pub fn rotations(&self) -> Vec<Element> {
        let Law::Dihedral(g) = &self.inner.law else {
            panic!("rotations is only defined for dihedral groups");
        };
        (0..g.sides as i64)
            .map(|index| self.wrap(Value::Dihedral(DihedralKind::Rotation, index)))
            .collect()
    }

    /// The `sides` reflections, by ascending index.
    ///
    /// # Panics
    ///
    /// Panics if this is not a dihedral group.
    pub fn reflections(&self) -> Vec<Element> {
        let Law::Dihedral(g) = &self.inner.law else {
            panic!("reflections is only defined for dihedral groups");
        };
        (0..g.sides as i64)
            .map(|index| self.wrap(Value::Dihedral(DihedralKind::Reflection, index)))
            .collect()
    }

    /// The modulus, for the two modular families.
    pub fn modulus(&self) -> Option<&BigInt> {
        match &self.inner.law {
            Law::ModularAdditive(g) => Some(&g.modulus),
            Law::ModularMultiplicative(g) => Some(&g.modulus),
            _ => None,
        }
    }

    /// The number of letters, for permutation groups.
    pub fn letters(&self) -> Option<usize> {
        match &self.inner.law {
            Law::Permutation(g) => Some(g.letters),
            _ => None,
        }
    }

    /// The number of sides, for dihedral groups.
    pub fn sides(&self) -> Option<u32> {
        match &self.inner.law {
            Law::Dihedral(g) => Some(g.sides),
            _ => None,
        }
    }

    pub(crate) fn law(&self) -> &Law {
        &self.inner.law
    }

    /// Wrap an already-canonical value. Callers must only pass values
    /// produced by this group's own law.
    pub(crate) fn wrap(&self, value: Value) -> Element {
        Element::new(value, self.clone())
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner) || self.inner.law == other.inner.law
    }
}

impl Eq for Group {}

impl std::hash::Hash for Group {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.law.hash(state);
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.law.fmt(f)
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({})", self.inner.law)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn groups_with_same_parameters_are_equal() {
        let a = Group::modular(Op::Mul, 10).unwrap();
        let b = Group::modular(Op::Mul, 10).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.elem(3).unwrap(), b.elem(3).unwrap());
    }

    #[test]
    fn groups_with_different_parameters_differ() {
        let a = Group::modular(Op::Add, 10).unwrap();
        let b = Group::modular(Op::Add, 11).unwrap();
        let c = Group::modular(Op::Mul, 10).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn elem_passes_own_elements_through() {
        let group = Group::klein();
        let element = group.elem(3).unwrap();
        assert_eq!(group.elem(element.clone()).unwrap(), element);
    }

    #[test]
    fn elem_rejects_foreign_elements() {
        let mod5 = Group::modular(Op::Add, 5).unwrap();
        let mod7 = Group::modular(Op::Add, 7).unwrap();
        let element = mod5.elem(3).unwrap();
        assert!(matches!(
            mod7.elem(element),
            Err(GroupError::IncompatibleGroups { .. })
        ));
    }

    #[test]
    fn cross_group_elements_are_never_equal() {
        let mod5 = Group::modular(Op::Add, 5).unwrap();
        let mod7 = Group::modular(Op::Add, 7).unwrap();
        assert_ne!(mod5.elem(3).unwrap(), mod7.elem(3).unwrap());
    }

    #[test]
    fn compose_of_nothing_is_identity() {
        let group = Group::dihedral(4).unwrap();
        assert_eq!(group.compose::<[i32; 0]>([]).unwrap(), group.identity());
    }

    #[test]
    fn compose_of_one_is_elem() {
        let group = Group::modular(Op::Add, 9).unwrap();
        assert_eq!(group.compose([7]).unwrap(), group.elem(7).unwrap());
    }

    #[test]
    fn elements_cache_is_stable() {
        let group = Group::klein();
        let first = group.elements().unwrap();
        let second = group.elements().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn elements_work_as_set_members() {
        let group = Group::dihedral(3).unwrap();
        let mut seen = HashSet::new();
        for element in group.elements().unwrap() {
            seen.insert(element);
        }
        // a second pass inserts nothing new
        for element in group.elements().unwrap() {
            seen.insert(element);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn accessors_report_parameters() {
        assert_eq!(
            Group::modular(Op::Add, 12).unwrap().modulus(),
            Some(&BigInt::from(12))
        );
        assert_eq!(Group::permutation(4).unwrap().letters(), Some(4));
        assert_eq!(Group::dihedral(7).unwrap().sides(), Some(7));
        assert_eq!(Group::klein().modulus(), None);
    }

    #[test]
    fn display_describes_the_family() {
        assert_eq!(
            Group::modular(Op::Mul, 10).unwrap().to_string(),
            "integers mod 10 under multiplication"
        );
        assert_eq!(Group::integer(Op::Add).to_string(), "integers under addition");
        assert_eq!(Group::klein().to_string(), "the Klein four-group");
    }

    #[test]
    fn errors_carry_context() {
        let group = Group::modular(Op::Mul, 10).unwrap();
        let err = group.elem(4).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("mod 10"), "unexpected message: {message}");
        assert!(message.contains('4'), "unexpected message: {message}");
    }

    #[test]
    fn order_per_family() {
        assert_eq!(Group::klein().order(), Some(BigUint::from(4u32)));
        assert_eq!(
            Group::dihedral(6).unwrap().order(),
            Some(BigUint::from(12u32))
        );
        assert_eq!(
            Group::permutation(5).unwrap().order(),
            Some(BigUint::from(120u32))
        );
        assert_eq!(Group::integer(Op::Mul).order(), None);
    }
}
