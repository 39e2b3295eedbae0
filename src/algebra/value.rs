//! Raw value representations accepted by the group families.
//!
//! Every group operates on [`Value`], an explicit sum type over the three
//! representation kinds: arbitrary-precision integers, permutation arrays,
//! and tagged dihedral rotations/reflections. A `Value` carries no group
//! context of its own; it becomes meaningful once a group canonicalizes
//! and validates it into an [`Element`](crate::Element).

use core::fmt;

use num_bigint::BigInt;

/// Tag distinguishing the two kinds of dihedral symmetry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DihedralKind {
    Rotation,
    Reflection,
}

impl fmt::Display for DihedralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DihedralKind::Rotation => write!(f, "rot"),
            DihedralKind::Reflection => write!(f, "ref"),
        }
    }
}

/// A raw group value before canonicalization.
///
/// - `Int` is used by the integer, modular, and Klein families.
/// - `Perm` holds 1-based images: `perm[i]` is the image of letter `i + 1`.
/// - `Dihedral` holds a rotation/reflection tag and an index; the index is
///   reduced mod the number of sides when the value enters a group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(BigInt),
    Perm(Vec<u32>),
    Dihedral(DihedralKind, i64),
}

impl Value {
    /// A rotation by `index` steps.
    pub fn rotation(index: i64) -> Self {
        Value::Dihedral(DihedralKind::Rotation, index)
    }

    /// The reflection with axis `index`.
    pub fn reflection(index: i64) -> Self {
        Value::Dihedral(DihedralKind::Reflection, index)
    }

    /// The integer payload, if this is an integer value.
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    /// The permutation images, if this is a permutation value.
    pub fn as_perm(&self) -> Option<&[u32]> {
        match self {
            Value::Perm(images) => Some(images),
            _ => None,
        }
    }

    /// The tag and index, if this is a dihedral value.
    pub fn as_dihedral(&self) -> Option<(DihedralKind, i64)> {
        match self {
            Value::Dihedral(kind, index) => Some((*kind, *index)),
            _ => None,
        }
    }

    /// Human name of the representation kind, for error messages.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "an integer",
            Value::Perm(_) => "a permutation array",
            Value::Dihedral(..) => "a dihedral value",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Perm(images) => {
                write!(f, "[")?;
                for (i, image) in images.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", image)?;
                }
                write!(f, "]")
            }
            Value::Dihedral(kind, index) => write!(f, "{}_{}", kind, index),
        }
    }
}

/* ---- conversions from raw representations ---- */

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<&BigInt> for Value {
    fn from(n: &BigInt) -> Self {
        Value::Int(n.clone())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<Vec<u32>> for Value {
    fn from(images: Vec<u32>) -> Self {
        Value::Perm(images)
    }
}

impl From<&[u32]> for Value {
    fn from(images: &[u32]) -> Self {
        Value::Perm(images.to_vec())
    }
}

impl From<(DihedralKind, i64)> for Value {
    fn from((kind, index): (DihedralKind, i64)) -> Self {
        Value::Dihedral(kind, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(Value::from(-42).to_string(), "-42");
        assert_eq!(Value::from(vec![2u32, 5, 4, 3, 1]).to_string(), "[2, 5, 4, 3, 1]");
        assert_eq!(Value::rotation(3).to_string(), "rot_3");
        assert_eq!(Value::reflection(0).to_string(), "ref_0");
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from(7).as_int(), Some(&BigInt::from(7)));
        assert_eq!(Value::from(7).as_perm(), None);
        assert_eq!(
            Value::rotation(2).as_dihedral(),
            Some((DihedralKind::Rotation, 2))
        );
        let perm = Value::from(vec![1u32, 2, 3]);
        assert_eq!(perm.as_perm(), Some(&[1u32, 2, 3][..]));
    }
}
