//! Symmetries of a regular n-gon: n rotations and n reflections.
//!
//! A value is a tagged pair of kind and index, with the index reduced mod
//! n on entry. Composition follows the four-case table
//!
//! | a \ b  | rot(j)     | ref(j)     |
//! |--------|------------|------------|
//! | rot(i) | rot(i + j) | ref(i + j) |
//! | ref(i) | ref(i - j) | rot(i - j) |
//!
//! which encodes the braid relation `ref * rot * ref = rot⁻¹`. Rotations
//! invert by negating the index; reflections are their own inverses.

use core::fmt;

use crate::algebra::group::GroupError;
use crate::algebra::value::{DihedralKind, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dihedral {
    pub(crate) sides: u32,
}

impl Dihedral {
    pub(crate) fn new(sides: u32) -> Result<Self, GroupError> {
        if sides <= 2 {
            return Err(GroupError::InvalidParameter {
                reason: format!("a dihedral group needs more than 2 sides, got {}", sides),
            });
        }
        Ok(Self { sides })
    }

    pub(crate) fn identity(&self) -> Value {
        Value::Dihedral(DihedralKind::Rotation, 0)
    }

    pub(crate) fn reduce(&self, index: i64) -> i64 {
        index.rem_euclid(self.sides as i64)
    }

    pub(crate) fn contains(&self, index: i64) -> bool {
        (0..self.sides as i64).contains(&index)
    }

    pub(crate) fn combine(
        &self,
        (a_kind, a_index): (DihedralKind, i64),
        (b_kind, b_index): (DihedralKind, i64),
    ) -> (DihedralKind, i64) {
        use DihedralKind::{Reflection, Rotation};
        match (a_kind, b_kind) {
            (Rotation, Rotation) => (Rotation, self.reduce(a_index + b_index)),
            (Rotation, Reflection) => (Reflection, self.reduce(a_index + b_index)),
            (Reflection, Rotation) => (Reflection, self.reduce(a_index - b_index)),
            (Reflection, Reflection) => (Rotation, self.reduce(a_index - b_index)),
        }
    }

    pub(crate) fn invert(&self, (kind, index): (DihedralKind, i64)) -> (DihedralKind, i64) {
        match kind {
            DihedralKind::Rotation => (kind, self.reduce(-index)),
            DihedralKind::Reflection => (kind, index),
        }
    }

    /// rot_0, ref_0, rot_1, ref_1, ... interleaved by index.
    pub(crate) fn enumerate(&self) -> Vec<Value> {
        (0..self.sides as i64)
            .flat_map(|index| {
                [
                    Value::Dihedral(DihedralKind::Rotation, index),
                    Value::Dihedral(DihedralKind::Reflection, index),
                ]
            })
            .collect()
    }
}

impl fmt::Display for Dihedral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the dihedral group of the {}-gon", self.sides)
    }
}
