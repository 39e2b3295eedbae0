//! Finite and infinite groups behind one composition interface.
//!
//! A [`Group`] fixes a family and its parameters once; after that,
//! elements validate on entry, compose, invert, and exponentiate without
//! re-stating the operation. Seven families are provided:
//!
//! - the integers under addition, and the units `{1, -1}` under
//!   multiplication,
//! - the integers mod n under addition, and the units mod n under
//!   multiplication,
//! - the symmetric group on n letters, with disjoint-cycle parsing and
//!   printing,
//! - the Klein four-group,
//! - the dihedral group of the regular n-gon.
//!
//! # Example
//!
//! ```
//! use gruppe::{Group, Op};
//!
//! let units = Group::modular(Op::Mul, 10).unwrap();
//! assert_eq!(units.compose([3, 7, 9]).unwrap(), units.elem(9).unwrap());
//! assert_eq!(units.inverse(7).unwrap(), units.elem(3).unwrap());
//!
//! let sym = Group::permutation(5).unwrap();
//! let a = sym.parse_cycles("(1 2 5) (3 4)").unwrap();
//! let b = sym.elem(vec![5u32, 4, 3, 2, 1]).unwrap();
//! assert_eq!((&a * &b).to_cycles(), "(2 3 4 5)");
//! ```

pub mod algebra;
mod structures;
pub mod utils;

pub use algebra::element::{Element, Operand};
pub use algebra::group::{Group, GroupError, Op};
pub use algebra::value::{DihedralKind, Value};
pub use utils::bezout;
