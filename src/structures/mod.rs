pub mod dihedral;
pub mod integer;
pub mod klein;
pub mod modular;
pub mod permutation;
