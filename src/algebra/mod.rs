pub mod element;
pub mod group;
pub mod value;
