//! Forest exercise: a tree that grows a fixed amount per year up to a ceiling.

pub mod tree;

pub use tree::{HEIGHT_UNIT_DIVISOR, Tree};
