//! `labkit-core` — building blocks shared by the exercise crates.
//!
//! This crate contains **pure domain** primitives: the error model, value
//! rules, kind-checked field access, the bounded quantity and the
//! [`ShowInfo`] printing contract.

pub mod entity;
pub mod error;
pub mod fields;
pub mod info;
pub mod quantity;
pub mod rules;

pub use entity::ValidatedEntity;
pub use error::{DomainError, DomainResult};
pub use fields::Fields;
pub use info::ShowInfo;
pub use quantity::BoundedQuantity;
