//! Garage exercise: a car with a fuel tank.
//!
//! Pure domain logic; printing goes through [`labkit_core::ShowInfo`].

pub mod car;

pub use car::Car;
