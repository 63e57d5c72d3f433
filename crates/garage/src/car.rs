use serde::Serialize;

use labkit_core::{rules, BoundedQuantity, DomainResult, Fields, ShowInfo, ValidatedEntity};

/// A car, reduced to its fuel tank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    tank: BoundedQuantity,
}

impl Car {
    /// Validates capacity (positive) then level (non-negative, within capacity).
    pub fn new(fuel_capacity: f64, fuel_level: f64) -> DomainResult<Self> {
        let fuel_capacity = rules::ensure_positive("fuel_capacity", fuel_capacity)?;
        let fuel_level = rules::ensure_non_negative("fuel_level", fuel_level)?;
        rules::ensure_at_most("fuel_level", fuel_level, "fuel_capacity", fuel_capacity)?;
        Ok(Self {
            tank: BoundedQuantity::new("fuel", fuel_capacity, fuel_level)?,
        })
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.tank.capacity()
    }

    pub fn fuel_level(&self) -> f64 {
        self.tank.current()
    }

    pub fn is_empty_tank(&self) -> bool {
        self.tank.is_empty()
    }

    /// Refuel. Fails if `fuel` is negative or does not fit in the free space.
    pub fn add_fuel(&mut self, fuel: f64) -> DomainResult<()> {
        self.tank.add(fuel)
    }

    /// Burn fuel. Fails if `fuel` is negative or more than the tank holds.
    pub fn consume_fuel(&mut self, fuel: f64) -> DomainResult<()> {
        self.tank.consume(fuel)
    }
}

impl ValidatedEntity for Car {
    const KIND: &'static str = "car";

    fn from_fields(fields: &Fields<'_>) -> DomainResult<Self> {
        let fuel_capacity = rules::ensure_positive("fuel_capacity", fields.number("fuel_capacity")?)?;
        let fuel_level = fields.number("fuel_level")?;
        Self::new(fuel_capacity, fuel_level)
    }
}

impl ShowInfo for Car {}

impl core::fmt::Display for Car {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fuel: {} / {}.", self.fuel_level(), self.fuel_capacity())
    }
}
