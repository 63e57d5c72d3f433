//! A numeric level that lives between zero and a fixed capacity.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::rules;

/// `0 <= current <= capacity`, enforced by every operation.
///
/// `label` only feeds error messages ("fuel", "height").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundedQuantity {
    #[serde(skip)]
    label: &'static str,
    capacity: f64,
    current: f64,
}

impl BoundedQuantity {
    /// Capacity may be zero; callers needing a strictly positive capacity check
    /// it before building the quantity.
    pub fn new(label: &'static str, capacity: f64, current: f64) -> DomainResult<Self> {
        let capacity = rules::ensure_non_negative(label, capacity)?;
        let current = rules::ensure_non_negative(label, current)?;
        if current > capacity {
            return Err(DomainError::validation(format!(
                "{label} level ({current}) cannot exceed capacity ({capacity})"
            )));
        }
        Ok(Self {
            label,
            capacity,
            current,
        })
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0.0
    }

    /// Whether `amount` could be added without crossing the capacity.
    pub fn fits(&self, amount: f64) -> bool {
        self.current + amount <= self.capacity
    }

    pub fn add(&mut self, amount: f64) -> DomainResult<()> {
        let amount = rules::ensure_non_negative(self.label, amount)?;
        if !self.fits(amount) {
            return Err(DomainError::validation(format!(
                "adding {amount} {label} would exceed capacity ({current} of {capacity})",
                label = self.label,
                current = self.current,
                capacity = self.capacity,
            )));
        }
        self.current += amount;
        tracing::debug!(label = self.label, amount, current = self.current, "quantity added");
        Ok(())
    }

    pub fn consume(&mut self, amount: f64) -> DomainResult<()> {
        let amount = rules::ensure_non_negative(self.label, amount)?;
        if amount > self.current {
            return Err(DomainError::validation(format!(
                "cannot consume {amount} {label}, only {current} available",
                label = self.label,
                current = self.current,
            )));
        }
        self.current -= amount;
        tracing::debug!(label = self.label, amount, current = self.current, "quantity consumed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn construction_enforces_bounds() {
        assert!(BoundedQuantity::new("fuel", 60.0, 10.0).is_ok());
        assert!(BoundedQuantity::new("fuel", 0.0, 0.0).is_ok());
        assert!(BoundedQuantity::new("fuel", -1.0, 0.0).unwrap_err().is_validation());
        assert!(BoundedQuantity::new("fuel", 60.0, -1.0).unwrap_err().is_validation());
        assert!(BoundedQuantity::new("fuel", 60.0, 61.0).unwrap_err().is_validation());
    }

    #[test]
    fn add_up_to_capacity_then_reject() {
        let mut q = BoundedQuantity::new("fuel", 60.0, 10.0).unwrap();
        q.add(50.0).unwrap();
        assert_eq!(q.current(), q.capacity());
        let err = q.add(0.5).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(q.current(), 60.0);
    }

    #[test]
    fn consume_rejects_more_than_available() {
        let mut q = BoundedQuantity::new("fuel", 60.0, 10.0).unwrap();
        assert!(q.consume(10.5).is_err());
        q.consume(10.0).unwrap();
        assert!(q.is_empty());
    }

    #[test]
    fn negative_amounts_are_rejected_without_mutation() {
        let mut q = BoundedQuantity::new("fuel", 60.0, 10.0).unwrap();
        assert!(q.add(-1.0).unwrap_err().is_validation());
        assert!(q.consume(-1.0).unwrap_err().is_validation());
        assert_eq!(q.current(), 10.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: adding then consuming the same amount restores the level.
        #[test]
        fn add_then_consume_round_trips(
            capacity in 1u32..10_000u32,
            start_pct in 0u32..=100u32,
            amount_pct in 0u32..=100u32,
        ) {
            let capacity = f64::from(capacity);
            let start = (capacity * f64::from(start_pct) / 100.0).floor();
            let amount = ((capacity - start) * f64::from(amount_pct) / 100.0).floor();

            let mut q = BoundedQuantity::new("fuel", capacity, start).unwrap();
            q.add(amount).unwrap();
            q.consume(amount).unwrap();
            prop_assert_eq!(q.current(), start);
        }

        /// Property: no sequence of operations leaves the bounds.
        #[test]
        fn level_stays_within_bounds(
            ops in prop::collection::vec((any::<bool>(), 0u32..100u32), 0..50)
        ) {
            let mut q = BoundedQuantity::new("fuel", 100.0, 50.0).unwrap();
            for (is_add, amount) in ops {
                let amount = f64::from(amount);
                let _ = if is_add { q.add(amount) } else { q.consume(amount) };
                prop_assert!(q.current() >= 0.0);
                prop_assert!(q.current() <= q.capacity());
            }
        }
    }
}
