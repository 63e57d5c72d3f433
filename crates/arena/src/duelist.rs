use serde::Serialize;

use labkit_core::{rules, DomainResult, Fields, ShowInfo, ValidatedEntity};

use crate::combatant::{AttackOutcome, Combatant};

/// The plain combatant: a fixed range of its own and no life checks.
///
/// Hits are applied whenever the target is within range, and health is not
/// floored, so it can go below zero (saturating at `i64::MIN`).
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Duelist {
    name: String,
    health: i64,
    damage: i64,
    range: i64,
}

impl Duelist {
    pub fn new(name: impl Into<String>, health: i64, damage: i64, range: i64) -> DomainResult<Self> {
        let name = rules::ensure_not_empty("name", name)?;
        let health = rules::ensure_positive_int("health", health)?;
        let damage = rules::ensure_positive_int("damage", damage)?;
        let range = rules::ensure_positive_int("range", range)?;
        Ok(Self {
            name,
            health,
            damage,
            range,
        })
    }
}

impl Combatant for Duelist {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> i64 {
        self.health
    }

    fn damage(&self) -> i64 {
        self.damage
    }

    fn range(&self) -> i64 {
        self.range
    }

    fn take_damage(&mut self, amount: u64) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }

    fn attack(&mut self, target: &mut dyn Combatant, distance: i64) -> AttackOutcome {
        if distance > self.range {
            return AttackOutcome::OutOfRange;
        }
        target.take_damage(self.damage.unsigned_abs());
        tracing::debug!(
            attacker = %self.name,
            target = %target.name(),
            damage = self.damage,
            target_health = target.health(),
            "strike landed"
        );
        AttackOutcome::Hit {
            damage: self.damage,
        }
    }
}

impl ValidatedEntity for Duelist {
    const KIND: &'static str = "duelist";

    fn from_fields(fields: &Fields<'_>) -> DomainResult<Self> {
        let name = rules::ensure_not_empty("name", fields.text("name")?)?;
        let health = rules::ensure_positive_int("health", fields.integer("health")?)?;
        let damage = rules::ensure_positive_int("damage", fields.integer("damage")?)?;
        let range = fields.integer("range")?;
        Self::new(name, health, damage, range)
    }
}

impl ShowInfo for Duelist {}

impl core::fmt::Display for Duelist {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Name: {}\nHealth: {}", self.name, self.health)
    }
}

impl core::fmt::Debug for Duelist {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Duelist")
            .field(&self.name)
            .field(&self.health)
            .field(&self.damage)
            .field(&self.range)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labkit_core::DomainError;
    use serde_json::json;

    fn john() -> Duelist {
        Duelist::new("John", 100, 20, 5).unwrap()
    }

    fn benjamin() -> Duelist {
        Duelist::new("Benjamin", 100, 10, 5).unwrap()
    }

    #[test]
    fn strike_in_range_reduces_health() {
        let mut warrior = john();
        let mut victim = benjamin();
        let outcome = warrior.attack(&mut victim, 4);
        assert_eq!(outcome, AttackOutcome::Hit { damage: 20 });
        assert_eq!(victim.health(), 80);
        assert_eq!(victim.to_string(), "Name: Benjamin\nHealth: 80");
    }

    #[test]
    fn range_boundary() {
        let mut warrior = john();
        let mut victim = benjamin();
        assert!(warrior.attack(&mut victim, 5).is_hit());
        assert_eq!(warrior.attack(&mut victim, 6), AttackOutcome::OutOfRange);
        assert_eq!(victim.health(), 80);
    }

    #[test]
    fn health_is_not_floored() {
        let mut warrior = Duelist::new("John", 100, 70, 5).unwrap();
        let mut victim = benjamin();
        warrior.attack(&mut victim, 1);
        warrior.attack(&mut victim, 1);
        assert_eq!(victim.health(), -40);
        assert!(!victim.is_alive());
    }

    #[test]
    fn construction_rejects_bad_fields() {
        assert!(Duelist::new("", 100, 20, 5).unwrap_err().is_validation());
        assert!(Duelist::new("John", 0, 20, 5).unwrap_err().is_validation());
        assert!(Duelist::new("John", 100, -20, 5).unwrap_err().is_validation());
        assert!(Duelist::new("John", 100, 20, 0).unwrap_err().is_validation());
    }

    #[test]
    fn from_json_requires_integers() {
        let err = Duelist::from_json(&json!({
            "name": "John", "health": 100.5, "damage": 20, "range": 5
        }))
        .unwrap_err();
        assert_eq!(err, DomainError::type_mismatch("health", "an integer", "a float"));

        let duelist = Duelist::from_json(&json!({
            "name": "John", "health": 100, "damage": 20, "range": 5
        }))
        .unwrap();
        assert_eq!(duelist, john());
    }

    #[test]
    fn repeated_huge_hits_saturate() {
        let mut giant = Duelist::new("Goliath", 1, i64::MAX, 5).unwrap();
        let mut victim = benjamin();
        assert!(giant.attack(&mut victim, 1).is_hit());
        assert!(giant.attack(&mut victim, 1).is_hit());
        assert!(giant.attack(&mut victim, 1).is_hit());
        assert_eq!(victim.health(), i64::MIN);
        assert!(!victim.is_alive());
    }

    #[test]
    fn take_damage_never_heals() {
        let mut victim = benjamin();
        victim.take_damage(0);
        assert_eq!(victim.health(), 100);
        victim.take_damage(u64::MAX);
        assert_eq!(victim.health(), i64::MIN);
    }

    #[test]
    fn write_info_prints_display_form() {
        let mut out = Vec::new();
        john().write_info(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Name: John\nHealth: 100\n");
    }

    #[test]
    fn debug_mirrors_constructor() {
        assert_eq!(format!("{:?}", john()), r#"Duelist("John", 100, 20, 5)"#);
    }
}
