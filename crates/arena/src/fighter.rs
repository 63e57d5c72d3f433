use serde::Serialize;

use labkit_core::{rules, DomainError, DomainResult, Fields, ShowInfo, ValidatedEntity};

use crate::combatant::{AttackOutcome, Combatant};

/// Reach of a warrior's melee attack.
pub const WARRIOR_RANGE: i64 = 10;
/// Reach of an archer's bow.
pub const ARCHER_RANGE: i64 = 100;

/// Closed set of fighter classes. The archer carries its quiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename_all = "lowercase")]
pub enum FighterClass {
    Warrior,
    Archer { arrows: i64 },
}

impl FighterClass {
    pub const fn range(&self) -> i64 {
        match self {
            FighterClass::Warrior => WARRIOR_RANGE,
            FighterClass::Archer { .. } => ARCHER_RANGE,
        }
    }
}

/// A warrior or an archer.
///
/// Health is private and only goes down through [`Combatant::take_damage`],
/// which ignores hits once the fighter is dead.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Fighter {
    name: String,
    health: i64,
    damage: i64,
    #[serde(flatten)]
    class: FighterClass,
}

impl Fighter {
    pub fn warrior(name: impl Into<String>, health: i64, damage: i64) -> DomainResult<Self> {
        Self::build(name, health, damage, FighterClass::Warrior)
    }

    pub fn archer(
        name: impl Into<String>,
        health: i64,
        damage: i64,
        arrows: i64,
    ) -> DomainResult<Self> {
        let mut fighter = Self::build(name, health, damage, FighterClass::Warrior)?;
        let arrows = rules::ensure_non_negative_int("arrows", arrows)?;
        fighter.class = FighterClass::Archer { arrows };
        Ok(fighter)
    }

    fn build(
        name: impl Into<String>,
        health: i64,
        damage: i64,
        class: FighterClass,
    ) -> DomainResult<Self> {
        Ok(Self {
            name: rules::ensure_not_empty("name", name)?,
            health: rules::ensure_positive_int("health", health)?,
            damage: rules::ensure_positive_int("damage", damage)?,
            class,
        })
    }

    /// Remaining arrows, `None` for classes without a quiver.
    pub fn arrows(&self) -> Option<i64> {
        match self.class {
            FighterClass::Warrior => None,
            FighterClass::Archer { arrows } => Some(arrows),
        }
    }

    pub fn has_arrows(&self) -> bool {
        self.arrows().is_some_and(|arrows| arrows > 0)
    }

    /// Melee and ranged attacks share this check: both sides alive, target in reach.
    fn strike(&self, target: &mut dyn Combatant, distance: i64) -> AttackOutcome {
        if !self.is_alive() {
            return AttackOutcome::AttackerDown;
        }
        if !target.is_alive() {
            return AttackOutcome::TargetDown;
        }
        if distance > self.range() {
            return AttackOutcome::OutOfRange;
        }
        target.take_damage(self.damage.unsigned_abs());
        tracing::debug!(
            attacker = %self.name,
            target = %target.name(),
            damage = self.damage,
            target_health = target.health(),
            "hit landed"
        );
        AttackOutcome::Hit {
            damage: self.damage,
        }
    }
}

impl Combatant for Fighter {
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
        self.class.range()
    }

    fn take_damage(&mut self, amount: u64) {
        if self.is_alive() {
            self.health = self.health.saturating_sub_unsigned(amount);
        }
    }

    /// Archers spend an arrow on every attempt with a non-empty quiver,
    /// whether or not the shot lands.
    fn attack(&mut self, target: &mut dyn Combatant, distance: i64) -> AttackOutcome {
        match self.class {
            FighterClass::Warrior => self.strike(target, distance),
            FighterClass::Archer { arrows } => {
                if arrows == 0 {
                    return AttackOutcome::OutOfAmmo;
                }
                let outcome = self.strike(target, distance);
                self.class = FighterClass::Archer { arrows: arrows - 1 };
                tracing::debug!(archer = %self.name, arrows_left = arrows - 1, "arrow spent");
                outcome
            }
        }
    }
}

impl ValidatedEntity for Fighter {
    const KIND: &'static str = "fighter";

    /// Expects a `kind` of `warrior` or `archer`; archers also need `arrows`.
    fn from_fields(fields: &Fields<'_>) -> DomainResult<Self> {
        let kind = fields.text("kind")?;
        let name = rules::ensure_not_empty("name", fields.text("name")?)?;
        let health = rules::ensure_positive_int("health", fields.integer("health")?)?;
        let damage = rules::ensure_positive_int("damage", fields.integer("damage")?)?;
        match kind {
            "warrior" => Self::warrior(name, health, damage),
            "archer" => Self::archer(name, health, damage, fields.integer("arrows")?),
            other => Err(DomainError::validation(format!(
                "unknown fighter kind `{other}` (expected `warrior` or `archer`)"
            ))),
        }
    }
}

impl ShowInfo for Fighter {}

impl core::fmt::Display for Fighter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let status = if self.is_alive() { "alive" } else { "dead" };
        write!(
            f,
            "Name: {}. Health: {}. Status: {}.",
            self.name, self.health, status
        )?;
        if let FighterClass::Archer { arrows } = self.class {
            write!(f, " Arrows: {arrows}.")?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Fighter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.class {
            FighterClass::Warrior => f
                .debug_tuple("Warrior")
                .field(&self.name)
                .field(&self.health)
                .field(&self.damage)
                .finish(),
            FighterClass::Archer { arrows } => f
                .debug_tuple("Archer")
                .field(&self.name)
                .field(&self.health)
                .field(&self.damage)
                .field(&arrows)
                .finish(),
        }
    }
}
