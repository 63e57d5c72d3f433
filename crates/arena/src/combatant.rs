//! Shared combat contract.

use serde::Serialize;

/// What an attack attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    /// The target received `damage` (it may have ignored it if already dead).
    Hit { damage: i64 },
    /// The target was further away than the attacker's range.
    OutOfRange,
    /// The attacker is dead.
    AttackerDown,
    /// The target is already dead.
    TargetDown,
    /// The attacker has nothing left to shoot.
    OutOfAmmo,
}

impl AttackOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }
}

/// Anything with health that can attack and be attacked.
///
/// Health only changes through [`Combatant::take_damage`]; each implementor
/// decides how it reacts to damage.
pub trait Combatant {
    fn name(&self) -> &str;

    fn health(&self) -> i64;

    fn damage(&self) -> i64;

    /// Maximum distance at which an attack can land.
    fn range(&self) -> i64;

    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Lower health by `amount`. The unsigned amount means damage can never heal;
    /// health saturates instead of overflowing.
    fn take_damage(&mut self, amount: u64);

    fn attack(&mut self, target: &mut dyn Combatant, distance: i64) -> AttackOutcome;
}
