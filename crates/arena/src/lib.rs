//! Arena exercise: combatants that attack each other within a range.
//!
//! Two independent rule sets live here:
//! - [`Duelist`]: range is per instance, hits land whenever the target is in range.
//! - [`Fighter`]: warriors and archers, range comes from the class, the dead
//!   neither attack nor take further damage, archers spend arrows.

pub mod combatant;
pub mod duelist;
pub mod fighter;

pub use combatant::{AttackOutcome, Combatant};
pub use duelist::Duelist;
pub use fighter::{ARCHER_RANGE, Fighter, FighterClass, WARRIOR_RANGE};
