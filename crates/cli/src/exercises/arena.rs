//! Arena steps: `attack`, `take_damage`.
//!
//! Entities carry a `kind`: `duelist`, `warrior` or `archer`.

use std::io::Write;

use anyhow::bail;
use serde::Serialize;
use serde_json::Value;

use labkit_arena::{Combatant, Duelist, Fighter};
use labkit_core::{DomainResult, Fields, ShowInfo, ValidatedEntity, rules};

use crate::scenario::{Scenario, common_step};

/// Any combatant a scenario can declare.
#[derive(Clone, Serialize)]
#[serde(untagged)]
pub enum Contender {
    Duelist(Duelist),
    Fighter(Fighter),
}

impl Contender {
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        let fields = Fields::from_value("combatant", value)?;
        match fields.text("kind")? {
            "duelist" => Duelist::from_fields(&fields).map(Contender::Duelist),
            _ => Fighter::from_fields(&fields).map(Contender::Fighter),
        }
    }

    pub fn combatant(&self) -> &dyn Combatant {
        match self {
            Contender::Duelist(d) => d,
            Contender::Fighter(f) => f,
        }
    }

    pub fn combatant_mut(&mut self) -> &mut dyn Combatant {
        match self {
            Contender::Duelist(d) => d,
            Contender::Fighter(f) => f,
        }
    }
}

impl ShowInfo for Contender {}

impl core::fmt::Display for Contender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Contender::Duelist(d) => core::fmt::Display::fmt(d, f),
            Contender::Fighter(x) => core::fmt::Display::fmt(x, f),
        }
    }
}

impl core::fmt::Debug for Contender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Contender::Duelist(d) => core::fmt::Debug::fmt(d, f),
            Contender::Fighter(x) => core::fmt::Debug::fmt(x, f),
        }
    }
}

pub fn run(scenario: &Scenario, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut roster = scenario.roster(Contender::from_json)?;

    scenario.for_each_step(|op, fields| {
        if common_step(op, fields, &roster, out)? {
            return Ok(());
        }
        match op {
            "attack" => {
                let distance = fields.integer("distance")?;
                let (attacker, target) =
                    roster.pair_mut(fields.text("attacker")?, fields.text("target")?)?;
                let outcome = attacker
                    .combatant_mut()
                    .attack(target.combatant_mut(), distance);
                tracing::info!(
                    attacker = %attacker.combatant().name(),
                    target = %target.combatant().name(),
                    distance,
                    ?outcome,
                    "attack resolved"
                );
            }
            "take_damage" => {
                let contender = roster.get_mut(fields.text("entity")?)?;
                let amount = rules::ensure_non_negative_int("amount", fields.integer("amount")?)?;
                contender.combatant_mut().take_damage(amount.unsigned_abs());
            }
            other => bail!("unknown arena step `{other}`"),
        }
        Ok(())
    })
}
