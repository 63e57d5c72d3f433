//! Scenario documents: named entities plus a list of steps to run against them.
//!
//! ```json
//! {
//!   "entities": { "car": { "fuel_capacity": 60, "fuel_level": 10 } },
//!   "steps": [ { "op": "add_fuel", "entity": "car", "amount": 45 } ]
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use labkit_core::{DomainResult, Fields, ShowInfo};

/// Width of the separator printed by the `rule` step.
pub const RULE_WIDTH: usize = 30;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub entities: BTreeMap<String, Value>,
    #[serde(default)]
    pub steps: Vec<Value>,
}

impl Scenario {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("scenario is not a valid scenario document")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Build every entity with `build`, keyed by its scenario name.
    pub fn roster<T>(
        &self,
        mut build: impl FnMut(&Value) -> DomainResult<T>,
    ) -> anyhow::Result<Roster<T>> {
        let mut entries = BTreeMap::new();
        for (name, value) in &self.entities {
            let entity = build(value).with_context(|| format!("entity `{name}`"))?;
            entries.insert(name.clone(), entity);
        }
        Ok(Roster { entries })
    }

    /// Run `step` for every step in order, stopping at the first failure.
    pub fn for_each_step(
        &self,
        mut step: impl FnMut(&str, &Fields<'_>) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        for (index, value) in self.steps.iter().enumerate() {
            let number = index + 1;
            let fields = Fields::from_value("step", value).with_context(|| format!("step {number}"))?;
            let op = fields.text("op").with_context(|| format!("step {number}"))?;
            tracing::info!(step = number, op, "running step");
            step(op, &fields).with_context(|| format!("step {number} (`{op}`)"))?;
        }
        Ok(())
    }
}

/// Named entities of one kind.
#[derive(Debug)]
pub struct Roster<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Roster<T> {
    pub fn get(&self, name: &str) -> anyhow::Result<&T> {
        match self.entries.get(name) {
            Some(entity) => Ok(entity),
            None => bail!("unknown entity `{name}`"),
        }
    }

    pub fn get_mut(&mut self, name: &str) -> anyhow::Result<&mut T> {
        match self.entries.get_mut(name) {
            Some(entity) => Ok(entity),
            None => bail!("unknown entity `{name}`"),
        }
    }

    /// Mutable access to two distinct entities at once.
    pub fn pair_mut(&mut self, first: &str, second: &str) -> anyhow::Result<(&mut T, &mut T)> {
        if first == second {
            bail!("`{first}` cannot act on itself");
        }
        self.get(first)?;
        self.get(second)?;

        let mut first_slot = None;
        let mut second_slot = None;
        for (name, entity) in self.entries.iter_mut() {
            if name == first {
                first_slot = Some(entity);
            } else if name == second {
                second_slot = Some(entity);
            }
        }
        match (first_slot, second_slot) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => bail!("unknown entity `{first}` or `{second}`"),
        }
    }
}

/// Steps every exercise understands: `show`, `repr`, `dump`, `rule`.
///
/// Returns `Ok(false)` when `op` is not one of them.
pub fn common_step<T>(
    op: &str,
    fields: &Fields<'_>,
    roster: &Roster<T>,
    out: &mut dyn Write,
) -> anyhow::Result<bool>
where
    T: ShowInfo + core::fmt::Debug + Serialize,
{
    match op {
        "show" => {
            let entity = roster.get(fields.text("entity")?)?;
            entity.write_info(out)?;
        }
        "repr" => {
            let entity = roster.get(fields.text("entity")?)?;
            writeln!(out, "{entity:?}")?;
        }
        "dump" => {
            let entity = roster.get(fields.text("entity")?)?;
            writeln!(out, "{}", serde_json::to_string(entity)?)?;
        }
        "rule" => {
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
