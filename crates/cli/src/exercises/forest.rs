//! Forest steps: `grow` (optional `years`, one by default).

use std::io::Write;

use anyhow::bail;

use labkit_core::ValidatedEntity;
use labkit_forest::Tree;

use crate::scenario::{Scenario, common_step};

pub fn run(scenario: &Scenario, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut trees = scenario.roster(Tree::from_json)?;

    scenario.for_each_step(|op, fields| {
        if common_step(op, fields, &trees, out)? {
            return Ok(());
        }
        match op {
            "grow" => {
                let tree = trees.get_mut(fields.text("entity")?)?;
                tree.grow(fields.optional_integer("years", 1)?)?;
            }
            other => bail!("unknown forest step `{other}`"),
        }
        Ok(())
    })
}
