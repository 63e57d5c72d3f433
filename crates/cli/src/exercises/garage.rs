//! Garage steps: `add_fuel`, `consume_fuel`, `check_empty`.

use std::io::Write;

use anyhow::bail;

use labkit_core::ValidatedEntity;
use labkit_garage::Car;

use crate::scenario::{Scenario, common_step};

pub fn run(scenario: &Scenario, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut cars = scenario.roster(Car::from_json)?;

    scenario.for_each_step(|op, fields| {
        if common_step(op, fields, &cars, out)? {
            return Ok(());
        }
        match op {
            "add_fuel" => {
                let car = cars.get_mut(fields.text("entity")?)?;
                car.add_fuel(fields.number("amount")?)?;
            }
            "consume_fuel" => {
                let car = cars.get_mut(fields.text("entity")?)?;
                car.consume_fuel(fields.number("amount")?)?;
            }
            "check_empty" => {
                let car = cars.get(fields.text("entity")?)?;
                writeln!(out, "Tank empty: {}", car.is_empty_tank())?;
            }
            other => bail!("unknown garage step `{other}`"),
        }
        Ok(())
    })
}
