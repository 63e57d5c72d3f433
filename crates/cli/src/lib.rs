//! `labkit` runner: loads a scenario and plays it against one exercise.

pub mod exercises;
pub mod scenario;

use std::io::Write;

use scenario::Scenario;

/// The independent exercises the runner knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Garage,
    Forest,
    Arena,
    Library,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Garage,
        Exercise::Forest,
        Exercise::Arena,
        Exercise::Library,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Exercise::Garage => "garage",
            Exercise::Forest => "forest",
            Exercise::Arena => "arena",
            Exercise::Library => "library",
        }
    }

    /// Demonstration scenario shipped with the binary.
    pub fn builtin_scenario(self) -> &'static str {
        match self {
            Exercise::Garage => include_str!("../scenarios/garage.json"),
            Exercise::Forest => include_str!("../scenarios/forest.json"),
            Exercise::Arena => include_str!("../scenarios/arena.json"),
            Exercise::Library => include_str!("../scenarios/library.json"),
        }
    }

    pub fn run(self, scenario: &Scenario, out: &mut dyn Write) -> anyhow::Result<()> {
        tracing::info!(
            exercise = self.name(),
            entities = scenario.entities.len(),
            steps = scenario.steps.len(),
            "running scenario"
        );
        match self {
            Exercise::Garage => exercises::garage::run(scenario, out),
            Exercise::Forest => exercises::forest::run(scenario, out),
            Exercise::Arena => exercises::arena::run(scenario, out),
            Exercise::Library => exercises::library::run(scenario, out),
        }
    }

    /// Run the built-in scenario.
    pub fn run_builtin(self, out: &mut dyn Write) -> anyhow::Result<()> {
        let scenario = Scenario::parse(self.builtin_scenario())?;
        self.run(&scenario, out)
    }
}
