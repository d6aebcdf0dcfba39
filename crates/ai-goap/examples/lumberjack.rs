//! Plan a wood pile: craft an axe from scrap, then chop until there is enough.
//!
//! Run with `RUST_LOG=ai_goap=debug` to watch the search tick by tick, or
//! `RUST_LOG=ai_goap::debugger=trace` for every behavior evaluation.

use std::cmp::Ordering;

use ai_core::{Behavior, Goal, WorldState};
use ai_goap::{Engine, SessionStatus};
use ai_tools::TracingDebugger;
use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Camp {
    has_axe: bool,
    wood: i32,
}

impl WorldState for Camp {}

#[derive(Debug, Clone, Copy)]
enum Chore {
    ChopWood,
    MakeAxe,
}

impl Behavior<Camp> for Chore {
    fn name(&self) -> &str {
        match self {
            Chore::ChopWood => "chop_wood",
            Chore::MakeAxe => "make_axe",
        }
    }

    fn can_run(&self, camp: &Camp) -> bool {
        match self {
            Chore::ChopWood => camp.has_axe,
            Chore::MakeAxe => camp.wood >= 2,
        }
    }

    fn apply(&self, camp: &mut Camp) {
        match self {
            Chore::ChopWood => camp.wood += 1,
            Chore::MakeAxe => {
                camp.wood -= 2;
                camp.has_axe = true;
            }
        }
    }

    fn cost(&self, _camp: &Camp) -> f32 {
        1.0
    }
}

struct WoodPile(i32);

impl Goal<Camp> for WoodPile {
    fn is_satisfied(&self, camp: &Camp) -> bool {
        camp.wood >= self.0
    }

    fn compare(&self, a: &Camp, b: &Camp) -> Ordering {
        b.wood.cmp(&a.wood)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let target: i32 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid wood target `{arg}`"))?,
        None => 20,
    };

    let camp = Camp {
        has_axe: false,
        wood: 10,
    };
    let engine = Engine::new();
    let mut session = engine.start(
        camp.clone(),
        [Chore::ChopWood, Chore::MakeAxe],
        WoodPile(target),
    );
    let mut debugger = TracingDebugger::new();

    let status = engine.run_observed(&mut session, &mut debugger)?;
    if status == SessionStatus::Active {
        bail!("no plan within {} ticks", engine.config().max_ticks);
    }
    let Some(cost) = session.best_cost()? else {
        bail!("a pile of {target} wood is out of reach from {camp:?}");
    };

    let plan = engine.extract_plan(&session)?;
    info!(
        ticks = session.ticks(),
        nodes = session.graph().len(),
        steps = plan.len(),
        cost,
        "planned"
    );
    for (i, chore) in plan.chronological().enumerate() {
        println!("{:>3}. {}", i + 1, chore.name());
    }

    let end = plan
        .replay(&camp)
        .context("plan does not replay from the starting camp")?;
    println!("end state: {end:?}");
    Ok(())
}
