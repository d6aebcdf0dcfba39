#![cfg(all(feature = "goap", feature = "tools"))]

use std::cmp::Ordering;

use ai::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Add(u32);

impl Behavior<u32> for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn apply(&self, state: &mut u32) {
        *state += self.0;
    }

    fn cost(&self, _state: &u32) -> f32 {
        self.0 as f32
    }
}

struct Exactly(u32);

impl Goal<u32> for Exactly {
    fn is_satisfied(&self, state: &u32) -> bool {
        *state == self.0
    }

    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        a.abs_diff(self.0).cmp(&b.abs_diff(self.0))
    }
}

#[test]
fn prelude_covers_a_full_session() {
    let engine = Engine::new().with_config(EngineConfig {
        branch_and_bound: true,
        max_ticks: 64,
    });
    let mut session = engine.start(0u32, vec![Add(1), Add(3)], Exactly(7));
    let mut debugger = TraceDebugger::new(TraceLog::default());

    let status = engine.run_observed(&mut session, &mut debugger).unwrap();
    assert_ne!(status, SessionStatus::Active);
    assert_eq!(session.best_solution(), Some(&7));
    assert_eq!(session.best_cost().unwrap(), Some(7.0));

    let plan: PlanSpec<Add> = engine.extract_plan(&session).unwrap();
    assert_eq!(plan.replay(&0), Some(7));
    assert!(!debugger.sink().events.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn plans_serialize_through_the_umbrella() {
    let plan = ai::core::PlanSpec::new(vec![1u8, 2, 3]);
    let json = serde_json::to_string(&plan).unwrap();
    assert_eq!(json, r#"{"steps":[1,2,3]}"#);
}
