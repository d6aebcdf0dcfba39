mod common;

use std::rc::Rc;

use ai_core::Behavior;
use ai_goap::{Engine, EngineConfig};

use common::{AtLeast, Step, DEC, INC, JUMP};

#[test]
fn slices_arrays_and_vecs_plan_alike() {
    let engine = Engine::new();
    let behaviors = [INC, JUMP];

    let from_array = engine.plan(0i64, behaviors, AtLeast(2)).unwrap();
    let from_slice = engine.plan(0i64, &behaviors[..], AtLeast(2)).unwrap();
    let from_vec = engine.plan(0i64, behaviors.to_vec(), AtLeast(2)).unwrap();

    assert_eq!(from_array, from_slice);
    assert_eq!(from_slice, from_vec);
    assert_eq!(from_vec.map(|p| p.steps), Some(vec![INC, INC]));
}

#[test]
fn heterogeneous_behaviors_behind_trait_objects() {
    struct Double;

    impl Behavior<i64> for Double {
        fn name(&self) -> &str {
            "double"
        }

        fn can_run(&self, state: &i64) -> bool {
            *state > 0
        }

        fn apply(&self, state: &mut i64) {
            *state *= 2;
        }

        fn cost(&self, _state: &i64) -> f32 {
            1.5
        }
    }

    let double = Double;
    let behaviors: Vec<&dyn Behavior<i64>> = vec![&INC, &double];
    let engine = Engine::new();
    let plan = engine
        .plan(1i64, behaviors, AtLeast(8))
        .unwrap()
        .expect("doubling reaches 8");

    let names: Vec<&str> = plan.chronological().map(|b| b.name()).collect();
    assert_eq!(names, vec!["inc", "double", "double"]);
}

#[test]
fn boxed_and_shared_behaviors_drive_a_session() {
    let engine = Engine::new();
    let boxed: Vec<Box<dyn Behavior<i64>>> = vec![Box::new(INC), Box::new(DEC)];
    let mut session = engine.start(0i64, boxed, AtLeast(3));
    engine.run(&mut session).unwrap();
    assert_eq!(session.best_cost().unwrap(), Some(3.0));

    let shared: Vec<Rc<Step>> = vec![Rc::new(INC), Rc::new(DEC)];
    let plan = engine.plan(0i64, shared, AtLeast(3)).unwrap().unwrap();
    assert!(plan.iter().all(|step| **step == INC));
}

#[test]
fn one_engine_drives_independent_sessions() {
    let engine = Engine::new().with_config(EngineConfig {
        branch_and_bound: true,
        max_ticks: 1,
    });
    let mut near = engine.start(0i64, vec![INC, DEC], AtLeast(2));
    let mut far = engine.start(100i64, vec![INC, DEC], AtLeast(105));

    for _ in 0..32 {
        engine.run(&mut near).unwrap();
        engine.run(&mut far).unwrap();
    }

    assert_eq!(near.best_solution(), Some(&2));
    assert_eq!(far.best_solution(), Some(&105));
    assert_eq!(engine.extract_plan(&far).unwrap().len(), 5);
}
