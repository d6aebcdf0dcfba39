#![allow(dead_code)]

use std::cmp::Ordering;

use ai_core::{Behavior, Goal, WorldState};

/// Integer counter behavior: adds `delta` at a fixed cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub name: &'static str,
    pub delta: i64,
    pub cost: f32,
}

impl Step {
    pub const fn new(name: &'static str, delta: i64, cost: f32) -> Self {
        Self { name, delta, cost }
    }
}

pub const INC: Step = Step::new("inc", 1, 1.0);
pub const DEC: Step = Step::new("dec", -1, 1.0);
pub const JUMP: Step = Step::new("jump", 2, 5.0);

impl Behavior<i64> for Step {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, state: &mut i64) {
        *state += self.delta;
    }

    fn cost(&self, _state: &i64) -> f32 {
        self.cost
    }
}

/// Satisfied at `value >= target`; higher values are closer.
#[derive(Debug, Clone, Copy)]
pub struct AtLeast(pub i64);

impl Goal<i64> for AtLeast {
    fn is_satisfied(&self, state: &i64) -> bool {
        *state >= self.0
    }

    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        b.cmp(a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Camp {
    pub has_axe: bool,
    pub wood: i32,
}

impl WorldState for Camp {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lumber {
    ChopWood,
    MakeAxe,
}

impl Behavior<Camp> for Lumber {
    fn name(&self) -> &str {
        match self {
            Lumber::ChopWood => "chop_wood",
            Lumber::MakeAxe => "make_axe",
        }
    }

    fn can_run(&self, state: &Camp) -> bool {
        match self {
            Lumber::ChopWood => state.has_axe,
            Lumber::MakeAxe => state.wood >= 2,
        }
    }

    fn apply(&self, state: &mut Camp) {
        match self {
            Lumber::ChopWood => state.wood += 1,
            Lumber::MakeAxe => {
                state.wood -= 2;
                state.has_axe = true;
            }
        }
    }

    fn cost(&self, _state: &Camp) -> f32 {
        1.0
    }
}

/// Satisfied at `wood >= target`; more wood is closer.
#[derive(Debug, Clone, Copy)]
pub struct WoodPile(pub i32);

impl Goal<Camp> for WoodPile {
    fn is_satisfied(&self, state: &Camp) -> bool {
        state.wood >= self.0
    }

    fn compare(&self, a: &Camp, b: &Camp) -> Ordering {
        b.wood.cmp(&a.wood)
    }
}

/// Named places on a hand-drawn map. Used where a test needs exact control over which edge
/// exists and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Start,
    Ridge,
    Ford,
    Mill,
    Yard,
}

impl WorldState for Place {}

/// A one-way edge between two places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Road {
    pub from: Place,
    pub to: Place,
    pub cost: f32,
}

impl Road {
    pub const fn new(from: Place, to: Place, cost: f32) -> Self {
        Self { from, to, cost }
    }
}

impl Behavior<Place> for Road {
    fn name(&self) -> &str {
        "road"
    }

    fn can_run(&self, state: &Place) -> bool {
        *state == self.from
    }

    fn apply(&self, state: &mut Place) {
        *state = self.to;
    }

    fn cost(&self, _state: &Place) -> f32 {
        self.cost
    }
}

/// Never satisfied. Ranks places by a fixed table; `Mill` and `Yard` tie.
#[derive(Debug, Clone, Copy)]
pub struct Survey;

impl Survey {
    fn rank(place: &Place) -> u8 {
        match place {
            Place::Ridge => 0,
            Place::Ford => 1,
            Place::Mill | Place::Yard => 2,
            Place::Start => 3,
        }
    }
}

impl Goal<Place> for Survey {
    fn is_satisfied(&self, _state: &Place) -> bool {
        false
    }

    fn compare(&self, a: &Place, b: &Place) -> Ordering {
        Self::rank(a).cmp(&Self::rank(b))
    }
}
