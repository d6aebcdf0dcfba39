use thiserror::Error;

/// Fatal planning conditions.
///
/// Recoverable situations (a behavior that cannot run, a rediscovered state that is not strictly
/// cheaper) are handled inside the engine and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A world state's `duplicate` returned a value sharing storage with its source.
    #[error("world state duplicate shares storage with its source")]
    CloneViolation,

    /// A behavior priced an edge at zero, a negative amount, or NaN.
    #[error("behavior `{behavior}` reported illegal cost {cost}")]
    CostViolation { behavior: String, cost: f32 },

    /// Cost lookup for a state the search graph never indexed.
    #[error("best-known cost requested for a world state that was never indexed")]
    UnknownState,

    /// Plan extraction targeted a state the search graph never indexed.
    #[error("no plan: target world state was never indexed")]
    NoPlan,
}

pub type Result<T> = std::result::Result<T, PlanError>;
