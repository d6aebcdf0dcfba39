use core::hash::Hash;

/// A snapshot of the world the planner searches over.
///
/// Equality and hashing define state identity: the search graph keeps exactly one node per
/// distinct value. Snapshots are never mutated in place once handed to the planner; behaviors
/// act on a [`duplicate`](WorldState::duplicate) instead.
pub trait WorldState: Clone + Eq + Hash {
    /// An independent copy, equal to `self` but sharing no mutable storage with it.
    fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Whether `self` and `other` share mutable storage.
    ///
    /// Plain value types never do. Types built on `Rc<RefCell<_>>` or similar must override this
    /// so an aliasing `duplicate` is reported instead of silently corrupting the source state.
    fn shares_storage_with(&self, _other: &Self) -> bool {
        false
    }
}

macro_rules! value_world_state {
    ($($ty:ty),* $(,)?) => {
        $(impl WorldState for $ty {})*
    };
}

value_world_state!(bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String);
