use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Error, State};

/// Clones of all registered states, taken at dispatch time.
///
/// Commands read their inputs from here instead of borrowing `StateCtx`, so a
/// spawned task never races the frame loop over live state.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn insert(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    /// Owned copy of state `T`.
    ///
    /// # Panics
    /// Panics when `T` was never registered; commands are wired at startup, so
    /// a missing state is a programming error.
    pub fn state<T: State + Clone>(&self) -> T {
        self.try_state::<T>()
            .unwrap_or_else(|_| panic!("state snapshot missing for {}", type_name::<T>()))
    }

    /// Fallible variant of [`Self::state`].
    pub fn try_state<T: State + Clone>(&self) -> Result<T, Error> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), "command snapshot"))
    }
}
