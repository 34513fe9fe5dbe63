use std::any::{Any, TypeId};

use crate::{State, TaskId};

/// One queued state replacement produced by a command task.
pub(crate) struct StateUpdate {
    /// The state type being replaced.
    pub(crate) state_type: TypeId,
    /// Identity of the producing task; used for staleness filtering.
    pub(crate) task: TaskId,
    pub(crate) value: Box<dyn Any + Send>,
}

/// Write handle given to a dispatched command.
///
/// Every update is tagged with the dispatching task's [`TaskId`];
/// `StateCtx::sync_states` applies an update only when its generation is still
/// the latest dispatched for that command type. A slow response from a
/// superseded request can therefore never overwrite a newer one.
#[derive(Clone)]
pub struct LatestOnlyUpdater {
    task: TaskId,
    tx: flume::Sender<StateUpdate>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(task: TaskId, tx: flume::Sender<StateUpdate>) -> Self {
        Self { task, tx }
    }

    /// Queue a wholesale replacement of state `T`.
    pub fn set<T: State>(&self, value: T) {
        let update = StateUpdate {
            state_type: TypeId::of::<T>(),
            task: self.task,
            value: Box::new(value),
        };
        if self.tx.send(update).is_err() {
            // Context was dropped (app shutdown); nothing left to update.
            log::warn!(
                "LatestOnlyUpdater: state context gone, dropping update for {}",
                std::any::type_name::<T>()
            );
        }
    }
}
