//! Task identity and cooperative cancellation for dispatched commands.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Identity of one dispatched command task.
///
/// Combines the command's `TypeId` with a per-type generation counter. The
/// generation is what makes "latest request wins" decidable: an update tagged
/// with an older generation than the latest dispatched one is stale and gets
/// discarded at sync time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    /// The command type that spawned this task.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generations are more recently dispatched.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to an in-flight command task.
///
/// Cancellation is cooperative: `cancel()` only signals the token, the task
/// must observe it (`tokio::select!` on `cancelled()`). Even a task that never
/// checks its token cannot clobber newer state, because its updates carry a
/// stale [`TaskId`].
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Request cooperative cancellation.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_accessors() {
        let type_id = TypeId::of::<String>();
        let id = TaskId::new(type_id, 42);

        assert_eq!(id.type_id(), type_id);
        assert_eq!(id.generation(), 42);
    }

    #[test]
    fn task_id_equality() {
        let type_id = TypeId::of::<String>();

        let id1 = TaskId::new(type_id, 1);
        let id2 = TaskId::new(type_id, 1);
        let id3 = TaskId::new(type_id, 2);
        let id4 = TaskId::new(TypeId::of::<i32>(), 1);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3); // different generation
        assert_ne!(id1, id4); // different type
    }

    #[test]
    fn task_handle_cancel() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );

        assert!(!handle.is_cancelled());
        handle.cancel();
        assert!(handle.is_cancelled());
    }

    #[test]
    fn task_handle_clone_shares_token() {
        let handle1 = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );
        let handle2 = handle1.clone();

        handle1.cancel();

        assert!(handle1.is_cancelled());
        assert!(handle2.is_cancelled());
    }
}
