use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, HashMap};

use tokio_util::sync::CancellationToken;

use crate::updater::StateUpdate;
use crate::{Command, CommandSnapshot, Error, LatestOnlyUpdater, State, TaskHandle, TaskId};

/// Owns every registered [`State`], dispatches [`Command`]s onto a tokio
/// runtime, and applies queued results back into the states once per frame.
///
/// Single-threaded by construction: all mutation happens through `&mut self`
/// on the frame loop. Spawned command tasks only ever talk back through the
/// update channel, drained by [`Self::sync_states`].
pub struct StateCtx {
    handle: tokio::runtime::Handle,

    states: BTreeMap<TypeId, Box<dyn State>>,

    updates_tx: flume::Sender<StateUpdate>,
    updates_rx: flume::Receiver<StateUpdate>,

    /// Latest in-flight task per command type, for superseding cancellation.
    tasks: HashMap<TypeId, TaskHandle>,
    /// Latest dispatched generation per command type; older updates are stale.
    generations: HashMap<TypeId, u64>,
}

impl StateCtx {
    /// The handle is where command futures are spawned; the caller owns the
    /// runtime (the app keeps one alive for its whole lifetime, tests use
    /// `Handle::current()`).
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        let (updates_tx, updates_rx) = flume::unbounded();
        Self {
            handle,
            states: BTreeMap::new(),
            updates_tx,
            updates_rx,
            tasks: HashMap::new(),
            generations: HashMap::new(),
        }
    }

    /// Register a state. Re-registering a type replaces the previous value.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Borrow state `T`.
    ///
    /// # Panics
    /// Panics when `T` was never registered; states are wired at startup, so
    /// a missing one is a programming error.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|_| panic!("state not registered: {}", type_name::<T>()))
    }

    /// Mutably borrow state `T`. Panics like [`Self::state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", type_name::<T>()))
    }

    /// Fallible variant of [`Self::state`].
    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), "StateCtx::state"))
    }

    /// Dispatch command `C` as a spawned task.
    ///
    /// Any still-running task of the same command type is cancelled, and its
    /// pending results will be discarded as stale even if it keeps running to
    /// completion.
    pub fn dispatch<C: Command + Default>(&mut self) {
        let (updater, cancel) = self.begin_task(TypeId::of::<C>());

        let mut snap = CommandSnapshot::default();
        for (id, state) in &self.states {
            snap.insert(*id, state.snapshot());
        }

        log::debug!("dispatch {}", type_name::<C>());
        self.handle.spawn(C::default().run(snap, updater, cancel));
    }

    /// Book-keeping half of [`Self::dispatch`]: cancel the superseded task,
    /// bump the generation, hand out a tagged updater.
    pub(crate) fn begin_task(
        &mut self,
        command_type: TypeId,
    ) -> (LatestOnlyUpdater, CancellationToken) {
        if let Some(previous) = self.tasks.get(&command_type) {
            previous.cancel();
        }

        let generation = self.generations.entry(command_type).or_insert(0);
        *generation += 1;
        let task_id = TaskId::new(command_type, *generation);

        let token = CancellationToken::new();
        self.tasks
            .insert(command_type, TaskHandle::new(task_id, token.clone()));

        (
            LatestOnlyUpdater::new(task_id, self.updates_tx.clone()),
            token,
        )
    }

    /// Drain queued command results into the registered states.
    ///
    /// Call once per frame, before rendering. Updates from superseded tasks
    /// (older generation than the latest dispatched for that command type)
    /// are discarded: latest request wins, never channel arrival order.
    pub fn sync_states(&mut self) {
        while let Ok(update) = self.updates_rx.try_recv() {
            let latest = self
                .generations
                .get(&update.task.type_id())
                .copied()
                .unwrap_or(0);
            if update.task.generation() < latest {
                log::debug!(
                    "sync_states: discarding stale update (generation {} < {latest})",
                    update.task.generation()
                );
                continue;
            }

            match self.states.get_mut(&update.state_type) {
                Some(state) => state.assign_box(update.value),
                None => log::error!("sync_states: update for unregistered state, dropped"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::state_assign_impl;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter(u32);

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn snapshot(&self) -> Box<dyn Any + Send> {
            Box::new(self.clone())
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    #[derive(Default)]
    struct IncrementCommand;

    impl Command for IncrementCommand {
        fn run(
            &self,
            snap: CommandSnapshot,
            updater: LatestOnlyUpdater,
            _cancel: CancellationToken,
        ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
            let current = snap.state::<Counter>();
            Box::pin(async move {
                updater.set(Counter(current.0 + 1));
            })
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn state_roundtrip() {
        let mut ctx = StateCtx::new(tokio::runtime::Handle::current());
        ctx.add_state(Counter(7));

        assert_eq!(ctx.state::<Counter>().0, 7);
        ctx.state_mut::<Counter>().0 = 9;
        assert_eq!(ctx.state::<Counter>().0, 9);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_state_is_an_error() {
        let ctx = StateCtx::new(tokio::runtime::Handle::current());
        assert!(ctx.try_state::<Counter>().is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatched_command_updates_state() {
        let mut ctx = StateCtx::new(tokio::runtime::Handle::current());
        ctx.add_state(Counter(0));

        ctx.dispatch::<IncrementCommand>();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        ctx.sync_states();

        assert_eq!(*ctx.state::<Counter>(), Counter(1));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn stale_generation_is_discarded() {
        let mut ctx = StateCtx::new(tokio::runtime::Handle::current());
        ctx.add_state(Counter(0));

        // Two dispatches of the same command type; the first "request"
        // resolves after the second, which must not let it win.
        let cmd = TypeId::of::<IncrementCommand>();
        let (first, first_token) = ctx.begin_task(cmd);
        let (second, _) = ctx.begin_task(cmd);

        second.set(Counter(2));
        first.set(Counter(1));
        ctx.sync_states();

        assert_eq!(*ctx.state::<Counter>(), Counter(2));
        // The superseded task was also asked to stop.
        assert!(first_token.is_cancelled());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn latest_generation_applies_regardless_of_arrival_order() {
        let mut ctx = StateCtx::new(tokio::runtime::Handle::current());
        ctx.add_state(Counter(0));

        let cmd = TypeId::of::<IncrementCommand>();
        let (first, _) = ctx.begin_task(cmd);
        let (second, _) = ctx.begin_task(cmd);

        // Stale arrives first this time.
        first.set(Counter(1));
        second.set(Counter(2));
        ctx.sync_states();

        assert_eq!(*ctx.state::<Counter>(), Counter(2));
    }
}
