//! Typed state container + command dispatch for the Roster UI.
//!
//! The model is deliberately small:
//! - [`State`]: a registered, snapshot-able piece of application state.
//! - [`StateCtx`]: owns all states, dispatches commands, applies queued updates.
//! - [`Command`]: a manual-only async side effect (network IO lives here, never
//!   in render code). Commands receive a [`CommandSnapshot`] of the states at
//!   dispatch time and write results back through a [`LatestOnlyUpdater`].
//!
//! Overlapping dispatches of the same command type are resolved in two layers:
//! the previous task's `CancellationToken` is cancelled, and every update is
//! tagged with a [`TaskId`] generation so `StateCtx::sync_states` discards
//! results from superseded tasks. The state a frame renders therefore always
//! reflects the most recently dispatched command, regardless of completion
//! order.

mod command;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::Command;
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use updater::LatestOnlyUpdater;
