use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

/// A manual-only async side effect.
///
/// Commands are the only place network IO belongs; render code reads states
/// and dispatches commands, nothing else. Dispatch explicitly via
/// `StateCtx::dispatch::<MyCommand>()`.
///
/// `run` receives:
/// - a [`CommandSnapshot`] of all states at dispatch time,
/// - a [`LatestOnlyUpdater`] to write results back (stale results from a
///   superseded dispatch are discarded at sync time),
/// - a `CancellationToken` that fires when a newer dispatch of the same
///   command type supersedes this one.
pub trait Command: Any + Send + Sync {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}
