//! Fetch-users command + the state it maintains.
//!
//! Fetching is a side effect (network IO), so it lives in a manual-only
//! [`Command`] the UI dispatches after every query mutation. The command
//! updates [`UsersFetch`] through the latest-only updater; a response from a
//! superseded dispatch is discarded at sync time, so whichever request was
//! issued last is the one the table shows, regardless of completion order.

use std::any::Any;

use chrono::{DateTime, Utc};
use roster_states::{Command, CommandSnapshot, LatestOnlyUpdater, State, state_assign_impl};
use tokio_util::sync::CancellationToken;

use crate::{BusinessConfig, QueryState, ResultPage, UserRow, users_api};

/// Phase of the most recent fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Last fetch succeeded; `page` is current.
    Ready,
    /// Last fetch failed; `page` still holds the previous rows.
    Failed(String),
}

/// The result side of the users table: the page being displayed plus the
/// phase of the last fetch.
///
/// A failed fetch keeps the previous [`ResultPage`] in place — the table never
/// clears on error. The view distinguishes "Ready with zero rows" (genuinely
/// empty) from `Failed` (error banner, stale rows still shown).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersFetch {
    /// Last successful page, retained across failures.
    pub page: Option<ResultPage>,
    pub phase: FetchPhase,
    /// When `page` was fetched.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl UsersFetch {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            FetchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn rows(&self) -> &[UserRow] {
        self.page.as_ref().map(|p| p.rows.as_slice()).unwrap_or(&[])
    }

    pub fn total_count(&self) -> u64 {
        self.page.as_ref().map(|p| p.total_count).unwrap_or(0)
    }

    /// True when the last fetch succeeded and the result set is genuinely
    /// empty — the "no records" case, not the error case.
    pub fn is_empty_success(&self) -> bool {
        matches!(self.phase, FetchPhase::Ready) && self.rows().is_empty()
    }
}

impl State for UsersFetch {
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

/// Manual-only command that fetches the user list for the current
/// [`QueryState`]. Dispatch via `ctx.dispatch::<FetchUsersCommand>()` after
/// every query mutation.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
        let config = snap.state::<BusinessConfig>();
        let query = snap.state::<QueryState>().request();
        let previous = snap.state::<UsersFetch>();

        Box::pin(async move {
            updater.set(UsersFetch {
                page: previous.page.clone(),
                phase: FetchPhase::Loading,
                fetched_at: previous.fetched_at,
            });

            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    log::debug!("FetchUsersCommand: superseded, dropping request");
                    return;
                }
                result = users_api::fetch_users(&config, &query) => result,
            };

            match result {
                Ok(page) => {
                    log::info!(
                        "FetchUsersCommand: fetched {} of {} users",
                        page.rows.len(),
                        page.total_count
                    );
                    updater.set(UsersFetch {
                        page: Some(page),
                        phase: FetchPhase::Ready,
                        fetched_at: Some(Utc::now()),
                    });
                }
                Err(err) => {
                    log::error!("FetchUsersCommand: {err}");
                    updater.set(UsersFetch {
                        page: previous.page,
                        phase: FetchPhase::Failed(err.to_string()),
                        fetched_at: previous.fetched_at,
                    });
                }
            }
        })
    }
}
