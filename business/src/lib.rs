//! Domain logic for the Roster user-directory viewer.
//!
//! UI code stays "dumb": it reads states, renders, and dispatches commands.
//! Everything that decides *what* to fetch and *how* responses become state
//! lives here:
//! - [`QueryState`]: filter/sort/page controller and its derived [`UserQuery`]
//!   request descriptor,
//! - [`users_api`]: one HTTP GET per call against `<base>/user/`,
//! - [`UsersFetch`] + [`FetchUsersCommand`]: the displayed result page and the
//!   command that refreshes it.

mod config;
mod http;
mod query;
mod user;
pub mod users_api;
mod users_fetch;

pub use config::BusinessConfig;
pub use query::{DEFAULT_PAGE_SIZE, QueryState, SortColumn, SortOrder, UserQuery};
pub use user::{Address, Certification, Profession, ResultPage, UserListResponse, UserRow};
pub use users_api::{ApiError, ApiResult};
pub use users_fetch::{FetchPhase, FetchUsersCommand, UsersFetch};
