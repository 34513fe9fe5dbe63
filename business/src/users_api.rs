//! The remote data fetcher: one HTTP round trip per call.
//!
//! No retries, no caching, no in-flight deduplication; each call is
//! independent and never mutates query state. Overlap between calls is the
//! dispatch layer's problem, not this module's.

use crate::http::Client;
use crate::{BusinessConfig, ResultPage, UserListResponse, UserQuery};

/// Everything that can go wrong in one fetch, collapsed to what the view needs
/// to say: transport failure, bad status, or a body that isn't a user list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to decode user list: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// `GET <base>/user/` with the derived query parameters.
pub async fn fetch_users(config: &BusinessConfig, query: &UserQuery) -> ApiResult<ResultPage> {
    let url = config.user_url();

    let response = Client::get(url.as_str())
        .query(query.query_pairs())
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.message))?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    let list: UserListResponse = response
        .json()
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(list.into())
}
