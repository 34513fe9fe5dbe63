use std::any::Any;

use roster_states::{State, state_assign_impl};
use ustr::Ustr;

/// Where the viewer's API lives.
///
/// Built explicitly at startup and registered into `StateCtx`; commands read
/// it from their snapshot. Nothing in this workspace reaches for a
/// process-wide base-URL constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    api_base_url: String,
}

/// `ROSTER_API_URL` overrides the base URL at process start.
pub const API_URL_ENV: &str = "ROSTER_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Base URL from [`API_URL_ENV`], falling back to the local dev server.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Endpoint for the user list, `<base>/user/`.
    ///
    /// `Ustr` because this is rebuilt per fetch from an effectively constant
    /// base URL.
    pub fn user_url(&self) -> Ustr {
        Ustr::from(&format!(
            "{}/user/",
            self.api_base_url.trim_end_matches('/')
        ))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl State for BusinessConfig {
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
