use roster_business::{BusinessConfig, FetchUsersCommand, QueryState, UsersFetch};
use roster_states::StateCtx;

/// The main application state: the state context plus the tokio runtime that
/// command tasks run on.
pub struct State {
    pub ctx: StateCtx,
    /// Owned runtime for the native app; `None` in tests, which hand the ctx
    /// their own runtime handle.
    _runtime: Option<tokio::runtime::Runtime>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::from_env())
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");

        let mut ctx = StateCtx::new(runtime.handle().clone());
        Self::register(&mut ctx, config);

        Self {
            ctx,
            _runtime: Some(runtime),
        }
    }

    /// For integration tests: point at a mock server and reuse the caller's
    /// runtime.
    pub fn test(base_url: String) -> Self {
        let mut ctx = StateCtx::new(tokio::runtime::Handle::current());
        Self::register(&mut ctx, BusinessConfig::new(base_url));

        Self {
            ctx,
            _runtime: None,
        }
    }

    fn register(ctx: &mut StateCtx, config: BusinessConfig) {
        ctx.add_state(config);
        ctx.add_state(QueryState::default());
        ctx.add_state(UsersFetch::default());

        // Load the first page right away.
        ctx.dispatch::<FetchUsersCommand>();
    }
}
