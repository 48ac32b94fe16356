//! # One-shot bootstrap.
//!
//! Runs a single pre-selected handler without a menu, a loop, or ordering:
//! one scope is derived from the root provider, the handler is constructed
//! and invoked within it, the scope is released, and any failure propagates
//! to the caller uncaught. A one-shot script should fail loudly.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use menuvisor::{bootstrap, Action, HandlerSpec, ServiceMap};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(ServiceMap::new());
//! let spec = HandlerSpec::new("migrate")
//!     .with_action(Action::method_sync(|_| Ok(())));
//!
//! bootstrap::run_spec(provider.as_ref(), &spec).await?;
//! # Ok(())
//! # }
//! ```

use crate::error::SessionError;
use crate::handlers::{Action, HandlerSpec};
use crate::scopes::{run_in_scope, ScopeProvider};

/// Runs one action inside one scope; failures propagate uncaught.
pub async fn run_action(
    provider: &dyn ScopeProvider,
    name: &str,
    action: &Action,
) -> Result<(), SessionError> {
    tracing::debug!(handler = name, "one-shot bootstrap");
    run_in_scope(provider, name, action).await
}

/// Runs a candidate's action directly, without a menu.
///
/// Menu metadata is irrelevant here; only the action matters. A candidate
/// registered without one is not executable, which surfaces as
/// [`SessionError::NoHandlersFound`].
pub async fn run_spec(
    provider: &dyn ScopeProvider,
    spec: &HandlerSpec,
) -> Result<(), SessionError> {
    let action = spec.action().ok_or(SessionError::NoHandlersFound)?;
    run_action(provider, spec.id(), action).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerError;
    use crate::scopes::ServiceMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_one_shot_runs_action_once() {
        let provider = ServiceMap::new();
        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);
        let spec = HandlerSpec::new("migrate").with_action(Action::method_sync(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));

        run_spec(&provider, &spec).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_one_shot_failure_propagates() {
        let provider = ServiceMap::new();
        let spec = HandlerSpec::new("migrate")
            .with_action(Action::method_sync(|_| Err(HandlerError::fail("boom"))));

        let err = run_spec(&provider, &spec).await.unwrap_err();
        assert!(matches!(err, SessionError::Invocation { .. }));
    }

    #[tokio::test]
    async fn test_non_executable_candidate_is_rejected() {
        let provider = ServiceMap::new();
        let spec = HandlerSpec::new("inert").with_menu("Inert", 0);

        let err = run_spec(&provider, &spec).await.unwrap_err();
        assert!(matches!(err, SessionError::NoHandlersFound));
    }
}
