//! # Run one dispatch inside one scope.
//!
//! Executes a single handler invocation with scope lifecycle guarantees.
//!
//! - **Create ONE scope** from the root provider
//! - **Invoke the action** against it and await the outcome
//! - **Release the scope unconditionally**, success or failure
//!
//! ## Outcome flow
//! ```text
//! Success:
//!   create_scope → invoke → Ok(()) → release → Ok(())
//!
//! Handler failure:
//!   create_scope → invoke → Err(HandlerError) → release → Err(Invocation)
//!
//! Scope failure:
//!   create_scope → Err ─────────────────────────────────► Err(Scope)
//!   ... → release → Err ────────────────────────────────► Err(Scope)
//! ```
//!
//! ## Rules
//! - The scope is released **exactly once**, after the action completes,
//!   even when the action failed.
//! - A release failure outranks the handler's own failure: resource
//!   lifecycle integrity is never silently swallowed.
//! - Scopes never overlap and are never reused; one dispatch, one scope.

use crate::error::SessionError;
use crate::handlers::Action;
use crate::scopes::provider::ScopeProvider;

/// Executes `action` inside a freshly created invocation scope.
///
/// `name` is the handler's display name, used only for error context.
///
/// ### Flow
/// 1. Derive one scope from the root provider
/// 2. Invoke the normalized action against it, awaiting completion in full
/// 3. Release the scope, then map the outcome
///
/// ### Error semantics
/// - Handler failures come back as [`SessionError::Invocation`]; the caller
///   decides whether to recover (looping sessions) or propagate (one-shot).
/// - Scope create/release failures come back as [`SessionError::Scope`]
///   and are always fatal to the caller.
pub async fn run_in_scope(
    provider: &dyn ScopeProvider,
    name: &str,
    action: &Action,
) -> Result<(), SessionError> {
    let scope = provider.create_scope()?;
    tracing::debug!(handler = name, kind = %action.kind(), "dispatching");

    let outcome = action.invoke(scope.as_ref()).await;

    // Release before mapping the outcome: a lifecycle failure wins.
    scope.release()?;

    match outcome {
        Ok(()) => {
            tracing::debug!(handler = name, "dispatch complete");
            Ok(())
        }
        Err(source) => {
            tracing::debug!(handler = name, error = %source, "dispatch failed");
            Err(SessionError::Invocation {
                name: name.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HandlerError, ScopeError};
    use crate::scopes::provider::{InvocationScope, ServiceRef};
    use std::any::TypeId;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    /// Provider that counts scope creations and releases.
    struct CountingProvider {
        created: Arc<AtomicU32>,
        released: Arc<AtomicU32>,
        fail_release: bool,
    }

    struct CountingScope {
        released: Arc<AtomicU32>,
        fail_release: bool,
    }

    impl ScopeProvider for CountingProvider {
        fn create_scope(&self) -> Result<Box<dyn InvocationScope>, ScopeError> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(CountingScope {
                released: Arc::clone(&self.released),
                fail_release: self.fail_release,
            }))
        }
    }

    impl InvocationScope for CountingScope {
        fn get_or_create(&self, _ty: TypeId) -> Option<ServiceRef> {
            None
        }

        fn release(self: Box<Self>) -> Result<(), ScopeError> {
            self.released.fetch_add(1, Ordering::SeqCst);
            if self.fail_release {
                return Err(ScopeError::Release {
                    reason: "leaked connection".into(),
                });
            }
            Ok(())
        }
    }

    fn counting(fail_release: bool) -> (CountingProvider, Arc<AtomicU32>, Arc<AtomicU32>) {
        let created = Arc::new(AtomicU32::new(0));
        let released = Arc::new(AtomicU32::new(0));
        let provider = CountingProvider {
            created: Arc::clone(&created),
            released: Arc::clone(&released),
            fail_release,
        };
        (provider, created, released)
    }

    #[tokio::test]
    async fn test_scope_released_exactly_once_on_success() {
        let (provider, created, released) = counting(false);
        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);
        let action = Action::method_sync(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        run_in_scope(&provider, "Sync", &action).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_scope_released_even_when_handler_fails() {
        let (provider, _, released) = counting(false);
        let action = Action::method_sync(|_| Err(HandlerError::fail("boom")));

        let err = run_in_scope(&provider, "Beta", &action).await.unwrap_err();

        assert!(matches!(err, SessionError::Invocation { ref name, .. } if name == "Beta"));
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_release_failure_outranks_handler_failure() {
        let (provider, _, _) = counting(true);
        let action = Action::method_sync(|_| Err(HandlerError::fail("boom")));

        let err = run_in_scope(&provider, "Beta", &action).await.unwrap_err();
        assert!(matches!(err, SessionError::Scope(_)));
    }

    #[tokio::test]
    async fn test_create_failure_never_invokes_action() {
        struct BrokenProvider;
        impl ScopeProvider for BrokenProvider {
            fn create_scope(&self) -> Result<Box<dyn InvocationScope>, ScopeError> {
                Err(ScopeError::Create {
                    reason: "root disposed".into(),
                })
            }
        }

        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);
        let action = Action::method_sync(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let err = run_in_scope(&BrokenProvider, "X", &action).await.unwrap_err();
        assert!(matches!(err, SessionError::Scope(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
