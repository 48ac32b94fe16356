//! # Action: one uniform callable per handler.
//!
//! [`Action`] normalizes the supported invocation shapes into a single
//! `invoke(scope) -> outcome` operation. The shape is chosen **once**, by
//! the constructor used at registration time, and recorded as a tagged
//! [`InvocationKind`] — dispatch never re-inspects a handler's shape.
//!
//! ## Constructors (matching precedence of the shapes they replace)
//! 1. [`Action::runnable`] — an explicit [`Runnable`] factory.
//! 2. [`Action::method_async`] — a zero-argument method returning a future.
//! 3. [`Action::method_sync`] — a zero-argument method returning nothing,
//!    adapted to the async interface (completes as soon as the call returns).
//!
//! A candidate registered with **no** action is simply not executable and is
//! dropped at scan time — that is a filter, not an error.
//!
//! ## Rules
//! - Every invocation produces a **fresh** future; actions hold no per-call
//!   state and may be invoked repeatedly across menu iterations.
//! - Factories and method closures receive the live [`InvocationScope`], so
//!   services they resolve belong to that scope, not to the session.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::handlers::runnable::RunnableRef;
use crate::scopes::InvocationScope;

/// Boxed future produced by one action invocation.
pub type BoxActionFuture = Pin<Box<dyn Future<Output = Result<(), HandlerError>> + Send>>;

type InvokeFn = dyn Fn(&dyn InvocationScope) -> BoxActionFuture + Send + Sync;

/// How a handler is invoked. Fixed at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvocationKind {
    /// The handler implements the explicit [`Runnable`](crate::Runnable)
    /// contract.
    Runnable,
    /// A conventionally-shaped zero-argument method returning a future.
    MethodAsync,
    /// A conventionally-shaped zero-argument synchronous method, adapted to
    /// the async interface.
    MethodSync,
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvocationKind::Runnable => "runnable",
            InvocationKind::MethodAsync => "method_async",
            InvocationKind::MethodSync => "method_sync",
        };
        f.write_str(s)
    }
}

/// Normalized handler callable.
///
/// Cheap to clone; the underlying closure is shared.
#[derive(Clone)]
pub struct Action {
    kind: InvocationKind,
    invoke: Arc<InvokeFn>,
}

impl Action {
    /// Wraps an explicit [`Runnable`](crate::Runnable) factory.
    ///
    /// The factory runs inside the invocation scope on **each** dispatch,
    /// producing a fresh handler instance whose resolved services are
    /// scope-scoped.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use async_trait::async_trait;
    /// use menuvisor::{Action, HandlerError, InvocationKind, Runnable, RunnableRef};
    ///
    /// struct Hello;
    ///
    /// #[async_trait]
    /// impl Runnable for Hello {
    ///     async fn run(&self) -> Result<(), HandlerError> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let action = Action::runnable(|_scope| Ok(Arc::new(Hello) as RunnableRef));
    /// assert_eq!(action.kind(), InvocationKind::Runnable);
    /// ```
    pub fn runnable<F>(factory: F) -> Self
    where
        F: Fn(&dyn InvocationScope) -> Result<RunnableRef, HandlerError> + Send + Sync + 'static,
    {
        Self {
            kind: InvocationKind::Runnable,
            invoke: Arc::new(move |scope| {
                let created = factory(scope);
                Box::pin(async move {
                    let handler = created?;
                    handler.run().await
                })
            }),
        }
    }

    /// Wraps a zero-argument asynchronous method.
    ///
    /// The closure resolves whatever it needs from the scope synchronously
    /// and returns the future to await.
    pub fn method_async<F, Fut>(f: F) -> Self
    where
        F: Fn(&dyn InvocationScope) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
    {
        Self {
            kind: InvocationKind::MethodAsync,
            invoke: Arc::new(move |scope| Box::pin(f(scope))),
        }
    }

    /// Wraps a zero-argument synchronous method.
    ///
    /// The call completes immediately; the returned future is already
    /// resolved when awaited.
    pub fn method_sync<F>(f: F) -> Self
    where
        F: Fn(&dyn InvocationScope) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        Self {
            kind: InvocationKind::MethodSync,
            invoke: Arc::new(move |scope| {
                let outcome = f(scope);
                Box::pin(async move { outcome })
            }),
        }
    }

    /// Returns the invocation kind chosen at construction.
    pub fn kind(&self) -> InvocationKind {
        self.kind
    }

    /// Invokes the handler against the given scope and awaits its outcome.
    pub async fn invoke(&self, scope: &dyn InvocationScope) -> Result<(), HandlerError> {
        (self.invoke)(scope).await
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("kind", &self.kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scopes::{ScopeProvider, ServiceMap};
    use crate::Runnable;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Bump(Arc<AtomicU32>);

    #[async_trait]
    impl Runnable for Bump {
        async fn run(&self) -> Result<(), HandlerError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_kind_is_fixed_by_constructor() {
        let a = Action::method_sync(|_| Ok(()));
        assert_eq!(a.kind(), InvocationKind::MethodSync);

        let b = Action::method_async(|_| async { Ok(()) });
        assert_eq!(b.kind(), InvocationKind::MethodAsync);

        let c = Action::runnable(|_| Err(HandlerError::fail("unused")));
        assert_eq!(c.kind(), InvocationKind::Runnable);
    }

    #[tokio::test]
    async fn test_sync_method_completes_without_error() {
        let root = ServiceMap::new();
        let scope = root.create_scope().unwrap();

        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);
        let action = Action::method_sync(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        action.invoke(scope.as_ref()).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        scope.release().unwrap();
    }

    #[tokio::test]
    async fn test_runnable_factory_builds_instance_inside_scope() {
        let root = ServiceMap::new().singleton(AtomicU32::new(0));
        let scope = root.create_scope().unwrap();

        let action = Action::runnable(|scope| {
            let shared: Arc<AtomicU32> = scope
                .service()
                .ok_or_else(|| HandlerError::fail("counter not registered"))?;
            Ok(Arc::new(Bump(shared)) as RunnableRef)
        });

        action.invoke(scope.as_ref()).await.unwrap();
        action.invoke(scope.as_ref()).await.unwrap();

        let counter: Arc<AtomicU32> = scope.service().unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        scope.release().unwrap();
    }

    #[tokio::test]
    async fn test_async_method_awaits_to_completion() {
        let root = ServiceMap::new();
        let scope = root.create_scope().unwrap();

        let done = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&done);
        let action = Action::method_async(move |_| {
            let seen = Arc::clone(&seen);
            async move {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
                seen.store(1, Ordering::SeqCst);
                Ok(())
            }
        });

        action.invoke(scope.as_ref()).await.unwrap();
        assert_eq!(done.load(Ordering::SeqCst), 1, "future fully awaited");
        scope.release().unwrap();
    }
}
