//! # Resource-provider boundary.
//!
//! The dependency container is an external collaborator. This crate only
//! speaks three verbs to it:
//!
//! - [`ScopeProvider::create_scope`] — derive a fresh invocation scope from
//!   the long-lived root provider;
//! - [`InvocationScope::get_or_create`] — resolve (or construct) a service
//!   inside the current scope;
//! - [`InvocationScope::release`] — release everything the scope owns.
//!
//! ## Contract
//! - The root provider is shared read-only for the session's lifetime.
//! - Exactly one scope is in flight at a time; scopes are never reused or
//!   held across menu iterations.
//! - `release` consumes the scope, so it can only ever run once.
//!
//! A small in-crate implementation lives in [`ServiceMap`](crate::ServiceMap);
//! production callers typically adapt their own container behind these traits.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::error::ScopeError;

/// Shared handle to a resolved service instance.
pub type ServiceRef = Arc<dyn Any + Send + Sync>;

/// Long-lived root resource provider from which invocation scopes derive.
pub trait ScopeProvider: Send + Sync + 'static {
    /// Builds a fresh invocation scope.
    fn create_scope(&self) -> Result<Box<dyn InvocationScope>, ScopeError>;
}

/// A resource boundary lasting exactly one handler execution.
///
/// Owns every service constructed within it; releasing the scope releases
/// them all.
pub trait InvocationScope: Send {
    /// Resolves the service registered under `ty`, constructing it within
    /// this scope when the provider has a factory for it. Returns `None`
    /// for unknown types.
    fn get_or_create(&self, ty: TypeId) -> Option<ServiceRef>;

    /// Releases all scope-owned resources. Consumes the scope, so release
    /// happens exactly once.
    fn release(self: Box<Self>) -> Result<(), ScopeError>;
}

impl dyn InvocationScope + '_ {
    /// Typed convenience over [`InvocationScope::get_or_create`].
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use menuvisor::{ScopeProvider, ServiceMap};
    ///
    /// struct Greeter(&'static str);
    ///
    /// let root = Arc::new(ServiceMap::new().singleton(Greeter("hello")));
    /// let scope = root.create_scope().unwrap();
    /// let greeter: Arc<Greeter> = scope.service().unwrap();
    /// assert_eq!(greeter.0, "hello");
    /// ```
    pub fn service<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.get_or_create(TypeId::of::<T>())
            .and_then(|raw| raw.downcast::<T>().ok())
    }
}
