//! # In-memory reference provider.
//!
//! [`ServiceMap`] is a small [`ScopeProvider`] used by demos and tests.
//! It supports two lifetimes:
//!
//! - **singleton** — one instance shared by every scope for the session;
//! - **scoped** — constructed on first resolution within a scope, cached for
//!   that scope, dropped when the scope is released.
//!
//! Real deployments adapt their own container behind the
//! [`ScopeProvider`] / [`InvocationScope`] traits instead.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use menuvisor::{ScopeProvider, ServiceMap};
//!
//! struct Db(u32);
//!
//! let root = Arc::new(ServiceMap::new().scoped(|| Db(42)));
//! let scope = root.create_scope().unwrap();
//! let db: Arc<Db> = scope.service().unwrap();
//! assert_eq!(db.0, 42);
//! scope.release().unwrap();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::ScopeError;
use crate::scopes::provider::{InvocationScope, ScopeProvider, ServiceRef};

type Factory = Arc<dyn Fn() -> ServiceRef + Send + Sync>;

/// Root provider backed by typed registration maps.
#[derive(Default)]
pub struct ServiceMap {
    singletons: HashMap<TypeId, ServiceRef>,
    factories: HashMap<TypeId, Factory>,
}

impl ServiceMap {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session-lifetime singleton instance.
    pub fn singleton<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.singletons.insert(TypeId::of::<T>(), Arc::new(value));
        self
    }

    /// Registers a per-scope factory. The factory runs at most once per
    /// scope; the instance is owned by (and dies with) that scope.
    pub fn scoped<T, F>(mut self, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.factories
            .insert(TypeId::of::<T>(), Arc::new(move || Arc::new(factory())));
        self
    }
}

impl ScopeProvider for ServiceMap {
    fn create_scope(&self) -> Result<Box<dyn InvocationScope>, ScopeError> {
        Ok(Box::new(MapScope {
            singletons: self.singletons.clone(),
            factories: self.factories.clone(),
            created: Mutex::new(HashMap::new()),
        }))
    }
}

/// One invocation's view of the [`ServiceMap`].
struct MapScope {
    singletons: HashMap<TypeId, ServiceRef>,
    factories: HashMap<TypeId, Factory>,
    created: Mutex<HashMap<TypeId, ServiceRef>>,
}

impl InvocationScope for MapScope {
    fn get_or_create(&self, ty: TypeId) -> Option<ServiceRef> {
        if let Some(shared) = self.singletons.get(&ty) {
            return Some(Arc::clone(shared));
        }

        let mut created = self.created.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = created.get(&ty) {
            return Some(Arc::clone(cached));
        }

        let factory = self.factories.get(&ty)?;
        let instance = factory();
        created.insert(ty, Arc::clone(&instance));
        Some(instance)
    }

    fn release(self: Box<Self>) -> Result<(), ScopeError> {
        let created = self.created.lock().unwrap_or_else(|e| e.into_inner());
        tracing::debug!(scoped_services = created.len(), "scope released");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);
    struct Tag(&'static str);

    #[test]
    fn test_singleton_shared_across_scopes() {
        let root = ServiceMap::new().singleton(Tag("root"));

        let a = root.create_scope().unwrap();
        let b = root.create_scope().unwrap();
        let ta: Arc<Tag> = a.service().unwrap();
        let tb: Arc<Tag> = b.service().unwrap();

        assert!(Arc::ptr_eq(&ta, &tb), "singleton must be one instance");
    }

    #[test]
    fn test_scoped_fresh_per_scope_cached_within() {
        let root = ServiceMap::new().scoped(|| Counter(7));

        let scope = root.create_scope().unwrap();
        let first: Arc<Counter> = scope.service().unwrap();
        let again: Arc<Counter> = scope.service().unwrap();
        assert!(Arc::ptr_eq(&first, &again), "cached within one scope");

        let other = root.create_scope().unwrap();
        let fresh: Arc<Counter> = other.service().unwrap();
        assert!(!Arc::ptr_eq(&first, &fresh), "fresh instance per scope");
    }

    #[test]
    fn test_unknown_type_resolves_to_none() {
        let root = ServiceMap::new();
        let scope = root.create_scope().unwrap();
        assert!(scope.service::<Counter>().is_none());
        scope.release().unwrap();
    }
}
