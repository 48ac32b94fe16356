//! # Invocation scopes and the provider boundary.
//!
//! This module provides the resource-scope side of dispatch:
//! - [`ScopeProvider`] / [`InvocationScope`] - the container-facing traits
//! - [`ServiceMap`] - a small in-memory reference provider
//! - [`run_in_scope`] - one dispatch, one scope, unconditional release

mod manager;
mod provider;
mod simple;

pub use manager::run_in_scope;
pub use provider::{InvocationScope, ScopeProvider, ServiceRef};
pub use simple::ServiceMap;
