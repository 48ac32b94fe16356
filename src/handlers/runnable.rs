//! # Runnable: the explicit handler capability.
//!
//! A type that implements [`Runnable`] declares the async zero-argument
//! action contract directly. It is the first (highest-precedence) of the
//! supported invocation shapes; the conventionally-shaped method variants
//! are adapted through [`Action`](crate::Action) constructors instead.
//!
//! The shared handle type is [`RunnableRef`], an `Arc<dyn Runnable>`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandlerError;

/// # Asynchronous zero-argument handler contract.
///
/// Instances are produced by an explicit factory running inside the current
/// invocation scope, so any services the factory resolves are scope-scoped.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use menuvisor::{HandlerError, Runnable};
///
/// struct SeedDatabase {
///     count: u32,
/// }
///
/// #[async_trait]
/// impl Runnable for SeedDatabase {
///     async fn run(&self) -> Result<(), HandlerError> {
///         // seed `self.count` rows...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Runnable: Send + Sync + 'static {
    /// Executes the handler until completion.
    async fn run(&self) -> Result<(), HandlerError>;
}

/// Shared reference to a runnable handler instance.
pub type RunnableRef = Arc<dyn Runnable>;
