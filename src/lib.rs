//! # menuvisor
//!
//! **Menuvisor** is a lightweight bootstrap harness for console programs.
//!
//! It lets a program obtain its dependencies from an injected-services
//! container and, optionally, present a discoverable multi-option menu
//! instead of a single fixed entry point. Handlers are registered
//! explicitly, ordered deterministically, and each selection runs inside an
//! isolated per-invocation resource scope with failure isolation.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ HandlerSpec  │   │ HandlerSpec  │   │ HandlerSpec  │
//!     │ (id, menu,   │   │              │   │              │
//!     │  action)     │   │              │   │              │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Registry::scan()                                             │
//! │  - drop candidates without menu metadata or an action         │
//! │  - sort by (order asc, name asc)   → Vec<HandlerDescriptor>   │
//! │  - empty result → NoHandlersFound (menu never shown)          │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  MenuSession::run()   (strictly sequential)                   │
//! │                                                               │
//! │  Rendering ─► AwaitingInput ─► Dispatching ─► Rendering       │
//! │                    │                │                         │
//! │              empty input        non-looping                   │
//! │                    ▼                ▼                         │
//! │                 Terminated ◄────────┘                         │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                ▼
//!                    run_in_scope(action, provider)
//!                      ├─► ScopeProvider::create_scope()
//!                      ├─► Action::invoke(scope)   (awaited in full)
//!                      └─► scope.release()         (unconditional)
//! ```
//!
//! ## Features
//! | Area            | Description                                             | Key types / traits                       |
//! |-----------------|---------------------------------------------------------|------------------------------------------|
//! | **Handlers**    | Explicit candidate registration with tagged shapes.     | [`HandlerSpec`], [`Action`], [`Runnable`]|
//! | **Menu**        | Deterministic scan and ordering.                        | [`Registry`], [`HandlerDescriptor`]      |
//! | **Session**     | The interactive loop and the one-shot variant.          | [`MenuSession`], [`bootstrap`]           |
//! | **Scopes**      | Per-dispatch resource boundaries.                       | [`ScopeProvider`], [`InvocationScope`]   |
//! | **Errors**      | Typed failures with an explicit propagation policy.     | [`SessionError`], [`HandlerError`]       |
//! | **Settings**    | Layered immutable startup configuration.                | [`Settings`], [`SessionConfig`]          |
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use menuvisor::{Action, HandlerSpec, MenuSession, ServiceMap, SessionConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(ServiceMap::new().scoped(|| String::from("scoped service")));
//!
//!     let cfg = SessionConfig {
//!         title: Some("Tools".into()),
//!         looping: true,
//!     };
//!
//!     let session = MenuSession::builder(cfg)
//!         .register(
//!             HandlerSpec::new("greet")
//!                 .with_menu("Greet", 0)
//!                 .with_action(Action::method_sync(|scope| {
//!                     let svc: Arc<String> = scope.service().expect("registered above");
//!                     println!("hello from {svc}");
//!                     Ok(())
//!                 })),
//!         )
//!         .build(provider)?;
//!
//!     session.run().await?;
//!     Ok(())
//! }
//! ```

mod error;
mod handlers;
mod scopes;
mod session;
mod settings;

// ---- Public re-exports ----

pub use error::{HandlerError, ScopeError, SessionError};
pub use handlers::{
    Action, BoxActionFuture, HandlerDescriptor, HandlerSpec, InvocationKind, MenuMeta, Registry,
    Runnable, RunnableRef,
};
pub use scopes::{run_in_scope, InvocationScope, ScopeProvider, ServiceMap, ServiceRef};
pub use session::{bootstrap, Console, MenuSession, MenuSessionBuilder, SessionConfig, StdConsole};
pub use settings::{Settings, SettingsBuilder};
