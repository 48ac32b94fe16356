//! # MenuSession: the interactive read-eval loop.
//!
//! [`MenuSession`] owns the ordered descriptors, the root resource
//! provider, and the console, and drives the selection loop as an explicit
//! state machine:
//!
//! ```text
//! Idle ──► Rendering ──► AwaitingInput ──► Dispatching ──► Rendering
//!              ▲               │                │
//!              │        empty input / EOF       │ non-looping
//!              │               ▼                ▼
//!       invalid input      Terminated ◄─────────┘
//!       (looping only)
//! ```
//!
//! ## Loop rules
//! - The menu is a 1-based numbered list of the ordered descriptors,
//!   preceded by the optional title on the **first** render only.
//! - Input equal to the empty string (or EOF) terminates the session,
//!   regardless of the looping flag.
//! - Input that parses to an integer in `[1, N]` dispatches that entry.
//! - Any other input is silently ignored — no error message — and the menu
//!   re-renders.
//! - A non-looping session performs **exactly one** iteration
//!   (render, read, dispatch if valid) and then terminates unconditionally.
//! - Dispatch suspends the loop until the invoked action completes; there
//!   are no concurrent dispatches and no fire-and-forget.
//!
//! ## Failure containment
//! In looping mode a dispatch failure is caught, rendered in full (kind,
//! message, cause chain) to the console, and the loop continues. In
//! non-looping mode it propagates to the caller. Scope lifecycle failures
//! always propagate.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use menuvisor::{Action, HandlerSpec, MenuSession, ServiceMap, SessionConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(ServiceMap::new());
//!
//!     let session = MenuSession::builder(SessionConfig::default())
//!         .register(
//!             HandlerSpec::new("hello")
//!                 .with_menu("Say Hello", 0)
//!                 .with_action(Action::method_sync(|_| {
//!                     println!("hello!");
//!                     Ok(())
//!                 })),
//!         )
//!         .build(provider)?;
//!
//!     session.run().await?;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use crate::error::SessionError;
use crate::handlers::{HandlerDescriptor, HandlerSpec, Registry};
use crate::scopes::{run_in_scope, ScopeProvider};
use crate::session::config::SessionConfig;
use crate::session::console::{Console, StdConsole};

/// Loop state. One transition per iteration of [`MenuSession::run`].
#[derive(Debug)]
enum LoopState {
    Rendering { first: bool },
    AwaitingInput,
    Dispatching(usize),
    Terminated,
}

/// What one line of input means for the loop.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    /// Empty input or EOF: terminate the session.
    Quit,
    /// A valid 1-based selection, already converted to a 0-based index.
    Pick(usize),
    /// Unparsable or out-of-range input: a no-op, never surfaced.
    Ignored,
}

/// Builder for constructing a [`MenuSession`].
pub struct MenuSessionBuilder {
    cfg: SessionConfig,
    registry: Registry,
    console: Option<Arc<dyn Console>>,
}

impl MenuSessionBuilder {
    fn new(cfg: SessionConfig) -> Self {
        Self {
            cfg,
            registry: Registry::new(),
            console: None,
        }
    }

    /// Registers one candidate handler.
    pub fn register(mut self, spec: HandlerSpec) -> Self {
        self.registry = self.registry.register(spec);
        self
    }

    /// Replaces the internal registry with a pre-built one.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the console. Defaults to [`StdConsole`].
    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    /// Scans the registered candidates and builds the session.
    ///
    /// Fails with [`SessionError::NoHandlersFound`] when no candidate
    /// qualifies — the session must not start with an empty menu.
    pub fn build(self, provider: Arc<dyn ScopeProvider>) -> Result<MenuSession, SessionError> {
        let descriptors = self.registry.scan()?;
        Ok(MenuSession {
            cfg: self.cfg,
            descriptors,
            provider,
            console: self.console.unwrap_or_else(|| Arc::new(StdConsole::new())),
        })
    }
}

/// Interactive menu session over a fixed, ordered set of handlers.
pub struct MenuSession {
    cfg: SessionConfig,
    descriptors: Vec<HandlerDescriptor>,
    provider: Arc<dyn ScopeProvider>,
    console: Arc<dyn Console>,
}

impl MenuSession {
    /// Starts a builder with the given configuration.
    pub fn builder(cfg: SessionConfig) -> MenuSessionBuilder {
        MenuSessionBuilder::new(cfg)
    }

    /// The ordered descriptors this session displays.
    pub fn descriptors(&self) -> &[HandlerDescriptor] {
        &self.descriptors
    }

    /// Runs the session until termination.
    ///
    /// Returns `Ok(())` on normal termination (empty-input sentinel, EOF,
    /// or the single iteration of a non-looping session). Errors per the
    /// propagation policy documented on [`SessionError`].
    pub async fn run(&self) -> Result<(), SessionError> {
        let mut state = LoopState::Rendering { first: true };

        loop {
            state = match state {
                LoopState::Rendering { first } => {
                    self.render(first).await?;
                    LoopState::AwaitingInput
                }
                LoopState::AwaitingInput => match self.read_selection().await? {
                    Selection::Quit => LoopState::Terminated,
                    Selection::Pick(idx) => LoopState::Dispatching(idx),
                    Selection::Ignored => {
                        if self.cfg.looping {
                            LoopState::Rendering { first: false }
                        } else {
                            LoopState::Terminated
                        }
                    }
                },
                LoopState::Dispatching(idx) => {
                    self.dispatch(idx).await?;
                    if self.cfg.looping {
                        // Blank separator between the dispatch output and
                        // the next render.
                        self.console.write_line("").await?;
                        LoopState::Rendering { first: false }
                    } else {
                        LoopState::Terminated
                    }
                }
                LoopState::Terminated => break,
            };
        }

        tracing::debug!("session terminated");
        Ok(())
    }

    /// Prints the numbered menu; the title goes out on the first render only.
    async fn render(&self, first: bool) -> Result<(), SessionError> {
        if first {
            if let Some(title) = &self.cfg.title {
                self.console.write_line(title).await?;
            }
        }
        for (idx, descriptor) in self.descriptors.iter().enumerate() {
            let line = format!("{}. {}", idx + 1, descriptor.name());
            self.console.write_line(&line).await?;
        }
        Ok(())
    }

    /// Blocks for one line of input and classifies it.
    async fn read_selection(&self) -> Result<Selection, SessionError> {
        let line = self.console.read_line().await?;
        Ok(self.classify(line.as_deref()))
    }

    fn classify(&self, line: Option<&str>) -> Selection {
        let Some(line) = line else {
            return Selection::Quit;
        };
        if line.is_empty() {
            return Selection::Quit;
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=self.descriptors.len()).contains(&n) => Selection::Pick(n - 1),
            _ => Selection::Ignored,
        }
    }

    /// Dispatches the selected descriptor through the scope manager.
    ///
    /// In looping mode a handler failure is rendered to the console and
    /// swallowed; everything else propagates.
    async fn dispatch(&self, idx: usize) -> Result<(), SessionError> {
        let descriptor = &self.descriptors[idx];
        let result = run_in_scope(
            self.provider.as_ref(),
            descriptor.name(),
            descriptor.action(),
        )
        .await;

        match result {
            Ok(()) => Ok(()),
            Err(err @ SessionError::Invocation { .. }) if self.cfg.looping => {
                tracing::warn!(handler = descriptor.name(), "dispatch failed, continuing");
                self.console.write_line(&err.render_chain()).await?;
                Ok(())
            }
            Err(other) => Err(other),
        }
    }
}
