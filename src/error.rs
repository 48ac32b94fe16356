//! Error types used by the menu session and handlers.
//!
//! This module defines three error enums:
//!
//! - [`SessionError`] — errors raised by the session engine itself.
//! - [`HandlerError`] — errors raised by individual handler executions.
//! - [`ScopeError`] — failures of the resource-scope lifecycle.
//!
//! All types provide an `as_label` helper for logging, and [`SessionError`]
//! additionally maps to a process exit code via [`SessionError::exit_code`].
//!
//! ## Propagation policy
//! Only [`SessionError::Invocation`] is ever recovered, and only by a looping
//! session. Everything else terminates the session: an interactive menu should
//! survive one bad selection, but a one-shot run should fail loudly and a
//! resource-lifecycle bug must never be masked.

use thiserror::Error;

/// # Errors produced by the session engine.
///
/// These represent failures of the menu machinery: an empty menu, a failed
/// dispatch, a broken resource scope, or console I/O going away.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SessionError {
    /// No registered candidate carried both menu metadata and an action.
    /// Fatal at session start; the menu is never rendered.
    #[error("no handlers matched the menu criteria")]
    NoHandlersFound,

    /// A dispatched handler failed. Caught and reported by looping sessions;
    /// propagates uncaught in one-shot mode.
    #[error("handler '{name}' failed")]
    Invocation {
        /// Display name of the handler that failed.
        name: String,
        /// The underlying handler failure.
        #[source]
        source: HandlerError,
    },

    /// Scope creation or release failed. Always fatal, in both modes.
    #[error("resource scope failure")]
    Scope(#[from] ScopeError),

    /// Console input or output failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use menuvisor::SessionError;
    ///
    /// assert_eq!(SessionError::NoHandlersFound.as_label(), "no_handlers_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SessionError::NoHandlersFound => "no_handlers_found",
            SessionError::Invocation { .. } => "handler_invocation_failed",
            SessionError::Scope(_) => "resource_scope_failure",
            SessionError::Io(_) => "console_io_failed",
        }
    }

    /// Maps the error to a process exit code for binaries.
    ///
    /// - `Invocation` → 1 (the handler itself failed)
    /// - `NoHandlersFound` → 2 (startup misconfiguration)
    /// - `Scope` → 3 (resource lifecycle integrity violated)
    /// - `Io` → 4 (terminal gone)
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionError::Invocation { .. } => 1,
            SessionError::NoHandlersFound => 2,
            SessionError::Scope(_) => 3,
            SessionError::Io(_) => 4,
        }
    }

    /// Renders the error with its full cause chain, one cause per line.
    ///
    /// Used by looping sessions to report a dispatch failure on the console
    /// before continuing with the next iteration.
    ///
    /// # Example
    /// ```
    /// use menuvisor::{HandlerError, SessionError};
    ///
    /// let err = SessionError::Invocation {
    ///     name: "Beta".into(),
    ///     source: HandlerError::fail("boom"),
    /// };
    /// let text = err.render_chain();
    /// assert!(text.contains("handler 'Beta' failed"));
    /// assert!(text.contains("boom"));
    /// ```
    pub fn render_chain(&self) -> String {
        let mut out = format!("[{}] {self}", self.as_label());
        let mut cause = std::error::Error::source(self);
        while let Some(c) = cause {
            out.push_str("\n  caused by: ");
            out.push_str(&c.to_string());
            cause = c.source();
        }
        out
    }
}

/// # Errors produced by handler execution.
///
/// Raised from handler bodies and factories. Wrapped into
/// [`SessionError::Invocation`] by the dispatch path.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Plain execution failure with a message.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Failure wrapping another error as its cause (chain preserved).
    #[error("{message}")]
    Chained {
        /// Context message describing what was being attempted.
        message: String,
        /// The underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl HandlerError {
    /// Creates a plain failure from a message.
    pub fn fail(error: impl Into<String>) -> Self {
        HandlerError::Fail {
            error: error.into(),
        }
    }

    /// Creates a failure chaining `source` as the cause.
    pub fn chained(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        HandlerError::Chained {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Fail { .. } => "handler_failed",
            HandlerError::Chained { .. } => "handler_failed_chained",
        }
    }
}

/// # Failures of the resource-scope lifecycle.
///
/// Creating or releasing an invocation scope must never fail silently;
/// these errors always propagate, in both looping and one-shot modes.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ScopeError {
    /// The provider could not build a new invocation scope.
    #[error("failed to create scope: {reason}")]
    Create {
        /// Provider-supplied description of the failure.
        reason: String,
    },

    /// The scope could not release its owned resources.
    #[error("failed to release scope: {reason}")]
    Release {
        /// Provider-supplied description of the failure.
        reason: String,
    },
}

impl ScopeError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ScopeError::Create { .. } => "scope_create_failed",
            ScopeError::Release { .. } => "scope_release_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_chain_includes_all_causes() {
        let io = std::io::Error::other("disk on fire");
        let err = SessionError::Invocation {
            name: "Backup".into(),
            source: HandlerError::chained("writing snapshot", io),
        };

        let text = err.render_chain();
        assert!(text.starts_with("[handler_invocation_failed]"));
        assert!(text.contains("handler 'Backup' failed"));
        assert!(text.contains("caused by: writing snapshot"));
        assert!(text.contains("caused by: disk on fire"));
    }

    #[test]
    fn test_exit_codes_are_stable() {
        assert_eq!(SessionError::NoHandlersFound.exit_code(), 2);
        let scope = SessionError::Scope(ScopeError::Create {
            reason: "no root".into(),
        });
        assert_eq!(scope.exit_code(), 3);
    }
}
