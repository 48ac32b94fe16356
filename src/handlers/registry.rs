//! # Registry: explicit candidate list and menu scan.
//!
//! The [`Registry`] replaces runtime discovery with an explicit
//! registration list: callers register [`HandlerSpec`] candidates, and
//! [`Registry::scan`] turns the qualifying ones into ordered
//! [`HandlerDescriptor`]s.
//!
//! ## Scan flow
//! ```text
//! HandlerSpec[0..n] ──► scan()
//!     ├─► drop candidates without menu metadata   (silent filter)
//!     ├─► drop candidates without an action       (silent filter)
//!     ├─► empty result ──► Err(NoHandlersFound)
//!     └─► sort by (order asc, name asc) ──► Vec<HandlerDescriptor>
//! ```
//!
//! ## Rules
//! - Exclusion is a filter, not an error; only the empty end result fails.
//! - The ordering is a total order: ties on `order` break on the display
//!   name (case-sensitive lexicographic), so repeated scans of the same
//!   registrations always produce the same displayed sequence regardless
//!   of registration order.

use std::borrow::Cow;

use crate::error::SessionError;
use crate::handlers::descriptor::HandlerDescriptor;
use crate::handlers::spec::HandlerSpec;

/// Explicit registration list of candidate handlers.
#[derive(Default)]
pub struct Registry {
    candidates: Vec<HandlerSpec>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one candidate.
    pub fn register(mut self, spec: HandlerSpec) -> Self {
        self.candidates.push(spec);
        self
    }

    /// Number of registered candidates (qualifying or not).
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Produces the ordered descriptor list for a menu session.
    ///
    /// Candidates lacking menu metadata or an action are dropped silently.
    /// Fails with [`SessionError::NoHandlersFound`] when nothing qualifies,
    /// so a session never starts with an empty menu.
    pub fn scan(&self) -> Result<Vec<HandlerDescriptor>, SessionError> {
        let mut descriptors: Vec<HandlerDescriptor> = Vec::new();

        for spec in &self.candidates {
            let (Some(menu), Some(action)) = (spec.menu(), spec.action()) else {
                tracing::debug!(id = spec.id(), "candidate excluded from menu");
                continue;
            };
            descriptors.push(HandlerDescriptor::new(
                Cow::Owned(spec.id().to_owned()),
                Cow::Owned(menu.name().to_owned()),
                menu.order(),
                action.clone(),
            ));
        }

        if descriptors.is_empty() {
            return Err(SessionError::NoHandlersFound);
        }

        descriptors.sort_by(|a, b| {
            a.order()
                .cmp(&b.order())
                .then_with(|| a.name().cmp(b.name()))
        });

        tracing::debug!(
            registered = self.candidates.len(),
            qualified = descriptors.len(),
            "menu scan complete"
        );
        Ok(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::action::{Action, InvocationKind};

    fn noop() -> Action {
        Action::method_sync(|_| Ok(()))
    }

    fn entry(name: &'static str, order: i32) -> HandlerSpec {
        HandlerSpec::new(name)
            .with_menu(name, order)
            .with_action(noop())
    }

    #[test]
    fn test_order_then_name_total_order() {
        let descriptors = Registry::new()
            .register(entry("Beta", 0))
            .register(entry("Alpha", 0))
            .register(entry("Gamma", -1))
            .scan()
            .unwrap();

        let names: Vec<&str> = descriptors.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn test_order_independent_of_registration_order() {
        let forward = Registry::new()
            .register(entry("Alpha", 2))
            .register(entry("Beta", 1))
            .scan()
            .unwrap();
        let reversed = Registry::new()
            .register(entry("Beta", 1))
            .register(entry("Alpha", 2))
            .scan()
            .unwrap();

        let a: Vec<&str> = forward.iter().map(|d| d.name()).collect();
        let b: Vec<&str> = reversed.iter().map(|d| d.name()).collect();
        assert_eq!(a, b);
        assert_eq!(a, vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_unqualified_candidates_are_silently_dropped() {
        let descriptors = Registry::new()
            .register(HandlerSpec::new("no_meta").with_action(noop()))
            .register(HandlerSpec::new("no_action").with_menu("Ghost", 0))
            .register(entry("Real", 0))
            .scan()
            .unwrap();

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name(), "Real");
    }

    #[test]
    fn test_empty_scan_fails() {
        let err = Registry::new()
            .register(HandlerSpec::new("inert"))
            .scan()
            .unwrap_err();
        assert!(matches!(err, SessionError::NoHandlersFound));

        let err = Registry::new().scan().unwrap_err();
        assert!(matches!(err, SessionError::NoHandlersFound));
    }

    #[test]
    fn test_kind_resolved_once_at_scan() {
        let descriptors = Registry::new()
            .register(
                HandlerSpec::new("async")
                    .with_menu("Async", 0)
                    .with_action(Action::method_async(|_| async { Ok(()) })),
            )
            .scan()
            .unwrap();

        assert_eq!(descriptors[0].kind(), InvocationKind::MethodAsync);
    }
}
