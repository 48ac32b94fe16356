//! # Scanned handler descriptors.
//!
//! A [`HandlerDescriptor`] is the normalized record produced by
//! [`Registry::scan`](crate::Registry::scan) for each qualifying candidate.
//! Descriptors are built once per session and immutable afterward; the
//! invocation kind is fixed here and never re-inspected at dispatch.

use std::borrow::Cow;

use crate::handlers::action::{Action, InvocationKind};

/// Immutable record describing one menu entry.
#[derive(Clone, Debug)]
pub struct HandlerDescriptor {
    id: Cow<'static, str>,
    name: Cow<'static, str>,
    order: i32,
    kind: InvocationKind,
    action: Action,
}

impl HandlerDescriptor {
    pub(crate) fn new(
        id: Cow<'static, str>,
        name: Cow<'static, str>,
        order: i32,
        action: Action,
    ) -> Self {
        Self {
            id,
            name,
            order,
            kind: action.kind(),
            action,
        }
    }

    /// Stable candidate id (for logs; not shown on the menu).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name shown on the menu.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared sort order (primary display key, ascending).
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Invocation kind resolved at scan time.
    pub fn kind(&self) -> InvocationKind {
        self.kind
    }

    /// The normalized callable for this handler.
    pub fn action(&self) -> &Action {
        &self.action
    }
}
