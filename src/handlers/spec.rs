//! # Handler candidate definitions.
//!
//! [`HandlerSpec`] is the explicit registration record for one candidate
//! handler: a stable id, optional declared menu metadata ([`MenuMeta`]),
//! and an optional normalized [`Action`]. Candidates missing either the
//! metadata or the action are silently excluded at scan time.
//!
//! ## Example
//! ```
//! use menuvisor::{Action, HandlerSpec};
//!
//! let spec = HandlerSpec::new("seed_db")
//!     .with_menu("Seed Database", 10)
//!     .with_action(Action::method_sync(|_scope| Ok(())));
//!
//! assert!(spec.menu().is_some());
//! assert!(spec.action().is_some());
//! ```

use std::borrow::Cow;

use crate::handlers::action::Action;

/// Declared menu metadata: display name and numeric sort order.
#[derive(Clone, Debug)]
pub struct MenuMeta {
    name: Cow<'static, str>,
    order: i32,
}

impl MenuMeta {
    /// Creates metadata with the given display name and sort order.
    pub fn new(name: impl Into<Cow<'static, str>>, order: i32) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }

    /// Display name shown on the menu.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary sort key (ascending).
    pub fn order(&self) -> i32 {
        self.order
    }
}

/// One candidate handler definition.
#[derive(Clone, Debug)]
pub struct HandlerSpec {
    id: Cow<'static, str>,
    menu: Option<MenuMeta>,
    action: Option<Action>,
}

impl HandlerSpec {
    /// Creates a bare candidate with a stable id (used in logs).
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            menu: None,
            action: None,
        }
    }

    /// Declares menu metadata. Candidates without it never reach the menu.
    pub fn with_menu(mut self, name: impl Into<Cow<'static, str>>, order: i32) -> Self {
        self.menu = Some(MenuMeta::new(name, order));
        self
    }

    /// Attaches the normalized action. Candidates without one are not
    /// executable and are dropped at scan time.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Stable candidate id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Declared menu metadata, if any.
    pub fn menu(&self) -> Option<&MenuMeta> {
        self.menu.as_ref()
    }

    /// Normalized action, if the candidate is executable.
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }
}
