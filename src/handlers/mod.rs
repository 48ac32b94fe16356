//! # Handler model: candidates, actions, descriptors.
//!
//! This module provides the handler-side types:
//! - [`Runnable`] - the explicit async handler contract
//! - [`Action`] / [`InvocationKind`] - the normalized callable and its tag
//! - [`HandlerSpec`] / [`MenuMeta`] - explicit candidate registrations
//! - [`Registry`] - the scan producing ordered [`HandlerDescriptor`]s

mod action;
mod descriptor;
mod registry;
mod runnable;
mod spec;

pub use action::{Action, BoxActionFuture, InvocationKind};
pub use descriptor::HandlerDescriptor;
pub use registry::Registry;
pub use runnable::{Runnable, RunnableRef};
pub use spec::{HandlerSpec, MenuMeta};
