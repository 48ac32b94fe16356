//! # Session engine: the loop, its config, and the one-shot variant.
//!
//! This module provides the interactive side of the crate:
//! - [`MenuSession`] / [`MenuSessionBuilder`] - the read-eval loop
//! - [`SessionConfig`] - explicit immutable session configuration
//! - [`Console`] / [`StdConsole`] - the console I/O boundary
//! - [`bootstrap`] - the non-menu one-shot entry point

pub mod bootstrap;
mod config;
mod console;
mod menu;

pub use config::SessionConfig;
pub use console::{Console, StdConsole};
pub use menu::{MenuSession, MenuSessionBuilder};
