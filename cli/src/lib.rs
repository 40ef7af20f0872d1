//! Command orchestration for the ve chain CLI.
//!
//! Commands do not build network clients themselves. A pre-run hook
//! ([`resolver`]) discovers a client once per command tree and stores it in
//! the request scoped [`context::Context`]; handlers then pull it back out to
//! resolve deposits ([`deposit`]), build page requests ([`pagination`]) and
//! issue their query or transaction. Long running subcommands are wrapped in
//! [`runner::run_for_signal`].

pub mod config;
pub mod context;
pub mod deposit;
pub mod flags;
pub mod logging;
pub mod pagination;
pub mod resolver;
pub mod runner;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use context::{Context, ContextError, ContextKey};
pub use resolver::{Discover, DiscoveryOptions, Invocation};
