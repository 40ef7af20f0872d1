//! Deployment module client: default deposit lookup and the `create` and
//! `list` commands.

pub mod client;
pub mod types;

pub use client::cli::deposit::{DeploymentDepositQuerier, DEFAULT_DEPOSIT_DENOM};
pub use ::client::query::deployment::Params;
