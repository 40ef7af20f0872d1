//! Market module client: default bid deposit lookup and the `create-bid` and
//! `list-bids` commands.

pub mod client;
pub mod types;

pub use client::cli::deposit::BidDepositQuerier;
pub use ::client::query::market::Params;
