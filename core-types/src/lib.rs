//! Plain value types shared by the CLI crates.
//!
//! Nothing here talks to the network. Coins, deposits and page requests are
//! parsed and validated here so that every crate above agrees on the same
//! normalisation rules.

pub mod coin;
pub mod deposit;
pub mod denom;
pub mod errors;
pub mod pagination;
pub mod testing;

pub use coin::UnsignedCoin;
pub use denom::Denom;
pub use deposit::{Deposit, Source};
pub use pagination::PageRequest;
