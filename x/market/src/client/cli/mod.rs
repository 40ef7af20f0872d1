pub mod deposit;
pub mod query;
pub mod tx;

pub use deposit::detect_bid_deposit;
