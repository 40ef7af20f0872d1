pub mod deposit;
pub mod query;
pub mod tx;

pub use deposit::detect_deployment_deposit;
