//! Flags shared by many commands.
//!
//! Module specific flags (deposit, pagination) live next to the code that
//! consumes them: [`crate::deposit::DepositArgs`] and
//! [`crate::pagination::PaginationArgs`].

use std::path::PathBuf;

use clap::Args;
use url::Url;

use crate::logging::{LogFormat, LogLevel};

pub const FLAG_NODE: &str = "node";
pub const FLAG_CHAIN_ID: &str = "chain-id";
pub const FLAG_HOME: &str = "home";
pub const FLAG_DEPOSIT: &str = "deposit";
pub const FLAG_DEPOSIT_SOURCES: &str = "deposit-sources";
pub const FLAG_PAGE_KEY: &str = "page-key";
pub const FLAG_OFFSET: &str = "offset";
pub const FLAG_LIMIT: &str = "limit";
pub const FLAG_COUNT_TOTAL: &str = "count-total";
pub const FLAG_PAGE: &str = "page";
pub const FLAG_REVERSE: &str = "reverse";

/// Persistent flags registered on the root command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Directory for config and data
    #[arg(long = FLAG_HOME, global = true, env = "VE_HOME")]
    pub home: Option<PathBuf>,

    /// The network chain ID
    #[arg(long = FLAG_CHAIN_ID, global = true, env = "VE_CHAIN_ID")]
    pub chain_id: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Endpoint selection for commands that reach a node.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeArgs {
    /// <host>:<port> to CometBFT RPC interface for this chain
    #[arg(long = FLAG_NODE, env = "VE_NODE")]
    pub node: Option<Url>,
}
