use core_types::{coin::UnsignedCoin, deposit::Deposit, pagination::PageRequest};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BidState {
    Open,
    Active,
    Lost,
    Closed,
}

/// Order a bid is placed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderId {
    pub owner: String,
    pub dseq: u64,
    pub gseq: u32,
    pub oseq: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidFilters {
    pub owner: Option<String>,
    pub dseq: Option<u64>,
    pub provider: Option<String>,
    pub state: Option<BidState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBidsRequest {
    pub filters: BidFilters,
    pub pagination: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateBid {
    pub order: OrderId,
    pub provider: String,
    pub price: UnsignedCoin,
    pub deposit: Deposit,
}
