use core_types::{deposit::Deposit, pagination::PageRequest};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeploymentState {
    Active,
    Closed,
}

/// Owner and sequence number, unique per deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentId {
    pub owner: String,
    pub dseq: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentFilters {
    pub owner: Option<String>,
    pub dseq: Option<u64>,
    pub state: Option<DeploymentState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDeploymentsRequest {
    pub filters: DeploymentFilters,
    pub pagination: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateDeployment {
    pub id: DeploymentId,
    pub deposit: Deposit,
}
