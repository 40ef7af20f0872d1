use async_trait::async_trait;
use client::{query::deployment::QueryParamsRequest, LightClient};
use core_types::deposit::Deposit;
use tracing::debug;
use ve_cli::{
    deposit::{detect_deposit, DepositArgs, DepositError, DepositQuerier},
    Context,
};

pub const DEFAULT_DEPOSIT_DENOM: &str = "uve";

/// Reads the minimum deployment deposit for one denomination from the
/// deployment module parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentDepositQuerier {
    denom: String,
}

impl DeploymentDepositQuerier {
    pub fn new(denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
        }
    }

    pub fn denom(&self) -> &str {
        &self.denom
    }
}

impl Default for DeploymentDepositQuerier {
    fn default() -> Self {
        Self::new(DEFAULT_DEPOSIT_DENOM)
    }
}

#[async_trait]
impl DepositQuerier for DeploymentDepositQuerier {
    async fn default_deposit(&self, client: &dyn LightClient) -> Result<String, DepositError> {
        let res = client
            .query()
            .deployment()
            .params(QueryParamsRequest {})
            .await
            .map_err(DepositError::Query)?;

        let coin = res.params.min_deposit(&self.denom).ok_or_else(|| {
            DepositError::DefaultDepositNotFound {
                denom: self.denom.clone(),
            }
        })?;
        debug!("deployment min deposit for {} is {coin}", self.denom);

        Ok(coin.to_string())
    }
}

/// Deposit for a new deployment, falling back to the chain minimum in `uve`.
pub async fn detect_deployment_deposit(
    args: &DepositArgs,
    ctx: &Context,
) -> Result<Deposit, DepositError> {
    detect_deposit(args, ctx, &DeploymentDepositQuerier::default()).await
}
