use async_trait::async_trait;
use client::{query::market::QueryParamsRequest, LightClient};
use core_types::deposit::Deposit;
use tracing::debug;
use ve_cli::{
    deposit::{detect_deposit, DepositArgs, DepositError, DepositQuerier},
    Context,
};

/// Uses the market module's `bid_min_deposit` as the default bid deposit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BidDepositQuerier;

#[async_trait]
impl DepositQuerier for BidDepositQuerier {
    async fn default_deposit(&self, client: &dyn LightClient) -> Result<String, DepositError> {
        let res = client
            .query()
            .market()
            .params(QueryParamsRequest {})
            .await
            .map_err(DepositError::Query)?;

        let deposit = res.params.bid_min_deposit.to_string();
        debug!("bid min deposit is {deposit}");

        Ok(deposit)
    }
}

pub async fn detect_bid_deposit(
    args: &DepositArgs,
    ctx: &Context,
) -> Result<Deposit, DepositError> {
    detect_deposit(args, ctx, &BidDepositQuerier).await
}
