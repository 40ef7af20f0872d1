//! Module scoped query clients.
//!
//! Only the parameter queries the CLI depends on are declared. Implementations
//! live in the node SDK and are handed over through discovery.

pub mod deployment;
pub mod market;

use std::fmt::Debug;

use async_trait::async_trait;

#[async_trait]
pub trait DeploymentQueryClient: Send + Sync + Debug {
    async fn params(
        &self,
        request: deployment::QueryParamsRequest,
    ) -> anyhow::Result<deployment::QueryParamsResponse>;
}

#[async_trait]
pub trait MarketQueryClient: Send + Sync + Debug {
    async fn params(
        &self,
        request: market::QueryParamsRequest,
    ) -> anyhow::Result<market::QueryParamsResponse>;
}

pub trait QueryClient: Send + Sync + Debug {
    fn deployment(&self) -> &dyn DeploymentQueryClient;

    fn market(&self) -> &dyn MarketQueryClient;
}
