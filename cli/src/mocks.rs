//! In-memory stand-ins for the node SDK, for tests of this crate and of the
//! `x/` modules.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use client::{
    query::{deployment, market, DeploymentQueryClient, MarketQueryClient},
    tx::BroadcastOptions,
    Client, ClientContext, LightClient, QueryClient, TxClient,
};
use cosmos_sdk_proto::{cosmos::base::abci::v1beta1::TxResponse, Any};
use url::Url;

use crate::{
    context::{rpc_uri_from_context, Context},
    resolver::{Discover, DiscoveryOptions},
};

/// Serves fixed module parameters and counts how often it was asked.
#[derive(Debug, Default)]
pub struct MockQueryClient {
    pub deployment_params: Option<deployment::Params>,
    pub market_params: Option<market::Params>,
    calls: AtomicUsize,
}

impl MockQueryClient {
    pub fn with_deployment_params(mut self, params: deployment::Params) -> Self {
        self.deployment_params = Some(params);
        self
    }

    pub fn with_market_params(mut self, params: market::Params) -> Self {
        self.market_params = Some(params);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeploymentQueryClient for MockQueryClient {
    async fn params(
        &self,
        _request: deployment::QueryParamsRequest,
    ) -> anyhow::Result<deployment::QueryParamsResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let params = self
            .deployment_params
            .clone()
            .ok_or_else(|| anyhow::anyhow!("deployment params unavailable"))?;

        Ok(deployment::QueryParamsResponse { params })
    }
}

#[async_trait]
impl MarketQueryClient for MockQueryClient {
    async fn params(
        &self,
        _request: market::QueryParamsRequest,
    ) -> anyhow::Result<market::QueryParamsResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let params = self
            .market_params
            .clone()
            .ok_or_else(|| anyhow::anyhow!("market params unavailable"))?;

        Ok(market::QueryParamsResponse { params })
    }
}

impl QueryClient for MockQueryClient {
    fn deployment(&self) -> &dyn DeploymentQueryClient {
        self
    }

    fn market(&self) -> &dyn MarketQueryClient {
        self
    }
}

/// Records broadcast messages instead of sending them.
#[derive(Debug, Default)]
pub struct MockTxClient {
    pub broadcasts: Mutex<Vec<Vec<Any>>>,
}

#[async_trait]
impl TxClient for MockTxClient {
    async fn broadcast_msgs(
        &self,
        msgs: Vec<Any>,
        _options: BroadcastOptions,
    ) -> anyhow::Result<TxResponse> {
        self.broadcasts
            .lock()
            .map_err(|_| anyhow::anyhow!("poisoned lock"))?
            .push(msgs);

        Ok(TxResponse::default())
    }
}

#[derive(Debug, Default)]
pub struct MockLightClient {
    pub query: MockQueryClient,
}

impl LightClient for MockLightClient {
    fn query(&self) -> &dyn QueryClient {
        &self.query
    }
}

#[derive(Debug, Default)]
pub struct MockClient {
    pub query: MockQueryClient,
    pub tx: MockTxClient,
}

impl LightClient for MockClient {
    fn query(&self) -> &dyn QueryClient {
        &self.query
    }
}

impl Client for MockClient {
    fn tx(&self) -> &dyn TxClient {
        &self.tx
    }

    fn as_light(self: Arc<Self>) -> Arc<dyn LightClient> {
        self
    }
}

/// Discovery that hands out mock clients and records how it was called.
#[derive(Debug, Default)]
pub struct CountingDiscoverer {
    failure: Option<String>,
    calls: AtomicUsize,
    light_calls: AtomicUsize,
    last_options: Mutex<Option<DiscoveryOptions>>,
    last_rpc_uri: Mutex<Option<Url>>,
}

impl CountingDiscoverer {
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn light_calls(&self) -> usize {
        self.light_calls.load(Ordering::SeqCst)
    }

    pub fn last_options(&self) -> Option<DiscoveryOptions> {
        self.last_options.lock().ok().and_then(|this| this.clone())
    }

    pub fn last_rpc_uri(&self) -> Option<Url> {
        self.last_rpc_uri.lock().ok().and_then(|this| this.clone())
    }

    fn record(&self, ctx: &Context, options: &DiscoveryOptions) -> anyhow::Result<()> {
        if let Ok(mut last) = self.last_options.lock() {
            *last = Some(options.clone());
        }
        if let Ok(mut last) = self.last_rpc_uri.lock() {
            *last = rpc_uri_from_context(ctx).ok();
        }

        match &self.failure {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Discover for CountingDiscoverer {
    async fn discover_client(
        &self,
        ctx: &Context,
        _client_ctx: &ClientContext,
        options: &DiscoveryOptions,
    ) -> anyhow::Result<Arc<dyn Client>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.record(ctx, options)?;

        Ok(Arc::new(MockClient::default()))
    }

    async fn discover_light_client(
        &self,
        ctx: &Context,
        _client_ctx: &ClientContext,
        options: &DiscoveryOptions,
    ) -> anyhow::Result<Arc<dyn LightClient>> {
        self.light_calls.fetch_add(1, Ordering::SeqCst);
        self.record(ctx, options)?;

        Ok(Arc::new(MockLightClient::default()))
    }
}
