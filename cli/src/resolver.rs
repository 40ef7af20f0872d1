//! Pre-run hooks that attach a node client to the command context.
//!
//! A client is discovered at most once per command tree. When an outer
//! composite command already attached one, nested commands reuse it and never
//! call discovery again. Discovery errors are returned untouched; retrying is
//! the discovery routine's business.

use std::sync::Arc;

use async_trait::async_trait;
use client::{Client, ClientContext, LightClient};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::{
    context::{client_from_context, light_client_from_context, Context, ContextError},
    flags::NodeArgs,
};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("codec is not initialized")]
    CodecNotInitialized,

    #[error("legacy amino codec is not initialized")]
    LegacyAminoNotInitialized,

    #[error(transparent)]
    Discovery(anyhow::Error),

    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Flag derived hints handed to discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub node: Option<Url>,
    pub chain_id: Option<String>,
    pub from: Option<String>,
}

impl DiscoveryOptions {
    pub fn new(client_ctx: &ClientContext, flags: &NodeArgs) -> Self {
        Self {
            node: flags.node.clone().or_else(|| client_ctx.node.clone()),
            chain_id: client_ctx.chain_id.clone(),
            from: client_ctx.from.clone(),
        }
    }
}

/// Locates a node and builds a client for it.
#[async_trait]
pub trait Discover: Send + Sync {
    async fn discover_client(
        &self,
        ctx: &Context,
        client_ctx: &ClientContext,
        options: &DiscoveryOptions,
    ) -> anyhow::Result<Arc<dyn Client>>;

    /// Query-only discovery. Defaults to a full client viewed as a light one.
    async fn discover_light_client(
        &self,
        ctx: &Context,
        client_ctx: &ClientContext,
        options: &DiscoveryOptions,
    ) -> anyhow::Result<Arc<dyn LightClient>> {
        Ok(self
            .discover_client(ctx, client_ctx, options)
            .await?
            .as_light())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    Unresolved,
    Resolving,
    Resolved,
}

/// Outcome of a successful pre-run hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Discovered,
    Reused,
}

/// Per command state mutated by the pre-run hooks.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub ctx: Context,
    pub client_ctx: ClientContext,
    pub flags: NodeArgs,
    state: ResolutionState,
}

impl Invocation {
    pub fn new(ctx: Context, client_ctx: ClientContext, flags: NodeArgs) -> Self {
        Self {
            ctx,
            client_ctx,
            flags,
            state: ResolutionState::Unresolved,
        }
    }

    /// Invocation for a nested command. It starts from this command's context,
    /// so anything attached here is visible there.
    pub fn subcommand(&self, flags: NodeArgs) -> Self {
        Self::new(self.ctx.clone(), self.client_ctx.clone(), flags)
    }

    pub fn state(&self) -> ResolutionState {
        self.state
    }

    fn check_codecs(&self) -> Result<(), ResolveError> {
        if self.client_ctx.codec.is_none() {
            return Err(ResolveError::CodecNotInitialized);
        }

        if self.client_ctx.legacy_amino.is_none() {
            return Err(ResolveError::LegacyAminoNotInitialized);
        }

        Ok(())
    }

    fn attach_rpc_uri(&mut self) {
        if let Some(node) = &self.flags.node {
            debug!("using rpc endpoint {node}");
            self.ctx = self.ctx.with_rpc_uri(node.clone());
        }
    }
}

/// Pre-run hook for transaction commands: makes sure a full [`Client`] is in
/// the context.
pub async fn tx_persistent_pre_run<D>(
    inv: &mut Invocation,
    discover: &D,
) -> Result<Resolution, ResolveError>
where
    D: Discover + ?Sized,
{
    inv.check_codecs()?;
    inv.attach_rpc_uri();

    if client_from_context(&inv.ctx).is_ok() {
        debug!("client already attached, skipping discovery");
        inv.state = ResolutionState::Resolved;
        return Ok(Resolution::Reused);
    }

    inv.state = ResolutionState::Resolving;
    let options = DiscoveryOptions::new(&inv.client_ctx, &inv.flags);
    let client = match discover
        .discover_client(&inv.ctx, &inv.client_ctx, &options)
        .await
    {
        Ok(client) => client,
        Err(err) => {
            inv.state = ResolutionState::Unresolved;
            return Err(ResolveError::Discovery(err));
        }
    };

    inv.ctx = inv.ctx.with_client(client);
    inv.state = ResolutionState::Resolved;
    info!("discovered node client");

    Ok(Resolution::Discovered)
}

/// Pre-run hook for query commands: makes sure a [`LightClient`] (or a full
/// client) is in the context.
pub async fn query_persistent_pre_run<D>(
    inv: &mut Invocation,
    discover: &D,
) -> Result<Resolution, ResolveError>
where
    D: Discover + ?Sized,
{
    inv.check_codecs()?;
    inv.attach_rpc_uri();

    if light_client_from_context(&inv.ctx).is_ok() {
        debug!("query client already attached, skipping discovery");
        inv.state = ResolutionState::Resolved;
        return Ok(Resolution::Reused);
    }

    inv.state = ResolutionState::Resolving;
    let options = DiscoveryOptions::new(&inv.client_ctx, &inv.flags);
    let client = match discover
        .discover_light_client(&inv.ctx, &inv.client_ctx, &options)
        .await
    {
        Ok(client) => client,
        Err(err) => {
            inv.state = ResolutionState::Unresolved;
            return Err(ResolveError::Discovery(err));
        }
    };

    inv.ctx = inv.ctx.with_light_client(client);
    inv.state = ResolutionState::Resolved;
    info!("discovered node query client");

    Ok(Resolution::Discovered)
}
