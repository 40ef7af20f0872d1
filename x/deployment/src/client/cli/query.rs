//! CLI query subcommands for the deployment module.

use clap::{Args, Subcommand};
use ve_cli::{
    context::must_address_codec_from_context,
    pagination::{read_page_request, PaginationArgs},
    Context,
};

use crate::types::{DeploymentFilters, DeploymentState, QueryDeploymentsRequest};

/// CLI entrypoint for deployment queries.
#[derive(Args, Debug)]
pub struct DeploymentQueryCli {
    #[command(subcommand)]
    pub command: DeploymentQueryCommands,
}

#[derive(Subcommand, Debug)]
pub enum DeploymentQueryCommands {
    /// Query for all deployments
    List(ListDeploymentsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListDeploymentsArgs {
    /// Deployment owner address
    #[arg(long)]
    pub owner: Option<String>,

    /// Deployment sequence number
    #[arg(long)]
    pub dseq: Option<u64>,

    #[arg(long, value_enum)]
    pub state: Option<DeploymentState>,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeploymentQuery {
    List(QueryDeploymentsRequest),
}

/// Turns parsed flags into a request. The owner, when given, must decode with
/// the context's account codec.
pub fn prepare_query_request(
    ctx: &Context,
    command: &DeploymentQueryCli,
) -> anyhow::Result<DeploymentQuery> {
    let req = match &command.command {
        DeploymentQueryCommands::List(ListDeploymentsArgs {
            owner,
            dseq,
            state,
            pagination,
        }) => {
            if let Some(owner) = owner {
                must_address_codec_from_context(ctx).string_to_bytes(owner)?;
            }

            DeploymentQuery::List(QueryDeploymentsRequest {
                filters: DeploymentFilters {
                    owner: owner.clone(),
                    dseq: *dseq,
                    state: *state,
                },
                pagination: read_page_request(pagination)?,
            })
        }
    };

    Ok(req)
}
