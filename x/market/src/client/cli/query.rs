//! CLI query subcommands for the market module.

use clap::{Args, Subcommand};
use ve_cli::{
    context::must_address_codec_from_context,
    pagination::{read_page_request, PaginationArgs},
    Context,
};

use crate::types::{BidFilters, BidState, QueryBidsRequest};

#[derive(Args, Debug)]
pub struct MarketQueryCli {
    #[command(subcommand)]
    pub command: MarketQueryCommands,
}

#[derive(Subcommand, Debug)]
pub enum MarketQueryCommands {
    /// Query for all bids
    ListBids(ListBidsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListBidsArgs {
    /// Deployment owner address
    #[arg(long)]
    pub owner: Option<String>,

    #[arg(long)]
    pub dseq: Option<u64>,

    /// Provider address
    #[arg(long)]
    pub provider: Option<String>,

    #[arg(long, value_enum)]
    pub state: Option<BidState>,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarketQuery {
    Bids(QueryBidsRequest),
}

pub fn prepare_query_request(
    ctx: &Context,
    command: &MarketQueryCli,
) -> anyhow::Result<MarketQuery> {
    let req = match &command.command {
        MarketQueryCommands::ListBids(ListBidsArgs {
            owner,
            dseq,
            provider,
            state,
            pagination,
        }) => {
            let codec = must_address_codec_from_context(ctx);
            for address in owner.iter().chain(provider) {
                codec.string_to_bytes(address)?;
            }

            MarketQuery::Bids(QueryBidsRequest {
                filters: BidFilters {
                    owner: owner.clone(),
                    dseq: *dseq,
                    provider: provider.clone(),
                    state: *state,
                },
                pagination: read_page_request(pagination)?,
            })
        }
    };

    Ok(req)
}
