//! CLI transaction subcommands for the market module.

use clap::{Args, Subcommand};
use core_types::coin::UnsignedCoin;
use tracing::info;
use ve_cli::{context::must_address_codec_from_context, deposit::DepositArgs, Context};

use crate::{
    client::cli::deposit::detect_bid_deposit,
    types::{MsgCreateBid, OrderId},
};

#[derive(Args, Debug)]
pub struct MarketTxCli {
    #[command(subcommand)]
    pub command: MarketCommands,
}

#[derive(Subcommand, Debug)]
pub enum MarketCommands {
    /// Create a market bid
    CreateBid(CreateBidArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CreateBidArgs {
    /// Owner of the deployment the order belongs to
    #[arg(long)]
    pub owner: String,

    #[arg(long)]
    pub dseq: u64,

    #[arg(long, default_value_t = 1)]
    pub gseq: u32,

    #[arg(long, default_value_t = 1)]
    pub oseq: u32,

    /// Bid price per block, e.g. 10uve
    #[arg(long)]
    pub price: String,

    #[command(flatten)]
    pub deposit: DepositArgs,
}

/// Builds a bid from `provider`, resolving the deposit against the chain when
/// no `--deposit` was given.
pub async fn prepare_msg(
    ctx: &Context,
    provider: &str,
    command: &MarketTxCli,
) -> anyhow::Result<MsgCreateBid> {
    match &command.command {
        MarketCommands::CreateBid(CreateBidArgs {
            owner,
            dseq,
            gseq,
            oseq,
            price,
            deposit,
        }) => {
            let codec = must_address_codec_from_context(ctx);
            codec.string_to_bytes(owner)?;
            codec.string_to_bytes(provider)?;

            let price = UnsignedCoin::parse_normalized(price)?;
            let deposit = detect_bid_deposit(deposit, ctx).await?;
            info!("bidding {price} on {owner}/{dseq}/{gseq}/{oseq}");

            Ok(MsgCreateBid {
                order: OrderId {
                    owner: owner.clone(),
                    dseq: *dseq,
                    gseq: *gseq,
                    oseq: *oseq,
                },
                provider: provider.to_owned(),
                price,
                deposit,
            })
        }
    }
}
