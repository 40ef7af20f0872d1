//! CLI transaction subcommands for the deployment module.

use clap::{Args, Subcommand};
use tracing::info;
use ve_cli::{context::must_address_codec_from_context, deposit::DepositArgs, Context};

use crate::{
    client::cli::deposit::detect_deployment_deposit,
    types::{DeploymentId, MsgCreateDeployment},
};

#[derive(Args, Debug)]
pub struct DeploymentTxCli {
    #[command(subcommand)]
    pub command: DeploymentCommands,
}

#[derive(Subcommand, Debug)]
pub enum DeploymentCommands {
    /// Create a deployment
    Create(CreateDeploymentArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CreateDeploymentArgs {
    /// Deployment sequence number
    #[arg(long)]
    pub dseq: u64,

    #[command(flatten)]
    pub deposit: DepositArgs,
}

/// Builds the message for `owner`, resolving the deposit against the chain
/// when no `--deposit` was given.
pub async fn prepare_msg(
    ctx: &Context,
    owner: &str,
    command: &DeploymentTxCli,
) -> anyhow::Result<MsgCreateDeployment> {
    match &command.command {
        DeploymentCommands::Create(CreateDeploymentArgs { dseq, deposit }) => {
            must_address_codec_from_context(ctx).string_to_bytes(owner)?;
            let deposit = detect_deployment_deposit(deposit, ctx).await?;
            info!("creating deployment {owner}/{dseq} with deposit {}", deposit.amount);

            Ok(MsgCreateDeployment {
                id: DeploymentId {
                    owner: owner.to_owned(),
                    dseq: *dseq,
                },
                deposit,
            })
        }
    }
}
