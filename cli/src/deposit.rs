//! Deposit amount and source resolution for deployment and bid transactions.
//!
//! The amount comes from the `--deposit` flag when given. Otherwise a
//! [`DepositQuerier`] asks the chain for its current minimum; the deployment
//! and market modules each provide one. Either way the result goes through the
//! same normalised coin parsing.

use std::collections::HashSet;

use async_trait::async_trait;
use clap::Args;
use client::LightClient;
use core_types::{
    coin::UnsignedCoin,
    deposit::{Deposit, Source},
    errors::CoinParseError,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    context::{light_client_from_context, Context, ContextError},
    flags::{FLAG_DEPOSIT, FLAG_DEPOSIT_SOURCES},
};

pub const DEFAULT_DEPOSIT_SOURCES: [&str; 2] = ["grant", "balance"];

#[derive(Error, Debug)]
pub enum DepositError {
    #[error(transparent)]
    Amount(#[from] CoinParseError),

    #[error("invalid deposit source: {0}, expected one of {}", Source::names().join(", "))]
    InvalidSource(String),

    #[error("duplicate deposit source: {0}")]
    DuplicateSource(String),

    #[error("couldn't query default deposit amount for {denom}")]
    DefaultDepositNotFound { denom: String },

    #[error(transparent)]
    Query(anyhow::Error),

    #[error(transparent)]
    Context(#[from] ContextError),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DepositArgs {
    /// Deposit amount, e.g. 5000000uve. Defaults to the chain's minimum deposit
    #[arg(long = FLAG_DEPOSIT)]
    pub deposit: Option<String>,

    /// Where deposit funds are drawn from, in order of preference
    #[arg(
        long = FLAG_DEPOSIT_SOURCES,
        value_delimiter = ',',
        default_values = DEFAULT_DEPOSIT_SOURCES
    )]
    pub deposit_sources: Vec<String>,
}

impl Default for DepositArgs {
    fn default() -> Self {
        Self {
            deposit: None,
            deposit_sources: DEFAULT_DEPOSIT_SOURCES.map(String::from).to_vec(),
        }
    }
}

/// Strategy producing the chain's default deposit as a coin string.
#[async_trait]
pub trait DepositQuerier: Send + Sync {
    async fn default_deposit(&self, client: &dyn LightClient) -> Result<String, DepositError>;
}

/// Deposit amount from `explicit` when set, otherwise from `querier`.
///
/// No query is made when `explicit` is set.
pub async fn resolve_deposit_amount<Q>(
    explicit: Option<&str>,
    ctx: &Context,
    querier: &Q,
) -> Result<UnsignedCoin, DepositError>
where
    Q: DepositQuerier + ?Sized,
{
    let deposit = match explicit {
        Some(deposit) => deposit.to_owned(),
        None => {
            let client = light_client_from_context(ctx)?;
            let deposit = querier.default_deposit(client.as_ref()).await?;
            debug!("using chain default deposit {deposit}");
            deposit
        }
    };

    Ok(UnsignedCoin::parse_normalized(&deposit)?)
}

/// Parses source names, keeping their order and rejecting repeats.
pub fn deposit_sources<S: AsRef<str>>(values: &[S]) -> Result<Vec<Source>, DepositError> {
    let mut seen = HashSet::with_capacity(values.len());
    let mut sources = Vec::with_capacity(values.len());

    for value in values {
        let value = value.as_ref().trim();
        let source =
            Source::parse(value).map_err(|err| DepositError::InvalidSource(err.0))?;

        if !seen.insert(source) {
            return Err(DepositError::DuplicateSource(value.to_owned()));
        }

        sources.push(source);
    }

    Ok(sources)
}

/// Full deposit for a transaction. Sources are validated before any query
/// goes out.
pub async fn detect_deposit<Q>(
    args: &DepositArgs,
    ctx: &Context,
    querier: &Q,
) -> Result<Deposit, DepositError>
where
    Q: DepositQuerier + ?Sized,
{
    let sources = deposit_sources(&args.deposit_sources)?;
    let amount = resolve_deposit_amount(args.deposit.as_deref(), ctx, querier).await?;

    Ok(Deposit { amount, sources })
}
