use std::{str::FromStr, sync::Arc};

use clap::Parser;
use client::{query::deployment::Params, AddressCodec, Bech32Codec};
use core_types::{coin::UnsignedCoin, denom::Denom, deposit::Source, testing::UnwrapTesting};
use deployment::{
    client::cli::{
        detect_deployment_deposit,
        tx::{prepare_msg, DeploymentTxCli},
    },
    DeploymentDepositQuerier,
};
use ve_cli::{
    deposit::{resolve_deposit_amount, DepositArgs, DepositError},
    mocks::{MockLightClient, MockQueryClient},
    Context,
};

fn coin(amount: u128, denom: &str) -> UnsignedCoin {
    UnsignedCoin::new(amount, Denom::from_str(denom).unwrap_test())
}

fn ctx_with_params(params: Params) -> (Context, Arc<MockLightClient>) {
    let client = Arc::new(MockLightClient {
        query: MockQueryClient::default().with_deployment_params(params),
    });
    let ctx = Context::background()
        .with_light_client(client.clone())
        .with_address_codec(Arc::new(Bech32Codec::new("ve")));

    (ctx, client)
}

#[tokio::test]
async fn picks_min_deposit_in_default_denom() {
    let (ctx, client) = ctx_with_params(Params {
        min_deposits: vec![coin(500, "uother"), coin(1000, "uve")],
    });

    let deposit = detect_deployment_deposit(&DepositArgs::default(), &ctx)
        .await
        .unwrap_test();

    assert_eq!(deposit.amount, coin(1000, "uve"));
    assert_eq!(deposit.sources, vec![Source::Grant, Source::Balance]);
    assert_eq!(client.query.calls(), 1);
}

#[tokio::test]
async fn missing_denom_is_reported() {
    let (ctx, _) = ctx_with_params(Params {
        min_deposits: vec![coin(500, "uother")],
    });

    let err = detect_deployment_deposit(&DepositArgs::default(), &ctx)
        .await
        .unwrap_err();

    assert!(matches!(&err, DepositError::DefaultDepositNotFound { denom } if denom == "uve"));
    assert_eq!(err.to_string(), "couldn't query default deposit amount for uve");
}

#[tokio::test]
async fn explicit_deposit_does_not_query() {
    let (ctx, client) = ctx_with_params(Params::default());
    let args = DepositArgs {
        deposit: Some("2500000uve".to_owned()),
        ..Default::default()
    };

    let deposit = detect_deployment_deposit(&args, &ctx).await.unwrap_test();

    assert_eq!(deposit.amount, coin(2_500_000, "uve"));
    assert_eq!(client.query.calls(), 0);
}

#[tokio::test]
async fn configured_denom_is_used() {
    let (ctx, _) = ctx_with_params(Params {
        min_deposits: vec![coin(500, "uother"), coin(1000, "uve")],
    });

    let amount = resolve_deposit_amount(None, &ctx, &DeploymentDepositQuerier::new("uother"))
        .await
        .unwrap_test();

    assert_eq!(amount, coin(500, "uother"));
}

#[tokio::test]
async fn create_command_builds_message() {
    #[derive(Parser, Debug)]
    struct Cmd {
        #[command(flatten)]
        tx: DeploymentTxCli,
    }

    let (ctx, _) = ctx_with_params(Params {
        min_deposits: vec![coin(1000, "uve")],
    });
    let owner = Bech32Codec::new("ve").bytes_to_string(&[1; 20]).unwrap_test();
    let cmd = Cmd::try_parse_from(["tx", "create", "--dseq", "42", "--deposit-sources", "balance"])
        .unwrap_test();

    let msg = prepare_msg(&ctx, &owner, &cmd.tx).await.unwrap_test();

    assert_eq!(msg.id.owner, owner);
    assert_eq!(msg.id.dseq, 42);
    assert_eq!(msg.deposit.amount, coin(1000, "uve"));
    assert_eq!(msg.deposit.sources, vec![Source::Balance]);
}
