use std::{str::FromStr, sync::Arc};

use clap::Parser;
use client::{query::market::Params, AddressCodec, Bech32Codec};
use core_types::{coin::UnsignedCoin, denom::Denom, deposit::Source, testing::UnwrapTesting};
use market::client::cli::{
    detect_bid_deposit,
    tx::{prepare_msg, MarketTxCli},
};
use ve_cli::{
    deposit::{DepositArgs, DepositError},
    mocks::{MockClient, MockQueryClient},
    Context,
};

fn coin(amount: u128, denom: &str) -> UnsignedCoin {
    UnsignedCoin::new(amount, Denom::from_str(denom).unwrap_test())
}

fn params() -> Params {
    Params {
        bid_min_deposit: coin(500_000, "uve"),
        order_max_bids: 20,
    }
}

fn ctx_with(query: MockQueryClient) -> (Context, Arc<MockClient>) {
    let client = Arc::new(MockClient {
        query,
        ..Default::default()
    });
    let ctx = Context::background()
        .with_client(client.clone())
        .with_address_codec(Arc::new(Bech32Codec::new("ve")));

    (ctx, client)
}

#[tokio::test]
async fn bid_deposit_defaults_to_market_minimum() {
    let (ctx, client) = ctx_with(MockQueryClient::default().with_market_params(params()));

    let deposit = detect_bid_deposit(&DepositArgs::default(), &ctx)
        .await
        .unwrap_test();

    assert_eq!(deposit.amount, coin(500_000, "uve"));
    assert_eq!(client.query.calls(), 1);
}

#[tokio::test]
async fn query_failure_is_passed_through() {
    let (ctx, _) = ctx_with(MockQueryClient::default());

    let err = detect_bid_deposit(&DepositArgs::default(), &ctx)
        .await
        .unwrap_err();

    assert!(matches!(err, DepositError::Query(_)));
    assert_eq!(err.to_string(), "market params unavailable");
}

#[tokio::test]
async fn explicit_bid_deposit_does_not_query() {
    let (ctx, client) = ctx_with(MockQueryClient::default().with_market_params(params()));
    let args = DepositArgs {
        deposit: Some("1.5uve".to_owned()),
        deposit_sources: vec!["balance".to_owned()],
    };

    let deposit = detect_bid_deposit(&args, &ctx).await.unwrap_test();

    assert_eq!(deposit.amount, coin(1, "uve"));
    assert_eq!(deposit.sources, vec![Source::Balance]);
    assert_eq!(client.query.calls(), 0);
}

#[tokio::test]
async fn create_bid_builds_message() {
    #[derive(Parser, Debug)]
    struct Cmd {
        #[command(flatten)]
        tx: MarketTxCli,
    }

    let (ctx, _) = ctx_with(MockQueryClient::default().with_market_params(params()));
    let codec = Bech32Codec::new("ve");
    let owner = codec.bytes_to_string(&[1; 20]).unwrap_test();
    let provider = codec.bytes_to_string(&[2; 20]).unwrap_test();

    let cmd = Cmd::try_parse_from([
        "tx",
        "create-bid",
        "--owner",
        owner.as_str(),
        "--dseq",
        "42",
        "--price",
        "10uve",
        "--deposit-sources",
        "grant",
    ])
    .unwrap_test();

    let msg = prepare_msg(&ctx, &provider, &cmd.tx).await.unwrap_test();

    assert_eq!(msg.order.owner, owner);
    assert_eq!((msg.order.dseq, msg.order.gseq, msg.order.oseq), (42, 1, 1));
    assert_eq!(msg.provider, provider);
    assert_eq!(msg.price, coin(10, "uve"));
    assert_eq!(msg.deposit.amount, coin(500_000, "uve"));
    assert_eq!(msg.deposit.sources, vec![Source::Grant]);
}
