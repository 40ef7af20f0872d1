use std::str::FromStr;

use core_types::{
    coin::UnsignedCoin,
    denom::Denom,
    deposit::{Deposit, Source},
    pagination::PageRequest,
    testing::UnwrapTesting,
};
use serde_json::json;

#[test]
fn deposit_json_shape() {
    let deposit = Deposit {
        amount: UnsignedCoin::new(1000, Denom::from_str("uve").unwrap_test()),
        sources: vec![Source::Grant, Source::Balance],
    };

    let value = serde_json::to_value(&deposit).unwrap_test();
    assert_eq!(
        value,
        json!({
            "amount": { "denom": "uve", "amount": "1000" },
            "sources": ["grant", "balance"],
        })
    );

    let back: Deposit = serde_json::from_value(value).unwrap_test();
    assert_eq!(back, deposit);
}

#[test]
fn coin_json_rejects_bad_denom() {
    let err = serde_json::from_value::<UnsignedCoin>(json!({ "denom": "1x", "amount": "5" }));
    assert!(err.is_err());
}

#[test]
fn coin_amount_beyond_u64() {
    let amount = u128::from(u64::MAX) * 4;
    let coin: UnsignedCoin = serde_json::from_value(json!({
        "denom": "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2",
        "amount": amount.to_string(),
    }))
    .unwrap_test();

    assert_eq!(coin.amount, amount);
}

#[test]
fn page_request_to_sdk() {
    let page = PageRequest {
        key: vec![0xde, 0xad],
        offset: 0,
        limit: 25,
        count_total: true,
        reverse: false,
    };

    let sdk = cosmos_sdk_proto::cosmos::base::query::v1beta1::PageRequest::from(page.clone());
    assert_eq!(sdk.key, vec![0xde, 0xad]);
    assert_eq!(sdk.limit, 25);
    assert!(sdk.count_total);

    assert_eq!(PageRequest::from(sdk), page);
}
