use core_types::{coin::UnsignedCoin, errors::CoinParseError};
use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParamsRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParamsResponse {
    pub params: Params,
}

/// Deployment module parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Smallest deposit accepted per denomination.
    pub min_deposits: Vec<UnsignedCoin>,
}

impl Params {
    pub fn min_deposit(&self, denom: &str) -> Option<&UnsignedCoin> {
        self.min_deposits.iter().find(|coin| coin.denom == denom)
    }
}

/// Wire form as returned by a gRPC node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawParams {
    pub min_deposits: Vec<ProtoCoin>,
}

impl TryFrom<RawParams> for Params {
    type Error = CoinParseError;

    fn try_from(RawParams { min_deposits }: RawParams) -> Result<Self, Self::Error> {
        Ok(Self {
            min_deposits: min_deposits
                .into_iter()
                .map(UnsignedCoin::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<Params> for RawParams {
    fn from(Params { min_deposits }: Params) -> Self {
        Self {
            min_deposits: min_deposits.into_iter().map(ProtoCoin::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_params_conversion_validates_coins() {
        let raw = RawParams {
            min_deposits: vec![
                ProtoCoin {
                    denom: "uve".to_owned(),
                    amount: "1000".to_owned(),
                },
                ProtoCoin {
                    denom: "ibc/ABCDEF".to_owned(),
                    amount: "5".to_owned(),
                },
            ],
        };

        let params = Params::try_from(raw.clone()).unwrap();
        assert_eq!(params.min_deposit("uve").unwrap().amount, 1000);
        assert!(params.min_deposit("uatom").is_none());
        assert_eq!(RawParams::from(params), raw);

        let bad = RawParams {
            min_deposits: vec![ProtoCoin {
                denom: "u".to_owned(),
                amount: "1".to_owned(),
            }],
        };
        assert!(Params::try_from(bad).is_err());
    }
}
