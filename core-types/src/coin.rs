use std::{fmt, str::FromStr, sync::OnceLock};

use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    denom::{Denom, DENOM_PATTERN},
    errors::CoinParseError,
};

/// Precision of an sdk `Dec`. Decimal coin strings with more fractional digits
/// are rejected rather than rounded.
pub const MAX_DECIMAL_PLACES: usize = 18;

fn coin_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^([0-9]+)\s*({DENOM_PATTERN})$")).expect("hard coded regex is valid")
    })
}

fn dec_coin_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*({DENOM_PATTERN})$"
        ))
        .expect("hard coded regex is valid")
    })
}

/// A single non-negative amount of one denomination, e.g. `1000uve`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnsignedCoin {
    pub denom: Denom,
    #[serde(with = "amount_string")]
    pub amount: u128,
}

impl UnsignedCoin {
    pub fn new(amount: u128, denom: Denom) -> Self {
        Self { denom, amount }
    }

    /// Parses a decimal coin expression and truncates it to an integer amount.
    ///
    /// `"1000uve"`, `"1000 uve"` and `"1000.75uve"` all yield `1000uve`.
    /// Surrounding whitespace is ignored.
    pub fn parse_normalized(input: &str) -> Result<Self, CoinParseError> {
        let trimmed = input.trim();
        let captures = dec_coin_regex()
            .captures(trimmed)
            .ok_or_else(|| CoinParseError::InvalidExpression(input.to_owned()))?;

        let amount = &captures[1];
        let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));
        if fraction.len() > MAX_DECIMAL_PLACES {
            return Err(CoinParseError::Precision(input.to_owned()));
        }

        let amount = if integer.is_empty() {
            0
        } else {
            integer
                .parse::<u128>()
                .map_err(|_| CoinParseError::AmountOverflow(input.to_owned()))?
        };

        Ok(Self {
            denom: parse_denom(input, &captures[2])?,
            amount,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

fn parse_denom(input: &str, denom: &str) -> Result<Denom, CoinParseError> {
    Denom::from_str(denom).map_err(|source| CoinParseError::Denom {
        input: input.to_owned(),
        source,
    })
}

/// Strict integer parsing, the inverse of `Display`.
impl FromStr for UnsignedCoin {
    type Err = CoinParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let captures = coin_regex()
            .captures(trimmed)
            .ok_or_else(|| CoinParseError::InvalidExpression(s.to_owned()))?;

        let amount = captures[1]
            .parse::<u128>()
            .map_err(|_| CoinParseError::AmountOverflow(s.to_owned()))?;

        Ok(Self {
            denom: parse_denom(s, &captures[2])?,
            amount,
        })
    }
}

impl fmt::Display for UnsignedCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl From<UnsignedCoin> for ProtoCoin {
    fn from(UnsignedCoin { denom, amount }: UnsignedCoin) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }
}

impl TryFrom<ProtoCoin> for UnsignedCoin {
    type Error = CoinParseError;

    fn try_from(ProtoCoin { denom, amount }: ProtoCoin) -> Result<Self, Self::Error> {
        let expression = format!("{amount}{denom}");
        let amount = amount
            .parse::<u128>()
            .map_err(|_| CoinParseError::InvalidExpression(expression.clone()))?;

        Ok(Self {
            denom: parse_denom(&expression, &denom)?,
            amount,
        })
    }
}

mod amount_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(amount: u128, denom: &str) -> UnsignedCoin {
        UnsignedCoin::new(amount, Denom::from_str(denom).unwrap())
    }

    #[test]
    fn from_str_parses_integer_coins() {
        assert_eq!(UnsignedCoin::from_str("1000uve").unwrap(), coin(1000, "uve"));
        assert_eq!(UnsignedCoin::from_str(" 5 uatom ").unwrap(), coin(5, "uatom"));
        assert!(UnsignedCoin::from_str("1.5uve").is_err());
        assert!(UnsignedCoin::from_str("uve").is_err());
        assert!(UnsignedCoin::from_str("-1uve").is_err());
    }

    #[test]
    fn parse_normalized_truncates_fraction() {
        assert_eq!(
            UnsignedCoin::parse_normalized("1000.999uve").unwrap(),
            coin(1000, "uve")
        );
        assert_eq!(
            UnsignedCoin::parse_normalized(".5uve").unwrap(),
            coin(0, "uve")
        );
        assert_eq!(
            UnsignedCoin::parse_normalized("7.uve").unwrap(),
            coin(7, "uve")
        );
    }

    #[test]
    fn parse_normalized_rejects_excess_precision() {
        let input = "1.0000000000000000001uve";
        assert_eq!(
            UnsignedCoin::parse_normalized(input),
            Err(CoinParseError::Precision(input.to_owned()))
        );
    }

    #[test]
    fn parse_normalized_reports_input() {
        let err = UnsignedCoin::parse_normalized("lots of uve").unwrap_err();
        assert_eq!(err.to_string(), "invalid decimal coin expression: lots of uve");
    }

    #[test]
    fn amount_overflow_is_an_error() {
        let input = format!("{}0uve", u128::MAX);
        assert_eq!(
            UnsignedCoin::from_str(&input),
            Err(CoinParseError::AmountOverflow(input.clone()))
        );
    }

    #[test]
    fn proto_conversion() {
        let proto = ProtoCoin {
            denom: "uve".to_owned(),
            amount: "42".to_owned(),
        };
        let parsed = UnsignedCoin::try_from(proto.clone()).unwrap();
        assert_eq!(parsed, coin(42, "uve"));
        assert_eq!(ProtoCoin::from(parsed), proto);

        let bad = ProtoCoin {
            denom: "uve".to_owned(),
            amount: "4.2".to_owned(),
        };
        assert!(UnsignedCoin::try_from(bad).is_err());
    }

    #[test]
    fn serde_uses_string_amounts() {
        let json = serde_json::to_string(&coin(10, "uve")).unwrap();
        assert_eq!(json, r#"{"denom":"uve","amount":"10"}"#);
        let back: UnsignedCoin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coin(10, "uve"));
    }
}
