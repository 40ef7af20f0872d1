use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DenomError {
    #[error("invalid denom: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CoinParseError {
    #[error("invalid decimal coin expression: {0}")]
    InvalidExpression(String),

    #[error("invalid denom in coin expression {input}: {source}")]
    Denom {
        input: String,
        #[source]
        source: DenomError,
    },

    #[error("amount out of range in coin expression: {0}")]
    AmountOverflow(String),

    #[error("too much precision in coin expression {0}, maximum {max} decimal places", max = crate::coin::MAX_DECIMAL_PLACES)]
    Precision(String),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid deposit source: {0}")]
pub struct SourceParseError(pub String);
