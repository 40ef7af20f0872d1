use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{coin::UnsignedCoin, errors::SourceParseError};

/// Where the funds of a deposit are drawn from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    /// The signer's own account balance.
    Balance,
    /// An authz deposit grant issued to the signer.
    Grant,
}

impl Source {
    /// Parses one source name; the error carries the offending value.
    pub fn parse(value: &str) -> Result<Self, SourceParseError> {
        Self::from_str(value).map_err(|_| SourceParseError(value.to_owned()))
    }

    pub fn names() -> Vec<&'static str> {
        Self::iter().map(|this| this.into()).collect()
    }
}

/// Amount and funding sources locked by a deployment or a bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub amount: UnsignedCoin,
    /// Unique and in the order the user gave them.
    pub sources: Vec<Source>,
}
