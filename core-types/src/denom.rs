use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DenomError;

/// Same character class the Cosmos SDK accepts for a coin denomination.
pub(crate) const DENOM_PATTERN: &str = r"[a-zA-Z][a-zA-Z0-9/:._-]{2,127}";

fn denom_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("^{DENOM_PATTERN}$")).expect("hard coded regex is valid")
    })
}

/// A validated on-chain coin denomination, e.g. `uve`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Denom(String);

impl Denom {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Denom {
    type Error = DenomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if denom_regex().is_match(&value) {
            Ok(Self(value))
        } else {
            Err(DenomError::Invalid(value))
        }
    }
}

impl FromStr for Denom {
    type Err = DenomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<Denom> for String {
    fn from(value: Denom) -> Self {
        value.0
    }
}

impl AsRef<str> for Denom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Denom {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Denom {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
