use std::{collections::BTreeSet, fmt::Debug};

use bech32::{FromBase32, ToBase32, Variant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("invalid bech32 address: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("invalid address prefix: expected {expected}, got {found}")]
    Prefix { expected: String, found: String },
}

/// Converts between human readable and raw account addresses.
pub trait AddressCodec: Send + Sync + Debug {
    fn string_to_bytes(&self, text: &str) -> Result<Vec<u8>, CodecError>;

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String, CodecError>;
}

/// Bech32 codec bound to one human readable prefix, e.g. `ve` or `vevaloper`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Codec {
    prefix: String,
}

impl Bech32Codec {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl AddressCodec for Bech32Codec {
    fn string_to_bytes(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        if text.trim().is_empty() {
            return Err(CodecError::Empty);
        }

        let (hrp, data, _variant) = bech32::decode(text)?;
        if hrp != self.prefix {
            return Err(CodecError::Prefix {
                expected: self.prefix.clone(),
                found: hrp,
            });
        }

        Ok(Vec::<u8>::from_base32(&data)?)
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String, CodecError> {
        if bytes.is_empty() {
            return Ok(String::new());
        }

        Ok(bech32::encode(&self.prefix, bytes.to_base32(), Variant::Bech32)?)
    }
}

/// Registry of protobuf type urls the transaction encoder knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtoCodec {
    type_urls: BTreeSet<String>,
}

impl ProtoCodec {
    pub fn register(mut self, type_url: impl Into<String>) -> Self {
        self.type_urls.insert(type_url.into());
        self
    }

    pub fn is_registered(&self, type_url: &str) -> bool {
        self.type_urls.contains(type_url)
    }
}

/// Registry of amino names used for legacy JSON signing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyAmino {
    names: BTreeSet<String>,
}

impl LegacyAmino {
    pub fn register(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
