use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use url::Url;

use crate::codec::{LegacyAmino, ProtoCodec};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BroadcastMode {
    #[default]
    Sync,
    Async,
    Block,
}

/// Settings the outer command framework prepares before any handler runs.
///
/// The codecs are `None` until the application registers its types; client
/// resolution refuses to run without them.
#[derive(Debug, Clone, Default)]
pub struct ClientContext {
    pub chain_id: Option<String>,
    pub node: Option<Url>,
    pub from: Option<String>,
    pub output: OutputFormat,
    pub broadcast_mode: BroadcastMode,
    pub codec: Option<ProtoCodec>,
    pub legacy_amino: Option<LegacyAmino>,
}

impl ClientContext {
    pub fn with_codec(mut self, codec: ProtoCodec) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn with_legacy_amino(mut self, amino: LegacyAmino) -> Self {
        self.legacy_amino = Some(amino);
        self
    }

    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    pub fn with_node(mut self, node: Url) -> Self {
        self.node = Some(node);
        self
    }
}
