use std::fmt::Debug;

use async_trait::async_trait;
use cosmos_sdk_proto::{cosmos::base::abci::v1beta1::TxResponse, Any};

use crate::context::BroadcastMode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastOptions {
    pub mode: BroadcastMode,
    pub memo: String,
    /// Gas limit; `None` asks the broadcaster to simulate.
    pub gas: Option<u64>,
}

/// Signs and broadcasts messages on behalf of the configured key.
#[async_trait]
pub trait TxClient: Send + Sync + Debug {
    async fn broadcast_msgs(
        &self,
        msgs: Vec<Any>,
        options: BroadcastOptions,
    ) -> anyhow::Result<TxResponse>;
}
