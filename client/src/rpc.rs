use std::fmt::Debug;

use async_trait::async_trait;
use url::Url;

/// Raw tendermint RPC access, used by commands that bypass module clients.
#[async_trait]
pub trait RpcClient: Send + Sync + Debug {
    fn remote(&self) -> &Url;

    async fn abci_query(&self, path: &str, data: Vec<u8>, height: Option<u64>)
        -> anyhow::Result<Vec<u8>>;
}
