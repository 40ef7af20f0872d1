//! Capabilities the CLI consumes from the node SDK.
//!
//! The CLI never speaks the wire protocol itself. It receives a [`Client`] (or
//! a query-only [`LightClient`]) from a discovery routine and talks to the
//! chain only through the traits declared here.

pub mod codec;
pub mod context;
pub mod query;
pub mod rpc;
pub mod tx;

use std::{fmt::Debug, sync::Arc};

pub use codec::{AddressCodec, Bech32Codec, LegacyAmino, ProtoCodec};
pub use context::ClientContext;
pub use query::QueryClient;
pub use rpc::RpcClient;
pub use tx::TxClient;

/// Query-only access to a node.
pub trait LightClient: Send + Sync + Debug {
    fn query(&self) -> &dyn QueryClient;
}

/// Full access to a node: queries plus transaction broadcast.
///
/// Every client is also a light client so read-only callers work with
/// whichever was installed.
pub trait Client: LightClient {
    fn tx(&self) -> &dyn TxClient;

    fn as_light(self: Arc<Self>) -> Arc<dyn LightClient>;
}
