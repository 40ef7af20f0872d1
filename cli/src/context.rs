//! Request scoped values shared between a command and its handlers.
//!
//! A [`Context`] is an immutable map from [`ContextKey`] to a value of the type
//! documented on that key, plus the cancellation token of the running command.
//! Adding a value yields a new context and leaves the original untouched, so a
//! nested command observes everything its parents attached.
//!
//! Lookups come in two flavours. The `*_from_context` functions return a
//! [`ContextError`] the caller can recover from. The `must_*` functions panic;
//! they are reserved for values the outer command framework always seeds, where
//! absence is a bug rather than a user error.

use std::{any::Any, collections::HashMap, fmt, sync::Arc};

use client::{AddressCodec, Client, LightClient, RpcClient};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Category of a context carried value. The string forms are shared with the
/// rest of the toolchain and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
pub enum ContextKey {
    /// `Arc<dyn Client>`
    #[strum(serialize = "context-client")]
    Client,
    /// `Arc<dyn LightClient>`
    #[strum(serialize = "context-query-client")]
    QueryClient,
    /// `Arc<dyn AddressCodec>` for account addresses
    #[strum(serialize = "address-codec")]
    AddressCodec,
    /// `Arc<dyn AddressCodec>` for validator operator addresses
    #[strum(serialize = "validator-codec")]
    ValidatorCodec,
    /// `Url`
    #[strum(serialize = "rpc-uri")]
    RpcUri,
    /// `Arc<dyn RpcClient>`
    #[strum(serialize = "rpc-client")]
    RpcClient,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("context value is not set: {0}")]
    ValueNotSet(ContextKey),

    #[error("invalid context value for {key}, expected {expected}")]
    InvalidValue {
        key: ContextKey,
        expected: &'static str,
    },
}

type Value = Arc<dyn Any + Send + Sync>;

#[derive(Clone)]
pub struct Context {
    values: Arc<HashMap<ContextKey, Value>>,
    cancellation: CancellationToken,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self
            .values
            .keys()
            .map(|key| key.as_ref())
            .collect::<Vec<&str>>();
        keys.sort_unstable();

        f.debug_struct("Context")
            .field("keys", &keys)
            .field("cancelled", &self.cancellation.is_cancelled())
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

impl Context {
    /// Empty root context with its own cancellation token.
    pub fn background() -> Self {
        Self {
            values: Arc::new(HashMap::new()),
            cancellation: CancellationToken::new(),
        }
    }

    /// Returns a copy of this context with `value` stored under `key`.
    ///
    /// The caller is responsible for storing the type documented on `key`;
    /// prefer the typed `with_*` helpers.
    pub fn with_value<T: Any + Send + Sync>(&self, key: ContextKey, value: T) -> Self {
        let mut values = HashMap::clone(&self.values);
        values.insert(key, Arc::new(value));

        Self {
            values: Arc::new(values),
            cancellation: self.cancellation.clone(),
        }
    }

    /// Typed lookup. `None` when the key is absent or holds another type.
    pub fn value<T: Any + Send + Sync + Clone>(&self, key: ContextKey) -> Option<T> {
        self.values
            .get(&key)
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    pub fn contains(&self, key: ContextKey) -> bool {
        self.values.contains_key(&key)
    }

    fn raw(&self, key: ContextKey) -> Option<&Value> {
        self.values.get(&key)
    }

    pub fn with_client(&self, client: Arc<dyn Client>) -> Self {
        self.with_value(ContextKey::Client, client)
    }

    pub fn with_light_client(&self, client: Arc<dyn LightClient>) -> Self {
        self.with_value(ContextKey::QueryClient, client)
    }

    pub fn with_address_codec(&self, codec: Arc<dyn AddressCodec>) -> Self {
        self.with_value(ContextKey::AddressCodec, codec)
    }

    pub fn with_validator_codec(&self, codec: Arc<dyn AddressCodec>) -> Self {
        self.with_value(ContextKey::ValidatorCodec, codec)
    }

    pub fn with_rpc_uri(&self, uri: Url) -> Self {
        self.with_value(ContextKey::RpcUri, uri)
    }

    pub fn with_rpc_client(&self, client: Arc<dyn RpcClient>) -> Self {
        self.with_value(ContextKey::RpcClient, client)
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Same values, child cancellation token. Cancelling the returned context
    /// never cancels this one.
    pub fn with_cancel(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
            cancellation: self.cancellation.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub async fn cancelled(&self) {
        self.cancellation.cancelled().await
    }
}

fn typed<T: Any + Send + Sync + Clone>(
    ctx: &Context,
    key: ContextKey,
    expected: &'static str,
) -> Result<T, ContextError> {
    let value = ctx.raw(key).ok_or(ContextError::ValueNotSet(key))?;
    value
        .downcast_ref::<T>()
        .cloned()
        .ok_or(ContextError::InvalidValue { key, expected })
}

pub fn client_from_context(ctx: &Context) -> Result<Arc<dyn Client>, ContextError> {
    typed(ctx, ContextKey::Client, "Client")
}

/// Query capable client: the dedicated query client if one was installed,
/// otherwise the full client.
pub fn light_client_from_context(ctx: &Context) -> Result<Arc<dyn LightClient>, ContextError> {
    let (key, value) = match ctx.raw(ContextKey::QueryClient) {
        Some(value) => (ContextKey::QueryClient, value),
        None => match ctx.raw(ContextKey::Client) {
            Some(value) => (ContextKey::Client, value),
            None => return Err(ContextError::ValueNotSet(ContextKey::QueryClient)),
        },
    };

    if let Some(client) = value.downcast_ref::<Arc<dyn LightClient>>() {
        return Ok(Arc::clone(client));
    }

    if let Some(client) = value.downcast_ref::<Arc<dyn Client>>() {
        return Ok(Arc::clone(client).as_light());
    }

    Err(ContextError::InvalidValue {
        key,
        expected: "LightClient or Client",
    })
}

pub fn rpc_uri_from_context(ctx: &Context) -> Result<Url, ContextError> {
    typed(ctx, ContextKey::RpcUri, "Url")
}

pub fn rpc_client_from_context(ctx: &Context) -> Result<Arc<dyn RpcClient>, ContextError> {
    typed(ctx, ContextKey::RpcClient, "RpcClient")
}

#[track_caller]
fn must<T: Any + Send + Sync + Clone>(ctx: &Context, key: ContextKey, expected: &'static str) -> T {
    match typed(ctx, key, expected) {
        Ok(value) => value,
        Err(ContextError::ValueNotSet(_)) => {
            panic!("{key} must be set in the command context before handlers run")
        }
        Err(err) => panic!("{err}"),
    }
}

/// # Panics
/// When the outer command framework did not seed an address codec.
#[track_caller]
pub fn must_address_codec_from_context(ctx: &Context) -> Arc<dyn AddressCodec> {
    must(ctx, ContextKey::AddressCodec, "AddressCodec")
}

/// # Panics
/// When the outer command framework did not seed a validator codec.
#[track_caller]
pub fn must_validator_codec_from_context(ctx: &Context) -> Arc<dyn AddressCodec> {
    must(ctx, ContextKey::ValidatorCodec, "AddressCodec")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use client::Bech32Codec;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::mocks::{MockClient, MockLightClient};

    #[test]
    fn key_tags_are_stable() {
        let tags = ContextKey::iter().map(|key| key.to_string()).collect::<Vec<_>>();
        assert_eq!(
            tags,
            [
                "context-client",
                "context-query-client",
                "address-codec",
                "validator-codec",
                "rpc-uri",
                "rpc-client"
            ]
        );
        assert_eq!(ContextKey::from_str("rpc-uri"), Ok(ContextKey::RpcUri));
    }

    #[test]
    fn with_value_leaves_parent_untouched() {
        let root = Context::background();
        let uri = Url::parse("http://localhost:26657").unwrap();
        let child = root.with_rpc_uri(uri.clone());

        assert!(!root.contains(ContextKey::RpcUri));
        assert_eq!(rpc_uri_from_context(&child), Ok(uri));
    }

    #[derive(Debug)]
    struct StaticRpc(Url);

    #[async_trait::async_trait]
    impl RpcClient for StaticRpc {
        fn remote(&self) -> &Url {
            &self.0
        }

        async fn abci_query(
            &self,
            _path: &str,
            data: Vec<u8>,
            _height: Option<u64>,
        ) -> anyhow::Result<Vec<u8>> {
            Ok(data)
        }
    }

    #[tokio::test]
    async fn rpc_client_round_trip() {
        let uri = Url::parse("http://localhost:26657").unwrap();
        let ctx = Context::background().with_rpc_client(Arc::new(StaticRpc(uri.clone())));

        let rpc = rpc_client_from_context(&ctx).unwrap();
        assert_eq!(rpc.remote(), &uri);
        assert_eq!(rpc.abci_query("/store/key", vec![1], None).await.unwrap(), vec![1]);
        assert_eq!(
            rpc_client_from_context(&Context::background()).unwrap_err(),
            ContextError::ValueNotSet(ContextKey::RpcClient)
        );
    }

    #[test]
    fn missing_client_is_recoverable() {
        let ctx = Context::background();
        let err = client_from_context(&ctx).unwrap_err();

        assert_eq!(err, ContextError::ValueNotSet(ContextKey::Client));
        assert_eq!(err.to_string(), "context value is not set: context-client");
    }

    #[test]
    fn wrong_type_under_key_is_reported() {
        let ctx = Context::background().with_value(ContextKey::Client, "not a client".to_owned());

        assert_eq!(
            client_from_context(&ctx).unwrap_err(),
            ContextError::InvalidValue {
                key: ContextKey::Client,
                expected: "Client"
            }
        );
        assert!(ctx.value::<Arc<dyn Client>>(ContextKey::Client).is_none());
    }

    #[test]
    fn light_client_prefers_query_client_key() {
        let light: Arc<dyn LightClient> = Arc::new(MockLightClient::default());
        let full: Arc<dyn Client> = Arc::new(MockClient::default());
        let ctx = Context::background()
            .with_client(full)
            .with_light_client(Arc::clone(&light));

        let found = light_client_from_context(&ctx).unwrap();
        assert!(Arc::ptr_eq(&found, &light));
    }

    #[test]
    fn light_client_falls_back_to_full_client() {
        let ctx = Context::background().with_client(Arc::new(MockClient::default()));
        assert!(light_client_from_context(&ctx).is_ok());

        let err = light_client_from_context(&Context::background()).unwrap_err();
        assert_eq!(err, ContextError::ValueNotSet(ContextKey::QueryClient));
    }

    #[test]
    fn light_client_accepts_full_client_under_query_key() {
        let full: Arc<dyn Client> = Arc::new(MockClient::default());
        let ctx = Context::background().with_value(ContextKey::QueryClient, full);

        assert!(light_client_from_context(&ctx).is_ok());
    }

    #[test]
    fn light_client_rejects_foreign_values() {
        let ctx = Context::background().with_value(ContextKey::QueryClient, 42_u64);

        assert_eq!(
            light_client_from_context(&ctx).unwrap_err(),
            ContextError::InvalidValue {
                key: ContextKey::QueryClient,
                expected: "LightClient or Client"
            }
        );
    }

    #[test]
    fn must_codecs_return_seeded_values() {
        let ctx = Context::background()
            .with_address_codec(Arc::new(Bech32Codec::new("ve")))
            .with_validator_codec(Arc::new(Bech32Codec::new("vevaloper")));

        let account = must_address_codec_from_context(&ctx);
        let validator = must_validator_codec_from_context(&ctx);
        assert!(account.bytes_to_string(&[1; 20]).unwrap().starts_with("ve1"));
        assert!(validator
            .bytes_to_string(&[1; 20])
            .unwrap()
            .starts_with("vevaloper1"));
    }

    #[test]
    #[should_panic(expected = "address-codec must be set")]
    fn must_address_codec_panics_when_absent() {
        must_address_codec_from_context(&Context::background());
    }

    #[test]
    #[should_panic(expected = "invalid context value for validator-codec")]
    fn must_validator_codec_panics_on_wrong_type() {
        let ctx = Context::background().with_value(ContextKey::ValidatorCodec, 1_u8);
        must_validator_codec_from_context(&ctx);
    }

    #[test]
    fn child_cancellation_does_not_reach_parent() {
        let parent = Context::background();
        let child = parent.with_cancel();

        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());

        let other = parent.with_cancel();
        parent.cancel();
        assert!(other.is_cancelled());
    }
}
