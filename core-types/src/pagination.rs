use cosmos_sdk_proto::cosmos::base::query::v1beta1::PageRequest as SdkPageRequest;
use serde::{Deserialize, Serialize};

pub const QUERY_DEFAULT_LIMIT: u64 = 100;

/// Pagination descriptor handed to list-style queries.
///
/// Only one of `key` and `offset` should be set. An empty `key` means
/// "start from the beginning".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Value returned in a previous page response's `next_key`.
    pub key: Vec<u8>,
    pub offset: u64,
    /// Zero leaves the limit to the queried module.
    pub limit: u64,
    pub count_total: bool,
    pub reverse: bool,
}

impl PageRequest {
    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }
}

impl From<SdkPageRequest> for PageRequest {
    fn from(
        SdkPageRequest {
            key,
            offset,
            limit,
            count_total,
            reverse,
        }: SdkPageRequest,
    ) -> Self {
        Self {
            key,
            offset,
            limit,
            count_total,
            reverse,
        }
    }
}

impl From<PageRequest> for SdkPageRequest {
    fn from(
        PageRequest {
            key,
            offset,
            limit,
            count_total,
            reverse,
        }: PageRequest,
    ) -> Self {
        Self {
            key,
            offset,
            limit,
            count_total,
            reverse,
        }
    }
}
