//! Owned, serializable view of the store at one point in time.

use editor_config_core::{ConfigRecord, DerivedUrls, RestApiContext};
use serde::{Deserialize, Serialize};

/// The record plus everything derived from it.
///
/// Subscribers receive one of these after every mutation.  It is a copy;
/// later mutations do not affect a snapshot already handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    pub record: ConfigRecord,
    pub urls: DerivedUrls,
    pub rest_api_context: RestApiContext,
}

impl ConfigSnapshot {
    pub fn capture(record: &ConfigRecord) -> Self {
        Self {
            record: record.clone(),
            urls: DerivedUrls::from_record(record),
            rest_api_context: RestApiContext::for_instance(record),
        }
    }
}
