//! In-memory session store.
//!
//! Sessions live for the lifetime of the process; there is no persistence.
//! The store is an explicit value injected into the service rather than a
//! process-wide global, and all mutations run under a single write lock so
//! interleaved requests against the same session serialize.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::{ApiError, KycRecord};

/// Map from session id to verification record.
#[derive(Default)]
pub struct SessionStore {
    records: RwLock<HashMap<String, KycRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session with a fresh unique id. Always succeeds.
    pub async fn create(&self, customer_id: String, doc_type: Option<String>) -> KycRecord {
        let kyc_id = Uuid::new_v4().simple().to_string();
        let record = KycRecord::new(kyc_id.clone(), customer_id, doc_type);
        self.records
            .write()
            .await
            .insert(kyc_id, record.clone());
        record
    }

    /// Look up a session by id.
    pub async fn get(&self, kyc_id: &str) -> Result<KycRecord, ApiError> {
        self.records
            .read()
            .await
            .get(kyc_id)
            .cloned()
            .ok_or_else(ApiError::kyc_not_found)
    }

    /// Apply a mutation to a session under the write lock and return the
    /// updated record.
    pub async fn update<F>(&self, kyc_id: &str, mutate: F) -> Result<KycRecord, ApiError>
    where
        F: FnOnce(&mut KycRecord),
    {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(kyc_id)
            .ok_or_else(ApiError::kyc_not_found)?;
        mutate(record);
        Ok(record.clone())
    }
}
