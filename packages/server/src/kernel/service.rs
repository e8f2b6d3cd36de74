//! KYC workflow service.
//!
//! Orchestrates the session store and the upload store for the five
//! workflow operations. Handlers stay thin; all workflow semantics live
//! here so tests can drive the service directly.
//!
//! Ordering on uploads: session lookup first (an unknown id never touches
//! disk), then the blob write, then the record mutation. A blob-write
//! failure therefore leaves the record unmodified. There is no atomicity
//! across the blob write and the record update.

use std::sync::Arc;

use crate::common::{ApiError, KycRecord, KycStatus, UploadKind};

use super::session_store::SessionStore;
use super::upload_store::UploadStore;
use super::verification::{self, Decision};

pub struct KycService {
    sessions: SessionStore,
    uploads: Arc<dyn UploadStore>,
}

impl KycService {
    pub fn new(uploads: Arc<dyn UploadStore>) -> Self {
        Self {
            sessions: SessionStore::new(),
            uploads,
        }
    }

    /// Start a new verification session.
    pub async fn start(&self, customer_id: String, doc_type: Option<String>) -> KycRecord {
        let record = self.sessions.create(customer_id, doc_type).await;
        tracing::info!(kyc_id = %record.kyc_id, customer_id = %record.customer_id, "KYC session started");
        record
    }

    /// Upload the identity document together with its document number.
    ///
    /// Resets status to `InProgress`, even from a terminal state.
    pub async fn upload_document(
        &self,
        kyc_id: &str,
        doc_number: String,
        filename: &str,
        bytes: &[u8],
    ) -> Result<(KycRecord, String), ApiError> {
        self.sessions.get(kyc_id).await?;

        let path = self
            .uploads
            .store(kyc_id, UploadKind::Document, filename, bytes)
            .await?;

        let record = self
            .sessions
            .update(kyc_id, |rec| {
                rec.doc_number = Some(doc_number);
                rec.paths.insert(UploadKind::Document, path.clone());
                rec.status = KycStatus::InProgress;
            })
            .await?;

        Ok((record, path))
    }

    /// Upload a selfie image. Resets status to `InProgress`.
    pub async fn upload_selfie(
        &self,
        kyc_id: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<(KycRecord, String), ApiError> {
        self.sessions.get(kyc_id).await?;

        let path = self
            .uploads
            .store(kyc_id, UploadKind::Selfie, filename, bytes)
            .await?;

        let record = self
            .sessions
            .update(kyc_id, |rec| {
                rec.paths.insert(UploadKind::Selfie, path.clone());
                rec.status = KycStatus::InProgress;
            })
            .await?;

        Ok((record, path))
    }

    /// Upload the live selfie and finalize the session with the automated
    /// decision.
    pub async fn upload_live_selfie(
        &self,
        kyc_id: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<KycRecord, ApiError> {
        self.sessions.get(kyc_id).await?;

        let path = self
            .uploads
            .store(kyc_id, UploadKind::LiveSelfie, filename, bytes)
            .await?;

        let record = self
            .sessions
            .update(kyc_id, |rec| {
                rec.paths.insert(UploadKind::LiveSelfie, path);
                match verification::evaluate(rec.doc_number.as_deref()) {
                    Decision::Approved => {
                        rec.status = KycStatus::Approved;
                        rec.rejection_reason = None;
                    }
                    Decision::Rejected { reason } => {
                        rec.status = KycStatus::Rejected;
                        rec.rejection_reason = Some(reason.to_string());
                    }
                }
            })
            .await?;

        tracing::info!(kyc_id, status = %record.status, "KYC session finalized");
        Ok(record)
    }

    /// Read-only status query.
    pub async fn status(&self, kyc_id: &str) -> Result<KycRecord, ApiError> {
        self.sessions.get(kyc_id).await
    }
}
