use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Verification status of a KYC session.
///
/// Starts at `InProgress`; the live-selfie upload moves it to one of the
/// terminal states. Intermediate uploads reset it to `InProgress`, even
/// from a terminal state, re-opening the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    InProgress,
    Approved,
    Rejected,
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

/// Role of an uploaded file within a session.
///
/// Doubles as the file-name prefix and the key in the record's path map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Document,
    Selfie,
    LiveSelfie,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Selfie => "selfie",
            Self::LiveSelfie => "live_selfie",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One verification session, keyed by `kyc_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycRecord {
    pub kyc_id: String,
    pub customer_id: String,
    pub doc_type: Option<String>,
    pub doc_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: KycStatus,
    pub rejection_reason: Option<String>,
    pub paths: HashMap<UploadKind, String>,
}

impl KycRecord {
    pub fn new(kyc_id: String, customer_id: String, doc_type: Option<String>) -> Self {
        Self {
            kyc_id,
            customer_id,
            doc_type,
            doc_number: None,
            created_at: Utc::now(),
            status: KycStatus::InProgress,
            rejection_reason: None,
            paths: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&KycStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(KycStatus::Rejected.to_string(), "REJECTED");
    }

    #[test]
    fn upload_kind_serializes_as_path_key() {
        assert_eq!(
            serde_json::to_string(&UploadKind::LiveSelfie).unwrap(),
            "\"live_selfie\""
        );
        assert_eq!(UploadKind::Document.as_str(), "document");
    }

    #[test]
    fn new_record_starts_in_progress_with_empty_paths() {
        let rec = KycRecord::new("abc".into(), "cust-1".into(), None);
        assert_eq!(rec.status, KycStatus::InProgress);
        assert!(rec.paths.is_empty());
        assert!(rec.doc_number.is_none());
        assert!(rec.rejection_reason.is_none());
    }
}
