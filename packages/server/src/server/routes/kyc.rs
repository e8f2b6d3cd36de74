//! KYC workflow endpoints.
//!
//! `/kyc/start` takes a urlencoded form; the three upload endpoints take
//! multipart forms carrying a binary `file` part. All workflow semantics
//! live in [`KycService`]; these handlers only parse requests and shape
//! responses.

use std::collections::HashMap;

use axum::extract::{Extension, Multipart, Path};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::common::{ApiError, KycStatus, UploadKind};
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct StartKycRequest {
    pub customer_id: String,
    pub doc_type: Option<String>,
}

#[derive(Serialize)]
pub struct StartKycResponse {
    pub kyc_id: String,
    pub message: String,
    pub status: KycStatus,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub path: String,
}

#[derive(Serialize)]
pub struct FinalizeResponse {
    pub message: String,
    pub status: KycStatus,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub kyc_id: String,
    pub status: KycStatus,
    pub rejection_reason: Option<String>,
    pub paths: HashMap<UploadKind, String>,
    pub message: String,
}

/// An uploaded file part plus the text fields that accompanied it.
struct UploadForm {
    text: HashMap<String, String>,
    filename: String,
    bytes: Vec<u8>,
}

impl UploadForm {
    /// Drain a multipart stream, separating the `file` part from text fields.
    async fn parse(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut text = HashMap::new();
        let mut file: Option<(String, Vec<u8>)> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Validation(format!("Invalid multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "file" {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Failed to read file part: {e}")))?;
                file = Some((filename, bytes.to_vec()));
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Invalid field {name}: {e}")))?;
                text.insert(name, value);
            }
        }

        let (filename, bytes) =
            file.ok_or_else(|| ApiError::Validation("Missing field: file".to_string()))?;
        Ok(Self {
            text,
            filename,
            bytes,
        })
    }

    fn required(&self, name: &str) -> Result<&str, ApiError> {
        self.text
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ApiError::Validation(format!("Missing field: {name}")))
    }
}

/// `POST /kyc/start` - open a new verification session.
pub async fn start_kyc_handler(
    Extension(state): Extension<AppState>,
    Form(req): Form<StartKycRequest>,
) -> Json<StartKycResponse> {
    let record = state.kyc.start(req.customer_id, req.doc_type).await;
    Json(StartKycResponse {
        kyc_id: record.kyc_id,
        message: "KYC started".to_string(),
        status: record.status,
    })
}

/// `POST /kyc/upload-document` - store the document image and its number.
pub async fn upload_document_handler(
    Extension(state): Extension<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let form = UploadForm::parse(multipart).await?;
    let kyc_id = form.required("kyc_id")?;
    let doc_number = form.required("doc_number")?.to_string();

    let (_, path) = state
        .kyc
        .upload_document(kyc_id, doc_number, &form.filename, &form.bytes)
        .await?;

    Ok(Json(UploadResponse {
        message: "Document uploaded".to_string(),
        path,
    }))
}

/// `POST /kyc/upload-selfie` - store a selfie image.
pub async fn upload_selfie_handler(
    Extension(state): Extension<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let form = UploadForm::parse(multipart).await?;
    let kyc_id = form.required("kyc_id")?;

    let (_, path) = state
        .kyc
        .upload_selfie(kyc_id, &form.filename, &form.bytes)
        .await?;

    Ok(Json(UploadResponse {
        message: "Selfie uploaded".to_string(),
        path,
    }))
}

/// `POST /kyc/upload-live-selfie` - store the live selfie and finalize the
/// session with the automated decision.
pub async fn upload_live_selfie_handler(
    Extension(state): Extension<AppState>,
    multipart: Multipart,
) -> Result<Json<FinalizeResponse>, ApiError> {
    let form = UploadForm::parse(multipart).await?;
    let kyc_id = form.required("kyc_id")?;

    let record = state
        .kyc
        .upload_live_selfie(kyc_id, &form.filename, &form.bytes)
        .await?;

    let message = match record.status {
        KycStatus::Approved => "KYC completed and approved",
        _ => "Live selfie uploaded, but KYC rejected",
    };

    Ok(Json(FinalizeResponse {
        message: message.to_string(),
        status: record.status,
    }))
}

/// `GET /kyc/status/{kyc_id}` - read-only status query.
pub async fn status_handler(
    Extension(state): Extension<AppState>,
    Path(kyc_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let record = state.kyc.status(&kyc_id).await?;
    Ok(Json(StatusResponse {
        message: format!("Status is {}", record.status),
        kyc_id: record.kyc_id,
        status: record.status,
        rejection_reason: record.rejection_reason,
        paths: record.paths,
    }))
}
