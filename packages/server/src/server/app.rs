//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::{FsUploadStore, KycService};
use crate::server::routes::{
    health_handler, start_kyc_handler, status_handler, upload_document_handler,
    upload_live_selfie_handler, upload_selfie_handler,
};
use crate::Config;

/// Request bodies above this size are rejected before buffering.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub kyc: Arc<KycService>,
}

/// Build the Axum application router
pub fn build_app(config: &Config) -> Router {
    let uploads = Arc::new(FsUploadStore::new(config.upload_dir.clone()));
    let app_state = AppState {
        kyc: Arc::new(KycService::new(uploads)),
    };

    // CORS configuration - allow any origin (local emulators and clients)
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/kyc/start", post(start_kyc_handler))
        .route("/kyc/upload-document", post(upload_document_handler))
        .route("/kyc/upload-selfie", post(upload_selfie_handler))
        .route("/kyc/upload-live-selfie", post(upload_live_selfie_handler))
        .route("/kyc/status/:kyc_id", get(status_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
