//! Test harness for KYC workflow tests.
//!
//! Each test gets a fresh service backed by a temporary upload directory;
//! the directory is dropped with the harness.

use std::sync::Arc;

use axum::Router;
use kyc_core::kernel::{FsUploadStore, KycService};
use kyc_core::server::build_app;
use kyc_core::Config;
use tempfile::TempDir;
use test_context::AsyncTestContext;

pub struct TestHarness {
    /// Temporary upload root - kept alive for the duration of the test.
    pub upload_root: TempDir,
    /// Service under test - drives the workflow without HTTP overhead.
    pub kyc: Arc<KycService>,
}

impl TestHarness {
    /// Build a full router over the same upload root, for HTTP-level tests.
    /// The router carries its own service instance (fresh session map).
    #[allow(dead_code)]
    pub fn app(&self) -> Router {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            upload_dir: self.upload_root.path().to_path_buf(),
        };
        build_app(&config)
    }
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        // Respect RUST_LOG when debugging tests; ignore double-init.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let upload_root = TempDir::new().expect("Failed to create temp upload dir");
        let uploads = Arc::new(FsUploadStore::new(upload_root.path()));
        Self {
            upload_root,
            kyc: Arc::new(KycService::new(uploads)),
        }
    }

    async fn teardown(self) {}
}
