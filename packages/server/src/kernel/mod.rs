//! Kernel module - session storage, blob storage, and the verification workflow.

pub mod service;
pub mod session_store;
pub mod upload_store;
pub mod verification;

pub use service::KycService;
pub use session_store::SessionStore;
pub use upload_store::{FsUploadStore, UploadStore};
pub use verification::Decision;
