// Simple Digital KYC backend - core library
//
// Session-based document verification: a client starts a session, uploads
// a document and selfie images, and the final live-selfie upload triggers
// an automated approve/reject decision.

pub mod common;
pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
