// HTTP routes
pub mod health;
pub mod kyc;

pub use health::*;
pub use kyc::*;
