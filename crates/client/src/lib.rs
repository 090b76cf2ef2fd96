//! Legal Lens Client
//!
//! HTTP access to the remote analysis service:
//! - `analysis` - the `AnalysisBackend` seam and its reqwest implementation
//! - `contact` - one-shot contact form submission
//! - `http_client` - reqwest client factory with proxy support

pub mod analysis;
pub mod contact;
pub mod http_client;

pub use analysis::{AnalysisBackend, HttpAnalysisClient};
pub use contact::{ContactClient, ContactSubmission, InquiryType};
pub use http_client::build_http_client;
