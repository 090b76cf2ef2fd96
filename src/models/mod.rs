//! Data Models
//!
//! Types exchanged between commands and the presentation host.

pub mod response;

pub use response::CommandResponse;
