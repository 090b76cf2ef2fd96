//! Host Commands
//!
//! Entry points a presentation host calls. Each takes the shared
//! [`AppState`](crate::state::AppState) and returns a
//! [`CommandResponse`](crate::models::CommandResponse).

pub mod analysis;
pub mod contact;
pub mod host;

pub use analysis::*;
pub use contact::*;
pub use host::{HostCommand, HostParseError};
