//! gform-quick-submit demo service: entry-ID discovery API, sample contact
//! form, and the command-line front end.

pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod rest;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use rest::{router, AppState};
