//! gform-quick-submit: submit responses to Google Forms and discover their entry IDs.
//!
//! ```no_run
//! use gform_quick_submit::{FormItem, GformClient, SubmitRequest};
//!
//! # async fn demo() -> gform_quick_submit::GformResult<()> {
//! let client = GformClient::from_env()?;
//! let response = client
//!     .submit(&SubmitRequest::new(vec![
//!         FormItem::new("1037971436", "Acme"),
//!         FormItem::new("64248411", "Jane Doe"),
//!     ]))
//!     .await;
//! assert!(response.success);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod encode;
pub mod http;
pub mod parse;
pub mod snippet;
pub mod submit;
pub mod types;

pub use config::{resolve_form_url, ClientConfig, FORM_URL_ENV};
pub use encode::{encode_items, form_response_url};
pub use parse::{is_google_form_url, parse_entries};
pub use snippet::{form_links, render_snippet, FormLinks};
pub use submit::GformClient;
pub use types::*;
