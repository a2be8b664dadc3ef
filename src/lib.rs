//! `http-failure` turns a failed HTTP response into an error value.
//!
//! [`HttpFailure`] carries the status code, reason phrase, final URL and the
//! already-parsed body of a response, and renders as `HTTP <status> <reason>`.
//! Deciding which responses are failures, and how bodies are parsed, is left
//! to the call site:
//!
//! ```
//! use http_failure::{ErrorKind, HttpFailure, ResponseMeta};
//! use serde_json::json;
//!
//! let meta = ResponseMeta::new(404, "Not Found", "https://api.example.com/widgets/7");
//! let failure = HttpFailure::new(meta, json!({"error": "not found"}));
//!
//! assert_eq!(failure.to_string(), "HTTP 404 Not Found");
//! assert_eq!(failure.kind(), ErrorKind::Http);
//! ```
//!
//! Since it implements [`std::error::Error`], a failure can travel through
//! `Box<dyn Error>` or `anyhow::Error` and be recovered with
//! `downcast_ref::<HttpFailure>()`.

mod error;
mod response;

pub use error::{ErrorKind, HttpFailure};
pub use response::ResponseMeta;
