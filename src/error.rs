use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::ResponseMeta;

/// Discriminant for failures raised by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A completed HTTP response that the caller treated as a failure.
    Http,
}

impl ErrorKind {
    /// Stable name of the kind, suitable for logs and serialized payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "HttpError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failed HTTP response together with its already-parsed body.
///
/// The value is fixed at construction: fields are only reachable through
/// accessors, and the body can only be taken out by consuming the failure.
/// `Display` renders `HTTP <status> <status_text>`; the URL and the body
/// are left out of the message and kept for diagnostics.
///
/// Whether a response counts as a failure is the caller's decision, so any
/// status is accepted, including 2xx.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct HttpFailure<B = serde_json::Value> {
    meta: ResponseMeta,
    body: B,
    message: String,
}

impl<B> HttpFailure<B> {
    pub fn new(meta: ResponseMeta, body: B) -> Self {
        let message = format!("HTTP {} {}", meta.status, meta.status_text);
        Self {
            meta,
            body,
            message,
        }
    }

    /// Shorthand for `HttpFailure::new(ResponseMeta::new(..), body)`.
    pub fn from_parts(
        status: u16,
        status_text: impl Into<String>,
        url: impl Into<String>,
        body: B,
    ) -> Self {
        Self::new(ResponseMeta::new(status, status_text, url), body)
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Http
    }

    /// Same as `self.kind().as_str()`.
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn status(&self) -> u16 {
        self.meta.status
    }

    pub fn status_text(&self) -> &str {
        &self.meta.status_text
    }

    pub fn url(&self) -> &str {
        &self.meta.url
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    pub fn into_body(self) -> B {
        self.body
    }

    pub fn into_parts(self) -> (ResponseMeta, B) {
        (self.meta, self.body)
    }

    /// Replaces the body with `f(body)`, keeping metadata and message.
    pub fn map_body<T, F>(self, f: F) -> HttpFailure<T>
    where
        F: FnOnce(B) -> T,
    {
        HttpFailure {
            meta: self.meta,
            body: f(self.body),
            message: self.message,
        }
    }
}

impl<B: Serialize> Serialize for HttpFailure<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HttpFailure", 6)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("status", &self.meta.status)?;
        state.serialize_field("statusText", &self.meta.status_text)?;
        state.serialize_field("url", &self.meta.url)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
