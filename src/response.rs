/// Metadata of a completed HTTP response.
///
/// Holds the status code, the reason phrase and the final URL (after any
/// redirects). The body is intentionally not part of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseMeta {
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase, e.g. `"Not Found"`.
    pub status_text: String,
    /// Final URL the response was obtained from.
    pub url: String,
}

impl ResponseMeta {
    pub fn new(status: u16, status_text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            url: url.into(),
        }
    }

    /// Captures metadata from a `reqwest` response without consuming it.
    ///
    /// `status_text` is the reason phrase the server sent. hyper only records
    /// a phrase that differs from the canonical one, and HTTP/2 sends none,
    /// so otherwise it is the canonical reason for the code, or empty for
    /// unregistered codes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use http_failure::{HttpFailure, ResponseMeta};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let response = reqwest::get("https://api.example.com/widgets/7").await?;
    /// if !response.status().is_success() {
    ///     let meta = ResponseMeta::capture(&response);
    ///     let body = response.text().await?;
    ///     return Err(HttpFailure::new(meta, body).into());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn capture(response: &reqwest::Response) -> Self {
        let status = response.status();
        let meta = Self {
            status: status.as_u16(),
            status_text: reason_phrase(response),
            url: response.url().as_str().to_owned(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(status = meta.status, url = %meta.url, "captured response metadata");

        meta
    }
}

fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_owned(),
    }
}

impl From<&reqwest::Response> for ResponseMeta {
    fn from(response: &reqwest::Response) -> Self {
        Self::capture(response)
    }
}
