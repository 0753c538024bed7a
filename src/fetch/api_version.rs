use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue, InvalidHeaderValue};

/// Header the ratings API uses to select its response format.
const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-api-version");

/// An [`HttpClient`] wrapper that sends `x-api-version: <version>` with
/// every request.
pub struct ApiVersion<C> {
    inner: C,
    version: HeaderValue,
}

impl<C> ApiVersion<C> {
    pub fn new(inner: C, version: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            inner,
            version: HeaderValue::from_str(version)?,
        })
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiVersion<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut()
            .insert(API_VERSION_HEADER, self.version.clone());
        self.inner.execute(req).await
    }
}
