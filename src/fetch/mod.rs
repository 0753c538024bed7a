mod api_version;
mod basic;
mod client;

pub use api_version::ApiVersion;
pub use basic::BasicClient;
pub use client::HttpClient;

use crate::error::FetchError;
use tracing::debug;

/// Performs a GET on `url` and returns the response body.
///
/// # Errors
///
/// Anything other than `200 OK` is a [`FetchError::Status`]; connection and
/// body read failures are [`FetchError::Http`].
#[tracing::instrument(skip(client))]
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>, FetchError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let bytes = resp.bytes().await?;
    debug!(bytes = bytes.len(), "Response body received");
    Ok(bytes.to_vec())
}
