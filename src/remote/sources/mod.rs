pub mod aladhan;
pub mod alquran;

pub use aladhan::AladhanClient;
pub use alquran::AlQuranClient;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::remote::ApiError;

/// Issues one GET and decodes the body as `T`.
///
/// Non-2xx statuses become `ApiError::Api` with the body as message,
/// undecodable bodies become `ApiError::Parse`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    debug!("GET {} {:?}", url, query);

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    debug!("Response status: {}", status);

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        warn!("API error: {} - {}", status.as_u16(), body);
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| {
        warn!("Failed to decode response from {}: {}", url, e);
        ApiError::Parse(e.to_string())
    })
}
