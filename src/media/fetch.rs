// SPDX-License-Identifier: MPL-2.0
//! Remote image download over HTTP(S).

use crate::error::{Error, Result};
use crate::media::image::{decode_bytes, ImageData};
use futures_util::StreamExt;
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("RenderFolio/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Downloads a response body, failing on non-success status or when the body
/// exceeds `max_bytes`.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str, max_bytes: u64) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }

    if let Some(length) = response.content_length() {
        if length > max_bytes {
            return Err(Error::Network(format!(
                "Response too large ({length} bytes, limit {max_bytes})"
            )));
        }
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if (body.len() + chunk.len()) as u64 > max_bytes {
            return Err(Error::Network(format!(
                "Response exceeded {max_bytes} bytes"
            )));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Downloads and decodes one image. Decoding runs on the blocking pool.
pub async fn fetch_image(client: reqwest::Client, url: &str, max_bytes: u64) -> Result<ImageData> {
    let bytes = fetch_bytes(&client, url, max_bytes).await?;
    tokio::task::spawn_blocking(move || decode_bytes(&bytes))
        .await
        .unwrap_or_else(|e| Err(Error::Decode(format!("Decode task failed: {e}"))))
}
