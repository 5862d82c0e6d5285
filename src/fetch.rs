use crate::core::{parse_feed, FeatureCollection, FeedError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// GET the feed and parse it. One attempt, no retry.
pub async fn fetch_feed(url: &str) -> anyhow::Result<FeatureCollection> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch error: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(FeedError::Status(resp.status()).into());
    }
    let text_promise = resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!("body read error: {:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("feed body is not text"))?;
    Ok(parse_feed(&body)?)
}
