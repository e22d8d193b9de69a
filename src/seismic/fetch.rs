//! Earthquake feed download.

use crate::error_handling::FetchError;
use crate::http::get_json;

use super::types::{FeatureCollection, RawSeismicEvent};

/// Downloads the GeoJSON summary feed at `url` and returns its features.
pub async fn fetch_feed(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<RawSeismicEvent>, FetchError> {
    let feed: FeatureCollection = get_json(client, url, &[]).await?;
    log::debug!("Fetched {} events from {}", feed.features.len(), url);
    Ok(feed.features)
}
