//! Shared JSON-over-HTTP helper.
//!
//! Every remote read in the crate is a GET returning JSON; this keeps the
//! status check and error mapping in one place.

use serde::de::DeserializeOwned;

use crate::error_handling::FetchError;

/// Issues a GET to `url` with `query` appended and decodes the JSON body.
///
/// # Errors
///
/// - `FetchError::Request` if no response arrives
/// - `FetchError::Status` for any non-2xx status
/// - `FetchError::Decode` if the body is not the expected JSON
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, FetchError> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::all_of;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    #[derive(Debug, serde::Deserialize)]
    struct Echo {
        value: u32,
    }

    #[tokio::test]
    async fn test_get_json_success_sends_query() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/echo"),
                request::query(url_decoded(contains(("lat", "23.5")))),
            ])
            .respond_with(status_code(200).body(r#"{"value": 7}"#)),
        );

        let client = reqwest::Client::new();
        let url = server.url("/echo").to_string();
        let echo: Echo = get_json(&client, &url, &[("lat", "23.5".to_string())])
            .await
            .unwrap();
        assert_eq!(echo.value, 7);
    }

    #[tokio::test]
    async fn test_get_json_status_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/down"))
                .respond_with(status_code(503)),
        );

        let client = reqwest::Client::new();
        let url = server.url("/down").to_string();
        let err = get_json::<Echo>(&client, &url, &[]).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_get_json_decode_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/html"))
                .respond_with(status_code(200).body("<html>rate limited</html>")),
        );

        let client = reqwest::Client::new();
        let url = server.url("/html").to_string();
        let err = get_json::<Echo>(&client, &url, &[]).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
