// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::error::CatalogError;
use crate::http::HttpClient;

use super::model::ShowPreview;

/// Public endpoint serving the full list of show previews
pub const DEFAULT_CATALOG_URL: &str = "https://podcast-api.netlify.app/shows";

/// Fetch and decode the show catalog from `url`
pub async fn fetch_catalog<C: HttpClient>(
    client: &C,
    url: &str,
) -> Result<Vec<ShowPreview>, CatalogError> {
    Url::parse(url)?;

    let response = client
        .get(url)
        .await
        .map_err(|e| CatalogError::FetchFailed {
            url: url.to_string(),
            source: e,
        })?;

    if !response.is_success() {
        return Err(CatalogError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    parse_catalog(&response.body)
}

/// Decode a catalog response body.
///
/// The body must be a JSON array. Entries without a usable `id` are skipped
/// with a warning; the remaining entries are kept in order.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<ShowPreview>, CatalogError> {
    let value: Value = serde_json::from_slice(body).map_err(CatalogError::InvalidJson)?;

    let Value::Array(entries) = value else {
        return Err(CatalogError::NotAnArray {
            found: json_kind(&value),
        });
    };

    let shows = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(show) => Some(show),
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable catalog entry");
                None
            }
        })
        .collect();

    Ok(shows)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::ShowId;
    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use bytes::Bytes;

    struct StaticClient {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl HttpClient for StaticClient {
        async fn get(&self, _url: &str) -> Result<HttpResponse, reqwest::Error> {
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    #[test]
    fn parse_catalog_decodes_array() {
        let shows = parse_catalog(br#"[{"id": 1, "title": "Alpha"}, {"id": "b", "title": "Beta"}]"#)
            .unwrap();

        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].id, ShowId::Number(1));
        assert_eq!(shows[1].title, "Beta");
    }

    #[test]
    fn parse_catalog_accepts_empty_array() {
        assert!(parse_catalog(b"[]").unwrap().is_empty());
    }

    #[test]
    fn parse_catalog_rejects_non_json() {
        assert!(matches!(
            parse_catalog(b"<html>oops</html>"),
            Err(CatalogError::InvalidJson(_))
        ));
    }

    #[test]
    fn parse_catalog_rejects_non_array() {
        assert!(matches!(
            parse_catalog(br#"{"shows": []}"#),
            Err(CatalogError::NotAnArray { found: "object" })
        ));
    }

    #[test]
    fn parse_catalog_skips_entries_without_id() {
        let shows = parse_catalog(br#"[{"id": 1}, {"title": "no id"}, {"id": [2]}, {"id": 3}]"#)
            .unwrap();

        let ids: Vec<_> = shows.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, [ShowId::Number(1), ShowId::Number(3)]);
    }

    #[test]
    fn parse_catalog_keeps_entries_with_null_fields() {
        let shows = parse_catalog(
            br#"[
                {"id": 1, "title": "Alpha"},
                {"id": 2, "title": null},
                {"id": 3, "title": "Gamma", "seasons": null, "updated": 123}
            ]"#,
        )
        .unwrap();

        assert_eq!(shows.len(), 3);
        assert_eq!(shows[1].title, "");
        assert_eq!(shows[2].title, "Gamma");
        assert_eq!(shows[2].seasons, 0);
        assert!(shows[2].updated.is_none());
    }

    #[tokio::test]
    async fn fetch_catalog_returns_shows_on_success() {
        let client = StaticClient {
            status: 200,
            body: r#"[{"id": 1, "title": "Alpha"}]"#,
        };

        let shows = fetch_catalog(&client, "https://example.com/shows")
            .await
            .unwrap();
        assert_eq!(shows.len(), 1);
    }

    #[tokio::test]
    async fn fetch_catalog_rejects_error_status() {
        let client = StaticClient {
            status: 404,
            body: "[]",
        };

        let result = fetch_catalog(&client, "https://example.com/shows").await;
        assert!(matches!(
            result,
            Err(CatalogError::HttpStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_catalog_rejects_invalid_url() {
        let client = StaticClient {
            status: 200,
            body: "[]",
        };

        let result = fetch_catalog(&client, "not a url").await;
        assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
    }
}
