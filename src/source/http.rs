//! Remote suggestion source over HTTP
//!
//! Issues `GET <url>?<query_param>=<query>` and expects a JSON body that is
//! either an array of strings or an object holding one under `suggestions`
//! or `results`. The request is raced against the cancellation token.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Url;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::{SearchResult, SourceError, SuggestionSource};

/// Suggestion source that queries a JSON HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Url,
    query_param: String,
}

impl HttpSource {
    pub fn new(url: &str, query_param: &str) -> Result<Self, SourceError> {
        let base_url =
            Url::parse(url).map_err(|e| SourceError::Failed(format!("invalid url {url}: {e}")))?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            query_param: query_param.to_string(),
        })
    }

    /// Full request URL for `query`, with the query percent-encoded
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(&self.query_param, query);
        url
    }
}

impl SuggestionSource for HttpSource {
    fn search(&self, query: &str, cancel: CancellationToken) -> BoxFuture<'static, SearchResult> {
        let client = self.client.clone();
        let url = self.request_url(query);

        async move {
            let fetch = async {
                let response = client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| SourceError::Network(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(SourceError::Network(format!("HTTP {status}")));
                }

                let body = response
                    .text()
                    .await
                    .map_err(|e| SourceError::Network(e.to_string()))?;
                parse_suggestions(&body)
            };

            tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(SourceError::Cancelled),
                result = fetch => result,
            }
        }
        .boxed()
    }
}

/// Decode a suggestion list from a JSON response body
pub fn parse_suggestions(body: &str) -> SearchResult {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

    let items = match &value {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("suggestions")
            .or_else(|| map.get("results"))
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SourceError::InvalidResponse(
                    "expected a `suggestions` or `results` array".to_string(),
                )
            })?,
        _ => {
            return Err(SourceError::InvalidResponse(
                "expected a JSON array of strings".to_string(),
            ));
        }
    };

    items
        .iter()
        .map(|item| {
            item.as_str().map(String::from).ok_or_else(|| {
                SourceError::InvalidResponse(format!("non-string suggestion: {item}"))
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
