//! Web search tool for the job researcher, backed by the Serper API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Organic results kept per query.
const MAX_HITS: usize = 10;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<SearchHit>,
}

/// A single organic search result.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SearchClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("X-API-KEY", &self.api_key)
            .json(&SearchRequest {
                q: query,
                num: MAX_HITS,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!("Search '{}' returned {} hits", query, body.organic.len());
        Ok(body.organic.into_iter().take(MAX_HITS).collect())
    }
}

/// Renders hits as a numbered markdown list for inclusion in a prompt.
pub fn format_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No search results.".to_string();
    }
    hits.iter()
        .enumerate()
        .map(|(i, hit)| {
            let mut line = format!("{}. [{}]({})", i + 1, hit.title, hit.link);
            if let Some(date) = &hit.date {
                line.push_str(&format!(" ({date})"));
            }
            if !hit.snippet.is_empty() {
                line.push_str(&format!(" — {}", hit.snippet));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
