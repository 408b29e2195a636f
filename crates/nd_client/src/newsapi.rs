use std::fmt;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use nd_core::{
    AppConfig, Error, HeadlineProvider, HeadlineQuery, RawHeadlines, Result,
};

/// Client for the NewsAPI.org top-headlines endpoint.
///
/// Requests go out with a stock reqwest client: no retry and no timeout
/// beyond what the platform gives us. A failed call surfaces to the caller
/// and that is the end of it.
pub struct NewsApiClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl NewsApiClient {
    /// Builds a client from configuration. Fails when the API key is absent
    /// or the endpoint URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let endpoint = Url::parse(&config.upstream_url)
            .map_err(|_| Error::InvalidUrl(config.upstream_url.clone()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        })
    }

    fn request_url(&self, query: &HeadlineQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("country", &query.country)
            .append_pair("category", &query.category)
            .append_pair("apiKey", &self.api_key);
        url
    }
}

#[async_trait]
impl HeadlineProvider for NewsApiClient {
    fn name(&self) -> &str {
        "newsapi.org"
    }

    async fn top_headlines(&self, query: &HeadlineQuery) -> Result<RawHeadlines> {
        // The request URL carries the API key, so it never goes to the logs.
        debug!("fetching top headlines for {}", query);
        let response = self.client.get(self.request_url(query)).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawHeadlines { status, body })
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            api_key: Some("test-key".to_string()),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_request_url_carries_all_pairs() {
        let client = NewsApiClient::from_config(&test_config()).unwrap();
        let url = client.request_url(&HeadlineQuery::from_params(
            Some("gb".to_string()),
            Some("sports".to_string()),
        ));

        assert!(url
            .as_str()
            .starts_with("https://newsapi.org/v2/top-headlines?"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("country".to_string(), "gb".to_string())));
        assert!(pairs.contains(&("category".to_string(), "sports".to_string())));
        assert!(pairs.contains(&("apiKey".to_string(), "test-key".to_string())));
    }

    #[test]
    fn test_query_values_are_encoded() {
        let client = NewsApiClient::from_config(&test_config()).unwrap();
        let url = client.request_url(&HeadlineQuery::from_params(
            Some("zz".to_string()),
            Some("one&two".to_string()),
        ));
        assert!(url.as_str().contains("category=one%26two"));
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        assert!(NewsApiClient::from_config(&AppConfig::default()).is_err());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = NewsApiClient::from_config(&test_config()).unwrap();
        let printed = format!("{client:?}");
        assert!(!printed.contains("test-key"));
        assert!(printed.contains("<redacted>"));
    }
}
