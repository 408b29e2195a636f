use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlinesResponse {
    pub status: String,
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// An upstream response held as received, so callers can relay the body
/// byte-for-byte or parse it into a [`HeadlinesResponse`].
#[derive(Debug, Clone)]
pub struct RawHeadlines {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawHeadlines {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn parse(&self) -> Result<HeadlinesResponse> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": {"id": "bbc-news", "name": "BBC News"},
                "author": "BBC Sport",
                "title": "Premier League roundup",
                "description": "All of today's results in one place.",
                "url": "https://www.bbc.co.uk/sport/football/1234",
                "urlToImage": "https://ichef.bbci.co.uk/news/1024/sport.jpg",
                "publishedAt": "2024-03-18T09:30:00Z",
                "content": "Full coverage of the weekend fixtures..."
            },
            {
                "source": {"id": null, "name": "Reuters"},
                "author": null,
                "title": "Markets open higher",
                "description": null,
                "url": "https://www.reuters.com/markets/5678",
                "urlToImage": null,
                "publishedAt": "2024-03-18T08:00:00Z",
                "content": null
            }
        ]
    }"#;

    #[test]
    fn test_parses_top_headlines_body() {
        let raw = RawHeadlines {
            status: 200,
            body: SAMPLE_BODY.as_bytes().to_vec(),
        };
        let parsed = raw.parse().unwrap();
        assert_eq!(parsed.status, "ok");
        assert_eq!(parsed.total_results, 2);
        assert_eq!(parsed.articles.len(), 2);

        let first = &parsed.articles[0];
        assert_eq!(first.source.name, "BBC News");
        assert_eq!(
            first.url_to_image.as_deref(),
            Some("https://ichef.bbci.co.uk/news/1024/sport.jpg")
        );

        let second = &parsed.articles[1];
        assert!(second.source.id.is_none());
        assert!(second.description.is_none());
        assert!(second.url_to_image.is_none());
    }

    #[test]
    fn test_missing_articles_key_parses_as_empty() {
        let raw = RawHeadlines {
            status: 200,
            body: br#"{"status": "ok"}"#.to_vec(),
        };
        let parsed = raw.parse().unwrap();
        assert_eq!(parsed.total_results, 0);
        assert!(parsed.articles.is_empty());
    }

    #[test]
    fn test_article_serializes_with_wire_names() {
        let article = Article {
            source: ArticleSource {
                id: None,
                name: "Reuters".to_string(),
            },
            author: None,
            title: "Markets open higher".to_string(),
            description: None,
            url: "https://www.reuters.com/markets/5678".to_string(),
            url_to_image: None,
            published_at: Some("2024-03-18T08:00:00Z".to_string()),
            content: None,
        };
        let json = serde_json::to_value(&article).unwrap();
        assert!(json.get("urlToImage").is_some());
        assert!(json.get("publishedAt").is_some());
        assert!(json.get("url_to_image").is_none());
    }

    #[test]
    fn test_success_statuses() {
        let ok = RawHeadlines {
            status: 200,
            body: Vec::new(),
        };
        let rate_limited = RawHeadlines {
            status: 429,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        assert!(!rate_limited.is_success());
    }
}
