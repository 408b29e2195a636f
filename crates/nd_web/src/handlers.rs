use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use nd_core::{Article, Error, HeadlineQuery, Result};

use crate::render;
use crate::AppState;

/// Body returned when the upstream API answers with a non-success status.
pub const UPSTREAM_FAILURE_BODY: &str = r#"{"error":"Failed to fetch news"}"#;
/// Body returned when the fetch itself fails.
pub const INTERNAL_FAILURE_BODY: &str = r#"{"error":"Something went wrong"}"#;

const FETCH_NOTICE: &str = "Could not load headlines right now. Please try again later.";

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub country: Option<String>,
    pub category: Option<String>,
}

impl FilterParams {
    fn into_query(self) -> HeadlineQuery {
        HeadlineQuery::from_params(self.country, self.category)
    }
}

/// Forwards the filters to the headline provider and relays a successful
/// upstream body byte-for-byte. Failures collapse into one of two fixed
/// JSON bodies that never expose upstream detail.
pub async fn proxy_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Response {
    let query = params.into_query();
    info!(country = %query.country, category = %query.category, "proxying headlines request");

    match state.provider.top_headlines(&query).await {
        Ok(raw) if raw.is_success() => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            raw.body,
        )
            .into_response(),
        Ok(raw) => {
            warn!(status = raw.status, provider = state.provider.name(), "upstream rejected request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                UPSTREAM_FAILURE_BODY,
            )
                .into_response()
        }
        Err(err) => {
            error!(provider = state.provider.name(), "headline fetch failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                INTERNAL_FAILURE_BODY,
            )
                .into_response()
        }
    }
}

/// Renders the front page. Headlines come from one GET against this
/// service's own proxy endpoint at the configured site origin; if that call
/// fails the page still renders, with a notice and an empty grid.
pub async fn front_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Html<String> {
    let query = params.into_query();

    let (articles, notice) = match fetch_page_articles(&state, &query).await {
        Ok(articles) => (articles, None),
        Err(err) => {
            error!("front page fetch failed: {err}");
            (Vec::new(), Some(FETCH_NOTICE))
        }
    };

    Html(render::render_page(&query, &articles, notice))
}

async fn fetch_page_articles(state: &AppState, query: &HeadlineQuery) -> Result<Vec<Article>> {
    let pairs = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("country", &query.country)
        .append_pair("category", &query.category)
        .finish();
    let url = format!("{}/api/news?{}", state.config.site_url, pairs);

    let response = state.http.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Provider(format!(
            "proxy endpoint returned status {}",
            response.status()
        )));
    }

    let mut body: serde_json::Value = response.json().await?;
    match body.get_mut("articles") {
        Some(value) => Ok(serde_json::from_value(value.take())?),
        None => {
            warn!("headline payload had no articles field");
            Ok(Vec::new())
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
