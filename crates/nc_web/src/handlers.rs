use axum::{
    extract::{Form, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use nc_core::Error;
use crate::{flash, views, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: String,
}

pub async fn about() -> impl IntoResponse {
    Html(views::about_page())
}

/// Shows the input form, or checks the article straight away when `?url=` is given.
pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
    headers: HeaderMap,
) -> Response {
    if let Some(url) = query.url {
        return check_article(&state, &url).await;
    }

    match flash::read(&headers, &state.config.secret_key) {
        Some(message) => (
            [(header::SET_COOKIE, flash::clear_cookie())],
            Html(views::search_page(Some(&message))),
        )
            .into_response(),
        None => Html(views::search_page(None)).into_response(),
    }
}

/// Form submission. A `url` query parameter wins over the `search` field.
pub async fn search_submit(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
    Form(form): Form<SearchForm>,
) -> Response {
    let url = query.url.unwrap_or(form.search);
    check_article(&state, &url).await
}

async fn check_article(state: &AppState, url: &str) -> Response {
    match state.pipeline.run(url).await {
        Ok(record) => {
            info!("✅ Rendered results for {}", record.url);
            Html(views::result_page(&record)).into_response()
        }
        Err(e) => {
            warn!("↩️ Sending user back to the form: {}", e);
            (
                [(header::SET_COOKIE, flash::set_cookie(&state.config.secret_key, e.user_message()))],
                Redirect::to("/search"),
            )
                .into_response()
        }
    }
}

pub async fn api_check(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let url = query.url.unwrap_or_default();
    match state.pipeline.run(&url).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => {
            let status = match e {
                Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            };
            (status, Json(json!({ "error": e.user_message(), "detail": e.to_string() }))).into_response()
        }
    }
}

pub async fn api_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let Some(url) = query.url.filter(|u| !u.is_empty()) else {
        warn!("URL query parameter is missing");
        return (StatusCode::BAD_REQUEST, "The url query parameter is missing").into_response();
    };

    match state.summarizer.summarize_page(&url).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => {
            warn!("Error creating summary for {}: {}", url, e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}
