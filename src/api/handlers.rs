use super::types::{
    IndexResponse, SearchSettings, MSG_INDEX_NOT_FOUND, MSG_INVALID_VALUE, MSG_SEARCH_CANCELED,
    MSG_UNKNOWN,
};
use crate::indices::{CancelToken, IndexError, Indices};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_index(
    Extension(indices): Extension<Arc<dyn Indices>>,
    Extension(settings): Extension<SearchSettings>,
    Path(raw_value): Path<String>,
) -> (StatusCode, Json<IndexResponse>) {
    let value = match parse_value(&raw_value) {
        Some(value) => value,
        None => {
            tracing::error!("Failed to parse value from path: {:?}", raw_value);
            return (
                StatusCode::BAD_REQUEST,
                Json(IndexResponse::error(MSG_INVALID_VALUE)),
            );
        }
    };

    match search_with_settings(indices, settings, value).await {
        Ok(index) => (StatusCode::OK, Json(IndexResponse::Found { index, value })),
        Err(IndexError::NotFound { .. }) => {
            tracing::warn!("Index not found for value {}", value);
            (
                StatusCode::NOT_FOUND,
                Json(IndexResponse::error(MSG_INDEX_NOT_FOUND)),
            )
        }
        Err(IndexError::Canceled(cause)) => {
            tracing::warn!("Search for value {} canceled: {}", value, cause);
            (
                StatusCode::REQUEST_TIMEOUT,
                Json(IndexResponse::error(MSG_SEARCH_CANCELED)),
            )
        }
        Err(e) => {
            tracing::error!(
                "Unexpected error during search for value {} [{}]: {:#}",
                value,
                e.code(),
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(IndexResponse::error(MSG_UNKNOWN)),
            )
        }
    }
}

/// Accepts base-10 integers that are zero or positive.
fn parse_value(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|value| *value >= 0)
}

/// Runs one search on the blocking pool under a fresh token.
///
/// The token carries the configured deadline and is cancelled if this future is
/// dropped before the search returns (e.g. the client went away).
pub async fn search_with_settings(
    indices: Arc<dyn Indices>,
    settings: SearchSettings,
    value: i64,
) -> Result<usize, IndexError> {
    let token = match settings.timeout {
        Some(timeout) => CancelToken::with_timeout(timeout),
        None => CancelToken::new(),
    };
    let guard = token.clone().drop_guard();

    let joined = tokio::task::spawn_blocking(move || indices.search(value, &token)).await;
    guard.disarm();

    match joined {
        Ok(result) => result,
        Err(e) => Err(IndexError::Unknown(
            anyhow::Error::new(e).context("search task failed"),
        )),
    }
}
