use std::convert::Infallible;
use std::sync::Arc;
use hyper::StatusCode;
use serde::Deserialize;
use warp::Reply;
use crate::errors::StatsError;
use crate::middleware::add_stats_headers;
use crate::models::{AppState, StoreId};
use crate::services::{invalidate_store_stats, load_store_stats, record_access};


#[derive(Debug, Deserialize)]
pub struct AccessEvent {
    pub visitor: String,
}

pub async fn get_stats(store_id: StoreId, state: Arc<AppState>) -> Result<warp::reply::Response, warp::Rejection> {
    if !state.stats_enabled() {
        return Err(warp::reject::custom(StatsError::Disabled));
    }

    let (snapshot, origin) = load_store_stats(&state, store_id).await;
    let mut response = warp::reply::json(&snapshot).into_response();
    add_stats_headers(response.headers_mut(), origin);
    Ok(response)
}

pub async fn invalidate_stats(store_id: StoreId, state: Arc<AppState>) -> Result<StatusCode, Infallible> {
    invalidate_store_stats(&state, store_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn post_access(
    store_id: StoreId,
    event: AccessEvent,
    state: Arc<AppState>,
) -> Result<StatusCode, Infallible> {
    if !state.stats_enabled() {
        return Ok(StatusCode::NO_CONTENT);
    }

    record_access(&state, store_id, &event.visitor);
    Ok(StatusCode::ACCEPTED)
}

pub async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found")
    } else if let Some(e) = err.find::<StatsError>() {
        match e {
            StatsError::Disabled => (StatusCode::NOT_FOUND, "Access statistics disabled"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        (StatusCode::BAD_REQUEST, "Bad Request")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(warp::reply::with_status(message.to_string(), code))
}
