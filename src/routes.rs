use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;
use crate::handlers::{get_stats, handle_rejection, invalidate_stats, post_access};
use crate::models::{AppState, StoreId};

const MAX_ACCESS_EVENT_BYTES: u64 = 16 * 1024;

pub fn routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    let state_filter = warp::any().map(move || state.clone());

    let health_check = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| "OK");

    let stats = warp::path!("stores" / StoreId / "stats")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(get_stats);

    let invalidate = warp::path!("stores" / StoreId / "stats")
        .and(warp::delete())
        .and(state_filter.clone())
        .and_then(invalidate_stats);

    let access = warp::path!("stores" / StoreId / "access")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_ACCESS_EVENT_BYTES))
        .and(warp::body::json())
        .and(state_filter)
        .and_then(post_access);

    health_check
        .or(stats)
        .or(invalidate)
        .or(access)
        .recover(handle_rejection)
        .with(warp::log::custom(log_request))
}

fn log_request(info: warp::log::Info<'_>) {
    tracing::info!(
        method = %info.method(),
        path = info.path(),
        status = info.status().as_u16(),
        elapsed_ms = info.elapsed().as_millis() as u64,
        "request served"
    );
}
