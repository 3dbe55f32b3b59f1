pub mod error;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::registry::ActivityRegistry;
use self::routes::{activities, activity};

pub const LANDING_PAGE: &str = "/static/index.html";

/// Full application router: JSON API, static front end and `/` redirect.
pub fn router(registry: Arc<ActivityRegistry>, static_dir: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/remove",
            delete(activity::activity_remove_handler),
        );

    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .merge(api)
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}
