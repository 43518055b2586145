pub mod routes;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::services::registry_service::SharedRegistry;

pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler)
                .delete(routes::activities::unregister_handler),
        )
        .with_state(registry)
}
