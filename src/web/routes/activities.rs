use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Activity;
use crate::services::registry_service::{self, RegistryError, SharedRegistry};

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

pub async fn activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<HashMap<String, Activity>> {
    Json(registry_service::list_activities(&registry).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<SharedRegistry>,
) -> Response {
    let Some(email) = required_email(query) else {
        return missing_email_response();
    };

    match registry_service::signup(&registry, &activity_name, &email).await {
        Ok(confirmation) => Json(MessageResponse {
            message: format!(
                "Signed up {} for {}",
                confirmation.email, confirmation.activity_name
            ),
        })
        .into_response(),
        Err(e) => {
            warn!("Signup failed for {}: {}", activity_name, e);
            registry_error_response(e)
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<SharedRegistry>,
) -> Response {
    let Some(email) = required_email(query) else {
        return missing_email_response();
    };

    match registry_service::unregister(&registry, &activity_name, &email).await {
        Ok(confirmation) => Json(MessageResponse {
            message: format!(
                "Removed {} from {}",
                confirmation.email, confirmation.activity_name
            ),
        })
        .into_response(),
        Err(e) => {
            warn!("Unregister failed for {}: {}", activity_name, e);
            registry_error_response(e)
        }
    }
}

// Boundary validation: the registry is never consulted without an email.
fn required_email(query: EmailQuery) -> Option<String> {
    query.email.filter(|e| !e.trim().is_empty())
}

fn missing_email_response() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            detail: "Query parameter 'email' is required".to_string(),
        }),
    )
        .into_response()
}

fn registry_error_response(err: RegistryError) -> Response {
    let status = match err {
        RegistryError::ActivityNotFound | RegistryError::NotSignedUp => StatusCode::NOT_FOUND,
        RegistryError::AlreadySignedUp => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
        .into_response()
}
