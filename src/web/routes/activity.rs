use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::services::registry::{ActivityRegistry, RegistryError};
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    // A missing parameter is treated like an empty one so both get the same 400 body.
    fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, query) = extract_target("signup", path, query)?;
    match registry.signup(&activity_name, query.email()) {
        Ok(confirmation) => {
            info!(
                activity = %confirmation.activity,
                participant = %confirmation.participant,
                "signup accepted"
            );
            Ok(Json(MessageResponse {
                message: confirmation.message(),
            }))
        }
        Err(e) => {
            log_rejection("signup", &e);
            Err(e.into())
        }
    }
}

pub async fn activity_remove_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, query) = extract_target("remove", path, query)?;
    match registry.remove(&activity_name, query.email()) {
        Ok(confirmation) => {
            info!(
                activity = %confirmation.activity,
                participant = %confirmation.participant,
                "participant removed"
            );
            Ok(Json(MessageResponse {
                message: confirmation.message(),
            }))
        }
        Err(e) => {
            log_rejection("remove", &e);
            Err(e.into())
        }
    }
}

fn extract_target(
    op: &str,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<(String, EmailQuery), ApiError> {
    let Path(activity_name) = path.map_err(|e| {
        warn!("{} rejected, bad activity path: {}", op, e);
        ApiError::from(e)
    })?;
    let Query(query) = query.map_err(|e| {
        warn!("{} rejected, bad query string: {}", op, e);
        ApiError::from(e)
    })?;
    Ok((activity_name, query))
}

fn log_rejection(op: &str, err: &RegistryError) {
    match err {
        RegistryError::NotFound { activity } => {
            warn!("{} rejected for unknown activity {:?}", op, activity)
        }
        RegistryError::AlreadyRegistered {
            activity,
            participant,
        }
        | RegistryError::NotRegistered {
            activity,
            participant,
        } => warn!("{} rejected for {} in {}: {}", op, participant, activity, err),
        RegistryError::Full {
            activity,
            max_participants,
        } => warn!(
            "{} rejected, {} is at capacity ({})",
            op, activity, max_participants
        ),
        RegistryError::InvalidInput { .. } => warn!("{} rejected: {}", op, err),
    }
}
