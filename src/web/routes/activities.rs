use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::services::registry::ActivityRegistry;

pub async fn activities_handler(
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(registry.list_activities())
}
