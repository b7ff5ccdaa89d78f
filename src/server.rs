use std::collections::HashMap;
use std::sync::Arc;
use axum::{Router, Json};
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::cors::{CorsLayer, Any};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use crate::construct::StringRecord;
use crate::error::{Result, StringKeeperError};
use crate::interpreter;
use crate::persist::RecordStore;
use crate::predicate::PredicateSet;

pub type SharedStore = Arc<dyn RecordStore>;

#[derive(Serialize)]
pub struct RecordList {
    pub data: Vec<StringRecord>,
    pub count: usize,
    #[serde(skip_serializing_if = "PredicateSet::is_empty")]
    pub filters_applied: PredicateSet,
}

#[derive(Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: PredicateSet,
}

#[derive(Serialize)]
pub struct InterpretedList {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl StringKeeperError {
    pub fn status(&self) -> StatusCode {
        match self {
            StringKeeperError::MissingField(_)
            | StringKeeperError::MalformedBody(_)
            | StringKeeperError::InvalidParameter(_)
            | StringKeeperError::MissingQuery => StatusCode::BAD_REQUEST,
            StringKeeperError::NotAString
            | StringKeeperError::SemanticConflict => StatusCode::UNPROCESSABLE_ENTITY,
            StringKeeperError::AlreadyExists => StatusCode::CONFLICT,
            StringKeeperError::NotFound => StatusCode::NOT_FOUND,
            StringKeeperError::Config(_)
            | StringKeeperError::Persistence(_)
            | StringKeeperError::DataCorruption { .. }
            | StringKeeperError::Execution(_)
            | StringKeeperError::Lock(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StringKeeperError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = format!("{self}");
        warn!(%msg, code=%status.as_u16(), "request error");
        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub fn router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);
    Router::new()
        .route("/strings", get(list_strings).post(create_string))
        .route("/strings/filter-by-natural-language", get(filter_by_natural_language))
        // values may contain slashes, hence the wildcard
        .route("/strings/*value", get(get_string).delete(delete_string))
        .layer(cors)
        .with_state(store)
}

// The store is synchronous today, so calls are moved off the async workers.
async fn blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|e| {
        warn!(error=%e, "Join error");
        StringKeeperError::Execution(e.to_string())
    })?
}

fn value_from_body(body: &[u8]) -> Result<String> {
    // an empty body carries no fields at all
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(StringKeeperError::MissingField("value"));
    }
    let payload: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| StringKeeperError::MalformedBody(e.to_string()))?;
    match payload.get("value") {
        None => Err(StringKeeperError::MissingField("value")),
        Some(serde_json::Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(StringKeeperError::NotAString),
    }
}

async fn create_string(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<StringRecord>)> {
    let value = value_from_body(&body)?;
    info!(length = value.len(), "POST /strings");
    let record = StringRecord::new(value);
    let record = blocking(move || store.insert_if_absent(&record).map(|_| record)).await?;
    info!(id = record.digest(), "string created");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_strings(
    State(store): State<SharedStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<RecordList>> {
    info!(?params, "GET /strings");
    let filters = PredicateSet::from_params(&params)?;
    let (filters, data) = blocking(move || {
        let data = store.filter(&filters)?;
        Ok((filters, data))
    })
    .await?;
    Ok(Json(RecordList {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

async fn get_string(
    State(store): State<SharedStore>,
    Path(value): Path<String>,
) -> Result<Json<StringRecord>> {
    info!(%value, "GET /strings/{{value}}");
    let record = blocking(move || store.find_by_value(&value)).await?;
    Ok(Json(record))
}

async fn delete_string(
    State(store): State<SharedStore>,
    Path(value): Path<String>,
) -> Result<StatusCode> {
    info!(%value, "DELETE /strings/{{value}}");
    blocking(move || store.delete_by_value(&value)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn filter_by_natural_language(
    State(store): State<SharedStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<InterpretedList>> {
    let query = match params.get("query") {
        Some(query) if !query.is_empty() => query.clone(),
        _ => return Err(StringKeeperError::MissingQuery),
    };
    info!(%query, "natural language query");
    let interpretation = blocking(move || interpreter::interpret(store.as_ref(), &query)).await?;
    Ok(Json(InterpretedList {
        count: interpretation.count(),
        interpreted_query: InterpretedQuery {
            original: interpretation.parsed.original,
            parsed_filters: interpretation.parsed.predicates,
        },
        data: interpretation.records,
    }))
}
