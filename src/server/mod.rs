use crate::chart::{self, ChartError, ChartResult};
use crate::data::configuration::Configuration;
use crate::data::dbconnector::SQLConnector;
use crate::entity::helpers::ChartRecord;
pub(crate) mod types;
use axum::extract::{Path, Query, Request, State};
use axum::http::HeaderMap;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use log::debug;
use serde_json::Value;
use std::env;
use std::sync::Arc;
use types::{
    BirthInfo, HealthResponse, ListChartsParams, MetadataResponse, SummaryResponse,
};

#[derive(Clone)]
pub struct ServerConfig {
    pub database_connection: Arc<SQLConnector>,
    /// Shared secret from the API_KEY environment variable; unset or empty
    /// leaves every route open.
    pub api_key: Option<String>,
}

pub async fn run(_config: Configuration, database_connection: SQLConnector, port: u16) {
    debug!("Starting server on port {}", port);

    let state = ServerConfig {
        database_connection: Arc::new(database_connection),
        api_key: env::var("API_KEY").ok().filter(|key| !key.is_empty()),
    };

    let protected = Router::new()
        .route("/analyze", post(analyze_birth_chart))
        .route("/charts", post(create_chart).get(list_charts))
        .route("/charts/{id}", get(get_chart).delete(delete_chart))
        .route("/summary", post(summarize_birth_chart))
        .route("/summary/{id}", get(get_chart_summary))
        .route("/metadata", get(get_metadata))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(protected)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

async fn require_api_key(
    State(state): State<ServerConfig>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    if let Some(expected) = &state.api_key {
        let provided = headers.get("x-api-key").and_then(|value| value.to_str().ok());
        if provided != Some(expected.as_str()) {
            return Err((StatusCode::UNAUTHORIZED, String::from("Invalid API key")));
        }
    }
    Ok(next.run(request).await)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn compute_chart(payload: &BirthInfo) -> Result<ChartResult, (StatusCode, String)> {
    payload
        .validate()
        .map_err(|message| (StatusCode::UNPROCESSABLE_ENTITY, message))?;
    chart::analyze(
        payload.year,
        payload.month,
        payload.day,
        payload.hour,
        payload.is_lunar,
        payload.is_intercalation,
    )
    .map_err(|e| {
        let status = match e {
            ChartError::Calendar(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ChartError::DestinyNumberOutOfRange(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, e.to_string())
    })
}

async fn analyze_birth_chart(
    Json(payload): Json<BirthInfo>,
) -> Result<Json<ChartResult>, (StatusCode, String)> {
    let result = compute_chart(&payload)?;
    Ok(Json(result))
}

async fn create_chart(
    State(state): State<ServerConfig>,
    Json(payload): Json<BirthInfo>,
) -> Result<(StatusCode, Json<ChartRecord>), (StatusCode, String)> {
    let mut result = compute_chart(&payload)?;

    let birth_info = serde_json::to_value(&payload)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let chart_data = serde_json::to_value(&result)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let mut record = state
        .database_connection
        .save_chart(birth_info, chart_data)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    // Tag the response copy with its assigned id; the stored row stays as
    // computed.
    result.chart_id = Some(record.id);
    record.chart_data = serde_json::to_value(&result)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_charts(
    State(state): State<ServerConfig>,
    Query(params): Query<ListChartsParams>,
) -> Result<Json<Vec<ChartRecord>>, (StatusCode, String)> {
    let limit = params.limit.unwrap_or(20).min(100);
    let offset = params.offset.unwrap_or(0);

    let records = state
        .database_connection
        .list_charts(limit, offset)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(records))
}

async fn get_chart(
    State(state): State<ServerConfig>,
    Path(id): Path<i32>,
) -> Result<Json<ChartRecord>, (StatusCode, String)> {
    let record = state
        .database_connection
        .get_chart(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    match record {
        Some(record) => Ok(Json(record)),
        None => Err((StatusCode::NOT_FOUND, format!("No chart with id {id}"))),
    }
}

async fn delete_chart(
    State(state): State<ServerConfig>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, String)> {
    let deleted = state
        .database_connection
        .delete_chart(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("No chart with id {id}")))
    }
}

async fn summarize_birth_chart(
    Json(payload): Json<BirthInfo>,
) -> Result<Json<SummaryResponse>, (StatusCode, String)> {
    let result = compute_chart(&payload)?;
    Ok(Json(SummaryResponse {
        summary: result.summary,
        ming_gong: result.ming_gong,
        guo_shu: result.guo_shu,
        jami_position: result.jami_position,
        chart_id: None,
    }))
}

async fn get_chart_summary(
    State(state): State<ServerConfig>,
    Path(id): Path<i32>,
) -> Result<Json<SummaryResponse>, (StatusCode, String)> {
    let record = state
        .database_connection
        .get_chart(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let record = match record {
        Some(record) => record,
        None => return Err((StatusCode::NOT_FOUND, format!("No chart with id {id}"))),
    };

    Ok(Json(SummaryResponse {
        summary: string_field(&record.chart_data, "summary")?,
        ming_gong: int_field(&record.chart_data, "ming_gong")?,
        guo_shu: int_field(&record.chart_data, "guo_shu")?,
        jami_position: int_field(&record.chart_data, "jami_position")?,
        chart_id: Some(record.id),
    }))
}

async fn get_metadata() -> Json<MetadataResponse> {
    Json(MetadataResponse {
        stars: chart::stars::list_star_metadata(),
        palaces: chart::stars::list_palace_metadata(),
    })
}

fn string_field(data: &Value, field: &str) -> Result<String, (StatusCode, String)> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed_field(field))
}

fn int_field(data: &Value, field: &str) -> Result<i32, (StatusCode, String)> {
    data.get(field)
        .and_then(Value::as_i64)
        .map(|value| value as i32)
        .ok_or_else(|| malformed_field(field))
}

fn malformed_field(field: &str) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("stored chart data is missing {field}"),
    )
}
