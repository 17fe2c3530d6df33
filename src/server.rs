//! Axum 기반 HTTP 계층.
//!
//! ```text
//! /
//! ├── /enviroment/{ipc}/{fuel}  - EV vs. combustion metrics report
//! └── /health                   - liveness check
//! ```
//!
//! 모든 응답은 `{ "error", "status", "body" }` 형태의 JSON 봉투를 사용한다.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::AppError;
use crate::pipeline::{MetricsPipeline, MetricsRequest};

/// 성공/실패 응답이 공유하는 JSON 봉투.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub error: bool,
    pub status: u16,
    pub body: T,
}

/// `body`를 담은 200 응답.
pub fn success<T: Serialize>(body: T) -> Response {
    let status = StatusCode::OK;
    (
        status,
        Json(ApiResponse {
            error: false,
            status: status.as_u16(),
            body,
        }),
    )
        .into_response()
}

/// 오류 메시지를 담은 응답. 알 수 없는 코드는 500으로 처리한다.
pub fn failure(code: u16, message: impl Into<String>) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ApiResponse {
            error: true,
            status: status.as_u16(),
            body: message.into(),
        }),
    )
        .into_response()
}

/// 읽기 전용 파이프라인을 공유하는 라우터를 만든다.
pub fn build_router(pipeline: Arc<MetricsPipeline>) -> Router {
    Router::new()
        .route("/enviroment/{ipc}/{fuel}", get(environment_handler))
        .route("/health", get(health_handler))
        .with_state(pipeline)
}

/// `GET /enviroment/{ipc}/{fuel}` 핸들러.
///
/// 이율 파싱 실패, 알 수 없는 연료, 비유한 결과는 모두 500과 오류 메시지로 응답한다.
async fn environment_handler(
    State(pipeline): State<Arc<MetricsPipeline>>,
    Path((ipc, fuel)): Path<(String, String)>,
) -> Response {
    let annual_rate_percent = match ipc.trim().parse::<f64>() {
        Ok(rate) => rate,
        Err(e) => {
            warn!(ipc = %ipc, error = %e, "rejecting unparsable rate");
            return failure(500, AppError::InvalidRate(format!("'{ipc}' ({e})")).to_string());
        }
    };

    let request = MetricsRequest::new(annual_rate_percent, fuel);
    match pipeline.compute(&request) {
        Ok(report) => {
            info!(
                ipc = annual_rate_percent,
                fuel = %request.fuel,
                young_tree = report.young_tree,
                old_tree = report.old_tree,
                "computed environment metrics"
            );
            debug!(?report, "full metrics report");
            success(report)
        }
        Err(e) => {
            warn!(ipc = annual_rate_percent, fuel = %request.fuel, error = %e, "metrics request failed");
            failure(e.code(), e.to_string())
        }
    }
}

/// `GET /health` 핸들러.
async fn health_handler() -> Response {
    success("ok")
}
