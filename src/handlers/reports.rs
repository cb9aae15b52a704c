//! # Settlement Report HTTP Handler
//!
//! 정산 리포트 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET`, `POST` | `/api/GeneradorReporte?username=..&directorio=..` | 리포트 생성 | 200 / 400 / 500 |
//!
//! 성공 시 본문은 들여쓰기된 JSON이고, 실패 시 본문은 평문 메시지입니다.
//!
//! ```bash
//! curl "http://localhost:8080/api/GeneradorReporte?username=alice&directorio=2025-04"
//! ```

use actix_web::http::header::ContentType;
use actix_web::{route, web, HttpResponse};
use log::{error, info, warn};
use uuid::Uuid;

use crate::domain::{ReportQuery, ReportResponse};
use crate::errors::{AppError, ErrorContext};
use crate::services::reports::ReportService;

/// 정산 리포트 생성 핸들러
///
/// 검증 → 조회 → 집계 → 응답 조립 순서로 처리합니다.
/// 모든 실패는 [`AppError`]로 모여 상태 코드와 안전한 메시지로 변환되고,
/// 상세 원인은 요청 ID와 함께 로그에만 남습니다.
///
/// # Endpoint
/// `GET /api/GeneradorReporte?username={username}&directorio={directorio}`
#[route("/GeneradorReporte", method = "GET", method = "POST")]
pub async fn generate_report(
    query: web::Query<ReportQuery>,
    report_service: web::Data<ReportService>,
) -> Result<HttpResponse, AppError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] 리포트 요청 수신 - username: {:?}, directorio: {:?}",
        request_id, query.username, query.directorio
    );

    let result = build_report(query.into_inner(), &report_service).await;
    if let Err(e) = &result {
        log_failure(request_id, e);
    }

    let body = result?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

/// 리포트를 만들고 들여쓰기된 JSON 문자열로 직렬화합니다.
async fn build_report(query: ReportQuery, report_service: &ReportService) -> Result<String, AppError> {
    let request = query.into_request()?;
    let report = report_service.generate_report(request).await?;

    serde_json::to_string_pretty(&ReportResponse::from(report)).context("리포트 직렬화 실패")
}

fn log_failure(request_id: Uuid, error: &AppError) {
    match error {
        AppError::MissingParameter => {
            warn!("[{}] 필수 파라미터 누락: username, directorio", request_id)
        }
        AppError::ResourceNotFound(resource) => {
            error!("[{}] 데이터베이스 또는 컨테이너를 찾을 수 없음: {}", request_id, resource)
        }
        other => error!("[{}] 리포트 생성 실패: {}", request_id, other),
    }
}
