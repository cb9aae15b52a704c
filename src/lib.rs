//! 송장 정산 리포트 서비스
//!
//! 사용자와 정산 디렉터리(기간 태그)로 Cosmos DB에서 송장 문서를 조회하고,
//! `montoTotal` 합계를 계산해 JSON 리포트로 돌려주는 HTTP 서비스입니다.
//!
//! # Features
//!
//! - **파라미터 검증**: `username`, `directorio` 필수 (누락 시 400)
//! - **안전한 조회**: 사용자 입력은 항상 쿼리 파라미터로 바인딩
//! - **관대한 집계**: 금액이 없거나 숫자가 아닌 송장은 0으로 합산
//! - **에러 매핑**: 내부 오류 상세는 로그에만 남기고 안전한 메시지만 응답
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/GeneradorReporte, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 조립
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 조회 + 집계
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 파라미터화된 쿼리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Cosmos DB API  │ ← DocumentQuery 구현체
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use invoice_report_service::config::CosmosConfig;
//! use invoice_report_service::db::CosmosClient;
//! use invoice_report_service::domain::ReportRequest;
//! use invoice_report_service::repositories::invoices::InvoiceRepository;
//! use invoice_report_service::services::reports::ReportService;
//!
//! let client = CosmosClient::new(CosmosConfig::from_env()?)?;
//! let service = ReportService::new(InvoiceRepository::new(Arc::new(client)));
//!
//! let report = service.generate_report(ReportRequest::new("alice", "2025-04")).await?;
//! println!("{}건, 합계 {}", report.invoice_count, report.total_amount);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
