//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층에 위임하고 결과를 HTTP 응답으로 바꾸는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, curl, 정산 대시보드)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증, 응답 조립          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 조회 + 집계                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 파라미터화된 쿼리              ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   db - Cosmos DB SQL REST API                   ← Store
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다. [`AppError`]가
//! `ResponseError`를 구현하므로 `?` 연산자만으로 상태 코드와 평문 본문이 결정됩니다.
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `MissingParameter` | 400 |
//! | `ResourceNotFound` | 500 (리소스 이름 포함) |
//! | `TransientQueryError`, `InternalError` | 500 (일반 메시지) |
//!
//! ## 모듈
//!
//! - [`reports`] - `/api/GeneradorReporte` 정산 리포트
//!
//! [`AppError`]: crate::errors::AppError

pub mod reports;
