//! # Domain Layer
//!
//! 송장 리포트 서비스의 도메인 계층입니다.
//!
//! ## 구조
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장소 문서 (InvoiceRecord)
//! ├── dto/        ← HTTP 요청/응답 형식 (ReportQuery, ReportResponse)
//! └── models/     ← 요청 범위 값 객체 (ReportRequest, InvoiceTotals, ReportResult)
//! ```
//!
//! ## 데이터 흐름
//!
//! 1. `ReportQuery`를 검증해 `ReportRequest`를 만듭니다.
//! 2. 리포지토리가 `Vec<InvoiceRecord>`를 돌려줍니다.
//! 3. 집계기가 `InvoiceTotals`를 계산합니다.
//! 4. `ReportResult`를 `ReportResponse`로 바꿔 직렬화합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::invoices::InvoiceRecord;
pub use dto::reports::{ReportQuery, ReportResponse};
pub use models::reports::{InvoiceTotals, ReportRequest, ReportResult};
