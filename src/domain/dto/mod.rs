//! # Data Transfer Objects
//!
//! HTTP 계층과 도메인 사이의 데이터 형식을 정의합니다.
//!
//! ```text
//! 쿼리 문자열 ──▶ ReportQuery ──검증──▶ ReportRequest
//!                                            │
//! JSON 응답  ◀── ReportResponse ◀── ReportResult
//! ```
//!
//! 응답 필드 이름(`numero_facturas`, `monto_total_calculado`, `facturas`)은
//! 대시보드 클라이언트와의 계약이므로 변경하지 않습니다.

pub mod reports;
