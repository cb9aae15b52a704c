//! 정산 리포트 서비스 모듈
//!
//! - [`aggregator`] - 송장 건수/합계 계산 (순수 함수)
//! - [`report_service`] - 조회 → 집계 → 조립 흐름

pub mod aggregator;
pub mod report_service;

pub use report_service::ReportService;
