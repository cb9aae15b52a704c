//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리를 생성자로 주입받으며, 요청 간 공유되는 가변 상태를 갖지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::reports::ReportService;
//!
//! let report_service = ReportService::new(invoice_repo);
//! let report = report_service.generate_report(request).await?;
//! ```

pub mod reports;
