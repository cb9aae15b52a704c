//! 리포트 API 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::ReportQuery;
pub use response::ReportResponse;
