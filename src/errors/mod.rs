//! 에러 타입 모듈
//!
//! [`errors`] 하위 모듈의 `AppError`, `AppResult`, `ErrorContext`를 재노출합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
