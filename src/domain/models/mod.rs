//! # Domain Models
//!
//! 요청 하나의 범위에서만 존재하는 값 객체들입니다. 영속화되지 않습니다.
//!
//! - [`reports`] - 검증된 리포트 요청, 집계 결과, 완성된 리포트

pub mod reports;
