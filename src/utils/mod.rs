//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 비밀값 마스킹, 문자열 정리, 목록 분리
//! - [`display_terminal`] - 시작 요약 출력 포맷팅
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::mask_secret;
//!
//! let masked = mask_secret("c2VjcmV0LWtleS12YWx1ZQ==", 10); // "c2VjcmV0LW..."
//! ```

pub mod display_terminal;
pub mod string_utils;
