//! Document Store Access Module
//!
//! 문서 저장소 질의 기능을 좁은 인터페이스([`DocumentQuery`]) 뒤로 감추는 모듈입니다.
//! 리포지토리 계층은 이 trait에만 의존하므로, 테스트에서는 네트워크 없이
//! 대체 구현을 주입할 수 있습니다.
//!
//! # 구성
//!
//! - [`DocumentQuery`] - 파라미터 바인딩된 필터 쿼리를 실행하는 비동기 trait
//! - [`SqlQuerySpec`] / [`SqlParameter`] - 쿼리 템플릿과 바인딩 값
//! - [`QueryOptions`] - 교차 파티션 여부, 페이지 크기
//! - [`QueryError`] - 리소스 없음 / 그 외 일시적 오류
//! - [`cosmos`] - Cosmos DB SQL REST API 구현체
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::CosmosConfig;
//! use crate::db::{CosmosClient, DocumentQuery};
//!
//! let config = CosmosConfig::from_env()?;
//! let store: Arc<dyn DocumentQuery> = Arc::new(CosmosClient::new(config)?);
//! ```

pub mod auth;
pub mod cosmos;
#[cfg(test)]
pub(crate) mod fake;

pub use cosmos::CosmosClient;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// 쿼리 템플릿에 바인딩되는 이름 있는 파라미터
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlParameter {
    /// `@`로 시작하는 플레이스홀더 이름
    pub name: String,
    /// 바인딩 값 (쿼리 텍스트와 분리되어 전송됨)
    pub value: Value,
}

impl SqlParameter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 파라미터화된 쿼리
///
/// SQL API 요청 본문 `{"query": "...", "parameters": [...]}` 그대로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlQuerySpec {
    pub query: String,
    pub parameters: Vec<SqlParameter>,
}

impl SqlQuerySpec {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            parameters: Vec::new(),
        }
    }

    /// 이름 있는 파라미터를 추가합니다.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.push(SqlParameter::new(name, value));
        self
    }

    /// 이름으로 바인딩된 값을 찾습니다.
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}

/// 쿼리 실행 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    /// 모든 물리 파티션에 걸친 평가 허용
    pub enable_cross_partition: bool,
    /// 페이지당 최대 문서 수 (None이면 저장소 기본값)
    pub max_item_count: Option<u32>,
}

impl QueryOptions {
    pub fn cross_partition() -> Self {
        Self {
            enable_cross_partition: true,
            max_item_count: None,
        }
    }
}

/// 문서 저장소 질의 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// 설정된 데이터베이스 또는 컨테이너가 없음
    #[error("database or container not found: {resource}")]
    ResourceNotFound { resource: String },

    /// 타임아웃, 스로틀링, 전송 오류 등 그 외 모든 실패
    #[error("query failed: {0}")]
    Transient(String),
}

/// 문서 저장소 질의 기능
///
/// 파라미터화된 필터 쿼리를 실행하고, 저장소가 돌려준 순서 그대로
/// 불투명한 JSON 문서 목록을 반환합니다. 재시도는 구현체의 책임입니다.
#[async_trait]
pub trait DocumentQuery: Send + Sync {
    async fn query(
        &self,
        spec: &SqlQuerySpec,
        options: &QueryOptions,
    ) -> Result<Vec<Value>, QueryError>;
}
