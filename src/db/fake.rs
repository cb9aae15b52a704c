//! 테스트용 인메모리 [`DocumentQuery`] 구현
//!
//! 미리 정해둔 응답을 돌려주고, 받은 쿼리와 옵션을 기록해 두어
//! 테스트가 호출 인자를 검사할 수 있게 합니다.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::db::{DocumentQuery, QueryError, QueryOptions, SqlQuerySpec};

pub struct FakeDocumentQuery {
    response: Result<Vec<Value>, QueryError>,
    calls: Mutex<Vec<(SqlQuerySpec, QueryOptions)>>,
}

impl FakeDocumentQuery {
    pub fn returning(documents: Vec<Value>) -> Self {
        Self {
            response: Ok(documents),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: QueryError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(SqlQuerySpec, QueryOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentQuery for FakeDocumentQuery {
    async fn query(
        &self,
        spec: &SqlQuerySpec,
        options: &QueryOptions,
    ) -> Result<Vec<Value>, QueryError> {
        self.calls.lock().unwrap().push((spec.clone(), *options));
        self.response.clone()
    }
}
