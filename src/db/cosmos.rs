//! Cosmos DB SQL REST API 클라이언트
//!
//! [`DocumentQuery`]의 운영 환경 구현체입니다. `reqwest`로 컨테이너의
//! `docs` 리소스에 쿼리를 보내고, 응답의 `x-ms-continuation` 헤더가 없어질 때까지
//! 페이지를 이어 받아 하나의 문서 목록으로 합칩니다.
//!
//! # 요청 형식
//!
//! ```text
//! POST {endpoint}/dbs/{db}/colls/{container}/docs
//! authorization: type%3Dmaster%26ver%3D1.0%26sig%3D...
//! x-ms-date: Mon, 07 Apr 2025 13:05:09 GMT
//! x-ms-version: 2018-12-31
//! content-type: application/query+json
//! x-ms-documentdb-isquery: True
//! x-ms-documentdb-query-enablecrosspartition: True
//!
//! {"query": "SELECT * FROM c WHERE ...", "parameters": [...]}
//! ```
//!
//! # 상태 코드 처리
//!
//! | 상태 | 결과 |
//! |------|------|
//! | 2xx | 문서 목록 |
//! | 404 | `QueryError::ResourceNotFound` |
//! | 그 외 | `QueryError::Transient` |

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::config::CosmosConfig;
use crate::db::auth::{rfc1123_date, MasterKey};
use crate::db::{DocumentQuery, QueryError, QueryOptions, SqlQuerySpec};

/// REST API 버전
pub const API_VERSION: &str = "2018-12-31";

const HEADER_DATE: &str = "x-ms-date";
const HEADER_VERSION: &str = "x-ms-version";
const HEADER_IS_QUERY: &str = "x-ms-documentdb-isquery";
const HEADER_CROSS_PARTITION: &str = "x-ms-documentdb-query-enablecrosspartition";
const HEADER_MAX_ITEM_COUNT: &str = "x-ms-max-item-count";
const HEADER_CONTINUATION: &str = "x-ms-continuation";
const QUERY_CONTENT_TYPE: &str = "application/query+json";

/// 쿼리 응답 한 페이지
#[derive(Debug, Deserialize)]
struct QueryPage {
    #[serde(rename = "Documents", default)]
    documents: Vec<Value>,
}

/// Cosmos DB 컨테이너 질의 클라이언트
///
/// 내부의 `reqwest::Client`는 연결 풀을 공유하므로 `Arc`로 감싸
/// 여러 워커에서 동시에 사용해도 됩니다.
#[derive(Debug, Clone)]
pub struct CosmosClient {
    http: reqwest::Client,
    key: MasterKey,
    endpoint: String,
    collection_link: String,
    resource_name: String,
    max_item_count: u32,
}

impl CosmosClient {
    /// 검증된 설정으로 클라이언트를 생성합니다.
    ///
    /// 네트워크 호출은 하지 않습니다. 데이터베이스/컨테이너 존재 여부는
    /// 첫 쿼리에서 `ResourceNotFound`로 드러납니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let client = CosmosClient::new(CosmosConfig::from_env()?)?;
    /// ```
    pub fn new(config: CosmosConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let key = MasterKey::from_base64(&config.key)?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            key,
            collection_link: config.collection_link(),
            resource_name: config.resource_name(),
            endpoint: config.endpoint,
            max_item_count: config.max_item_count,
        })
    }

    /// 컨테이너 문서 리소스 URL
    pub fn documents_url(&self) -> String {
        format!("{}/{}/docs", self.endpoint, self.collection_link)
    }

    /// 한 페이지를 요청하고 (문서, 다음 continuation 토큰)을 돌려줍니다.
    async fn fetch_page(
        &self,
        body: &[u8],
        options: &QueryOptions,
        continuation: Option<&str>,
    ) -> Result<(Vec<Value>, Option<String>), QueryError> {
        let date = rfc1123_date(Utc::now());
        let token = self
            .key
            .authorization_token("POST", "docs", &self.collection_link, &date);
        let max_item_count = options.max_item_count.unwrap_or(self.max_item_count);

        let mut request = self
            .http
            .post(self.documents_url())
            .header(AUTHORIZATION, token)
            .header(HEADER_DATE, &date)
            .header(HEADER_VERSION, API_VERSION)
            .header(CONTENT_TYPE, QUERY_CONTENT_TYPE)
            .header(HEADER_IS_QUERY, "True")
            .header(
                HEADER_CROSS_PARTITION,
                if options.enable_cross_partition { "True" } else { "False" },
            )
            .header(HEADER_MAX_ITEM_COUNT, max_item_count.to_string())
            .body(body.to_vec());

        if let Some(token) = continuation {
            request = request.header(HEADER_CONTINUATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| QueryError::Transient(format!("Cosmos DB 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &error_text, &self.resource_name));
        }

        let next = response
            .headers()
            .get(HEADER_CONTINUATION)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let page = response
            .json::<QueryPage>()
            .await
            .map_err(|e| QueryError::Transient(format!("Cosmos DB 응답 파싱 실패: {}", e)))?;

        Ok((page.documents, next))
    }
}

#[async_trait]
impl DocumentQuery for CosmosClient {
    async fn query(
        &self,
        spec: &SqlQuerySpec,
        options: &QueryOptions,
    ) -> Result<Vec<Value>, QueryError> {
        let body = serde_json::to_vec(spec)
            .map_err(|e| QueryError::Transient(format!("쿼리 직렬화 실패: {}", e)))?;

        let mut documents = Vec::new();
        let mut continuation: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let (page, next) = self
                .fetch_page(&body, options, continuation.as_deref())
                .await?;
            pages += 1;
            documents.extend(page);

            match next {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        debug!(
            "Cosmos DB 쿼리 완료 - 컨테이너: {}, 페이지: {}, 문서: {}",
            self.resource_name,
            pages,
            documents.len()
        );

        Ok(documents)
    }
}

/// 실패 상태 코드를 [`QueryError`]로 분류합니다.
fn classify_failure(status: StatusCode, body: &str, resource_name: &str) -> QueryError {
    if status == StatusCode::NOT_FOUND {
        warn!("Cosmos DB 리소스 없음: {} ({})", resource_name, body);
        return QueryError::ResourceNotFound {
            resource: resource_name.to_string(),
        };
    }

    QueryError::Transient(format!("Cosmos DB 쿼리 실패 ({}): {}", status, body))
}
