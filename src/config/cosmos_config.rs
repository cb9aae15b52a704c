//! Cosmos DB 연결 설정 모듈
//!
//! 문서 저장소(Cosmos DB SQL API) 접속에 필요한 네 가지 필수 값과
//! 선택적 튜닝 값을 환경 변수에서 읽어 하나의 [`CosmosConfig`]로 묶습니다.
//!
//! 필수 값이 없거나 형식이 잘못된 경우 요청 처리 단계가 아니라
//! 서버 시작 단계에서 [`ConfigError`]로 실패합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export CosmosDbEndpoint="https://my-account.documents.azure.com:443/"
//! export CosmosDbKey="<base64 master key>"
//! export CosmosDbDatabaseName="facturas-db"
//! export CosmosDbContainerName="facturas"
//!
//! # 선택
//! export COSMOS_REQUEST_TIMEOUT_SECS="30"
//! export COSMOS_MAX_ITEM_COUNT="100"
//! ```

use std::env;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::error;
use thiserror::Error;

use crate::utils::string_utils::{clean_optional_string, mask_secret};

pub const ENDPOINT_VAR: &str = "CosmosDbEndpoint";
pub const KEY_VAR: &str = "CosmosDbKey";
pub const DATABASE_VAR: &str = "CosmosDbDatabaseName";
pub const CONTAINER_VAR: &str = "CosmosDbContainerName";
pub const REQUEST_TIMEOUT_VAR: &str = "COSMOS_REQUEST_TIMEOUT_SECS";
pub const MAX_ITEM_COUNT_VAR: &str = "COSMOS_MAX_ITEM_COUNT";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_ITEM_COUNT: u32 = 100;

/// 로그에 노출되는 키 앞부분 길이
const VISIBLE_KEY_CHARS: usize = 10;

/// 시작 단계 설정 오류
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수가 없거나 비어있음
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// 환경 변수 값의 형식이 잘못됨
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Cosmos DB 접속 설정
///
/// 서버 시작 시 한 번 생성되어 [`CosmosClient`](crate::db::CosmosClient)
/// 생성자로 전달됩니다. 이후에는 읽기 전용으로만 사용됩니다.
#[derive(Clone)]
pub struct CosmosConfig {
    /// 계정 엔드포인트 (끝의 `/` 제거됨)
    pub endpoint: String,
    /// base64 인코딩된 마스터 키
    pub key: String,
    /// 데이터베이스 ID
    pub database: String,
    /// 컨테이너 ID
    pub container: String,
    /// 저장소 호출 한 번에 대한 타임아웃
    pub request_timeout: Duration,
    /// 페이지당 최대 문서 수 힌트
    pub max_item_count: u32,
}

impl std::fmt::Debug for CosmosConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmosConfig")
            .field("endpoint", &self.endpoint)
            .field("key", &self.masked_key())
            .field("database", &self.database)
            .field("container", &self.container)
            .field("request_timeout", &self.request_timeout)
            .field("max_item_count", &self.max_item_count)
            .finish()
    }
}

impl CosmosConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 임의의 조회 함수로부터 설정을 읽고 검증합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 필수 값이 없거나 공백뿐인 경우
    /// * `ConfigError::Invalid` - 엔드포인트가 http/https URL이 아니거나 키가 base64가 아닌 경우
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            clean_optional_string(lookup(name)).ok_or(ConfigError::Missing(name))
        };

        let endpoint = required(ENDPOINT_VAR)?;
        let key = required(KEY_VAR)?;
        let database = required(DATABASE_VAR)?;
        let container = required(CONTAINER_VAR)?;

        let endpoint = validate_endpoint(&endpoint)?;

        STANDARD.decode(&key).map_err(|e| ConfigError::Invalid {
            name: KEY_VAR,
            reason: format!("master key is not valid base64 ({})", e),
        })?;

        let request_timeout_secs = parse_or_default(
            lookup(REQUEST_TIMEOUT_VAR),
            REQUEST_TIMEOUT_VAR,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        );
        let max_item_count = parse_or_default(
            lookup(MAX_ITEM_COUNT_VAR),
            MAX_ITEM_COUNT_VAR,
            DEFAULT_MAX_ITEM_COUNT,
        );

        Ok(Self {
            endpoint,
            key,
            database,
            container,
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_item_count,
        })
    }

    /// 서명과 URL에 쓰이는 컨테이너 리소스 링크 (`dbs/{db}/colls/{container}`)
    pub fn collection_link(&self) -> String {
        format!("dbs/{}/colls/{}", self.database, self.container)
    }

    /// 사용자에게 보여줄 리소스 이름 (`{db}/{container}`)
    pub fn resource_name(&self) -> String {
        format!("{}/{}", self.database, self.container)
    }

    /// 로그용으로 가린 마스터 키
    pub fn masked_key(&self) -> String {
        mask_secret(&self.key, VISIBLE_KEY_CHARS)
    }
}

fn validate_endpoint(raw: &str) -> Result<String, ConfigError> {
    let url = reqwest::Url::parse(raw).map_err(|e| ConfigError::Invalid {
        name: ENDPOINT_VAR,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(ConfigError::Invalid {
            name: ENDPOINT_VAR,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

fn parse_or_default<T>(raw: Option<String>, name: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + PartialOrd + Default + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let Some(raw) = clean_optional_string(raw) else {
        return default;
    };

    match raw.parse::<T>() {
        Ok(value) if value > T::default() => value,
        Ok(value) => {
            error!("{} 값 {}은(는) 0보다 커야 합니다. 기본값 {} 사용", name, value, default);
            default
        }
        Err(e) => {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }
    }
}
