//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호
//! - `API_PREFIX`: 버전이 붙은 API 루트 경로 (예: "/v1")
//! - `DB_MAX_CONNECTIONS`: 연결 풀의 최대 연결 수

use std::{env, path::PathBuf};

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 main에서만 사용합니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 경로 (예: "sqlite:data/spicy.db?mode=rwc")
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
    /// 모든 API 라우트가 중첩될 경로 (기본값: "/v1")
    pub api_prefix: String,
    /// 연결 풀 최대 연결 수 (기본값: 5)
    pub max_connections: u32,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`은 필수이며, 없으면 `VarError`가 발생합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없거나 파싱에 실패해도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            api_prefix: normalize_prefix(
                &env::var("API_PREFIX").unwrap_or_else(|_| "/v1".to_string()),
            ),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        })
    }

    /// `DATABASE_URL`이 파일 DB를 가리키면 그 파일의 상위 디렉토리를 반환합니다.
    ///
    /// 인메모리 DB(`sqlite::memory:`)나 상위 디렉토리가 없는 경로는 None입니다.
    pub fn database_dir(&self) -> Option<PathBuf> {
        let path = self
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))?;
        let path = path.split('?').next().unwrap_or_default();
        if path.is_empty() || path.starts_with(':') {
            return None;
        }

        PathBuf::from(path)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(PathBuf::from)
    }
}

/// "v1", "/v1/" 같은 입력을 axum의 `nest`가 받는 "/v1" 형태로 맞춥니다.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    format!("/{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> Config {
        Config {
            database_url: url.to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_prefix: "/v1".to_string(),
            max_connections: 5,
        }
    }

    #[test]
    fn normalizes_api_prefix() {
        assert_eq!(normalize_prefix("/v1"), "/v1");
        assert_eq!(normalize_prefix("v1"), "/v1");
        assert_eq!(normalize_prefix(" /api/v2/ "), "/api/v2");
    }

    #[test]
    fn database_dir_from_url() {
        assert_eq!(
            with_url("sqlite:data/spicy.db?mode=rwc").database_dir(),
            Some(PathBuf::from("data"))
        );
        assert_eq!(
            with_url("sqlite:///var/lib/spicy/spicy.db").database_dir(),
            Some(PathBuf::from("/var/lib/spicy"))
        );
        assert_eq!(with_url("sqlite:spicy.db").database_dir(), None);
        assert_eq!(with_url("sqlite::memory:").database_dir(), None);
    }
}
