//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 조회 실패(매운맛 단계, 카테고리, 음식)는 `NotFound`로,
//! 잘못된 매운맛 단계 값은 `BadRequest`로,
//! 저장소 이상(예: INSERT 결과가 정확히 한 행이 아님)은 `Internal`로 처리합니다.

use axum::{
    http::StatusCode,                   // 404, 409, 500 같은 상태 코드 상수
    response::{IntoResponse, Response}, // 핸들러 반환값을 HTTP 응답으로 바꾸는 트레이트
    Json,                               // 본문을 JSON으로 직렬화하는 응답 래퍼
};
use serde_json::json; // json! 매크로: 에러 본문 객체를 바로 만듭니다
use thiserror::Error; // #[error("...")]로 Display와 std::error::Error를 생성

// #[derive(Error)]가 variant마다 붙은 #[error("...")] 문자열로 Display를 구현합니다.
// 로그에 `{}`로 찍히는 문구가 바로 이 문자열입니다.
// match로 변환할 때 variant를 하나라도 빠뜨리면 컴파일 에러가 납니다.

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 잘못된 요청 (HTTP 400)
    /// 알 수 없는 매운맛 단계, 숫자가 아닌 size 등
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 충돌 (HTTP 409)
    /// 이미 있는 카테고리 이름 (UNIQUE 제약 위반 포함)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx 함수에서 `?`를 쓰면 자동으로 AppError::Database로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, Internal)는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
        };

        // 결과: { "error": { "code": "not_found", "message": "..." } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
