//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과, 이를 하나로 묶는 라우터를 정의합니다.
//!
//! 각 하위 모듈:
//! - `categories`: 카테고리 목록/생성
//! - `foods`: 음식 목록/생성/샘플링/레벨 추천
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `users`: 퀴즈 답변 기록

pub mod categories;
pub mod foods;
pub mod health;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 저장소 핸들은 이 풀 하나뿐이고, 요청 사이에 공유되는 가변 상태는 없습니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
}

/// 전체 API 라우터를 만듭니다.
///
/// 모든 라우트는 `api_prefix`(예: "/v1") 아래에 중첩됩니다.
/// 경로 파라미터는 axum 0.8 문법(`{name}`)을 사용합니다.
pub fn router(state: AppState, api_prefix: &str) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        // 음식
        .route("/foods", get(foods::find_foods).post(foods::create_food))
        .route("/foods/review", get(foods::find_review_foods))
        .route("/foods/test", get(foods::find_test_foods))
        .route("/foods/levels/{user_level}", get(foods::find_user_level_foods))
        // 카테고리
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        // 퀴즈 답변
        .route("/users/level", post(users::submit_user_level))
        .route("/users/{user_id}/reviews", get(users::list_user_reviews))
        .with_state(state);

    // 개발 환경 기준으로 모든 출처를 허용합니다
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // axum 0.8은 루트("/")에 nest할 수 없으므로 그 경우에는 merge합니다
    let app = if api_prefix == "/" {
        Router::new().merge(api_routes)
    } else {
        Router::new().nest(api_prefix, api_routes)
    };

    app.layer(cors).layer(TraceLayer::new_for_http())
}
