//! # 사용자 퀴즈 답변 라우트 핸들러
//!
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /v1/users/level | `submit_user_level` | 퀴즈 답변 기록 |
//! | GET | /v1/users/{user_id}/reviews | `list_user_reviews` | 기록된 답변 조회 |

use crate::{
    error::AppError,
    models::*,
    routes::AppState,
    services::reviews as review_service,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `POST /v1/users/level` + `{ "userId", "answers": [{ "foodId", "hotLevel" }] }` → `201 Created`
pub async fn submit_user_level(
    State(state): State<AppState>,
    Json(req): Json<CreateUserLevelRequest>,
) -> Result<(StatusCode, Json<UserLevelResponse>), AppError> {
    let res = review_service::submit_user_level(&state.pool, &req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

/// `GET /v1/users/{user_id}/reviews` → `{ "reviews": [...] }`
pub async fn list_user_reviews(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let reviews = review_service::list_user_reviews(&state.pool, &user_id).await?;
    Ok(Json(json!({ "reviews": reviews })))
}
