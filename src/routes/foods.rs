//! # 음식 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /v1/foods | `find_foods` | 카테고리/매운맛 필터 목록 |
//! | POST | /v1/foods | `create_food` | 음식 생성 (요청을 그대로 반환) |
//! | GET | /v1/foods/review | `find_review_foods` | 퀴즈 문항 최대 3개 무작위 |
//! | GET | /v1/foods/test | `find_test_foods` | 퀴즈 문항 전체 |
//! | GET | /v1/foods/levels/{user_level} | `find_user_level_foods` | 레벨별 추천 최대 3개 |
//!
//! 핸들러는 요청을 해석해 `services::foods`를 호출하는 일만 합니다.

use crate::{
    error::AppError,
    models::*,
    routes::AppState,
    services::foods as food_service,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// 음식 목록을 조회합니다.
///
/// `GET /v1/foods?category=korean&hotLevel=hot&sort=asc&size=5` → `{ "foods": [...] }`
///
/// `size`가 숫자가 아니거나 음수이면, 또는 `sort`/`hotLevel`이 알 수 없는 값이면 400입니다.
pub async fn find_foods(
    State(state): State<AppState>,
    Query(query): Query<FindFoodsQuery>,
) -> Result<Json<Value>, AppError> {
    let search = query.into_search()?;
    let foods = food_service::find_foods(&state.pool, &search).await?;
    Ok(Json(json!({ "foods": foods })))
}

/// 음식을 생성합니다.
///
/// `POST /v1/foods` + `{ "name", "subName", "level", "category" }` → `201 Created` + 요청 본문
///
/// - 없는 매운맛 단계 id나 카테고리 이름: 404
/// - 빈 이름/카테고리: 400
pub async fn create_food(
    State(state): State<AppState>,
    Json(req): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<CreateFoodRequest>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Food name cannot be empty".to_string()));
    }
    if req.category.trim().is_empty() {
        return Err(AppError::BadRequest("Category cannot be empty".to_string()));
    }

    let echoed = food_service::create_food_info(&state.pool, &req).await?;
    Ok((StatusCode::CREATED, Json(echoed)))
}

/// `GET /v1/foods/review` → `{ "foods": [...] }` (최대 3개)
pub async fn find_review_foods(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let foods = food_service::find_review_foods(&state.pool).await?;
    Ok(Json(json!({ "foods": foods })))
}

/// `GET /v1/foods/test` → `{ "foods": [...] }`
pub async fn find_test_foods(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let foods = food_service::find_test_foods(&state.pool).await?;
    Ok(Json(json!({ "foods": foods })))
}

/// 사용자 레벨에 맞는 음식을 추천합니다.
///
/// `GET /v1/foods/levels/{user_level}` → `{ "foods": [...] }`
///
/// 레벨 5나 대응하는 매운맛 단계가 없는 레벨은 빈 배열입니다.
pub async fn find_user_level_foods(
    State(state): State<AppState>,
    Path(user_level): Path<String>,
) -> Result<Json<Value>, AppError> {
    let foods = food_service::find_user_level_foods(&state.pool, &user_level).await?;
    Ok(Json(json!({ "foods": foods })))
}
