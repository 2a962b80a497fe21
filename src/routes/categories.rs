//! # 카테고리 API 라우트 핸들러
//!
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /v1/categories | `list_categories` | 전체 카테고리 (이름순) |
//! | POST | /v1/categories | `create_category` | 새 카테고리 생성 |

use crate::{
    db::categories as db_categories,
    error::AppError,
    models::*,
    routes::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

/// `GET /v1/categories` → `{ "categories": [...] }`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let categories = db_categories::list_categories(&state.pool).await?;
    Ok(Json(json!({ "categories": categories })))
}

/// 새 카테고리를 생성합니다.
///
/// `POST /v1/categories` + `{ "name": "..." }` → `201 Created`
///
/// 카테고리는 이름으로 찾기 때문에 같은 이름이 이미 있으면 409 Conflict입니다.
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Category name cannot be empty".to_string()));
    }

    // 중복 이름은 UNIQUE 제약 위반으로 판정되어 AppError::Conflict로 돌아옵니다
    let category = db_categories::create_category(&state.pool, name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
