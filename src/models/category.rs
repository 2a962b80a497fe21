//! # 카테고리 모델 정의
//!
//! 카테고리는 음식을 묶는 이름 있는 그룹이며, 음식과 다대다(N:M) 관계입니다.
//! 필터에서는 id가 아닌 이름으로 찾으므로 이름은 고유해야 합니다.

use serde::{Deserialize, Serialize};

/// 카테고리 엔티티 — DB의 `categories` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    /// 고유한 카테고리 이름 (예: "korean")
    pub name: String,
}

/// 카테고리 생성 요청 — `POST /categories`의 요청 본문
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}
