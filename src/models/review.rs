//! # 퀴즈 답변(Review) 모델 정의
//!
//! 사용자가 매운맛 퀴즈에서 음식마다 고른 체감 매운맛 단계를 기록합니다.
//!
//! ## 구조체 역할
//! - `QuizAnswer`: 답변 하나 (`{ foodId, hotLevel }`)
//! - `CreateUserLevelRequest`: `POST /users/level`의 요청 본문
//! - `UserLevelResponse`: 기록 결과
//! - `Review`: DB의 `reviews` 테이블 한 행

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub food_id: String,
    /// 원문 그대로 받고, 기록 전에 `HotLevel`로 검증합니다.
    pub hot_level: String,
}

/// 답변 목록은 순서가 있으며, 그 순서대로 기록됩니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserLevelRequest {
    pub user_id: String,
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLevelResponse {
    pub user_id: String,
    /// 기록된 답변 수
    pub recorded: usize,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub food_id: String,
    pub hot_level: String,
    pub created_at: String,
}
