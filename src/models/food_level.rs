//! # 매운맛 단계(FoodLevel) 모델
//!
//! `food_levels` 테이블은 음식의 매운맛 단계와 그 단계를 추천받을 사용자 레벨을 잇습니다.
//! 음식은 이 행을 참조만 하고, API로 수정하지 않습니다.

use serde::Serialize;

/// 사용자 레벨 5는 "추천할 음식 없음"을 뜻하는 예약 값입니다.
pub const NO_RECOMMENDATION_USER_LEVEL: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FoodLevel {
    pub id: i64,
    /// 사용자 매운맛 내성 단계 (1~4)
    pub user_level: i64,
}
