//! # 매운맛 단계 쿼리 모듈
//!
//! `food_levels`는 시드 데이터로만 채워지며, 여기서는 조회만 합니다.

use crate::error::AppError;
use crate::models::FoodLevel;
use sqlx::{Executor, Sqlite}; // 풀과 트랜잭션 연결을 모두 받기 위한 제네릭 경계

/// id로 매운맛 단계를 조회합니다.
pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<FoodLevel>, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let level = sqlx::query_as::<_, FoodLevel>("SELECT id, user_level FROM food_levels WHERE id = ?")
        .bind(id)
        // fetch_optional(): 0행이면 None, 1행이면 Some(FoodLevel)
        .fetch_optional(executor)
        .await?;

    Ok(level)
}

/// 사용자 레벨에 대응하는 매운맛 단계를 조회합니다.
///
/// `None`은 "추천할 음식 없음"으로 취급해야 하며 에러가 아닙니다.
pub async fn find_by_user_level<'e, E>(
    executor: E,
    user_level: i64,
) -> Result<Option<FoodLevel>, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let level = sqlx::query_as::<_, FoodLevel>(
        "SELECT id, user_level FROM food_levels WHERE user_level = ?",
    )
    .bind(user_level)
    .fetch_optional(executor)
    .await?;

    Ok(level)
}
