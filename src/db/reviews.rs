//! # 퀴즈 답변(리뷰) 쿼리 모듈

use crate::error::AppError;
use crate::models::Review;
use sqlx::{Executor, Sqlite, SqlitePool};

pub async fn insert_review<'e, E>(
    executor: E,
    id: &str,
    user_id: &str,
    food_id: &str,
    hot_level: &str,
) -> Result<(), AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO reviews (id, user_id, food_id, hot_level)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(food_id)
    .bind(hot_level)
    .execute(executor)
    .await?;

    Ok(())
}

/// 사용자의 답변을 기록된 순서대로 조회합니다.
pub async fn list_reviews_for_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<Review>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        r#"
        SELECT id, user_id, food_id, hot_level, created_at
        FROM reviews
        WHERE user_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}
