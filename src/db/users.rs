//! # 사용자 쿼리 모듈
//!
//! 퀴즈 답변을 기록할 때 `reviews.user_id`가 가리킬 사용자 행을 준비합니다.

use crate::error::AppError;
use sqlx::{Executor, Sqlite};

/// 사용자 행이 없으면 만듭니다. 이미 있으면 아무것도 하지 않습니다.
pub async fn ensure_user<'e, E>(executor: E, id: &str) -> Result<(), AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    // INSERT OR IGNORE: PRIMARY KEY가 겹치면 에러 대신 아무 일도 하지 않습니다
    sqlx::query("INSERT OR IGNORE INTO users (id) VALUES (?)")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}
