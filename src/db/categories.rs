//! # 카테고리 데이터베이스 쿼리 모듈
//!
//! 카테고리 조회/생성 쿼리 함수들입니다.
//! 음식 필터와 음식 생성은 카테고리를 id가 아닌 이름으로 찾습니다.

use crate::error::AppError;
use crate::models::Category;
// Executor: 풀(&SqlitePool)과 트랜잭션(&mut *tx)을 모두 받을 수 있게 해 주는 트레이트
use sqlx::{Executor, Sqlite, SqlitePool};

/// 모든 카테고리를 이름순으로 조회합니다.
///
/// `query_as::<_, Category>`는 각 행을 `Category`(`FromRow`)로 읽고,
/// `fetch_all`은 전체 행을 Vec으로 모읍니다.
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

/// 이름이 정확히 일치하는 카테고리를 조회합니다.
pub async fn find_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Category>, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = ?")
        .bind(name)
        .fetch_optional(executor)
        .await?;

    Ok(category)
}

/// 새 카테고리를 생성합니다.
///
/// 이름이 이미 있으면 `Conflict`입니다. 중복 판정은 `categories.name`의 UNIQUE 제약에 맡기므로
/// 같은 이름으로 동시에 들어온 요청도 하나만 성공하고 나머지는 `Conflict`가 됩니다.
pub async fn create_category(pool: &SqlitePool, name: &str) -> Result<Category, AppError> {
    let result = sqlx::query("INSERT INTO categories (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        // is_unique_violation(): 드라이버별 에러 코드를 sqlx가 판별해 줍니다 (SQLite: 2067)
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Category '{}' already exists", name))
            }
            other => AppError::Database(other),
        })?;

    Ok(Category {
        // last_insert_rowid(): AUTOINCREMENT로 방금 부여된 id
        id: result.last_insert_rowid(),
        name: name.to_string(),
    })
}
