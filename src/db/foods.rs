//! # 음식 데이터베이스 쿼리 모듈
//!
//! `foods`와 `food_categories` 테이블에 대한 쿼리 함수들입니다.
//!
//! ## 필터 조합
//! 목록 조회와 무작위 샘플링은 모두 `FoodFilter`로 조건을 만듭니다.
//! `FoodFilter`는 0개 이상의 `FoodPredicate`를 모아 두었다가
//! `WHERE ... AND ...` 절로 한 번에 붙입니다.
//! 정렬과 LIMIT은 필터와 상관없이 그 뒤에 한 번만 붙습니다.
//!
//! ```text
//! SELECT ... FROM foods f
//!   [WHERE <조건1> AND <조건2> ...]   ← FoodFilter
//!   ORDER BY <정렬 정책>               ← FoodSort
//!   LIMIT ?
//! ```
//!
//! 트랜잭션 안에서도 쓰이는 함수는 `&SqlitePool` 대신
//! 제네릭 `Executor`를 받습니다. 풀(`&pool`)과 트랜잭션 연결(`&mut *tx`)을
//! 모두 넘길 수 있습니다.

use crate::error::AppError;
use crate::models::*; // FoodRow, ReviewFood, FoodSort, CreateFoodRequest
// QueryBuilder: SQL 조각을 이어 붙이면서 값은 `?` 바인딩으로 넣어 주는 빌더
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

/// 음식 목록에 걸 수 있는 조건 하나
#[derive(Debug, Clone, PartialEq)]
pub enum FoodPredicate {
    /// 이 이름의 카테고리에 속한 음식
    CategoryName(String),
    /// `food_level_id`가 일치하는 음식
    FoodLevel(i64),
    /// 퀴즈 문항용 음식 (`is_test = 1`)
    IsTest,
}

/// AND로 묶이는 조건 목록
///
/// 조건이 없으면 모든 음식이 대상입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodFilter {
    predicates: Vec<FoodPredicate>,
}

impl FoodFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: FoodPredicate) -> Self {
        self.push(predicate);
        self
    }

    pub fn push(&mut self, predicate: FoodPredicate) {
        self.predicates.push(predicate);
    }

    pub fn predicates(&self) -> &[FoodPredicate] {
        &self.predicates
    }

    /// `foods` 테이블의 별칭이 `f`인 쿼리 뒤에 WHERE 절을 붙입니다.
    fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                // JOIN 대신 EXISTS를 써서 카테고리가 여러 개인 음식이 중복되지 않게 합니다
                FoodPredicate::CategoryName(name) => {
                    qb.push(
                        "EXISTS (SELECT 1 FROM food_categories fc \
                         JOIN categories c ON c.id = fc.category_id \
                         WHERE fc.food_id = f.id AND c.name = ",
                    );
                    // push_bind(): SQL에는 `?`만 들어가고 값은 따로 바인딩됩니다
                    qb.push_bind(name.clone());
                    qb.push(")");
                }
                FoodPredicate::FoodLevel(level_id) => {
                    qb.push("f.food_level_id = ");
                    qb.push_bind(*level_id);
                }
                FoodPredicate::IsTest => {
                    qb.push("f.is_test = 1");
                }
            }
        }
    }
}

/// 정렬 정책 → ORDER BY 절
///
/// 이름이 같은 음식끼리의 순서도 고정되도록 id를 보조 키로 둡니다.
fn order_by(sort: Option<FoodSort>) -> &'static str {
    match sort {
        Some(FoodSort::Asc) => " ORDER BY f.name ASC, f.id ASC",
        Some(FoodSort::Desc) => " ORDER BY f.name DESC, f.id ASC",
        None => " ORDER BY f.rowid ASC",
    }
}

/// 조건에 맞는 음식을 정렬하여 최대 `limit`개 조회합니다.
pub async fn list_foods(
    pool: &SqlitePool,
    filter: &FoodFilter,
    sort: Option<FoodSort>,
    limit: u32,
) -> Result<Vec<FoodRow>, AppError> {
    let mut qb = QueryBuilder::<Sqlite>::new(
        "SELECT f.id, f.name, f.sub_name, f.image_url, f.food_level_id FROM foods f",
    );
    filter.push_where(&mut qb);
    qb.push(order_by(sort));
    qb.push(" LIMIT ");
    qb.push_bind(i64::from(limit));

    let rows = qb.build_query_as::<FoodRow>().fetch_all(pool).await?;

    Ok(rows)
}

/// 조건에 맞는 음식의 id만 모두 조회합니다. (샘플링의 모집단)
pub async fn list_food_ids(pool: &SqlitePool, filter: &FoodFilter) -> Result<Vec<String>, AppError> {
    let mut qb = QueryBuilder::<Sqlite>::new("SELECT f.id FROM foods f");
    filter.push_where(&mut qb);
    qb.push(" ORDER BY f.rowid ASC");

    let ids = qb.build_query_scalar::<String>().fetch_all(pool).await?;

    Ok(ids)
}

/// 주어진 id의 음식들을 좁은 투영으로 조회합니다.
///
/// 결과는 `ids`에 적힌 순서를 따릅니다. 없는 id는 건너뜁니다.
pub async fn find_review_foods_by_ids(
    pool: &SqlitePool,
    ids: &[String],
) -> Result<Vec<ReviewFood>, AppError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut qb = QueryBuilder::<Sqlite>::new(
        "SELECT id, name, sub_name, image_url FROM foods WHERE id IN (",
    );
    // separated(): 항목 사이에만 ", "를 넣어 `IN (?, ?, ?)`를 만듭니다
    let mut separated = qb.separated(", ");
    for id in ids {
        separated.push_bind(id.clone());
    }
    separated.push_unseparated(")");

    let mut foods = qb.build_query_as::<ReviewFood>().fetch_all(pool).await?;
    // IN (...)은 순서를 보장하지 않으므로 ids 순서대로 다시 정렬합니다
    foods.sort_by_key(|food| ids.iter().position(|id| *id == food.id));

    Ok(foods)
}

/// 퀴즈 문항용 음식(`is_test = 1`)을 등록 순서대로 모두 조회합니다.
pub async fn list_test_foods(pool: &SqlitePool) -> Result<Vec<ReviewFood>, AppError> {
    let foods = sqlx::query_as::<_, ReviewFood>(
        r#"
        SELECT id, name, sub_name, image_url
        FROM foods
        WHERE is_test = 1
        ORDER BY rowid
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(foods)
}

/// 음식 한 행을 삽입하고 영향받은 행 수를 반환합니다.
///
/// 호출하는 쪽은 반환값이 정확히 1인지 확인해야 합니다.
pub async fn insert_food<'e, E>(
    executor: E,
    id: &str,
    req: &CreateFoodRequest,
    food_level_id: i64,
) -> Result<u64, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO foods (id, name, sub_name, image_url, is_test, food_level_id)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&req.name)
    .bind(&req.sub_name)
    .bind(&req.image_url)
    .bind(req.is_test)
    .bind(food_level_id)
    .execute(executor)
    .await?;

    // rows_affected(): 이 INSERT로 실제 추가된 행 수
    Ok(result.rows_affected())
}

/// 음식에 카테고리를 연결합니다 (다대다 관계 추가).
///
/// 이미 연결되어 있으면 `INSERT OR IGNORE`로 무시합니다.
pub async fn add_category_to_food<'e, E>(
    executor: E,
    food_id: &str,
    category_id: i64,
) -> Result<(), AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT OR IGNORE INTO food_categories (food_id, category_id) VALUES (?, ?)")
        .bind(food_id)
        .bind(category_id)
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn food_exists<'e, E>(executor: E, id: &str) -> Result<bool, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    // query_scalar + fetch_optional: 첫 컬럼 하나만 읽고, 행이 없으면 None
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM foods WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(found.is_some())
}
