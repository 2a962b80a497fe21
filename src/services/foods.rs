//! # 음식 서비스
//!
//! 음식 목록 조회, 생성, 퀴즈/추천용 샘플링 등 음식 관련 비즈니스 로직입니다.
//! DB 접근은 모두 `crate::db`의 함수에 위임합니다.
//!
//! 이 모듈의 함수들:
//! - `find_foods()`: 카테고리·매운맛 필터 + 정렬 + 개수 제한
//! - `create_food_info()`: 음식 생성과 매운맛 단계·카테고리 연결 (한 트랜잭션)
//! - `find_review_foods()`: 퀴즈 문항 음식 최대 3개 무작위
//! - `find_test_foods()`: 퀴즈 문항 음식 전체
//! - `find_user_level_foods()`: 사용자 레벨에 맞는 음식 최대 3개 무작위

use crate::{
    db::{self, categories, food_levels, FoodFilter, FoodPredicate},
    error::AppError,
    models::*,
    services::sampling,
};
use rand_core::OsRng;
use sqlx::SqlitePool;

/// 샘플링 결과의 최대 개수
pub const SAMPLE_SIZE: usize = 3;

/// 매운맛 단계 문자열 → `food_levels.id`
///
/// 알 수 없는 값이면 `BadRequest`로 실패합니다. DB는 건드리지 않습니다.
pub fn produce_hot_level_id(raw: &str) -> Result<i64, AppError> {
    Ok(raw.parse::<HotLevel>()?.level_id())
}

/// 조건에 맞는 음식 목록을 조회합니다.
///
/// 주어진 필터만 AND로 걸고, 정렬과 개수 제한은 어떤 필터 조합이든 같은 방식으로 적용합니다.
/// - 카테고리: 이름이 정확히 일치하는 카테고리에 속한 음식. 없는 이름이면 빈 목록
/// - 매운맛 단계: 매핑된 `food_level_id`가 일치하는 음식
pub async fn find_foods(
    pool: &SqlitePool,
    search: &FoodSearch,
) -> Result<Vec<FoodSummary>, AppError> {
    let mut filter = FoodFilter::new();

    // 매핑 실패는 쿼리를 만들기 전에 드러나야 합니다
    if let Some(raw) = &search.hot_level {
        filter.push(FoodPredicate::FoodLevel(produce_hot_level_id(raw)?));
    }
    if let Some(category) = &search.category {
        filter.push(FoodPredicate::CategoryName(category.clone()));
    }

    tracing::debug!(
        filter = ?filter.predicates(),
        sort = ?search.sort,
        size = search.size,
        "Finding foods"
    );

    let rows = db::list_foods(pool, &filter, search.sort, search.size).await?;

    Ok(rows.into_iter().map(FoodSummary::from).collect())
}

/// 음식을 생성하고 매운맛 단계와 카테고리를 연결합니다.
///
/// ## 처리 흐름 (하나의 트랜잭션)
/// 1. id로 매운맛 단계 조회 — 없으면 `NotFound`
/// 2. 음식 행 삽입 — 정확히 한 행이 아니면 `Internal`
/// 3. 이름으로 카테고리 조회 — 없으면 `NotFound`
/// 4. 음식-카테고리 연결
///
/// 중간에 실패하면 `tx`가 커밋 없이 drop되어 전부 롤백됩니다.
/// 성공하면 저장된 행이 아니라 요청을 그대로 돌려줍니다.
pub async fn create_food_info(
    pool: &SqlitePool,
    req: &CreateFoodRequest,
) -> Result<CreateFoodRequest, AppError> {
    let mut tx = pool.begin().await?;

    let level = food_levels::find_by_id(&mut *tx, req.level)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Food level {} not found", req.level)))?;

    let food_id = uuid::Uuid::now_v7().to_string();
    let inserted = db::insert_food(&mut *tx, &food_id, req, level.id).await?;
    if inserted != 1 {
        return Err(AppError::Internal(format!(
            "Expected exactly one inserted food row, got {}",
            inserted
        )));
    }

    let category = categories::find_by_name(&mut *tx, &req.category)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", req.category)))?;

    db::add_category_to_food(&mut *tx, &food_id, category.id).await?;

    tx.commit().await?;

    tracing::info!(food_id = %food_id, name = %req.name, category = %req.category, "Created food");

    Ok(req.clone())
}

/// 퀴즈 문항 음식(`is_test`) 중 최대 3개를 무작위로 고릅니다.
pub async fn find_review_foods(pool: &SqlitePool) -> Result<Vec<ReviewFood>, AppError> {
    sample_foods(pool, &FoodFilter::new().with(FoodPredicate::IsTest)).await
}

/// 퀴즈 문항 음식 전체를 등록 순서대로 조회합니다.
pub async fn find_test_foods(pool: &SqlitePool) -> Result<Vec<ReviewFood>, AppError> {
    db::list_test_foods(pool).await
}

/// 사용자 레벨에 맞는 음식 중 최대 3개를 무작위로 고릅니다.
///
/// - 레벨 5("추천 없음")는 DB 조회 없이 빈 목록
/// - 대응하는 매운맛 단계가 없는 레벨도 빈 목록
/// - 숫자가 아닌 레벨은 `BadRequest`
pub async fn find_user_level_foods(
    pool: &SqlitePool,
    raw_user_level: &str,
) -> Result<Vec<ReviewFood>, AppError> {
    let user_level: i64 = raw_user_level.trim().parse().map_err(|_| {
        AppError::BadRequest(format!("userLevel must be an integer: {}", raw_user_level))
    })?;

    if user_level == NO_RECOMMENDATION_USER_LEVEL {
        return Ok(Vec::new());
    }

    let Some(level) = food_levels::find_by_user_level(pool, user_level).await? else {
        tracing::debug!(user_level, "No food level for user level");
        return Ok(Vec::new());
    };

    sample_foods(pool, &FoodFilter::new().with(FoodPredicate::FoodLevel(level.id))).await
}

/// 조건에 맞는 id를 모두 읽고, 그중 `SAMPLE_SIZE`개를 골라 행을 불러옵니다.
async fn sample_foods(pool: &SqlitePool, filter: &FoodFilter) -> Result<Vec<ReviewFood>, AppError> {
    let ids = db::list_food_ids(pool, filter).await?;
    let population = ids.len();
    let picked = sampling::sample(&mut OsRng, ids, SAMPLE_SIZE);

    tracing::debug!(filter = ?filter.predicates(), population, picked = picked.len(), "Sampled foods");

    db::find_review_foods_by_ids(pool, &picked).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{count_foods, seed_food, test_pool};
    use std::collections::HashSet;

    fn search(category: Option<&str>, hot_level: Option<&str>) -> FoodSearch {
        FoodSearch {
            category: category.map(str::to_string),
            hot_level: hot_level.map(str::to_string),
            ..Default::default()
        }
    }

    fn names(foods: &[FoodSummary]) -> HashSet<String> {
        foods.iter().map(|f| f.name.clone()).collect()
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_request(level: i64, category: &str) -> CreateFoodRequest {
        CreateFoodRequest {
            name: "마라탕".to_string(),
            sub_name: Some("3단계".to_string()),
            level,
            category: category.to_string(),
            image_url: None,
            is_test: false,
        }
    }

    /// korean/mild, korean/hot, chinese/hot, western/mild
    async fn seed_matrix(pool: &SqlitePool) {
        seed_food(pool, "계란찜", 1, &["korean"], false).await;
        seed_food(pool, "불닭", 3, &["korean"], false).await;
        seed_food(pool, "마라탕", 3, &["chinese"], false).await;
        seed_food(pool, "크림파스타", 1, &["western"], false).await;
    }

    #[tokio::test]
    async fn no_filters_returns_everything() {
        let pool = test_pool().await;
        seed_matrix(&pool).await;

        let foods = find_foods(&pool, &search(None, None)).await.unwrap();
        assert_eq!(names(&foods), set(&["계란찜", "불닭", "마라탕", "크림파스타"]));
    }

    #[tokio::test]
    async fn category_only_filters_by_category_name() {
        let pool = test_pool().await;
        seed_matrix(&pool).await;

        let foods = find_foods(&pool, &search(Some("korean"), None)).await.unwrap();
        assert_eq!(names(&foods), set(&["계란찜", "불닭"]));

        let foods = find_foods(&pool, &search(Some("no-such-category"), None)).await.unwrap();
        assert!(foods.is_empty());
    }

    #[tokio::test]
    async fn hot_level_only_filters_by_mapped_level() {
        let pool = test_pool().await;
        seed_matrix(&pool).await;

        let foods = find_foods(&pool, &search(None, Some("hot"))).await.unwrap();
        assert_eq!(names(&foods), set(&["불닭", "마라탕"]));
        assert!(foods.iter().all(|f| f.hot_level == Some(HotLevel::Hot)));
    }

    #[tokio::test]
    async fn both_filters_intersect() {
        let pool = test_pool().await;
        seed_matrix(&pool).await;

        let foods = find_foods(&pool, &search(Some("korean"), Some("hot"))).await.unwrap();
        assert_eq!(names(&foods), set(&["불닭"]));

        let foods = find_foods(&pool, &search(Some("western"), Some("hot"))).await.unwrap();
        assert!(foods.is_empty());
    }

    #[tokio::test]
    async fn sort_order_is_the_same_for_every_filter_branch() {
        let pool = test_pool().await;
        // 모든 음식이 같은 카테고리·단계라서 네 가지 필터 조합이 같은 행을 고릅니다
        for name in ["b", "d", "a", "c"] {
            seed_food(&pool, name, 2, &["snack"], false).await;
        }

        for sort in [None, Some(FoodSort::Asc), Some(FoodSort::Desc)] {
            let mut orders = Vec::new();
            for (category, hot_level) in [
                (None, None),
                (Some("snack"), None),
                (None, Some("medium")),
                (Some("snack"), Some("medium")),
            ] {
                let mut s = search(category, hot_level);
                s.sort = sort;
                let foods = find_foods(&pool, &s).await.unwrap();
                orders.push(foods.into_iter().map(|f| f.name).collect::<Vec<_>>());
            }

            assert!(orders.windows(2).all(|w| w[0] == w[1]), "sort={:?}", sort);
            let expected = match sort {
                None => ["b", "d", "a", "c"],
                Some(FoodSort::Asc) => ["a", "b", "c", "d"],
                Some(FoodSort::Desc) => ["d", "c", "b", "a"],
            };
            assert_eq!(orders[0], expected);
        }
    }

    #[tokio::test]
    async fn size_truncates_the_result() {
        let pool = test_pool().await;
        for i in 0..15 {
            seed_food(&pool, &format!("food-{:02}", i), 1, &[], false).await;
        }

        let foods = find_foods(&pool, &search(None, None)).await.unwrap();
        assert_eq!(foods.len(), 10);

        let mut s = search(None, None);
        s.size = 4;
        assert_eq!(find_foods(&pool, &s).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn summary_exposes_only_public_fields() {
        let pool = test_pool().await;
        seed_food(&pool, "짬뽕", 4, &["chinese"], true).await;

        let foods = find_foods(&pool, &search(None, None)).await.unwrap();
        let value = serde_json::to_value(&foods[0]).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["hotLevel", "id", "imageUrl", "name", "subName"]);
        assert_eq!(value["hotLevel"], "extreme");
    }

    #[tokio::test]
    async fn unknown_hot_level_fails_without_querying() {
        let pool = test_pool().await;
        // 닫힌 풀에 쿼리하면 Database 에러가 나므로, BadRequest는 쿼리 전에 실패했다는 뜻입니다
        pool.close().await;

        let err = find_foods(&pool, &search(Some("korean"), Some("volcano")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn create_echoes_input_and_links_category() {
        let pool = test_pool().await;
        let req = create_request(3, "chinese");

        let echoed = create_food_info(&pool, &req).await.unwrap();
        assert_eq!(echoed, req);

        let foods = find_foods(&pool, &search(Some("chinese"), Some("hot"))).await.unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "마라탕");
        assert_eq!(foods[0].sub_name.as_deref(), Some("3단계"));
    }

    #[tokio::test]
    async fn create_with_unknown_level_is_not_found() {
        let pool = test_pool().await;

        let err = create_food_info(&pool, &create_request(9, "korean")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(count_foods(&pool).await, 0);
    }

    #[tokio::test]
    async fn create_with_unknown_category_rolls_back_the_food_row() {
        let pool = test_pool().await;

        let err = create_food_info(&pool, &create_request(2, "martian")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(count_foods(&pool).await, 0);
    }

    #[tokio::test]
    async fn review_foods_are_at_most_three_test_foods() {
        let pool = test_pool().await;
        let mut test_ids = HashSet::new();
        for i in 0..6 {
            test_ids.insert(seed_food(&pool, &format!("quiz-{}", i), 1 + i % 4, &[], true).await);
            seed_food(&pool, &format!("plain-{}", i), 1, &[], false).await;
        }

        for _ in 0..20 {
            let foods = find_review_foods(&pool).await.unwrap();
            assert_eq!(foods.len(), 3);
            assert!(foods.iter().all(|f| test_ids.contains(&f.id)));
        }
    }

    #[tokio::test]
    async fn review_foods_with_few_candidates_return_all_of_them() {
        let pool = test_pool().await;
        seed_food(&pool, "only", 1, &[], true).await;

        let foods = find_review_foods(&pool).await.unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(find_test_foods(&pool).await.unwrap(), foods);
    }

    #[tokio::test]
    async fn user_level_five_is_always_empty() {
        let pool = test_pool().await;
        for level in 1..=4 {
            seed_food(&pool, &format!("level-{}", level), level, &[], true).await;
        }
        // 5단계 음식 레벨을 임의로 추가해도 결과는 비어 있어야 합니다
        sqlx::query("INSERT INTO food_levels (id, user_level) VALUES (5, 5)")
            .execute(&pool)
            .await
            .unwrap();
        seed_food(&pool, "level-5", 5, &[], true).await;

        assert!(find_user_level_foods(&pool, "5").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn user_level_foods_match_the_resolved_level() {
        let pool = test_pool().await;
        let mut level_two = HashSet::new();
        for i in 0..5 {
            level_two.insert(seed_food(&pool, &format!("medium-{}", i), 2, &[], false).await);
            seed_food(&pool, &format!("hot-{}", i), 3, &[], false).await;
        }

        for _ in 0..20 {
            let foods = find_user_level_foods(&pool, "2").await.unwrap();
            assert_eq!(foods.len(), 3);
            assert!(foods.iter().all(|f| level_two.contains(&f.id)));
        }
    }

    #[tokio::test]
    async fn unresolvable_user_level_means_no_recommendation() {
        let pool = test_pool().await;
        seed_food(&pool, "any", 1, &[], false).await;

        assert!(find_user_level_foods(&pool, "7").await.unwrap().is_empty());

        let err = find_user_level_foods(&pool, "spicy").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
