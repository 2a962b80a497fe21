//! # 퀴즈 답변 기록 서비스
//!
//! 사용자가 매운맛 퀴즈에서 고른 답변을 `reviews` 테이블에 기록합니다.
//! 답변으로부터 사용자 레벨을 계산하는 일은 리뷰 서브시스템이 맡으며 여기서는 하지 않습니다.

use crate::{
    db::{self, reviews, users},
    error::AppError,
    models::*,
};
use sqlx::SqlitePool;

/// 퀴즈 답변 목록을 한 트랜잭션으로 기록합니다.
///
/// ## 검증 순서
/// 1. `userId`가 비어 있거나 답변이 없으면 `BadRequest`
/// 2. 모든 `hotLevel`이 알려진 값인지 확인 — DB 접근 전, 하나라도 틀리면 `BadRequest`
/// 3. 사용자 행이 없으면 생성
/// 4. 답변 순서대로 음식 존재 확인(없으면 `NotFound`) 후 기록
pub async fn submit_user_level(
    pool: &SqlitePool,
    req: &CreateUserLevelRequest,
) -> Result<UserLevelResponse, AppError> {
    if req.user_id.trim().is_empty() {
        return Err(AppError::BadRequest("userId cannot be empty".to_string()));
    }
    if req.answers.is_empty() {
        return Err(AppError::BadRequest("answers cannot be empty".to_string()));
    }

    let levels = req
        .answers
        .iter()
        .map(|answer| answer.hot_level.parse::<HotLevel>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut tx = pool.begin().await?;

    users::ensure_user(&mut *tx, &req.user_id).await?;

    for (answer, level) in req.answers.iter().zip(levels) {
        if !db::food_exists(&mut *tx, &answer.food_id).await? {
            return Err(AppError::NotFound(format!("Food {} not found", answer.food_id)));
        }

        let review_id = uuid::Uuid::now_v7().to_string();
        reviews::insert_review(&mut *tx, &review_id, &req.user_id, &answer.food_id, level.as_str())
            .await?;
    }

    tx.commit().await?;

    tracing::info!(user_id = %req.user_id, answers = req.answers.len(), "Recorded quiz answers");

    Ok(UserLevelResponse {
        user_id: req.user_id.clone(),
        recorded: req.answers.len(),
    })
}

/// 사용자의 퀴즈 답변을 기록 순서대로 조회합니다.
pub async fn list_user_reviews(pool: &SqlitePool, user_id: &str) -> Result<Vec<Review>, AppError> {
    reviews::list_reviews_for_user(pool, user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed_food, test_pool};

    fn answer(food_id: &str, hot_level: &str) -> QuizAnswer {
        QuizAnswer {
            food_id: food_id.to_string(),
            hot_level: hot_level.to_string(),
        }
    }

    #[tokio::test]
    async fn records_answers_in_order() {
        let pool = test_pool().await;
        let a = seed_food(&pool, "a", 1, &[], true).await;
        let b = seed_food(&pool, "b", 3, &[], true).await;

        let req = CreateUserLevelRequest {
            user_id: "user-1".to_string(),
            answers: vec![answer(&b, "extreme"), answer(&a, "mild")],
        };
        let res = submit_user_level(&pool, &req).await.unwrap();
        assert_eq!(
            res,
            UserLevelResponse {
                user_id: "user-1".to_string(),
                recorded: 2
            }
        );

        let reviews = list_user_reviews(&pool, "user-1").await.unwrap();
        let got: Vec<_> = reviews
            .iter()
            .map(|r| (r.food_id.as_str(), r.hot_level.as_str()))
            .collect();
        assert_eq!(got, [(b.as_str(), "extreme"), (a.as_str(), "mild")]);

        // 같은 사용자가 다시 제출해도 사용자 행은 그대로 재사용됩니다
        submit_user_level(&pool, &req).await.unwrap();
        assert_eq!(list_user_reviews(&pool, "user-1").await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn unknown_hot_level_rejects_the_whole_submission() {
        let pool = test_pool().await;
        let a = seed_food(&pool, "a", 1, &[], true).await;

        let req = CreateUserLevelRequest {
            user_id: "user-2".to_string(),
            answers: vec![answer(&a, "mild"), answer(&a, "lava")],
        };
        let err = submit_user_level(&pool, &req).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(list_user_reviews(&pool, "user-2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_food_rolls_back_earlier_answers() {
        let pool = test_pool().await;
        let a = seed_food(&pool, "a", 1, &[], true).await;

        let req = CreateUserLevelRequest {
            user_id: "user-3".to_string(),
            answers: vec![answer(&a, "mild"), answer("missing", "hot")],
        };
        let err = submit_user_level(&pool, &req).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(list_user_reviews(&pool, "user-3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_submissions_are_bad_requests() {
        let pool = test_pool().await;

        let req = CreateUserLevelRequest {
            user_id: "user-4".to_string(),
            answers: Vec::new(),
        };
        assert!(matches!(
            submit_user_level(&pool, &req).await.unwrap_err(),
            AppError::BadRequest(_)
        ));

        let req = CreateUserLevelRequest {
            user_id: " ".to_string(),
            answers: vec![answer("x", "mild")],
        };
        assert!(matches!(
            submit_user_level(&pool, &req).await.unwrap_err(),
            AppError::BadRequest(_)
        ));
    }
}
