//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 서비스 계층(services/)과 라우트 핸들러(routes/)가 이 모듈의 함수를 호출합니다.
//!
//! 각 하위 모듈:
//! - `foods`: 음식 목록 필터 조합, 삽입, 카테고리 연결
//! - `food_levels`: 매운맛 단계 조회
//! - `categories`: 카테고리 조회/생성
//! - `users`, `reviews`: 퀴즈 답변 기록
//!
//! 음식·매운맛 단계·카테고리는 서로 다른 모듈로 나누어,
//! 호출하는 쪽이 필요한 저장소 함수만 골라 쓰도록 합니다.

pub mod categories;
pub mod food_levels;
pub mod foods;
pub mod reviews;
pub mod users;

// 이름이 겹치지 않는 음식 쿼리는 `crate::db::list_foods`처럼 바로 접근할 수 있게 합니다.
pub use foods::*;

#[cfg(test)]
pub use test_support::*;
