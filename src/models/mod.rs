//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `category`: 카테고리 관련 구조체
//! - `food`: 음식 조회/생성 구조체와 매운맛 단계·정렬 열거형
//! - `food_level`: 매운맛 단계 ↔ 사용자 레벨 매핑
//! - `review`: 퀴즈 답변 관련 구조체
//!
//! `pub use X::*;`로 재공개하여 `crate::models::Food...`처럼 짧게 접근합니다.

pub mod category;
pub mod food;
pub mod food_level;
pub mod review;

pub use category::*;
pub use food::*;
pub use food_level::*;
pub use review::*;
