//! # 비즈니스 로직 계층
//!
//! 라우트 핸들러와 DB 접근 계층 사이에서 요청을 해석하고 여러 쿼리를 조합합니다.
//! - `foods`: 음식 목록/생성/샘플링
//! - `reviews`: 퀴즈 답변 기록
//! - `sampling`: 균등 무작위 샘플링

pub mod foods;
pub mod reviews;
pub mod sampling;
