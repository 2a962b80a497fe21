//! # 음식 모델 정의
//!
//! 음식(Food) 조회/생성에 사용하는 데이터 구조체와 열거형을 정의합니다.
//!
//! ## 구조체 역할
//! - `FoodRow`: 목록 조회 쿼리의 한 행 (DB → Rust)
//! - `FoodSummary`: 목록 응답에 노출되는 제한된 필드 집합
//! - `ReviewFood`: 퀴즈/추천용 좁은 투영(projection)
//! - `CreateFoodRequest`: 음식 생성 요청 본문 (성공 시 그대로 응답으로 돌려줌)
//! - `FindFoodsQuery`: `GET /foods`의 URL 쿼리 파라미터 (문자열 그대로)
//! - `FoodSearch`: 쿼리 파라미터를 해석한 검색 조건
//!
//! ## 열거형
//! - `HotLevel`: 매운맛 단계. 내부 food_level id와 1:1로 매핑됩니다.
//! - `FoodSort`: 정렬 정책

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 쿼리 파라미터 `size`가 없을 때 돌려줄 최대 개수
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 매운맛 단계
///
/// JSON과 URL에서는 소문자 문자열(`"mild"`, `"medium"`, `"hot"`, `"extreme"`)로 표현됩니다.
// 응답에 실리기만 하므로 Serialize만 derive합니다. 입력은 FromStr로 파싱합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HotLevel {
    Mild,
    Medium,
    Hot,
    Extreme,
}

impl HotLevel {
    pub const ALL: [HotLevel; 4] = [
        HotLevel::Mild,
        HotLevel::Medium,
        HotLevel::Hot,
        HotLevel::Extreme,
    ];

    /// 이 매운맛 단계에 대응하는 `food_levels.id`
    pub fn level_id(self) -> i64 {
        match self {
            HotLevel::Mild => 1,
            HotLevel::Medium => 2,
            HotLevel::Hot => 3,
            HotLevel::Extreme => 4,
        }
    }

    /// `food_levels.id` → 매운맛 단계. 매핑에 없는 id면 None
    pub fn from_level_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.level_id() == id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HotLevel::Mild => "mild",
            HotLevel::Medium => "medium",
            HotLevel::Hot => "hot",
            HotLevel::Extreme => "extreme",
        }
    }
}

/// 문자열 → 매운맛 단계
///
/// 알 수 없는 값은 기본값으로 대체하지 않고 `AppError::BadRequest`로 실패합니다.
impl FromStr for HotLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown hotLevel: {}", s)))
    }
}

/// 목록 정렬 정책
///
/// 어떤 필터 조합이든 동일하게 적용됩니다.
/// 지정하지 않으면(`None`) 등록 순서로 정렬합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodSort {
    /// 이름 오름차순
    Asc,
    /// 이름 내림차순
    Desc,
}

impl FromStr for FoodSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(FoodSort::Asc),
            "desc" => Ok(FoodSort::Desc),
            other => Err(AppError::BadRequest(format!("Unknown sort: {}", other))),
        }
    }
}

/// 음식 목록 쿼리의 한 행 — `foods` 테이블에서 응답에 필요한 컬럼만 읽습니다.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRow {
    pub id: String,
    pub name: String,
    pub sub_name: Option<String>,
    pub image_url: Option<String>,
    pub food_level_id: i64,
}

/// 음식 목록 응답 항목 — `{ id, name, subName, imageUrl, hotLevel }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSummary {
    pub id: String,
    pub name: String,
    pub sub_name: Option<String>,
    pub image_url: Option<String>,
    pub hot_level: Option<HotLevel>,
}

impl From<FoodRow> for FoodSummary {
    fn from(row: FoodRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            sub_name: row.sub_name,
            image_url: row.image_url,
            hot_level: HotLevel::from_level_id(row.food_level_id),
        }
    }
}

/// 퀴즈 문항/레벨 추천에 쓰이는 좁은 투영
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFood {
    pub id: String,
    pub name: String,
    pub sub_name: Option<String>,
    pub image_url: Option<String>,
}

/// 음식 생성 요청 — `POST /foods`의 요청 본문
///
/// 생성에 성공하면 저장된 행이 아니라 이 요청 자체를 돌려줍니다.
/// 그래서 Deserialize와 Serialize를 모두 derive합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodRequest {
    /// 음식 이름 (예: "불닭볶음면")
    pub name: String,
    /// 부가 이름 (예: "까르보")
    pub sub_name: Option<String>,
    /// `food_levels.id`
    pub level: i64,
    /// 카테고리 이름. id가 아닌 고유한 이름으로 찾습니다.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 퀴즈 문항으로 쓰이는 음식인지 여부 (기본값 false)
    #[serde(default)]
    pub is_test: bool,
}

/// `GET /foods?category=&hotLevel=&sort=&size=`의 쿼리 파라미터
///
/// 모든 값을 문자열로 받고, 해석은 `into_search`와 서비스 계층에서 합니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindFoodsQuery {
    pub category: Option<String>,
    pub hot_level: Option<String>,
    pub sort: Option<String>,
    pub size: Option<String>,
}

/// 해석이 끝난 음식 검색 조건
///
/// `hot_level`은 원문 문자열로 남겨 둡니다.
/// 매핑은 서비스 계층에서 쿼리 실행 직전에 수행합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSearch {
    pub category: Option<String>,
    pub hot_level: Option<String>,
    pub sort: Option<FoodSort>,
    pub size: u32,
}

impl Default for FoodSearch {
    fn default() -> Self {
        Self {
            category: None,
            hot_level: None,
            sort: None,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FindFoodsQuery {
    /// 쿼리 파라미터를 검색 조건으로 바꿉니다.
    ///
    /// - 빈 문자열은 값이 없는 것으로 취급합니다 (`?category=` → 필터 없음)
    /// - `size`는 음이 아닌 정수여야 합니다. 상한은 두지 않습니다.
    pub fn into_search(self) -> Result<FoodSearch, AppError> {
        let size = match non_empty(self.size) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::BadRequest(format!("size must be a non-negative integer: {}", raw))
            })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let sort = non_empty(self.sort)
            .map(|raw| raw.parse::<FoodSort>())
            .transpose()?;

        Ok(FoodSearch {
            category: non_empty(self.category),
            hot_level: non_empty(self.hot_level),
            sort,
            size,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
