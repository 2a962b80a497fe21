//! # 무작위 샘플링 유틸리티
//!
//! 퀴즈 문항과 레벨별 추천 음식을 고를 때 사용합니다.
//! DB의 `ORDER BY RANDOM()` 대신, 조건에 맞는 id 목록을 먼저 가져온 뒤
//! 애플리케이션에서 균등하게 k개를 뽑습니다.

use rand_core::RngCore;

/// `items`에서 중복 없이 최대 `k`개를 균등한 확률로 뽑습니다.
///
/// 부분 피셔-예이츠(Fisher–Yates) 셔플을 앞의 `k`칸까지만 수행합니다.
/// 뽑힌 순서 자체도 무작위입니다.
///
/// # 예시
/// ```text
/// sample(&mut OsRng, vec![a, b, c, d], 2) → [c, a] (매번 다름)
/// sample(&mut OsRng, vec![a], 3)          → [a]
/// ```
pub fn sample<T, R: RngCore>(rng: &mut R, mut items: Vec<T>, k: usize) -> Vec<T> {
    let k = k.min(items.len());

    for i in 0..k {
        let j = i + uniform_index(rng, items.len() - i);
        items.swap(i, j);
    }

    items.truncate(k);
    items
}

/// `0..bound` 범위의 균등한 난수 (`bound > 0`)
///
/// `next_u64() % bound`만 쓰면 작은 값이 더 자주 나오므로,
/// `bound`의 배수 범위를 벗어난 값은 버리고 다시 뽑습니다.
fn uniform_index<R: RngCore>(rng: &mut R, bound: usize) -> usize {
    let bound = bound as u64;
    let zone = u64::MAX - (u64::MAX % bound);

    loop {
        let value = rng.next_u64();
        if value < zone {
            return (value % bound) as usize;
        }
    }
}
