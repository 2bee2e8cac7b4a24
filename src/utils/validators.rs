//! CPF / 이메일 검증 유틸리티
//!
//! 부작용 없는 순수 함수들입니다. 엔티티 생성/수정과 CPF 조회 유스케이스가
//! 공통으로 사용합니다.
//!
//! # Examples
//!
//! ```
//! use customer_service_backend::utils::validators::{clean_cpf, is_valid_cpf, is_valid_email};
//!
//! assert_eq!(clean_cpf("111.444.777-35"), "11144477735");
//! assert!(is_valid_cpf("11144477735"));
//! assert!(is_valid_email("john@example.com"));
//! ```

/// CPF 에서 숫자가 아닌 모든 문자를 제거합니다.
///
/// 순서를 바꾸거나 길이를 자르지 않습니다.
pub fn clean_cpf(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// 브라질 CPF 체크섬 검증
///
/// 입력은 정리 후의 값으로 판단합니다.
///
/// 1. 정확히 11자리여야 함
/// 2. 모든 자리가 같은 숫자면 거부 (`00000000000` 등)
/// 3. 첫 번째 검증 숫자: 0..=8 자리에 가중치 `10 - i`
/// 4. 두 번째 검증 숫자: 0..=9 자리에 가중치 `11 - i`
///
/// 두 검증 숫자 모두 `sum % 11 < 2` 이면 0, 아니면 `11 - (sum % 11)` 입니다.
pub fn is_valid_cpf(candidate: &str) -> bool {
    let digits: Vec<u32> = clean_cpf(candidate)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 11 {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

/// 이메일 형태 검증
///
/// `local@domain.tld` 형태만 확인합니다. RFC 5321 검증기가 아닙니다.
///
/// - `@` 는 정확히 하나
/// - 로컬 파트와 도메인 파트에 ASCII 공백(`\t \n \x0C \r` 및 스페이스)/`@` 없음
/// - 도메인에 앞뒤가 비어있지 않은 `.` 이 하나 이상 있음
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.chars().any(|c| c.is_ascii_whitespace()) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// 이메일 정규화: 앞뒤 공백 제거 후 소문자 변환
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
