//! Customer Entity Implementation
//!
//! 고객 엔티티의 핵심 구현체입니다.
//! 생성과 수정은 모두 검증을 거친 생성자/메서드를 통해서만 가능하며,
//! 영속화된 고객은 항상 다음 불변식을 만족합니다.
//!
//! - `cpf`: 숫자 11자리, 체크섬 유효
//! - `email`: 소문자, 앞뒤 공백 없음, `local@domain.tld` 형태
//! - `name`: 공백 제거 후 비어있지 않음 (저장은 입력 그대로)
//! - `updated_at >= created_at`
//! - 시각은 밀리초 단위 (저장소 정밀도)

use chrono::{DateTime, SubsecRound, Utc};

use crate::core::errors::{AppError, AppResult};
use crate::core::providers::IdGenerator;
use crate::utils::validators::{clean_cpf, is_valid_cpf, is_valid_email, normalize_email};

/// 고객 엔티티
///
/// `id`, `cpf`, `created_at` 은 생성 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: String,
    name: String,
    cpf: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// 고객 부분 수정 요청
///
/// `None` 은 "변경하지 않음", `Some("")` 은 "빈 값으로 변경 시도"(검증 실패)를 의미합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerUpdate {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl Customer {
    /// 새 고객 생성
    ///
    /// 이름 → CPF → 이메일 순서로 검증하며, 첫 번째 실패를 그대로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `NAME_EMPTY` - 이름이 비어있거나 공백뿐인 경우
    /// * `INVALID_CPF` - 정리된 CPF 가 체크섬 검증에 실패한 경우
    /// * `INVALID_EMAIL` - 정규화된 이메일이 형태 검증에 실패한 경우
    pub fn new(
        name: &str,
        cpf: &str,
        email: &str,
        ids: &dyn IdGenerator,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let name = validate_name(name)?;

        let cpf = clean_cpf(cpf);
        if !is_valid_cpf(&cpf) {
            return Err(AppError::invalid_cpf());
        }

        let email = validate_email(email)?;
        let now = now.trunc_subsecs(3);

        Ok(Self {
            id: ids.generate(),
            name,
            cpf,
            email,
            created_at: now,
            updated_at: now,
        })
    }

    /// 저장소에서 읽어온 값으로 엔티티를 복원합니다.
    ///
    /// 저장소 구현 전용입니다. 저장소에는 검증을 통과한 값만 기록되므로
    /// 여기서는 다시 검증하지 않습니다.
    pub fn restore(
        id: String,
        name: String,
        cpf: String,
        email: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            cpf,
            email,
            created_at,
            updated_at,
        }
    }

    /// 이름/이메일 부분 수정
    ///
    /// 모든 필드를 먼저 검증한 뒤 한꺼번에 반영하므로, 실패 시 엔티티는 변경되지 않습니다.
    /// 실제로 값이 바뀐 경우에만 `updated_at` 을 `now` 로 갱신하고 `true` 를 반환합니다.
    pub fn update(&mut self, changes: CustomerUpdate, now: DateTime<Utc>) -> AppResult<bool> {
        let name = changes.name.as_deref().map(validate_name).transpose()?;
        let email = changes.email.as_deref().map(validate_email).transpose()?;

        let mut changed = false;

        if let Some(name) = name {
            if name != self.name {
                self.name = name;
                changed = true;
            }
        }

        if let Some(email) = email {
            if email != self.email {
                self.email = email;
                changed = true;
            }
        }

        if changed {
            self.updated_at = now.trunc_subsecs(3).max(self.created_at);
        }

        Ok(changed)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// 공백뿐인 이름만 거부하고, 값은 입력 그대로 보존합니다.
fn validate_name(name: &str) -> AppResult<String> {
    if name.trim().is_empty() {
        return Err(AppError::name_empty());
    }
    Ok(name.to_string())
}

fn validate_email(email: &str) -> AppResult<String> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        return Err(AppError::invalid_email());
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorCode;
    use crate::core::providers::testing::SequentialIdGenerator;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn new_customer() -> Customer {
        Customer::new(
            "John Doe",
            "111.444.777-35",
            "  John@Example.com ",
            &SequentialIdGenerator::default(),
            t0(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_customer_normalizes_fields() {
        let customer = new_customer();

        assert_eq!(customer.id(), "customer-1");
        assert_eq!(customer.name(), "John Doe");
        assert_eq!(customer.cpf(), "11144477735");
        assert_eq!(customer.email(), "john@example.com");
        assert_eq!(customer.created_at(), t0());
        assert_eq!(customer.updated_at(), t0());
    }

    #[test]
    fn test_new_customer_validation_errors() {
        let ids = SequentialIdGenerator::default();
        let cases = [
            ("", "11144477735", "a@b.com", ErrorCode::NameEmpty),
            ("   ", "11144477735", "a@b.com", ErrorCode::NameEmpty),
            ("A", "not-a-cpf", "a@b.com", ErrorCode::InvalidCpf),
            ("A", "11111111111", "a@b.com", ErrorCode::InvalidCpf),
            ("A", "11144477735", "bad", ErrorCode::InvalidEmail),
        ];

        for (name, cpf, email, expected) in cases {
            let err = Customer::new(name, cpf, email, &ids, t0()).unwrap_err();
            assert_eq!(err.code(), expected, "Customer::new({:?}, {:?}, {:?})", name, cpf, email);
        }
    }

    #[test]
    fn test_name_is_stored_as_given() {
        let customer = Customer::new(
            "  Ana Souza ",
            "52998224725",
            "ana@email.com",
            &SequentialIdGenerator::default(),
            t0(),
        )
        .unwrap();

        assert_eq!(customer.name(), "  Ana Souza ");
    }

    #[test]
    fn test_timestamps_are_truncated_to_milliseconds() {
        let now = t0() + Duration::nanoseconds(123_456_789);
        let mut customer = Customer::new(
            "Ana",
            "52998224725",
            "ana@email.com",
            &SequentialIdGenerator::default(),
            now,
        )
        .unwrap();

        assert_eq!(customer.created_at(), t0() + Duration::milliseconds(123));

        customer
            .update(CustomerUpdate::new(Some("B".to_string()), None), now + Duration::nanoseconds(999_999))
            .unwrap();
        assert_eq!(customer.updated_at(), t0() + Duration::milliseconds(124));
    }

    #[test]
    fn test_name_is_checked_before_cpf() {
        let ids = SequentialIdGenerator::default();
        let err = Customer::new("", "bad", "bad", &ids, t0()).unwrap_err();

        assert_eq!(err.code(), ErrorCode::NameEmpty);
    }

    #[test]
    fn test_update_name_only() {
        let mut customer = new_customer();
        let later = t0() + Duration::minutes(5);

        let changed = customer
            .update(CustomerUpdate::new(Some("B".to_string()), None), later)
            .unwrap();

        assert!(changed);
        assert_eq!(customer.name(), "B");
        assert_eq!(customer.email(), "john@example.com");
        assert_eq!(customer.cpf(), "11144477735");
        assert_eq!(customer.id(), "customer-1");
        assert_eq!(customer.created_at(), t0());
        assert_eq!(customer.updated_at(), later);
    }

    #[test]
    fn test_update_email_is_normalized() {
        let mut customer = new_customer();

        customer
            .update(CustomerUpdate::new(None, Some(" NEW@Example.com".to_string())), t0())
            .unwrap();

        assert_eq!(customer.email(), "new@example.com");
    }

    #[test]
    fn test_update_is_atomic_on_invalid_email() {
        let mut customer = new_customer();
        let before = customer.clone();

        let err = customer
            .update(
                CustomerUpdate::new(Some("Valid Name".to_string()), Some("bad".to_string())),
                t0() + Duration::minutes(1),
            )
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidEmail);
        assert_eq!(customer, before);
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let mut customer = new_customer();
        let before = customer.clone();

        let err = customer
            .update(CustomerUpdate::new(Some("  ".to_string()), None), t0())
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NameEmpty);
        assert_eq!(customer, before);
    }

    #[test]
    fn test_update_without_changes_keeps_updated_at() {
        let mut customer = new_customer();
        let later = t0() + Duration::minutes(5);

        let changed = customer.update(CustomerUpdate::default(), later).unwrap();
        assert!(!changed);

        let changed = customer
            .update(CustomerUpdate::new(Some("John Doe".to_string()), None), later)
            .unwrap();
        assert!(!changed);
        assert_eq!(customer.updated_at(), t0());
    }

    #[test]
    fn test_updated_at_never_precedes_created_at() {
        let mut customer = new_customer();
        let earlier = t0() - Duration::hours(1);

        customer
            .update(CustomerUpdate::new(Some("B".to_string()), None), earlier)
            .unwrap();

        assert!(customer.updated_at() >= customer.created_at());
    }
}
