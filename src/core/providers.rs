//! 외부 의존성 공급자
//!
//! 엔티티 생성 시 필요한 ID 생성기와 시계를 trait 으로 분리하여
//! 유스케이스에 주입합니다. 테스트에서는 고정된 구현으로 교체하여
//! 생성/수정 결과를 결정적으로 만들 수 있습니다.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// 고유 식별자 생성기
pub trait IdGenerator: Send + Sync {
    /// 재사용되지 않는 새 식별자를 반환합니다.
    fn generate(&self) -> String;
}

/// 랜덤 UUID(v4) 기반 식별자 생성기
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// 현재 시각 공급자
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
///
/// 저장소(BSON datetime) 정밀도에 맞춰 밀리초 단위로 절사합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}
