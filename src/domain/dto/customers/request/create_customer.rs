//! 고객 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 고객 생성을 위한 요청 DTO
///
/// 세 필드 모두 필수입니다. 빈 값에 대한 판단은 엔티티가 담당하므로
/// 여기서는 상한 길이만 제한합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    /// 고객 이름
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: String,

    /// CPF (구두점 포함 가능, 예: `111.444.777-35`)
    #[validate(length(max = 32, message = "cpf must be at most 32 characters"))]
    pub cpf: String,

    /// 이메일 주소
    #[validate(length(max = 254, message = "email must be at most 254 characters"))]
    pub email: String,
}
