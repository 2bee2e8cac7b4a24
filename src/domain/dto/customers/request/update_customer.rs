//! 고객 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::customers::CustomerUpdate;

/// 고객 부분 수정 요청 DTO
///
/// 생략된 필드(또는 `null`)는 변경하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 254, message = "email must be at most 254 characters"))]
    pub email: Option<String>,
}

impl From<UpdateCustomerRequest> for CustomerUpdate {
    fn from(request: UpdateCustomerRequest) -> Self {
        CustomerUpdate::new(request.name, request.email)
    }
}
