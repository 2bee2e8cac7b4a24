//! 고객 유스케이스 모듈
//!
//! 각 유스케이스는 엔티티 생성/수정과 리포지토리 호출을 순서대로 조합하며,
//! 한 단계가 실패하면 나머지 단계를 건너뛰고 에러를 그대로 반환합니다.
//! 자동 재시도는 하지 않습니다.
//!
//! | 유스케이스 | 저장소 호출 |
//! |------------|-------------|
//! | [`CreateCustomerUseCase`] | `find_by_cpf_or_email` → `create` |
//! | [`GetCustomerByCpfUseCase`] | `find_by_cpf` |
//! | [`UpdateCustomerUseCase`] | `find_by_id` → `update` |
//! | [`DeleteCustomerUseCase`] | `find_by_id` → `delete` |

pub mod create_customer;
pub mod delete_customer;
pub mod get_customer_by_cpf;
pub mod update_customer;

pub use create_customer::CreateCustomerUseCase;
pub use delete_customer::DeleteCustomerUseCase;
pub use get_customer_by_cpf::GetCustomerByCpfUseCase;
pub use update_customer::UpdateCustomerUseCase;
