//! 데모 고객 데이터 시딩
//!
//! `customer_service_backend seed` 명령으로 실행됩니다.
//! 이미 같은 CPF 의 고객이 있으면 건너뛰고, 개별 레코드 실패는 로그만 남기고 계속 진행합니다.

use log::{error, info};

use crate::core::providers::{Clock, IdGenerator};
use crate::domain::entities::customers::Customer;
use crate::repositories::customers::CustomerRepository;

/// (이름, CPF, 이메일)
pub const SEED_CUSTOMERS: [(&str, &str, &str); 3] = [
    ("Ana Souza", "52998224725", "ana.souza@email.com"),
    ("Carlos Mendes", "11144477735", "carlos.mendes@email.com"),
    ("Beatriz Lima", "98765432100", "beatriz.lima@email.com"),
];

/// 시드 고객을 저장하고 새로 생성된 고객 수를 반환합니다.
pub async fn run_seed(
    repo: &dyn CustomerRepository,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
) -> usize {
    info!("🌱 데이터베이스 시딩 시작...");

    let mut created = 0;
    for (name, cpf, email) in SEED_CUSTOMERS {
        match repo.find_by_cpf(cpf).await {
            Ok(Some(_)) => {
                info!("CPF {} 고객이 이미 존재하여 건너뜀", cpf);
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                error!("고객 {} 조회 실패: {}", name, e);
                continue;
            }
        }

        let customer = match Customer::new(name, cpf, email, ids, clock.now()) {
            Ok(customer) => customer,
            Err(e) => {
                error!("고객 {} 생성 실패: {}", name, e);
                continue;
            }
        };

        if let Err(e) = repo.create(&customer).await {
            error!("고객 {} 저장 실패: {}", name, e);
            continue;
        }

        info!("시드 고객 저장 완료: {} (CPF: {})", name, cpf);
        created += 1;
    }

    info!("🌱 시딩 완료. {}명의 고객 생성", created);
    created
}
