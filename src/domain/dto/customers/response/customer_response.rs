use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::customers::Customer;

/// 고객 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            cpf: customer.cpf().to_string(),
            email: customer.email().to_string(),
            created_at: customer.created_at(),
            updated_at: customer.updated_at(),
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self::from(&customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serializes_camel_case() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let customer = Customer::restore(
            "id-1".to_string(),
            "Ana Souza".to_string(),
            "52998224725".to_string(),
            "ana.souza@email.com".to_string(),
            at,
            at,
        );

        let json = serde_json::to_value(CustomerResponse::from(customer)).unwrap();

        assert_eq!(json["id"], "id-1");
        assert_eq!(json["cpf"], "52998224725");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert_eq!(json["updatedAt"], "2024-01-01T00:00:00Z");
    }
}
