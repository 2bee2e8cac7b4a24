pub mod customer_repo;
pub mod memory_customer_repo;
pub mod mongo_customer_repo;

#[cfg(test)]
pub mod mock_customer_repo;

pub use customer_repo::CustomerRepository;
pub use memory_customer_repo::InMemoryCustomerRepository;
pub use mongo_customer_repo::MongoCustomerRepository;
