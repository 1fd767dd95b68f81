//! Activity module: three-layer architecture (domain, repository, service),
//! with validation as its own step in front of every write.

pub mod domain;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::ActivityService;
pub use validation::Validator;
