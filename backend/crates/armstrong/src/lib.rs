//! Armstrong Number Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Classifier, record entity, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every route is behind the `auth` access gate. A number is persisted only
//! when it is an Armstrong number; other submissions leave no trace.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::services::is_armstrong;
pub use error::{ArmstrongError, ArmstrongResult};
pub use infra::{memory::InMemoryArmstrongRepository, postgres::PgArmstrongRepository};
pub use presentation::router::{armstrong_router, armstrong_router_generic};

#[cfg(test)]
mod tests;
