//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (ArmstrongRecord)
//! - Domain services (the Armstrong classifier)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
