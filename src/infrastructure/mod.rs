//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`persistence`] - SQLite connection pool, migrations and repositories
//! - [`jwt`] - Bearer token signing and verification

pub mod jwt;
pub mod persistence;
