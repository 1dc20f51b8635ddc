//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies derive `Deserialize` + `Validate`; response bodies derive
//! `Serialize` and never carry password material.

pub mod health;
pub mod pagination;
pub mod product;
pub mod user;
